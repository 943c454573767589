use js_sys::{Float32Array, Object, Reflect, Uint32Array};
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }

pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}

pub fn arr_u32(slice: &[u32]) -> Uint32Array {
    let arr = Uint32Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}

pub fn arr_f32(slice: &[f32]) -> Float32Array {
    let arr = Float32Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}

/// `None` maps to `null` so renderers can test with `=== null`.
pub fn opt_u32(v: Option<u32>) -> JsValue {
    v.map_or(JsValue::NULL, |id| JsValue::from_f64(id as f64))
}

/// `{ grid, canvas }`: flat `[x0, y0, x1, y1, ...]` positions of every point,
/// in grid cells and in canvas pixels.
pub fn points_object(graph: &gridsketch::Graph, view: &gridsketch::GridView) -> Object {
    let grid = graph.get_point_arrays();
    let canvas: Vec<f32> = graph
        .points()
        .iter()
        .flat_map(|p| {
            let s = view.grid_to_canvas(*p);
            [s.x, s.y]
        })
        .collect();
    let obj = new_obj();
    set_kv(&obj, "grid", &arr_f32(&grid).into());
    set_kv(&obj, "canvas", &arr_f32(&canvas).into());
    obj
}

/// `{ endpoints }`: flat `[p1, p2, ...]` point indices of every line.
pub fn lines_object(graph: &gridsketch::Graph) -> Object {
    let obj = new_obj();
    set_kv(&obj, "endpoints", &arr_u32(&graph.get_line_arrays()).into());
    obj
}
