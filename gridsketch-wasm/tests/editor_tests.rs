#![cfg(target_arch = "wasm32")]

use gridsketch_wasm::Editor;
use js_sys::{Float32Array, Object, Reflect, Uint32Array};
use serde::Deserialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_err(v: &JsValue, code: &str) -> bool {
    if let Ok(ok) =
        Reflect::get(v, &JsValue::from_str("ok")).and_then(|x| x.as_bool().ok_or(JsValue::NULL))
    {
        if ok {
            return false;
        }
        if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
            if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
                return c.as_string().map_or(false, |s| s == code);
            }
        }
    }
    false
}

fn ok_value(v: &JsValue) -> JsValue {
    assert_eq!(Reflect::get(v, &JsValue::from_str("ok")).unwrap().as_bool(), Some(true));
    Reflect::get(v, &JsValue::from_str("value")).unwrap()
}

// 800x600 canvas at 40px per cell: grid (x, y) is at (400 + 40x, 300 + 40y)
fn click(ed: &mut Editor, x: f32, y: f32, t: f64) {
    let (sx, sy) = (400.0 + 40.0 * x, 300.0 + 40.0 * y);
    ed.pointer_down(sx, sy, 0, t);
    ed.pointer_up(sx, sy, 0, t + 30.0);
}

#[derive(Deserialize)]
struct Frame {
    hovered_line: Option<u32>,
    draw_point: Option<u32>,
    drag_mode: String,
}

#[wasm_bindgen_test]
fn clicks_build_a_polyline() {
    let mut ed = Editor::new(800.0, 600.0);
    click(&mut ed, 0.0, 0.0, 0.0);
    click(&mut ed, 2.0, 0.0, 1000.0);
    click(&mut ed, 2.0, 2.0, 2000.0);
    assert_eq!(ed.point_count(), 3);
    assert_eq!(ed.line_count(), 2);

    let pd = ed.get_point_data();
    let grid = Float32Array::new(&Reflect::get(&pd, &JsValue::from_str("grid")).unwrap());
    let canvas = Float32Array::new(&Reflect::get(&pd, &JsValue::from_str("canvas")).unwrap());
    assert_eq!(grid.to_vec(), vec![0.0, 0.0, 2.0, 0.0, 2.0, 2.0]);
    assert_eq!(canvas.to_vec(), vec![400.0, 300.0, 480.0, 300.0, 480.0, 380.0]);

    let ld = ed.get_line_data();
    let ep = Uint32Array::new(&Reflect::get(&ld, &JsValue::from_str("endpoints")).unwrap());
    assert_eq!(ep.to_vec(), vec![0, 1, 1, 2]);

    ed.pointer_move(440.0, 300.0);
    let f: Frame = serde_wasm_bindgen::from_value(ed.frame()).unwrap();
    assert_eq!(f.hovered_line, Some(0));
    assert_eq!(f.draw_point, Some(2));
    assert_eq!(f.drag_mode, "idle");

    ed.context_menu();
    assert!(ed.draw_point().is_null());
}

#[wasm_bindgen_test]
fn secondary_button_and_pan() {
    let mut ed = Editor::new(800.0, 600.0);
    ed.pointer_down(100.0, 100.0, 2, 0.0);
    ed.pointer_up(100.0, 100.0, 2, 10.0);
    assert_eq!(ed.point_count(), 0);

    ed.pointer_down(100.0, 100.0, 0, 100.0);
    ed.pointer_move(120.0, 100.0);
    assert_eq!(ed.drag_mode().as_string().as_deref(), Some("panning"));
    ed.pointer_move(140.0, 100.0);
    ed.pointer_up(140.0, 100.0, 0, 300.0);
    assert_eq!(ed.point_count(), 0);
    assert_eq!(ed.grid_to_canvas(0.0, 0.0), vec![440.0, 300.0]);
}

#[wasm_bindgen_test]
fn wheel_zoom_is_clamped() {
    let mut ed = Editor::new(800.0, 600.0);
    for _ in 0..40 {
        ed.wheel(400.0, 300.0, -1.0);
    }
    assert_eq!(ed.grid_step(), 100.0);
    assert_eq!(ed.point_radius(), 6.0);
}

#[wasm_bindgen_test]
fn direct_edits_return_typed_results() {
    let mut ed = Editor::new(800.0, 600.0);
    let ver = ed.geom_version();
    assert!(is_err(&ed.move_point_res(3, 0.0, 0.0), "invalid_id"));
    assert!(is_err(&ed.add_point_res(f32::NAN, 0.0), "non_finite"));
    assert_eq!(ed.geom_version(), ver, "state mutated on error");

    assert_eq!(ok_value(&ed.add_point_res(0.0, 0.0)).as_f64(), Some(0.0));
    assert!(is_err(&ed.add_point_res(0.0, 0.0), "duplicate"));
    assert_eq!(ok_value(&ed.add_point_res(4.0, 0.0)).as_f64(), Some(1.0));
    assert_eq!(ok_value(&ed.add_point_res(2.0, 0.0)).as_f64(), Some(2.0));

    assert!(is_err(&ed.add_line_res(0, 0), "self_loop"));
    assert_eq!(ok_value(&ed.add_line_res(0, 1)).as_f64(), Some(0.0));
    assert!(is_err(&ed.add_line_res(1, 0), "duplicate"));
    assert!(is_err(&ed.split_line_res(0, 1), "self_loop"));
    assert!(is_err(&ed.split_line_res(5, 2), "invalid_id"));
    assert_eq!(ok_value(&ed.split_line_res(0, 2)).as_bool(), Some(true));
    assert_eq!(ed.line_count(), 2);

    assert_eq!(ok_value(&ed.delete_point_res(2)).as_bool(), Some(true));
    assert_eq!(ed.point_count(), 2);
    assert_eq!(ed.line_count(), 1);
    assert!(ok_value(&ed.merge_points_res(0)).is_null());

    ed.clear();
    assert_eq!(ed.point_count(), 0);
}

#[wasm_bindgen_test]
fn direct_edits_snap_to_cells() {
    let mut ed = Editor::new(800.0, 600.0);
    assert_eq!(ok_value(&ed.add_point_res(0.5, 0.5)).as_f64(), Some(0.0));
    assert!(is_err(&ed.add_point_res(1.2, 0.8), "duplicate"));
    ok_value(&ed.move_point_res(0, -0.5, 2.4));

    let pd = ed.get_point_data();
    let grid = Float32Array::new(&Reflect::get(&pd, &JsValue::from_str("grid")).unwrap());
    assert_eq!(grid.to_vec(), vec![0.0, 2.0]);

    // the moved point is reachable from the pointer like any other
    ed.pointer_move(400.0, 380.0);
    assert_eq!(ed.hovered_point().as_f64(), Some(0.0));
    assert!(ed.hovered_line().is_null());
    click(&mut ed, 0.0, 2.0, 0.0);
    assert_eq!(ed.point_count(), 1);
    assert_eq!(ed.draw_point().as_f64(), Some(0.0));
}

#[wasm_bindgen_test]
fn config_object_overrides_thresholds() {
    let view = Object::new();
    Reflect::set(&view, &JsValue::from_str("grid_step"), &JsValue::from_f64(20.0)).unwrap();
    let cfg = Object::new();
    Reflect::set(&cfg, &JsValue::from_str("view"), &view).unwrap();
    let ed = Editor::with_config(800.0, 600.0, cfg.into()).unwrap();
    assert_eq!(ed.grid_step(), 20.0);

    let bad_view = Object::new();
    Reflect::set(&bad_view, &JsValue::from_str("grid_step"), &JsValue::from_f64(500.0)).unwrap();
    let bad = Object::new();
    Reflect::set(&bad, &JsValue::from_str("view"), &bad_view).unwrap();
    let e = Editor::with_config(800.0, 600.0, bad.into()).err().unwrap();
    let code = Reflect::get(&Reflect::get(&e, &JsValue::from_str("error")).unwrap(), &JsValue::from_str("code")).unwrap();
    assert_eq!(code.as_string().as_deref(), Some("invalid_config"));
}
