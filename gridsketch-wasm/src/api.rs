use crate::Editor;
use gridsketch::geometry::tolerance::round_half_up;
use gridsketch::{Config, Point, PointerButton, PointerEvent, ScreenPos};
use wasm_bindgen::prelude::*;
use crate::error;
use crate::interop;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Direct edits land on whole cells, like points placed by the pointer.
fn cell(x: f32, y: f32) -> Point {
    Point::new(round_half_up(x), round_half_up(y))
}

fn event(x: f32, y: f32, button: i16, time_ms: f64) -> PointerEvent {
    PointerEvent::new(ScreenPos::new(x, y), PointerButton::from_dom(button), time_ms)
}

#[wasm_bindgen]
impl Editor {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Editor {
        crate::Editor::rs_new(width, height)
    }

    /// Builds an editor from a partial `{ editor: {...}, view: {...} }` object.
    pub fn with_config(width: f32, height: f32, config: JsValue) -> Result<Editor, JsValue> {
        let cfg: Config = if config.is_undefined() || config.is_null() {
            Config::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| error::invalid_config(e.to_string()))?
        };
        if !cfg.is_valid() {
            return Err(error::invalid_config("thresholds must be finite and the grid step within [min_step, max_step]"));
        }
        Ok(crate::Editor::rs_with_config(width, height, cfg))
    }

    pub fn geom_version(&self) -> u64 {
        self.inner.graph().geom_version()
    }

    // Viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.view.resize(width, height);
    }
    pub fn wheel(&mut self, x: f32, y: f32, delta_y: f32) {
        self.view.zoom_at(ScreenPos::new(x, y), delta_y < 0.0);
    }
    pub fn grid_step(&self) -> f32 {
        self.view.step()
    }
    /// `[x, y]` of the first grid lines inside the canvas.
    pub fn grid_origin(&self) -> Vec<f32> {
        let (x, y) = self.view.grid_origin();
        vec![x, y]
    }
    pub fn grid_to_canvas(&self, x: f32, y: f32) -> Vec<f32> {
        let s = self.view.grid_to_canvas(Point::new(x, y));
        vec![s.x, s.y]
    }
    pub fn point_radius(&self) -> f32 {
        self.view.point_radius()
    }
    pub fn phantom_radius(&self) -> f32 {
        self.view.phantom_radius()
    }

    // Pointer input
    pub fn pointer_down(&mut self, x: f32, y: f32, button: i16, time_ms: f64) {
        self.inner.pointer_down(&self.view, event(x, y, button, time_ms));
    }
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.inner.pointer_move(&mut self.view, ScreenPos::new(x, y));
    }
    pub fn pointer_up(&mut self, x: f32, y: f32, button: i16, time_ms: f64) {
        self.inner.pointer_up(&self.view, event(x, y, button, time_ms));
    }
    pub fn pointer_cancel(&mut self) {
        self.inner.pointer_cancel();
    }
    pub fn context_menu(&mut self) {
        self.inner.context_menu();
    }

    // Render queries
    pub fn frame(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.frame(&self.view)).unwrap_or(JsValue::NULL)
    }
    /// `"idle"`, `"dragging_point"` or `"panning"`.
    pub fn drag_mode(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.drag_mode()).unwrap_or(JsValue::NULL)
    }
    pub fn draw_point(&self) -> JsValue {
        interop::opt_u32(self.inner.draw_point())
    }
    pub fn hovered_point(&self) -> JsValue {
        interop::opt_u32(self.inner.hovered_point(&self.view))
    }
    pub fn hovered_line(&self) -> JsValue {
        interop::opt_u32(self.inner.hovered_line(&self.view))
    }
    pub fn get_point_data(&self) -> JsValue {
        interop::points_object(self.inner.graph(), &self.view).into()
    }
    pub fn get_line_data(&self) -> JsValue {
        interop::lines_object(self.inner.graph()).into()
    }
    pub fn point_count(&self) -> u32 {
        self.inner.graph().point_count()
    }
    pub fn line_count(&self) -> u32 {
        self.inner.graph().line_count()
    }

    // Direct edits
    pub fn add_point_res(&mut self, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        match self.inner.edit(|g| g.add_point(cell(x, y))) {
            Some(id) => error::ok(JsValue::from_f64(id as f64)),
            None => error::duplicate("point"),
        }
    }
    pub fn move_point_res(&mut self, id: u32, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        if self.inner.graph().point(id).is_none() {
            return error::invalid_id("point", id);
        }
        error::ok(JsValue::from_bool(self.inner.edit(|g| g.move_point(id, cell(x, y)))))
    }
    pub fn delete_point_res(&mut self, id: u32) -> JsValue {
        if self.inner.graph().point(id).is_none() {
            return error::invalid_id("point", id);
        }
        error::ok(JsValue::from_bool(self.inner.edit(|g| g.delete_point(id))))
    }
    pub fn merge_points_res(&mut self, id: u32) -> JsValue {
        if self.inner.graph().point(id).is_none() {
            return error::invalid_id("point", id);
        }
        let survivor = self.inner.edit(|g| g.merge_points(id)).map(|m| m.survivor);
        error::ok(interop::opt_u32(survivor))
    }
    pub fn add_line_res(&mut self, a: u32, b: u32) -> JsValue {
        if self.inner.graph().point(a).is_none() {
            return error::invalid_id("point", a);
        }
        if self.inner.graph().point(b).is_none() {
            return error::invalid_id("point", b);
        }
        if a == b {
            return error::self_loop(a);
        }
        match self.inner.edit(|g| g.add_line(a, b)) {
            Some(id) => error::ok(JsValue::from_f64(id as f64)),
            None => error::duplicate("line"),
        }
    }
    pub fn split_line_res(&mut self, line: u32, point: u32) -> JsValue {
        let Some(l) = self.inner.graph().line(line) else {
            return error::invalid_id("line", line);
        };
        if self.inner.graph().point(point).is_none() {
            return error::invalid_id("point", point);
        }
        if l.touches(point) {
            return error::self_loop(point);
        }
        error::ok(JsValue::from_bool(self.inner.edit(|g| g.split_line(line, point))))
    }
    pub fn clear(&mut self) {
        self.inner.reset();
    }
}
