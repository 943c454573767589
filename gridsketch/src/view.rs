use crate::config::ViewConfig;
use crate::geometry::tolerance::{clamp, round_half_up};
use crate::model::{Point, ScreenPos};

/// Screen/grid transform the editor talks to. Pan and zoom state belong to the implementor.
pub trait Viewport {
    /// Grid cell under a screen position.
    fn grid_position(&self, screen: ScreenPos) -> Point;
    /// Shifts the view by a screen-space delta.
    fn pan_by(&mut self, dx: f32, dy: f32);
}

/// Canvas-backed viewport: grid origin at the canvas centre, offset by `pan`,
/// `step` pixels per cell.
#[derive(Clone, Debug)]
pub struct GridView {
    width: f32,
    height: f32,
    step: f32,
    pan_x: f32,
    pan_y: f32,
    cfg: ViewConfig,
}

impl GridView {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_config(width, height, ViewConfig::default())
    }

    pub fn with_config(width: f32, height: f32, cfg: ViewConfig) -> Self {
        GridView { width, height, step: cfg.grid_step, pan_x: 0.0, pan_y: 0.0, cfg }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (f32, f32) { (self.width, self.height) }
    pub fn step(&self) -> f32 { self.step }
    pub fn pan(&self) -> (f32, f32) { (self.pan_x, self.pan_y) }

    /// Unrounded grid coordinates of a screen position.
    pub fn grid_coords(&self, s: ScreenPos) -> (f32, f32) {
        (
            (s.x - self.width / 2.0 - self.pan_x) / self.step,
            (s.y - self.height / 2.0 - self.pan_y) / self.step,
        )
    }

    pub fn canvas_to_grid(&self, s: ScreenPos) -> Point {
        let (gx, gy) = self.grid_coords(s);
        Point::new(round_half_up(gx), round_half_up(gy))
    }

    pub fn grid_to_canvas(&self, p: Point) -> ScreenPos {
        ScreenPos::new(
            self.width / 2.0 + p.x * self.step + self.pan_x,
            self.height / 2.0 + p.y * self.step + self.pan_y,
        )
    }

    /// Wheel zoom anchored at `s`: the grid location under the cursor stays put.
    pub fn zoom_at(&mut self, s: ScreenPos, zoom_in: bool) {
        let factor = if zoom_in { self.cfg.zoom_in_factor } else { self.cfg.zoom_out_factor };
        let old = self.step;
        self.step = clamp(old * factor, self.cfg.min_step, self.cfg.max_step);
        let k = self.step / old - 1.0;
        self.pan_x -= (s.x - self.width / 2.0 - self.pan_x) * k;
        self.pan_y -= (s.y - self.height / 2.0 - self.pan_y) * k;
    }

    /// Screen origin of the grid lines nearest the top-left corner.
    pub fn grid_origin(&self) -> (f32, f32) {
        (
            (self.width / 2.0 + self.pan_x).rem_euclid(self.step),
            (self.height / 2.0 + self.pan_y).rem_euclid(self.step),
        )
    }

    pub fn point_radius(&self) -> f32 { clamp(self.step / 7.0, 1.0, 6.0) }
    pub fn phantom_radius(&self) -> f32 { clamp(self.step / 8.0, 1.0, 5.0) }
}

impl Viewport for GridView {
    fn grid_position(&self, screen: ScreenPos) -> Point {
        self.canvas_to_grid(screen)
    }

    fn pan_by(&mut self, dx: f32, dy: f32) {
        self.pan_x += dx;
        self.pan_y += dy;
    }
}
