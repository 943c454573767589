// Hit-testing and gesture thresholds. Grid values are in cells, screen values in pixels.

pub const LINE_HOVER_DIST: f32 = 0.2;     // max perpendicular distance to count as over a line (grid)
pub const ENDPOINT_CLEARANCE: f32 = 0.5;  // min distance from both endpoints for a line hover (grid)

pub const DRAG_TOLERANCE_PX: f32 = 5.0;   // movement before a press becomes a drag or pan
pub const DOUBLE_CLICK_MS: f64 = 300.0;   // max gap between two releases

// Viewport
pub const GRID_STEP: f32 = 40.0;          // pixels per cell at startup
pub const MIN_GRID_STEP: f32 = 10.0;
pub const MAX_GRID_STEP: f32 = 100.0;
pub const ZOOM_IN_FACTOR: f32 = 1.15;
pub const ZOOM_OUT_FACTOR: f32 = 0.85;

#[inline] pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 { x.max(lo).min(hi) }

/// Half-up rounding (`-0.5` goes to `0`), so cell boundaries behave the same on both sides of the origin.
#[inline] pub fn round_half_up(x: f32) -> f32 { (x + 0.5).floor() }
