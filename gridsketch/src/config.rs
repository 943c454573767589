use serde::{Deserialize, Serialize};

use crate::geometry::tolerance::{
    DOUBLE_CLICK_MS, DRAG_TOLERANCE_PX, GRID_STEP, MAX_GRID_STEP, MIN_GRID_STEP, ZOOM_IN_FACTOR,
    ZOOM_OUT_FACTOR,
};

/// Gesture thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Pointer travel (px) after which a press turns into a drag or a pan.
    pub drag_tolerance_px: f32,
    /// Two releases closer than this (ms) count as a double click.
    pub double_click_ms: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig { drag_tolerance_px: DRAG_TOLERANCE_PX, double_click_ms: DOUBLE_CLICK_MS }
    }
}

/// Grid scale and zoom behaviour of [`crate::GridView`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub grid_step: f32,
    pub min_step: f32,
    pub max_step: f32,
    pub zoom_in_factor: f32,
    pub zoom_out_factor: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            grid_step: GRID_STEP,
            min_step: MIN_GRID_STEP,
            max_step: MAX_GRID_STEP,
            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub editor: EditorConfig,
    pub view: ViewConfig,
}

impl Config {
    /// Parses a JSON document; missing fields keep their defaults.
    pub fn from_json_str(s: &str) -> Result<Config, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn is_valid(&self) -> bool {
        let e = &self.editor;
        let v = &self.view;
        e.drag_tolerance_px.is_finite()
            && e.drag_tolerance_px >= 0.0
            && e.double_click_ms.is_finite()
            && e.double_click_ms >= 0.0
            && v.min_step.is_finite()
            && v.max_step.is_finite()
            && v.min_step > 0.0
            && v.min_step <= v.max_step
            && v.grid_step >= v.min_step
            && v.grid_step <= v.max_step
            && v.zoom_in_factor.is_finite()
            && v.zoom_in_factor > 0.0
            && v.zoom_out_factor.is_finite()
            && v.zoom_out_factor > 0.0
    }
}
