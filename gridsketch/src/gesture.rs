//! Pointer gesture state.
//!
//! A press is not classified until the pointer has travelled past the drag
//! tolerance; until then the gesture stays `Idle` with the press recorded, so a
//! release is treated as a tap.

use serde::Serialize;

use crate::model::{Point, ScreenPos};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other,
}

impl PointerButton {
    /// Maps a DOM `MouseEvent.button` value.
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => PointerButton::Primary,
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            _ => PointerButton::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub pos: ScreenPos,
    pub button: PointerButton,
    /// Wall-clock milliseconds; only differences between releases matter.
    pub time_ms: f64,
}

impl PointerEvent {
    pub fn new(pos: ScreenPos, button: PointerButton, time_ms: f64) -> Self {
        PointerEvent { pos, button, time_ms }
    }

    pub fn primary(pos: ScreenPos, time_ms: f64) -> Self {
        Self::new(pos, PointerButton::Primary, time_ms)
    }
}

/// Where the primary button went down and which point, if any, was under it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Press {
    pub at: ScreenPos,
    pub point: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// No drag in progress. `draw` is the origin of the line being sketched.
    Idle { press: Option<Press>, draw: Option<u32> },
    /// A point follows the cursor; `origin` is where it started.
    DraggingPoint { point: u32, origin: Point },
    /// The view follows the cursor. The sketch origin is kept across the pan.
    Panning { last: ScreenPos, draw: Option<u32> },
}

impl Default for Gesture {
    fn default() -> Self {
        Gesture::Idle { press: None, draw: None }
    }
}

/// Coarse mode for cursor affordances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragMode {
    Idle,
    DraggingPoint,
    Panning,
}

impl Gesture {
    pub fn mode(&self) -> DragMode {
        match self {
            Gesture::Idle { .. } => DragMode::Idle,
            Gesture::DraggingPoint { .. } => DragMode::DraggingPoint,
            Gesture::Panning { .. } => DragMode::Panning,
        }
    }

    pub fn draw_point(&self) -> Option<u32> {
        match *self {
            Gesture::Idle { draw, .. } | Gesture::Panning { draw, .. } => draw,
            Gesture::DraggingPoint { .. } => None,
        }
    }

    pub fn press(&self) -> Option<Press> {
        match *self {
            Gesture::Idle { press, .. } => press,
            _ => None,
        }
    }

    /// The point under the pointer since the press (pressed or dragged).
    /// It never hovers itself.
    pub fn held_point(&self) -> Option<u32> {
        match *self {
            Gesture::Idle { press, .. } => press.and_then(|p| p.point),
            Gesture::DraggingPoint { point, .. } => Some(point),
            Gesture::Panning { .. } => None,
        }
    }
}
