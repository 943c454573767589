use serde::{Deserialize, Serialize};

/// A vertex in grid space. Coordinates produced by the viewport are whole cells.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// Undirected segment between two point indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub p1: u32,
    pub p2: u32,
}

impl Line {
    pub const fn new(p1: u32, p2: u32) -> Self {
        Line { p1, p2 }
    }

    /// True when this line joins `a` and `b` in either direction.
    #[inline]
    pub fn connects(&self, a: u32, b: u32) -> bool {
        (self.p1 == a && self.p2 == b) || (self.p1 == b && self.p2 == a)
    }

    #[inline]
    pub fn touches(&self, id: u32) -> bool {
        self.p1 == id || self.p2 == id
    }

    /// Endpoint opposite to `id`. Caller guarantees `touches(id)`.
    #[inline]
    pub fn other(&self, id: u32) -> u32 {
        if self.p1 == id { self.p2 } else { self.p1 }
    }

    /// Order-independent key used for duplicate sweeps.
    #[inline]
    pub fn key(&self) -> (u32, u32) {
        if self.p1 <= self.p2 { (self.p1, self.p2) } else { (self.p2, self.p1) }
    }
}

/// Pointer position in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenPos {
    pub x: f32,
    pub y: f32,
}

impl ScreenPos {
    pub const fn new(x: f32, y: f32) -> Self {
        ScreenPos { x, y }
    }
}
