use crate::model::{Point, ScreenPos};

#[inline]
pub fn dist(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    (x2 - x1).hypot(y2 - y1)
}

/// Distance from `(px,py)` to the segment `(x1,y1)-(x2,y2)`. Infinite when the
/// projection falls outside the segment or the segment has zero length.
pub fn seg_distance(px: f32, py: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let vx = x2 - x1; let vy = y2 - y1;
    let vv = vx*vx + vy*vy;
    if vv == 0.0 { return f32::INFINITY; }
    let t = ((px - x1)*vx + (py - y1)*vy) / vv;
    if !(0.0..=1.0).contains(&t) { return f32::INFINITY; }
    dist(px, py, x1 + t*vx, y1 + t*vy)
}

#[inline]
pub fn distance(a: Point, b: Point) -> f32 {
    dist(a.x, a.y, b.x, b.y)
}

#[inline]
pub fn point_to_segment_distance(p: Point, a: Point, b: Point) -> f32 {
    seg_distance(p.x, p.y, a.x, a.y, b.x, b.y)
}

#[inline]
pub fn screen_distance(a: ScreenPos, b: ScreenPos) -> f32 {
    dist(a.x, a.y, b.x, b.y)
}
