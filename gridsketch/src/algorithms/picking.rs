use crate::geometry::math::{distance, point_to_segment_distance};
use crate::geometry::tolerance::{ENDPOINT_CLEARANCE, LINE_HOVER_DIST};
use crate::model::Point;
use crate::Graph;

/// First point exactly under the cursor, skipping `exclude` (the point being held).
pub fn hover_point_impl(g: &Graph, at: Point, exclude: Option<u32>) -> Option<u32> {
    g.points
        .iter()
        .enumerate()
        .find(|(i, p)| Some(*i as u32) != exclude && distance(**p, at) == 0.0)
        .map(|(i, _)| i as u32)
}

/// First line, in index order, that runs within `LINE_HOVER_DIST` of the cursor
/// while keeping clear of both endpoints. Near an endpoint the point wins.
pub fn hover_line_impl(g: &Graph, at: Point) -> Option<u32> {
    for (i, l) in g.lines.iter().enumerate() {
        let (Some(&a), Some(&b)) = (g.points.get(l.p1 as usize), g.points.get(l.p2 as usize)) else { continue };
        if point_to_segment_distance(at, a, b) < LINE_HOVER_DIST
            && distance(at, a) > ENDPOINT_CLEARANCE
            && distance(at, b) > ENDPOINT_CLEARANCE
        {
            return Some(i as u32);
        }
    }
    None
}
