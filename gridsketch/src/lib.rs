pub mod model;
pub mod config;
pub mod editor;
pub mod gesture;
pub mod view;
pub mod geometry {
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod picking;
}

pub use config::{Config, EditorConfig, ViewConfig};
pub use editor::{Editor, Frame};
pub use gesture::{DragMode, Gesture, PointerButton, PointerEvent, Press};
pub use model::{Line, Point, ScreenPos};
pub use view::{GridView, Viewport};

use std::collections::HashSet;
use tracing::debug;

/// Points and segments of the sketch. Indices are positional: removing a point
/// shifts every later index down by one and line endpoints are rewritten to match.
#[derive(Clone, Debug)]
pub struct Graph {
    pub(crate) points: Vec<Point>,
    pub(crate) lines: Vec<Line>,
    pub(crate) geom_ver: u64,
}

/// Result of [`Graph::merge_points`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Merge {
    /// Lowest index among the coincident points; unchanged by the merge.
    pub survivor: u32,
    /// Pre-merge indices that were folded into the survivor, highest first.
    pub removed: Vec<u32>,
}

impl Merge {
    /// Maps a pre-merge point index to its post-merge index.
    pub fn resolve(&self, id: u32) -> u32 {
        if self.removed.contains(&id) {
            return self.survivor;
        }
        id - self.removed.iter().filter(|&&r| r < id).count() as u32
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph { points: Vec::new(), lines: Vec::new(), geom_ver: 1 }
    }

    /// Monotonic geometry version; increments on every point/line edit.
    pub fn geom_version(&self) -> u64 {
        self.geom_ver
    }

    fn bump(&mut self) {
        self.geom_ver = self.geom_ver.wrapping_add(1);
    }

    // Points
    pub fn add_point(&mut self, pos: Point) -> Option<u32> {
        if self.point_at(pos).is_some() {
            return None;
        }
        let id = self.points.len() as u32;
        self.points.push(pos);
        self.bump();
        debug!(id, x = pos.x, y = pos.y, "point added");
        Some(id)
    }

    /// Index of the point in the cell `pos`, adding one if the cell is empty.
    pub fn ensure_point(&mut self, pos: Point) -> u32 {
        match self.point_at(pos) {
            Some(id) => id,
            None => {
                self.points.push(pos);
                self.bump();
                let id = self.points.len() as u32 - 1;
                debug!(id, x = pos.x, y = pos.y, "point added");
                id
            }
        }
    }

    /// Relocates a point without checking for coincidence; a drag may pass over
    /// other points and [`Graph::merge_points`] settles the final position.
    pub fn move_point(&mut self, id: u32, pos: Point) -> bool {
        match self.points.get_mut(id as usize) {
            Some(p) if *p == pos => true,
            Some(p) => {
                *p = pos;
                self.bump();
                true
            }
            None => false,
        }
    }

    pub fn point(&self, id: u32) -> Option<Point> {
        self.points.get(id as usize).copied()
    }

    /// Index of the first point sitting exactly at `pos`.
    pub fn point_at(&self, pos: Point) -> Option<u32> {
        self.points.iter().position(|p| *p == pos).map(|i| i as u32)
    }

    /// Removes a point and its lines. A point with exactly two lines is treated
    /// as a pass-through vertex and its neighbours are joined directly.
    pub fn delete_point(&mut self, id: u32) -> bool {
        if id as usize >= self.points.len() {
            return false;
        }
        let incident: Vec<Line> = self.lines.iter().filter(|l| l.touches(id)).copied().collect();
        if let &[first, second] = incident.as_slice() {
            let a = first.other(id);
            let b = second.other(id);
            if a != b && self.find_line(a, b).is_none() {
                self.lines.push(Line::new(a, b));
            }
        }
        self.points.remove(id as usize);
        self.lines.retain(|l| !l.touches(id));
        for l in self.lines.iter_mut() {
            if l.p1 > id { l.p1 -= 1; }
            if l.p2 > id { l.p2 -= 1; }
        }
        self.bump();
        debug!(id, degree = incident.len(), "point deleted");
        true
    }

    /// Folds every point coincident with `anchor` into the lowest such index,
    /// then drops the self-loops and duplicate lines this produces. `None` when
    /// there is nothing to merge.
    pub fn merge_points(&mut self, anchor: u32) -> Option<Merge> {
        let target = self.point(anchor)?;
        let matched: Vec<u32> = self
            .points
            .iter()
            .enumerate()
            .filter(|(_, p)| **p == target)
            .map(|(i, _)| i as u32)
            .collect();
        if matched.len() < 2 {
            return None;
        }
        let survivor = matched[0];
        let removed: Vec<u32> = matched[1..].iter().rev().copied().collect();

        for l in self.lines.iter_mut() {
            if removed.contains(&l.p1) { l.p1 = survivor; }
            if removed.contains(&l.p2) { l.p2 = survivor; }
        }
        for &r in &removed {
            self.points.remove(r as usize);
            for l in self.lines.iter_mut() {
                if l.p1 > r { l.p1 -= 1; }
                if l.p2 > r { l.p2 -= 1; }
            }
        }

        let mut seen: HashSet<(u32, u32)> = HashSet::new();
        self.lines.retain(|l| l.p1 != l.p2 && seen.insert(l.key()));
        self.bump();
        debug!(survivor, merged = removed.len(), "points merged");
        Some(Merge { survivor, removed })
    }

    pub fn point_count(&self) -> u32 {
        self.points.len() as u32
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    // Lines
    /// Appends a line unless the same unordered pair is already connected.
    /// Self-loops are the caller's responsibility.
    pub fn add_line(&mut self, p1: u32, p2: u32) -> Option<u32> {
        if self.find_line(p1, p2).is_some() {
            return None;
        }
        let id = self.lines.len() as u32;
        self.lines.push(Line::new(p1, p2));
        self.bump();
        debug!(id, p1, p2, "line added");
        Some(id)
    }

    pub fn find_line(&self, a: u32, b: u32) -> Option<u32> {
        self.lines.iter().position(|l| l.connects(a, b)).map(|i| i as u32)
    }

    /// Replaces `line` by `p1-point` and `point-p2`, in place. A half that
    /// already exists elsewhere is skipped; if both do, the line just goes away.
    pub fn split_line(&mut self, line: u32, point: u32) -> bool {
        let idx = line as usize;
        let Some(old) = self.lines.get(idx).copied() else { return false };
        let exists = |a: u32, b: u32| {
            self.lines.iter().enumerate().any(|(i, l)| i != idx && l.connects(a, b))
        };
        let halves: Vec<Line> = [Line::new(old.p1, point), Line::new(point, old.p2)]
            .into_iter()
            .filter(|h| !exists(h.p1, h.p2))
            .collect();
        let kept = halves.len();
        self.lines.splice(idx..=idx, halves);
        self.bump();
        debug!(line, point, kept, "line split");
        true
    }

    pub fn line(&self, id: u32) -> Option<Line> {
        self.lines.get(id as usize).copied()
    }

    pub fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    // Picking
    pub fn hover_point(&self, at: Point, exclude: Option<u32>) -> Option<u32> {
        algorithms::picking::hover_point_impl(self, at, exclude)
    }

    pub fn hover_line(&self, at: Point) -> Option<u32> {
        algorithms::picking::hover_line_impl(self, at)
    }

    // Flat arrays for renderers
    pub fn get_point_arrays(&self) -> Vec<f32> {
        self.points.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    pub fn get_line_arrays(&self) -> Vec<u32> {
        self.lines.iter().flat_map(|l| [l.p1, l.p2]).collect()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.lines.clear();
        self.bump();
    }
}
