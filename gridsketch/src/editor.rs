use serde::Serialize;
use tracing::{debug, info};

use crate::config::EditorConfig;
use crate::geometry::math::screen_distance;
use crate::gesture::{DragMode, Gesture, PointerButton, PointerEvent, Press};
use crate::model::{Point, ScreenPos};
use crate::view::Viewport;
use crate::Graph;

/// What the renderer needs besides the geometry itself.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub hovered_point: Option<u32>,
    pub hovered_line: Option<u32>,
    pub draw_point: Option<u32>,
    pub drag_mode: DragMode,
    /// Grid cell under the last known pointer position.
    pub cursor: Option<Point>,
    pub geom_version: u64,
}

/// One editing session: the sketch plus the gesture in flight.
///
/// Event handlers take the viewport by reference; the editor never owns pan or zoom.
#[derive(Clone, Debug, Default)]
pub struct Editor {
    graph: Graph,
    gesture: Gesture,
    config: EditorConfig,
    last_release_ms: Option<f64>,
    cursor: Option<ScreenPos>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Editor { config, ..Self::default() }
    }

    pub fn graph(&self) -> &Graph { &self.graph }
    pub fn gesture(&self) -> Gesture { self.gesture }
    pub fn config(&self) -> &EditorConfig { &self.config }
    pub fn drag_mode(&self) -> DragMode { self.gesture.mode() }
    pub fn draw_point(&self) -> Option<u32> { self.gesture.draw_point() }
    pub fn cursor(&self) -> Option<ScreenPos> { self.cursor }

    /// Runs a direct graph edit. Indices held by the gesture may no longer be
    /// valid afterwards, so any gesture is dropped when the geometry changed.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut Graph) -> R) -> R {
        let before = self.graph.geom_version();
        let out = f(&mut self.graph);
        if self.graph.geom_version() != before && self.gesture != Gesture::default() {
            self.transition(Gesture::default());
        }
        out
    }

    /// Forgets the sketch and any gesture in flight.
    pub fn reset(&mut self) {
        self.graph.clear();
        self.gesture = Gesture::default();
        self.last_release_ms = None;
    }

    fn transition(&mut self, next: Gesture) {
        if self.gesture.mode() != next.mode() {
            info!(from = ?self.gesture.mode(), to = ?next.mode(), "gesture mode");
        }
        self.gesture = next;
    }

    fn is_double_click(&self, now_ms: f64) -> bool {
        self.last_release_ms.map_or(false, |t| now_ms - t < self.config.double_click_ms)
    }

    pub fn pointer_down<V: Viewport + ?Sized>(&mut self, view: &V, ev: PointerEvent) {
        self.cursor = Some(ev.pos);
        if ev.button != PointerButton::Primary {
            return;
        }
        let Gesture::Idle { draw, .. } = self.gesture else {
            debug!(mode = ?self.gesture.mode(), "pointer down ignored");
            return;
        };
        let point = self.graph.hover_point(view.grid_position(ev.pos), None);
        self.gesture = Gesture::Idle { press: Some(Press { at: ev.pos, point }), draw };
    }

    pub fn pointer_move<V: Viewport + ?Sized>(&mut self, view: &mut V, pos: ScreenPos) {
        self.cursor = Some(pos);
        match self.gesture {
            Gesture::Idle { press: Some(press), draw } => {
                if screen_distance(press.at, pos) <= self.config.drag_tolerance_px {
                    return;
                }
                let next = match press.point.and_then(|id| self.graph.point(id).map(|p| (id, p))) {
                    Some((point, origin)) => Gesture::DraggingPoint { point, origin },
                    None => Gesture::Panning { last: press.at, draw },
                };
                self.transition(next);
            }
            Gesture::Idle { press: None, .. } => {}
            Gesture::Panning { last, draw } => {
                view.pan_by(pos.x - last.x, pos.y - last.y);
                self.gesture = Gesture::Panning { last: pos, draw };
            }
            Gesture::DraggingPoint { point, .. } => {
                self.graph.move_point(point, view.grid_position(pos));
            }
        }
    }

    pub fn pointer_up<V: Viewport + ?Sized>(&mut self, view: &V, ev: PointerEvent) {
        self.cursor = Some(ev.pos);
        if ev.button != PointerButton::Primary {
            return;
        }
        let at = view.grid_position(ev.pos);
        match self.gesture {
            Gesture::Idle { press, draw } => {
                let down = press.and_then(|p| p.point);
                let draw = self.tap(at, down, draw, ev.time_ms);
                self.gesture = Gesture::Idle { press: None, draw };
            }
            Gesture::Panning { draw, .. } => {
                self.transition(Gesture::Idle { press: None, draw });
            }
            Gesture::DraggingPoint { point, .. } => {
                self.drop_point(point, at);
                self.transition(Gesture::default());
            }
        }
        self.last_release_ms = Some(ev.time_ms);
    }

    /// Aborts a drag or pan without editing. A dragged point returns to where it
    /// started; a pending sketch survives.
    pub fn pointer_cancel(&mut self) {
        match self.gesture {
            Gesture::Idle { draw, .. } | Gesture::Panning { draw, .. } => {
                self.transition(Gesture::Idle { press: None, draw });
            }
            Gesture::DraggingPoint { point, origin } => {
                self.graph.move_point(point, origin);
                self.transition(Gesture::default());
            }
        }
    }

    /// Secondary action: drops the pending sketch and the recorded press.
    pub fn context_menu(&mut self) {
        match self.gesture {
            Gesture::Idle { .. } => self.gesture = Gesture::default(),
            Gesture::Panning { last, .. } => self.gesture = Gesture::Panning { last, draw: None },
            Gesture::DraggingPoint { .. } => {}
        }
        debug!("sketch cancelled");
    }

    /// Release without a drag. Returns the new sketch origin.
    fn tap(&mut self, at: Point, down: Option<u32>, draw: Option<u32>, now_ms: f64) -> Option<u32> {
        let line = self.graph.hover_line(at);
        let double = self.is_double_click(now_ms);
        match (draw, down) {
            (None, Some(p)) if double => {
                self.graph.delete_point(p);
                None
            }
            (None, Some(p)) => Some(p),
            (None, None) => {
                let p = self.place_point(at);
                if let Some(l) = line {
                    self.graph.split_line(l, p);
                }
                Some(p)
            }
            (Some(d), Some(p)) => {
                if p != d {
                    self.graph.add_line(d, p);
                } else if double {
                    self.graph.delete_point(p);
                }
                None
            }
            (Some(d), None) => {
                let p = self.place_point(at);
                match line {
                    None => {
                        self.connect(d, p);
                        Some(p)
                    }
                    Some(l) => {
                        self.graph.split_line(l, p);
                        self.connect(d, p);
                        None
                    }
                }
            }
        }
    }

    /// New point at `at`, or the one already occupying that cell.
    fn place_point(&mut self, at: Point) -> u32 {
        self.graph.ensure_point(at)
    }

    fn connect(&mut self, a: u32, b: u32) {
        if a != b {
            self.graph.add_line(a, b);
        }
    }

    /// Settles a dragged point: merge into a point at the drop cell, then split a
    /// line passing through it. Both checks run independently.
    fn drop_point(&mut self, point: u32, at: Point) {
        self.graph.move_point(point, at);
        let mut point = point;
        if let Some(target) = self.graph.hover_point(at, Some(point)) {
            if let Some(merge) = self.graph.merge_points(target) {
                point = merge.resolve(point);
            }
        }
        if let Some(line) = self.graph.hover_line(at) {
            let ends_here = self.graph.line(line).map_or(true, |l| l.touches(point));
            if !ends_here {
                self.graph.split_line(line, point);
            }
        }
    }

    pub fn hovered_line<V: Viewport + ?Sized>(&self, view: &V) -> Option<u32> {
        let at = view.grid_position(self.cursor?);
        self.graph.hover_line(at)
    }

    pub fn hovered_point<V: Viewport + ?Sized>(&self, view: &V) -> Option<u32> {
        let at = view.grid_position(self.cursor?);
        self.graph.hover_point(at, self.gesture.held_point())
    }

    pub fn frame<V: Viewport + ?Sized>(&self, view: &V) -> Frame {
        Frame {
            hovered_point: self.hovered_point(view),
            hovered_line: self.hovered_line(view),
            draw_point: self.draw_point(),
            drag_mode: self.drag_mode(),
            cursor: self.cursor.map(|c| view.grid_position(c)),
            geom_version: self.graph.geom_version(),
        }
    }
}
