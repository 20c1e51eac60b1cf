//! Anchor handles and the ghost-anchor reshape state machine.
//!
//! A region has one anchor per point but only a single interactive
//! "ghost" handle, which jumps to whichever anchor the pointer hovers.
//!
//! ```text
//! Idle --hover--> Hover(active) --down--> Dragging --up--> Idle
//!                     |  ^
//!                     +--+ (pointer moves to another anchor)
//! ```
//!
//! Polygons layer three modifier gestures on the hover state:
//! ctrl over an edge inserts a vertex, ctrl directly on a vertex deletes
//! it, alt on a vertex starts a segment replacement.

use canvastools_core::constants::MIN_POLYGON_POINTS;

use crate::events::{ChangeEventType, RegionEvent};
use crate::input::Modifiers;
use crate::model::{Point2D, Rect, RegionData, RegionDataType};

/// Which handle the ghost anchor is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveAnchor {
    #[default]
    None,
    /// Index into the region's points.
    Vertex(usize),
    /// Synthetic position on the edge that starts at this point index.
    Segment(usize),
}

/// What releasing the pointer on the ghost anchor will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GhostMode {
    #[default]
    Drag,
    Add,
    Delete,
    Modify,
}

/// Hit-test and gesture tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorSettings {
    pub anchor_radius: f64,
    pub ghost_radius: f64,
    /// Squared distance that turns an edge hover into a vertex delete.
    pub line_switch_threshold: f64,
}

/// Anchor state of one region.
#[derive(Debug, Clone, Default)]
pub struct AnchorsComponent {
    active: ActiveAnchor,
    mode: GhostMode,
    ghost: Option<Point2D>,
    dragging: bool,
    pressed: bool,
    last_pointer: Point2D,
    anchor: Point2D,
}

impl AnchorsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ActiveAnchor {
        self.active
    }

    pub fn mode(&self) -> GhostMode {
        self.mode
    }

    /// Position of the ghost handle while an anchor is hovered.
    pub fn ghost(&self) -> Option<Point2D> {
        self.ghost
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Updates the hover state for a pointer at `p`.
    ///
    /// Returns `true` when the ghost anchor is bound to a handle. Does
    /// nothing while dragging.
    pub fn hover(
        &mut self,
        data: &RegionData,
        p: Point2D,
        modifiers: Modifiers,
        settings: &AnchorSettings,
    ) -> bool {
        if self.dragging || self.pressed {
            return self.active != ActiveAnchor::None;
        }

        let points = data.points();
        let is_polygon = data.kind() == RegionDataType::Polygon;

        if is_polygon && modifiers.ctrl {
            // Thresholds are raw canvas distances; zoom is not compensated.
            if let Some((vertex, d2)) = nearest_vertex(points, &p) {
                if d2 < settings.line_switch_threshold && points.len() > 2 {
                    self.bind(ActiveAnchor::Vertex(vertex), GhostMode::Delete, points[vertex]);
                    return true;
                }
            }
            if let Some((edge, d2)) = nearest_edge(points, &p) {
                if d2 <= settings.ghost_radius * settings.ghost_radius {
                    self.bind(ActiveAnchor::Segment(edge), GhostMode::Add, p);
                    return true;
                }
            }
            self.clear();
            return false;
        }

        match nearest_vertex(points, &p) {
            Some((vertex, d2)) if d2 <= settings.ghost_radius * settings.ghost_radius => {
                let mode = if is_polygon && modifiers.alt {
                    GhostMode::Modify
                } else {
                    GhostMode::Drag
                };
                self.bind(ActiveAnchor::Vertex(vertex), mode, points[vertex]);
                true
            }
            _ => {
                self.clear();
                false
            }
        }
    }

    fn bind(&mut self, active: ActiveAnchor, mode: GhostMode, ghost: Point2D) {
        if self.active != active || self.mode != mode {
            tracing::trace!("Ghost anchor bound to {:?} in {:?} mode", active, mode);
        }
        self.active = active;
        self.mode = mode;
        self.ghost = Some(ghost);
    }

    /// Returns to `Idle`, dropping any hover or drag state.
    pub fn clear(&mut self) {
        self.active = ActiveAnchor::None;
        self.mode = GhostMode::Drag;
        self.ghost = None;
        self.dragging = false;
        self.pressed = false;
    }

    /// Pointer pressed on the ghost anchor.
    ///
    /// In `Drag` mode this starts a drag and requests the manipulation
    /// lock. `Add` and `Delete` only arm the gesture; it commits on
    /// release. `Modify` is handled by the owning region.
    pub fn pointer_down(&mut self, data: &RegionData, p: Point2D) -> Vec<RegionEvent> {
        let ActiveAnchor::Vertex(index) = self.active else {
            if self.active != ActiveAnchor::None && self.mode == GhostMode::Add {
                self.pressed = true;
            }
            return Vec::new();
        };

        match self.mode {
            GhostMode::Drag => {
                self.dragging = true;
                self.last_pointer = p;
                self.anchor = data.points()[index];
                vec![
                    RegionEvent::ManipulationLockRequest,
                    RegionEvent::change(ChangeEventType::MoveBegin, data.clone()),
                ]
            }
            GhostMode::Delete => {
                self.pressed = true;
                Vec::new()
            }
            GhostMode::Add | GhostMode::Modify => Vec::new(),
        }
    }

    /// Pointer moved while dragging: moves the active anchor by the screen
    /// delta since the previous move, clamped to the surface, and returns
    /// the updated geometry as a copy.
    pub fn pointer_move(
        &mut self,
        data: &RegionData,
        p: Point2D,
        surface: &Rect,
    ) -> Option<RegionEvent> {
        if !self.dragging {
            return None;
        }
        let ActiveAnchor::Vertex(index) = self.active else {
            return None;
        };

        let dx = p.x - self.last_pointer.x;
        let dy = p.y - self.last_pointer.y;
        self.last_pointer = p;
        self.anchor = self.anchor.offset(dx, dy).bound_to_rect(surface);

        let (updated, new_index) = update_region(data, index, self.anchor);
        self.active = ActiveAnchor::Vertex(new_index);
        self.ghost = Some(self.anchor);

        Some(RegionEvent::change(ChangeEventType::Moving, updated))
    }

    /// Pointer released: ends a drag or commits an add/delete gesture.
    pub fn pointer_up(&mut self, data: &RegionData, surface: &Rect) -> Vec<RegionEvent> {
        if self.dragging {
            self.dragging = false;
            return vec![
                RegionEvent::ManipulationLockRelease,
                RegionEvent::change(ChangeEventType::MoveEnd, data.clone()),
            ];
        }

        if !self.pressed {
            return Vec::new();
        }
        self.pressed = false;

        let mut points = data.points().to_vec();
        match (self.mode, self.active) {
            (GhostMode::Add, ActiveAnchor::Segment(edge)) => {
                let Some(ghost) = self.ghost else {
                    return Vec::new();
                };
                points.insert(edge + 1, ghost.bound_to_rect(surface));
                tracing::debug!("Inserted polygon vertex after index {}", edge);
            }
            (GhostMode::Delete, ActiveAnchor::Vertex(vertex)) => {
                if points.len() <= MIN_POLYGON_POINTS {
                    tracing::debug!(
                        "Refusing to delete vertex {}: polygon already at {} points",
                        vertex,
                        points.len()
                    );
                    self.clear();
                    return Vec::new();
                }
                points.remove(vertex);
                tracing::debug!("Removed polygon vertex {}", vertex);
            }
            _ => return Vec::new(),
        }

        self.clear();
        let mut updated = data.clone();
        updated.set_points(points);
        vec![RegionEvent::change(ChangeEventType::Modified, updated)]
    }
}

/// Index and squared distance of the point closest to `p`.
pub fn nearest_vertex(points: &[Point2D], p: &Point2D) -> Option<(usize, f64)> {
    points
        .iter()
        .enumerate()
        .map(|(i, v)| (i, p.square_distance_to_point(v)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Index of the closed-polygon edge closest to `p` (edge `i` joins point
/// `i` and `i + 1`, wrapping) and its squared distance.
pub fn nearest_edge(points: &[Point2D], p: &Point2D) -> Option<(usize, f64)> {
    let n = points.len();
    if n < 2 {
        return None;
    }
    (0..n)
        .map(|i| (i, p.square_distance_to_line(&points[i], &points[(i + 1) % n])))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Writes the moved anchor into a copy of `data`.
///
/// Returns the copy and the anchor's index afterwards; a rectangle corner
/// dragged across the opposite corner becomes a different corner.
fn update_region(data: &RegionData, index: usize, anchor: Point2D) -> (RegionData, usize) {
    let mut updated = data.clone();
    match data.kind() {
        RegionDataType::Rect => {
            let opposite = data.points()[(index + 2) % 4];
            let x = anchor.x.min(opposite.x);
            let y = anchor.y.min(opposite.y);
            let w = (anchor.x - opposite.x).abs();
            let h = (anchor.y - opposite.y).abs();
            updated = RegionData::rect(x, y, w, h);

            let right = anchor.x > opposite.x;
            let bottom = anchor.y > opposite.y;
            let corner = match (right, bottom) {
                (false, false) => 0,
                (true, false) => 1,
                (true, true) => 2,
                (false, true) => 3,
            };
            (updated, corner)
        }
        RegionDataType::Point => {
            updated.set_points(vec![anchor]);
            (updated, 0)
        }
        RegionDataType::Polyline | RegionDataType::Polygon => {
            let mut points = data.points().to_vec();
            points[index] = anchor;
            updated.set_points(points);
            (updated, index)
        }
    }
}
