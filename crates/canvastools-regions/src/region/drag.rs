//! Whole-shape translation.

use crate::events::{ChangeEventType, RegionEvent};
use crate::model::{Point2D, Rect, RegionData};

/// Drag element of one region.
///
/// Moves are clamped so the bounding box origin stays inside
/// `paper.actual`, which keeps the whole shape on the surface.
#[derive(Debug, Clone, Default)]
pub struct DragElement {
    dragging: bool,
    select_only: bool,
    moved: bool,
    multi_selection: bool,
    last_pointer: Point2D,
    origin: Point2D,
}

impl DragElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether a press is in progress, including a locked-region press that
    /// can only toggle selection.
    pub fn is_pressed(&self) -> bool {
        self.dragging || self.select_only
    }

    /// Pointer pressed on the region body.
    pub fn pointer_down(
        &mut self,
        data: &RegionData,
        p: Point2D,
        multi_selection: bool,
    ) -> Vec<RegionEvent> {
        self.dragging = true;
        self.select_only = false;
        self.moved = false;
        self.multi_selection = multi_selection;
        self.last_pointer = p;
        self.origin = data.position();

        vec![
            RegionEvent::ManipulationLockRequest,
            RegionEvent::Change {
                event_type: ChangeEventType::MoveBegin,
                region_data: data.clone(),
                multi_selection,
            },
        ]
    }

    /// Pointer pressed on a locked region: no geometry change is allowed,
    /// but releasing still toggles selection.
    pub fn press_locked(&mut self, multi_selection: bool) {
        self.select_only = true;
        self.dragging = false;
        self.moved = false;
        self.multi_selection = multi_selection;
    }

    pub fn pointer_move(
        &mut self,
        data: &RegionData,
        p: Point2D,
        actual: &Rect,
    ) -> Option<RegionEvent> {
        if !self.dragging {
            return None;
        }

        let dx = p.x - self.last_pointer.x;
        let dy = p.y - self.last_pointer.y;
        self.last_pointer = p;

        let target = self.origin.offset(dx, dy).bound_to_rect(actual);
        self.origin = target;
        if target == data.position() {
            return None;
        }

        self.moved = true;
        let mut updated = data.clone();
        updated.move_to(target);
        tracing::trace!("Dragging region to ({}, {})", target.x, target.y);
        Some(RegionEvent::change(ChangeEventType::Moving, updated))
    }

    pub fn pointer_up(&mut self, data: &RegionData) -> Vec<RegionEvent> {
        let toggle = RegionEvent::Change {
            event_type: ChangeEventType::SelectionToggle,
            region_data: data.clone(),
            multi_selection: self.multi_selection,
        };

        if self.select_only {
            self.select_only = false;
            return vec![toggle];
        }
        if !self.dragging {
            return Vec::new();
        }
        self.dragging = false;

        let mut events = vec![
            RegionEvent::ManipulationLockRelease,
            RegionEvent::Change {
                event_type: ChangeEventType::MoveEnd,
                region_data: data.clone(),
                multi_selection: self.multi_selection,
            },
        ];
        if !self.moved {
            events.push(toggle);
        }
        events
    }

    pub fn reset(&mut self) {
        self.dragging = false;
        self.select_only = false;
        self.moved = false;
    }
}
