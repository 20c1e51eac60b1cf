//! A single editable region and its interactive parts.
//!
//! Every shape kind shares the same `Region` struct: a drag element for
//! whole-shape moves, one anchor per point for reshaping, and, for
//! polygons, an optional polyline selector for segment replacement.
//! Interaction methods return `RegionEvent`s instead of calling the host.

pub mod anchors;
pub mod drag;
pub mod segment;

use uuid::Uuid;

use crate::events::{ChangeEventType, RegionEvent};
use crate::input::PointerEvent;
use crate::model::{Point2D, Rect, RegionData, RegionDataType, TagsDescriptor};

use anchors::{nearest_edge, nearest_vertex, ActiveAnchor, AnchorSettings, AnchorsComponent, GhostMode};
use drag::DragElement;
use segment::{replace_segment, PolylineSelector};

/// Capabilities shared by regions and their parts.
///
/// Transitions only update state and mark the component dirty; drawing
/// happens on the next frame.
pub trait RegionComponent {
    fn move_to(&mut self, point: Point2D);
    fn resize(&mut self, width: f64, height: f64);
    fn select(&mut self);
    fn unselect(&mut self);
    fn freeze(&mut self);
    fn unfreeze(&mut self);
    fn lock(&mut self);
    fn unlock(&mut self);
    fn hide(&mut self);
    fn show(&mut self);
    /// Keeps the component drawn but transparent to the pointer.
    fn blind(&mut self);
    /// Bounding-box hit test.
    fn contains_point(&self, point: &Point2D) -> bool;
}

/// Visibility and interaction flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentState {
    pub visible: bool,
    pub selected: bool,
    pub frozen: bool,
    pub locked: bool,
    pub blind: bool,
}

impl Default for ComponentState {
    fn default() -> Self {
        Self {
            visible: true,
            selected: false,
            frozen: false,
            locked: false,
            blind: false,
        }
    }
}

/// The surface a region lives on, and the range its origin may take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaperRects {
    pub host: Rect,
    /// `host` shrunk by the region's extent.
    pub actual: Rect,
}

impl PaperRects {
    pub fn for_region(host: Rect, data: &RegionData) -> Self {
        Self {
            host,
            actual: Rect::new(host.width - data.width(), host.height - data.height()),
        }
    }
}

/// An editable region on the canvas.
#[derive(Debug, Clone)]
pub struct Region {
    id: String,
    style_id: String,
    data: RegionData,
    tags: TagsDescriptor,
    tooltip: String,
    state: ComponentState,
    paper: PaperRects,
    settings: AnchorSettings,
    drag: DragElement,
    anchors: AnchorsComponent,
    selector: Option<PolylineSelector>,
    dirty: bool,
}

impl Region {
    pub fn new(
        id: impl Into<String>,
        data: RegionData,
        tags: TagsDescriptor,
        surface: Rect,
        settings: AnchorSettings,
    ) -> Self {
        let style_id = Uuid::new_v4().simple().to_string()[..8].to_string();
        let tooltip = tags.tooltip();
        let paper = PaperRects::for_region(surface, &data);
        Self {
            id: id.into(),
            style_id,
            data,
            tags,
            tooltip,
            state: ComponentState::default(),
            paper,
            settings,
            drag: DragElement::new(),
            anchors: AnchorsComponent::new(),
            selector: None,
            dirty: true,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Opaque styling namespace; never used to look regions up.
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    pub fn region_data(&self) -> &RegionData {
        &self.data
    }

    pub fn tags(&self) -> &TagsDescriptor {
        &self.tags
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn state(&self) -> ComponentState {
        self.state
    }

    pub fn paper_rects(&self) -> PaperRects {
        self.paper
    }

    pub fn area(&self) -> f64 {
        self.data.area()
    }

    pub fn is_selected(&self) -> bool {
        self.state.selected
    }

    pub fn is_frozen(&self) -> bool {
        self.state.frozen
    }

    pub fn is_locked(&self) -> bool {
        self.state.locked
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn anchors(&self) -> &AnchorsComponent {
        &self.anchors
    }

    pub fn selector(&self) -> Option<&PolylineSelector> {
        self.selector.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears the dirty flag, returning whether it was set.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn update_tags(&mut self, tags: TagsDescriptor) {
        self.tooltip = tags.tooltip();
        self.tags = tags;
        self.dirty = true;
    }

    /// Overwrites the geometry with a copy handed back in a change event.
    pub fn apply(&mut self, data: &RegionData) {
        self.data.init_from(data);
        self.paper = PaperRects::for_region(self.paper.host, &self.data);
        self.dirty = true;
    }

    pub fn set_surface(&mut self, host: Rect) {
        self.paper = PaperRects::for_region(host, &self.data);
    }

    /// Whether the region reacts to the pointer at all.
    pub fn is_interactive(&self) -> bool {
        self.state.visible && !self.state.blind && !self.state.frozen
    }

    /// Whether a press on this region is still in progress.
    pub fn is_pressed(&self) -> bool {
        self.drag.is_pressed() || self.anchors.is_dragging() || self.anchors.is_pressed()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging() || self.anchors.is_dragging()
    }

    pub fn has_selector(&self) -> bool {
        self.selector.is_some()
    }

    /// Pointer hit test: the bounding box, or within the ghost radius of
    /// the outline so anchors on the border and point regions are
    /// reachable.
    pub fn hit_test(&self, p: &Point2D) -> bool {
        if self.data.contains_point(p) {
            return true;
        }
        let reach = self.settings.ghost_radius * self.settings.ghost_radius;
        let points = self.data.points();
        if matches!(nearest_vertex(points, p), Some((_, d2)) if d2 <= reach) {
            return true;
        }
        self.data.kind() == RegionDataType::Polygon
            && matches!(nearest_edge(points, p), Some((_, d2)) if d2 <= reach)
    }

    pub fn pointer_move(&mut self, ev: &PointerEvent) -> Vec<RegionEvent> {
        if self.state.frozen {
            return Vec::new();
        }

        if let Some(selector) = self.selector.as_mut() {
            selector.move_cursor(ev.position.bound_to_rect(&self.paper.host));
            self.dirty = true;
            return Vec::new();
        }

        if self.anchors.is_dragging() {
            return self
                .anchors
                .pointer_move(&self.data, ev.position, &self.paper.host)
                .into_iter()
                .collect();
        }

        if self.drag.is_dragging() {
            return self
                .drag
                .pointer_move(&self.data, ev.position, &self.paper.actual)
                .into_iter()
                .collect();
        }

        if !self.state.locked {
            let before = (self.anchors.active(), self.anchors.mode());
            self.anchors
                .hover(&self.data, ev.position, ev.modifiers, &self.settings);
            if before != (self.anchors.active(), self.anchors.mode()) {
                self.dirty = true;
            }
        }
        Vec::new()
    }

    /// The pointer left the region; drops the ghost unless a drag holds it.
    pub fn pointer_leave(&mut self) {
        if self.is_pressed() {
            return;
        }
        if self.anchors.active() != ActiveAnchor::None {
            self.anchors.clear();
            self.dirty = true;
        }
    }

    pub fn pointer_down(&mut self, ev: &PointerEvent) -> Vec<RegionEvent> {
        if self.state.frozen || self.selector.is_some() {
            return Vec::new();
        }

        let multi_selection = ev.modifiers.shift;
        if self.state.locked {
            if self.hit_test(&ev.position) {
                self.drag.press_locked(multi_selection);
            }
            return Vec::new();
        }

        self.anchors
            .hover(&self.data, ev.position, ev.modifiers, &self.settings);

        match (self.anchors.active(), self.anchors.mode()) {
            (ActiveAnchor::Vertex(index), GhostMode::Modify) => {
                tracing::debug!("Region {} started segment edit at vertex {}", self.id, index);
                self.selector = Some(PolylineSelector::new(index, self.data.points()[index]));
                self.anchors.clear();
                self.dirty = true;
                return Vec::new();
            }
            (ActiveAnchor::None, _) => {}
            _ => {
                let events = self.anchors.pointer_down(&self.data, ev.position);
                if !events.is_empty() || self.anchors.is_pressed() {
                    self.dirty = true;
                    return events;
                }
            }
        }

        if self.hit_test(&ev.position) {
            return self
                .drag
                .pointer_down(&self.data, ev.position, multi_selection);
        }
        Vec::new()
    }

    pub fn pointer_up(&mut self, ev: &PointerEvent) -> Vec<RegionEvent> {
        if let Some(selector) = self.selector.as_mut() {
            selector.click(ev.position, &self.paper.host);
            self.dirty = true;
            return Vec::new();
        }

        if self.anchors.is_dragging() || self.anchors.is_pressed() {
            self.dirty = true;
            return self.anchors.pointer_up(&self.data, &self.paper.host);
        }

        self.drag.pointer_up(&self.data)
    }

    /// Finishes a segment edit, returning `MODIFIED` with the new outline
    /// when the replacement changed the polygon.
    pub fn complete_selection(&mut self) -> Vec<RegionEvent> {
        let Some(selector) = self.selector.take() else {
            return Vec::new();
        };
        self.dirty = true;

        match replace_segment(self.data.points(), selector.seed_index(), selector.points()) {
            Some(points) => {
                let mut updated = self.data.clone();
                updated.set_points(points);
                vec![RegionEvent::change(ChangeEventType::Modified, updated)]
            }
            None => Vec::new(),
        }
    }

    pub fn cancel_selection(&mut self) {
        if self.selector.take().is_some() {
            tracing::debug!("Region {} segment edit cancelled", self.id);
            self.dirty = true;
        }
    }

    fn reset_interaction(&mut self) {
        self.drag.reset();
        self.anchors.clear();
        self.selector = None;
    }
}

impl RegionComponent for Region {
    fn move_to(&mut self, point: Point2D) {
        self.data.move_to(point);
        self.paper = PaperRects::for_region(self.paper.host, &self.data);
        self.dirty = true;
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.data.resize(width, height);
        self.paper = PaperRects::for_region(self.paper.host, &self.data);
        self.dirty = true;
    }

    fn select(&mut self) {
        self.state.selected = true;
        self.dirty = true;
    }

    fn unselect(&mut self) {
        self.state.selected = false;
        self.dirty = true;
    }

    fn freeze(&mut self) {
        self.state.frozen = true;
        self.reset_interaction();
        self.dirty = true;
    }

    fn unfreeze(&mut self) {
        self.state.frozen = false;
        self.dirty = true;
    }

    fn lock(&mut self) {
        self.state.locked = true;
        self.reset_interaction();
        self.dirty = true;
    }

    fn unlock(&mut self) {
        self.state.locked = false;
        self.dirty = true;
    }

    fn hide(&mut self) {
        self.state.visible = false;
        self.dirty = true;
    }

    fn show(&mut self) {
        self.state.visible = true;
        self.state.blind = false;
        self.dirty = true;
    }

    fn blind(&mut self) {
        self.state.blind = true;
        self.dirty = true;
    }

    fn contains_point(&self, point: &Point2D) -> bool {
        self.data.contains_point(point)
    }
}
