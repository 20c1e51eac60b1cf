//! Coalesced redraw requests.
//!
//! State changes only set dirty flags. The host asks for one `RenderFrame`
//! per animation frame and redraws what it lists.

/// What changed since the previous frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderFrame {
    /// Ids of regions whose geometry or state changed.
    pub redraw: Vec<String>,
    /// New bottom-to-top draw order, present when the z-order changed.
    pub draw_order: Option<Vec<String>>,
    /// Ids of regions removed since the last frame.
    pub removed: Vec<String>,
    /// Whether the menu moved, appeared or disappeared.
    pub menu_changed: bool,
}

impl RenderFrame {
    pub fn is_empty(&self) -> bool {
        self.redraw.is_empty()
            && self.draw_order.is_none()
            && self.removed.is_empty()
            && !self.menu_changed
    }
}
