//! Floating action menu attached to the selected region.

use canvastools_core::CanvasConfig;

use crate::model::{Point2D, Rect, RegionData};

/// Action offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Delete,
    Info,
}

impl MenuAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Info => "info",
        }
    }
}

/// Vertical stack of square action buttons beside a region.
#[derive(Debug, Clone)]
pub struct MenuElement {
    actions: Vec<MenuAction>,
    attached: Option<String>,
    visible: bool,
    position: Point2D,
    surface: Rect,
    dw: f64,
    dh: f64,
    action_size: f64,
    gutter: f64,
    dirty: bool,
}

impl MenuElement {
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            actions: vec![MenuAction::Delete, MenuAction::Info],
            attached: None,
            visible: false,
            position: Point2D::default(),
            surface: Rect::new(config.surface_width, config.surface_height),
            dw: config.menu_dw,
            dh: config.menu_dh,
            action_size: config.menu_action_size,
            gutter: config.menu_action_gutter,
            dirty: true,
        }
    }

    pub fn actions(&self) -> &[MenuAction] {
        &self.actions
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Id of the region the menu was last shown on.
    pub fn attached_region(&self) -> Option<&str> {
        self.attached.as_deref()
    }

    pub fn position(&self) -> Point2D {
        self.position
    }

    /// Width and height of the whole stack.
    pub fn extent(&self) -> Rect {
        let n = self.actions.len() as f64;
        let height = if n > 0.0 {
            n * self.action_size + (n - 1.0) * self.gutter
        } else {
            0.0
        };
        Rect::new(self.action_size, height)
    }

    /// Top-left corner of each action button.
    pub fn action_origins(&self) -> Vec<(MenuAction, Point2D)> {
        self.actions
            .iter()
            .enumerate()
            .map(|(i, action)| {
                let offset = i as f64 * (self.action_size + self.gutter);
                (*action, self.position.offset(0.0, offset))
            })
            .collect()
    }

    pub fn show_on_region(&mut self, id: &str, data: &RegionData) {
        self.attached = Some(id.to_string());
        self.visible = true;
        self.position = self.place(data);
        self.dirty = true;
        tracing::trace!(
            "Menu shown on {} at ({}, {})",
            id,
            self.position.x,
            self.position.y
        );
    }

    /// Re-places the menu after the attached region moved or resized.
    pub fn refresh(&mut self, id: &str, data: &RegionData) {
        if self.visible && self.attached.as_deref() == Some(id) {
            self.position = self.place(data);
            self.dirty = true;
        }
    }

    pub fn hide(&mut self) {
        if self.visible {
            self.visible = false;
            self.dirty = true;
        }
    }

    /// Hides and detaches the menu if it belongs to `id`.
    pub fn detach(&mut self, id: &str) {
        if self.attached.as_deref() == Some(id) {
            self.attached = None;
            self.hide();
        }
    }

    pub fn set_surface(&mut self, surface: Rect) {
        self.surface = surface;
        self.dirty = true;
    }

    /// Action under `p`, if the menu is showing.
    pub fn action_at(&self, p: &Point2D) -> Option<MenuAction> {
        if !self.visible {
            return None;
        }
        self.action_origins()
            .into_iter()
            .find(|(_, origin)| {
                p.x >= origin.x
                    && p.x <= origin.x + self.action_size
                    && p.y >= origin.y
                    && p.y <= origin.y + self.action_size
            })
            .map(|(action, _)| action)
    }

    /// Whether `p` lies anywhere on the visible menu, gutters included.
    pub fn contains_point(&self, p: &Point2D) -> bool {
        let extent = self.extent();
        self.visible
            && p.x >= self.position.x
            && p.x <= self.position.x + extent.width
            && p.y >= self.position.y
            && p.y <= self.position.y + extent.height
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn place(&self, data: &RegionData) -> Point2D {
        let extent = self.extent();
        let (mw, mh) = (extent.width, extent.height);
        let (x, y, w) = (data.x(), data.y(), data.width());

        let right = x + w + self.dw;
        let left = x - mw - self.dw;
        let mx = if right + mw <= self.surface.width {
            right
        } else if left >= 0.0 {
            left
        } else {
            x + w - mw - self.dw
        };

        let mut my = y;
        if my + mh > self.surface.height - self.dh {
            my = self.surface.height - self.dh - mh;
        }

        Point2D::new(mx, my.max(0.0))
    }
}
