//! Pointer and keyboard routing.
//!
//! Hit testing walks the regions top-down (reverse draw order). A region
//! that accepts a press captures that pointer until release; a region in
//! the middle of a segment edit receives all pointer input until the edit
//! completes or is cancelled.

use crate::callbacks::RegionsManagerCallbacks;
use crate::input::{Key, KeyEvent, PointerEvent};
use crate::menu::MenuAction;
use crate::model::Point2D;
use crate::region::{Region, RegionComponent};

use super::RegionsManager;

impl<C: RegionsManagerCallbacks> RegionsManager<C> {
    /// Topmost interactive region under `p`.
    fn hit_region(&self, p: &Point2D) -> Option<String> {
        self.regions
            .iter()
            .rev()
            .find(|r| r.is_interactive() && r.hit_test(p))
            .map(|r| r.id().to_string())
    }

    fn selector_region(&self) -> Option<String> {
        self.regions
            .iter()
            .find(|r| r.has_selector())
            .map(|r| r.id().to_string())
    }

    fn region_at(&mut self, id: &str) -> Option<&mut Region> {
        self.regions.iter_mut().find(|r| r.id() == id)
    }

    pub fn pointer_move(&mut self, ev: &PointerEvent) {
        if self.frozen {
            return;
        }

        let routed = self
            .captures
            .get(&ev.pointer_id)
            .cloned()
            .or_else(|| self.selector_region());
        if let Some(id) = routed {
            if let Some(region) = self.region_at(&id) {
                let events = region.pointer_move(ev);
                self.on_region_change(&id, events);
            }
            return;
        }

        let hit = self.hit_region(&ev.position);
        if self.hovered != hit {
            if let Some(previous) = self.hovered.take() {
                if let Some(region) = self.region_at(&previous) {
                    region.pointer_leave();
                }
            }
            self.hovered = hit.clone();
        }

        if let Some(id) = hit {
            if let Some(region) = self.region_at(&id) {
                let events = region.pointer_move(ev);
                self.on_region_change(&id, events);
            }
        }
    }

    pub fn pointer_down(&mut self, ev: &PointerEvent) {
        if self.frozen {
            return;
        }
        if self.manipulation_lock && !self.captures.contains_key(&ev.pointer_id) {
            tracing::debug!(
                "Ignoring pointer {} while the manipulation lock is held",
                ev.pointer_id
            );
            return;
        }
        if self.selector_region().is_some() || self.menu.contains_point(&ev.position) {
            return;
        }

        let Some(id) = self.hit_region(&ev.position) else {
            return;
        };
        let Some(region) = self.region_at(&id) else {
            return;
        };
        let events = region.pointer_down(ev);
        if region.is_pressed() {
            self.captures.insert(ev.pointer_id, id.clone());
        }
        self.on_region_change(&id, events);
    }

    pub fn pointer_up(&mut self, ev: &PointerEvent) {
        if let Some(id) = self.selector_region() {
            if let Some(region) = self.region_at(&id) {
                region.pointer_up(ev);
            }
            return;
        }

        let Some(id) = self.captures.remove(&ev.pointer_id) else {
            return;
        };
        if let Some(region) = self.region_at(&id) {
            let events = region.pointer_up(ev);
            self.on_region_change(&id, events);
        }
    }

    /// A completed click. Runs a menu action, or clears the selection when
    /// the click landed on empty canvas and did not end a manipulation.
    pub fn click(&mut self, ev: &PointerEvent) {
        if let Some(action) = self.menu.action_at(&ev.position) {
            if let Some(id) = self.menu.attached_region().map(str::to_string) {
                self.run_menu_action(&id, action);
            }
            return;
        }

        if std::mem::take(&mut self.just_manipulated) {
            return;
        }
        if self.frozen || self.selector_region().is_some() {
            return;
        }
        if self.hit_region(&ev.position).is_none() {
            self.unselect_all();
        }
    }

    fn run_menu_action(&mut self, id: &str, action: MenuAction) {
        tracing::debug!("Menu action {} on {}", action.name(), id);
        match action {
            MenuAction::Delete => {
                if let Err(e) = self.delete_region_by_id(id) {
                    tracing::warn!("Menu delete failed: {}", e);
                }
            }
            MenuAction::Info => {
                if let Some(region) = self.regions.iter().find(|r| r.id() == id) {
                    self.callbacks.on_region_info(id, region.region_data());
                }
            }
        }
    }

    /// Completes a segment edit in progress.
    pub fn double_click(&mut self, _ev: &PointerEvent) {
        self.complete_segment_edit();
    }

    /// Right-click. Selects the topmost region whose bounding box contains
    /// the pointer and returns `true` when the host should suppress its
    /// native context menu.
    pub fn context_menu(&mut self, ev: &PointerEvent) -> bool {
        if self.frozen {
            return false;
        }
        let hit = self
            .regions
            .iter()
            .rev()
            .find(|r| r.is_visible() && r.contains_point(&ev.position))
            .map(|r| r.id().to_string());

        match hit {
            Some(id) => {
                if let Err(e) = self.select_region_by_id(&id) {
                    tracing::warn!("Context menu selection failed: {}", e);
                    return false;
                }
                self.callbacks.on_region_context_menu(&id, ev.position);
                true
            }
            None => false,
        }
    }

    pub fn key_down(&mut self, ev: &KeyEvent) {
        match ev.key {
            Key::Delete | Key::Backspace => {
                if !self.frozen {
                    let count = self.delete_selected_regions();
                    tracing::debug!("Deleted {} selected region(s)", count);
                }
            }
            Key::Tab => {
                if !self.frozen {
                    self.select_next_region();
                }
            }
            Key::Escape => self.cancel_segment_edit(),
            Key::Enter => self.complete_segment_edit(),
            Key::Other => {}
        }
    }

    fn complete_segment_edit(&mut self) {
        let Some(id) = self.selector_region() else {
            return;
        };
        if let Some(region) = self.region_at(&id) {
            let events = region.complete_selection();
            self.on_region_change(&id, events);
        }
    }

    fn cancel_segment_edit(&mut self) {
        if let Some(id) = self.selector_region() {
            if let Some(region) = self.region_at(&id) {
                region.cancel_selection();
            }
        }
    }
}
