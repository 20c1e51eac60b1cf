//! Region collection owner.
//!
//! `RegionsManager` keeps the regions sorted by descending area (largest at
//! the bottom of the draw order), owns the floating menu and the style
//! registry, routes host input to regions and reports back through
//! `RegionsManagerCallbacks`.

mod dispatch;
mod input;

use std::collections::HashMap;

use canvastools_core::{CanvasConfig, RegionError, Result};
use serde::{Deserialize, Serialize};

use crate::callbacks::{NoopCallbacks, RegionsManagerCallbacks};
use crate::frame::RenderFrame;
use crate::menu::MenuElement;
use crate::model::{Rect, RegionData, TagsDescriptor};
use crate::region::anchors::AnchorSettings;
use crate::region::{Region, RegionComponent};
use crate::style::StyleRegistry;

/// A region as handed to the host: geometry in un-zoomed image space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionExport {
    pub id: String,
    pub tags: TagsDescriptor,
    pub region_data: RegionData,
}

/// Owns every region on one drawing surface.
///
/// # Selection Model
///
/// - Clicking a region selects it and deselects the rest
/// - Shift+click adds to or removes from the selection
/// - The menu follows the most recently selected region
///
/// # Manipulation lock
///
/// A drag takes a manager-wide lock that is released when the pointer
/// goes up. While it is held, `on_manipulation_end` is not forwarded to
/// the host and presses from other pointers are ignored.
pub struct RegionsManager<C: RegionsManagerCallbacks = NoopCallbacks> {
    config: CanvasConfig,
    surface: Rect,
    regions: Vec<Region>,
    menu: MenuElement,
    styles: StyleRegistry,
    callbacks: C,
    frozen: bool,
    visible: bool,
    manipulation_lock: bool,
    just_manipulated: bool,
    press_selection: Option<(String, bool)>,
    captures: HashMap<u32, String>,
    hovered: Option<String>,
    order_changed: bool,
    removed: Vec<String>,
}

impl<C: RegionsManagerCallbacks> RegionsManager<C> {
    /// Creates a manager for a `width` x `height` surface with default
    /// anchor and menu settings.
    pub fn new(width: f64, height: f64, callbacks: C) -> Self {
        Self::with_config(CanvasConfig::with_surface(width, height), callbacks)
    }

    /// Creates a manager from a full configuration.
    ///
    /// Invalid values are replaced by defaults with a warning.
    pub fn with_config(config: CanvasConfig, callbacks: C) -> Self {
        let config = config.sanitized();
        Self {
            surface: Rect::new(config.surface_width, config.surface_height),
            menu: MenuElement::new(&config),
            config,
            regions: Vec::new(),
            styles: StyleRegistry::new(),
            callbacks,
            frozen: false,
            visible: true,
            manipulation_lock: false,
            just_manipulated: false,
            press_selection: None,
            captures: HashMap::new(),
            hovered: None,
            order_changed: false,
            removed: Vec::new(),
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn surface(&self) -> Rect {
        self.surface
    }

    pub fn callbacks(&self) -> &C {
        &self.callbacks
    }

    pub fn callbacks_mut(&mut self) -> &mut C {
        &mut self.callbacks
    }

    pub fn menu(&self) -> &MenuElement {
        &self.menu
    }

    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    /// Regions in draw order, bottom (largest) first.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a drag currently holds the manipulation lock.
    pub fn is_manipulation_locked(&self) -> bool {
        self.manipulation_lock
    }

    pub fn get_region_by_id(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id() == id)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.regions.iter().position(|r| r.id() == id)
    }

    fn anchor_settings(&self) -> AnchorSettings {
        AnchorSettings {
            anchor_radius: self.config.anchor_radius,
            ghost_radius: self.config.ghost_radius,
            line_switch_threshold: self.config.line_switch_threshold,
        }
    }

    /// Adds a region.
    ///
    /// # Arguments
    ///
    /// * `id` - External id; must be unique on this canvas
    /// * `region_data` - Geometry in surface coordinates
    /// * `tags` - Tags driving the region's colors and tooltip
    ///
    /// # Errors
    ///
    /// `RegionError::InvalidGeometry` if the geometry breaks its kind's
    /// invariants, `RegionError::DuplicateId` if the id is taken.
    pub fn add_region(
        &mut self,
        id: &str,
        region_data: RegionData,
        tags: TagsDescriptor,
    ) -> Result<()> {
        region_data.validate()?;
        if self.index_of(id).is_some() {
            return Err(RegionError::DuplicateId { id: id.to_string() }.into());
        }

        let mut region = Region::new(id, region_data, tags, self.surface, self.anchor_settings());
        if self.frozen {
            region.freeze();
        }
        if !self.visible {
            region.hide();
        }
        self.styles.inject(region.style_id(), region.tags());

        region.select();
        self.menu.show_on_region(id, region.region_data());
        region.unselect();
        self.menu.hide();

        tracing::debug!(
            "Added {} region {} (area {})",
            region.region_data().kind(),
            id,
            region.area()
        );
        self.regions.push(region);
        self.sort_regions_by_area();
        Ok(())
    }

    /// Re-sorts the draw order by descending area so smaller regions stay
    /// on top and reachable.
    pub fn sort_regions_by_area(&mut self) {
        self.regions
            .sort_unstable_by(|a, b| b.area().total_cmp(&a.area()));
        self.order_changed = true;
    }

    /// Deletes a region, advancing the selection to the next region when it
    /// was the only one selected.
    pub fn delete_region_by_id(&mut self, id: &str) -> Result<()> {
        let index = self
            .index_of(id)
            .ok_or_else(|| RegionError::NotFound { id: id.to_string() })?;

        let mut selected = self
            .regions
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_selected())
            .map(|(i, _)| i);
        let only_selected = match (selected.next(), selected.next()) {
            (Some(i), None) => i == index,
            _ => false,
        };

        let len = self.regions.len();
        let next_id = if only_selected {
            let next = (index + 1) % len;
            (next != index).then(|| self.regions[next].id().to_string())
        } else {
            None
        };

        self.remove_at(index);
        if let Some(next_id) = next_id {
            self.select_region_by_id(&next_id)?;
        }
        Ok(())
    }

    /// Deletes every selected region and returns how many were removed.
    pub fn delete_selected_regions(&mut self) -> usize {
        let ids: Vec<String> = self
            .regions
            .iter()
            .filter(|r| r.is_selected())
            .map(|r| r.id().to_string())
            .collect();

        if let [id] = ids.as_slice() {
            return usize::from(self.delete_region_by_id(id).is_ok());
        }

        let mut count = 0;
        for id in &ids {
            if let Some(index) = self.index_of(id) {
                self.remove_at(index);
                count += 1;
            }
        }
        count
    }

    pub fn delete_all_regions(&mut self) {
        while !self.regions.is_empty() {
            self.remove_at(self.regions.len() - 1);
        }
        self.styles.clear();
        self.menu.hide();
    }

    fn remove_at(&mut self, index: usize) {
        let region = self.regions.remove(index);
        let id = region.id();

        self.styles.remove(region.style_id());
        self.menu.detach(id);
        self.captures.retain(|_, captured| captured.as_str() != id);
        if self.hovered.as_deref() == Some(id) {
            self.hovered = None;
        }
        if region.is_dragging() {
            self.manipulation_lock = false;
        }

        tracing::debug!("Deleted region {}", id);
        self.callbacks.on_region_delete(id, region.region_data());
        self.removed.push(region.id().to_string());
    }

    /// Every region, with geometry divided by `zoom`.
    pub fn get_all_regions(&self, zoom: f64) -> Vec<RegionExport> {
        self.export(zoom, |_| true)
    }

    pub fn get_selected_regions(&self, zoom: f64) -> Vec<RegionExport> {
        self.export(zoom, Region::is_selected)
    }

    /// Regions that carry no tags.
    pub fn get_empty_regions(&self, zoom: f64) -> Vec<RegionExport> {
        self.export(zoom, |r| r.tags().is_empty())
    }

    fn export(&self, zoom: f64, filter: impl Fn(&Region) -> bool) -> Vec<RegionExport> {
        let zoom = if zoom.is_finite() && zoom > 0.0 {
            zoom
        } else {
            tracing::warn!("Invalid zoom {}; reading out at 1.0", zoom);
            1.0
        };
        let factor = 1.0 / zoom;

        self.regions
            .iter()
            .filter(|r| filter(r))
            .map(|r| RegionExport {
                id: r.id().to_string(),
                tags: r.tags().clone(),
                region_data: r.region_data().scaled(factor, factor),
            })
            .collect()
    }

    /// Remaps every region onto a surface of the new size.
    pub fn resize(&mut self, width: f64, height: f64) {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            tracing::warn!("Ignoring resize to {}x{}", width, height);
            return;
        }

        let xf = width / self.surface.width;
        let yf = height / self.surface.height;
        self.surface = Rect::new(width, height);
        self.config.surface_width = width;
        self.config.surface_height = height;

        for region in self.regions.iter_mut() {
            let data = region.region_data();
            let (x, y, w, h) = (data.x(), data.y(), data.width(), data.height());
            region.set_surface(self.surface);
            region.move_to((x * xf, y * yf).into());
            region.resize(w * xf, h * yf);
        }

        self.menu.set_surface(self.surface);
        if let Some(id) = self.menu.attached_region().map(str::to_string) {
            if let Some(region) = self.get_region_by_id(&id) {
                let data = region.region_data().clone();
                self.menu.refresh(&id, &data);
            }
        }
        tracing::debug!("Surface resized to {}x{}", width, height);
    }

    /// Selects one region, deselecting all others.
    pub fn select_region_by_id(&mut self, id: &str) -> Result<()> {
        let index = self
            .index_of(id)
            .ok_or_else(|| RegionError::NotFound { id: id.to_string() })?;
        self.select_exclusive(index);
        Ok(())
    }

    fn select_exclusive(&mut self, index: usize) {
        for (i, region) in self.regions.iter_mut().enumerate() {
            if i != index && region.is_selected() {
                region.unselect();
            }
        }
        let region = &mut self.regions[index];
        region.select();
        self.menu.show_on_region(region.id(), region.region_data());
        self.callbacks.on_region_selected(region.id(), false);
    }

    /// Selects the region after the first selected one in draw order,
    /// wrapping to the bottom region.
    pub fn select_next_region(&mut self) {
        if self.regions.is_empty() {
            return;
        }
        let next = match self.regions.iter().position(Region::is_selected) {
            Some(i) => (i + 1) % self.regions.len(),
            None => 0,
        };
        self.select_exclusive(next);
    }

    pub fn unselect_all(&mut self) {
        for region in self.regions.iter_mut().filter(|r| r.is_selected()) {
            region.unselect();
        }
        self.menu.hide();
    }

    /// Freezes every region: pointer input is ignored and regions draw in
    /// the frozen style until `unfreeze`.
    pub fn freeze(&mut self) {
        self.frozen = true;
        for region in self.regions.iter_mut() {
            region.freeze();
        }
        self.captures.clear();
        self.manipulation_lock = false;
        self.menu.hide();
        tracing::debug!("Canvas frozen");
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
        for region in self.regions.iter_mut() {
            region.unfreeze();
        }
        if let Some(region) = self.regions.iter().find(|r| r.is_selected()) {
            self.menu.show_on_region(region.id(), region.region_data());
        }
        tracing::debug!("Canvas unfrozen");
    }

    pub fn toggle_freeze(&mut self) {
        if self.frozen {
            self.unfreeze();
        } else {
            self.freeze();
        }
    }

    /// Locks a region's geometry; it stays selectable.
    pub fn lock_region_by_id(&mut self, id: &str) -> Result<()> {
        self.region_mut(id)?.lock();
        Ok(())
    }

    pub fn unlock_region_by_id(&mut self, id: &str) -> Result<()> {
        self.region_mut(id)?.unlock();
        Ok(())
    }

    /// Replaces a region's tags and restyles it.
    pub fn update_tags_by_id(&mut self, id: &str, tags: TagsDescriptor) -> Result<()> {
        let region = self.region_mut(id)?;
        region.update_tags(tags);
        let style_id = region.style_id().to_string();
        let tags = region.tags().clone();
        self.styles.inject(&style_id, &tags);
        Ok(())
    }

    /// Hides every region, or shows them all again.
    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
        for region in self.regions.iter_mut() {
            if self.visible {
                region.show();
            } else {
                region.hide();
            }
        }
        if self.visible {
            if let Some(region) = self.regions.iter().find(|r| r.is_selected()) {
                self.menu.show_on_region(region.id(), region.region_data());
            }
        } else {
            self.menu.hide();
        }
    }

    fn region_mut(&mut self, id: &str) -> Result<&mut Region> {
        self.regions
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| RegionError::NotFound { id: id.to_string() }.into())
    }

    /// Notifies the host that a manipulation ended, unless a drag still
    /// holds the lock.
    pub fn on_manipulation_end(&mut self) {
        if self.manipulation_lock {
            tracing::trace!("Manipulation end suppressed while locked");
            return;
        }
        self.callbacks.on_manipulation_end();
    }

    /// Collects and clears everything that changed since the last frame.
    pub fn next_frame(&mut self) -> RenderFrame {
        let redraw = self
            .regions
            .iter_mut()
            .filter_map(|r| r.take_dirty().then(|| r.id().to_string()))
            .collect();
        let draw_order = std::mem::take(&mut self.order_changed)
            .then(|| self.regions.iter().map(|r| r.id().to_string()).collect());

        RenderFrame {
            redraw,
            draw_order,
            removed: std::mem::take(&mut self.removed),
            menu_changed: self.menu.take_dirty(),
        }
    }
}

impl Default for RegionsManager<NoopCallbacks> {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default(), NoopCallbacks)
    }
}
