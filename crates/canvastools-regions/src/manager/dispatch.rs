//! The single funnel through which region events reach the manager.

use crate::callbacks::RegionsManagerCallbacks;
use crate::events::{ChangeEventType, RegionEvent};
use crate::model::RegionData;
use crate::region::RegionComponent;

use super::RegionsManager;

impl<C: RegionsManagerCallbacks> RegionsManager<C> {
    /// Applies the events produced by region `id`, in order.
    pub(super) fn on_region_change(&mut self, id: &str, events: Vec<RegionEvent>) {
        let mut press_ended = false;
        for event in events {
            match event {
                RegionEvent::ManipulationLockRequest => {
                    self.manipulation_lock = true;
                    tracing::debug!("Manipulation lock acquired by {}", id);
                }
                RegionEvent::ManipulationLockRelease => {
                    self.manipulation_lock = false;
                    tracing::debug!("Manipulation lock released by {}", id);
                }
                RegionEvent::Change {
                    event_type,
                    region_data,
                    multi_selection,
                } => {
                    press_ended |= event_type == ChangeEventType::MoveEnd;
                    self.on_change(id, event_type, &region_data, multi_selection);
                }
            }
        }
        // A toggle for this press, if any, arrived in the same batch.
        if press_ended {
            self.press_selection = None;
        }
    }

    fn on_change(
        &mut self,
        id: &str,
        event_type: ChangeEventType,
        data: &RegionData,
        multi_selection: bool,
    ) {
        let Some(index) = self.index_of(id) else {
            tracing::debug!("Dropping {} for unknown region {}", event_type, id);
            return;
        };
        tracing::trace!("{} from {}", event_type, id);

        match event_type {
            ChangeEventType::MoveBegin => {
                let was_selected = self.regions[index].is_selected();
                self.press_selection = Some((id.to_string(), was_selected));
                if !multi_selection {
                    self.unselect_others(index);
                }
                self.regions[index].select();
                self.menu.hide();
                self.just_manipulated = false;
                self.callbacks.on_region_move_begin(id, data);
                self.callbacks.on_manipulation_begin();
            }
            ChangeEventType::Moving => {
                self.regions[index].apply(data);
                self.just_manipulated = true;
                self.callbacks.on_region_move(id, data);
            }
            ChangeEventType::MoveEnd => {
                self.regions[index].apply(data);
                if self.regions[index].is_selected() {
                    self.menu.show_on_region(id, data);
                }
                if self.just_manipulated {
                    self.sort_regions_by_area();
                }
                self.callbacks.on_region_move_end(id, data);
                self.on_manipulation_end();
            }
            ChangeEventType::Modified => {
                self.regions[index].apply(data);
                self.menu.refresh(id, data);
                self.just_manipulated = true;
                self.sort_regions_by_area();
                self.callbacks.on_region_move_end(id, data);
            }
            ChangeEventType::SelectionToggle => {
                if self.frozen {
                    return;
                }
                // A press already selected the region; toggle against the
                // state it had before that press.
                let was_selected = match self.press_selection.take() {
                    Some((pressed, was)) if pressed == id => was,
                    _ => self.regions[index].is_selected(),
                };

                if was_selected {
                    self.regions[index].unselect();
                    self.menu.detach(id);
                    if let Some(other) = self.regions.iter().find(|r| r.is_selected()) {
                        self.menu.show_on_region(other.id(), other.region_data());
                    }
                } else {
                    if !multi_selection {
                        self.unselect_others(index);
                    }
                    self.regions[index].select();
                    self.menu.show_on_region(id, data);
                    self.callbacks.on_region_selected(id, multi_selection);
                }
            }
        }
    }

    fn unselect_others(&mut self, index: usize) {
        for (i, region) in self.regions.iter_mut().enumerate() {
            if i != index && region.is_selected() {
                region.unselect();
            }
        }
    }
}
