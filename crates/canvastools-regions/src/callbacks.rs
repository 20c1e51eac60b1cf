//! Host notification contract.

use crate::model::{Point2D, RegionData};

/// Listener for region lifecycle and manipulation events.
///
/// Implement this trait to receive notifications from a `RegionsManager`.
/// Every method has an empty default body, so hosts only override what
/// they need.
pub trait RegionsManagerCallbacks {
    /// A drag or reshape started
    fn on_manipulation_begin(&mut self) {}

    /// A manipulation finished and no drag holds the lock
    fn on_manipulation_end(&mut self) {}

    /// A region was removed from the canvas
    fn on_region_delete(&mut self, _id: &str, _region_data: &RegionData) {}

    /// A region started moving or reshaping
    fn on_region_move_begin(&mut self, _id: &str, _region_data: &RegionData) {}

    /// A region moved or reshaped (fired on every pointer move)
    fn on_region_move(&mut self, _id: &str, _region_data: &RegionData) {}

    /// A region finished moving or reshaping
    fn on_region_move_end(&mut self, _id: &str, _region_data: &RegionData) {}

    /// A region became selected
    fn on_region_selected(&mut self, _id: &str, _multi_selection: bool) {}

    /// A region was right-clicked
    fn on_region_context_menu(&mut self, _id: &str, _position: Point2D) {}

    /// The info action of the floating menu was clicked
    fn on_region_info(&mut self, _id: &str, _region_data: &RegionData) {}
}

/// Callbacks that ignore every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCallbacks;

impl RegionsManagerCallbacks for NoopCallbacks {}
