//! Structured events a region hands back to its manager.
//!
//! Regions never call the host directly. Every interaction method returns
//! the events it produced and `RegionsManager` funnels them through
//! `on_region_change`.

use std::fmt;

use crate::model::RegionData;

/// Kind of geometry or selection change reported by a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeEventType {
    MoveBegin,
    Moving,
    MoveEnd,
    Modified,
    SelectionToggle,
}

impl fmt::Display for ChangeEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveBegin => write!(f, "MOVEBEGIN"),
            Self::Moving => write!(f, "MOVING"),
            Self::MoveEnd => write!(f, "MOVEEND"),
            Self::Modified => write!(f, "MODIFIED"),
            Self::SelectionToggle => write!(f, "SELECTIONTOGGLE"),
        }
    }
}

/// Event emitted by a region element.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionEvent {
    /// Geometry or selection changed. `region_data` is a copy the manager
    /// applies back to the region.
    Change {
        event_type: ChangeEventType,
        region_data: RegionData,
        multi_selection: bool,
    },
    /// A drag started; no other manipulation may begin until released.
    ManipulationLockRequest,
    /// The drag that held the lock ended.
    ManipulationLockRelease,
}

impl RegionEvent {
    pub fn change(event_type: ChangeEventType, region_data: RegionData) -> Self {
        Self::Change {
            event_type,
            region_data,
            multi_selection: false,
        }
    }

    pub fn event_type(&self) -> Option<ChangeEventType> {
        match self {
            Self::Change { event_type, .. } => Some(*event_type),
            _ => None,
        }
    }
}
