//! # CanvasTools Regions
//!
//! Headless region annotation engine: rectangles, points, polylines and
//! polygons that can be dragged, reshaped through anchors, selected,
//! tagged and deleted on a fixed-size drawing surface.
//!
//! ## Architecture
//!
//! ```text
//! RegionsManager (collection, z-order, selection, lock)
//!   ├── Region (one per annotation)
//!   │     ├── DragElement (whole-shape moves)
//!   │     ├── AnchorsComponent (ghost anchor, polygon gestures)
//!   │     └── PolylineSelector (segment replacement)
//!   ├── MenuElement (delete / info actions)
//!   └── StyleRegistry (per-region colors)
//! ```
//!
//! Regions report every change as a `RegionEvent`; the manager applies
//! them and notifies the host through `RegionsManagerCallbacks`. Redraws
//! are coalesced into a `RenderFrame` the host pulls once per frame.
//!
//! ## Usage
//!
//! ```rust
//! use canvastools_regions::{NoopCallbacks, PointerEvent, RegionData, RegionsManager, TagsDescriptor};
//!
//! let mut manager = RegionsManager::new(800.0, 600.0, NoopCallbacks);
//! manager
//!     .add_region("r1", RegionData::rect(10.0, 10.0, 50.0, 50.0), TagsDescriptor::empty())
//!     .unwrap();
//!
//! manager.pointer_down(&PointerEvent::at(30.0, 30.0));
//! manager.pointer_move(&PointerEvent::at(40.0, 30.0));
//! manager.pointer_up(&PointerEvent::at(40.0, 30.0));
//!
//! let regions = manager.get_all_regions(2.0);
//! assert_eq!(regions[0].region_data.x(), 10.0);
//! ```

pub mod callbacks;
pub mod events;
pub mod frame;
pub mod input;
pub mod manager;
pub mod menu;
pub mod model;
pub mod region;
pub mod style;
pub mod svg;

pub use callbacks::{NoopCallbacks, RegionsManagerCallbacks};
pub use events::{ChangeEventType, RegionEvent};
pub use frame::RenderFrame;
pub use input::{Key, KeyEvent, Modifiers, PointerEvent};
pub use manager::{RegionExport, RegionsManager};
pub use menu::{MenuAction, MenuElement};
pub use model::{
    polygon_area, signed_polygon_area, Point2D, Rect, RegionData, RegionDataType, Tag,
    TagsDescriptor,
};
pub use region::anchors::{ActiveAnchor, AnchorSettings, GhostMode};
pub use region::{ComponentState, PaperRects, Region, RegionComponent};
pub use style::{RegionStyle, StyleRegistry};
pub use svg::render_svg;
