//! Geometry and tag value types.

mod point;
mod rect;
mod region_data;
mod tags;

pub use point::Point2D;
pub use rect::Rect;
pub use region_data::{polygon_area, signed_polygon_area, RegionData, RegionDataType};
pub use tags::{Tag, TagsDescriptor};
