//! Engine-wide constants.
//!
//! Distances are in drawing-surface pixels unless stated otherwise.

/// Default drawing surface width.
pub const DEFAULT_SURFACE_WIDTH: f64 = 800.0;

/// Default drawing surface height.
pub const DEFAULT_SURFACE_HEIGHT: f64 = 600.0;

/// Radius of the visible anchor dot drawn on each vertex.
pub const DEFAULT_ANCHOR_RADIUS: f64 = 3.0;

/// Radius of the ghost anchor; also the hover distance that activates an anchor.
pub const DEFAULT_GHOST_ANCHOR_RADIUS: f64 = 7.0;

/// Squared distance below which a ctrl-hover over a polygon edge snaps
/// to deleting the nearest vertex instead of inserting a new one.
pub const ANCHOR_POINT_LINE_SWITCH_THRESHOLD: f64 = 5.0;

/// Horizontal gap between a region and its floating menu.
pub const MENU_DW: f64 = 5.0;

/// Bottom margin the floating menu keeps from the surface edge.
pub const MENU_DH: f64 = 5.0;

/// Side of one square menu action.
pub const MENU_ACTION_SIZE: f64 = 20.0;

/// Gap between stacked menu actions.
pub const MENU_ACTION_GUTTER: f64 = 1.0;

/// Smallest polygon the editor keeps; deletes below this are rejected.
pub const MIN_POLYGON_POINTS: usize = 3;
