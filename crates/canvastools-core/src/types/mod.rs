//! Type aliases shared across the CanvasTools crates.
//!
//! - [`aliases`]: single-threaded shared state and callback aliases

pub mod aliases;

pub use aliases::*;
