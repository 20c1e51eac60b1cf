//! # CanvasTools Core
//!
//! Core types and utilities shared by the CanvasTools crates:
//! error types, engine constants, the engine-facing canvas
//! configuration, and single-threaded shared-state aliases.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::CanvasConfig;
pub use error::{ConfigError, Error, RegionError, Result};
pub use types::{shared, shared_none, Shared, SharedOption, SharedVec};
