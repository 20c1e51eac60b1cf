//! Error handling for CanvasTools
//!
//! Provides error types for the layers that can actually fail:
//! - Region errors (collection management and geometry validation)
//! - Configuration errors (settings files and key bindings)
//!
//! Interactive paths (pointer and keyboard handling) never return errors;
//! they treat a missing active anchor or region as a no-op instead.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Region error type
///
/// Represents errors raised while adding, looking up, or validating regions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegionError {
    /// A region with the same external id already exists
    #[error("Region '{id}' already exists")]
    DuplicateId {
        /// The colliding external id.
        id: String,
    },

    /// No region with this external id exists
    #[error("Region '{id}' not found")]
    NotFound {
        /// The requested external id.
        id: String,
    },

    /// Geometry does not satisfy the invariants of its kind
    #[error("Invalid {kind} geometry: {reason}")]
    InvalidGeometry {
        /// The region kind name.
        kind: String,
        /// Why the geometry was rejected.
        reason: String,
    },
}

/// Configuration error type
///
/// Raised when loading settings or registering key bindings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Two bindings share the same accelerator
    #[error("Key binding '{accelerator}' is already bound to {existing}")]
    DuplicateBinding {
        /// The normalized accelerator string.
        accelerator: String,
        /// The action already registered for it.
        existing: String,
    },

    /// Accelerator could not be parsed
    #[error("Invalid accelerator '{0}'")]
    InvalidAccelerator(String),

    /// A setting has a value outside its valid range
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue {
        /// The setting name.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Settings file has an unsupported extension
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Main error type for CanvasTools
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Region error
    #[error(transparent)]
    Region(#[from] RegionError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a region error
    pub fn is_region_error(&self) -> bool {
        matches!(self, Error::Region(_))
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
