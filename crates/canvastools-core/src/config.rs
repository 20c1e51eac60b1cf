//! Engine-facing canvas configuration.
//!
//! `CanvasConfig` is the subset of the editor settings the region engine
//! reads. The settings crate embeds it and handles files.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Geometry and layout tuning for a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Drawing surface width in pixels
    pub surface_width: f64,
    /// Drawing surface height in pixels
    pub surface_height: f64,
    /// Visible anchor radius
    pub anchor_radius: f64,
    /// Ghost anchor radius (hover activation distance)
    pub ghost_radius: f64,
    /// Squared distance for the add/delete switch on polygon edges
    pub line_switch_threshold: f64,
    /// Horizontal menu offset from the region
    pub menu_dw: f64,
    /// Bottom margin kept by the menu
    pub menu_dh: f64,
    /// Menu action square size
    pub menu_action_size: f64,
    /// Gap between menu actions
    pub menu_action_gutter: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            surface_width: DEFAULT_SURFACE_WIDTH,
            surface_height: DEFAULT_SURFACE_HEIGHT,
            anchor_radius: DEFAULT_ANCHOR_RADIUS,
            ghost_radius: DEFAULT_GHOST_ANCHOR_RADIUS,
            line_switch_threshold: ANCHOR_POINT_LINE_SWITCH_THRESHOLD,
            menu_dw: MENU_DW,
            menu_dh: MENU_DH,
            menu_action_size: MENU_ACTION_SIZE,
            menu_action_gutter: MENU_ACTION_GUTTER,
        }
    }
}

impl CanvasConfig {
    /// Creates a default configuration for a surface of the given size.
    pub fn with_surface(width: f64, height: f64) -> Self {
        Self {
            surface_width: width,
            surface_height: height,
            ..Self::default()
        }
    }

    /// Validates every value, reporting the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
            ("anchor_radius", self.anchor_radius),
            ("ghost_radius", self.ghost_radius),
            ("menu_action_size", self.menu_action_size),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    reason: format!("must be a positive number, got {}", value),
                });
            }
        }

        let non_negative = [
            ("line_switch_threshold", self.line_switch_threshold),
            ("menu_dw", self.menu_dw),
            ("menu_dh", self.menu_dh),
            ("menu_action_gutter", self.menu_action_gutter),
        ];
        for (key, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    reason: format!("must not be negative, got {}", value),
                });
            }
        }

        if self.ghost_radius < self.anchor_radius {
            return Err(ConfigError::InvalidValue {
                key: "ghost_radius".to_string(),
                reason: "must be at least anchor_radius".to_string(),
            });
        }

        Ok(())
    }

    /// Returns this configuration if valid, the defaults otherwise.
    pub fn sanitized(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                tracing::warn!("Invalid canvas configuration ({}), using defaults", e);
                Self::default()
            }
        }
    }
}
