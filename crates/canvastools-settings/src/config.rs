//! Editor configuration files.
//!
//! Configuration is organized into sections:
//! - Surface size
//! - Anchor hit-test radii
//! - Menu layout
//! - Key bindings
//!
//! Files are JSON or TOML, chosen by extension, and live by default under
//! the platform config directory.

use std::path::{Path, PathBuf};

use canvastools_core::constants::*;
use canvastools_core::{CanvasConfig, ConfigError, Error, Result};
use serde::{Deserialize, Serialize};

use crate::keybindings::{default_bindings, KeyBinding, KeyBindingRegistry};

/// Drawing surface size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceSection {
    pub width: f64,
    pub height: f64,
}

impl Default for SurfaceSection {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
        }
    }
}

/// Anchor radii and the polygon add/delete switch distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorSection {
    pub anchor_radius: f64,
    pub ghost_radius: f64,
    pub line_switch_threshold: f64,
}

impl Default for AnchorSection {
    fn default() -> Self {
        Self {
            anchor_radius: DEFAULT_ANCHOR_RADIUS,
            ghost_radius: DEFAULT_GHOST_ANCHOR_RADIUS,
            line_switch_threshold: ANCHOR_POINT_LINE_SWITCH_THRESHOLD,
        }
    }
}

/// Floating menu layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSection {
    pub dw: f64,
    pub dh: f64,
    pub action_size: f64,
    pub gutter: f64,
}

impl Default for MenuSection {
    fn default() -> Self {
        Self {
            dw: MENU_DW,
            dh: MENU_DH,
            action_size: MENU_ACTION_SIZE,
            gutter: MENU_ACTION_GUTTER,
        }
    }
}

/// Main editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub surface: SurfaceSection,
    pub anchors: AnchorSection,
    pub menu: MenuSection,
    pub key_bindings: Vec<KeyBinding>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceSection::default(),
            anchors: AnchorSection::default(),
            menu: MenuSection::default(),
            key_bindings: default_bindings(),
        }
    }
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/canvastools/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("canvastools").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid TOML config: {}", e)))?
        } else {
            return Err(unsupported(path).into());
        };

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file is missing or
    /// invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "Could not load configuration from {} ({}), using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?
        } else {
            return Err(unsupported(path).into());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.canvas_config().validate()?;
        KeyBindingRegistry::from_bindings(&self.key_bindings)?;
        Ok(())
    }

    /// The engine-facing subset.
    pub fn canvas_config(&self) -> CanvasConfig {
        CanvasConfig {
            surface_width: self.surface.width,
            surface_height: self.surface.height,
            anchor_radius: self.anchors.anchor_radius,
            ghost_radius: self.anchors.ghost_radius,
            line_switch_threshold: self.anchors.line_switch_threshold,
            menu_dw: self.menu.dw,
            menu_dh: self.menu.dh,
            menu_action_size: self.menu.action_size,
            menu_action_gutter: self.menu.gutter,
        }
    }

    /// Builds the key binding registry.
    pub fn key_binding_registry(&self) -> Result<KeyBindingRegistry> {
        Ok(KeyBindingRegistry::from_bindings(&self.key_bindings)?)
    }
}

fn unsupported(path: &Path) -> ConfigError {
    ConfigError::UnsupportedFormat(format!(
        "{} (config file must be .json or .toml)",
        path.display()
    ))
}
