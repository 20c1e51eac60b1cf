//! CanvasTools Settings Crate
//!
//! Handles editor configuration files and keyboard shortcut bindings.

pub mod config;
pub mod keybindings;

pub use config::{AnchorSection, EditorConfig, MenuSection, SurfaceSection};
pub use keybindings::{default_bindings, normalize_accelerator, EditorAction, KeyBinding, KeyBindingRegistry};
