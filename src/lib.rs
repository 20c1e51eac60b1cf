//! # CanvasTools
//!
//! A headless region annotation canvas:
//! - Rectangles, points, polylines and polygons on a fixed-size surface
//! - Whole-shape dragging and anchor-based reshaping
//! - Polygon vertex insertion, deletion and segment replacement
//! - Selection, tagging, freezing and a floating delete/info menu
//! - Zoom-aware read-out and SVG rendering
//!
//! ## Architecture
//!
//! CanvasTools is organized as a workspace with multiple crates:
//!
//! 1. **canvastools-core** - Errors, constants, engine configuration
//! 2. **canvastools-regions** - Region model, components and the manager
//! 3. **canvastools-settings** - Configuration files and key bindings
//! 4. **canvastools** - Logging setup, action dispatch and the demo binary

pub use canvastools_core::{CanvasConfig, ConfigError, Error, RegionError, Result};

pub use canvastools_regions::{
    render_svg, ChangeEventType, Key, KeyEvent, MenuAction, Modifiers, NoopCallbacks,
    Point2D, PointerEvent, RegionData, RegionDataType, RegionEvent, RegionExport,
    RegionsManager, RegionsManagerCallbacks, RenderFrame, Tag, TagsDescriptor,
};

pub use canvastools_settings::{
    EditorAction, EditorConfig, KeyBinding, KeyBindingRegistry,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, `info` otherwise
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Runs an editor action against a canvas.
pub fn dispatch_action<C: RegionsManagerCallbacks>(
    manager: &mut RegionsManager<C>,
    action: EditorAction,
) {
    tracing::debug!("Dispatching {}", action);
    match action {
        EditorAction::DeleteSelected => manager.key_down(&KeyEvent::new(Key::Delete)),
        EditorAction::SelectNext => manager.key_down(&KeyEvent::new(Key::Tab)),
        EditorAction::UnselectAll => manager.unselect_all(),
        EditorAction::CancelEdit => manager.key_down(&KeyEvent::new(Key::Escape)),
        EditorAction::CompleteEdit => manager.key_down(&KeyEvent::new(Key::Enter)),
        EditorAction::ToggleFreeze => manager.toggle_freeze(),
        EditorAction::ToggleVisibility => manager.toggle_visibility(),
    }
}

/// Resolves `accelerator` through `registry` and runs the bound action.
///
/// Returns the action that ran, or `None` when nothing is bound.
pub fn handle_accelerator<C: RegionsManagerCallbacks>(
    manager: &mut RegionsManager<C>,
    registry: &KeyBindingRegistry,
    accelerator: &str,
) -> Option<EditorAction> {
    let action = registry.resolve(accelerator)?;
    dispatch_action(manager, action);
    Some(action)
}
