use std::path::PathBuf;

use canvastools::{
    dispatch_action, init_logging, render_svg, EditorAction, EditorConfig, Point2D,
    PointerEvent, RegionData, RegionsManager, RegionsManagerCallbacks, Tag, TagsDescriptor,
};
use canvastools_core::types::{shared, SharedVec};

/// Writes every notification to the log and keeps a copy for the summary.
struct LoggingCallbacks {
    log: SharedVec<String>,
}

impl LoggingCallbacks {
    fn record(&self, entry: String) {
        tracing::info!("{}", entry);
        self.log.borrow_mut().push(entry);
    }
}

impl RegionsManagerCallbacks for LoggingCallbacks {
    fn on_region_move_begin(&mut self, id: &str, _region_data: &RegionData) {
        self.record(format!("move begin: {}", id));
    }

    fn on_region_move_end(&mut self, id: &str, region_data: &RegionData) {
        self.record(format!(
            "move end: {} at ({}, {})",
            id,
            region_data.x(),
            region_data.y()
        ));
    }

    fn on_region_selected(&mut self, id: &str, multi_selection: bool) {
        self.record(format!("selected: {} (multi: {})", id, multi_selection));
    }

    fn on_region_delete(&mut self, id: &str, _region_data: &RegionData) {
        self.record(format!("deleted: {}", id));
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = match EditorConfig::default_path() {
        Some(path) if path.exists() => EditorConfig::load_or_default(&path),
        _ => EditorConfig::default(),
    };
    let registry = config.key_binding_registry()?;
    tracing::info!("{} key bindings registered", registry.len());

    let log = shared(Vec::new());
    let callbacks = LoggingCallbacks {
        log: std::rc::Rc::clone(&log),
    };
    let mut manager = RegionsManager::with_config(config.canvas_config(), callbacks);

    let vehicle = TagsDescriptor::new(vec![Tag::new("vehicle", 210.0)]);
    let person = TagsDescriptor::new(vec![Tag::new("person", 30.0)]);

    manager.add_region("car", RegionData::rect(40.0, 60.0, 220.0, 120.0), vehicle)?;
    manager.add_region("pedestrian", RegionData::rect(320.0, 80.0, 60.0, 160.0), person)?;
    manager.add_region(
        "road",
        RegionData::polygon(vec![
            Point2D::new(0.0, 400.0),
            Point2D::new(500.0, 300.0),
            Point2D::new(700.0, 580.0),
            Point2D::new(20.0, 590.0),
        ]),
        TagsDescriptor::empty(),
    )?;
    manager.add_region("landmark", RegionData::point(600.0, 120.0), TagsDescriptor::empty())?;

    manager.pointer_down(&PointerEvent::at(100.0, 100.0));
    manager.pointer_move(&PointerEvent::at(130.0, 110.0));
    manager.pointer_up(&PointerEvent::at(130.0, 110.0));
    dispatch_action(&mut manager, EditorAction::SelectNext);

    let frame = manager.next_frame();
    tracing::debug!("{} region(s) to redraw", frame.redraw.len());

    println!("{}", serde_json::to_string_pretty(&manager.get_all_regions(1.0))?);
    tracing::info!("{} notifications recorded", log.borrow().len());

    let svg = render_svg(&manager);
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            std::fs::write(&path, svg)?;
            tracing::info!("Wrote SVG to {}", path.display());
        }
        None => print!("{}", svg),
    }

    Ok(())
}
