//! SVG rendering of a canvas.
//!
//! Produces a standalone SVG document:
//! - One `<g>` per visible region in draw order, classed by style id
//! - Anchors on selected regions, plus the ghost anchor when hovered
//! - The segment-edit polyline while one is in progress
//! - The floating menu when showing

use crate::callbacks::RegionsManagerCallbacks;
use crate::manager::RegionsManager;
use crate::menu::MenuElement;
use crate::model::{Point2D, RegionDataType};
use crate::region::anchors::GhostMode;
use crate::region::Region;

/// Renders the whole canvas as an SVG document.
pub fn render_svg<C: RegionsManagerCallbacks>(manager: &RegionsManager<C>) -> String {
    let surface = manager.surface();
    let config = manager.config();
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        surface.width, surface.height, surface.width, surface.height
    ));
    svg.push_str("<style>\n");
    svg.push_str(&manager.styles().css());
    svg.push_str("</style>\n");

    for region in manager.regions().iter().filter(|r| r.is_visible()) {
        svg.push_str(&render_region(region, config.anchor_radius, config.ghost_radius));
    }

    svg.push_str(&render_menu(manager.menu()));
    svg.push_str("</svg>\n");
    svg
}

/// Renders one region group.
pub fn render_region(region: &Region, anchor_radius: f64, ghost_radius: f64) -> String {
    let state = region.state();
    let data = region.region_data();

    let mut class = format!("region region-{}", region.style_id());
    if state.selected {
        class.push_str(" selected");
    }
    if state.frozen {
        class.push_str(" frozen");
    }
    if state.locked {
        class.push_str(" locked");
    }

    let mut g = format!(
        "<g class=\"{}\" data-id=\"{}\">\n",
        class,
        escape_xml(region.id())
    );
    if !region.tooltip().is_empty() {
        g.push_str(&format!("<title>{}</title>\n", escape_xml(region.tooltip())));
    }

    match data.kind() {
        RegionDataType::Point => {
            let p = data.position();
            g.push_str(&format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"/>\n",
                p.x, p.y, anchor_radius
            ));
        }
        RegionDataType::Rect => {
            g.push_str(&format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/>\n",
                data.x(),
                data.y(),
                data.width(),
                data.height()
            ));
        }
        RegionDataType::Polyline => {
            g.push_str(&format!(
                "<polyline points=\"{}\" fill=\"none\"/>\n",
                points_attr(data.points())
            ));
        }
        RegionDataType::Polygon => {
            g.push_str(&format!(
                "<polygon points=\"{}\"/>\n",
                points_attr(data.points())
            ));
        }
    }

    if state.selected && data.kind() != RegionDataType::Point {
        for p in data.points() {
            g.push_str(&format!(
                "<circle class=\"anchor\" cx=\"{}\" cy=\"{}\" r=\"{}\"/>\n",
                p.x, p.y, anchor_radius
            ));
        }
    }

    if let Some(ghost) = region.anchors().ghost() {
        let mode = match region.anchors().mode() {
            GhostMode::Drag => "drag",
            GhostMode::Add => "add",
            GhostMode::Delete => "delete",
            GhostMode::Modify => "modify",
        };
        g.push_str(&format!(
            "<circle class=\"ghost-anchor {}\" cx=\"{}\" cy=\"{}\" r=\"{}\"/>\n",
            mode, ghost.x, ghost.y, ghost_radius
        ));
    }

    if let Some(selector) = region.selector() {
        let mut points = selector.points().to_vec();
        points.push(selector.cursor());
        g.push_str(&format!(
            "<polyline class=\"selector\" points=\"{}\" fill=\"none\"/>\n",
            points_attr(&points)
        ));
    }

    g.push_str("</g>\n");
    g
}

/// Renders the menu's action buttons, or nothing when hidden.
pub fn render_menu(menu: &MenuElement) -> String {
    if !menu.is_visible() {
        return String::new();
    }

    let size = menu.extent().width;
    let mut g = String::from("<g class=\"menu\">\n");
    for (action, origin) in menu.action_origins() {
        g.push_str(&format!(
            "<rect class=\"menu-action {}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/>\n",
            action.name(),
            origin.x,
            origin.y,
            size,
            size
        ));
    }
    g.push_str("</g>\n");
    g
}

fn points_attr(points: &[Point2D]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
