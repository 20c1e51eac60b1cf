//! Per-region styles derived from tags.
//!
//! Each region owns a random `style_id`; its colors are registered here
//! under that id and released when the region is deleted.

use std::collections::HashMap;

use crate::model::TagsDescriptor;

const UNTAGGED_STROKE: &str = "#808080";
const UNTAGGED_FILL: &str = "rgba(128, 128, 128, 0.2)";
const FROZEN_STROKE: &str = "#b0b0b0";

/// Colors of one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionStyle {
    pub stroke: String,
    pub fill: String,
}

impl RegionStyle {
    pub fn from_tags(tags: &TagsDescriptor) -> Self {
        match tags.primary() {
            Some(tag) => Self {
                stroke: tag.css_color(),
                fill: tag.css_fill(),
            },
            None => Self {
                stroke: UNTAGGED_STROKE.to_string(),
                fill: UNTAGGED_FILL.to_string(),
            },
        }
    }

    /// Stroke used while the canvas is frozen.
    pub fn frozen_stroke() -> &'static str {
        FROZEN_STROKE
    }
}

/// Style sheet keyed by style id.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: HashMap<String, RegionStyle>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or replaces the style for `style_id`.
    pub fn inject(&mut self, style_id: &str, tags: &TagsDescriptor) {
        self.styles
            .insert(style_id.to_string(), RegionStyle::from_tags(tags));
    }

    pub fn remove(&mut self, style_id: &str) -> Option<RegionStyle> {
        self.styles.remove(style_id)
    }

    pub fn get(&self, style_id: &str) -> Option<&RegionStyle> {
        self.styles.get(style_id)
    }

    pub fn clear(&mut self) {
        self.styles.clear();
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// CSS rules for every registered style, sorted by id.
    pub fn css(&self) -> String {
        let mut ids: Vec<&String> = self.styles.keys().collect();
        ids.sort();

        let mut css = String::new();
        for id in ids {
            if let Some(style) = self.styles.get(id) {
                css.push_str(&format!(
                    ".region-{} {{ stroke: {}; fill: {}; }}\n",
                    id, style.stroke, style.fill
                ));
            }
        }
        css.push_str(&format!(
            ".frozen {{ stroke: {}; fill: none; }}\n",
            FROZEN_STROKE
        ));
        css
    }
}
