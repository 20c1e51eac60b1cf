use serde::{Deserialize, Serialize};

/// A width/height extent anchored at the surface origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates an extent; negative sizes are clamped to zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        *self = Rect::new(width, height);
    }
}
