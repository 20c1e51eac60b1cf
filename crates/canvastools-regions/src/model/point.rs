use serde::{Deserialize, Serialize};

use super::Rect;

/// A point on the drawing surface.
///
/// `Point2D` is `Copy`: every operation returns a new value and never
/// mutates a point another component may be holding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to_point(&self, other: &Point2D) -> f64 {
        self.square_distance_to_point(other).sqrt()
    }

    pub fn square_distance_to_point(&self, other: &Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Squared distance from this point to the segment `a`-`b`.
    ///
    /// Degenerate segments (`a == b`) fall back to the distance to `a`.
    pub fn square_distance_to_line(&self, a: &Point2D, b: &Point2D) -> f64 {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let len2 = dx * dx + dy * dy;
        if len2 == 0.0 {
            return self.square_distance_to_point(a);
        }

        let t = (((self.x - a.x) * dx + (self.y - a.y) * dy) / len2).clamp(0.0, 1.0);
        let projection = Point2D::new(a.x + t * dx, a.y + t * dy);
        self.square_distance_to_point(&projection)
    }

    /// Clamps the point into `[0, width] x [0, height]`.
    pub fn bound_to_rect(&self, rect: &Rect) -> Point2D {
        Point2D::new(
            self.x.clamp(0.0, rect.width),
            self.y.clamp(0.0, rect.height),
        )
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point2D {
        Point2D::new(self.x + dx, self.y + dy)
    }

    pub fn scale(&self, fx: f64, fy: f64) -> Point2D {
        Point2D::new(self.x * fx, self.y * fy)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
