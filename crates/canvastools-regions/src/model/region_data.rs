use std::fmt;

use canvastools_core::constants::MIN_POLYGON_POINTS;
use canvastools_core::RegionError;
use serde::{Deserialize, Serialize};

use super::{Point2D, Rect};

/// The closed set of region shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionDataType {
    Point,
    Rect,
    Polyline,
    Polygon,
}

impl fmt::Display for RegionDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point => write!(f, "point"),
            Self::Rect => write!(f, "rect"),
            Self::Polyline => write!(f, "polyline"),
            Self::Polygon => write!(f, "polygon"),
        }
    }
}

/// Geometry of one region: its kind, ordered points and cached bounding box.
///
/// The bounding box is recomputed whenever the points change. For a
/// rectangle the points are its four corners, clockwise from top-left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRegionData")]
pub struct RegionData {
    #[serde(rename = "type")]
    kind: RegionDataType,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    points: Vec<Point2D>,
}

/// Wire form accepted from hosts; normalized on the way in.
#[derive(Deserialize)]
struct RawRegionData {
    #[serde(rename = "type")]
    kind: RegionDataType,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    #[serde(default)]
    width: f64,
    #[serde(default)]
    height: f64,
    #[serde(default)]
    points: Vec<Point2D>,
}

impl From<RawRegionData> for RegionData {
    fn from(raw: RawRegionData) -> Self {
        match raw.kind {
            RegionDataType::Point if raw.points.is_empty() => RegionData::point(raw.x, raw.y),
            RegionDataType::Rect if raw.points.is_empty() => {
                RegionData::rect(raw.x, raw.y, raw.width, raw.height)
            }
            kind => RegionData::from_points(kind, raw.points),
        }
    }
}

impl RegionData {
    pub fn point(x: f64, y: f64) -> Self {
        Self {
            kind: RegionDataType::Point,
            x,
            y,
            width: 0.0,
            height: 0.0,
            points: vec![Point2D::new(x, y)],
        }
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        Self {
            kind: RegionDataType::Rect,
            x,
            y,
            width,
            height,
            points: rect_corners(x, y, width, height),
        }
    }

    pub fn polyline(points: Vec<Point2D>) -> Self {
        Self::from_points(RegionDataType::Polyline, points)
    }

    pub fn polygon(points: Vec<Point2D>) -> Self {
        Self::from_points(RegionDataType::Polygon, points)
    }

    /// Builds region data of any kind from its points.
    ///
    /// For `Rect` the points' bounding box becomes the rectangle.
    pub fn from_points(kind: RegionDataType, points: Vec<Point2D>) -> Self {
        let mut data = Self {
            kind,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            points: Vec::new(),
        };
        data.set_points(points);
        data
    }

    pub fn kind(&self) -> RegionDataType {
        self.kind
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    pub fn extent(&self) -> Rect {
        Rect::new(self.width, self.height)
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Returns `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Cached bounding box as origin and extent.
    pub fn bounding_box(&self) -> (Point2D, Rect) {
        (self.position(), self.extent())
    }

    /// Area used for z-ordering: shoelace for polygons, bounding box otherwise.
    pub fn area(&self) -> f64 {
        match self.kind {
            RegionDataType::Polygon => polygon_area(&self.points),
            _ => self.width * self.height,
        }
    }

    /// Replaces the points and recomputes the bounding box.
    pub fn set_points(&mut self, mut points: Vec<Point2D>) {
        if self.kind == RegionDataType::Point {
            points.truncate(1);
        }
        if points.is_empty() {
            self.points = points;
            self.width = 0.0;
            self.height = 0.0;
            return;
        }

        let (min_x, min_y, max_x, max_y) = points.iter().fold(
            (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
            |(min_x, min_y, max_x, max_y), p| {
                (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
            },
        );

        self.x = min_x;
        self.y = min_y;
        self.width = max_x - min_x;
        self.height = max_y - min_y;
        self.points = match self.kind {
            RegionDataType::Rect => rect_corners(self.x, self.y, self.width, self.height),
            _ => points,
        };
    }

    /// Moves the region so its bounding box origin is at `point`.
    pub fn move_to(&mut self, point: Point2D) {
        let dx = point.x - self.x;
        let dy = point.y - self.y;
        self.move_by(dx, dy);
    }

    pub fn move_by(&mut self, dx: f64, dy: f64) {
        for p in self.points.iter_mut() {
            *p = p.offset(dx, dy);
        }
        self.x += dx;
        self.y += dy;
    }

    /// Resizes the bounding box to `width` x `height`, scaling the points
    /// relative to the box origin. Points are left alone on an axis whose
    /// current extent is zero; a `Point` region never resizes.
    pub fn resize(&mut self, width: f64, height: f64) {
        let width = width.max(0.0);
        let height = height.max(0.0);

        match self.kind {
            RegionDataType::Point => {}
            RegionDataType::Rect => {
                self.width = width;
                self.height = height;
                self.points = rect_corners(self.x, self.y, width, height);
            }
            RegionDataType::Polyline | RegionDataType::Polygon => {
                let sx = if self.width > 0.0 { width / self.width } else { 1.0 };
                let sy = if self.height > 0.0 { height / self.height } else { 1.0 };
                let (ox, oy) = (self.x, self.y);
                let points = self
                    .points
                    .iter()
                    .map(|p| Point2D::new(ox + (p.x - ox) * sx, oy + (p.y - oy) * sy))
                    .collect();
                self.set_points(points);
            }
        }
    }

    /// Scales the whole geometry about the surface origin.
    pub fn scale(&mut self, fx: f64, fy: f64) {
        match self.kind {
            RegionDataType::Rect => {
                *self = RegionData::rect(
                    self.x * fx,
                    self.y * fy,
                    self.width * fx,
                    self.height * fy,
                );
            }
            _ => {
                let points = self.points.iter().map(|p| p.scale(fx, fy)).collect();
                self.set_points(points);
            }
        }
    }

    /// Returns a copy scaled about the surface origin.
    pub fn scaled(&self, fx: f64, fy: f64) -> RegionData {
        let mut copy = self.clone();
        copy.scale(fx, fy);
        copy
    }

    /// Clamps every point into the given surface.
    pub fn bound_to_rect(&mut self, rect: &Rect) {
        let points = self.points.iter().map(|p| p.bound_to_rect(rect)).collect();
        self.set_points(points);
    }

    /// Inclusive bounding-box hit test.
    pub fn contains_point(&self, point: &Point2D) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Overwrites this geometry with `other` in place.
    pub fn init_from(&mut self, other: &RegionData) {
        self.clone_from(other);
    }

    /// Checks the per-kind point count invariants.
    pub fn validate(&self) -> Result<(), RegionError> {
        let invalid = |reason: String| RegionError::InvalidGeometry {
            kind: self.kind.to_string(),
            reason,
        };

        if self.points.is_empty() {
            return Err(invalid("no points".to_string()));
        }

        if self
            .points
            .iter()
            .any(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(invalid("non-finite coordinate".to_string()));
        }

        match self.kind {
            RegionDataType::Polygon if self.points.len() < MIN_POLYGON_POINTS => Err(invalid(
                format!(
                    "needs at least {} points, got {}",
                    MIN_POLYGON_POINTS,
                    self.points.len()
                ),
            )),
            _ => Ok(()),
        }
    }
}

fn rect_corners(x: f64, y: f64, width: f64, height: f64) -> Vec<Point2D> {
    vec![
        Point2D::new(x, y),
        Point2D::new(x + width, y),
        Point2D::new(x + width, y + height),
        Point2D::new(x, y + height),
    ]
}

/// Signed shoelace area; positive for counter-clockwise point order in a
/// y-up frame.
pub fn signed_polygon_area(points: &[Point2D]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let n = points.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let p = points[i];
            let q = points[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum();
    twice / 2.0
}

/// Absolute shoelace area.
pub fn polygon_area(points: &[Point2D]) -> f64 {
    signed_polygon_area(points).abs()
}
