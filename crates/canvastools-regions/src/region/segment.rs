//! Alt-gesture segment replacement for polygons.
//!
//! The user draws a path starting at one vertex (the seed) and ending near
//! another. That path replaces one of the two boundary arcs between those
//! vertices; the arc kept is the one that leaves the larger polygon.

use canvastools_core::constants::MIN_POLYGON_POINTS;

use crate::model::{polygon_area, Point2D, Rect};

use super::anchors::nearest_vertex;

/// Polyline being drawn from a seed vertex.
#[derive(Debug, Clone)]
pub struct PolylineSelector {
    seed_index: usize,
    points: Vec<Point2D>,
    cursor: Point2D,
    armed: bool,
}

impl PolylineSelector {
    pub fn new(seed_index: usize, seed: Point2D) -> Self {
        Self {
            seed_index,
            points: vec![seed],
            cursor: seed,
            armed: false,
        }
    }

    pub fn seed_index(&self) -> usize {
        self.seed_index
    }

    /// Seed followed by every clicked point.
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Rubber-band end following the pointer.
    pub fn cursor(&self) -> Point2D {
        self.cursor
    }

    pub fn move_cursor(&mut self, p: Point2D) {
        self.cursor = p;
    }

    /// Records a click release.
    ///
    /// The release of the press that opened the selector is swallowed;
    /// every later release adds a point.
    pub fn click(&mut self, p: Point2D, surface: &Rect) {
        if !self.armed {
            self.armed = true;
            return;
        }
        let p = p.bound_to_rect(surface);
        self.points.push(p);
        self.cursor = p;
    }
}

/// Replaces the boundary arc between the seed vertex and the vertex
/// nearest to the path's last point.
///
/// `path[0]` is the seed. Returns `None` when the polygon stays unchanged:
/// the path has no drawn point, it ends on the seed, or no candidate keeps
/// at least three points.
pub fn replace_segment(
    polygon: &[Point2D],
    seed_index: usize,
    path: &[Point2D],
) -> Option<Vec<Point2D>> {
    let n = polygon.len();
    if path.len() < 2 || seed_index >= n {
        return None;
    }

    let last = path[path.len() - 1];
    let (end_index, _) = nearest_vertex(polygon, &last)?;
    if end_index == seed_index {
        tracing::debug!("Segment edit ends on its seed vertex {}; unchanged", seed_index);
        return None;
    }

    let interior = &path[1..path.len() - 1];
    let start = |capacity: usize| {
        let mut points = Vec::with_capacity(capacity);
        points.push(polygon[seed_index]);
        points.extend_from_slice(interior);
        points
    };

    let mut forward = start(n + interior.len());
    let mut i = end_index;
    while i != seed_index {
        forward.push(polygon[i]);
        i = (i + 1) % n;
    }

    let mut backward = start(n + interior.len());
    let mut i = end_index;
    while i != seed_index {
        backward.push(polygon[i]);
        i = (i + n - 1) % n;
    }

    let valid = |c: &Vec<Point2D>| c.len() >= MIN_POLYGON_POINTS;
    match (valid(&forward), valid(&backward)) {
        (true, true) => {
            let area_forward = polygon_area(&forward);
            let area_backward = polygon_area(&backward);
            tracing::debug!(
                "Segment edit candidates: forward area {}, backward area {}",
                area_forward,
                area_backward
            );
            if area_forward > area_backward {
                Some(forward)
            } else {
                Some(backward)
            }
        }
        (true, false) => Some(forward),
        (false, true) => Some(backward),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2D> {
        vec![
            Point2D::new(100.0, 100.0),
            Point2D::new(200.0, 100.0),
            Point2D::new(200.0, 200.0),
            Point2D::new(100.0, 200.0),
        ]
    }

    fn path(points: &[(f64, f64)]) -> Vec<Point2D> {
        points.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn test_forward_wins_when_larger() {
        let replaced = replace_segment(
            &square(),
            0,
            &path(&[(100.0, 100.0), (150.0, 50.0), (200.0, 100.0)]),
        )
        .unwrap();
        assert_eq!(
            replaced,
            path(&[
                (100.0, 100.0),
                (150.0, 50.0),
                (200.0, 100.0),
                (200.0, 200.0),
                (100.0, 200.0)
            ])
        );
        assert_eq!(polygon_area(&replaced), 12500.0);
    }

    #[test]
    fn test_backward_wins_when_larger() {
        let replaced = replace_segment(
            &square(),
            0,
            &path(&[(100.0, 100.0), (120.0, 180.0), (200.0, 200.0)]),
        )
        .unwrap();
        assert_eq!(replaced.len(), 4);
        assert_eq!(polygon_area(&replaced), 8000.0);
        assert_eq!(replaced[2], Point2D::new(200.0, 200.0));
        assert_eq!(replaced[3], Point2D::new(200.0, 100.0));
    }

    #[test]
    fn test_exact_tie_picks_backward() {
        let replaced = replace_segment(
            &square(),
            0,
            &path(&[(100.0, 100.0), (150.0, 150.0), (200.0, 200.0)]),
        )
        .unwrap();
        assert_eq!(
            replaced,
            path(&[(100.0, 100.0), (150.0, 150.0), (200.0, 200.0), (200.0, 100.0)])
        );
    }

    #[test]
    fn test_last_point_snaps_to_nearest_vertex() {
        let replaced = replace_segment(
            &square(),
            0,
            &path(&[(100.0, 100.0), (150.0, 50.0), (195.0, 104.0)]),
        )
        .unwrap();
        assert!(replaced.contains(&Point2D::new(200.0, 100.0)));
        assert!(!replaced.contains(&Point2D::new(195.0, 104.0)));
    }

    #[test]
    fn test_ending_on_seed_is_noop() {
        assert!(replace_segment(
            &square(),
            0,
            &path(&[(100.0, 100.0), (150.0, 50.0), (101.0, 99.0)]),
        )
        .is_none());
    }

    #[test]
    fn test_adjacent_vertices_without_interior_discards_short_candidate() {
        let replaced =
            replace_segment(&square(), 0, &path(&[(100.0, 100.0), (200.0, 100.0)])).unwrap();
        assert_eq!(replaced, square());
    }

    #[test]
    fn test_selector_swallows_opening_release() {
        let surface = Rect::new(300.0, 300.0);
        let mut selector = PolylineSelector::new(2, Point2D::new(200.0, 200.0));
        selector.click(Point2D::new(200.0, 200.0), &surface);
        selector.click(Point2D::new(250.0, 400.0), &surface);
        assert_eq!(
            selector.points(),
            &[Point2D::new(200.0, 200.0), Point2D::new(250.0, 300.0)]
        );
    }
}
