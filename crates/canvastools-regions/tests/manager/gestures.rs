use canvastools_regions::{
    polygon_area, Key, KeyEvent, Modifiers, Point2D, PointerEvent, RegionData, TagsDescriptor,
};

use super::{manager, Recorder};

type Manager = canvastools_regions::RegionsManager<Recorder>;

fn square() -> Vec<Point2D> {
    vec![
        Point2D::new(100.0, 100.0),
        Point2D::new(200.0, 100.0),
        Point2D::new(200.0, 200.0),
        Point2D::new(100.0, 200.0),
    ]
}

fn with_polygon(points: Vec<Point2D>) -> Manager {
    let mut m = manager();
    m.add_region("poly", RegionData::polygon(points), TagsDescriptor::empty())
        .unwrap();
    m
}

fn points(m: &Manager) -> Vec<Point2D> {
    m.get_region_by_id("poly")
        .unwrap()
        .region_data()
        .points()
        .to_vec()
}

fn press(m: &mut Manager, x: f64, y: f64, modifiers: Modifiers) {
    let ev = PointerEvent::at(x, y).with_modifiers(modifiers);
    m.pointer_move(&ev);
    m.pointer_down(&ev);
    m.pointer_up(&ev);
    m.click(&ev);
}

#[test]
fn test_ctrl_click_on_edge_inserts_vertex() {
    let mut m = with_polygon(square());
    press(&mut m, 150.0, 101.0, Modifiers::ctrl());

    let pts = points(&m);
    assert_eq!(pts.len(), 5);
    assert_eq!(pts[1], Point2D::new(150.0, 101.0));
    assert_eq!(m.callbacks().count("move_end:poly"), 1);
}

#[test]
fn test_ctrl_click_on_vertex_deletes_it() {
    let mut m = with_polygon(square());
    press(&mut m, 101.0, 101.0, Modifiers::ctrl());

    let pts = points(&m);
    assert_eq!(pts.len(), 3);
    assert!(!pts.contains(&Point2D::new(100.0, 100.0)));
}

#[test]
fn test_ctrl_click_cannot_shrink_triangle() {
    let triangle = vec![
        Point2D::new(100.0, 100.0),
        Point2D::new(200.0, 100.0),
        Point2D::new(150.0, 200.0),
    ];
    let mut m = with_polygon(triangle.clone());
    press(&mut m, 100.0, 100.0, Modifiers::ctrl());
    assert_eq!(points(&m), triangle);
    assert_eq!(m.callbacks().count("move_end:"), 0);
}

#[test]
fn test_alt_segment_edit_completed_with_enter() {
    let mut m = with_polygon(square());
    press(&mut m, 100.0, 100.0, Modifiers::alt());
    assert!(m.get_region_by_id("poly").unwrap().has_selector());

    press(&mut m, 150.0, 50.0, Modifiers::NONE);
    press(&mut m, 200.0, 100.0, Modifiers::NONE);
    m.key_down(&KeyEvent::new(Key::Enter));

    let pts = points(&m);
    assert!(!m.get_region_by_id("poly").unwrap().has_selector());
    assert_eq!(pts.len(), 5);
    assert_eq!(pts[1], Point2D::new(150.0, 50.0));
    assert_eq!(polygon_area(&pts), 12500.0);
    assert_eq!(m.get_region_by_id("poly").unwrap().region_data().y(), 50.0);
}

#[test]
fn test_alt_segment_edit_tie_keeps_backward_arc() {
    let mut m = with_polygon(square());
    press(&mut m, 100.0, 100.0, Modifiers::alt());
    press(&mut m, 150.0, 150.0, Modifiers::NONE);
    press(&mut m, 200.0, 200.0, Modifiers::NONE);
    m.double_click(&PointerEvent::at(200.0, 200.0));

    assert_eq!(
        points(&m),
        vec![
            Point2D::new(100.0, 100.0),
            Point2D::new(150.0, 150.0),
            Point2D::new(200.0, 200.0),
            Point2D::new(200.0, 100.0),
        ]
    );
}

#[test]
fn test_escape_cancels_segment_edit() {
    let mut m = with_polygon(square());
    press(&mut m, 100.0, 100.0, Modifiers::alt());
    press(&mut m, 150.0, 50.0, Modifiers::NONE);
    m.key_down(&KeyEvent::new(Key::Escape));

    assert!(!m.get_region_by_id("poly").unwrap().has_selector());
    assert_eq!(points(&m), square());
}

#[test]
fn test_segment_edit_ending_on_seed_is_noop() {
    let mut m = with_polygon(square());
    press(&mut m, 100.0, 100.0, Modifiers::alt());
    press(&mut m, 150.0, 50.0, Modifiers::NONE);
    press(&mut m, 102.0, 98.0, Modifiers::NONE);
    m.key_down(&KeyEvent::new(Key::Enter));
    assert_eq!(points(&m), square());
}

#[test]
fn test_rect_corner_drag_resorts_z_order() {
    let mut m = manager();
    m.add_region("a", RegionData::rect(0.0, 0.0, 100.0, 100.0), TagsDescriptor::empty())
        .unwrap();
    m.add_region("b", RegionData::rect(300.0, 300.0, 50.0, 50.0), TagsDescriptor::empty())
        .unwrap();
    assert_eq!(m.regions()[0].id(), "a");

    m.pointer_move(&PointerEvent::at(350.0, 350.0));
    m.pointer_down(&PointerEvent::at(350.0, 350.0));
    assert!(m.is_manipulation_locked());
    m.pointer_move(&PointerEvent::at(500.0, 500.0));
    m.pointer_up(&PointerEvent::at(500.0, 500.0));

    let b = m.get_region_by_id("b").unwrap().region_data();
    assert_eq!(b.bounds(), (300.0, 300.0, 500.0, 500.0));
    assert_eq!(m.regions()[0].id(), "b");
    assert_eq!(m.callbacks().count("manipulation_end"), 1);
}

#[test]
fn test_polygon_vertex_drag_clamped_to_surface() {
    let mut m = with_polygon(square());
    m.pointer_down(&PointerEvent::at(200.0, 200.0));
    m.pointer_move(&PointerEvent::at(1200.0, 250.0));
    m.pointer_up(&PointerEvent::at(1200.0, 250.0));
    assert_eq!(points(&m)[2], Point2D::new(800.0, 250.0));
}
