use canvastools_regions::{Point2D, PointerEvent, RegionData, TagsDescriptor};

use super::manager;

fn setup() -> canvastools_regions::RegionsManager<super::Recorder> {
    let mut m = manager();
    m.add_region("a", RegionData::rect(10.0, 10.0, 50.0, 50.0), TagsDescriptor::empty())
        .unwrap();
    m.add_region("b", RegionData::rect(300.0, 300.0, 40.0, 40.0), TagsDescriptor::empty())
        .unwrap();
    m
}

#[test]
fn test_manipulation_end_suppressed_while_locked() {
    let mut m = setup();
    m.pointer_down(&PointerEvent::at(30.0, 30.0));
    assert!(m.is_manipulation_locked());

    m.on_manipulation_end();
    assert_eq!(m.callbacks().count("manipulation_end"), 0);

    m.pointer_up(&PointerEvent::at(30.0, 30.0));
    assert!(!m.is_manipulation_locked());
    assert_eq!(m.callbacks().count("manipulation_end"), 1);

    m.on_manipulation_end();
    assert_eq!(m.callbacks().count("manipulation_end"), 2);
}

#[test]
fn test_second_pointer_ignored_while_locked() {
    let mut m = setup();
    m.pointer_down(&PointerEvent::at(30.0, 30.0));

    let second = PointerEvent::at(320.0, 320.0).with_pointer(2);
    m.pointer_down(&second);
    m.pointer_move(&PointerEvent::at(400.0, 400.0).with_pointer(2));
    m.pointer_up(&PointerEvent::at(400.0, 400.0).with_pointer(2));

    let b = m.get_region_by_id("b").unwrap();
    assert_eq!(b.region_data().position(), Point2D::new(300.0, 300.0));
    assert!(!b.is_selected());
    assert_eq!(m.callbacks().count("move_begin:"), 1);

    m.pointer_move(&PointerEvent::at(40.0, 30.0));
    m.pointer_up(&PointerEvent::at(40.0, 30.0));
    assert_eq!(
        m.get_region_by_id("a").unwrap().region_data().x(),
        20.0
    );
}

#[test]
fn test_deleting_dragged_region_releases_lock() {
    let mut m = setup();
    m.pointer_down(&PointerEvent::at(30.0, 30.0));
    assert!(m.is_manipulation_locked());
    m.delete_region_by_id("a").unwrap();
    assert!(!m.is_manipulation_locked());
    m.pointer_up(&PointerEvent::at(30.0, 30.0));
    assert_eq!(m.len(), 1);
}
