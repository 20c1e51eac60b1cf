use canvastools_regions::{
    Key, KeyEvent, Point2D, RegionComponent, RegionData, RegionDataType, Tag, TagsDescriptor,
};

use super::{manager, selected_ids};

fn tags(name: &str) -> TagsDescriptor {
    TagsDescriptor::new(vec![Tag::new(name, 200.0)])
}

fn ids(m: &canvastools_regions::RegionsManager<super::Recorder>) -> Vec<&str> {
    m.regions().iter().map(|r| r.id()).collect()
}

fn three_regions() -> canvastools_regions::RegionsManager<super::Recorder> {
    let mut m = manager();
    m.add_region("small", RegionData::rect(0.0, 0.0, 10.0, 10.0), tags("a"))
        .unwrap();
    m.add_region("large", RegionData::rect(0.0, 0.0, 100.0, 100.0), tags("b"))
        .unwrap();
    m.add_region("medium", RegionData::rect(0.0, 0.0, 50.0, 50.0), tags("c"))
        .unwrap();
    m
}

#[test]
fn test_regions_sorted_by_descending_area_after_add() {
    let mut m = three_regions();
    m.add_region(
        "triangle",
        RegionData::polygon(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(100.0, 0.0),
            Point2D::new(0.0, 100.0),
        ]),
        tags("d"),
    )
    .unwrap();

    assert_eq!(ids(&m), vec!["large", "triangle", "medium", "small"]);
    let areas: Vec<f64> = m.regions().iter().map(|r| r.area()).collect();
    assert!(areas.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_polyline_area_is_bounding_box() {
    let mut m = manager();
    m.add_region(
        "line",
        RegionData::polyline(vec![Point2D::new(0.0, 0.0), Point2D::new(20.0, 10.0)]),
        TagsDescriptor::empty(),
    )
    .unwrap();
    let region = m.get_region_by_id("line").unwrap();
    assert_eq!(region.region_data().kind(), RegionDataType::Polyline);
    assert_eq!(region.area(), 200.0);
}

#[test]
fn test_delete_advances_to_next_in_pre_deletion_order() {
    let mut m = three_regions();
    m.select_region_by_id("medium").unwrap();
    m.delete_region_by_id("medium").unwrap();
    assert_eq!(selected_ids(&m), vec!["small"]);

    m.delete_region_by_id("small").unwrap();
    assert_eq!(selected_ids(&m), vec!["large"]);
    assert_eq!(m.callbacks().count("delete:"), 2);
}

#[test]
fn test_delete_last_remaining_selected_region() {
    let mut m = manager();
    m.add_region("only", RegionData::point(5.0, 5.0), TagsDescriptor::empty())
        .unwrap();
    m.select_region_by_id("only").unwrap();
    m.delete_region_by_id("only").unwrap();
    assert!(m.is_empty());
    assert!(!m.menu().is_visible());
    assert!(m.styles().is_empty());
}

#[test]
fn test_delete_unselected_region_keeps_selection() {
    let mut m = three_regions();
    m.select_region_by_id("large").unwrap();
    m.delete_region_by_id("small").unwrap();
    assert_eq!(selected_ids(&m), vec!["large"]);
}

#[test]
fn test_delete_key_with_multi_selection_does_not_advance() {
    let mut m = three_regions();
    m.select_region_by_id("large").unwrap();
    m.pointer_down(&canvastools_regions::PointerEvent::at(5.0, 5.0).with_modifiers(
        canvastools_regions::Modifiers::shift(),
    ));
    m.pointer_up(&canvastools_regions::PointerEvent::at(5.0, 5.0));
    assert_eq!(selected_ids(&m).len(), 2);

    m.key_down(&KeyEvent::new(Key::Delete));
    assert_eq!(ids(&m), vec!["medium"]);
    assert!(selected_ids(&m).is_empty());
}

#[test]
fn test_delete_all_regions() {
    let mut m = three_regions();
    m.delete_all_regions();
    assert!(m.is_empty());
    assert_eq!(m.callbacks().count("delete:"), 3);
    let frame = m.next_frame();
    assert_eq!(frame.removed.len(), 3);
}

#[test]
fn test_resize_remaps_regions() {
    let mut m = canvastools_regions::RegionsManager::new(400.0, 300.0, super::Recorder::default());
    m.add_region("r", RegionData::rect(10.0, 10.0, 50.0, 50.0), TagsDescriptor::empty())
        .unwrap();
    m.resize(800.0, 600.0);

    let data = m.get_region_by_id("r").unwrap().region_data().clone();
    assert_eq!(data.bounds(), (20.0, 20.0, 120.0, 120.0));
    assert_eq!(data.width(), 100.0);
    assert_eq!(m.surface().width, 800.0);
}

#[test]
fn test_resize_scales_polygon_vertices() {
    let mut m = canvastools_regions::RegionsManager::new(400.0, 300.0, super::Recorder::default());
    m.add_region(
        "p",
        RegionData::polygon(vec![
            Point2D::new(10.0, 10.0),
            Point2D::new(30.0, 10.0),
            Point2D::new(20.0, 40.0),
        ]),
        TagsDescriptor::empty(),
    )
    .unwrap();
    m.resize(800.0, 600.0);
    let points = m.get_region_by_id("p").unwrap().region_data().points().to_vec();
    assert_eq!(
        points,
        vec![
            Point2D::new(20.0, 20.0),
            Point2D::new(60.0, 20.0),
            Point2D::new(40.0, 80.0)
        ]
    );
}

#[test]
fn test_freeze_blocks_deletion_and_unfreeze_restores_menu() {
    let mut m = three_regions();
    m.select_region_by_id("small").unwrap();
    m.freeze();
    assert!(m.is_frozen());
    assert!(!m.menu().is_visible());

    m.key_down(&KeyEvent::new(Key::Delete));
    assert_eq!(m.len(), 3);

    m.toggle_freeze();
    assert!(!m.is_frozen());
    assert!(m.menu().is_visible());
    assert_eq!(m.menu().attached_region(), Some("small"));
}

#[test]
fn test_regions_added_while_frozen_are_frozen() {
    let mut m = manager();
    m.freeze();
    m.add_region("r", RegionData::rect(0.0, 0.0, 5.0, 5.0), TagsDescriptor::empty())
        .unwrap();
    assert!(m.get_region_by_id("r").unwrap().is_frozen());
}

#[test]
fn test_tab_cycles_selection_with_wrap() {
    let mut m = three_regions();
    let tab = KeyEvent::new(Key::Tab);
    m.key_down(&tab);
    assert_eq!(selected_ids(&m), vec!["large"]);
    m.key_down(&tab);
    assert_eq!(selected_ids(&m), vec!["medium"]);
    m.key_down(&tab);
    m.key_down(&tab);
    assert_eq!(selected_ids(&m), vec!["large"]);
}

#[test]
fn test_update_tags_replaces_descriptor_and_style() {
    let mut m = three_regions();
    let style_id = m.get_region_by_id("small").unwrap().style_id().to_string();
    let before = m.styles().get(&style_id).unwrap().stroke.clone();

    m.update_tags_by_id(
        "small",
        TagsDescriptor::new(vec![Tag::new("dog", 90.0), Tag::new("pet", 10.0)]),
    )
    .unwrap();

    let region = m.get_region_by_id("small").unwrap();
    assert_eq!(region.tooltip(), "dog, pet");
    assert_ne!(m.styles().get(&style_id).unwrap().stroke, before);
    assert!(m.update_tags_by_id("missing", TagsDescriptor::empty()).is_err());
}

#[test]
fn test_toggle_visibility_hides_everything() {
    let mut m = three_regions();
    m.select_region_by_id("large").unwrap();
    m.toggle_visibility();
    assert!(m.regions().iter().all(|r| !r.is_visible()));
    assert!(!m.menu().is_visible());
    m.toggle_visibility();
    assert!(m.regions().iter().all(|r| r.is_visible()));
    assert!(m.menu().is_visible());
}

#[test]
fn test_region_component_moves_keep_paper_rects() {
    let m = three_regions();
    let mut region = m.get_region_by_id("small").unwrap().clone();
    region.move_to(Point2D::new(100.0, 100.0));
    assert_eq!(region.paper_rects().actual.width, 790.0);
    assert!(region.contains_point(&Point2D::new(105.0, 105.0)));
    assert!(!region.contains_point(&Point2D::new(5.0, 5.0)));
}

#[test]
fn test_delete_one_of_two_selected_does_not_advance() {
    let mut m = three_regions();
    m.select_region_by_id("large").unwrap();
    let ev = canvastools_regions::PointerEvent::at(5.0, 5.0)
        .with_modifiers(canvastools_regions::Modifiers::shift());
    m.pointer_down(&ev);
    m.pointer_up(&ev);
    assert_eq!(selected_ids(&m), vec!["large", "small"]);

    m.delete_region_by_id("large").unwrap();
    assert_eq!(selected_ids(&m), vec!["small"]);
}
