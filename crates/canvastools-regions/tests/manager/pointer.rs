use canvastools_regions::{Modifiers, Point2D, PointerEvent, RegionData, TagsDescriptor};

use super::{manager, selected_ids, Recorder};

fn click(m: &mut canvastools_regions::RegionsManager<Recorder>, x: f64, y: f64) {
    let ev = PointerEvent::at(x, y);
    m.pointer_down(&ev);
    m.pointer_up(&ev);
    m.click(&ev);
}

fn two_rects() -> canvastools_regions::RegionsManager<Recorder> {
    let mut m = manager();
    m.add_region("big", RegionData::rect(100.0, 100.0, 200.0, 200.0), TagsDescriptor::empty())
        .unwrap();
    m.add_region("inner", RegionData::rect(150.0, 150.0, 20.0, 20.0), TagsDescriptor::empty())
        .unwrap();
    m
}

#[test]
fn test_click_selects_topmost_region() {
    let mut m = two_rects();
    click(&mut m, 160.0, 160.0);
    assert_eq!(selected_ids(&m), vec!["inner"]);
    assert_eq!(m.menu().attached_region(), Some("inner"));
    assert!(m.menu().is_visible());
    assert_eq!(m.callbacks().count("selected:inner:false"), 1);
}

#[test]
fn test_click_switches_single_selection() {
    let mut m = two_rects();
    click(&mut m, 160.0, 160.0);
    click(&mut m, 250.0, 250.0);
    assert_eq!(selected_ids(&m), vec!["big"]);
}

#[test]
fn test_click_on_selected_region_toggles_it_off() {
    let mut m = two_rects();
    click(&mut m, 160.0, 160.0);
    click(&mut m, 160.0, 160.0);
    assert!(selected_ids(&m).is_empty());
    assert!(!m.menu().is_visible());
}

#[test]
fn test_shift_click_extends_selection() {
    let mut m = two_rects();
    click(&mut m, 160.0, 160.0);
    let ev = PointerEvent::at(250.0, 250.0).with_modifiers(Modifiers::shift());
    m.pointer_down(&ev);
    m.pointer_up(&ev);
    assert_eq!(selected_ids(&m), vec!["big", "inner"]);
    assert_eq!(m.callbacks().count("selected:big:true"), 1);
}

#[test]
fn test_click_on_empty_canvas_clears_selection() {
    let mut m = two_rects();
    click(&mut m, 160.0, 160.0);
    click(&mut m, 600.0, 500.0);
    assert!(selected_ids(&m).is_empty());
}

#[test]
fn test_click_after_drag_does_not_clear_selection() {
    let mut m = two_rects();
    m.pointer_down(&PointerEvent::at(160.0, 160.0));
    m.pointer_move(&PointerEvent::at(500.0, 400.0));
    m.pointer_up(&PointerEvent::at(500.0, 400.0));
    // The host reports the click where the pointer was released.
    m.click(&PointerEvent::at(700.0, 550.0));
    assert_eq!(selected_ids(&m), vec!["inner"]);

    click(&mut m, 700.0, 550.0);
    assert!(selected_ids(&m).is_empty());
}

#[test]
fn test_drag_moves_region_and_reports_lifecycle() {
    let mut m = two_rects();
    m.pointer_down(&PointerEvent::at(160.0, 160.0));
    m.pointer_move(&PointerEvent::at(170.0, 165.0));
    m.pointer_move(&PointerEvent::at(180.0, 170.0));
    m.pointer_up(&PointerEvent::at(180.0, 170.0));

    let data = m.get_region_by_id("inner").unwrap().region_data();
    assert_eq!(data.position(), Point2D::new(170.0, 160.0));
    assert_eq!(
        m.callbacks().calls,
        vec![
            "move_begin:inner",
            "manipulation_begin",
            "move:inner",
            "move:inner",
            "move_end:inner",
            "manipulation_end",
        ]
    );
    assert!(m.get_region_by_id("inner").unwrap().is_selected());
    assert!(m.menu().is_visible());
}

#[test]
fn test_drag_is_clamped_to_surface() {
    let mut m = two_rects();
    m.pointer_down(&PointerEvent::at(160.0, 160.0));
    m.pointer_move(&PointerEvent::at(2000.0, -500.0));
    m.pointer_up(&PointerEvent::at(2000.0, -500.0));
    let data = m.get_region_by_id("inner").unwrap().region_data();
    assert_eq!(data.bounds(), (780.0, 0.0, 800.0, 20.0));
}

#[test]
fn test_menu_delete_action() {
    let mut m = two_rects();
    click(&mut m, 160.0, 160.0);
    let delete = m.menu().action_origins()[0].1;
    m.click(&PointerEvent::at(delete.x + 1.0, delete.y + 1.0));
    assert!(m.get_region_by_id("inner").is_none());
    assert_eq!(m.callbacks().count("delete:inner"), 1);
    // The only selected region was deleted; selection advanced.
    assert_eq!(selected_ids(&m), vec!["big"]);
}

#[test]
fn test_menu_info_action() {
    let mut m = two_rects();
    click(&mut m, 160.0, 160.0);
    let info = m.menu().action_origins()[1].1;
    m.click(&PointerEvent::at(info.x + 1.0, info.y + 1.0));
    assert_eq!(m.callbacks().count("info:inner"), 1);
    assert_eq!(m.len(), 2);
}

#[test]
fn test_context_menu_selects_topmost_bbox() {
    let mut m = two_rects();
    assert!(m.context_menu(&PointerEvent::at(160.0, 160.0)));
    assert_eq!(selected_ids(&m), vec!["inner"]);
    assert_eq!(m.callbacks().count("context_menu:inner"), 1);

    assert!(!m.context_menu(&PointerEvent::at(10.0, 10.0)));
}

#[test]
fn test_locked_region_selects_but_does_not_move() {
    let mut m = two_rects();
    m.lock_region_by_id("inner").unwrap();
    m.pointer_down(&PointerEvent::at(160.0, 160.0));
    m.pointer_move(&PointerEvent::at(300.0, 300.0));
    m.pointer_up(&PointerEvent::at(300.0, 300.0));

    let region = m.get_region_by_id("inner").unwrap();
    assert_eq!(region.region_data().position(), Point2D::new(150.0, 150.0));
    assert!(region.is_selected());

    m.unlock_region_by_id("inner").unwrap();
    m.pointer_down(&PointerEvent::at(160.0, 160.0));
    m.pointer_move(&PointerEvent::at(170.0, 160.0));
    m.pointer_up(&PointerEvent::at(170.0, 160.0));
    assert_eq!(
        m.get_region_by_id("inner").unwrap().region_data().x(),
        160.0
    );
}

#[test]
fn test_frozen_canvas_ignores_pointer() {
    let mut m = two_rects();
    m.freeze();
    m.pointer_down(&PointerEvent::at(160.0, 160.0));
    m.pointer_move(&PointerEvent::at(300.0, 300.0));
    m.pointer_up(&PointerEvent::at(300.0, 300.0));
    assert!(m.callbacks().calls.is_empty());
    assert!(selected_ids(&m).is_empty());
}

#[test]
fn test_render_frame_after_drag() {
    let mut m = two_rects();
    m.next_frame();
    m.pointer_down(&PointerEvent::at(160.0, 160.0));
    m.pointer_move(&PointerEvent::at(170.0, 160.0));
    let frame = m.next_frame();
    assert_eq!(frame.redraw, vec!["inner".to_string()]);
    assert!(!frame.menu_changed);
    m.pointer_up(&PointerEvent::at(170.0, 160.0));
    let frame = m.next_frame();
    assert!(frame.menu_changed);
    assert_eq!(
        frame.draw_order,
        Some(vec!["big".to_string(), "inner".to_string()])
    );
}

#[test]
fn test_locked_click_after_drag_unselects_selected_region() {
    let mut m = two_rects();
    m.pointer_down(&PointerEvent::at(160.0, 160.0));
    m.pointer_move(&PointerEvent::at(170.0, 160.0));
    m.pointer_up(&PointerEvent::at(170.0, 160.0));
    m.click(&PointerEvent::at(170.0, 160.0));
    assert_eq!(selected_ids(&m), vec!["inner"]);

    m.lock_region_by_id("inner").unwrap();
    m.pointer_down(&PointerEvent::at(170.0, 160.0));
    m.pointer_up(&PointerEvent::at(170.0, 160.0));
    assert!(!m.get_region_by_id("inner").unwrap().is_selected());
    assert!(!m.menu().is_visible());
}
