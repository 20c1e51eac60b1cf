use canvastools_regions::{Point2D, RegionData, RegionExport, Tag, TagsDescriptor};

use super::manager;

#[test]
fn test_zoomed_readout_halves_coordinates() {
    let mut m = manager();
    m.add_region("r", RegionData::rect(100.0, 50.0, 40.0, 20.0), TagsDescriptor::empty())
        .unwrap();
    m.add_region(
        "p",
        RegionData::polygon(vec![
            Point2D::new(10.0, 10.0),
            Point2D::new(30.0, 10.0),
            Point2D::new(30.0, 30.0),
        ]),
        TagsDescriptor::empty(),
    )
    .unwrap();

    let out = m.get_all_regions(2.0);
    let rect = out.iter().find(|r| r.id == "r").unwrap();
    assert_eq!(rect.region_data.bounds(), (50.0, 25.0, 70.0, 35.0));
    let polygon = out.iter().find(|r| r.id == "p").unwrap();
    assert_eq!(polygon.region_data.points()[1], Point2D::new(15.0, 5.0));

    // The stored geometry is untouched.
    let stored = m.get_region_by_id("r").unwrap().region_data();
    assert_eq!(stored.x(), 100.0);
}

#[test]
fn test_selected_and_empty_readouts() {
    let mut m = manager();
    m.add_region(
        "tagged",
        RegionData::rect(0.0, 0.0, 20.0, 20.0),
        TagsDescriptor::new(vec![Tag::new("cat", 0.0)]),
    )
    .unwrap();
    m.add_region("untagged", RegionData::point(5.0, 5.0), TagsDescriptor::empty())
        .unwrap();

    assert!(m.get_selected_regions(1.0).is_empty());
    m.select_region_by_id("tagged").unwrap();
    let selected = m.get_selected_regions(1.0);
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].tags.tooltip(), "cat");

    let empty = m.get_empty_regions(1.0);
    assert_eq!(empty.len(), 1);
    assert_eq!(empty[0].id, "untagged");
}

#[test]
fn test_export_serializes_as_json() {
    let mut m = manager();
    m.add_region(
        "r",
        RegionData::rect(1.0, 2.0, 3.0, 4.0),
        TagsDescriptor::new(vec![Tag::new("cat", 30.0)]),
    )
    .unwrap();

    let json = serde_json::to_value(m.get_all_regions(1.0)).unwrap();
    assert_eq!(json[0]["id"], "r");
    assert_eq!(json[0]["region_data"]["type"], "rect");
    assert_eq!(json[0]["tags"][0]["name"], "cat");

    let back: Vec<RegionExport> = serde_json::from_value(json).unwrap();
    assert_eq!(back, m.get_all_regions(1.0));
}
