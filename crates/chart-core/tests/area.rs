// File: crates/chart-core/tests/area.rs
// Purpose: Area paths: baselines, gaps, and curves replayed along the lower edge.

use chart_core::{area_path, AreaBaseline, CurveType, Point};

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().copied().map(Point::from).collect()
}

#[test]
fn linear_area_down_to_horizontal_baseline() {
    let d = area_path(CurveType::Linear, &pts(&[(0.0, 10.0), (10.0, 5.0)]), AreaBaseline::Horizontal(20.0));
    assert_eq!(d.as_deref(), Some("M0,10L10,5L10,20L0,20Z"));
}

#[test]
fn gap_splits_area_into_closed_pieces() {
    let data = pts(&[(0.0, 1.0), (1.0, f64::NAN), (2.0, 1.0), (3.0, 1.0)]);
    let d = area_path(CurveType::Linear, &data, AreaBaseline::Horizontal(0.0));
    assert_eq!(d.as_deref(), Some("M0,1L0,0ZM2,1L3,1L3,0L2,0Z"));
}

#[test]
fn vertical_baseline() {
    let d = area_path(CurveType::Linear, &pts(&[(5.0, 0.0), (3.0, 10.0)]), AreaBaseline::Vertical(0.0));
    assert_eq!(d.as_deref(), Some("M5,0L3,10L0,10L0,0Z"));
}

#[test]
fn explicit_baseline_points() {
    let top = pts(&[(0.0, 0.0), (1.0, 1.0)]);
    let base = pts(&[(0.0, 10.0), (1.0, 10.0)]);
    let d = area_path(CurveType::Linear, &top, AreaBaseline::Points(&base));
    assert_eq!(d.as_deref(), Some("M0,0L1,1L1,10L0,10Z"));
}

#[test]
fn short_baseline_leaves_trailing_data_undefined() {
    let top = pts(&[(0.0, 0.0), (1.0, 1.0)]);
    let base = pts(&[(0.0, 10.0)]);
    let d = area_path(CurveType::Linear, &top, AreaBaseline::Points(&base));
    assert_eq!(d.as_deref(), Some("M0,0L0,10Z"));
}

#[test]
fn undefined_baseline_point_splits_area() {
    let top = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    let base = pts(&[(0.0, 5.0), (1.0, f64::NAN), (2.0, 5.0)]);
    let d = area_path(CurveType::Linear, &top, AreaBaseline::Points(&base));
    assert_eq!(d.as_deref(), Some("M0,0L0,5ZM2,2L2,5Z"));
}

#[test]
fn step_area_mirrors_the_elbow_on_the_way_back() {
    let data = pts(&[(0.0, 1.0), (2.0, 2.0)]);
    let step = area_path(CurveType::Step, &data, AreaBaseline::Horizontal(0.0));
    assert_eq!(step.as_deref(), Some("M0,1L1,1L1,2L2,2L2,0L1,0L1,0L0,0Z"));
    let after = area_path(CurveType::StepAfter, &data, AreaBaseline::Horizontal(0.0));
    assert_eq!(after.as_deref(), Some("M0,1L2,1L2,2L2,0L2,0L0,0Z"));
}

#[test]
fn step_area_is_repeatable() {
    // The elbow flip must be undone after each piece.
    let data = pts(&[(0.0, 1.0), (2.0, 2.0), (3.0, f64::NAN), (4.0, 1.0), (6.0, 2.0)]);
    let d = area_path(CurveType::StepAfter, &data, AreaBaseline::Horizontal(0.0)).expect("path");
    assert_eq!(d, "M0,1L2,1L2,2L2,0L2,0L0,0ZM4,1L6,1L6,2L6,0L6,0L4,0Z");
}

#[test]
fn monotone_area_closes_along_baseline() {
    let data = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
    let d = area_path(CurveType::Monotone, &data, AreaBaseline::Horizontal(5.0)).expect("path");
    assert!(d.starts_with("M0,0C"), "{d}");
    assert!(d.contains(",2,0L2,5"), "{d}");
    assert!(d.ends_with(",0,5Z"), "{d}");
}

#[test]
fn empty_or_undefined_input_has_no_area() {
    for curve in CurveType::ALL {
        assert_eq!(area_path(curve, &[], AreaBaseline::Horizontal(0.0)), None);
        let data = pts(&[(f64::NAN, 0.0)]);
        assert_eq!(area_path(curve, &data, AreaBaseline::Horizontal(0.0)), None);
    }
}
