use series_plot::core::{DataPoint, VisibleRange, visible_range};

fn points(values: &[(f64, f64)]) -> Vec<DataPoint> {
    values.iter().copied().map(DataPoint::from).collect()
}

#[test]
fn seed_series_is_fully_visible_on_600px_view() {
    let points = points(&[(1.0, 3.0), (10.0, 30.0), (600.0, 400.0)]);
    let range = visible_range(&points, 0.0, 600.0).expect("range");

    assert_eq!(range, VisibleRange { start: 0, end: 2 });
    assert_eq!(range.point_count(), 3);
}

#[test]
fn narrow_window_keeps_boundary_neighbours() {
    let points: Vec<DataPoint> = (0..100).map(|i| DataPoint::new(i as f64, 0.0)).collect();
    let range = visible_range(&points, 40.5, 42.5).expect("range");

    assert_eq!(range, VisibleRange { start: 40, end: 43 });
    let slice = range.slice(&points);
    assert_eq!(slice.first().map(|p| p.x), Some(40.0));
    assert_eq!(slice.last().map(|p| p.x), Some(43.0));
}

#[test]
fn exact_boundary_points_are_included() {
    let points: Vec<DataPoint> = (0..10).map(|i| DataPoint::new(i as f64 * 10.0, 0.0)).collect();
    let range = visible_range(&points, 20.0, 50.0).expect("range");

    assert_eq!(range, VisibleRange { start: 1, end: 5 });
}

#[test]
fn window_between_two_points_draws_the_spanning_segment() {
    let points = points(&[(0.0, 0.0), (100.0, 1.0)]);
    let range = visible_range(&points, 40.0, 60.0).expect("range");

    assert_eq!(range, VisibleRange { start: 0, end: 1 });
}

#[test]
fn reversed_bounds_are_normalized() {
    let points: Vec<DataPoint> = (0..10).map(|i| DataPoint::new(i as f64, 0.0)).collect();
    assert_eq!(
        visible_range(&points, 6.0, 3.0),
        visible_range(&points, 3.0, 6.0)
    );
}

#[test]
fn single_point_series_yields_single_index() {
    let points = points(&[(5.0, 5.0)]);
    assert_eq!(
        visible_range(&points, -100.0, 100.0),
        Some(VisibleRange { start: 0, end: 0 })
    );
    assert_eq!(
        visible_range(&points, 1000.0, 2000.0),
        Some(VisibleRange { start: 0, end: 0 })
    );
}

#[test]
fn full_range_covers_every_index() {
    assert_eq!(VisibleRange::full(0), None);
    assert_eq!(VisibleRange::full(4), Some(VisibleRange { start: 0, end: 3 }));
}
