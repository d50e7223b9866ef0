use series_plot::core::{
    Axis, AxisLabelLocale, AxisTickPlanner, WorldExtent, enumerate_ticks, format_tick_label,
    nice_step,
};

fn extent(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> WorldExtent {
    WorldExtent {
        min_x,
        max_x,
        min_y,
        max_y,
    }
}

#[test]
fn nice_step_for_600px_extent_is_50() {
    // 600 / 10 = 60, base 10, 60 lies in [5 * base, 10 * base).
    assert_eq!(nice_step(60.0), 50.0);
}

#[test]
fn nice_step_handles_fractional_decades() {
    assert_eq!(nice_step(0.15), 0.1);
    assert_eq!(nice_step(0.25), 0.2);
    assert_eq!(nice_step(0.7), 0.5);
    assert_eq!(nice_step(1_500.0), 1_000.0);
    assert_eq!(nice_step(100.0), 100.0);
}

#[test]
fn shared_step_is_the_coarser_axis() {
    let planner = AxisTickPlanner::default();
    // x raw 60 -> 50, y raw 40 -> 20.
    let step = planner
        .shared_step(extent(0.0, 600.0, 0.0, 400.0))
        .expect("step");
    assert_eq!(step, 50.0);
}

#[test]
fn plan_enumerates_both_axes_with_margin() {
    let planner = AxisTickPlanner::default();
    let plan = planner.plan(extent(0.0, 600.0, 0.0, 400.0)).expect("plan");

    assert_eq!(plan.step, 50.0);
    assert_eq!(plan.x.axis, Axis::X);
    assert_eq!(plan.y.axis, Axis::Y);
    assert_eq!(plan.x.positions.first().copied(), Some(-50.0));
    assert_eq!(plan.x.positions.last().copied(), Some(650.0));
    assert_eq!(plan.x.positions.len(), 15);
    assert_eq!(plan.y.positions.first().copied(), Some(-50.0));
    assert_eq!(plan.y.positions.last().copied(), Some(450.0));
    assert_eq!(plan.y.positions.len(), 11);
}

#[test]
fn origin_tick_has_no_label() {
    let planner = AxisTickPlanner::default();
    let plan = planner.plan(extent(-100.0, 100.0, -100.0, 100.0)).expect("plan");

    let labels: Vec<(f64, Option<&str>)> = plan.x.iter().collect();
    let origin = labels
        .iter()
        .find(|(value, _)| *value == 0.0)
        .expect("origin tick");
    assert_eq!(origin.1, None);
    assert!(
        labels
            .iter()
            .filter(|(value, _)| *value != 0.0)
            .all(|(_, label)| label.is_some())
    );
}

#[test]
fn ticks_are_exact_multiples_of_step() {
    let ticks = enumerate_ticks(0.3, 1.1, 0.1);
    assert!(ticks.first().copied().unwrap_or_default() <= 0.2 + 1e-9);
    for tick in &ticks {
        let ratio = tick / 0.1;
        assert!((ratio - ratio.round()).abs() <= 1e-9);
    }
    assert!(ticks.last().copied().unwrap_or_default() >= 1.1);
}

#[test]
fn invalid_step_enumerates_nothing() {
    assert!(enumerate_ticks(0.0, 10.0, 0.0).is_empty());
    assert!(enumerate_ticks(0.0, f64::NAN, 1.0).is_empty());
}

#[test]
fn spanish_locale_labels_use_comma() {
    let planner = AxisTickPlanner::new(10, AxisLabelLocale::EsEs);
    let plan = planner.plan(extent(0.0, 2.0, 0.0, 2.0)).expect("plan");

    assert_eq!(plan.step, 0.2);
    let first_positive = plan
        .x
        .iter()
        .find(|(value, _)| *value > 0.0)
        .and_then(|(_, label)| label)
        .expect("labelled tick");
    assert_eq!(first_positive, "0,2");
}

#[test]
fn huge_extent_labels_switch_to_scientific() {
    assert_eq!(
        format_tick_label(5_000_000.0, AxisLabelLocale::EnUs).as_deref(),
        Some("5E+06")
    );
    assert_eq!(
        format_tick_label(-1.5e-7, AxisLabelLocale::EsEs).as_deref(),
        Some("-1,5E-07")
    );
}

#[test]
fn densest_accepted_grid_reaches_far_edge() {
    let planner = AxisTickPlanner::new(256, AxisLabelLocale::EnUs);
    let plan = planner.plan(extent(0.0, 600.0, 0.0, 400.0)).expect("plan");

    assert!(plan.x.positions.last().copied().unwrap_or_default() >= 600.0);
    assert!(plan.y.positions.last().copied().unwrap_or_default() >= 400.0);
}

#[test]
fn wide_extent_with_fine_step_is_fully_enumerated() {
    let ticks = enumerate_ticks(0.0, 2_000.0, 1.0);
    assert_eq!(ticks.first().copied(), Some(-1.0));
    assert_eq!(ticks.last().copied(), Some(2_001.0));
    assert_eq!(ticks.len(), 2_003);
}
