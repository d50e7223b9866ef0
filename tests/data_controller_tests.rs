use std::fs;
use std::path::PathBuf;

use series_plot::PlotError;
use series_plot::api::{InvalidationTopic, PlotEngine, PlotEngineConfig};
use series_plot::core::series::DEFAULT_SERIES_NAME;
use series_plot::core::{DataPoint, ScreenBounds, Series};
use series_plot::render::{Color, NullRenderer};

const COLOR: Color = Color::rgb(0.6, 0.2, 0.9);

fn build_engine() -> PlotEngine<NullRenderer> {
    let config = PlotEngineConfig::new(ScreenBounds::new(600, 400));
    let mut engine =
        PlotEngine::with_default_series(NullRenderer::default(), config, COLOR).expect("engine init");
    engine.render().expect("initial render");
    engine
}

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("series_plot_{}_{name}", std::process::id()))
}

#[test]
fn default_series_is_seeded_and_active() {
    let engine = build_engine();

    assert_eq!(engine.series().len(), 1);
    assert_eq!(engine.active_series_index(), Some(0));
    let series = engine.active_series().expect("active series");
    assert_eq!(series.name(), DEFAULT_SERIES_NAME);
    assert_eq!(
        series.points(),
        &[
            DataPoint::new(1.0, 3.0),
            DataPoint::new(10.0, 30.0),
            DataPoint::new(600.0, 400.0),
        ]
    );
}

#[test]
fn point_edits_target_active_series_and_invalidate() {
    let mut engine = build_engine();

    let added = engine.append_continuation_point().expect("continue");
    assert_eq!(added, DataPoint::new(610.0, 400.0));
    assert!(engine.pending_invalidation().has_topic(InvalidationTopic::Series));

    engine.append_point(DataPoint::new(700.0, 10.0)).expect("append");
    assert_eq!(engine.active_series().map(Series::len), Some(5));

    let removed = engine.remove_last_point().expect("remove");
    assert_eq!(removed, Some(DataPoint::new(700.0, 10.0)));

    engine
        .update_point(0, DataPoint::new(0.0, 0.0))
        .expect("update");
    assert_eq!(
        engine.active_series().map(|series| series.points()[0]),
        Some(DataPoint::new(0.0, 0.0))
    );

    let err = engine
        .update_point(99, DataPoint::new(0.0, 0.0))
        .expect_err("out of range must fail");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn non_finite_points_are_rejected() {
    let mut engine = build_engine();

    let err = engine
        .append_point(DataPoint::new(f64::NAN, 1.0))
        .expect_err("nan must fail");
    assert!(matches!(err, PlotError::InvalidData(_)));

    let err = engine
        .set_series(vec![Series::new(
            "bad",
            COLOR,
            vec![DataPoint::new(0.0, f64::INFINITY)],
        )])
        .expect_err("infinite point must fail");
    assert!(matches!(err, PlotError::InvalidData(_)));
    assert_eq!(engine.series().len(), 1);
}

#[test]
fn active_series_selection_is_bounds_checked() {
    let mut engine = build_engine();
    engine.add_default_series(Color::rgb(0.0, 0.0, 1.0)).expect("add");
    assert_eq!(engine.active_series_index(), Some(1));

    engine.set_active_series(0).expect("select first");
    assert_eq!(engine.active_series_index(), Some(0));

    let err = engine.set_active_series(2).expect_err("unknown index must fail");
    assert!(matches!(err, PlotError::UnknownSeries { index: 2, count: 2 }));
}

#[test]
fn removing_series_keeps_the_last_one() {
    let mut engine = build_engine();
    engine.add_default_series(Color::rgb(0.0, 0.0, 1.0)).expect("add");

    let removed = engine.remove_last_series().expect("removed");
    assert_eq!(removed.color(), Color::rgb(0.0, 0.0, 1.0));
    assert_eq!(engine.active_series_index(), Some(0));

    assert!(engine.remove_last_series().is_none());
    assert_eq!(engine.series().len(), 1);
}

#[test]
fn set_series_replaces_and_activates_first() {
    let mut engine = build_engine();
    engine
        .set_series(vec![
            Series::new("a", COLOR, vec![DataPoint::new(0.0, 0.0)]),
            Series::new("b", COLOR, Vec::new()),
        ])
        .expect("set");
    assert_eq!(engine.active_series().map(Series::name), Some("a"));

    engine.set_series(Vec::new()).expect("clear");
    assert_eq!(engine.active_series_index(), None);
    let err = engine.append_point(DataPoint::new(1.0, 1.0)).expect_err("no active series");
    assert!(matches!(err, PlotError::UnknownSeries { count: 0, .. }));
}

#[test]
fn series_mut_edits_between_frames() {
    let mut engine = build_engine();
    engine
        .series_mut(0)
        .expect("series")
        .set_points(vec![DataPoint::new(2.0, 2.0), DataPoint::new(1.0, 1.0)]);

    assert!(engine.needs_redraw());
    assert!(!engine.series()[0].is_x_sorted());
    assert!(engine.series_mut(5).is_err());
}

#[test]
fn export_then_import_restores_points() {
    let path = temp_file("round_trip.txt");
    let mut engine = build_engine();
    engine.append_point(DataPoint::new(612.5, -3.25)).expect("append");
    engine.export_active_series(&path).expect("export");

    let exported = fs::read_to_string(&path).expect("read export");
    assert_eq!(exported, "1 3\n10 30\n600 400\n612.5 -3.25\n");

    let mut other = build_engine();
    other.import_active_series(&path).expect("import");
    let imported = other.active_series().expect("active series");
    assert_eq!(imported.points(), engine.series()[0].points());
    assert_eq!(imported.color(), COLOR);
    assert!(imported.name().ends_with("round_trip.txt"));

    fs::remove_file(&path).expect("cleanup");
}

#[test]
fn import_reports_bad_lines() {
    let path = temp_file("broken.txt");
    fs::write(&path, "1 2\n3 4 5\n").expect("write fixture");

    let mut engine = build_engine();
    let err = engine.import_active_series(&path).expect_err("must fail");
    assert!(matches!(err, PlotError::Import { line: 2, .. }));
    assert_eq!(engine.series()[0].name(), DEFAULT_SERIES_NAME);

    fs::remove_file(&path).expect("cleanup");
}

#[test]
fn import_of_missing_file_is_io_error() {
    let mut engine = build_engine();
    let err = engine
        .import_active_series(temp_file("does_not_exist.txt"))
        .expect_err("must fail");
    assert!(matches!(err, PlotError::Io(_)));
}
