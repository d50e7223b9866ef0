use proptest::prelude::*;
use series_plot::core::{ScreenBounds, Vector2, Viewport};

fn zoomed_viewport(scale: f64, tx: f64, ty: f64) -> Viewport {
    let mut viewport = Viewport::for_bounds(ScreenBounds::new(1024, 768));
    viewport.zoom_by(scale, Vector2::ZERO);
    viewport.set_translation(Vector2::new(tx, ty));
    viewport
}

proptest! {
    #[test]
    fn zoom_preserves_anchor_world_point(
        scale in 0.01f64..100.0,
        tx in -10_000.0f64..10_000.0,
        ty in -10_000.0f64..10_000.0,
        factor in 0.05f64..20.0,
        ax in 0.0f64..1024.0,
        ay in 0.0f64..768.0
    ) {
        let mut viewport = zoomed_viewport(scale, tx, ty);
        let anchor = Vector2::new(ax, ay);
        let before = viewport.screen_to_world(anchor);

        viewport.zoom_by(factor, anchor);
        let after = viewport.screen_to_world(anchor);

        let tolerance = 1e-9 * (1.0 + before.x.abs().max(before.y.abs()));
        prop_assert!((after.x - before.x).abs() <= tolerance);
        prop_assert!((after.y - before.y).abs() <= tolerance);
    }

    #[test]
    fn pan_is_additive(
        scale in 0.01f64..100.0,
        d1x in -500.0f64..500.0,
        d1y in -500.0f64..500.0,
        d2x in -500.0f64..500.0,
        d2y in -500.0f64..500.0
    ) {
        let mut stepwise = zoomed_viewport(scale, 0.0, 0.0);
        stepwise.pan(Vector2::new(d1x, d1y));
        stepwise.pan(Vector2::new(d2x, d2y));

        let mut combined = zoomed_viewport(scale, 0.0, 0.0);
        combined.pan(Vector2::new(d1x + d2x, d1y + d2y));

        let tolerance = 1e-9 * (1.0 + 1_000.0 / scale);
        prop_assert!((stepwise.translation().x - combined.translation().x).abs() <= tolerance);
        prop_assert!((stepwise.translation().y - combined.translation().y).abs() <= tolerance);
    }

    #[test]
    fn zoom_in_out_round_trip(
        tx in -1_000.0f64..1_000.0,
        ty in -1_000.0f64..1_000.0,
        ax in 0.0f64..1024.0,
        ay in 0.0f64..768.0
    ) {
        let mut viewport = zoomed_viewport(1.0, tx, ty);
        let anchor = Vector2::new(ax, ay);

        viewport.zoom_by(2.0, anchor);
        viewport.zoom_by(0.5, anchor);

        prop_assert!((viewport.scale() - 1.0).abs() <= 1e-12);
        prop_assert!((viewport.translation().x - tx).abs() <= 1e-9);
        prop_assert!((viewport.translation().y - ty).abs() <= 1e-9);
    }

    #[test]
    fn world_screen_round_trip(
        scale in 0.01f64..100.0,
        tx in -1_000.0f64..1_000.0,
        ty in -1_000.0f64..1_000.0,
        sx in 0.0f64..1024.0,
        sy in 0.0f64..768.0
    ) {
        let viewport = zoomed_viewport(scale, tx, ty);
        let world = viewport.screen_to_world(Vector2::new(sx, sy));
        let screen = viewport.world_to_screen(world);

        prop_assert!((screen.x - sx).abs() <= 1e-7);
        prop_assert!((screen.y - sy).abs() <= 1e-7);
    }
}
