use proptest::prelude::*;
use series_plot::core::{
    CurveGeometry, CurveStyle, DataPoint, build_curve, enumerate_ticks, nice_step, visible_range,
};

fn sorted_points(max_len: usize) -> impl Strategy<Value = Vec<DataPoint>> {
    prop::collection::vec((0.0f64..50.0, -1_000.0f64..1_000.0), 0..max_len).prop_map(|steps| {
        let mut x = -500.0;
        steps
            .into_iter()
            .map(|(dx, y)| {
                x += dx;
                DataPoint::new(x, y)
            })
            .collect()
    })
}

fn is_nice(step: f64) -> bool {
    let exponent = step.log10().floor();
    let mantissa = step / 10f64.powf(exponent);
    [1.0, 2.0, 5.0, 10.0]
        .iter()
        .any(|candidate| (mantissa - candidate).abs() <= 1e-9)
}

proptest! {
    #[test]
    fn nice_step_is_a_nice_value_within_its_decade(raw in 1e-9f64..1e9) {
        let step = nice_step(raw);
        let base = 10f64.powi(raw.log10().floor() as i32);

        prop_assert!(is_nice(step));
        prop_assert!(step >= base * (1.0 - 1e-12));
        prop_assert!(step <= raw * (1.0 + 1e-9));
        prop_assert!(step <= 10.0 * base * (1.0 + 1e-12));
    }

    #[test]
    fn ticks_cover_extent_with_one_step_margin(
        min in -1e6f64..1e6,
        span in 1e-3f64..1e6
    ) {
        let max = min + span;
        let step = nice_step(span / 10.0);
        let ticks = enumerate_ticks(min, max, step);

        prop_assert!(!ticks.is_empty());
        let slack = 1e-9 * (1.0 + min.abs().max(max.abs()));
        prop_assert!(ticks[0] <= min - step + slack);
        prop_assert!(ticks[ticks.len() - 1] >= max - slack);
        prop_assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn visible_range_never_drops_points_inside_window(
        points in sorted_points(200),
        left in -600.0f64..5_000.0,
        width in 0.0f64..2_000.0
    ) {
        let right = left + width;
        let Some(range) = visible_range(&points, left, right) else {
            prop_assert!(points.is_empty());
            return Ok(());
        };

        prop_assert!(range.start <= range.end);
        prop_assert!(range.end < points.len());
        for (index, point) in points.iter().enumerate() {
            if point.x >= left && point.x < right {
                prop_assert!(range.start <= index && index <= range.end);
            }
        }
        if let Some(first_right) = points.iter().position(|point| point.x >= right) {
            prop_assert!(range.end >= first_right);
        }
    }

    #[test]
    fn curve_piece_counts_match_point_count(points in sorted_points(64)) {
        let polyline = build_curve(&points, CurveStyle::Polyline);
        let smooth = build_curve(&points, CurveStyle::SmoothCurve);

        if points.len() < 2 {
            prop_assert!(polyline.is_none());
            prop_assert!(smooth.is_none());
        } else {
            prop_assert_eq!(polyline, Some(CurveGeometry::Polyline(points.clone())));
            let Some(CurveGeometry::Smooth { start, segments }) = smooth else {
                return Err(TestCaseError::fail("expected smooth geometry"));
            };
            prop_assert_eq!(start, points[0]);
            prop_assert_eq!(segments.len(), points.len() - 1);
            for (segment, pair) in segments.iter().zip(points.windows(2)) {
                prop_assert_eq!(segment.end, pair[1]);
                prop_assert!(segment.control1.x >= pair[0].x && segment.control2.x <= pair[1].x);
            }
        }
    }
}
