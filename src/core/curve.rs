use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, Vector2};

/// How a series connects its consecutive points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveStyle {
    /// Straight segments between consecutive points.
    #[default]
    Polyline,
    /// One cubic segment per consecutive pair, shaped by local half-deltas.
    SmoothCurve,
}

/// Cubic Bezier segment continuing from the previous segment's end point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub control1: DataPoint,
    pub control2: DataPoint,
    pub end: DataPoint,
}

/// Drawable geometry for one series, in world coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CurveGeometry {
    Polyline(Vec<DataPoint>),
    Smooth {
        start: DataPoint,
        segments: Vec<CubicSegment>,
    },
}

impl CurveGeometry {
    /// Number of straight or cubic pieces the geometry strokes.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        match self {
            Self::Polyline(points) => points.len().saturating_sub(1),
            Self::Smooth { segments, .. } => segments.len(),
        }
    }
}

/// Builds the geometry of `points` for `style`.
///
/// Fewer than two points have nothing to connect and yield `None`.
#[must_use]
pub fn build_curve(points: &[DataPoint], style: CurveStyle) -> Option<CurveGeometry> {
    if points.len() < 2 {
        return None;
    }

    let geometry = match style {
        CurveStyle::Polyline => CurveGeometry::Polyline(points.to_vec()),
        CurveStyle::SmoothCurve => CurveGeometry::Smooth {
            start: points[0],
            segments: points
                .windows(2)
                .map(|pair| smooth_segment(pair[0], pair[1]))
                .collect(),
        },
    };
    Some(geometry)
}

/// Control points sit half the x-delta and a quarter of the y-delta away
/// from each end, which keeps the curve inside the pair's x span.
#[must_use]
pub fn smooth_segment(from: DataPoint, to: DataPoint) -> CubicSegment {
    let hx = (to.x - from.x) / 2.0;
    let hy = (to.y - from.y) / 2.0;
    let tangent = Vector2::new(hx, hy / 2.0);
    CubicSegment {
        control1: from + tangent,
        control2: to - tangent,
        end: to,
    }
}
