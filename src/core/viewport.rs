use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, Matrix, ScreenBounds, Vector2, WorldExtent};
use crate::error::{PlotError, PlotResult};

pub const DEFAULT_MIN_SCALE: f64 = 1e-6;
pub const DEFAULT_MAX_SCALE: f64 = 1e6;

/// Pan/zoom state mapping world coordinates to screen pixels.
///
/// The data-to-screen transform is composed as
///
/// ```text
/// FlipY -> Translate(origin) -> Translate(translation) -> Scale(scale)
/// ```
///
/// so `translation` and `origin` live in pre-scale (world) units and a
/// constant pixel drag pans by `delta / scale` world units at any zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    translation: Vector2,
    scale: f64,
    origin: Vector2,
    min_scale: f64,
    max_scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            translation: Vector2::ZERO,
            scale: 1.0,
            origin: Vector2::ZERO,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
        }
    }
}

impl Viewport {
    /// Creates an identity view whose world origin sits at the bottom-left
    /// corner of `bounds`.
    #[must_use]
    pub fn for_bounds(bounds: ScreenBounds) -> Self {
        let mut viewport = Self::default();
        viewport.fit_origin_to(bounds);
        viewport
    }

    /// Restricts the reachable zoom range. `scale` is clamped immediately.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) -> PlotResult<()> {
        if !min_scale.is_finite() || !max_scale.is_finite() || min_scale <= 0.0 {
            return Err(PlotError::InvalidData(
                "scale limits must be finite and > 0".to_owned(),
            ));
        }
        if min_scale > max_scale {
            return Err(PlotError::InvalidData(
                "min scale must be <= max scale".to_owned(),
            ));
        }
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.scale = self.scale.clamp(min_scale, max_scale);
        Ok(())
    }

    #[must_use]
    pub fn scale_limits(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    #[must_use]
    pub fn translation(&self) -> Vector2 {
        self.translation
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn origin(&self) -> Vector2 {
        self.origin
    }

    /// Places world `(0, 0)` at the bottom-left pixel of `bounds` at identity zoom.
    pub fn fit_origin_to(&mut self, bounds: ScreenBounds) {
        self.origin = Vector2::new(0.0, bounds.height_px());
    }

    pub fn set_translation(&mut self, translation: Vector2) {
        self.translation = translation;
    }

    /// Shifts the view by a screen-space delta.
    pub fn pan(&mut self, delta_screen: Vector2) {
        self.translation = self.translation + delta_screen / self.scale;
    }

    /// Multiplies the zoom by `factor` keeping the world point under
    /// `anchor_screen` fixed on screen.
    ///
    /// The resulting scale is clamped to the configured limits.
    ///
    /// # Panics
    ///
    /// Panics when `factor` is not a finite positive number.
    pub fn zoom_by(&mut self, factor: f64, anchor_screen: Vector2) {
        assert!(
            factor.is_finite() && factor > 0.0,
            "zoom factor must be finite and > 0, got {factor}"
        );

        let old_scale = self.scale;
        let new_scale = (old_scale * factor).clamp(self.min_scale, self.max_scale);

        // anchor / s == FlipY(world) + origin + translation must hold before
        // and after, which only moves translation by the pre-scale anchor shift.
        self.translation =
            self.translation + anchor_screen / new_scale - anchor_screen / old_scale;
        self.scale = new_scale;
    }

    pub fn reset(&mut self) {
        self.translation = Vector2::ZERO;
        self.scale = 1.0_f64.clamp(self.min_scale, self.max_scale);
    }

    /// Current data-to-screen matrix.
    #[must_use]
    pub fn transform(&self) -> Matrix {
        Matrix::flip_y()
            .then(Matrix::translation(self.origin))
            .then(Matrix::translation(self.translation))
            .then(Matrix::scaling(self.scale))
    }

    pub fn inverse_transform(&self) -> PlotResult<Matrix> {
        self.transform()
            .invert()
            .ok_or(PlotError::NonInvertibleTransform { scale: self.scale })
    }

    #[must_use]
    pub fn world_to_screen(&self, point: DataPoint) -> DataPoint {
        let pre_scale = Vector2::new(point.x, -point.y) + self.origin + self.translation;
        DataPoint::new(pre_scale.x * self.scale, pre_scale.y * self.scale)
    }

    #[must_use]
    pub fn screen_to_world(&self, screen: Vector2) -> DataPoint {
        let pre_scale = screen / self.scale - self.origin - self.translation;
        DataPoint::new(pre_scale.x, -pre_scale.y)
    }

    /// World-space rectangle visible through `bounds`, derived from the
    /// inverse transform of the four screen corners.
    pub fn visible_extent(&self, bounds: ScreenBounds) -> PlotResult<WorldExtent> {
        bounds.validate()?;
        let inverse = self.inverse_transform()?;
        let (w, h) = (bounds.width_px(), bounds.height_px());
        let corners = [
            DataPoint::new(0.0, 0.0),
            DataPoint::new(w, 0.0),
            DataPoint::new(0.0, h),
            DataPoint::new(w, h),
        ]
        .map(|corner| inverse.transform_point(corner));
        Ok(WorldExtent::from_corners(&corners))
    }

    /// Converts a stroke width in screen pixels into pre-scale units so it
    /// renders at constant thickness under the current zoom.
    #[must_use]
    pub fn screen_px_to_world(&self, px: f64) -> f64 {
        px / self.scale
    }
}
