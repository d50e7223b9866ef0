use serde::{Deserialize, Serialize};

use crate::core::axis_ticks::{DEFAULT_TARGET_TICKS_PER_AXIS, MAX_TARGET_TICKS_PER_AXIS};
use crate::core::viewport::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE};
use crate::core::{AxisLabelLocale, CurveStyle, ScreenBounds};
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep plot setup in a JSON file. Every field
/// except `bounds` has a default and may be omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotEngineConfig {
    pub bounds: ScreenBounds,
    #[serde(default = "default_background")]
    pub background: Option<Color>,
    #[serde(default)]
    pub curve_style: CurveStyle,
    #[serde(default = "default_series_stroke_width_px")]
    pub series_stroke_width_px: f64,
    #[serde(default = "default_show_grid")]
    pub show_grid: bool,
    #[serde(default = "default_grid_color")]
    pub grid_color: Color,
    #[serde(default = "default_grid_line_width_px")]
    pub grid_line_width_px: f64,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_axis_line_width_px")]
    pub axis_line_width_px: f64,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default = "default_label_offset_px")]
    pub label_offset_px: f64,
    #[serde(default)]
    pub label_locale: AxisLabelLocale,
    #[serde(default = "default_target_ticks_per_axis")]
    pub target_ticks_per_axis: usize,
    #[serde(default = "default_wheel_zoom_base")]
    pub wheel_zoom_base: f64,
    #[serde(default = "default_min_scale")]
    pub min_scale: f64,
    #[serde(default = "default_max_scale")]
    pub max_scale: f64,
    #[serde(default = "default_culling_enabled")]
    pub culling_enabled: bool,
}

impl PlotEngineConfig {
    /// Creates a config with default styling for a surface of `bounds`.
    #[must_use]
    pub fn new(bounds: ScreenBounds) -> Self {
        Self {
            bounds,
            background: default_background(),
            curve_style: CurveStyle::default(),
            series_stroke_width_px: default_series_stroke_width_px(),
            show_grid: default_show_grid(),
            grid_color: default_grid_color(),
            grid_line_width_px: default_grid_line_width_px(),
            axis_color: default_axis_color(),
            axis_line_width_px: default_axis_line_width_px(),
            label_color: default_label_color(),
            label_font_size_px: default_label_font_size_px(),
            label_offset_px: default_label_offset_px(),
            label_locale: AxisLabelLocale::default(),
            target_ticks_per_axis: default_target_ticks_per_axis(),
            wheel_zoom_base: default_wheel_zoom_base(),
            min_scale: default_min_scale(),
            max_scale: default_max_scale(),
            culling_enabled: default_culling_enabled(),
        }
    }

    #[must_use]
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    #[must_use]
    pub fn with_curve_style(mut self, style: CurveStyle) -> Self {
        self.curve_style = style;
        self
    }

    #[must_use]
    pub fn with_series_stroke_width_px(mut self, width_px: f64) -> Self {
        self.series_stroke_width_px = width_px;
        self
    }

    #[must_use]
    pub fn with_show_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    #[must_use]
    pub fn with_label_locale(mut self, locale: AxisLabelLocale) -> Self {
        self.label_locale = locale;
        self
    }

    #[must_use]
    pub fn with_target_ticks_per_axis(mut self, ticks: usize) -> Self {
        self.target_ticks_per_axis = ticks;
        self
    }

    #[must_use]
    pub fn with_wheel_zoom_base(mut self, base: f64) -> Self {
        self.wheel_zoom_base = base;
        self
    }

    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    #[must_use]
    pub fn with_culling(mut self, enabled: bool) -> Self {
        self.culling_enabled = enabled;
        self
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> PlotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> PlotResult<()> {
        self.bounds.validate()?;
        if let Some(background) = self.background {
            background.validate()?;
        }
        for color in [self.grid_color, self.axis_color, self.label_color] {
            color.validate()?;
        }
        for (name, value) in [
            ("series_stroke_width_px", self.series_stroke_width_px),
            ("grid_line_width_px", self.grid_line_width_px),
            ("axis_line_width_px", self.axis_line_width_px),
            ("label_font_size_px", self.label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if !self.label_offset_px.is_finite() || self.label_offset_px < 0.0 {
            return Err(PlotError::InvalidData(
                "label_offset_px must be finite and >= 0".to_owned(),
            ));
        }
        if !(1..=MAX_TARGET_TICKS_PER_AXIS).contains(&self.target_ticks_per_axis) {
            return Err(PlotError::InvalidData(format!(
                "target_ticks_per_axis must be in 1..={MAX_TARGET_TICKS_PER_AXIS}"
            )));
        }
        if !self.wheel_zoom_base.is_finite() || self.wheel_zoom_base <= 1.0 {
            return Err(PlotError::InvalidData(
                "wheel_zoom_base must be finite and > 1".to_owned(),
            ));
        }
        if !self.min_scale.is_finite()
            || !self.max_scale.is_finite()
            || self.min_scale <= 0.0
            || self.min_scale > self.max_scale
        {
            return Err(PlotError::InvalidData(
                "scale limits must be finite with 0 < min_scale <= max_scale".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_background() -> Option<Color> {
    Some(Color::rgb(1.0, 1.0, 1.0))
}

fn default_series_stroke_width_px() -> f64 {
    10.0
}

fn default_show_grid() -> bool {
    true
}

fn default_grid_color() -> Color {
    Color::rgba(0.0, 0.0, 0.0, 0.12)
}

fn default_grid_line_width_px() -> f64 {
    1.0
}

fn default_axis_color() -> Color {
    Color::rgba(0.0, 0.0, 0.0, 0.6)
}

fn default_axis_line_width_px() -> f64 {
    1.5
}

fn default_label_color() -> Color {
    Color::rgb(0.2, 0.2, 0.2)
}

fn default_label_font_size_px() -> f64 {
    11.0
}

fn default_label_offset_px() -> f64 {
    4.0
}

fn default_target_ticks_per_axis() -> usize {
    DEFAULT_TARGET_TICKS_PER_AXIS
}

fn default_wheel_zoom_base() -> f64 {
    1.1
}

fn default_min_scale() -> f64 {
    DEFAULT_MIN_SCALE
}

fn default_max_scale() -> f64 {
    DEFAULT_MAX_SCALE
}

fn default_culling_enabled() -> bool {
    true
}
