use serde::{Deserialize, Serialize};

use crate::core::{CubicSegment, DataPoint, Matrix};
use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        let channel = |value: u8| f64::from(value) / 255.0;
        Self::rgba(channel(red), channel(green), channel(blue), channel(alpha))
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn validate_stroke_width(stroke_width: f64) -> PlotResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(PlotError::InvalidData(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

fn validate_points<'a>(
    points: impl IntoIterator<Item = &'a DataPoint>,
    what: &str,
) -> PlotResult<()> {
    if points.into_iter().all(|point| point.is_finite()) {
        Ok(())
    } else {
        Err(PlotError::InvalidData(format!(
            "{what} coordinates must be finite"
        )))
    }
}

/// Screen-space filled rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(PlotError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(PlotError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Screen-space straight line, used for grid and axis lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(PlotError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

/// World-space open polyline stroked under `transform`.
///
/// `stroke_width` is in pre-scale units, so it already compensates the
/// zoom factor and renders at a constant pixel width.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylinePrimitive {
    pub points: Vec<DataPoint>,
    pub transform: Matrix,
    pub stroke_width: f64,
    pub color: Color,
}

impl PolylinePrimitive {
    pub fn validate(&self) -> PlotResult<()> {
        if self.points.len() < 2 {
            return Err(PlotError::InvalidData(
                "polyline needs at least two points".to_owned(),
            ));
        }
        validate_points(&self.points, "polyline")?;
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

/// World-space open path of cubic segments stroked under `transform`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub start: DataPoint,
    pub segments: Vec<CubicSegment>,
    pub transform: Matrix,
    pub stroke_width: f64,
    pub color: Color,
}

impl PathPrimitive {
    pub fn validate(&self) -> PlotResult<()> {
        if self.segments.is_empty() {
            return Err(PlotError::InvalidData(
                "path needs at least one segment".to_owned(),
            ));
        }
        validate_points(
            std::iter::once(&self.start).chain(
                self.segments
                    .iter()
                    .flat_map(|segment| [&segment.control1, &segment.control2, &segment.end]),
            ),
            "path",
        )?;
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Screen-space label; `(x, y)` is the alignment point on the text's top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.text.is_empty() {
            return Err(PlotError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(PlotError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// One ordered draw instruction of a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect(RectPrimitive),
    Line(LinePrimitive),
    Polyline(PolylinePrimitive),
    Path(PathPrimitive),
    Text(TextPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> PlotResult<()> {
        match self {
            Self::FillRect(rect) => rect.validate(),
            Self::Line(line) => line.validate(),
            Self::Polyline(polyline) => polyline.validate(),
            Self::Path(path) => path.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}
