use tracing::{debug, trace};

use crate::core::{
    AxisTickPlan, AxisTickPlanner, CurveGeometry, DataPoint, Series, Viewport, VisibleRange,
    WorldExtent, build_curve, visible_range,
};
use crate::error::{PlotError, PlotResult};
use crate::render::{
    DrawCommand, LinePrimitive, PathPrimitive, PolylinePrimitive, RectPrimitive, RenderFrame,
    TextHAlign, TextPrimitive,
};

use super::PlotEngineConfig;

/// Rough glyph advance relative to font size, used to keep y-axis labels
/// on screen without measuring text.
const LABEL_CHAR_WIDTH_RATIO: f64 = 0.6;

/// Builds one frame in paint order: background, grid, axes, tick labels,
/// then every series in registration order.
///
/// A non-invertible view transform aborts the frame.
pub(super) fn build_render_frame(
    config: &PlotEngineConfig,
    viewport: &Viewport,
    series: &[Series],
) -> PlotResult<RenderFrame> {
    let bounds = config.bounds;
    bounds.validate()?;

    let transform = viewport.transform();
    if !transform.is_invertible() {
        return Err(PlotError::NonInvertibleTransform {
            scale: viewport.scale(),
        });
    }
    let extent = viewport.visible_extent(bounds)?;

    let mut frame = RenderFrame::new(bounds, transform);
    if let Some(background) = config.background {
        frame.push(DrawCommand::FillRect(RectPrimitive::new(
            0.0,
            0.0,
            bounds.width_px(),
            bounds.height_px(),
            background,
        )));
    }

    let planner = AxisTickPlanner::new(config.target_ticks_per_axis, config.label_locale);
    match planner.plan(extent) {
        Some(plan) => append_axis_primitives(&mut frame, config, viewport, &plan),
        None => debug!(?extent, "visible extent too small for axis ticks"),
    }

    for entry in series {
        append_series_primitives(&mut frame, config, viewport, extent, entry);
    }

    trace!(
        commands = frame.commands.len(),
        series = series.len(),
        scale = viewport.scale(),
        "built render frame"
    );
    Ok(frame)
}

fn append_axis_primitives(
    frame: &mut RenderFrame,
    config: &PlotEngineConfig,
    viewport: &Viewport,
    plan: &AxisTickPlan,
) {
    let bounds = config.bounds;
    let (width, height) = (bounds.width_px(), bounds.height_px());
    let origin = viewport.world_to_screen(DataPoint::new(0.0, 0.0));

    let x_ticks: Vec<(f64, Option<&str>)> = plan
        .x
        .iter()
        .map(|(value, label)| (viewport.world_to_screen(DataPoint::new(value, 0.0)).x, label))
        .collect();
    let y_ticks: Vec<(f64, Option<&str>)> = plan
        .y
        .iter()
        .map(|(value, label)| (viewport.world_to_screen(DataPoint::new(0.0, value)).y, label))
        .collect();

    if config.show_grid {
        for &(x, _) in &x_ticks {
            frame.push(DrawCommand::Line(LinePrimitive::new(
                x,
                0.0,
                x,
                height,
                config.grid_line_width_px,
                config.grid_color,
            )));
        }
        for &(y, _) in &y_ticks {
            frame.push(DrawCommand::Line(LinePrimitive::new(
                0.0,
                y,
                width,
                y,
                config.grid_line_width_px,
                config.grid_color,
            )));
        }
    }

    if (0.0..=height).contains(&origin.y) {
        frame.push(DrawCommand::Line(LinePrimitive::new(
            0.0,
            origin.y,
            width,
            origin.y,
            config.axis_line_width_px,
            config.axis_color,
        )));
    }
    if (0.0..=width).contains(&origin.x) {
        frame.push(DrawCommand::Line(LinePrimitive::new(
            origin.x,
            0.0,
            origin.x,
            height,
            config.axis_line_width_px,
            config.axis_color,
        )));
    }

    let font = config.label_font_size_px;
    let offset = config.label_offset_px;

    let label_y = x_label_top(origin.y, height, offset, font);
    for &(x, label) in &x_ticks {
        let Some(text) = label else { continue };
        if !(0.0..=width).contains(&x) {
            continue;
        }
        frame.push(DrawCommand::Text(TextPrimitive::new(
            text,
            x,
            label_y,
            font,
            config.label_color,
            TextHAlign::Center,
        )));
    }

    for &(y, label) in &y_ticks {
        let Some(text) = label else { continue };
        if !(0.0..=height).contains(&y) {
            continue;
        }
        let label_width = text.chars().count() as f64 * font * LABEL_CHAR_WIDTH_RATIO;
        let (x, h_align) = y_label_anchor(origin.x, width, offset, label_width);
        frame.push(DrawCommand::Text(TextPrimitive::new(
            text,
            x,
            (y - font / 2.0).clamp(0.0, (height - font).max(0.0)),
            font,
            config.label_color,
            h_align,
        )));
    }
}

/// Top edge of x-axis labels: below the axis line when there is room,
/// otherwise above it, pinned to the nearest screen edge when the axis
/// itself is off screen.
fn x_label_top(axis_y: f64, height: f64, offset: f64, font: f64) -> f64 {
    if axis_y + offset + font <= height {
        axis_y.max(0.0) + offset
    } else {
        axis_y.min(height) - offset - font
    }
}

/// Anchor of y-axis labels: left of the axis line when the text fits,
/// otherwise right of it, pinned like [`x_label_top`].
fn y_label_anchor(axis_x: f64, width: f64, offset: f64, label_width: f64) -> (f64, TextHAlign) {
    if axis_x - offset - label_width >= 0.0 {
        (axis_x.min(width) - offset, TextHAlign::Right)
    } else {
        (axis_x.max(0.0) + offset, TextHAlign::Left)
    }
}

fn append_series_primitives(
    frame: &mut RenderFrame,
    config: &PlotEngineConfig,
    viewport: &Viewport,
    extent: WorldExtent,
    series: &Series,
) {
    let Some(range) = series_range(config, extent, series) else {
        return;
    };
    let Some(geometry) = build_curve(range.slice(series.points()), config.curve_style) else {
        return;
    };

    let stroke_width = viewport.screen_px_to_world(config.series_stroke_width_px);
    let command = match geometry {
        CurveGeometry::Polyline(points) => DrawCommand::Polyline(PolylinePrimitive {
            points,
            transform: frame.transform,
            stroke_width,
            color: series.color(),
        }),
        CurveGeometry::Smooth { start, segments } => DrawCommand::Path(PathPrimitive {
            start,
            segments,
            transform: frame.transform,
            stroke_width,
            color: series.color(),
        }),
    };
    frame.push(command);
}

fn series_range(
    config: &PlotEngineConfig,
    extent: WorldExtent,
    series: &Series,
) -> Option<VisibleRange> {
    if !config.culling_enabled {
        return VisibleRange::full(series.len());
    }
    if !series.is_x_sorted() {
        debug!(name = series.name(), "series not sorted by x, drawing without culling");
        return VisibleRange::full(series.len());
    }
    visible_range(series.points(), extent.min_x, extent.max_x)
}
