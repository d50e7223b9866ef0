use cairo::{Context, Format, ImageSurface, LineCap, LineJoin};
use pango::FontDescription;

use crate::core::Matrix;
use crate::error::{PlotError, PlotResult};
use crate::render::{
    Color, DrawCommand, LinePrimitive, PathPrimitive, PolylinePrimitive, RectPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub curves_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can paint into a Cairo context owned by the host
/// (for example a toolkit draw callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &RenderFrame)
    -> PlotResult<()>;
}

/// Cairo + Pango renderer backend.
///
/// Draws offscreen through `Renderer::render`, or in place through
/// `CairoContextRenderer`. World-space curves are stroked under the frame
/// transform with round caps and joins.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> PlotResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlotError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;

        let mut stats = CairoRenderStats::default();
        for command in &frame.commands {
            match command {
                DrawCommand::FillRect(rect) => {
                    fill_rect(context, *rect)?;
                    stats.rects_drawn += 1;
                }
                DrawCommand::Line(line) => {
                    stroke_line(context, *line)?;
                    stats.lines_drawn += 1;
                }
                DrawCommand::Polyline(polyline) => {
                    stroke_polyline(context, polyline)?;
                    stats.curves_drawn += 1;
                }
                DrawCommand::Path(path) => {
                    stroke_path(context, path)?;
                    stats.curves_drawn += 1;
                }
                DrawCommand::Text(text) => {
                    draw_text(context, text);
                    stats.texts_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PlotResult<()> {
        self.render_with_context(context, frame)
    }
}

fn fill_rect(context: &Context, rect: RectPrimitive) -> PlotResult<()> {
    apply_color(context, rect.fill_color);
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill rectangle", err))
}

fn stroke_line(context: &Context, line: LinePrimitive) -> PlotResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

fn stroke_polyline(context: &Context, polyline: &PolylinePrimitive) -> PlotResult<()> {
    stroke_in_world(
        context,
        polyline.transform,
        polyline.stroke_width,
        polyline.color,
        || {
            let mut points = polyline.points.iter();
            if let Some(first) = points.next() {
                context.move_to(first.x, first.y);
            }
            for point in points {
                context.line_to(point.x, point.y);
            }
        },
    )
}

fn stroke_path(context: &Context, path: &PathPrimitive) -> PlotResult<()> {
    stroke_in_world(context, path.transform, path.stroke_width, path.color, || {
        context.move_to(path.start.x, path.start.y);
        for segment in &path.segments {
            context.curve_to(
                segment.control1.x,
                segment.control1.y,
                segment.control2.x,
                segment.control2.y,
                segment.end.x,
                segment.end.y,
            );
        }
    })
}

/// Builds and strokes a path with the world transform pushed, so the
/// pre-scale stroke width comes out at the intended pixel width.
fn stroke_in_world(
    context: &Context,
    transform: Matrix,
    stroke_width: f64,
    color: Color,
    build_path: impl FnOnce(),
) -> PlotResult<()> {
    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
    context.transform(to_cairo_matrix(transform));
    build_path();
    apply_color(context, color);
    context.set_line_width(stroke_width);
    context.set_line_cap(LineCap::Round);
    context.set_line_join(LineJoin::Round);
    let stroked = context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke curve", err));
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
    stroked
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, _text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };

    apply_color(context, text.color);
    context.move_to(x, text.y);
    pangocairo::functions::show_layout(context, &layout);
}

fn to_cairo_matrix(matrix: Matrix) -> cairo::Matrix {
    cairo::Matrix::new(
        matrix.m11,
        matrix.m12,
        matrix.m21,
        matrix.m22,
        matrix.offset_x,
        matrix.offset_y,
    )
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::InvalidData(format!("{prefix}: {err}"))
}
