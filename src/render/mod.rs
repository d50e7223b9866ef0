mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, DrawCommand, LinePrimitive, PathPrimitive, PolylinePrimitive, RectPrimitive,
    TextHAlign, TextPrimitive,
};

use crate::error::PlotResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully built `RenderFrame`, so drawing code never
/// touches viewport, series or interaction state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
