use tracing::{debug, trace};

use crate::core::{CurveStyle, ScreenBounds, Series, Viewport, WorldExtent};
use crate::error::PlotResult;
use crate::interaction::InteractionState;
use crate::render::{Color, RenderFrame, Renderer};

use super::invalidation::{InvalidationMask, InvalidationTopic};
use super::render_frame_builder::build_render_frame;
use super::PlotEngineConfig;

/// Main facade consumed by host applications.
///
/// `PlotEngine` owns the viewport and pointer state, holds the plotted
/// series, and turns them into ordered draw commands for its renderer.
/// Every method is synchronous and meant to be called from the single
/// thread that drives input and redraws.
pub struct PlotEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: PlotEngineConfig,
    pub(super) viewport: Viewport,
    pub(super) interaction: InteractionState,
    pub(super) series: Vec<Series>,
    pub(super) active_series: Option<usize>,
    pub(super) invalidation: InvalidationMask,
}

impl<R: Renderer> PlotEngine<R> {
    /// Creates an engine with no series.
    pub fn new(renderer: R, config: PlotEngineConfig) -> PlotResult<Self> {
        config.validate()?;

        let mut viewport = Viewport::for_bounds(config.bounds);
        viewport.set_scale_limits(config.min_scale, config.max_scale)?;

        debug!(
            width = config.bounds.width,
            height = config.bounds.height,
            "plot engine created"
        );
        Ok(Self {
            renderer,
            config,
            viewport,
            interaction: InteractionState::default(),
            series: Vec::new(),
            active_series: None,
            invalidation: InvalidationMask::all(),
        })
    }

    /// Creates an engine holding the default seed series, active.
    pub fn with_default_series(
        renderer: R,
        config: PlotEngineConfig,
        color: Color,
    ) -> PlotResult<Self> {
        let mut engine = Self::new(renderer, config)?;
        engine.add_default_series(color)?;
        Ok(engine)
    }

    #[must_use]
    pub fn config(&self) -> &PlotEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn bounds(&self) -> ScreenBounds {
        self.config.bounds
    }

    /// Changes the surface size; the world origin follows the bottom edge.
    pub fn resize(&mut self, bounds: ScreenBounds) -> PlotResult<()> {
        bounds.validate()?;
        self.config.bounds = bounds;
        self.viewport.fit_origin_to(bounds);
        self.invalidate(InvalidationTopic::Bounds);
        Ok(())
    }

    #[must_use]
    pub fn curve_style(&self) -> CurveStyle {
        self.config.curve_style
    }

    pub fn set_curve_style(&mut self, style: CurveStyle) {
        self.config.curve_style = style;
        self.invalidate(InvalidationTopic::Style);
    }

    #[must_use]
    pub fn background(&self) -> Option<Color> {
        self.config.background
    }

    pub fn set_background(&mut self, background: Option<Color>) -> PlotResult<()> {
        if let Some(color) = background {
            color.validate()?;
        }
        self.config.background = background;
        self.invalidate(InvalidationTopic::Style);
        Ok(())
    }

    /// World rectangle currently covered by the surface.
    pub fn visible_extent(&self) -> PlotResult<WorldExtent> {
        self.viewport.visible_extent(self.config.bounds)
    }

    /// Builds the current frame without touching the renderer.
    pub fn build_frame(&self) -> PlotResult<RenderFrame> {
        build_render_frame(&self.config, &self.viewport, &self.series)
    }

    /// Builds the frame, hands it to the renderer and clears pending
    /// invalidation. A frame that fails to build is not rendered.
    pub fn render(&mut self) -> PlotResult<()> {
        let frame = self.build_frame()?;
        trace!(commands = frame.commands.len(), "render frame");
        self.renderer.render(&frame)?;
        self.invalidation = InvalidationMask::none();
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(feature = "cairo-backend")]
impl<R: Renderer + crate::render::CairoContextRenderer> PlotEngine<R> {
    /// Renders into a host-owned Cairo context, such as a toolkit draw callback.
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> PlotResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.invalidation = InvalidationMask::none();
        Ok(())
    }
}
