use tracing::{trace, warn};

use crate::core::{DataPoint, Vector2};
use crate::error::{PlotError, PlotResult};
use crate::interaction::InteractionMode;
use crate::render::Renderer;

use super::PlotEngine;
use super::invalidation::InvalidationTopic;

impl<R: Renderer> PlotEngine<R> {
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    /// Starts a drag at a screen position (Idle -> Dragging).
    pub fn pointer_press(&mut self, x: f64, y: f64) -> PlotResult<()> {
        let position = finite_position(x, y)?;
        self.interaction
            .on_pointer_press(position, self.viewport.translation());
        trace!(x, y, "pointer press");
        Ok(())
    }

    /// Tracks the pointer; while dragging, pans so the pressed world point
    /// follows the pointer.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> PlotResult<()> {
        let position = finite_position(x, y)?;
        if let Some(translation) = self
            .interaction
            .on_pointer_move(position, self.viewport.scale())
        {
            self.viewport.set_translation(translation);
            self.invalidate(InvalidationTopic::Viewport);
        }
        Ok(())
    }

    /// Ends a drag (Dragging -> Idle).
    pub fn pointer_release(&mut self) {
        self.interaction.on_pointer_release();
        trace!("pointer release");
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    /// Zooms around the pointer by `wheel_zoom_base ^ delta`.
    ///
    /// Positive deltas zoom in. The drag state is left untouched.
    pub fn wheel(&mut self, delta: f64, x: f64, y: f64) -> PlotResult<()> {
        if !delta.is_finite() {
            warn!(delta, "reject wheel delta");
            return Err(PlotError::InvalidData(
                "wheel delta must be finite".to_owned(),
            ));
        }
        if delta == 0.0 {
            return Ok(());
        }
        // Large deltas overflow or underflow the power; settle on the scale limit instead.
        let scale = self.viewport.scale();
        let (min_scale, max_scale) = self.viewport.scale_limits();
        let factor = self
            .config
            .wheel_zoom_base
            .powf(delta)
            .clamp(min_scale / scale, max_scale / scale);
        self.zoom_by(factor, x, y)
    }

    /// Shifts the view by a screen-space delta.
    pub fn pan(&mut self, dx: f64, dy: f64) -> PlotResult<()> {
        let delta = finite_position(dx, dy)?;
        self.viewport.pan(delta);
        self.invalidate(InvalidationTopic::Viewport);
        Ok(())
    }

    /// Anchor-preserving zoom around screen position `(x, y)`.
    pub fn zoom_by(&mut self, factor: f64, x: f64, y: f64) -> PlotResult<()> {
        if !factor.is_finite() || factor <= 0.0 {
            warn!(factor, "reject zoom factor");
            return Err(PlotError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        let anchor = finite_position(x, y)?;
        self.viewport.zoom_by(factor, anchor);
        self.interaction.rebase_drag(self.viewport.translation());
        trace!(factor, scale = self.viewport.scale(), "zoom");
        self.invalidate(InvalidationTopic::Viewport);
        Ok(())
    }

    /// Restores identity pan and zoom.
    pub fn reset_view(&mut self) {
        self.viewport.reset();
        self.invalidate(InvalidationTopic::Viewport);
    }

    #[must_use]
    pub fn map_screen_to_world(&self, x: f64, y: f64) -> DataPoint {
        self.viewport.screen_to_world(Vector2::new(x, y))
    }

    #[must_use]
    pub fn map_world_to_screen(&self, point: DataPoint) -> DataPoint {
        self.viewport.world_to_screen(point)
    }
}

fn finite_position(x: f64, y: f64) -> PlotResult<Vector2> {
    let position = Vector2::new(x, y);
    if position.is_finite() {
        Ok(position)
    } else {
        Err(PlotError::InvalidData(
            "pointer coordinates must be finite".to_owned(),
        ))
    }
}
