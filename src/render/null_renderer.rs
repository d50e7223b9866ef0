use crate::error::PlotResult;
use crate::render::{DrawCommand, RenderFrame, Renderer};

/// Headless renderer for tests and hosts that consume frames directly.
///
/// Frames are still validated, and the last one is kept for inspection.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_command_count: usize,
    pub last_series_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        self.last_command_count = frame.commands.len();
        self.last_series_count = frame
            .commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Polyline(_) | DrawCommand::Path(_)))
            .count();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
