use crate::core::{Matrix, ScreenBounds};
use crate::error::PlotResult;
use crate::render::{
    DrawCommand, LinePrimitive, PathPrimitive, PolylinePrimitive, RectPrimitive, TextPrimitive,
};

/// Backend-agnostic scene for one redraw, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub bounds: ScreenBounds,
    /// Data-to-screen transform the world-space commands were built for.
    pub transform: Matrix,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(bounds: ScreenBounds, transform: Matrix) -> Self {
        Self {
            bounds,
            transform,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn validate(&self) -> PlotResult<()> {
        self.bounds.validate()?;
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillRect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &PolylinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Polyline(polyline) => Some(polyline),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Path(path) => Some(path),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }
}
