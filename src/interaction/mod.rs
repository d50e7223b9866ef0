use serde::{Deserialize, Serialize};

use crate::core::Vector2;

/// Pointer state relevant to viewport panning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging,
}

/// Snapshot taken when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    press_position: Vector2,
    translation_at_press: Vector2,
}

/// Idle/Dragging state machine driving drag-pan.
///
/// Wheel zoom is orthogonal: it never changes the mode and may arrive in
/// either state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    drag: Option<DragAnchor>,
    cursor: Option<Vector2>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        if self.drag.is_some() {
            InteractionMode::Dragging
        } else {
            InteractionMode::Idle
        }
    }

    /// Last pointer position seen, if the pointer has entered the surface.
    #[must_use]
    pub fn cursor(self) -> Option<Vector2> {
        self.cursor
    }

    pub fn on_pointer_press(&mut self, position: Vector2, translation: Vector2) {
        self.cursor = Some(position);
        self.drag = Some(DragAnchor {
            press_position: position,
            translation_at_press: translation,
        });
    }

    /// Returns the translation the viewport should adopt, or `None` when idle.
    ///
    /// The result is recomputed from the press snapshot rather than
    /// accumulated, so dropped move events do not drift the view.
    pub fn on_pointer_move(&mut self, position: Vector2, scale: f64) -> Option<Vector2> {
        self.cursor = Some(position);
        let anchor = self.drag?;
        Some(anchor.translation_at_press + (position - anchor.press_position) / scale)
    }

    /// Restarts an active drag from the current cursor and `translation`.
    ///
    /// Called after the view changes mid-drag (wheel zoom) so the next move
    /// continues from the new view instead of the press-time one.
    pub fn rebase_drag(&mut self, translation: Vector2) {
        let cursor = self.cursor;
        if let Some(anchor) = self.drag.as_mut() {
            anchor.press_position = cursor.unwrap_or(anchor.press_position);
            anchor.translation_at_press = translation;
        }
    }

    pub fn on_pointer_release(&mut self) {
        self.drag = None;
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
    }
}
