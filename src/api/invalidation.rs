use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::render::Renderer;

use super::PlotEngine;

/// State domain whose change requires a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    Viewport,
    Series,
    Style,
    Bounds,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::Viewport => 1 << 0,
            Self::Series => 1 << 1,
            Self::Style => 1 << 2,
            Self::Bounds => 1 << 3,
        }
    }
}

/// Coalesced set of pending redraw reasons.
///
/// Mutators merge topics in; the host polls it to schedule a redraw and
/// `render` clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvalidationMask {
    bits: u8,
}

impl InvalidationMask {
    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self::none()
            .with_topic(InvalidationTopic::Viewport)
            .with_topic(InvalidationTopic::Series)
            .with_topic(InvalidationTopic::Style)
            .with_topic(InvalidationTopic::Bounds)
    }

    #[must_use]
    pub const fn from_topic(topic: InvalidationTopic) -> Self {
        Self { bits: topic.bit() }
    }

    #[must_use]
    pub const fn with_topic(self, topic: InvalidationTopic) -> Self {
        Self {
            bits: self.bits | topic.bit(),
        }
    }

    #[must_use]
    pub const fn has_topic(self, topic: InvalidationTopic) -> bool {
        self.bits & topic.bit() != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }

    pub fn merge(&mut self, other: Self) {
        self.bits |= other.bits;
    }
}

impl<R: Renderer> PlotEngine<R> {
    /// Redraw reasons accumulated since the last render.
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationMask {
        self.invalidation
    }

    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        !self.invalidation.is_none()
    }

    /// Returns and clears the pending mask.
    pub fn take_invalidation(&mut self) -> InvalidationMask {
        std::mem::take(&mut self.invalidation)
    }

    pub(super) fn invalidate(&mut self, topic: InvalidationTopic) {
        trace!(?topic, "invalidate");
        self.invalidation.merge(InvalidationMask::from_topic(topic));
    }
}
