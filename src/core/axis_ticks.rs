use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

use crate::core::WorldExtent;
use crate::core::label_format::{AxisLabelLocale, format_tick_label};

/// Default number of grid intervals aimed for across each visible axis.
pub const DEFAULT_TARGET_TICKS_PER_AXIS: usize = 10;

/// Largest accepted tick target per axis.
pub const MAX_TARGET_TICKS_PER_AXIS: usize = 256;

/// Hard cap on ticks per axis. A planner target of at most
/// [`MAX_TARGET_TICKS_PER_AXIS`] needs well under this many.
const MAX_TICKS_PER_AXIS: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Grid positions and labels of one axis for a single frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSet {
    pub axis: Axis,
    pub step: f64,
    pub positions: SmallVec<[f64; 32]>,
    /// Parallel to `positions`; `None` for the origin tick.
    pub labels: Vec<Option<String>>,
}

impl TickSet {
    pub fn iter(&self) -> impl Iterator<Item = (f64, Option<&str>)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.labels.iter().map(Option::as_deref))
    }
}

/// Both axes of one frame, sharing a single grid step.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTickPlan {
    pub step: f64,
    pub x: TickSet,
    pub y: TickSet,
}

/// Rounds a raw grid step down to the closest `{1, 2, 5} x 10^m` value.
///
/// # Panics
///
/// Panics when `raw_step` is not finite and strictly positive.
#[must_use]
pub fn nice_step(raw_step: f64) -> f64 {
    assert!(
        raw_step.is_finite() && raw_step > 0.0,
        "raw tick step must be finite and > 0, got {raw_step}"
    );

    let base = 10f64.powi(raw_step.log10().floor() as i32);
    if raw_step < 2.0 * base {
        base
    } else if raw_step < 5.0 * base {
        2.0 * base
    } else if raw_step < 10.0 * base {
        5.0 * base
    } else {
        // log10 rounding can leave `raw_step` a hair at or above the next decade.
        10.0 * base
    }
}

/// Enumerates multiples of `step` covering `[min, max]` with one step of
/// margin on each side.
#[must_use]
pub fn enumerate_ticks(min: f64, max: f64, step: f64) -> SmallVec<[f64; 32]> {
    let mut positions = SmallVec::new();
    if !(min.is_finite() && max.is_finite() && step.is_finite() && step > 0.0) {
        return positions;
    }

    let first_index = (min / step).floor() - 1.0;
    let limit = max + step;
    // Index span from the first tick past `limit`, plus rounding slack.
    let needed = ((limit / step).floor() - first_index + 2.0).max(0.0);
    if needed > MAX_TICKS_PER_AXIS as f64 {
        warn!(min, max, step, "tick count capped; grid will not cover the extent");
    }
    let count = needed.min(MAX_TICKS_PER_AXIS as f64) as usize;
    // Ticks are `index * step`, never accumulated, so they stay exact multiples.
    for offset in 0..count {
        let tick = (first_index + offset as f64) * step;
        if tick > limit {
            break;
        }
        positions.push(if tick == 0.0 { 0.0 } else { tick });
    }
    positions
}

/// Chooses the shared grid step and enumerates ticks for a visible extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTickPlanner {
    pub target_ticks_per_axis: usize,
    pub locale: AxisLabelLocale,
}

impl Default for AxisTickPlanner {
    fn default() -> Self {
        Self {
            target_ticks_per_axis: DEFAULT_TARGET_TICKS_PER_AXIS,
            locale: AxisLabelLocale::EnUs,
        }
    }
}

impl AxisTickPlanner {
    #[must_use]
    pub fn new(target_ticks_per_axis: usize, locale: AxisLabelLocale) -> Self {
        Self {
            target_ticks_per_axis: target_ticks_per_axis.clamp(1, MAX_TARGET_TICKS_PER_AXIS),
            locale,
        }
    }

    /// Per-axis nice steps are computed independently and the coarser one
    /// is used for both axes so the grid stays square.
    ///
    /// Returns `None` when either extent is empty or not finite.
    #[must_use]
    pub fn shared_step(&self, extent: WorldExtent) -> Option<f64> {
        let target = self.target_ticks_per_axis.clamp(1, MAX_TARGET_TICKS_PER_AXIS) as f64;
        let raw_x = extent.width() / target;
        let raw_y = extent.height() / target;
        if !(is_usable_step(raw_x) && is_usable_step(raw_y)) {
            return None;
        }
        Some(nice_step(raw_x).max(nice_step(raw_y)))
    }

    #[must_use]
    pub fn plan(&self, extent: WorldExtent) -> Option<AxisTickPlan> {
        let step = self.shared_step(extent)?;
        Some(AxisTickPlan {
            step,
            x: self.tick_set(Axis::X, extent.min_x, extent.max_x, step),
            y: self.tick_set(Axis::Y, extent.min_y, extent.max_y, step),
        })
    }

    fn tick_set(&self, axis: Axis, min: f64, max: f64, step: f64) -> TickSet {
        let positions = enumerate_ticks(min, max, step);
        let labels = positions
            .iter()
            .map(|&value| format_tick_label(value, self.locale))
            .collect();
        TickSet {
            axis,
            step,
            positions,
            labels,
        }
    }
}

fn is_usable_step(raw_step: f64) -> bool {
    raw_step.is_finite() && raw_step > 0.0
}
