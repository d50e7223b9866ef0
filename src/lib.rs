//! series-plot: interactive 2D scientific plotting engine.
//!
//! The crate keeps viewport math, grid planning and curve geometry free of
//! any drawing toolkit. `PlotEngine` turns plotted series into an ordered
//! `RenderFrame`, and a `Renderer` backend (null or cairo) paints it.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{PlotEngine, PlotEngineConfig};
pub use error::{PlotError, PlotResult};
