mod data_controller;
mod engine;
mod engine_config;
mod interaction_controller;
mod invalidation;
mod render_frame_builder;

pub use engine::PlotEngine;
pub use engine_config::PlotEngineConfig;
pub use invalidation::{InvalidationMask, InvalidationTopic};
