pub mod axis_ticks;
pub mod curve;
pub mod label_format;
pub mod matrix;
pub mod series;
pub mod series_text;
pub mod types;
pub mod viewport;
pub mod windowing;

pub use axis_ticks::{Axis, AxisTickPlan, AxisTickPlanner, TickSet, enumerate_ticks, nice_step};
pub use curve::{CubicSegment, CurveGeometry, CurveStyle, build_curve, smooth_segment};
pub use label_format::{AxisLabelLocale, format_significant, format_tick_label};
pub use matrix::{Matrix, Vector2};
pub use series::Series;
pub use types::{DataPoint, ScreenBounds, WorldExtent};
pub use viewport::Viewport;
pub use windowing::{VisibleRange, is_x_sorted, visible_range};
