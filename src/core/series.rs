use crate::core::DataPoint;
use crate::core::windowing::is_x_sorted;
use crate::render::Color;

/// Name of the seed series created with a fresh plot.
pub const DEFAULT_SERIES_NAME: &str = "Default";

/// X distance between the last point and one appended by
/// [`Series::append_continuation_point`].
pub const CONTINUATION_X_STEP: f64 = 10.0;

/// Named, colored sequence of points drawn as one curve.
///
/// Ascending-x order is what visible-range culling relies on; the series
/// tracks whether its points currently satisfy it.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    color: Color,
    points: Vec<DataPoint>,
    x_sorted: bool,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color, points: Vec<DataPoint>) -> Self {
        let x_sorted = is_x_sorted(&points);
        Self {
            name: name.into(),
            color,
            points,
            x_sorted,
        }
    }

    /// The three-point seed series a new plot starts with.
    #[must_use]
    pub fn default_seed(color: Color) -> Self {
        Self::new(
            DEFAULT_SERIES_NAME,
            color,
            vec![
                DataPoint::new(1.0, 3.0),
                DataPoint::new(10.0, 30.0),
                DataPoint::new(600.0, 400.0),
            ],
        )
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn is_x_sorted(&self) -> bool {
        self.x_sorted
    }

    pub fn set_points(&mut self, points: Vec<DataPoint>) {
        self.x_sorted = is_x_sorted(&points);
        self.points = points;
    }

    pub fn push_point(&mut self, point: DataPoint) {
        if let Some(last) = self.points.last() {
            self.x_sorted &= last.x <= point.x;
        }
        self.points.push(point);
    }

    /// Replaces the point at `index`, returning the previous value.
    pub fn replace_point(&mut self, index: usize, point: DataPoint) -> Option<DataPoint> {
        let slot = self.points.get_mut(index)?;
        let previous = std::mem::replace(slot, point);
        self.x_sorted = is_x_sorted(&self.points);
        Some(previous)
    }

    pub fn pop_point(&mut self) -> Option<DataPoint> {
        let popped = self.points.pop();
        if popped.is_some() && !self.x_sorted {
            self.x_sorted = is_x_sorted(&self.points);
        }
        popped
    }

    /// Appends `(last.x + 10, last.y)`, or the origin for an empty series.
    pub fn append_continuation_point(&mut self) -> DataPoint {
        let next = self
            .points
            .last()
            .map_or(DataPoint::new(0.0, 0.0), |last| {
                DataPoint::new(last.x + CONTINUATION_X_STEP, last.y)
            });
        self.push_point(next);
        next
    }
}
