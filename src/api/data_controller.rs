use std::path::Path;

use tracing::{debug, trace, warn};

use crate::core::series_text::{export_series, import_series};
use crate::core::{DataPoint, Series};
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, Renderer};

use super::PlotEngine;
use super::invalidation::InvalidationTopic;

impl<R: Renderer> PlotEngine<R> {
    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Replaces every plotted series. The first one becomes active.
    pub fn set_series(&mut self, series: Vec<Series>) -> PlotResult<()> {
        for entry in &series {
            validate_points(entry.points())?;
            entry.color().validate()?;
        }
        debug!(count = series.len(), "replace series");
        self.active_series = if series.is_empty() { None } else { Some(0) };
        self.series = series;
        self.invalidate(InvalidationTopic::Series);
        Ok(())
    }

    #[must_use]
    pub fn active_series_index(&self) -> Option<usize> {
        self.active_series
    }

    #[must_use]
    pub fn active_series(&self) -> Option<&Series> {
        self.active_series.and_then(|index| self.series.get(index))
    }

    /// Selects the series targeted by point edits.
    pub fn set_active_series(&mut self, index: usize) -> PlotResult<()> {
        if index >= self.series.len() {
            warn!(index, count = self.series.len(), "reject active series");
            return Err(PlotError::UnknownSeries {
                index,
                count: self.series.len(),
            });
        }
        self.active_series = Some(index);
        Ok(())
    }

    /// Appends a three-point seed series and makes it active.
    pub fn add_default_series(&mut self, color: Color) -> PlotResult<()> {
        self.push_series(Series::default_seed(color))
    }

    pub fn push_series(&mut self, series: Series) -> PlotResult<()> {
        validate_points(series.points())?;
        series.color().validate()?;
        debug!(name = series.name(), count = series.len(), "add series");
        self.series.push(series);
        self.active_series = Some(self.series.len() - 1);
        self.invalidate(InvalidationTopic::Series);
        Ok(())
    }

    /// Removes the most recently added series.
    ///
    /// The last remaining series is kept. When the removed series was
    /// active, the one before it becomes active.
    pub fn remove_last_series(&mut self) -> Option<Series> {
        if self.series.len() <= 1 {
            warn!(count = self.series.len(), "refuse to remove last series");
            return None;
        }
        let removed = self.series.pop()?;
        if self.active_series.is_some_and(|index| index >= self.series.len()) {
            self.active_series = Some(self.series.len() - 1);
        }
        debug!(name = removed.name(), "remove series");
        self.invalidate(InvalidationTopic::Series);
        Some(removed)
    }

    /// Mutable access to one series' points for external edits.
    ///
    /// Any access through this handle schedules a redraw.
    pub fn series_mut(&mut self, index: usize) -> PlotResult<&mut Series> {
        let count = self.series.len();
        if index >= count {
            return Err(PlotError::UnknownSeries { index, count });
        }
        self.invalidate(InvalidationTopic::Series);
        Ok(&mut self.series[index])
    }

    pub fn append_point(&mut self, point: DataPoint) -> PlotResult<()> {
        validate_points(&[point])?;
        let series = self.active_series_mut()?;
        series.push_point(point);
        trace!(count = series.len(), "append point");
        if !series.is_x_sorted() {
            warn!(x = point.x, "appended point breaks ascending x order");
        }
        self.invalidate(InvalidationTopic::Series);
        Ok(())
    }

    /// Appends `(last.x + 10, last.y)` to the active series.
    pub fn append_continuation_point(&mut self) -> PlotResult<DataPoint> {
        let series = self.active_series_mut()?;
        let point = series.append_continuation_point();
        trace!(count = series.len(), "append continuation point");
        self.invalidate(InvalidationTopic::Series);
        Ok(point)
    }

    pub fn remove_last_point(&mut self) -> PlotResult<Option<DataPoint>> {
        let series = self.active_series_mut()?;
        let removed = series.pop_point();
        trace!(count = series.len(), "remove last point");
        if removed.is_some() {
            self.invalidate(InvalidationTopic::Series);
        }
        Ok(removed)
    }

    pub fn update_point(&mut self, index: usize, point: DataPoint) -> PlotResult<()> {
        validate_points(&[point])?;
        let series = self.active_series_mut()?;
        let len = series.len();
        if series.replace_point(index, point).is_none() {
            warn!(index, len, "reject point update");
            return Err(PlotError::InvalidData(format!(
                "point index {index} out of range (len: {len})"
            )));
        }
        self.invalidate(InvalidationTopic::Series);
        Ok(())
    }

    /// Replaces the active series with the contents of a two-column text file.
    pub fn import_active_series(&mut self, path: impl AsRef<Path>) -> PlotResult<()> {
        let color = self.active_series_mut()?.color();
        let imported = import_series(path, color)?;
        *self.active_series_mut()? = imported;
        self.invalidate(InvalidationTopic::Series);
        Ok(())
    }

    pub fn export_active_series(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let count = self.series.len();
        let series = self
            .active_series()
            .ok_or(PlotError::UnknownSeries { index: 0, count })?;
        export_series(path, series)
    }

    fn active_series_mut(&mut self) -> PlotResult<&mut Series> {
        let count = self.series.len();
        match self.active_series {
            Some(index) if index < count => Ok(&mut self.series[index]),
            _ => Err(PlotError::UnknownSeries { index: 0, count }),
        }
    }
}

fn validate_points(points: &[DataPoint]) -> PlotResult<()> {
    if points.iter().all(|point| point.is_finite()) {
        Ok(())
    } else {
        Err(PlotError::InvalidData(
            "series points must be finite".to_owned(),
        ))
    }
}
