use serde::{Deserialize, Serialize};

use crate::core::DataPoint;

/// Inclusive index span of a point sequence that must be drawn for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
}

impl VisibleRange {
    /// Range over every index of a sequence with `len` points.
    #[must_use]
    pub fn full(len: usize) -> Option<Self> {
        len.checked_sub(1).map(|end| Self { start: 0, end })
    }

    #[must_use]
    pub fn point_count(self) -> usize {
        self.end - self.start + 1
    }

    #[must_use]
    pub fn slice<'a>(self, points: &'a [DataPoint]) -> &'a [DataPoint] {
        &points[self.start..=self.end]
    }
}

/// Finds the smallest index span of x-sorted `points` covering
/// `[left, right]` plus one neighbour on each side.
///
/// Returns `None` for an empty sequence. A series lying entirely off one
/// side collapses onto its point nearest to the view.
///
/// `points` must be sorted by ascending `x`; use [`VisibleRange::full`]
/// for unsorted data.
#[must_use]
pub fn visible_range(points: &[DataPoint], left: f64, right: f64) -> Option<VisibleRange> {
    let last = points.len().checked_sub(1)?;
    let (left, right) = if left <= right {
        (left, right)
    } else {
        (right, left)
    };

    let first_inside = points.partition_point(|point| point.x < left);
    let start = if first_inside > last {
        last
    } else {
        first_inside.saturating_sub(1)
    };

    let end = start + points[start..].partition_point(|point| point.x < right);
    Some(VisibleRange {
        start,
        end: end.min(last),
    })
}

/// Whether `points` satisfies the ascending-x precondition of [`visible_range`].
#[must_use]
pub fn is_x_sorted(points: &[DataPoint]) -> bool {
    points.windows(2).all(|pair| pair[0].x <= pair[1].x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xs(values: &[f64]) -> Vec<DataPoint> {
        values.iter().map(|&x| DataPoint::new(x, 0.0)).collect()
    }

    #[test]
    fn includes_one_neighbour_each_side() {
        let points = xs(&[0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
        let range = visible_range(&points, 15.0, 35.0).expect("range");
        assert_eq!(range, VisibleRange { start: 1, end: 4 });
    }

    #[test]
    fn empty_sequence_has_no_range() {
        assert_eq!(visible_range(&[], 0.0, 10.0), None);
    }

    #[test]
    fn series_left_of_view_collapses_to_last_point() {
        let points = xs(&[0.0, 1.0, 2.0]);
        let range = visible_range(&points, 100.0, 200.0).expect("range");
        assert_eq!(range, VisibleRange { start: 2, end: 2 });
    }

    #[test]
    fn series_right_of_view_collapses_to_first_point() {
        let points = xs(&[500.0, 600.0]);
        let range = visible_range(&points, 0.0, 100.0).expect("range");
        assert_eq!(range, VisibleRange { start: 0, end: 0 });
    }

    #[test]
    fn sortedness_check() {
        assert!(is_x_sorted(&xs(&[1.0, 1.0, 2.0])));
        assert!(!is_x_sorted(&xs(&[1.0, 0.5])));
    }
}
