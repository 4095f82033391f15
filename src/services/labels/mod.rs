//! Month axis labels.
//!
//! Walks the whole-week grid one column at a time and samples each column's
//! Sunday. A label is emitted whenever the sampled month changes, so a month
//! that starts mid-week is attributed to the following column.

use crate::models::grid::MonthLabel;
use crate::models::range::{GridBounds, RangeSpec};
use crate::utils::date::{month_index, month_label};

/// Lazy sequence of [`MonthLabel`]s for one range.
///
/// Cloning yields an independent iterator starting from the current position;
/// calling [`month_labels`] again restarts from the first column.
#[derive(Debug, Clone)]
pub struct MonthLabels {
    /// `None` when the range could not be resolved
    bounds: Option<GridBounds>,
    column: usize,
    last_month: Option<u32>,
}

impl Iterator for MonthLabels {
    type Item = MonthLabel;

    fn next(&mut self) -> Option<Self::Item> {
        let bounds = self.bounds?;
        while self.column < bounds.week_count() {
            let column = self.column;
            let sunday = bounds.column_start(column);
            self.column += 1;

            let month = month_index(sunday);
            if self.last_month != Some(month) {
                self.last_month = Some(month);
                return Some(MonthLabel {
                    month,
                    label: month_label(month),
                    week_column_index: column,
                });
            }
        }
        None
    }
}

/// Month labels for `range`. An unanchored view has none.
pub fn month_labels(range: &RangeSpec) -> MonthLabels {
    MonthLabels {
        bounds: range.grid_bounds(),
        column: 0,
        last_month: None,
    }
}

/// `buildLabels(rangeSpec)`, collected.
pub fn build_labels(range: &RangeSpec) -> Vec<MonthLabel> {
    month_labels(range).collect()
}
