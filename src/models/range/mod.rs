// Range module
// Nominal display ranges and their extension to whole Sunday..Saturday weeks

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{HeatmapError, HeatmapResult};
use crate::models::observation::{anchor_date, Observation};
use crate::utils::date::{
    first_of_month, first_of_year, last_of_month, last_of_year, parse_utc_date, week_end,
    week_start,
};

/// Calendar span shown by an anchored heatmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatmapView {
    #[default]
    Month,
    Year,
}

impl HeatmapView {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeatmapView::Month => "month",
            HeatmapView::Year => "year",
        }
    }

    /// Nominal range of this view around `anchor`.
    pub fn range_around(&self, anchor: NaiveDate) -> DateRange {
        match self {
            HeatmapView::Month => DateRange {
                start: first_of_month(anchor),
                end: last_of_month(anchor),
            },
            HeatmapView::Year => DateRange {
                start: first_of_year(anchor),
                end: last_of_year(anchor),
            },
        }
    }
}

impl fmt::Display for HeatmapView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeatmapView {
    type Err = HeatmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "month" => Ok(HeatmapView::Month),
            "year" => Ok(HeatmapView::Year),
            _ => Err(HeatmapError::InvalidView {
                input: s.to_string(),
            }),
        }
    }
}

/// Inclusive `[start, end]` span of calendar dates with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> HeatmapResult<Self> {
        if start > end {
            return Err(HeatmapError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse a range from two `yyyy-mm-dd` strings.
    pub fn parse(start: &str, end: &str) -> HeatmapResult<Self> {
        Self::new(parse_utc_date(start)?, parse_utc_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Widen to whole weeks: back to the preceding Sunday, forward to the
    /// following Saturday.
    pub fn to_grid_bounds(&self) -> GridBounds {
        GridBounds {
            nominal: *self,
            grid_start: week_start(self.start),
            grid_end: week_end(self.end),
        }
    }
}

/// How the caller selects the displayed dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSpec {
    /// Explicit inclusive range; cells outside it are marked out of range.
    Explicit(DateRange),
    /// Month or year around an anchor date (the first observation's date).
    /// Without an anchor nothing can be shown.
    View {
        view: HeatmapView,
        anchor: Option<NaiveDate>,
    },
}

impl RangeSpec {
    pub fn explicit(range: DateRange) -> Self {
        RangeSpec::Explicit(range)
    }

    /// View range anchored at the first of `observations`.
    pub fn for_view(view: HeatmapView, observations: &[Observation]) -> Self {
        RangeSpec::View {
            view,
            anchor: anchor_date(observations),
        }
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, RangeSpec::Explicit(_))
    }

    /// Concrete nominal range, or `None` for an unanchored view.
    pub fn resolve(&self) -> Option<DateRange> {
        match *self {
            RangeSpec::Explicit(range) => Some(range),
            RangeSpec::View { view, anchor } => anchor.map(|date| view.range_around(date)),
        }
    }

    pub fn grid_bounds(&self) -> Option<GridBounds> {
        self.resolve().map(|range| range.to_grid_bounds())
    }
}

/// A nominal range together with its whole-week extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub nominal: DateRange,
    /// Always a Sunday
    pub grid_start: NaiveDate,
    /// Always a Saturday
    pub grid_end: NaiveDate,
}

impl GridBounds {
    pub fn week_count(&self) -> usize {
        ((self.grid_end - self.grid_start).num_days() as usize + 1) / 7
    }

    /// Sunday that opens week column `column`.
    pub fn column_start(&self, column: usize) -> NaiveDate {
        self.grid_start + Duration::weeks(column as i64)
    }
}
