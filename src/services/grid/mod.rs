//! Grid matrix construction.
//!
//! Turns a sparse list of observations into a dense weekday-major matrix that
//! covers the nominal range widened to whole Sunday..Saturday weeks.

use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

use crate::models::color_scale::{ColorScale, NEUTRAL_COLOR};
use crate::models::grid::{Cell, GridMatrix};
use crate::models::observation::Observation;
use crate::models::range::{DateRange, RangeSpec};
use crate::models::settings::HeatmapSettings;
use crate::services::color::{ColorMapper, ValueBounds};
use crate::utils::date::{format_date, month_index};

/// Builds [`GridMatrix`] values. Holds only the fixed neutral tokens; every
/// call is a pure function of its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBuilder {
    out_of_range_color: String,
    empty_scale_color: String,
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self {
            out_of_range_color: NEUTRAL_COLOR.to_string(),
            empty_scale_color: NEUTRAL_COLOR.to_string(),
        }
    }
}

/// Per-call state shared by every cell of one build.
struct CellContext<'a> {
    nominal: DateRange,
    explicit: bool,
    lookup: HashMap<NaiveDate, f64>,
    bounds: Option<ValueBounds>,
    mapper: ColorMapper<'a>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &HeatmapSettings) -> Self {
        Self {
            out_of_range_color: settings.out_of_range_color.clone(),
            empty_scale_color: settings.empty_scale_color.clone(),
        }
    }

    pub fn with_out_of_range_color(mut self, color: impl Into<String>) -> Self {
        self.out_of_range_color = color.into();
        self
    }

    pub fn with_empty_scale_color(mut self, color: impl Into<String>) -> Self {
        self.empty_scale_color = color.into();
        self
    }

    pub fn out_of_range_color(&self) -> &str {
        &self.out_of_range_color
    }

    /// Build the full grid for `range`.
    ///
    /// An unanchored view (no observations) yields the empty matrix. An
    /// explicit range is always resolvable, so it produces a grid even with
    /// no observations; every value is then 0.
    pub fn build(
        &self,
        observations: &[Observation],
        range: &RangeSpec,
        scale: &ColorScale,
    ) -> GridMatrix {
        let Some(bounds) = range.grid_bounds() else {
            log::debug!("No anchor date for view range; returning empty grid");
            return GridMatrix::empty();
        };

        let ctx = CellContext {
            nominal: bounds.nominal,
            explicit: range.is_explicit(),
            lookup: index_observations(observations),
            bounds: ValueBounds::from_observations(observations),
            mapper: ColorMapper::new(scale).with_empty_scale_color(&self.empty_scale_color),
        };

        let week_count = bounds.week_count();
        let mut columns: Vec<[Cell; 7]> = Vec::with_capacity(week_count);
        for column in 0..week_count {
            let sunday = bounds.column_start(column);
            columns.push(std::array::from_fn(|offset| {
                self.resolve_cell(sunday + Duration::days(offset as i64), &ctx)
            }));
        }

        log::debug!(
            "Built heatmap grid {}..{} ({} weeks, {} observations)",
            format_date(bounds.grid_start),
            format_date(bounds.grid_end),
            week_count,
            observations.len()
        );

        GridMatrix::from_week_columns(columns)
    }

    fn resolve_cell(&self, date: NaiveDate, ctx: &CellContext<'_>) -> Cell {
        let month = month_index(date);
        let in_range = ctx.explicit && ctx.nominal.contains(date);

        if ctx.explicit && !in_range {
            return Cell {
                date,
                value: 0.0,
                color: self.out_of_range_color.clone(),
                in_range: false,
                clickable: false,
                month,
            };
        }

        let value = ctx.lookup.get(&date).copied().unwrap_or(0.0);
        let color = match ctx.bounds {
            Some(bounds) => ctx.mapper.color_for(value, bounds),
            None => ctx.mapper.lowest(),
        };

        Cell {
            date,
            value,
            color: color.to_string(),
            in_range,
            clickable: true,
            month,
        }
    }
}

/// Index observations by date. A later duplicate overwrites an earlier one.
pub fn index_observations(observations: &[Observation]) -> HashMap<NaiveDate, f64> {
    let mut lookup = HashMap::with_capacity(observations.len());
    for obs in observations {
        if let Some(previous) = lookup.insert(obs.date, obs.value) {
            log::trace!(
                "Duplicate observation for {}: {} replaced by {}",
                format_date(obs.date),
                previous,
                obs.value
            );
        }
    }
    lookup
}

/// `build(observations, rangeSpec, colorScale)` with default neutral tokens.
pub fn build_grid(observations: &[Observation], range: &RangeSpec, scale: &ColorScale) -> GridMatrix {
    GridBuilder::default().build(observations, range, scale)
}
