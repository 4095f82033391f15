// Error types
// Boundary failures raised while turning caller input into typed heatmap values

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised when caller-supplied input cannot be turned into a grid.
///
/// The builders themselves never fail; every variant here is produced while
/// validating strings and numbers at the edge of the library.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeatmapError {
    #[error("invalid date input '{input}': expected a UTC calendar date in yyyy-mm-dd form")]
    InvalidDateInput { input: String },

    #[error("invalid value {value} for {date}: observation values must be finite")]
    InvalidValue { date: NaiveDate, value: f64 },

    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("incomplete range: {given} given without {missing}")]
    MissingRangeBound {
        given: &'static str,
        missing: &'static str,
    },

    #[error("unknown view '{input}': expected 'month' or 'year'")]
    InvalidView { input: String },
}

pub type HeatmapResult<T> = Result<T, HeatmapError>;
