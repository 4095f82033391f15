// Observation module
// A single (date, value) data point supplied by the caller

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};
use crate::utils::date::parse_utc_date;

/// One data point: a UTC calendar date and the value observed on it.
///
/// Deserializing goes through [`RawObservation`] so malformed date strings and
/// non-finite values are rejected before they can reach a grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawObservation")]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

/// Wire form of an observation, as the host hands it over.
#[derive(Debug, Clone, Deserialize)]
pub struct RawObservation {
    pub date: String,
    pub value: f64,
}

impl Observation {
    /// Create an observation from an already-typed date
    ///
    /// # Examples
    /// ```
    /// use heatmap_calendar::models::observation::Observation;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let obs = Observation::new(date, 5.0).unwrap();
    /// assert_eq!(obs.value, 5.0);
    /// ```
    pub fn new(date: NaiveDate, value: f64) -> HeatmapResult<Self> {
        if !value.is_finite() {
            return Err(HeatmapError::InvalidValue { date, value });
        }
        Ok(Self { date, value })
    }

    /// Parse an observation from a `yyyy-mm-dd` string and a value
    pub fn parse(date: &str, value: f64) -> HeatmapResult<Self> {
        Self::new(parse_utc_date(date)?, value)
    }
}

impl TryFrom<RawObservation> for Observation {
    type Error = HeatmapError;

    fn try_from(raw: RawObservation) -> Result<Self, Self::Error> {
        Self::parse(&raw.date, raw.value)
    }
}

/// Date of the first observation, which anchors the month and year views.
pub fn anchor_date(observations: &[Observation]) -> Option<NaiveDate> {
    observations.first().map(|obs| obs.date)
}
