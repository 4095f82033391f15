//! Value → color bucket mapping.
//!
//! Values are normalized linearly against the observed `[min, max]` and
//! floored into one of the scale's buckets. Two degenerate inputs have fixed
//! answers: an empty scale yields the neutral token, and a uniform
//! distribution (`min == max`) yields the highest-intensity token.

use crate::models::color_scale::{ColorScale, NEUTRAL_COLOR};
use crate::models::observation::Observation;

/// Observed value distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueBounds {
    pub min: f64,
    pub max: f64,
}

impl ValueBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Single pass min/max; `None` for no values.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values.into_iter().fold(None, |bounds, value| {
            Some(match bounds {
                None => Self::new(value, value),
                Some(b) => Self::new(b.min.min(value), b.max.max(value)),
            })
        })
    }

    pub fn from_observations(observations: &[Observation]) -> Option<Self> {
        Self::from_values(observations.iter().map(|obs| obs.value))
    }

    pub fn is_uniform(&self) -> bool {
        self.max == self.min
    }
}

/// Bucket index of `value` within a scale of `len` tokens.
///
/// Returns `None` only for an empty scale. The result is clamped into
/// `0..len`, so values outside `[min, max]` (such as a zero-valued gap day
/// when every observation is positive) land in the nearest end bucket.
pub fn bucket_index(value: f64, bounds: ValueBounds, len: usize) -> Option<usize> {
    let last = len.checked_sub(1)?;
    if bounds.is_uniform() || value >= bounds.max {
        return Some(last);
    }
    if value.is_nan() || value <= bounds.min {
        return Some(0);
    }

    // Halved operands keep `max - min` finite across the whole f64 range
    let ratio = (value / 2.0 - bounds.min / 2.0) / (bounds.max / 2.0 - bounds.min / 2.0);
    let scaled = (ratio * last as f64).floor();
    let index = if scaled >= last as f64 {
        last
    } else if scaled > 0.0 {
        scaled as usize
    } else {
        0
    };
    Some(index)
}

/// Maps values to tokens of one scale, with a configurable token for an
/// empty scale.
#[derive(Debug, Clone, Copy)]
pub struct ColorMapper<'a> {
    scale: &'a ColorScale,
    empty_scale_color: &'a str,
}

impl<'a> ColorMapper<'a> {
    pub fn new(scale: &'a ColorScale) -> Self {
        Self {
            scale,
            empty_scale_color: NEUTRAL_COLOR,
        }
    }

    pub fn with_empty_scale_color(mut self, color: &'a str) -> Self {
        self.empty_scale_color = color;
        self
    }

    pub fn color_for(&self, value: f64, bounds: ValueBounds) -> &'a str {
        bucket_index(value, bounds, self.scale.len())
            .and_then(|index| self.scale.get(index))
            .unwrap_or(self.empty_scale_color)
    }

    /// Token used when there is no observed distribution at all.
    pub fn lowest(&self) -> &'a str {
        self.scale.first().unwrap_or(self.empty_scale_color)
    }
}

/// `colorFor(value, min, max, scale)` with the default neutral fallback.
pub fn color_for(value: f64, min: f64, max: f64, scale: &ColorScale) -> &str {
    ColorMapper::new(scale).color_for(value, ValueBounds::new(min, max))
}
