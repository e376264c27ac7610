//! The AQI evaluator.
//!
//! `compute`, `categorize` and `explain` are total, pure functions.
//! [`evaluate`] chains them and refuses values that have no finite index.

use crate::category::Category;
use crate::chemistry::explain;
use crate::error::{AqiError, Result};
use crate::pollutant::Pollutant;
use crate::reading::PollutantReading;
use crate::sub_index::SubIndexSet;

/// Outcome of evaluating one reading.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AqiResult {
    /// Index rounded to one decimal place.
    pub aqi: f64,
    pub category: Category,
    pub dominant_pollutant: Pollutant,
    pub chemistry_note: &'static str,
}

/// Weighted sub-indices of `reading`, in canonical order.
pub fn sub_indices(reading: &PollutantReading) -> SubIndexSet {
    SubIndexSet::from_reading(reading)
}

/// Returns the AQI and the dominant pollutant of `reading`.
///
/// The AQI is the largest weighted sub-index. Ties go to the pollutant
/// that comes first in canonical order.
///
/// # Examples
///
/// ```
/// use aqi_core::{compute, Pollutant, PollutantReading};
///
/// let (aqi, dominant) = compute(&PollutantReading::default());
/// assert_eq!(aqi, 0.0);
/// assert_eq!(dominant, Pollutant::Pm25);
/// ```
pub fn compute(reading: &PollutantReading) -> (f64, Pollutant) {
    sub_indices(reading).max()
}

/// Maps an unrounded AQI value to its category.
pub fn categorize(aqi: f64) -> Category {
    Category::from_aqi(aqi)
}

/// Rounds to one decimal place from the exact decimal value of `value`.
///
/// Digits come from the correctly rounded `{:.1}` formatting, so exact
/// ties go to even and nothing is rounded twice.
/// Values at or beyond 2^52 have no fractional part and are returned as is.
pub fn round_to_tenth(value: f64) -> f64 {
    if value.abs() >= 4_503_599_627_370_496.0 {
        return value;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Evaluates a reading into a full [`AqiResult`].
///
/// # Errors
///
/// Returns [`AqiError::NonFiniteReading`] if any concentration is NaN or
/// infinite, and [`AqiError::NonFiniteIndex`] if the weighted maximum
/// overflows.
pub fn evaluate(reading: &PollutantReading) -> Result<AqiResult> {
    reading.ensure_finite()?;

    let (aqi, dominant) = compute(reading);
    if !aqi.is_finite() {
        return Err(AqiError::NonFiniteIndex {
            pollutant: dominant,
        });
    }

    Ok(AqiResult {
        aqi: round_to_tenth(aqi),
        category: categorize(aqi),
        dominant_pollutant: dominant,
        chemistry_note: explain(dominant),
    })
}
