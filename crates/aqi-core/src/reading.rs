//! Raw pollutant concentrations as submitted by a client.

use crate::error::{AqiError, Result};
use crate::pollutant::Pollutant;

/// Six pollutant concentrations.
///
/// No range is enforced: negative or absurd values are accepted and run
/// through the formula unchanged. Only non-finite values are refused, by
/// [`PollutantReading::ensure_finite`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollutantReading {
    pub pm25: f64,
    pub pm10: f64,
    pub so2: f64,
    pub no2: f64,
    pub co: f64,
    pub o3: f64,
}

impl PollutantReading {
    /// Creates a reading from values in canonical order.
    pub const fn new(pm25: f64, pm10: f64, so2: f64, no2: f64, co: f64, o3: f64) -> Self {
        Self {
            pm25,
            pm10,
            so2,
            no2,
            co,
            o3,
        }
    }

    /// Returns the raw concentration for `pollutant`.
    pub const fn get(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::Pm10 => self.pm10,
            Pollutant::So2 => self.so2,
            Pollutant::No2 => self.no2,
            Pollutant::Co => self.co,
            Pollutant::O3 => self.o3,
        }
    }

    /// Iterates over `(pollutant, value)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        Pollutant::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// Fails on the first NaN or infinite value, in canonical order.
    pub fn ensure_finite(&self) -> Result<()> {
        match self.iter().find(|(_, v)| !v.is_finite()) {
            Some((pollutant, value)) => Err(AqiError::NonFiniteReading { pollutant, value }),
            None => Ok(()),
        }
    }
}
