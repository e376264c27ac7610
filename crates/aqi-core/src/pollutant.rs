//! The six tracked pollutants.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A tracked pollutant.
///
/// Variant order is the canonical order used for tie-breaking:
/// PM2.5, PM10, SO2, NO2, CO, O3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Pollutant {
    /// Fine particulate matter (< 2.5 μm).
    #[cfg_attr(feature = "serde", serde(rename = "PM2.5"))]
    Pm25,
    /// Coarse particulate matter (< 10 μm).
    #[cfg_attr(feature = "serde", serde(rename = "PM10"))]
    Pm10,
    /// Sulfur dioxide.
    #[cfg_attr(feature = "serde", serde(rename = "SO2"))]
    So2,
    /// Nitrogen dioxide.
    #[cfg_attr(feature = "serde", serde(rename = "NO2"))]
    No2,
    /// Carbon monoxide.
    #[cfg_attr(feature = "serde", serde(rename = "CO"))]
    Co,
    /// Ground-level ozone.
    #[cfg_attr(feature = "serde", serde(rename = "O3"))]
    O3,
}

impl Pollutant {
    /// All pollutants in canonical order.
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::So2,
        Pollutant::No2,
        Pollutant::Co,
        Pollutant::O3,
    ];

    /// Display label, e.g. `"PM2.5"`.
    pub const fn label(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::So2 => "SO2",
            Pollutant::No2 => "NO2",
            Pollutant::Co => "CO",
            Pollutant::O3 => "O3",
        }
    }

    /// Multiplier applied to the raw reading to get the sub-index.
    pub const fn weight(self) -> f64 {
        match self {
            Pollutant::Pm25 => 2.0,
            Pollutant::Pm10 => 1.5,
            Pollutant::So2 => 1.2,
            Pollutant::No2 => 1.3,
            Pollutant::Co => 10.0,
            Pollutant::O3 => 1.1,
        }
    }

    /// Field name of this pollutant in a request body.
    pub const fn field_name(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm25",
            Pollutant::Pm10 => "pm10",
            Pollutant::So2 => "so2",
            Pollutant::No2 => "no2",
            Pollutant::Co => "co",
            Pollutant::O3 => "o3",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when parsing a label that names no tracked pollutant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pollutant label: {0:?}")]
pub struct UnknownPollutant(pub String);

impl FromStr for Pollutant {
    type Err = UnknownPollutant;

    /// Parses an exact display label (`"PM2.5"`, `"SO2"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pollutant::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| UnknownPollutant(s.to_string()))
    }
}
