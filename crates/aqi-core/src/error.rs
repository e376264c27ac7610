//! Error types for AQI evaluation

use thiserror::Error;

use crate::pollutant::Pollutant;

/// Errors raised when a reading cannot be turned into an index.
///
/// The weighted-maximum formula itself never fails; these only guard
/// against values that have no meaningful index.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AqiError {
    /// A reading was NaN or infinite.
    #[error("reading for {pollutant} is not a finite number: {value}")]
    NonFiniteReading { pollutant: Pollutant, value: f64 },

    /// All readings were finite but the weighted maximum overflowed.
    #[error("sub-index for {pollutant} overflowed to a non-finite value")]
    NonFiniteIndex { pollutant: Pollutant },
}

/// Result type alias for AQI operations
pub type Result<T> = std::result::Result<T, AqiError>;
