//! AQI Core - Air-quality index evaluation
//!
//! This crate provides the pure, stateless evaluator behind the AQI service:
//! - Pollutant labels and their fixed weights
//! - Weighted sub-indices and dominant-pollutant selection
//! - Category thresholds for an AQI value
//! - Static chemistry notes for each pollutant
//!
//! # Example
//!
//! ```
//! use aqi_core::{evaluate, Category, Pollutant, PollutantReading};
//!
//! let reading = PollutantReading::new(10.0, 5.0, 2.0, 3.0, 1.0, 4.0);
//! let result = evaluate(&reading).unwrap();
//!
//! assert_eq!(result.aqi, 20.0);
//! assert_eq!(result.category, Category::Good);
//! assert_eq!(result.dominant_pollutant, Pollutant::Pm25);
//! ```

pub mod category;
pub mod chemistry;
pub mod error;
pub mod evaluator;
pub mod pollutant;
pub mod reading;
pub mod sub_index;


pub use category::Category;
pub use chemistry::{chemistry_info, explain, explain_label, ChemistryInfo, FALLBACK_NOTE};
pub use error::{AqiError, Result};
pub use evaluator::{categorize, compute, evaluate, round_to_tenth, sub_indices, AqiResult};
pub use pollutant::{Pollutant, UnknownPollutant};
pub use reading::PollutantReading;
pub use sub_index::SubIndexSet;
