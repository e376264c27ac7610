//! Weighted per-pollutant sub-indices.

use crate::pollutant::Pollutant;
use crate::reading::PollutantReading;

/// The six weighted sub-indices of a reading, kept in canonical order.
///
/// The fixed ordering is what makes dominant-pollutant selection
/// deterministic on ties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubIndexSet {
    values: [(Pollutant, f64); 6],
}

impl SubIndexSet {
    /// Weights each concentration of `reading`.
    pub fn from_reading(reading: &PollutantReading) -> Self {
        let values = Pollutant::ALL.map(|p| (p, reading.get(p) * p.weight()));
        Self { values }
    }

    /// Sub-index for one pollutant.
    pub fn get(&self, pollutant: Pollutant) -> f64 {
        // ALL is in declaration order, so the discriminant is the slot.
        self.values[pollutant as usize].1
    }

    /// Iterates over `(pollutant, sub_index)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        self.values.iter().copied()
    }

    /// Largest sub-index and the pollutant that attains it.
    ///
    /// Only a strictly greater value replaces the current best, so the
    /// earliest pollutant in canonical order wins a tie. NaN never
    /// replaces anything.
    pub fn max(&self) -> (f64, Pollutant) {
        let (mut best, mut value) = self.values[0];
        for &(pollutant, v) in &self.values[1..] {
            if v > value {
                best = pollutant;
                value = v;
            }
        }
        (value, best)
    }
}
