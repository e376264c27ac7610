//! Severity categories for an AQI value.

use std::fmt;

/// AQI severity category, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Category {
    Good,
    Satisfactory,
    Moderate,
    Poor,
    #[cfg_attr(feature = "serde", serde(rename = "Very Poor"))]
    VeryPoor,
    Severe,
}

/// Inclusive upper bound for each category below [`Category::Severe`].
pub const THRESHOLDS: [(f64, Category); 5] = [
    (50.0, Category::Good),
    (100.0, Category::Satisfactory),
    (200.0, Category::Moderate),
    (300.0, Category::Poor),
    (400.0, Category::VeryPoor),
];

impl Category {
    /// All categories, least severe first.
    pub const ALL: [Category; 6] = [
        Category::Good,
        Category::Satisfactory,
        Category::Moderate,
        Category::Poor,
        Category::VeryPoor,
        Category::Severe,
    ];

    /// Maps an AQI value onto the threshold ladder.
    ///
    /// Total over `f64`: anything above 400, and NaN, is `Severe`.
    pub fn from_aqi(aqi: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(upper, _)| aqi <= *upper)
            .map_or(Category::Severe, |&(_, category)| category)
    }

    /// Display label, e.g. `"Very Poor"`.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::Satisfactory => "Satisfactory",
            Category::Moderate => "Moderate",
            Category::Poor => "Poor",
            Category::VeryPoor => "Very Poor",
            Category::Severe => "Severe",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
