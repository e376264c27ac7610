//! Static chemistry reference text.

use crate::pollutant::Pollutant;

/// Note returned for a label that names no tracked pollutant.
pub const FALLBACK_NOTE: &str =
    "The dominant pollutant has significant health and environmental impacts.";

const NOTES: [(Pollutant, &str); 6] = [
    (
        Pollutant::Pm25,
        "PM2.5 are fine particles (<2.5 μm) that can reach deep into the lungs. \
They often carry adsorbed heavy metals and organic compounds, causing \
respiratory and cardiovascular problems.",
    ),
    (
        Pollutant::Pm10,
        "PM10 are coarse particles (<10 μm). They mostly deposit in the upper \
respiratory tract and can cause irritation, coughing and breathing difficulty.",
    ),
    (
        Pollutant::So2,
        "SO₂ is released when sulfur-containing fuels are burned. In air it forms \
SO₃ which reacts with water to give H₂SO₄ (sulfuric acid), contributing \
to acid rain and corrosion.\n\
Reactions: SO₂ + ½O₂ → SO₃;  SO₃ + H₂O → H₂SO₄",
    ),
    (
        Pollutant::No2,
        "NO₂ is a major component of vehicle exhaust. It participates in \
photochemical smog formation and can lead to ozone (O₃) formation in the troposphere.",
    ),
    (
        Pollutant::Co,
        "CO is formed by incomplete combustion of fuels. It binds strongly to \
hemoglobin forming carboxyhemoglobin, reducing the oxygen-carrying capacity of blood.",
    ),
    (
        Pollutant::O3,
        "Ground-level O₃ is a secondary pollutant formed when NOx and VOCs react \
in sunlight. It is a strong oxidizing agent and irritates eyes and lungs.",
    ),
];

const PRIMARY_POLLUTANTS: &[&str] = &[
    "SO₂, NO₂, CO, PM₂.₅, PM₁₀ – directly emitted from sources like vehicles, industries, burning of fuels.",
];

const SECONDARY_POLLUTANTS: &[&str] = &[
    "O₃, PAN, some particulate matter – formed in the atmosphere by chemical reactions \
between primary pollutants (e.g., NOx + VOCs + sunlight → O₃).",
];

const ACID_RAIN: &[&str] = &[
    "SO₂ and NO₂ are oxidised in air to sulfuric and nitric acids.",
    "These acids dissolve in rainwater and fall as acid rain, damaging vegetation, soil and buildings.",
];

/// Explains the chemistry of `pollutant`.
pub fn explain(pollutant: Pollutant) -> &'static str {
    NOTES
        .iter()
        .find(|(p, _)| *p == pollutant)
        .map_or(FALLBACK_NOTE, |&(_, note)| note)
}

/// Explains a pollutant given by display label.
///
/// Unknown labels get [`FALLBACK_NOTE`].
pub fn explain_label(label: &str) -> &'static str {
    label.parse().map_or(FALLBACK_NOTE, explain)
}

/// Fixed reference lists about primary and secondary pollutants and acid rain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChemistryInfo {
    pub primary_pollutants: &'static [&'static str],
    pub secondary_pollutants: &'static [&'static str],
    pub acid_rain: &'static [&'static str],
}

/// Returns the static chemistry reference content.
pub const fn chemistry_info() -> ChemistryInfo {
    ChemistryInfo {
        primary_pollutants: PRIMARY_POLLUTANTS,
        secondary_pollutants: SECONDARY_POLLUTANTS,
        acid_rain: ACID_RAIN,
    }
}
