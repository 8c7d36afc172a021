//! Degree -> percentage and phrase rendering
//!
//! Bands (upper bound exclusive, last band closed):
//!
//! | degree       | band      |
//! |--------------|-----------|
//! | [0.00, 0.25) | low       |
//! | [0.25, 0.45) | slight    |
//! | [0.45, 0.65) | moderate  |
//! | [0.65, 0.85) | high      |
//! | [0.85, 1.00] | very high |
//!
//! Percentages round half to even, so 0.125 renders as 12 and 0.375 as 38.

use serde::{Deserialize, Serialize};

use crate::fuzzy::clamp01;
use crate::types::Conclusion;

/// Qualifier band for a degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Low,
    Slight,
    Moderate,
    High,
    VeryHigh,
}

impl Band {
    pub fn from_degree(degree: f64) -> Self {
        let d = clamp01(degree);
        if d < 0.25 {
            Band::Low
        } else if d < 0.45 {
            Band::Slight
        } else if d < 0.65 {
            Band::Moderate
        } else if d < 0.85 {
            Band::High
        } else {
            Band::VeryHigh
        }
    }

    pub fn qualifier(&self, style: PhraseStyle) -> &'static str {
        match (self, style) {
            (Band::Low, _) => "low",
            (Band::Slight, PhraseStyle::Terse) => "slightly",
            (Band::Slight, PhraseStyle::Elevated) => "slightly elevated",
            (Band::Moderate, PhraseStyle::Terse) => "moderately",
            (Band::Moderate, PhraseStyle::Elevated) => "moderately elevated",
            (Band::High, _) => "high",
            (Band::VeryHigh, _) => "very high",
        }
    }
}

/// Wording family for the middle bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseStyle {
    /// "slightly" / "moderately" (spending context)
    Terse,
    /// "slightly elevated" / "moderately elevated" (behavior patterns)
    Elevated,
}

/// Rendered score for a single conclusion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternScore {
    pub percent: u8,
    pub phrase: String,
}

impl PatternScore {
    /// Render a conclusion's degree using its own label and family wording
    pub fn render(conclusion: Conclusion, degree: f64) -> Self {
        let (percent, phrase) = percentage_and_phrase(
            degree,
            conclusion.label(),
            conclusion.rule_set().phrase_style(),
        );
        Self { percent, phrase }
    }
}

/// Integer percentage for a degree, rounding half to even
pub fn to_percent(degree: f64) -> u8 {
    (clamp01(degree) * 100.0).round_ties_even() as u8
}

/// Render a degree as `(percent, "{label} is {qualifier}.")`
pub fn percentage_and_phrase(degree: f64, label: &str, style: PhraseStyle) -> (u8, String) {
    let qualifier = Band::from_degree(degree).qualifier(style);
    (to_percent(degree), format!("{} is {}.", label, qualifier))
}
