//! Condition text classification
//!
//! Maps the provider's free-text condition description to one of five
//! display buckets used to choose an illustrative image.

use serde::{Deserialize, Serialize};

/// Keyword groups evaluated in a fixed priority order; first match wins
const KEYWORD_GROUPS: [(&[&str], VisualCategory); 4] = [
    (&["sunny", "clear"], VisualCategory::Sunny),
    (&["cloud"], VisualCategory::Cloudy),
    (&["rain"], VisualCategory::Rainy),
    (&["snow"], VisualCategory::Snowy),
];

/// Display buckets for current conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VisualCategory {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    #[default]
    Default,
}

impl VisualCategory {
    /// Classify a condition description.
    ///
    /// Case-insensitive substring match over [`KEYWORD_GROUPS`]; absent
    /// or unrecognized text maps to [`VisualCategory::Default`]. Pure and
    /// deterministic.
    #[must_use]
    pub fn from_condition_text(text: Option<&str>) -> Self {
        let Some(text) = text else {
            return Self::Default;
        };
        let lowered = text.to_lowercase();

        for (keywords, category) in KEYWORD_GROUPS {
            if keywords.iter().any(|keyword| lowered.contains(keyword)) {
                return category;
            }
        }

        Self::Default
    }

    /// Asset stem used to pick the illustration for this category
    #[must_use]
    pub fn asset_name(&self) -> &'static str {
        match self {
            Self::Sunny => "sun",
            Self::Cloudy => "clouds",
            Self::Rainy => "rainy",
            Self::Snowy => "snowy",
            Self::Default => "default",
        }
    }
}
