use serde::Serialize;

use super::advisory::AdvisoryTier;

/// EPA-style AQI category bands. Each band is defined by an inclusive upper
/// bound (50, 100, 150, 200, 300); everything above 300 is Hazardous.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    pub fn from_aqi(aqi: u32) -> Self {
        match aqi {
            0..=50 => AqiCategory::Good,
            51..=100 => AqiCategory::Moderate,
            101..=150 => AqiCategory::UnhealthySensitive,
            151..=200 => AqiCategory::Unhealthy,
            201..=300 => AqiCategory::VeryUnhealthy,
            _ => AqiCategory::Hazardous,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Severity class identifier used by display layers (CSS class names).
    pub fn severity_class(&self) -> &'static str {
        match self {
            AqiCategory::Good => "good",
            AqiCategory::Moderate => "moderate",
            AqiCategory::UnhealthySensitive => "unhealthy-sensitive",
            AqiCategory::Unhealthy => "unhealthy",
            AqiCategory::VeryUnhealthy => "very-unhealthy",
            AqiCategory::Hazardous => "hazardous",
        }
    }

    /// Position of the band within the ladder, lowest severity first.
    pub fn band_index(&self) -> usize {
        *self as usize
    }
}

/// Result of classifying a single AQI reading: the category band plus the
/// tiered health and activity guidance for that reading.
///
/// Advisory text deliberately uses a coarser four-tier ladder than the six
/// category bands; the two tables are kept separate (see [`AdvisoryTier`]).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub category: AqiCategory,
    pub label: &'static str,
    pub severity_class: &'static str,
    pub health_advice: &'static [&'static str],
    pub activity_advice: &'static [&'static str],
}

/// Classify a numeric AQI reading.
///
/// Pure and total: every `u32` maps to a band. Negative and non-finite
/// readings are unrepresentable here; callers decode readings into an
/// unsigned integer before classification.
pub fn classify(aqi: u32) -> Classification {
    let category = AqiCategory::from_aqi(aqi);
    let tier = AdvisoryTier::from_aqi(aqi);

    Classification {
        category,
        label: category.label(),
        severity_class: category.severity_class(),
        health_advice: tier.health_items(),
        activity_advice: tier.activity_items(),
    }
}
