//! Tiered health/activity guidance and the health-alert escalation ladder.
//!
//! Two independent threshold ladders over the same reading, both distinct
//! from the six category bands in [`super::classifier`]:
//!
//! * advisory text uses four tiers (<=50, <=100, <=150, >150), the last tier
//!   shared by every reading above 150;
//! * urgent-banner escalation uses three tiers that only begin above 150.

use serde::Serialize;

/// Advisory tier for health and activity guidance.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AdvisoryTier {
    Low,
    Elevated,
    SensitiveRisk,
    GeneralRisk,
}

impl AdvisoryTier {
    pub fn from_aqi(aqi: u32) -> Self {
        match aqi {
            0..=50 => AdvisoryTier::Low,
            51..=100 => AdvisoryTier::Elevated,
            101..=150 => AdvisoryTier::SensitiveRisk,
            _ => AdvisoryTier::GeneralRisk,
        }
    }

    pub fn health_items(&self) -> &'static [&'static str] {
        match self {
            AdvisoryTier::Low => &[
                "Air quality is satisfactory with little health risk",
                "No special precautions needed",
                "Ideal for outdoor activities",
            ],
            AdvisoryTier::Elevated => &[
                "Air quality is acceptable for most individuals",
                "Unusually sensitive people should reduce prolonged outdoor exertion",
                "People with asthma should have quick-relief medicine handy",
            ],
            AdvisoryTier::SensitiveRisk => &[
                "Sensitive groups may experience health effects",
                "General public is not likely to be affected",
                "People with heart or lung disease should reduce outdoor exertion",
            ],
            AdvisoryTier::GeneralRisk => &[
                "Everyone may begin to experience health effects",
                "Sensitive groups should avoid outdoor activities",
                "Consider wearing an N95 mask if going outside",
                "Use air purifiers indoors",
            ],
        }
    }

    pub fn activity_items(&self) -> &'static [&'static str] {
        match self {
            AdvisoryTier::Low => &[
                "Perfect for outdoor sports and exercise",
                "Great day for hiking or cycling",
                "Ideal for opening windows for ventilation",
            ],
            AdvisoryTier::Elevated => &[
                "Generally safe for outdoor activities",
                "Consider shorter duration for intense exercise",
                "Good day for gardening or light outdoor work",
            ],
            AdvisoryTier::SensitiveRisk => &[
                "Sensitive groups should limit outdoor activities",
                "Consider indoor exercise options",
                "Take more frequent breaks if working outdoors",
            ],
            AdvisoryTier::GeneralRisk => &[
                "Avoid all outdoor physical activities",
                "Reschedule outdoor events if possible",
                "Use indoor fitness facilities instead",
                "Keep windows and doors closed",
            ],
        }
    }
}

/// Urgent-banner escalation. Suppressed at or below 150.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum HealthAlert {
    Alert,
    High,
    Severe,
}

impl HealthAlert {
    /// Returns the alert level for a reading, or `None` when no banner
    /// should be shown.
    pub fn for_aqi(aqi: u32) -> Option<Self> {
        match aqi {
            0..=150 => None,
            151..=200 => Some(HealthAlert::Alert),
            201..=300 => Some(HealthAlert::High),
            _ => Some(HealthAlert::Severe),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            HealthAlert::Alert => "Health Alert",
            HealthAlert::High => "High Health Alert",
            HealthAlert::Severe => "Severe Health Alert",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            HealthAlert::Alert => {
                "Current air quality may affect sensitive individuals. Limit outdoor activities."
            }
            HealthAlert::High => {
                "Air quality is poor. Everyone may begin to experience health effects. Avoid outdoor activities."
            }
            HealthAlert::Severe => {
                "Health emergency! Avoid all outdoor activities. Sensitive groups should take extra precautions."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_suppressed_at_or_below_150() {
        for aqi in [0, 50, 100, 149, 150] {
            assert_eq!(HealthAlert::for_aqi(aqi), None, "aqi={aqi}");
        }
    }

    #[test]
    fn alert_ladder_boundaries() {
        assert_eq!(HealthAlert::for_aqi(151), Some(HealthAlert::Alert));
        assert_eq!(HealthAlert::for_aqi(200), Some(HealthAlert::Alert));
        assert_eq!(HealthAlert::for_aqi(201), Some(HealthAlert::High));
        assert_eq!(HealthAlert::for_aqi(300), Some(HealthAlert::High));
        assert_eq!(HealthAlert::for_aqi(301), Some(HealthAlert::Severe));
        assert_eq!(HealthAlert::for_aqi(999), Some(HealthAlert::Severe));
    }

    #[test]
    fn alert_titles_escalate() {
        assert_eq!(HealthAlert::Alert.title(), "Health Alert");
        assert_eq!(HealthAlert::High.title(), "High Health Alert");
        assert_eq!(HealthAlert::Severe.title(), "Severe Health Alert");
    }

    #[test]
    fn advisory_tier_boundaries() {
        assert_eq!(AdvisoryTier::from_aqi(50), AdvisoryTier::Low);
        assert_eq!(AdvisoryTier::from_aqi(51), AdvisoryTier::Elevated);
        assert_eq!(AdvisoryTier::from_aqi(100), AdvisoryTier::Elevated);
        assert_eq!(AdvisoryTier::from_aqi(101), AdvisoryTier::SensitiveRisk);
        assert_eq!(AdvisoryTier::from_aqi(150), AdvisoryTier::SensitiveRisk);
        assert_eq!(AdvisoryTier::from_aqi(151), AdvisoryTier::GeneralRisk);
    }

    #[test]
    fn general_risk_tier_reused_for_all_higher_bands() {
        let at_175 = AdvisoryTier::from_aqi(175);
        let at_250 = AdvisoryTier::from_aqi(250);
        let at_450 = AdvisoryTier::from_aqi(450);
        assert_eq!(at_175, AdvisoryTier::GeneralRisk);
        assert_eq!(at_250, AdvisoryTier::GeneralRisk);
        assert_eq!(at_450, AdvisoryTier::GeneralRisk);
    }
}
