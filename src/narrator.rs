//! Voice-command routing and spoken-summary composition. Speech capture and
//! synthesis belong to the host; this module only decides what to say.

use serde::Serialize;

use crate::aqi::AqiCategory;
use crate::models::AirQualityReading;

/// What a transcribed voice command is asking for.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum VoiceIntent {
    AirQuality,
    Pollutants,
    Health,
    Reporting,
    Unknown,
}

impl VoiceIntent {
    /// Keyword routing over a lowercased transcript. First match wins, in
    /// the order listed.
    pub fn from_transcript(transcript: &str) -> Self {
        let text = transcript.to_lowercase();
        if text.contains("aqi") || text.contains("air quality") {
            VoiceIntent::AirQuality
        } else if text.contains("pollution") || text.contains("pollutant") {
            VoiceIntent::Pollutants
        } else if text.contains("health") || text.contains("recommendation") {
            VoiceIntent::Health
        } else if text.contains("report") || text.contains("complaint") {
            VoiceIntent::Reporting
        } else {
            VoiceIntent::Unknown
        }
    }
}

pub fn narrate_reading(reading: &AirQualityReading) -> String {
    let category = AqiCategory::from_aqi(reading.aqi);
    format!(
        "Current Air Quality Index is {}, which is {}. {}",
        reading.aqi,
        category.label(),
        reading.health_message
    )
}

pub fn narrate_pollutants(reading: &AirQualityReading) -> String {
    format!(
        "The dominant pollutant is {}. PM2.5 level is {} micrograms per cubic meter.",
        reading.dominant_pollutant, reading.pm25
    )
}

/// Spoken health guidance. A five-bucket ladder distinct from the display
/// advisory tables: the spoken form keeps Unhealthy separate from the
/// Very Unhealthy/Hazardous tail.
pub fn narrate_health(aqi: u32) -> &'static str {
    match aqi {
        0..=50 => {
            "Air quality is good. Enjoy your normal outdoor activities. Perfect day for outdoor exercise and sports."
        }
        51..=100 => {
            "Air quality is moderate. Usually sensitive people should consider reducing prolonged outdoor exertion. Generally safe for outdoor activities."
        }
        101..=150 => {
            "Air quality is unhealthy for sensitive groups. People with heart or lung disease, older adults, and children should reduce prolonged outdoor exertion."
        }
        151..=200 => {
            "Air quality is unhealthy. Everyone may begin to experience health effects. Members of sensitive groups may experience more serious health effects."
        }
        _ => {
            "Air quality is very unhealthy. Health alert: everyone may experience more serious health effects. Avoid all outdoor physical activities."
        }
    }
}

pub fn reporting_guidance() -> &'static str {
    "To report an environmental issue, go to the Report section and fill out the complaint form. \
     You can report illegal construction, stubble burning, industrial pollution, vehicle emissions, or waste burning."
}

pub fn help_line() -> &'static str {
    "I can help with AQI, pollution levels, health recommendations, and reporting issues. \
     Try asking about air quality."
}
