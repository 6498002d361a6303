use serde::{Deserialize, Serialize};

/// One air-quality observation from a monitoring station. `aqi` is the
/// composite index the classifier consumes; the pollutant fields are
/// concentrations for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AirQualityReading {
    pub aqi: u32,
    pub pm25: u32,
    pub pm10: u32,
    pub o3: u32,
    pub no2: u32,
    pub so2: u32,
    pub co: f64,
    pub dominant_pollutant: String,
    pub health_message: String,
    pub station: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub temperature: i32,
    pub humidity: u32,
    pub wind_speed: f64,
    pub visibility: f64,
    pub description: String,
    pub pressure: u32,
}
