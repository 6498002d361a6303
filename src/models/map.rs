use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::complaint::ComplaintType;

/// A community-reported pollution spot rendered as a colored map marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PollutionSpot {
    #[serde(rename = "type")]
    pub spot_type: ComplaintType,
    pub lat: f64,
    pub lng: f64,
    pub reported_by: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shelter {
    pub name: String,
    #[serde(rename = "type")]
    pub shelter_type: String,
    pub status: String,
    pub phone: String,
    pub lat: f64,
    pub lng: f64,
}

impl Shelter {
    pub fn is_open(&self) -> bool {
        self.status == "Open"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapData {
    pub community_spots: Vec<PollutionSpot>,
    pub shelters: Vec<Shelter>,
}
