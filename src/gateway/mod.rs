pub mod mock;

use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::models::{
    AirQualityReading, ComplaintDraft, MapData, PollutionSpot, RegistrationRequest, Shelter,
    UserProfile, WeatherSnapshot,
};

/// Apps Script web-app endpoint serving the dashboard backend. Every
/// operation is a GET against this URL with an `action` query parameter.
pub const DEFAULT_BASE_URL: &str =
    "https://script.google.com/macros/s/AKfycbyaMQqfD8YH6dH9KvhFEGahXSFQRP8Xtm3yKuAlguxVvcibqM0FYtR_GVM0TL4iybeB/exec";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

/// Current reading plus weather, as one dashboard refresh.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub reading: AirQualityReading,
    pub weather: WeatherSnapshot,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DashboardResponse {
    success: bool,
    data: Option<AirQualityReading>,
    weather: Option<WeatherSnapshot>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    success: bool,
    user_data: Option<UserProfile>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ComplaintResponse {
    success: bool,
    #[serde(rename = "complaintID")]
    complaint_id: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MapResponse {
    success: bool,
    #[serde(default)]
    community_spots: Vec<PollutionSpot>,
    #[serde(default)]
    shelters: Vec<Shelter>,
}

#[derive(Debug, Deserialize)]
struct AckResponse {
    success: bool,
    error: Option<String>,
}

/// HTTP client for the dashboard backend.
///
/// Transport and decode failures never propagate to callers of the data
/// operations: the gateway logs a warning and substitutes a locally
/// generated payload of the same shape, so a reading is always eventually
/// available. Domain failures (rejected credentials, rejected submissions)
/// are real errors and are never masked by the fallback.
pub struct BackendGateway {
    client: reqwest::Client,
    base_url: String,
}

impl BackendGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    async fn request<T: DeserializeOwned>(&self, params: &[(&str, String)]) -> Result<T> {
        let response = self
            .client
            .get(&self.base_url)
            .query(params)
            .send()
            .await
            .context("backend request failed")?;

        if !response.status().is_success() {
            bail!("backend returned HTTP {}", response.status());
        }

        response
            .json::<T>()
            .await
            .context("backend response was not valid JSON")
    }

    /// Fetch the current reading and weather. Falls back to a placeholder
    /// snapshot when the backend is unreachable or answers with an
    /// incomplete payload.
    pub async fn dashboard(&self) -> DashboardSnapshot {
        let params = [("action", "getDashboard".to_string())];
        match self.request::<DashboardResponse>(&params).await {
            Ok(DashboardResponse {
                success: true,
                data: Some(reading),
                weather: Some(weather),
            }) => DashboardSnapshot { reading, weather },
            Ok(_) => {
                warn!("backend dashboard payload incomplete, substituting placeholder data");
                mock::dashboard()
            }
            Err(err) => {
                warn!("backend unreachable ({err:#}), substituting placeholder data");
                mock::dashboard()
            }
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile> {
        let params = [
            ("action", "login".to_string()),
            ("username", username.to_string()),
            ("password", password.to_string()),
        ];
        match self.request::<AuthResponse>(&params).await {
            Ok(AuthResponse {
                success: true,
                user_data: Some(profile),
                ..
            }) => Ok(profile),
            Ok(AuthResponse { error, .. }) => {
                Err(anyhow!(error.unwrap_or_else(|| "login failed".to_string())))
            }
            Err(err) => {
                warn!("backend unreachable ({err:#}), checking demo credentials");
                mock::login(username, password)
            }
        }
    }

    pub async fn register(&self, request: &RegistrationRequest) -> Result<UserProfile> {
        let data = serde_json::to_string(request).context("failed to encode registration")?;
        let params = [("action", "register".to_string()), ("data", data)];
        match self.request::<AuthResponse>(&params).await {
            Ok(AuthResponse {
                success: true,
                user_data: Some(profile),
                ..
            }) => Ok(profile),
            Ok(AuthResponse { error, .. }) => Err(anyhow!(
                error.unwrap_or_else(|| "registration failed".to_string())
            )),
            Err(err) => {
                warn!("backend unreachable ({err:#}), issuing local registration");
                Ok(mock::register(request))
            }
        }
    }

    /// Submit a complaint, returning its tracking ID.
    pub async fn submit_complaint(&self, draft: &ComplaintDraft) -> Result<String> {
        let data = serde_json::to_string(draft).context("failed to encode complaint")?;
        let params = [("action", "submitComplaint".to_string()), ("data", data)];
        match self.request::<ComplaintResponse>(&params).await {
            Ok(ComplaintResponse {
                success: true,
                complaint_id: Some(id),
                ..
            }) => Ok(id),
            Ok(ComplaintResponse { error, .. }) => Err(anyhow!(
                error.unwrap_or_else(|| "complaint submission failed".to_string())
            )),
            Err(err) => {
                warn!("backend unreachable ({err:#}), issuing local tracking ID");
                Ok(mock::complaint_id())
            }
        }
    }

    pub async fn map_data(&self) -> MapData {
        let params = [("action", "getMapData".to_string())];
        match self.request::<MapResponse>(&params).await {
            Ok(MapResponse { success: true, community_spots, shelters }) => MapData {
                community_spots,
                shelters,
            },
            Ok(_) => {
                warn!("backend map payload incomplete, substituting placeholder data");
                mock::map_data()
            }
            Err(err) => {
                warn!("backend unreachable ({err:#}), substituting placeholder data");
                mock::map_data()
            }
        }
    }

    pub async fn report_spot(&self, spot: &PollutionSpot) -> Result<()> {
        let data = serde_json::to_string(spot).context("failed to encode spot report")?;
        let params = [("action", "reportSpot".to_string()), ("data", data)];
        match self.request::<AckResponse>(&params).await {
            Ok(AckResponse { success: true, .. }) => Ok(()),
            Ok(AckResponse { error, .. }) => Err(anyhow!(
                error.unwrap_or_else(|| "spot report failed".to_string())
            )),
            Err(err) => {
                warn!("backend unreachable ({err:#}), accepting spot report locally");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens here; every request fails fast with a connection
    // error, exercising the fallback path.
    fn offline_gateway() -> BackendGateway {
        BackendGateway::new(GatewayConfig {
            base_url: "http://127.0.0.1:9/exec".to_string(),
            timeout_secs: 1,
        })
        .expect("build gateway")
    }

    #[tokio::test]
    async fn dashboard_always_yields_a_classifiable_reading() {
        let gateway = offline_gateway();
        let snapshot = gateway.dashboard().await;

        assert!(snapshot.reading.aqi >= 150 && snapshot.reading.aqi < 350);
        assert!(!snapshot.reading.station.is_empty());
        assert!(!snapshot.weather.description.is_empty());

        let classification = crate::aqi::classify(snapshot.reading.aqi);
        assert!(classification.category.band_index() >= 2);
    }

    #[tokio::test]
    async fn demo_credentials_survive_outage() {
        let gateway = offline_gateway();

        let profile = gateway
            .login("demo", "demo123")
            .await
            .expect("demo login succeeds offline");
        assert_eq!(profile.user_id, "USR001");

        let rejected = gateway.login("demo", "wrong").await;
        assert!(rejected.is_err());
    }

    #[tokio::test]
    async fn offline_registration_issues_a_profile() {
        let gateway = offline_gateway();
        let request = RegistrationRequest {
            username: "citizen".into(),
            password: "secret123".into(),
            confirm_password: "secret123".into(),
            full_name: "Test Citizen".into(),
            email: "citizen@example.com".into(),
        };

        let profile = gateway.register(&request).await.expect("offline register");
        assert!(profile.user_id.starts_with("USR"));
        assert_eq!(profile.username, "citizen");
    }

    #[tokio::test]
    async fn offline_complaint_gets_a_tracking_id() {
        let gateway = offline_gateway();
        let draft = ComplaintDraft {
            user_id: "USR001".into(),
            complaint_type: crate::models::ComplaintType::Waste,
            location: crate::models::GeoPoint {
                lat: 28.61,
                lng: 77.21,
            },
            description: "Garbage burning behind the market".into(),
            photos: vec![],
            severity: crate::models::Severity::Medium,
        };

        let id = gateway.submit_complaint(&draft).await.expect("tracking id");
        assert!(id.starts_with("CMP-"));
    }

    #[tokio::test]
    async fn offline_map_data_has_spots_and_shelters() {
        let gateway = offline_gateway();
        let map = gateway.map_data().await;

        assert!(!map.community_spots.is_empty());
        assert!(!map.shelters.is_empty());
        for spot in &map.community_spots {
            assert!((spot.lat - 28.6139).abs() < 0.5);
            assert!((spot.lng - 77.209).abs() < 0.5);
        }
    }
}
