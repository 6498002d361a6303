use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;

use crate::aqi::{classify, Classification, HealthAlert};
use crate::breathing::{BreathingConfig, BreathingController};
use crate::gateway::{BackendGateway, GatewayConfig};
use crate::models::{
    AirQualityReading, ComplaintDraft, MapData, RegistrationRequest, UserProfile, WeatherSnapshot,
};
use crate::profile::ProfileStore;

/// Everything one dashboard refresh produces, ready for rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub reading: AirQualityReading,
    pub weather: WeatherSnapshot,
    pub classification: Classification,
    pub alert: Option<HealthAlert>,
    pub refreshed_at: DateTime<Utc>,
}

/// Wires the gateway, the persisted profile and the breathing sequencer
/// behind the operations a UI host calls.
pub struct AppCore {
    gateway: BackendGateway,
    profile: ProfileStore,
    breathing: BreathingController,
}

impl AppCore {
    pub fn new(gateway_config: GatewayConfig, profile_path: PathBuf) -> Result<Self> {
        Ok(Self {
            gateway: BackendGateway::new(gateway_config)?,
            profile: ProfileStore::new(profile_path)?,
            breathing: BreathingController::new(BreathingConfig::default()),
        })
    }

    /// Profile restored from disk, if a user was signed in last run.
    pub fn current_profile(&self) -> Option<UserProfile> {
        self.profile.current()
    }

    pub async fn sign_in(&self, username: &str, password: &str) -> Result<UserProfile> {
        let profile = self.gateway.login(username, password).await?;
        self.profile.set(profile.clone())?;
        info!("signed in as {}", profile.username);
        Ok(profile)
    }

    pub async fn register(&self, request: &RegistrationRequest) -> Result<UserProfile> {
        request.validate()?;
        self.gateway.register(request).await
    }

    pub fn sign_out(&self) -> Result<()> {
        self.profile.clear()?;
        info!("signed out");
        Ok(())
    }

    /// Fetch the current reading (real or placeholder) and classify it.
    pub async fn load_dashboard(&self) -> DashboardView {
        let snapshot = self.gateway.dashboard().await;
        let classification = classify(snapshot.reading.aqi);
        let alert = HealthAlert::for_aqi(snapshot.reading.aqi);

        DashboardView {
            reading: snapshot.reading,
            weather: snapshot.weather,
            classification,
            alert,
            refreshed_at: Utc::now(),
        }
    }

    pub async fn submit_complaint(&self, draft: &ComplaintDraft) -> Result<String> {
        draft.validate()?;
        self.gateway.submit_complaint(draft).await
    }

    pub async fn map_data(&self) -> MapData {
        self.gateway.map_data().await
    }

    pub fn breathing(&self) -> &BreathingController {
        &self.breathing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComplaintType, GeoPoint, Severity};
    use uuid::Uuid;

    fn offline_core() -> AppCore {
        let profile_path =
            std::env::temp_dir().join(format!("airwatch-app-{}.json", Uuid::new_v4()));
        AppCore::new(
            GatewayConfig {
                base_url: "http://127.0.0.1:9/exec".to_string(),
                timeout_secs: 1,
            },
            profile_path,
        )
        .expect("build core")
    }

    #[tokio::test]
    async fn dashboard_view_is_internally_consistent() {
        let core = offline_core();
        let view = core.load_dashboard().await;

        assert_eq!(view.classification, classify(view.reading.aqi));
        assert_eq!(view.alert, HealthAlert::for_aqi(view.reading.aqi));
    }

    #[tokio::test]
    async fn sign_in_persists_and_sign_out_forgets() {
        let core = offline_core();
        assert!(core.current_profile().is_none());

        core.sign_in("demo", "demo123").await.expect("demo sign-in");
        assert_eq!(
            core.current_profile().map(|p| p.user_id),
            Some("USR001".to_string())
        );

        core.sign_out().expect("sign out");
        assert!(core.current_profile().is_none());
    }

    #[tokio::test]
    async fn rejected_credentials_do_not_persist() {
        let core = offline_core();
        assert!(core.sign_in("demo", "nope").await.is_err());
        assert!(core.current_profile().is_none());
    }

    #[tokio::test]
    async fn invalid_registration_never_reaches_the_gateway() {
        let core = offline_core();
        let request = RegistrationRequest {
            username: "citizen".into(),
            password: "abc".into(),
            confirm_password: "abc".into(),
            full_name: "Test Citizen".into(),
            email: "citizen@example.com".into(),
        };
        assert!(core.register(&request).await.is_err());
    }

    #[tokio::test]
    async fn oversized_complaint_rejected_before_submission() {
        let core = offline_core();
        let draft = ComplaintDraft {
            user_id: "USR001".into(),
            complaint_type: ComplaintType::Vehicle,
            location: GeoPoint {
                lat: 28.61,
                lng: 77.21,
            },
            description: "Idling trucks at the depot".into(),
            photos: vec!["data:image/jpeg;base64,xxxx".into(); 6],
            severity: Severity::Low,
        };
        assert!(core.submit_complaint(&draft).await.is_err());
    }
}
