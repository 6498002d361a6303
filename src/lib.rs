//! Core of an air-quality monitoring and guided-breathing application:
//! AQI classification with tiered health advisories, a timed
//! breathing-phase sequencer, a backend gateway that degrades to
//! placeholder data, and a persisted sign-in profile. Rendering, maps,
//! camera and speech transport live in the host that embeds this crate.

pub mod app;
pub mod aqi;
pub mod breathing;
pub mod gateway;
pub mod models;
pub mod narrator;
pub mod profile;

pub use app::{AppCore, DashboardView};
pub use aqi::{classify, AqiCategory, Classification, HealthAlert};
pub use breathing::{
    BreathCue, BreathPhase, BreathingConfig, BreathingController, BreathingEvent, BreathingSession,
};
pub use gateway::{BackendGateway, DashboardSnapshot, GatewayConfig};
pub use models::{AirQualityReading, UserProfile};
pub use profile::ProfileStore;
