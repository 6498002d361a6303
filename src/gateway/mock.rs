//! Locally generated placeholder payloads, substituted when the backend is
//! unreachable. Shapes match the wire contract; values are synthetic and
//! carry no meaning beyond "plausible for the Delhi region".

use anyhow::{anyhow, Result};
use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::models::{
    AirQualityReading, ComplaintType, MapData, PollutionSpot, RegistrationRequest, Shelter,
    UserProfile, WeatherSnapshot,
};

use super::DashboardSnapshot;

const CENTER_LAT: f64 = 28.6139;
const CENTER_LNG: f64 = 77.2090;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn reading() -> AirQualityReading {
    let mut rng = rand::thread_rng();
    AirQualityReading {
        aqi: rng.gen_range(150..350),
        pm25: rng.gen_range(80..180),
        pm10: rng.gen_range(120..270),
        o3: rng.gen_range(30..80),
        no2: rng.gen_range(20..60),
        so2: rng.gen_range(5..20),
        co: round1(rng.gen_range(1.0..3.0)),
        dominant_pollutant: "PM2.5".to_string(),
        health_message: "Air quality is unhealthy for sensitive groups. Reduce outdoor activities."
            .to_string(),
        station: "Delhi Central Station".to_string(),
    }
}

pub fn weather() -> WeatherSnapshot {
    let mut rng = rand::thread_rng();
    WeatherSnapshot {
        temperature: rng.gen_range(25..35),
        humidity: rng.gen_range(40..70),
        wind_speed: round1(rng.gen_range(2.0..7.0)),
        visibility: round1(rng.gen_range(5.0..15.0)),
        description: "Partly cloudy".to_string(),
        pressure: 1013,
    }
}

pub fn dashboard() -> DashboardSnapshot {
    DashboardSnapshot {
        reading: reading(),
        weather: weather(),
    }
}

/// Demo sign-in honored while offline.
pub fn login(username: &str, password: &str) -> Result<UserProfile> {
    if username == "demo" && password == "demo123" {
        Ok(UserProfile {
            user_id: "USR001".to_string(),
            username: "demo".to_string(),
            full_name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
            mobile: Some("9876543210".to_string()),
            points: 100,
            badges: "New User,Active Reporter".to_string(),
        })
    } else {
        Err(anyhow!("Invalid credentials"))
    }
}

pub fn register(request: &RegistrationRequest) -> UserProfile {
    let mut rng = rand::thread_rng();
    UserProfile {
        user_id: format!("USR{}", rng.gen_range(1000..10000)),
        username: request.username.clone(),
        full_name: request.full_name.clone(),
        email: request.email.clone(),
        mobile: None,
        points: 0,
        badges: "New User".to_string(),
    }
}

pub fn complaint_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("CMP-{}", id[..8].to_uppercase())
}

pub fn map_data() -> MapData {
    let mut rng = rand::thread_rng();
    let spot_types = [
        ComplaintType::Construction,
        ComplaintType::Stubble,
        ComplaintType::Industry,
        ComplaintType::Vehicle,
        ComplaintType::Waste,
    ];

    let community_spots = (0..4)
        .map(|_| PollutionSpot {
            spot_type: spot_types[rng.gen_range(0..spot_types.len())],
            lat: CENTER_LAT + rng.gen_range(-0.05..0.05),
            lng: CENTER_LNG + rng.gen_range(-0.05..0.05),
            reported_by: format!("USR{}", rng.gen_range(1000..10000)),
            timestamp: Utc::now(),
        })
        .collect();

    let shelters = vec![
        Shelter {
            name: "City General Hospital".to_string(),
            shelter_type: "Hospital".to_string(),
            status: "Open".to_string(),
            phone: "102".to_string(),
            lat: CENTER_LAT + 0.012,
            lng: CENTER_LNG - 0.008,
        },
        Shelter {
            name: "Community Clean Air Center".to_string(),
            shelter_type: "Shelter".to_string(),
            status: "Open".to_string(),
            phone: "011-23456789".to_string(),
            lat: CENTER_LAT - 0.015,
            lng: CENTER_LNG + 0.01,
        },
    ];

    MapData {
        community_spots,
        shelters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_values_stay_in_range() {
        for _ in 0..50 {
            let r = reading();
            assert!((150..350).contains(&r.aqi));
            assert!((80..180).contains(&r.pm25));
            assert!((120..270).contains(&r.pm10));
            assert!(r.co >= 1.0 && r.co <= 3.0);
            // One decimal place, matching the display format.
            assert_eq!(round1(r.co), r.co);
        }
    }

    #[test]
    fn complaint_ids_are_prefixed_and_unique() {
        let a = complaint_id();
        let b = complaint_id();
        assert!(a.starts_with("CMP-"));
        assert_eq!(a.len(), "CMP-".len() + 8);
        assert_ne!(a, b);
    }

    #[test]
    fn demo_login_only() {
        assert!(login("demo", "demo123").is_ok());
        assert!(login("demo", "demo124").is_err());
        assert!(login("admin", "demo123").is_err());
    }
}
