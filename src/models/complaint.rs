use std::fmt;

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

/// Cap on photos attached to one complaint.
pub const MAX_COMPLAINT_PHOTOS: usize = 5;

/// Reportable pollution-source categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ComplaintType {
    Construction,
    Stubble,
    Industry,
    Vehicle,
    Waste,
}

impl ComplaintType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ComplaintType::Construction => "Illegal Construction",
            ComplaintType::Stubble => "Stubble Burning",
            ComplaintType::Industry => "Illegal Industry",
            ComplaintType::Vehicle => "Vehicle Pollution",
            ComplaintType::Waste => "Waste Burning",
        }
    }

    /// Map-marker color for this category.
    pub fn marker_color(&self) -> &'static str {
        match self {
            ComplaintType::Construction => "orange",
            ComplaintType::Stubble => "brown",
            ComplaintType::Industry => "red",
            ComplaintType::Vehicle => "blue",
            ComplaintType::Waste => "purple",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// WGS-84 coordinate pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Parse a "lat, lng" string as entered in a location field.
    pub fn parse(input: &str) -> Result<Self> {
        let mut parts = input.split(',');
        let lat = parts
            .next()
            .ok_or_else(|| anyhow!("missing latitude in '{input}'"))?;
        let lng = parts
            .next()
            .ok_or_else(|| anyhow!("missing longitude in '{input}'"))?;
        if parts.next().is_some() {
            bail!("expected 'lat, lng', got '{input}'");
        }

        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| anyhow!("invalid latitude in '{input}'"))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|_| anyhow!("invalid longitude in '{input}'"))?;
        if !lat.is_finite() || !lng.is_finite() {
            bail!("coordinates must be finite in '{input}'");
        }

        Ok(Self { lat, lng })
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// A complaint as composed by the reporting form, validated before
/// submission. Photos are data URLs captured by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintDraft {
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "type")]
    pub complaint_type: ComplaintType,
    pub location: GeoPoint,
    pub description: String,
    pub photos: Vec<String>,
    pub severity: Severity,
}

impl ComplaintDraft {
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            bail!("complaint is missing the reporting user");
        }
        if self.description.trim().is_empty() {
            bail!("complaint description is required");
        }
        if self.photos.len() > MAX_COMPLAINT_PHOTOS {
            bail!("at most {MAX_COMPLAINT_PHOTOS} photos per complaint");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ComplaintDraft {
        ComplaintDraft {
            user_id: "USR001".into(),
            complaint_type: ComplaintType::Stubble,
            location: GeoPoint {
                lat: 28.6139,
                lng: 77.209,
            },
            description: "Open field burning near the highway".into(),
            photos: vec![],
            severity: Severity::High,
        }
    }

    #[test]
    fn geo_point_parses_form_input() {
        let point = GeoPoint::parse("28.6139, 77.2090").expect("parse");
        assert!((point.lat - 28.6139).abs() < 1e-9);
        assert!((point.lng - 77.209).abs() < 1e-9);

        // Round trip through the display format used by location fields.
        let reparsed = GeoPoint::parse(&point.to_string()).expect("reparse");
        assert_eq!(reparsed, point);
    }

    #[test]
    fn geo_point_rejects_malformed_input() {
        assert!(GeoPoint::parse("").is_err());
        assert!(GeoPoint::parse("28.6139").is_err());
        assert!(GeoPoint::parse("28.6, 77.2, 3.0").is_err());
        assert!(GeoPoint::parse("north, east").is_err());
        assert!(GeoPoint::parse("NaN, 77.2").is_err());
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn photo_cap_enforced() {
        let mut d = draft();
        d.photos = vec!["data:image/jpeg;base64,xxxx".into(); MAX_COMPLAINT_PHOTOS];
        assert!(d.validate().is_ok());

        d.photos.push("data:image/jpeg;base64,yyyy".into());
        let err = d.validate().unwrap_err();
        assert!(err.to_string().contains("photos"));
    }

    #[test]
    fn blank_description_rejected() {
        let mut d = draft();
        d.description = "   ".into();
        assert!(d.validate().is_err());
    }

    #[test]
    fn spot_tables_cover_every_category() {
        let categories = [
            ComplaintType::Construction,
            ComplaintType::Stubble,
            ComplaintType::Industry,
            ComplaintType::Vehicle,
            ComplaintType::Waste,
        ];
        for category in categories {
            assert!(!category.display_name().is_empty());
            assert!(!category.marker_color().is_empty());
        }
        assert_eq!(ComplaintType::Stubble.display_name(), "Stubble Burning");
        assert_eq!(ComplaintType::Vehicle.marker_color(), "blue");
    }

    #[test]
    fn draft_serializes_wire_field_names() {
        let encoded = serde_json::to_value(draft()).expect("encode draft");
        assert_eq!(encoded["userID"], "USR001");
        assert_eq!(encoded["type"], "stubble");
        assert_eq!(encoded["severity"], "high");
    }
}
