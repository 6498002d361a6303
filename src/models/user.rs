use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Signed-in user profile as the backend reports it. `badges` is a
/// comma-separated list on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub mobile: Option<String>,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub badges: String,
}

impl UserProfile {
    pub fn badge_list(&self) -> Vec<&str> {
        self.badges
            .split(',')
            .map(str::trim)
            .filter(|badge| !badge.is_empty())
            .collect()
    }
}

/// New-account form data, validated before it reaches the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing, default)]
    pub confirm_password: String,
    pub full_name: String,
    pub email: String,
}

impl RegistrationRequest {
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty()
            || self.full_name.trim().is_empty()
            || self.email.trim().is_empty()
        {
            bail!("all registration fields are required");
        }
        if self.password.len() < 6 {
            bail!("password must be at least 6 characters long");
        }
        if self.password != self.confirm_password {
            bail!("passwords do not match");
        }
        Ok(())
    }
}
