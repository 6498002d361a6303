use std::{fs, path::PathBuf, sync::RwLock};

use anyhow::{Context, Result};

use crate::models::UserProfile;

/// Persisted signed-in profile: one JSON file holding the last
/// authenticated user, restored at startup. A missing or unreadable file
/// simply means nobody is signed in.
pub struct ProfileStore {
    path: PathBuf,
    data: RwLock<Option<UserProfile>>,
}

impl ProfileStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read profile from {}", path.display()))?;
            serde_json::from_str(&contents).ok()
        } else {
            None
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn current(&self) -> Option<UserProfile> {
        self.data.read().unwrap().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.data.read().unwrap().is_some()
    }

    pub fn set(&self, profile: UserProfile) -> Result<()> {
        let mut guard = self.data.write().unwrap();
        let serialized = serde_json::to_string_pretty(&profile)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write profile to {}", self.path.display()))?;
        *guard = Some(profile);
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        let mut guard = self.data.write().unwrap();
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove profile at {}", self.path.display()))?;
        }
        *guard = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("airwatch-profile-{}.json", Uuid::new_v4()))
    }

    fn profile() -> UserProfile {
        UserProfile {
            user_id: "USR001".into(),
            username: "demo".into(),
            full_name: "Demo User".into(),
            email: "demo@example.com".into(),
            mobile: None,
            points: 100,
            badges: "New User".into(),
        }
    }

    #[test]
    fn round_trips_across_instances() {
        let path = temp_path();

        let store = ProfileStore::new(path.clone()).expect("create store");
        assert!(!store.is_signed_in());
        store.set(profile()).expect("persist profile");
        assert!(store.is_signed_in());

        // A fresh store over the same path restores the profile.
        let restored = ProfileStore::new(path.clone()).expect("reopen store");
        assert_eq!(restored.current().map(|p| p.user_id), Some("USR001".into()));

        restored.clear().expect("clear profile");
        assert!(!restored.is_signed_in());
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_file_means_signed_out() {
        let path = temp_path();
        fs::write(&path, "not json at all").expect("seed corrupt file");

        let store = ProfileStore::new(path.clone()).expect("open despite corrupt file");
        assert!(store.current().is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn clear_when_absent_is_fine() {
        let store = ProfileStore::new(temp_path()).expect("create store");
        assert!(store.clear().is_ok());
    }
}
