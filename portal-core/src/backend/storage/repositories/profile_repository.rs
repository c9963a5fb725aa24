//! Persistence of the student's contact fields under `studentProfile`.

use anyhow::{Context, Result};
use log::{info, warn};
use serde_json::{Map, Value};
use shared::{StudentProfile, PROFILE_STORAGE_KEY};

use crate::backend::storage::traits::KeyValueStore;

/// Load the profile: built-in defaults with any persisted contact fields on top.
///
/// Each contact field is taken on its own, so a stored field of the wrong
/// type falls back to its default without discarding its siblings. A missing
/// record, unreadable storage or a record that is not a JSON object yield the
/// defaults. Keys other than the contact fields are ignored, so the academic
/// record can never be overwritten from storage.
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> StudentProfile {
    let mut profile = StudentProfile::default();

    let raw = match store.get(PROFILE_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("No saved profile found, using defaults");
            return profile;
        }
        Err(e) => {
            warn!("Failed to read saved profile, using defaults: {:#}", e);
            return profile;
        }
    };

    let stored: Map<String, Value> = match serde_json::from_str(&raw) {
        Ok(stored) => stored,
        Err(e) => {
            warn!("Error loading saved profile, using defaults: {}", e);
            return profile;
        }
    };

    for (key, field) in [
        ("email", &mut profile.email),
        ("phone", &mut profile.phone),
        ("address", &mut profile.address),
    ] {
        match stored.get(key) {
            Some(Value::String(value)) => *field = value.clone(),
            Some(other) => warn!("Ignoring saved profile {}: expected a string, got {}", key, other),
            None => {}
        }
    }

    info!("Loaded saved profile contact fields");
    profile
}

/// Persist the contact fields of `profile`
pub fn save<S: KeyValueStore + ?Sized>(store: &S, profile: &StudentProfile) -> Result<()> {
    let json = serde_json::to_string(&profile.contact()).context("Failed to serialize profile")?;
    store
        .set(PROFILE_STORAGE_KEY, &json)
        .context("Failed to persist profile")?;
    Ok(())
}
