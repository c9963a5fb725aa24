//! Configuration for the native portal tools.
//!
//! The data directory is resolved from, in order: an explicit override (the
//! `--data-dir` flag), the `STUDENT_PORTAL_DATA_DIR` environment variable, and
//! `~/Documents/Portal Estudiantil`. An optional `portal.yaml` inside that
//! directory tunes the rest.

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::backend::domain::{ActionDelays, DEFAULT_NOTIFICATION_LIMIT};

pub const DATA_DIR_ENV_VAR: &str = "STUDENT_PORTAL_DATA_DIR";
pub const CONFIG_FILE_NAME: &str = "portal.yaml";
const DEFAULT_DIR_NAME: &str = "Portal Estudiantil";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Where records and `portal.yaml` live; never read from the file itself
    #[serde(skip)]
    pub data_directory: PathBuf,
    /// Toasts kept on screen at once
    pub notification_limit: usize,
    pub download_delay_ms: u64,
    pub payment_delay_ms: u64,
    /// `env_logger` filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            notification_limit: DEFAULT_NOTIFICATION_LIMIT,
            download_delay_ms: 1500,
            payment_delay_ms: 1000,
            log_level: "info".to_string(),
        }
    }
}

impl PortalConfig {
    /// Resolve the data directory and load `portal.yaml` from it if present
    pub fn load(data_dir_override: Option<PathBuf>) -> Result<Self> {
        let env_value = std::env::var(DATA_DIR_ENV_VAR).ok();
        let data_directory = resolve_data_directory(data_dir_override, env_value);
        Self::load_from(data_directory)
    }

    /// Load `portal.yaml` from `data_directory`, or defaults if it is missing
    pub fn load_from(data_directory: PathBuf) -> Result<Self> {
        let config_path = data_directory.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            info!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            Self::from_yaml_str(&contents)
                .with_context(|| format!("Invalid config file {}", config_path.display()))?
        } else {
            info!("No config file at {}, using defaults", config_path.display());
            Self::default()
        };

        config.data_directory = data_directory;
        Ok(config)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_directory.join(CONFIG_FILE_NAME)
    }

    pub fn action_delays(&self) -> ActionDelays {
        ActionDelays {
            download: Duration::from_millis(self.download_delay_ms),
            payment: Duration::from_millis(self.payment_delay_ms),
        }
    }
}

/// Pick the data directory: explicit override, then environment, then default
pub fn resolve_data_directory(override_dir: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir;
    }
    match env_value.map(|v| v.trim().to_string()) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => default_data_directory(),
    }
}

/// `~/Documents/Portal Estudiantil`, falling back to the home directory and
/// finally the working directory
pub fn default_data_directory() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(DEFAULT_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_override_beats_environment() {
        let dir = resolve_data_directory(
            Some(PathBuf::from("/tmp/override")),
            Some("/tmp/env".to_string()),
        );
        assert_eq!(dir, PathBuf::from("/tmp/override"));
    }

    #[test]
    fn test_environment_beats_default() {
        let dir = resolve_data_directory(None, Some("/tmp/env".to_string()));
        assert_eq!(dir, PathBuf::from("/tmp/env"));

        let blank = resolve_data_directory(None, Some("  ".to_string()));
        assert_eq!(blank, default_data_directory());
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let config = PortalConfig::load_from(temp_dir.path().to_path_buf()).unwrap();

        assert_eq!(config.data_directory, temp_dir.path());
        assert_eq!(config.notification_limit, 3);
        assert_eq!(config.action_delays(), ActionDelays::default());
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "payment_delay_ms: 10\nlog_level: debug\n",
        )
        .unwrap();

        let config = PortalConfig::load_from(temp_dir.path().to_path_buf()).unwrap();

        assert_eq!(config.payment_delay_ms, 10);
        assert_eq!(config.download_delay_ms, 1500);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.config_path(), temp_dir.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "notification_limit: muchos\n",
        )
        .unwrap();

        assert!(PortalConfig::load_from(temp_dir.path().to_path_buf()).is_err());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            PortalConfig::from_yaml_str("\n").unwrap(),
            PortalConfig::default()
        );
    }
}
