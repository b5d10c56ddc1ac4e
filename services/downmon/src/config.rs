//! Configuration types for the downmon service

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationSettings,
}

/// Connection settings for the Downdetector API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: String::new(),
            poll_interval: default_poll_interval(),
        }
    }
}

/// Notification channel toggles, fixed for the lifetime of a dispatcher
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default = "default_true")]
    pub alert_sound: bool,
    #[serde(default = "default_true")]
    pub popup_alerts: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            alert_sound: true,
            popup_alerts: true,
        }
    }
}

fn default_base_url() -> String {
    "https://downdetector.info/api/v1".to_string()
}

fn default_poll_interval() -> u64 {
    60
}

fn default_true() -> bool {
    true
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::MonitorError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}

/// Write the configuration to a JSON file, replacing any previous content
pub fn save_config(path: &Path, config: &Config) -> crate::Result<()> {
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|e| {
        crate::MonitorError::Config(format!("Failed to write config file {:?}: {}", path, e))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "api": {
                "base_url": "https://example.test/api/v1",
                "token": "secret",
                "poll_interval": 30
            },
            "notifications": {
                "alert_sound": false,
                "popup_alerts": true
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.api.base_url, "https://example.test/api/v1");
        assert_eq!(config.api.token, "secret");
        assert_eq!(config.api.poll_interval, 30);
        assert!(!config.notifications.alert_sound);
        assert!(config.notifications.popup_alerts);
    }

    #[test]
    fn parse_minimal_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.api.base_url, "https://downdetector.info/api/v1");
        assert_eq!(config.api.token, "");
        assert_eq!(config.api.poll_interval, 60);
        assert!(config.notifications.alert_sound);
        assert!(config.notifications.popup_alerts);
    }

    #[test]
    fn parse_partial_sections() {
        let json = r#"{
            "api": {"token": "t"},
            "notifications": {"popup_alerts": false}
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.api.token, "t");
        assert_eq!(config.api.base_url, "https://downdetector.info/api/v1");
        assert!(config.notifications.alert_sound);
        assert!(!config.notifications.popup_alerts);
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://downdetector.info/api/v1");
        assert_eq!(config.api.poll_interval, 60);
        assert!(config.notifications.alert_sound);
        assert!(config.notifications.popup_alerts);
    }

    #[test]
    fn load_config_missing_file() {
        let result = load_config(Path::new("/nonexistent/config.json"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn load_config_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, "not json").unwrap();

        let result = load_config(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn save_and_reload_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");

        let mut config = Config::default();
        config.api.token = "secret".to_string();
        config.api.poll_interval = 120;
        config.notifications.alert_sound = false;

        save_config(&config_path, &config).unwrap();
        let reloaded = load_config(&config_path).unwrap();

        assert_eq!(reloaded.api.token, "secret");
        assert_eq!(reloaded.api.poll_interval, 120);
        assert!(!reloaded.notifications.alert_sound);
        assert!(reloaded.notifications.popup_alerts);
    }

    #[test]
    fn save_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, r#"{"api": {"token": "old"}}"#).unwrap();

        save_config(&config_path, &Config::default()).unwrap();
        let reloaded = load_config(&config_path).unwrap();
        assert_eq!(reloaded.api.token, "");
    }
}
