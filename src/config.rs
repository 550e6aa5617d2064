//! Configuration handling for the auth screens

use crate::state::View;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the start screen
pub const START_SCREEN_ENV: &str = "MEMORIAL_AUTH_START";

const DEFAULT_SUCCESS_DISMISS_SECS: u64 = 6;

/// User configuration for the screen host
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HostConfig {
    /// Screen shown at startup (login, register or reset)
    pub start_screen: Option<String>,
    /// Seconds before the registration success banner hides itself
    pub success_dismiss_secs: Option<u64>,
    /// Prefill the sign-in email with the last address used
    pub remember_email: Option<bool>,
    /// Last address that signed in successfully
    pub last_email: Option<String>,
}

impl HostConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "memorial", "memorial-auth")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: HostConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded config");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Start screen, with the environment taking precedence over the file
    pub fn start_view(&self) -> View {
        let from_env = std::env::var(START_SCREEN_ENV).ok();
        Self::resolve_start_view(from_env.as_deref(), self.start_screen.as_deref())
    }

    fn resolve_start_view(env: Option<&str>, configured: Option<&str>) -> View {
        env.and_then(View::from_name)
            .or_else(|| configured.and_then(View::from_name))
            .unwrap_or_default()
    }

    pub fn success_dismiss(&self) -> Duration {
        Duration::from_secs(
            self.success_dismiss_secs
                .unwrap_or(DEFAULT_SUCCESS_DISMISS_SECS),
        )
    }

    pub fn remembers_email(&self) -> bool {
        self.remember_email.unwrap_or(false)
    }

    /// Address to prefill on the sign-in screen, if remembering is on
    pub fn prefill_email(&self) -> Option<&str> {
        if self.remembers_email() {
            self.last_email.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HostConfig::default();
        assert!(config.start_screen.is_none());
        assert!(config.success_dismiss_secs.is_none());
        assert!(!config.remembers_email());
        assert_eq!(config.success_dismiss(), Duration::from_secs(6));
    }

    #[test]
    fn test_serialization() {
        let config = HostConfig {
            start_screen: Some("register".to_string()),
            success_dismiss_secs: Some(3),
            remember_email: Some(true),
            last_email: Some("ada@example.com".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: HostConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.start_screen, Some("register".to_string()));
        assert_eq!(parsed.success_dismiss(), Duration::from_secs(3));
        assert_eq!(parsed.prefill_email(), Some("ada@example.com"));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: HostConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.last_email.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"start_screen": "reset", "theme": "dark"}"#;
        let parsed: HostConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.start_screen, Some("reset".to_string()));
    }

    #[test]
    fn test_prefill_requires_remember() {
        let config = HostConfig {
            last_email: Some("ada@example.com".to_string()),
            ..Default::default()
        };
        assert!(config.prefill_email().is_none());
    }

    #[test]
    fn test_start_view_precedence() {
        assert_eq!(
            HostConfig::resolve_start_view(Some("reset"), Some("register")),
            View::PasswordReset
        );
        assert_eq!(
            HostConfig::resolve_start_view(Some("nonsense"), Some("register")),
            View::Register
        );
        assert_eq!(HostConfig::resolve_start_view(None, None), View::Login);
    }

    #[test]
    fn test_load_returns_ok_when_no_file() {
        // Either the user's file or defaults; never an error for a missing file
        let result = HostConfig::load();
        assert!(result.is_ok());
    }
}
