//! Configuration management for slotctl

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// API base URL used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/v1";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API base URL (e.g. `https://logistics.example.com/api/v1`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Location of the persisted session file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_file: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    crate::client::gateway::DEFAULT_TIMEOUT_SECS
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Directory holding config and session state (`~/.slotctl`)
    pub fn state_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".slotctl"))
    }

    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::state_dir()?.join("config.yaml"))
    }

    /// Resolve an optional override into a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional path.
    ///
    /// A missing file is not an error: the tool runs on defaults.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Resolve the API base URL.
    ///
    /// Precedence: explicit override (flag or `SLOTCTL_API_URL`) > config
    /// file > [`DEFAULT_API_URL`]. Trailing slashes are trimmed so paths can
    /// be appended directly.
    pub fn resolve_api_url(&self, override_url: Option<&str>) -> Result<String> {
        let url = override_url
            .or(self.api_url.as_deref())
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_URL);

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "API URL must start with http:// or https://, got '{}'",
                url
            ))
            .into());
        }

        Ok(url.trim_end_matches('/').to_string())
    }

    /// Resolve the session file path: override > config file > `~/.slotctl/session.json`
    pub fn resolve_session_path(&self, override_path: Option<&str>) -> Result<PathBuf> {
        match override_path.or(self.session_file.as_deref()) {
            Some(p) => Ok(PathBuf::from(p)),
            None => Ok(Self::state_dir()?.join("session.json")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_url.is_none());
        assert!(config.session_file.is_none());
        assert_eq!(config.preferences.timeout_secs, 30);
    }

    #[test]
    fn test_api_url_falls_back_to_default() {
        let config = Config::default();
        assert_eq!(config.resolve_api_url(None).unwrap(), DEFAULT_API_URL);
    }

    #[test]
    fn test_api_url_precedence() {
        let config = Config {
            api_url: Some("https://config.example.com/api/v1".to_string()),
            ..Default::default()
        };

        assert_eq!(
            config.resolve_api_url(None).unwrap(),
            "https://config.example.com/api/v1"
        );
        assert_eq!(
            config
                .resolve_api_url(Some("https://env.example.com/api/v1/"))
                .unwrap(),
            "https://env.example.com/api/v1"
        );
    }

    #[test]
    fn test_api_url_blank_override_ignored() {
        let config = Config::default();
        assert_eq!(config.resolve_api_url(Some("  ")).unwrap(), DEFAULT_API_URL);
    }

    #[test]
    fn test_api_url_rejects_missing_scheme() {
        let config = Config::default();
        assert!(config.resolve_api_url(Some("localhost:5000")).is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = tempdir().unwrap();
        let config = Config::load_from(temp.path().join("absent.yaml")).unwrap();
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "api_url: [unclosed").unwrap();
        assert!(Config::load_from(path).is_err());
    }

    #[test]
    fn test_session_path_precedence() {
        let config = Config {
            session_file: Some("/from/config.json".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_session_path(Some("/from/flag.json")).unwrap(),
            PathBuf::from("/from/flag.json")
        );
        assert_eq!(
            config.resolve_session_path(None).unwrap(),
            PathBuf::from("/from/config.json")
        );
    }
}
