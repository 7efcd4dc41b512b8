//! Configuration for the booking search front end.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::query::{DateStyle, Schema};

/// File picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "booking-search.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub display: DisplayConfig,
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the web front end listens on.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Short date style for check-in / check-out on the results page.
    pub date_style: DateStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject a check-out day before the check-in day. Off by default.
    pub enforce_date_order: bool,
    /// Reject check-in / check-out days before today. Off by default.
    pub reject_past_dates: bool,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, else from the working directory, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            info!("Loading config from: {}", path.display());
            return Self::from_file(path);
        }

        let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            info!("Loading config from: {}", fallback.display());
            return Self::from_file(&fallback);
        }

        info!("No config file found, using defaults");
        Ok(Config::default())
    }

    fn validate(&self) -> Result<()> {
        self.server.bind_addr()?;
        Ok(())
    }

    /// Validation schema with this configuration's policy applied.
    pub fn schema(&self) -> Schema {
        Schema::default()
            .with_date_order(self.validation.enforce_date_order)
            .with_past_dates_rejected(self.validation.reject_past_dates)
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .with_context(|| format!("Invalid server.bind address: {}", self.bind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert_eq!(config.display.date_style, DateStyle::EnUs);
        assert!(!config.validation.enforce_date_order);
        assert!(!config.validation.reject_past_dates);
        assert!(!config.schema().enforce_date_order);
        assert!(!config.schema().reject_past_dates);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [display]
            date_style = "de-DE"
            "#,
        )
        .unwrap();
        assert_eq!(config.display.date_style, DateStyle::DeDe);
        assert_eq!(config.server.bind, "127.0.0.1:3000");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::from_toml("[server]\nbind = \"localhost\"").is_err());
        assert!(Config::from_toml("[display]\ndate_style = \"fr-FR\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nbind = \"0.0.0.0:8080\"\n[validation]\nenforce_date_order = true\nreject_past_dates = true"
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.server.bind_addr().unwrap().port(), 8080);
        assert!(config.schema().enforce_date_order);
        assert!(config.schema().reject_past_dates);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(dir.path().join("absent.toml").as_path())).is_err());
    }
}
