//! Application configuration
//!
//! Configuration loaded from .gh-pr-recent.toml file.

use anyhow::Context;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration loaded from .gh-pr-recent.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// How many days back the search looks for updated pull requests
    #[serde(default = "default_lookback_days")]
    pub lookback_days: i64,

    /// API root override, e.g. "https://ghe.example.com/api/v3"
    ///
    /// `None` targets api.github.com.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// strftime pattern for the "Last Updated" column (local time)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

/// Upper bound for `lookback_days` (ten years)
pub const MAX_LOOKBACK_DAYS: i64 = 3650;

fn default_lookback_days() -> i64 {
    7
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lookback_days: default_lookback_days(),
            api_base_url: None,
            date_format: default_date_format(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {:#}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Load config from an explicit path
    ///
    /// Unlike [`AppConfig::load`], a missing or malformed file is an error:
    /// the user asked for this file specifically.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        if !(1..=MAX_LOOKBACK_DAYS).contains(&config.lookback_days) {
            anyhow::bail!(
                "lookback_days must be between 1 and {}, got {}",
                MAX_LOOKBACK_DAYS,
                config.lookback_days
            );
        }
        if StrftimeItems::new(&config.date_format).any(|item| matches!(item, Item::Error)) {
            anyhow::bail!("date_format '{}' is not a valid strftime pattern", config.date_format);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.lookback_days, 7);
        assert!(config.api_base_url.is_none());
        assert_eq!(config.date_format, "%Y-%m-%d %H:%M");
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            lookback_days = 14
            api_base_url = "https://ghe.example.com/api/v3"
        "#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.lookback_days, 14);
        assert_eq!(
            config.api_base_url.as_deref(),
            Some("https://ghe.example.com/api/v3")
        );
        // date_format should use default
        assert_eq!(config.date_format, "%Y-%m-%d %H:%M");
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_config_rejects_non_positive_lookback() {
        assert!(AppConfig::from_toml("lookback_days = 0").is_err());
    }

    #[test]
    fn test_config_rejects_huge_lookback() {
        assert!(AppConfig::from_toml("lookback_days = 1000000000").is_err());
        assert!(AppConfig::from_toml("lookback_days = 3650").is_ok());
    }

    #[test]
    fn test_config_rejects_invalid_date_format() {
        assert!(AppConfig::from_toml("date_format = \"%Q\"").is_err());
        assert!(AppConfig::from_toml("date_format = \"%d.%m.%Y\"").is_ok());
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "date_format = \"%d.%m. %H:%M\"").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.date_format, "%d.%m. %H:%M");
        assert_eq!(config.lookback_days, 7);
    }

    #[test]
    fn test_load_from_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from(&dir.path().join("missing.toml")).is_err());
    }
}
