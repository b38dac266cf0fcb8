use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::paths::{get_config_path, get_default_db_path};

/// Environment variable overriding the database path
pub const DATABASE_ENV: &str = "AITOOL_DATABASE";

const DEFAULT_LOG_FILTER: &str = "info";

/// Settings for opening the instance database and logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub database_path: PathBuf,

    /// `tracing_subscriber` filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl AppConfig {
    /// Load `<app dir>/config.json` if present, defaults otherwise.
    /// `AITOOL_DATABASE` overrides the database path.
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        let mut config = if config_path.exists() {
            Self::load_from(&config_path)?
        } else {
            Self {
                database_path: get_default_db_path()?,
                log_filter: default_log_filter(),
            }
        };

        if let Some(path) = std::env::var_os(DATABASE_ENV) {
            config.database_path = PathBuf::from(path);
        }

        Ok(config)
    }

    /// Load from an explicit JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: AppConfig =
            serde_json::from_str(&contents).context("Failed to parse config file")?;

        tracing::debug!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = AppConfig {
            database_path: dir.path().join("instances.db"),
            log_filter: "aitool_genericopenai=debug".to_string(),
        };
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_log_filter_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "database_path": "/tmp/aitool.db" }"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.database_path, PathBuf::from("/tmp/aitool.db"));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
        assert!(AppConfig::load_from(&dir.path().join("missing.json")).is_err());
    }
}
