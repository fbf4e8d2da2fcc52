//! Application configuration

use anyhow::{Context, Result};
use polar_dash_core::{ConfigError, EngineConfig, DEFAULT_CAPACITY, DEFAULT_REFRESH_INTERVAL_SECS};
use polar_dash_types::SourceConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Current config format version
pub const CONFIG_VERSION: u32 = 1;

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_update_interval_secs() -> f64 {
    DEFAULT_REFRESH_INTERVAL_SECS as f64
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Seconds between refresh ticks
    #[serde(default = "default_update_interval_secs")]
    pub update_interval_secs: f64,
    /// Number of readings kept in the rolling history
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Reading source and its settings
    #[serde(default)]
    pub source: SourceConfig,
    /// Log filter used when none is given on the command line
    #[serde(default)]
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to_path(&config_path)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "github.polar_dash", "polar-dash")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Engine parameters, rejecting a zero capacity or an interval that is
    /// not a positive finite number of seconds
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let secs = self.update_interval_secs;
        if !(secs.is_finite() && secs > 0.0) {
            return Err(ConfigError::NonPositiveInterval { secs });
        }
        let interval = Duration::try_from_secs_f64(secs)
            .map_err(|_| ConfigError::IntervalTooLarge { secs })?;
        let config = EngineConfig::new(self.capacity, interval);
        config.validate()?;
        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            update_interval_secs: default_update_interval_secs(),
            capacity: default_capacity(),
            source: SourceConfig::default(),
            log_level: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        let engine = config.engine_config().unwrap();
        assert_eq!(engine.capacity, 5);
        assert_eq!(engine.interval, Duration::from_secs(10));
        assert_eq!(config.source.source_type(), "simulated");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"capacity": 8}"#).unwrap();
        assert_eq!(config.capacity, 8);
        assert_eq!(config.update_interval_secs, 10.0);
        assert_eq!(config.version, CONFIG_VERSION);
    }

    #[test]
    fn test_rejects_bad_engine_parameters() {
        let zero_capacity = AppConfig {
            capacity: 0,
            ..Default::default()
        };
        assert_eq!(zero_capacity.engine_config(), Err(ConfigError::ZeroCapacity));

        for secs in [0.0, -10.0, f64::NAN] {
            let config = AppConfig {
                update_interval_secs: secs,
                ..Default::default()
            };
            assert!(matches!(
                config.engine_config(),
                Err(ConfigError::NonPositiveInterval { .. })
            ));
        }
    }

    #[test]
    fn test_fractional_interval() {
        let config = AppConfig {
            update_interval_secs: 0.5,
            ..Default::default()
        };
        assert_eq!(config.engine_config().unwrap().interval, Duration::from_millis(500));
    }
}
