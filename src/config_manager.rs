//! # Config Manager Module
//!
//! ## Purpose
//! Centralized configuration of the virtual lab: temperature range of the hot plate, flask
//! scale, largest single portion, thresholds of the reaction rules and the log level.
//!
//! ## Architecture
//! - **LabConfig**: Serializable configuration structure
//! - **ConfigManager**: Core manager with validation and persistence
//! - **Global Access**: Thread-safe singleton with test isolation
//! - **Configuration File**: JSON-based persistent storage (lab_config.json)
//!
//! ## Configuration Format
//! ```json
//! {
//!   "default_temperature_c": 25,
//!   "min_temperature_c": -20,
//!   "max_temperature_c": 500,
//!   "max_addition_ml": 300.0,
//!   "flask_capacity_ml": 300.0,
//!   "log_level": "info",
//!   "thresholds": {
//!     "metal_acid_min_reactivity": 4,
//!     "oxidation_min_gas_reactivity": 7,
//!     "oxidation_min_temperature_c": 100,
//!     "decomposition_temperature_c": 200,
//!     "decomposition_min_reactivity": 0
//!   }
//! }
//! ```
//! Missing fields take their default values; an unreadable file gives the default config.
//!
//! ## Usage Patterns
//! ```rust
//! use ChemFlask::config_manager::{ConfigManager, with_config};
//!
//! let t = with_config(|manager| manager.get_config().default_temperature_c);
//! // a manager without a file, nothing is written to disk
//! let mut manager = ConfigManager::in_memory();
//! manager.update(|c| c.default_temperature_c = 30).unwrap();
//! assert_eq!(manager.get_config().default_temperature_c, 30);
//! ```

use crate::Reactions::classifier::RuleThresholds;
use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, OnceLock};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "lab_config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration of the lab bench.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// temperature of a fresh session, °C
    pub default_temperature_c: i32,
    pub min_temperature_c: i32,
    pub max_temperature_c: i32,
    /// largest single portion, mL
    pub max_addition_ml: f64,
    /// scale of the flask, mL
    pub flask_capacity_ml: f64,
    /// one of off, error, warn, info, debug, trace
    pub log_level: String,
    pub thresholds: RuleThresholds,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            default_temperature_c: 25,
            min_temperature_c: -20,
            max_temperature_c: 500,
            max_addition_ml: 300.0,
            flask_capacity_ml: 300.0,
            log_level: "info".to_string(),
            thresholds: RuleThresholds::default(),
        }
    }
}

impl LabConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_temperature_c > self.max_temperature_c {
            return Err(ConfigError::Invalid(format!(
                "min_temperature_c {} is above max_temperature_c {}",
                self.min_temperature_c, self.max_temperature_c
            )));
        }
        if !(self.min_temperature_c..=self.max_temperature_c).contains(&self.default_temperature_c)
        {
            return Err(ConfigError::Invalid(format!(
                "default_temperature_c {} is outside {}..={}",
                self.default_temperature_c, self.min_temperature_c, self.max_temperature_c
            )));
        }
        if !(self.max_addition_ml > 0.0) {
            return Err(ConfigError::Invalid(
                "max_addition_ml must be positive".to_string(),
            ));
        }
        if !(self.flask_capacity_ml > 0.0) {
            return Err(ConfigError::Invalid(
                "flask_capacity_ml must be positive".to_string(),
            ));
        }
        if LevelFilter::from_str(&self.log_level).is_err() {
            return Err(ConfigError::Invalid(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }

    pub fn log_level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

/// Owns the configuration and the file it is persisted to.
/// A manager without a file keeps the configuration in memory only.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: LabConfig,
    config_file: Option<PathBuf>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// loads lab_config.json from the working directory
    pub fn new() -> Self {
        Self::with_config_file(DEFAULT_CONFIG_FILE)
    }

    pub fn with_config_file<P: AsRef<Path>>(config_file: P) -> Self {
        let path = config_file.as_ref().to_path_buf();
        let config = match Self::load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "failed to load config from {}: {}, using defaults",
                    path.display(),
                    e
                );
                LabConfig::default()
            }
        };
        Self {
            config,
            config_file: Some(path),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            config: LabConfig::default(),
            config_file: None,
        }
    }

    /// absent file gives the default config
    fn load_config(path: &Path) -> Result<LabConfig, ConfigError> {
        if !path.exists() {
            return Ok(LabConfig::default());
        }
        let content = fs::read_to_string(path)?;
        let config: LabConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_config(&self) -> Result<(), ConfigError> {
        self.write_config(&self.config)
    }

    fn write_config(&self, config: &LabConfig) -> Result<(), ConfigError> {
        if let Some(path) = &self.config_file {
            let content = serde_json::to_string_pretty(config)?;
            fs::write(path, content)?;
        }
        Ok(())
    }

    pub fn get_config(&self) -> &LabConfig {
        &self.config
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Applies `change` to a copy of the config. The copy replaces the current config
    /// only if it validates and is saved; on any error the current config stays.
    pub fn update<F>(&mut self, change: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut LabConfig),
    {
        let mut candidate = self.config.clone();
        change(&mut candidate);
        candidate.validate()?;
        self.write_config(&candidate)?;
        self.config = candidate;
        Ok(())
    }

    pub fn reset_to_defaults(&mut self) -> Result<(), ConfigError> {
        let defaults = LabConfig::default();
        self.write_config(&defaults)?;
        self.config = defaults;
        Ok(())
    }
}

#[cfg(not(test))]
fn initial_manager() -> ConfigManager {
    ConfigManager::new()
}

#[cfg(test)]
fn initial_manager() -> ConfigManager {
    ConfigManager::in_memory()
}

static GLOBAL_CONFIG_MANAGER: OnceLock<Mutex<ConfigManager>> = OnceLock::new();

/// Global manager; tests get an in-memory one so that no file is touched.
pub fn get_config_manager() -> MutexGuard<'static, ConfigManager> {
    GLOBAL_CONFIG_MANAGER
        .get_or_init(|| Mutex::new(initial_manager()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&ConfigManager) -> R,
{
    let manager = get_config_manager();
    f(&manager)
}

pub fn with_config_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut ConfigManager) -> R,
{
    let mut manager = get_config_manager();
    f(&mut manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = LabConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_temperature_c, 25);
        assert_eq!((config.min_temperature_c, config.max_temperature_c), (-20, 500));
        assert_eq!(config.thresholds.decomposition_temperature_c, 200);
        assert_eq!(config.log_level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_config_file() {
        let mut temp_config = NamedTempFile::new().unwrap();
        temp_config
            .write_all(br#"{"max_temperature_c": 800, "thresholds": {"decomposition_min_reactivity": 3}}"#)
            .unwrap();
        let manager = ConfigManager::with_config_file(temp_config.path());
        let config = manager.get_config();
        assert_eq!(config.max_temperature_c, 800);
        assert_eq!(config.min_temperature_c, -20);
        assert_eq!(config.thresholds.decomposition_min_reactivity, 3);
        assert_eq!(config.thresholds.metal_acid_min_reactivity, 4);
    }

    #[test]
    fn test_broken_config_file_gives_defaults() {
        let mut temp_config = NamedTempFile::new().unwrap();
        temp_config.write_all(b"{ not json").unwrap();
        let manager = ConfigManager::with_config_file(temp_config.path());
        assert_eq!(manager.get_config(), &LabConfig::default());

        let mut temp_config = NamedTempFile::new().unwrap();
        temp_config
            .write_all(br#"{"min_temperature_c": 100, "max_temperature_c": 0}"#)
            .unwrap();
        let manager = ConfigManager::with_config_file(temp_config.path());
        assert_eq!(manager.get_config(), &LabConfig::default());
    }

    #[test]
    fn test_update_saves_and_reloads() {
        let temp_config = NamedTempFile::new().unwrap();
        let mut manager = ConfigManager::with_config_file(temp_config.path());
        manager
            .update(|c| {
                c.default_temperature_c = 80;
                c.log_level = "debug".to_string();
            })
            .unwrap();
        let reloaded = ConfigManager::with_config_file(temp_config.path());
        assert_eq!(reloaded.get_config().default_temperature_c, 80);
        assert_eq!(reloaded.get_config().log_level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_update_is_rejected() {
        let mut manager = ConfigManager::in_memory();
        let result = manager.update(|c| c.default_temperature_c = 1000);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
        assert_eq!(manager.get_config().default_temperature_c, 25);
        assert!(manager.update(|c| c.max_addition_ml = 0.0).is_err());
        assert!(manager.update(|c| c.log_level = "loud".to_string()).is_err());
    }

    #[test]
    fn test_failed_save_keeps_config() {
        let dir = tempfile::tempdir().unwrap();
        let unwritable = dir.path().join("no_such_dir").join(DEFAULT_CONFIG_FILE);
        let mut manager = ConfigManager::with_config_file(&unwritable);
        let result = manager.update(|c| c.max_temperature_c = 900);
        assert!(matches!(result, Err(ConfigError::Io(_))));
        assert_eq!(manager.get_config(), &LabConfig::default());
        assert!(!unwritable.exists());
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut manager = ConfigManager::in_memory();
        manager.update(|c| c.flask_capacity_ml = 1000.0).unwrap();
        manager.reset_to_defaults().unwrap();
        assert_eq!(manager.get_config(), &LabConfig::default());
        assert!(manager.config_file().is_none());
    }
}
