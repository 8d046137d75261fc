//! # Settings Module
//!
//! ## Purpose
//! User-friendly interface for the lab configuration. Wraps the ConfigManager and offers
//! display names and plain string values, so that a menu or a form can edit the config
//! without knowing its field types.
//!
//! ## Key Features
//! - **Display Name Mapping**: Maps user-friendly names to LabConfig fields
//! - **Parsing**: Values come in as strings and are parsed to the field type
//! - **Configuration Sync**: Every accepted change goes through ConfigManager::update,
//!   so it is validated and saved
//! - **Error Handling**: String-based error messages suitable for display
//!
//! ## Usage Pattern
//! ```rust, ignore
//! use ChemFlask::settings::Settings;
//!
//! let mut settings = Settings::new();
//! settings.set_value("Max temperature", "800")?;
//! settings.reset_to_defaults()?;
//! ```
//!
//! ## Setting Mappings
//! | Display Name | Config Field | Default |
//! |--------------|--------------|---------|
//! | "Default temperature" | default_temperature_c | 25 |
//! | "Min temperature" | min_temperature_c | -20 |
//! | "Max temperature" | max_temperature_c | 500 |
//! | "Max addition" | max_addition_ml | 300 |
//! | "Flask capacity" | flask_capacity_ml | 300 |
//! | "Log level" | log_level | info |
//! | "Metal-acid min reactivity" | thresholds.metal_acid_min_reactivity | 4 |
//! | "Oxidation min gas reactivity" | thresholds.oxidation_min_gas_reactivity | 7 |
//! | "Oxidation min temperature" | thresholds.oxidation_min_temperature_c | 100 |
//! | "Decomposition temperature" | thresholds.decomposition_temperature_c | 200 |
//! | "Decomposition min reactivity" | thresholds.decomposition_min_reactivity | 0 |

use crate::config_manager::{ConfigManager, LabConfig, with_config, with_config_mut};
use std::collections::HashMap;
use std::str::FromStr;

/// display names in menu order
pub const SETTING_NAMES: [&str; 11] = [
    "Default temperature",
    "Min temperature",
    "Max temperature",
    "Max addition",
    "Flask capacity",
    "Log level",
    "Metal-acid min reactivity",
    "Oxidation min gas reactivity",
    "Oxidation min temperature",
    "Decomposition temperature",
    "Decomposition min reactivity",
];

/// User-friendly settings interface over the lab configuration.
///
/// Keeps a local cache of the current values as strings, keyed by display name.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// "Max temperature" -> "500", etc.
    pub values: HashMap<String, String>,
}

fn config_values(config: &LabConfig) -> HashMap<String, String> {
    let t = &config.thresholds;
    let values = [
        config.default_temperature_c.to_string(),
        config.min_temperature_c.to_string(),
        config.max_temperature_c.to_string(),
        config.max_addition_ml.to_string(),
        config.flask_capacity_ml.to_string(),
        config.log_level.clone(),
        t.metal_acid_min_reactivity.to_string(),
        t.oxidation_min_gas_reactivity.to_string(),
        t.oxidation_min_temperature_c.to_string(),
        t.decomposition_temperature_c.to_string(),
        t.decomposition_min_reactivity.to_string(),
    ];
    SETTING_NAMES
        .iter()
        .map(|name| name.to_string())
        .zip(values)
        .collect()
}

fn parse<T: FromStr>(name: &str, value: &str) -> Result<T, String> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| format!("Invalid value '{}' for {}", value.trim(), name))
}

/// writes one parsed value into the config
fn apply_setting(config: &mut LabConfig, name: &str, value: &str) -> Result<(), String> {
    let t = &mut config.thresholds;
    match name {
        "Default temperature" => config.default_temperature_c = parse(name, value)?,
        "Min temperature" => config.min_temperature_c = parse(name, value)?,
        "Max temperature" => config.max_temperature_c = parse(name, value)?,
        "Max addition" => config.max_addition_ml = parse(name, value)?,
        "Flask capacity" => config.flask_capacity_ml = parse(name, value)?,
        "Log level" => config.log_level = value.trim().to_lowercase(),
        "Metal-acid min reactivity" => t.metal_acid_min_reactivity = parse(name, value)?,
        "Oxidation min gas reactivity" => t.oxidation_min_gas_reactivity = parse(name, value)?,
        "Oxidation min temperature" => t.oxidation_min_temperature_c = parse(name, value)?,
        "Decomposition temperature" => t.decomposition_temperature_c = parse(name, value)?,
        "Decomposition min reactivity" => t.decomposition_min_reactivity = parse(name, value)?,
        _ => return Err(format!("Unknown setting: {}", name)),
    }
    Ok(())
}

impl Settings {
    /// Loads the current values from the global ConfigManager.
    pub fn new() -> Self {
        let values = with_config(|manager| config_values(manager.get_config()));
        Self { values }
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.values.get(name)
    }

    /// Parses `value`, applies it to the global config and syncs the local cache.
    ///
    /// # Returns
    /// * `Ok(())` - If the value was accepted and saved
    /// * `Err(String)` - If the name is unknown, the value does not parse, or the
    ///   resulting config is invalid (e.g. default temperature outside the range)
    pub fn set_value(&mut self, name: &str, value: &str) -> Result<(), String> {
        with_config_mut(|manager| self.set_value_in(manager, name, value))
    }

    fn set_value_in(
        &mut self,
        manager: &mut ConfigManager,
        name: &str,
        value: &str,
    ) -> Result<(), String> {
        let mut candidate = manager.get_config().clone();
        apply_setting(&mut candidate, name, value)?;
        manager
            .update(|config| *config = candidate)
            .map_err(|e| e.to_string())?;
        self.values = config_values(manager.get_config());
        Ok(())
    }

    /// Display names in menu order.
    pub fn get_available_settings(&self) -> Vec<&'static str> {
        SETTING_NAMES.to_vec()
    }

    /// Restores the default configuration in the global manager and the local cache.
    pub fn reset_to_defaults(&mut self) -> Result<(), String> {
        with_config_mut(|manager| self.reset_in(manager))
    }

    fn reset_in(&mut self, manager: &mut ConfigManager) -> Result<(), String> {
        manager.reset_to_defaults().map_err(|e| e.to_string())?;
        self.values = config_values(manager.get_config());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_manager() -> (ConfigManager, Settings) {
        let manager = ConfigManager::in_memory();
        let settings = Settings {
            values: config_values(manager.get_config()),
        };
        (manager, settings)
    }

    #[test]
    fn test_settings_new() {
        let settings = Settings::new();
        assert_eq!(settings.values.len(), SETTING_NAMES.len());
        for name in settings.get_available_settings() {
            assert!(settings.get_value(name).is_some(), "{} missing", name);
        }
    }

    #[test]
    fn test_set_value() {
        let (mut manager, mut settings) = create_test_manager();
        settings
            .set_value_in(&mut manager, "Max temperature", " 800 ")
            .unwrap();
        settings
            .set_value_in(&mut manager, "Decomposition min reactivity", "5")
            .unwrap();
        settings
            .set_value_in(&mut manager, "Log level", "DEBUG")
            .unwrap();
        let config = manager.get_config();
        assert_eq!(config.max_temperature_c, 800);
        assert_eq!(config.thresholds.decomposition_min_reactivity, 5);
        assert_eq!(config.log_level, "debug");
        assert_eq!(settings.get_value("Max temperature").unwrap(), "800");
    }

    #[test]
    fn test_rejected_values() {
        let (mut manager, mut settings) = create_test_manager();
        let err = settings
            .set_value_in(&mut manager, "Max addition", "lots")
            .unwrap_err();
        assert!(err.contains("Invalid value"));
        assert!(
            settings
                .set_value_in(&mut manager, "Colour", "red")
                .unwrap_err()
                .contains("Unknown setting")
        );
        // range check from the config validation
        assert!(
            settings
                .set_value_in(&mut manager, "Default temperature", "900")
                .is_err()
        );
        assert!(
            settings
                .set_value_in(&mut manager, "Metal-acid min reactivity", "-1")
                .is_err()
        );
        assert_eq!(manager.get_config(), &LabConfig::default());
        assert_eq!(settings.get_value("Default temperature").unwrap(), "25");
    }

    #[test]
    fn test_set_value_is_saved() {
        let mut config_file = NamedTempFile::new().unwrap();
        config_file.write_all(b"{}").unwrap();
        let mut manager = ConfigManager::with_config_file(config_file.path());
        let mut settings = Settings {
            values: config_values(manager.get_config()),
        };
        settings
            .set_value_in(&mut manager, "Flask capacity", "500")
            .unwrap();
        let reloaded = ConfigManager::with_config_file(config_file.path());
        assert_eq!(reloaded.get_config().flask_capacity_ml, 500.0);
    }

    #[test]
    fn test_reset_to_defaults() {
        let (mut manager, mut settings) = create_test_manager();
        settings
            .set_value_in(&mut manager, "Oxidation min temperature", "50")
            .unwrap();
        settings.reset_in(&mut manager).unwrap();
        assert_eq!(manager.get_config(), &LabConfig::default());
        assert_eq!(
            settings.get_value("Oxidation min temperature").unwrap(),
            "100"
        );
    }
}
