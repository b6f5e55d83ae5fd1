//! Session configuration
//!
//! Loaded from JSON so demos and deployments can pin a seed, a fixed storm
//! scenario or tweaked model constants without recompiling. Every field is
//! optional in the file; omitted fields keep the dashboard defaults.

use crate::location::DEFAULT_LOCATION;
use crate::storm::{DailyPattern, StormModel};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for a simulation session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Storm model constants and generator ranges
    pub model: StormModel,
    /// Location selected at startup
    pub default_location: String,
    /// Slider position at startup (hours)
    pub initial_hour: f64,
    /// Seed for the scenario generator; `None` draws from entropy
    pub seed: Option<u64>,
    /// Fixed storm scenario that bypasses the generator
    pub pattern: Option<DailyPattern>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            model: StormModel::STANDARD,
            default_location: DEFAULT_LOCATION.to_string(),
            initial_hour: 12.0,
            seed: None,
            pattern: None,
        }
    }
}

impl SimulationConfig {
    /// Load a config file
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed or fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents =
            fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed(e.to_string()))?;
        Self::from_json(&contents)
    }

    /// Parse and validate a JSON config
    ///
    /// # Errors
    /// Returns error if the text is not valid config JSON or fails validation
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)
            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the config as pretty-printed JSON
    ///
    /// # Errors
    /// Returns error if the config cannot be serialized or the file cannot be written
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeFailed(e.to_string()))?;

        fs::write(path, contents).map_err(|e| ConfigError::SaveFailed(e.to_string()))?;

        Ok(())
    }

    /// Check model constants and startup values
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` describing the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.model.validate()?;

        if !(0.0..24.0).contains(&self.initial_hour) {
            return Err(ConfigError::Invalid(format!(
                "initial_hour must be within [0, 24), got {}",
                self.initial_hour
            )));
        }
        if self.default_location.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "default_location must not be empty".to_string(),
            ));
        }
        if let Some(pattern) = &self.pattern {
            if !pattern.storm_peak_hour().is_finite() {
                return Err(ConfigError::Invalid(
                    "pattern.storm_peak_hour must be a finite hour".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Errors that can occur loading or saving configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read the file
    LoadFailed(String),
    /// File contents are not valid config JSON
    ParseFailed(String),
    /// Failed to serialize the config
    SerializeFailed(String),
    /// Failed to write the file
    SaveFailed(String),
    /// Values parse but cannot drive a session
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadFailed(msg) => write!(f, "Failed to load config: {msg}"),
            ConfigError::ParseFailed(msg) => write!(f, "Failed to parse config: {msg}"),
            ConfigError::SerializeFailed(msg) => write!(f, "Failed to serialize config: {msg}"),
            ConfigError::SaveFailed(msg) => write!(f, "Failed to save config: {msg}"),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
