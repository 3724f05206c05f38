//! Farm configuration.
//!
//! Barn capacity is external configuration: the store stamps it onto every
//! barn it creates, and the distributor only ever learns it by reading it
//! back off a created barn.

use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the default barn capacity.
pub const BARN_CAPACITY_ENV: &str = "FARM_BARN_CAPACITY";

/// Default number of animals a barn can hold.
pub const DEFAULT_BARN_CAPACITY: u32 = 20;

/// Errors raised while building or validating configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Capacity must allow at least one animal per barn.
    #[error("barn capacity must be at least 1, got {0}")]
    InvalidCapacity(u32),

    /// The environment variable held something other than an integer.
    #[error("invalid {BARN_CAPACITY_ENV} value {value:?}: {reason}")]
    InvalidEnv { value: String, reason: String },
}

/// Configuration for a farm store.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FarmConfig {
    /// Animals per barn, uniform across every color.
    pub barn_capacity: u32,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            barn_capacity: DEFAULT_BARN_CAPACITY,
        }
    }
}

impl FarmConfig {
    /// Create a configuration with the default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the barn capacity.
    pub fn with_barn_capacity(mut self, capacity: u32) -> Self {
        self.barn_capacity = capacity;
        self
    }

    /// Build configuration from the environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(BARN_CAPACITY_ENV) {
            let capacity = raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnv {
                value: raw,
                reason: e.to_string(),
            })?;
            config.barn_capacity = capacity;
        }
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the farm cannot operate with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.barn_capacity == 0 {
            return Err(ConfigError::InvalidCapacity(self.barn_capacity));
        }
        Ok(())
    }
}
