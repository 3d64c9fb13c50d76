//! Error types
//!
//! Defines the error type shared by configuration loading, validation
//! and front-end rendering.

use std::fmt;

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// Reading or deserializing a configuration source failed
    Load(config::ConfigError),
    /// A configuration value failed validation
    Invalid(String),
    /// Serializing the front-end representation failed
    Render(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load(e) => write!(f, "Failed to load configuration: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
            ConfigError::Render(e) => write!(f, "Failed to render configuration: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(error: config::ConfigError) -> Self {
        ConfigError::Load(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Render(error)
    }
}
