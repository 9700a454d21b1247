//! Error types for configuration loading and running the simulation.

use thiserror::Error;

/// Errors loading or validating a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing TOML config
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Error serializing config back to TOML
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Config parsed but describes an impossible simulation
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors surfaced by the simulation driver and its outputs
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
