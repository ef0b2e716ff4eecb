//! Error types for the monitor

use thiserror::Error;

/// Result type alias for the monitor
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Main error type for the monitor
#[derive(Error, Debug)]
pub enum MonitorError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Engine manager call failed
    #[error("Engine manager error: {0}")]
    EngineManager(String),

    /// Alert id is not tracked by the registry
    #[error("Alert not found: {0}")]
    AlertNotFound(String),

    /// Metrics export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Unknown export format
    #[error("Invalid export format: {0}")]
    InvalidFormat(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
