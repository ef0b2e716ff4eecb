//! Configuration management for the monitor
//!
//! This module handles loading and validation of the monitor configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{MonitorError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// Root of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Engine monitoring configuration
    #[serde(default)]
    pub monitoring: MonitoringConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let config = Self::read_file(path).await?;
        config.log_warnings();

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Read and parse a YAML file without logging
    ///
    /// For callers that load configuration before a subscriber exists. Call
    /// [`AppConfig::log_warnings`] once logging is up.
    pub async fn read_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| MonitorError::Config(format!("Failed to read config file: {}", e)))?;

        Self::parse_yaml(&content)
    }

    /// Parse configuration from YAML text
    ///
    /// Suspicious values are logged, never rejected.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config = Self::parse_yaml(content)?;
        config.log_warnings();
        Ok(config)
    }

    /// Parse configuration from YAML text without logging
    pub fn parse_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| MonitorError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Log one warning per suspicious value, returning how many were logged
    pub fn log_warnings(&self) -> usize {
        let warnings = self.validate();
        for warning in &warnings {
            warn!("Configuration warning: {}", warning);
        }
        warnings.len()
    }

    /// Collect warnings for the whole configuration
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = self.monitoring.validate();
        warnings.extend(self.logging.validate());
        warnings
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| MonitorError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
