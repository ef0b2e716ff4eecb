//! Engine manager backed by status files
//!
//! Some engine pools publish their state to disk instead of exposing an API.
//! This adapter re-reads those files on every call so the monitor always sees
//! the latest published state.

use super::types::{EngineCountersReport, EngineStatusReport};
use super::EngineManager;
use crate::utils::error::{MonitorError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads engine status (and optionally counters) from JSON files
#[derive(Debug, Clone)]
pub struct FileEngineManager {
    status_path: PathBuf,
    counters_path: Option<PathBuf>,
}

impl FileEngineManager {
    /// Create a manager reading the given status file
    pub fn new<P: Into<PathBuf>>(status_path: P) -> Self {
        Self {
            status_path: status_path.into(),
            counters_path: None,
        }
    }

    /// Also read per-engine counters from the given file
    pub fn with_counters<P: Into<PathBuf>>(mut self, counters_path: P) -> Self {
        self.counters_path = Some(counters_path.into());
        self
    }

    async fn read(path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path).await.map_err(|e| {
            MonitorError::engine_manager(format!("Failed to read {}: {}", path.display(), e))
        })
    }
}

#[async_trait]
impl EngineManager for FileEngineManager {
    async fn get_engine_status(&self) -> Result<EngineStatusReport> {
        let content = Self::read(&self.status_path).await?;
        let report: EngineStatusReport = serde_json::from_str(&content)?;
        debug!("Read status for {} engines", report.len());
        Ok(report)
    }

    async fn get_available_engines(&self) -> Result<Vec<String>> {
        let report = self.get_engine_status().await?;
        Ok(report
            .into_iter()
            .filter(|(_, status)| status.is_healthy)
            .map(|(name, _)| name)
            .collect())
    }

    async fn force_health_check(&self) -> Result<()> {
        // The publishing side decides when to recheck
        Ok(())
    }

    async fn get_engine_metrics(&self) -> Result<Option<EngineCountersReport>> {
        match &self.counters_path {
            Some(path) => {
                let content = Self::read(path).await?;
                Ok(Some(serde_json::from_str(&content)?))
            }
            None => Ok(None),
        }
    }
}
