//! Engine manager boundary
//!
//! The monitor never talks to rendering engines directly. Everything it knows
//! about the pool comes from an [`EngineManager`], which selects engines and
//! fails over between them elsewhere.

mod file;
mod types;

pub use file::FileEngineManager;
pub use types::{
    EngineCounters, EngineCountersReport, EnginePerformance, EngineStatus, EngineStatusReport,
};

use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only view of the engine pool consumed by the monitoring service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EngineManager: Send + Sync {
    /// Current status of every engine, keyed by engine name
    async fn get_engine_status(&self) -> Result<EngineStatusReport>;

    /// Names of the engines currently available for rendering
    async fn get_available_engines(&self) -> Result<Vec<String>>;

    /// Ask the manager to recheck its engines
    async fn force_health_check(&self) -> Result<()>;

    /// Per-engine task counters, when the manager tracks them
    async fn get_engine_metrics(&self) -> Result<Option<EngineCountersReport>> {
        Ok(None)
    }
}
