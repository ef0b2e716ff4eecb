//! Status types reported by the engine manager

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Status of every engine, ordered by engine name
pub type EngineStatusReport = BTreeMap<String, EngineStatus>;

/// Task counters of every engine, ordered by engine name
pub type EngineCountersReport = BTreeMap<String, EngineCounters>;

/// Status of one engine as last probed by the manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineStatus {
    pub is_healthy: bool,
    /// Free-form status label ("ready", "degraded", ...)
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub errors: Vec<String>,
    pub last_check: DateTime<Utc>,
    #[serde(default)]
    pub performance: Option<EnginePerformance>,
}

impl EngineStatus {
    /// A healthy engine with no performance data
    pub fn healthy(last_check: DateTime<Utc>) -> Self {
        Self {
            is_healthy: true,
            status: "ready".to_string(),
            errors: Vec::new(),
            last_check,
            performance: None,
        }
    }

    /// An unhealthy engine reporting the given errors
    pub fn unhealthy(last_check: DateTime<Utc>, errors: Vec<String>) -> Self {
        Self {
            is_healthy: false,
            status: "unhealthy".to_string(),
            errors,
            last_check,
            performance: None,
        }
    }

    /// Attach performance data
    pub fn with_performance(mut self, performance: EnginePerformance) -> Self {
        self.performance = Some(performance);
        self
    }

    /// Whether the health rule should fire for this status
    pub fn is_failing(&self) -> bool {
        !self.is_healthy || !self.errors.is_empty()
    }
}

/// Rolling performance figures for one engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnginePerformance {
    /// Fraction of successful renders, 0..=1
    pub success_rate: f64,
    /// Mean render time in milliseconds
    pub average_generation_time: f64,
    /// Resident memory in bytes
    #[serde(default)]
    pub memory_usage: u64,
}

/// Lifetime task counters for one engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineCounters {
    pub total_tasks: u64,
    pub successful_tasks: u64,
    pub failed_tasks: u64,
    /// Mean task time in milliseconds
    pub average_time: f64,
}

impl EngineCounters {
    /// Tasks started but not yet finished
    pub fn in_flight(&self) -> u64 {
        self.total_tasks
            .saturating_sub(self.successful_tasks)
            .saturating_sub(self.failed_tasks)
    }

    /// Failure percentage over finished tasks, `None` before the first task
    pub fn failure_percent(&self) -> Option<f64> {
        let finished = self.successful_tasks.saturating_add(self.failed_tasks);
        if finished == 0 {
            None
        } else {
            Some(self.failed_tasks as f64 / finished as f64 * 100.0)
        }
    }
}
