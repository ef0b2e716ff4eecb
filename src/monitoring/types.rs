//! Type definitions for engine metrics and alerts

use crate::engine::{EngineCounters, EngineStatus};
use crate::utils::error::MonitorError;
use crate::utils::format_bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point-in-time record of an engine's health and performance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub engine_name: String,
    pub timestamp: DateTime<Utc>,
    pub is_healthy: bool,
    pub resource_usage: ResourceUsage,
    pub performance: PerformanceStats,
    pub errors: Vec<String>,
}

/// Resource usage at snapshot time
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUsage {
    /// Bytes
    pub memory_usage: u64,
    pub active_tasks: u64,
}

/// Request counters at snapshot time
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceStats {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    /// Milliseconds
    pub average_response_time: f64,
}

impl MetricsSnapshot {
    /// Build a snapshot from the manager's report for one engine
    ///
    /// Counters win over the rolling performance figures for the average
    /// response time, since they cover every task rather than a window.
    pub fn from_status(
        engine_name: &str,
        status: &EngineStatus,
        counters: Option<&EngineCounters>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let memory_usage = status.performance.map(|p| p.memory_usage).unwrap_or(0);

        let performance = match counters {
            Some(counters) => PerformanceStats {
                total_requests: counters.total_tasks,
                successful_requests: counters.successful_tasks,
                failed_requests: counters.failed_tasks,
                average_response_time: counters.average_time,
            },
            None => PerformanceStats {
                average_response_time: status
                    .performance
                    .map(|p| p.average_generation_time)
                    .unwrap_or(0.0),
                ..Default::default()
            },
        };

        Self {
            engine_name: engine_name.to_string(),
            timestamp,
            is_healthy: status.is_healthy,
            resource_usage: ResourceUsage {
                memory_usage,
                active_tasks: counters.map(EngineCounters::in_flight).unwrap_or(0),
            },
            performance,
            errors: status.errors.clone(),
        }
    }
}

/// Alert severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Critical,
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertSeverity::Warning => write!(f, "warning"),
            AlertSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// What condition raised an alert, with the values that crossed the line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AlertKind {
    Health {
        errors: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    FailureRate {
        failure_percent: f64,
        threshold: f64,
    },
    #[serde(rename_all = "camelCase")]
    Latency {
        average_ms: f64,
        threshold_ms: f64,
    },
    #[serde(rename_all = "camelCase")]
    Memory {
        bytes: u64,
        threshold_bytes: u64,
    },
    ConsecutiveFailures {
        count: u32,
        threshold: u32,
    },
}

impl AlertKind {
    /// Stable short name, used for statistics and log fields
    pub fn name(&self) -> &'static str {
        match self {
            AlertKind::Health { .. } => "health",
            AlertKind::FailureRate { .. } => "failure_rate",
            AlertKind::Latency { .. } => "latency",
            AlertKind::Memory { .. } => "memory",
            AlertKind::ConsecutiveFailures { .. } => "consecutive_failures",
        }
    }

    /// Operator-facing description of the condition
    pub fn message(&self, engine_name: &str) -> String {
        match self {
            AlertKind::Health { errors } if errors.is_empty() => {
                format!("Engine {} reported an unhealthy status", engine_name)
            }
            AlertKind::Health { errors } => {
                format!("Engine {} is unhealthy: {}", engine_name, errors.join("; "))
            }
            AlertKind::FailureRate {
                failure_percent,
                threshold,
            } => format!(
                "Engine {} failure rate {:.1}% exceeds {:.1}%",
                engine_name, failure_percent, threshold
            ),
            AlertKind::Latency {
                average_ms,
                threshold_ms,
            } => format!(
                "Engine {} average response time {:.0}ms exceeds {:.0}ms",
                engine_name, average_ms, threshold_ms
            ),
            AlertKind::Memory {
                bytes,
                threshold_bytes,
            } => format!(
                "Engine {} memory usage {} exceeds {}",
                engine_name,
                format_bytes(*bytes),
                format_bytes(*threshold_bytes)
            ),
            AlertKind::ConsecutiveFailures { count, threshold } => format!(
                "Engine {} failed {} consecutive health checks (threshold {})",
                engine_name, count, threshold
            ),
        }
    }
}

/// A raised threshold breach with its resolution lifecycle
///
/// `resolved` and `resolved_at` always change together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub engine_name: String,
    pub severity: AlertSeverity,
    pub kind: AlertKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub resolved: bool,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Alert {
    /// Unresolved and critical
    pub fn is_active_critical(&self) -> bool {
        !self.resolved && self.severity == AlertSeverity::Critical
    }

    pub(crate) fn resolve(&mut self, at: DateTime<Utc>) {
        self.resolved = true;
        self.resolved_at = Some(at);
    }
}

/// Per-engine entry of the health summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineHealth {
    pub healthy: bool,
    pub last_check: DateTime<Utc>,
}

/// Metrics export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(MonitorError::invalid_format(other)),
        }
    }
}
