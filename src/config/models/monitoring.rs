//! Monitoring configuration

use super::default_true;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Engine monitoring configuration
///
/// Immutable once handed to the service. Durations are signed milliseconds so
/// that nonsensical values from a config file are accepted rather than
/// rejected at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringConfig {
    /// When false, `start()` is a no-op
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Period of the health-check task
    #[serde(default = "default_health_check_interval_ms")]
    pub health_check_interval_ms: i64,
    /// Period of the performance-metrics task
    #[serde(default = "default_performance_metrics_interval_ms")]
    pub performance_metrics_interval_ms: i64,
    /// Alert thresholds
    #[serde(default)]
    pub alert_thresholds: AlertThresholds,
    /// Snapshots older than this are evicted
    #[serde(default = "default_retention_period_ms")]
    pub retention_period_ms: i64,
    /// When false, thresholds are evaluated but no alerts are stored
    #[serde(default = "default_true")]
    pub enable_alerting: bool,
    /// Hard cap on snapshots kept per engine
    #[serde(default = "default_max_snapshots_per_engine")]
    pub max_snapshots_per_engine: usize,
    /// Resolve an engine's open alerts once it reports healthy again
    #[serde(default)]
    pub auto_resolve_alerts: bool,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            health_check_interval_ms: default_health_check_interval_ms(),
            performance_metrics_interval_ms: default_performance_metrics_interval_ms(),
            alert_thresholds: AlertThresholds::default(),
            retention_period_ms: default_retention_period_ms(),
            enable_alerting: true,
            max_snapshots_per_engine: default_max_snapshots_per_engine(),
            auto_resolve_alerts: false,
        }
    }
}

impl MonitoringConfig {
    /// Tick period of the health-check task
    pub fn health_check_period(&self) -> Duration {
        tick_period(self.health_check_interval_ms)
    }

    /// Tick period of the performance-metrics task
    pub fn performance_metrics_period(&self) -> Duration {
        tick_period(self.performance_metrics_interval_ms)
    }

    /// Retention window as a chrono duration
    ///
    /// Negative values are kept as-is: they put the cutoff in the future, so
    /// every snapshot is evicted on the next maintenance pass.
    pub fn retention_period(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.retention_period_ms.max(-i64::MAX))
    }
}

/// Timers reject a zero period, so anything below 1ms fires every millisecond.
fn tick_period(interval_ms: i64) -> Duration {
    Duration::from_millis(interval_ms.max(1) as u64)
}

/// Threshold values that drive alert creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertThresholds {
    /// Failure percentage above which a warning is raised
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,
    /// Failure percentage above which a critical alert is raised instead
    #[serde(default = "default_critical_failure_rate")]
    pub critical_failure_rate: f64,
    /// Average response time in milliseconds
    #[serde(default = "default_average_response_time_ms")]
    pub average_response_time_ms: f64,
    /// Memory usage in bytes
    #[serde(default = "default_memory_usage_bytes")]
    pub memory_usage_bytes: u64,
    /// Consecutive unhealthy health checks before escalating
    #[serde(default = "default_consecutive_failures")]
    pub consecutive_failures: u32,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            failure_rate: default_failure_rate(),
            critical_failure_rate: default_critical_failure_rate(),
            average_response_time_ms: default_average_response_time_ms(),
            memory_usage_bytes: default_memory_usage_bytes(),
            consecutive_failures: default_consecutive_failures(),
        }
    }
}

fn default_health_check_interval_ms() -> i64 {
    30_000
}

fn default_performance_metrics_interval_ms() -> i64 {
    60_000
}

fn default_retention_period_ms() -> i64 {
    24 * 60 * 60 * 1000
}

fn default_max_snapshots_per_engine() -> usize {
    10_000
}

fn default_failure_rate() -> f64 {
    10.0
}

fn default_critical_failure_rate() -> f64 {
    50.0
}

fn default_average_response_time_ms() -> f64 {
    5_000.0
}

fn default_memory_usage_bytes() -> u64 {
    512 * 1024 * 1024
}

fn default_consecutive_failures() -> u32 {
    3
}
