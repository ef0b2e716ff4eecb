//! Test fixtures and data factories
//!
//! Provides factory methods for creating engine statuses with sensible
//! defaults. All factories create real objects, not mocks.

use chrono::Utc;
use render_monitor::{EnginePerformance, EngineStatus, MonitoringConfig};

pub const MIB: u64 = 1024 * 1024;

/// Factory for engine statuses
pub struct StatusFactory;

impl StatusFactory {
    /// Healthy engine with nominal performance
    pub fn healthy() -> EngineStatus {
        Self::with_performance(0.95, 1_200.0, 128 * MIB)
    }

    /// Healthy engine whose renders take `average_ms`
    pub fn slow(average_ms: f64) -> EngineStatus {
        Self::with_performance(0.95, average_ms, 128 * MIB)
    }

    /// Healthy engine with the given success rate
    pub fn flaky(success_rate: f64) -> EngineStatus {
        Self::with_performance(success_rate, 1_200.0, 128 * MIB)
    }

    /// Healthy engine using `bytes` of memory
    pub fn memory_hungry(bytes: u64) -> EngineStatus {
        Self::with_performance(0.95, 1_200.0, bytes)
    }

    /// Unhealthy engine reporting one error
    pub fn unhealthy(error: &str) -> EngineStatus {
        EngineStatus::unhealthy(Utc::now(), vec![error.to_string()])
    }

    pub fn with_performance(
        success_rate: f64,
        average_generation_time: f64,
        memory_usage: u64,
    ) -> EngineStatus {
        EngineStatus::healthy(Utc::now()).with_performance(EnginePerformance {
            success_rate,
            average_generation_time,
            memory_usage,
        })
    }
}

/// Monitoring config with the given tick periods
pub fn test_config(health_ms: i64, performance_ms: i64) -> MonitoringConfig {
    MonitoringConfig {
        health_check_interval_ms: health_ms,
        performance_metrics_interval_ms: performance_ms,
        ..Default::default()
    }
}
