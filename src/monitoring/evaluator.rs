//! Threshold evaluation
//!
//! Each rule is a pure check of one reported figure against its threshold.
//! The only state is the per-engine run of unhealthy health checks used by
//! the consecutive-failures rule.

use super::alerts::AlertCandidate;
use super::types::AlertKind;
use crate::config::AlertThresholds;
use crate::engine::{EngineCounters, EngineStatus};
use std::collections::HashMap;
use tracing::debug;

/// Decides which alerts a reported engine status warrants
#[derive(Debug)]
pub struct ThresholdEvaluator {
    thresholds: AlertThresholds,
    failure_streaks: HashMap<String, u32>,
}

impl ThresholdEvaluator {
    pub fn new(thresholds: AlertThresholds) -> Self {
        Self {
            thresholds,
            failure_streaks: HashMap::new(),
        }
    }

    /// Health-check rules: health and consecutive failures
    ///
    /// Updates the engine's failure streak. The consecutive-failures alert
    /// fires once per streak, on the check that reaches the threshold.
    pub fn evaluate_health(&mut self, engine_name: &str, status: &EngineStatus) -> Vec<AlertCandidate> {
        let mut candidates = Vec::new();

        if !status.is_failing() {
            if self.failure_streaks.remove(engine_name).is_some() {
                debug!(engine = %engine_name, "Engine recovered, failure streak reset");
            }
            return candidates;
        }

        candidates.push(check_health(engine_name, status));

        let streak = self
            .failure_streaks
            .entry(engine_name.to_string())
            .or_insert(0);
        *streak = streak.saturating_add(1);

        if let Some(candidate) =
            check_consecutive_failures(engine_name, *streak, self.thresholds.consecutive_failures)
        {
            candidates.push(candidate);
        }

        candidates
    }

    /// Performance rules: failure rate, latency and memory
    pub fn evaluate_performance(
        &self,
        engine_name: &str,
        status: &EngineStatus,
        counters: Option<&EngineCounters>,
    ) -> Vec<AlertCandidate> {
        let thresholds = &self.thresholds;

        let failure_percent = status
            .performance
            .map(|p| ((1.0 - p.success_rate) * 100.0).clamp(0.0, 100.0))
            .or_else(|| counters.and_then(EngineCounters::failure_percent));

        let average_ms = status
            .performance
            .map(|p| p.average_generation_time)
            .or_else(|| {
                counters
                    .filter(|c| c.total_tasks > 0)
                    .map(|c| c.average_time)
            });

        let memory_bytes = status.performance.map(|p| p.memory_usage);

        [
            failure_percent.and_then(|percent| check_failure_rate(engine_name, percent, thresholds)),
            average_ms.and_then(|ms| check_latency(engine_name, ms, thresholds)),
            memory_bytes.and_then(|bytes| check_memory(engine_name, bytes, thresholds)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Current run of unhealthy health checks for an engine
    pub fn consecutive_failures(&self, engine_name: &str) -> u32 {
        self.failure_streaks.get(engine_name).copied().unwrap_or(0)
    }
}

/// Warning summarizing what the engine reported
pub fn check_health(engine_name: &str, status: &EngineStatus) -> AlertCandidate {
    AlertCandidate::warning(
        engine_name,
        AlertKind::Health {
            errors: status.errors.clone(),
        },
    )
}

/// Critical once the streak reaches the threshold; a zero threshold disables the rule
pub fn check_consecutive_failures(
    engine_name: &str,
    streak: u32,
    threshold: u32,
) -> Option<AlertCandidate> {
    (threshold > 0 && streak == threshold).then(|| {
        AlertCandidate::critical(
            engine_name,
            AlertKind::ConsecutiveFailures {
                count: streak,
                threshold,
            },
        )
    })
}

/// Warning above `failure_rate`, critical above `critical_failure_rate`
pub fn check_failure_rate(
    engine_name: &str,
    failure_percent: f64,
    thresholds: &AlertThresholds,
) -> Option<AlertCandidate> {
    if failure_percent > thresholds.critical_failure_rate {
        Some(AlertCandidate::critical(
            engine_name,
            AlertKind::FailureRate {
                failure_percent,
                threshold: thresholds.critical_failure_rate,
            },
        ))
    } else if failure_percent > thresholds.failure_rate {
        Some(AlertCandidate::warning(
            engine_name,
            AlertKind::FailureRate {
                failure_percent,
                threshold: thresholds.failure_rate,
            },
        ))
    } else {
        None
    }
}

/// Warning when the average response time exceeds the threshold
pub fn check_latency(
    engine_name: &str,
    average_ms: f64,
    thresholds: &AlertThresholds,
) -> Option<AlertCandidate> {
    (average_ms > thresholds.average_response_time_ms).then(|| {
        AlertCandidate::warning(
            engine_name,
            AlertKind::Latency {
                average_ms,
                threshold_ms: thresholds.average_response_time_ms,
            },
        )
    })
}

/// Warning when memory usage exceeds the threshold
pub fn check_memory(
    engine_name: &str,
    bytes: u64,
    thresholds: &AlertThresholds,
) -> Option<AlertCandidate> {
    (bytes > thresholds.memory_usage_bytes).then(|| {
        AlertCandidate::warning(
            engine_name,
            AlertKind::Memory {
                bytes,
                threshold_bytes: thresholds.memory_usage_bytes,
            },
        )
    })
}
