//! Monitoring configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for MonitoringConfig {
    fn validate(&self) -> Vec<String> {
        debug!("Validating monitoring configuration");

        let mut warnings = Vec::new();

        if self.health_check_interval_ms <= 0 {
            warnings.push(format!(
                "health_check_interval_ms is {}; health checks will fire every millisecond",
                self.health_check_interval_ms
            ));
        }
        if self.performance_metrics_interval_ms <= 0 {
            warnings.push(format!(
                "performance_metrics_interval_ms is {}; metrics collection will fire every millisecond",
                self.performance_metrics_interval_ms
            ));
        }
        if self.retention_period_ms <= 0 {
            warnings.push(format!(
                "retention_period_ms is {}; every snapshot is evicted on the next cleanup",
                self.retention_period_ms
            ));
        }
        if self.max_snapshots_per_engine == 0 {
            warnings.push("max_snapshots_per_engine is 0; no history will be kept".to_string());
        }

        warnings.extend(self.alert_thresholds.validate());
        warnings
    }
}

impl Validate for AlertThresholds {
    fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !(0.0..=100.0).contains(&self.failure_rate) {
            warnings.push(format!(
                "failure_rate {} is outside 0..=100 percent",
                self.failure_rate
            ));
        }
        if self.critical_failure_rate < self.failure_rate {
            warnings.push(format!(
                "critical_failure_rate {} is below failure_rate {}; failure-rate alerts will always be critical",
                self.critical_failure_rate, self.failure_rate
            ));
        }
        if self.average_response_time_ms < 0.0 {
            warnings.push(format!(
                "average_response_time_ms {} is negative",
                self.average_response_time_ms
            ));
        }
        if self.consecutive_failures == 0 {
            warnings.push(
                "consecutive_failures is 0; the consecutive-failures rule is disabled".to_string(),
            );
        }

        warnings
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Vec<String> {
        if self.level.trim().is_empty() {
            vec!["logging level is empty; falling back to info".to_string()]
        } else {
            Vec::new()
        }
    }
}
