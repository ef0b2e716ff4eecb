//! Alert registry implementation

use super::types::{AlertCandidate, AlertStats};
use crate::monitoring::types::{Alert, AlertSeverity};
use crate::utils::error::{MonitorError, Result};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use tracing::{debug, error, info, warn};

/// Number of alerts tracked before resolved ones are evicted
pub(super) const MAX_TRACKED_ALERTS: usize = 1_000;

/// Keyed collection of alerts in creation order
#[derive(Debug)]
pub struct AlertRegistry {
    alerts: VecDeque<Alert>,
    capacity: usize,
    stats: AlertStats,
}

impl Default for AlertRegistry {
    fn default() -> Self {
        Self::new(MAX_TRACKED_ALERTS)
    }
}

impl AlertRegistry {
    /// Create a registry tracking at most `capacity` alerts
    pub fn new(capacity: usize) -> Self {
        Self {
            alerts: VecDeque::new(),
            capacity: capacity.max(1),
            stats: AlertStats::default(),
        }
    }

    /// Turn a candidate into a tracked alert
    ///
    /// Emits exactly one log line for the new alert.
    pub fn raise(&mut self, candidate: AlertCandidate, now: DateTime<Utc>) -> Alert {
        let alert = Alert {
            id: uuid::Uuid::new_v4().to_string(),
            message: candidate.message(),
            engine_name: candidate.engine_name,
            severity: candidate.severity,
            kind: candidate.kind,
            timestamp: now,
            resolved: false,
            resolved_at: None,
        };

        match alert.severity {
            AlertSeverity::Critical => error!(
                alert_id = %alert.id,
                engine = %alert.engine_name,
                severity = %alert.severity,
                kind = alert.kind.name(),
                "Alert raised: {}",
                alert.message
            ),
            AlertSeverity::Warning => warn!(
                alert_id = %alert.id,
                engine = %alert.engine_name,
                severity = %alert.severity,
                kind = alert.kind.name(),
                "Alert raised: {}",
                alert.message
            ),
        }

        self.stats.total_alerts += 1;
        *self
            .stats
            .alerts_by_severity
            .entry(alert.severity.to_string())
            .or_insert(0) += 1;
        *self
            .stats
            .alerts_by_kind
            .entry(alert.kind.name().to_string())
            .or_insert(0) += 1;
        *self
            .stats
            .alerts_by_engine
            .entry(alert.engine_name.clone())
            .or_insert(0) += 1;
        self.stats.last_alert = Some(alert.timestamp);

        if self.alerts.len() >= self.capacity {
            self.evict_one();
        }
        self.alerts.push_back(alert.clone());

        alert
    }

    /// Drop the oldest resolved alert
    ///
    /// Unresolved alerts are never evicted; with none resolved the registry
    /// grows past its capacity until alerts are acknowledged.
    fn evict_one(&mut self) {
        match self.alerts.iter().position(|a| a.resolved) {
            Some(index) => {
                if let Some(evicted) = self.alerts.remove(index) {
                    debug!(
                        alert_id = %evicted.id,
                        engine = %evicted.engine_name,
                        "Evicted resolved alert"
                    );
                }
            }
            None if self.alerts.len() == self.capacity => warn!(
                capacity = self.capacity,
                "Every tracked alert is unresolved, registry growing past capacity"
            ),
            None => {}
        }
    }

    /// Mark an alert resolved by explicit operator acknowledgment
    ///
    /// Acknowledging an alert that is already resolved keeps its original
    /// resolution time.
    pub fn acknowledge(&mut self, id: &str, now: DateTime<Utc>) -> Result<Alert> {
        let alert = self
            .alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| MonitorError::alert_not_found(id))?;

        if alert.resolved {
            info!(
                alert_id = %alert.id,
                engine = %alert.engine_name,
                severity = %alert.severity,
                "Alert already resolved: {}",
                alert.message
            );
        } else {
            alert.resolve(now);
            self.stats.resolved_alerts += 1;
            info!(
                alert_id = %alert.id,
                engine = %alert.engine_name,
                severity = %alert.severity,
                "Alert acknowledged: {}",
                alert.message
            );
        }

        Ok(alert.clone())
    }

    /// Resolve every open alert of an engine that recovered
    pub fn resolve_engine(&mut self, engine_name: &str, now: DateTime<Utc>) -> Vec<Alert> {
        let mut resolved = Vec::new();

        for alert in self
            .alerts
            .iter_mut()
            .filter(|a| !a.resolved && a.engine_name == engine_name)
        {
            alert.resolve(now);
            info!(
                alert_id = %alert.id,
                engine = %alert.engine_name,
                severity = %alert.severity,
                "Alert auto-resolved after recovery: {}",
                alert.message
            );
            resolved.push(alert.clone());
        }

        self.stats.resolved_alerts += resolved.len() as u64;
        resolved
    }

    /// Look up an alert by id
    pub fn get(&self, id: &str) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id == id)
    }

    /// All tracked alerts in creation order
    pub fn all(&self) -> Vec<Alert> {
        self.alerts.iter().cloned().collect()
    }

    /// Unresolved alerts
    pub fn active_count(&self) -> usize {
        self.alerts.iter().filter(|a| !a.resolved).count()
    }

    /// Unresolved critical alerts
    pub fn critical_count(&self) -> usize {
        self.alerts.iter().filter(|a| a.is_active_critical()).count()
    }

    /// Whether an engine has an unresolved alert
    pub fn has_active_for(&self, engine_name: &str) -> bool {
        self.alerts
            .iter()
            .any(|a| !a.resolved && a.engine_name == engine_name)
    }

    pub fn stats(&self) -> AlertStats {
        self.stats.clone()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}
