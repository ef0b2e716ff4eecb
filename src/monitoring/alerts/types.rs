//! Alert types and data structures

use crate::monitoring::types::{AlertKind, AlertSeverity};
use std::collections::HashMap;

/// An alert the evaluator wants raised, before it gets an id and timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct AlertCandidate {
    pub engine_name: String,
    pub severity: AlertSeverity,
    pub kind: AlertKind,
}

impl AlertCandidate {
    pub fn new(engine_name: &str, severity: AlertSeverity, kind: AlertKind) -> Self {
        Self {
            engine_name: engine_name.to_string(),
            severity,
            kind,
        }
    }

    pub fn warning(engine_name: &str, kind: AlertKind) -> Self {
        Self::new(engine_name, AlertSeverity::Warning, kind)
    }

    pub fn critical(engine_name: &str, kind: AlertKind) -> Self {
        Self::new(engine_name, AlertSeverity::Critical, kind)
    }

    /// Operator-facing message for this candidate
    pub fn message(&self) -> String {
        self.kind.message(&self.engine_name)
    }
}

/// Alert statistics
///
/// Totals are cumulative and survive eviction from the registry.
#[derive(Debug, Default, Clone, serde::Serialize)]
pub struct AlertStats {
    /// Total alerts raised
    pub total_alerts: u64,
    /// Alerts by severity
    pub alerts_by_severity: HashMap<String, u64>,
    /// Alerts by kind
    pub alerts_by_kind: HashMap<String, u64>,
    /// Alerts by engine
    pub alerts_by_engine: HashMap<String, u64>,
    /// Alerts resolved, by acknowledgment or automatically
    pub resolved_alerts: u64,
    /// Last alert timestamp
    pub last_alert: Option<chrono::DateTime<chrono::Utc>>,
}
