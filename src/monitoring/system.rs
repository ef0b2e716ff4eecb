//! Core MonitoringService implementation

use crate::config::MonitoringConfig;
use crate::engine::EngineManager;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use super::alerts::{AlertCandidate, AlertRegistry, AlertStats};
use super::background::Scheduler;
use super::evaluator::ThresholdEvaluator;
use super::metrics::{export_snapshots, MetricsStore};
use super::types::*;

/// State shared between the service handles and the periodic tasks
///
/// The tasks hold this and never the scheduler, so dropping the last service
/// handle drops the shutdown sender and ends them.
pub(super) struct MonitorState {
    /// Monitoring configuration
    pub(super) config: MonitoringConfig,
    /// Source of engine status
    pub(super) engine_manager: Arc<dyn EngineManager>,
    /// Snapshot history
    pub(super) store: RwLock<MetricsStore>,
    /// Raised alerts
    pub(super) alerts: RwLock<AlertRegistry>,
    /// Threshold rules and failure streaks
    pub(super) evaluator: Mutex<ThresholdEvaluator>,
}

/// Engine health and performance monitoring service
///
/// Cloning is cheap and every clone shares the same state. The periodic tasks
/// stop on `stop()` or once every clone has been dropped.
#[derive(Clone)]
pub struct MonitoringService {
    state: Arc<MonitorState>,
    scheduler: Arc<Mutex<Scheduler>>,
}

impl MonitoringService {
    /// Create a new monitoring service
    pub fn new(config: MonitoringConfig, engine_manager: Arc<dyn EngineManager>) -> Self {
        let store = MetricsStore::new(config.max_snapshots_per_engine);
        let evaluator = ThresholdEvaluator::new(config.alert_thresholds.clone());

        Self {
            state: Arc::new(MonitorState {
                config,
                engine_manager,
                store: RwLock::new(store),
                alerts: RwLock::new(AlertRegistry::default()),
                evaluator: Mutex::new(evaluator),
            }),
            scheduler: Arc::new(Mutex::new(Scheduler::default())),
        }
    }

    /// Monitoring configuration
    pub fn config(&self) -> &MonitoringConfig {
        &self.state.config
    }

    /// Start the periodic health-check and metrics tasks
    ///
    /// No-op when monitoring is disabled or already running. Must be called
    /// from within a Tokio runtime.
    pub fn start(&self) {
        let config = &self.state.config;
        if !config.enabled {
            info!("Engine monitoring is disabled, not starting");
            return;
        }

        let mut scheduler = self.scheduler.lock();
        if scheduler.is_running() {
            return;
        }

        info!(
            health_check_interval_ms = config.health_check_interval_ms,
            performance_metrics_interval_ms = config.performance_metrics_interval_ms,
            "Starting engine monitoring"
        );
        scheduler.start(&self.state);
    }

    /// Stop both periodic tasks
    ///
    /// No further tick starts once this returns; a tick already running is
    /// allowed to finish. No-op when not running.
    pub fn stop(&self) {
        let mut scheduler = self.scheduler.lock();
        if !scheduler.is_running() {
            return;
        }

        scheduler.stop();
        info!("Engine monitoring stopped");
    }

    /// Whether the periodic tasks are scheduled
    pub fn is_running(&self) -> bool {
        self.scheduler.lock().is_running()
    }

    /// Most recent snapshot of an engine
    pub fn get_metrics_snapshot(&self, engine_name: &str) -> Option<MetricsSnapshot> {
        self.state.store.read().latest(engine_name).cloned()
    }

    /// Most recent snapshot of every engine with history
    pub fn get_all_metrics_snapshots(&self) -> BTreeMap<String, MetricsSnapshot> {
        self.state.store.read().latest_all()
    }

    /// Every tracked alert, resolved or not, in creation order
    pub fn get_recent_alerts(&self) -> Vec<Alert> {
        self.state.alerts.read().all()
    }

    /// Resolve an alert on behalf of an operator
    pub fn acknowledge_alert(&self, id: &str) -> Result<Alert> {
        self.state.alerts.write().acknowledge(id, Utc::now())
    }

    /// Health of every engine, straight from the engine manager
    pub async fn get_engine_health_summary(&self) -> Result<BTreeMap<String, EngineHealth>> {
        let report = self.state.engine_manager.get_engine_status().await?;

        Ok(report
            .into_iter()
            .map(|(name, status)| {
                (
                    name,
                    EngineHealth {
                        healthy: status.is_healthy,
                        last_check: status.last_check,
                    },
                )
            })
            .collect())
    }

    /// Number of unresolved alerts
    pub fn get_active_alert_count(&self) -> usize {
        self.state.alerts.read().active_count()
    }

    /// Number of unresolved critical alerts
    pub fn get_critical_alert_count(&self) -> usize {
        self.state.alerts.read().critical_count()
    }

    /// Alert totals since the service was created
    pub fn get_alert_stats(&self) -> AlertStats {
        self.state.alerts.read().stats()
    }

    /// Serialize every snapshot taken within the last `period`
    pub fn export_metrics(&self, format: ExportFormat, period: Duration) -> Result<String> {
        let since = export_cutoff(Utc::now(), period);
        let snapshots = self.state.store.read().snapshots_since(since);

        debug!(
            format = %format,
            snapshots = snapshots.len(),
            "Exporting engine metrics"
        );
        export_snapshots(format, &snapshots)
    }
}

impl MonitorState {
    /// Store the candidates, or drop them when alerting is disabled
    pub(super) fn record_alerts(&self, candidates: Vec<AlertCandidate>) {
        if candidates.is_empty() {
            return;
        }

        if !self.config.enable_alerting {
            for candidate in &candidates {
                debug!(
                    engine = %candidate.engine_name,
                    severity = %candidate.severity,
                    "Alerting disabled, discarding: {}",
                    candidate.message()
                );
            }
            return;
        }

        let now = Utc::now();
        let mut registry = self.alerts.write();
        for candidate in candidates {
            registry.raise(candidate, now);
        }
    }
}

/// Oldest timestamp included in an export window
fn export_cutoff(now: DateTime<Utc>, period: Duration) -> DateTime<Utc> {
    chrono::Duration::from_std(period)
        .ok()
        .and_then(|period| now.checked_sub_signed(period))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
