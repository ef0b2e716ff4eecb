//! Periodic tasks for MonitoringService
//!
//! Tasks exit when the shutdown flag is set or its sender is dropped.

use crate::engine::EngineCountersReport;
use crate::utils::error::Result;
use chrono::Utc;
use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, error, warn};

use super::system::MonitorState;
use super::types::MetricsSnapshot;

/// Handles of the two periodic tasks and their shutdown signal
#[derive(Debug, Default)]
pub(super) struct Scheduler {
    shutdown: Option<watch::Sender<bool>>,
    tasks: Vec<JoinHandle<()>>,
}

impl Scheduler {
    pub(super) fn is_running(&self) -> bool {
        self.shutdown.is_some()
    }

    /// Spawn the health-check and performance-metrics tasks
    pub(super) fn start(&mut self, state: &Arc<MonitorState>) {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let monitoring = Arc::clone(state);
        self.tasks.push(spawn_periodic(
            "health_check",
            state.config.health_check_period(),
            shutdown_rx.clone(),
            move || {
                let monitoring = Arc::clone(&monitoring);
                async move { monitoring.run_health_checks().await }
            },
        ));

        let monitoring = Arc::clone(state);
        self.tasks.push(spawn_periodic(
            "performance_metrics",
            state.config.performance_metrics_period(),
            shutdown_rx,
            move || {
                let monitoring = Arc::clone(&monitoring);
                async move { monitoring.collect_performance_metrics().await }
            },
        ));

        self.shutdown = Some(shutdown_tx);
    }

    /// Signal both tasks to exit
    ///
    /// A tick that is already executing runs to completion; the task exits
    /// before its next tick.
    pub(super) fn stop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            shutdown.send_replace(true);
        }
        self.tasks.clear();
    }
}

/// Run `tick` every `period` until shutdown is signalled
///
/// The first tick fires one period after spawning. Errors and panics of a
/// tick are logged and never end the loop.
fn spawn_periodic<F, Fut>(
    task: &'static str,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
    tick: F,
) -> JoinHandle<()>
where
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                    continue;
                }
                _ = interval.tick() => {}
            }

            if *shutdown.borrow() {
                break;
            }

            match AssertUnwindSafe(tick()).catch_unwind().await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => error!(task, error = %e, "Monitoring tick failed"),
                Err(_) => error!(task, "Monitoring tick panicked"),
            }
        }

        debug!(task, "Monitoring task exited");
    })
}

impl MonitorState {
    /// Health-check tick: raise health and consecutive-failure alerts
    pub(super) async fn run_health_checks(&self) -> Result<()> {
        debug!("Running engine health checks");

        self.engine_manager.force_health_check().await?;
        let report = self.engine_manager.get_engine_status().await?;

        let candidates = {
            let mut evaluator = self.evaluator.lock();
            report
                .iter()
                .flat_map(|(name, status)| evaluator.evaluate_health(name, status))
                .collect::<Vec<_>>()
        };

        if self.config.auto_resolve_alerts {
            let now = Utc::now();
            let mut alerts = self.alerts.write();
            for (name, status) in &report {
                if !status.is_failing() && alerts.has_active_for(name) {
                    alerts.resolve_engine(name, now);
                }
            }
        }

        self.record_alerts(candidates);
        Ok(())
    }

    /// Performance tick: store one snapshot per engine and check thresholds
    pub(super) async fn collect_performance_metrics(&self) -> Result<()> {
        debug!("Collecting engine performance metrics");

        let report = self.engine_manager.get_engine_status().await?;
        let counters: EngineCountersReport = match self.engine_manager.get_engine_metrics().await {
            Ok(counters) => counters.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Engine counters unavailable, using status report only");
                EngineCountersReport::new()
            }
        };

        let now = Utc::now();
        let mut candidates = Vec::new();
        {
            let evaluator = self.evaluator.lock();
            let mut store = self.store.write();

            for (name, status) in &report {
                let engine_counters = counters.get(name);
                store.insert(MetricsSnapshot::from_status(
                    name,
                    status,
                    engine_counters,
                    now,
                ));
                candidates.extend(evaluator.evaluate_performance(name, status, engine_counters));
            }

            let removed = store.clean_old_metrics(self.config.retention_period(), now);
            if removed > 0 {
                debug!(removed, "Evicted snapshots past retention");
            }
        }

        self.record_alerts(candidates);
        Ok(())
    }
}
