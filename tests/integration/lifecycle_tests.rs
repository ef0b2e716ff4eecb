//! Service lifecycle integration tests
//!
//! Start/stop semantics and tick scheduling.

#[cfg(test)]
mod tests {
    use crate::common::{FakeEngineManager, StatusFactory, advance_ms, test_config};
    use render_monitor::{MonitoringConfig, MonitoringService};
    use std::sync::Arc;

    const HOUR_MS: i64 = 3_600_000;

    // ==================== Start / Stop ====================

    #[tokio::test(start_paused = true)]
    async fn test_disabled_monitoring_collects_nothing() {
        let engines = FakeEngineManager::new();
        engines.set_status("chromium", StatusFactory::healthy());
        let config = MonitoringConfig {
            enabled: false,
            ..test_config(100, 100)
        };
        let monitor = MonitoringService::new(config, engines.clone());

        monitor.start();
        advance_ms(5_000).await;

        assert!(!monitor.is_running());
        assert!(monitor.get_metrics_snapshot("chromium").is_none());
        assert_eq!(engines.status_calls(), 0);
        assert_eq!(engines.health_checks(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_waits_one_period() {
        let engines = FakeEngineManager::new();
        engines.set_status("chromium", StatusFactory::healthy());
        let monitor = MonitoringService::new(test_config(HOUR_MS, 1_000), engines.clone());

        monitor.start();
        advance_ms(999).await;
        assert!(monitor.get_metrics_snapshot("chromium").is_none());

        advance_ms(2).await;
        assert!(monitor.get_metrics_snapshot("chromium").is_some());
        monitor.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_tasks_run_on_independent_timers() {
        let engines = FakeEngineManager::new();
        engines.set_status("chromium", StatusFactory::healthy());
        let monitor = MonitoringService::new(test_config(1_000, 4_000), engines.clone());

        monitor.start();
        advance_ms(4_500).await;
        monitor.stop();

        // Four health ticks and one performance tick
        assert_eq!(engines.health_checks(), 4);
        assert_eq!(engines.status_calls(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_pending_ticks() {
        let engines = FakeEngineManager::new();
        engines.set_status("chromium", StatusFactory::healthy());
        let monitor = MonitoringService::new(test_config(1_000, 1_000), engines.clone());

        monitor.start();
        advance_ms(1_500).await;
        monitor.stop();
        let calls = engines.status_calls();

        advance_ms(30_000).await;
        assert_eq!(engines.status_calls(), calls);
        assert!(!monitor.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clones_share_state() {
        let engines = FakeEngineManager::new();
        engines.set_status("chromium", StatusFactory::healthy());
        let monitor = MonitoringService::new(test_config(HOUR_MS, 1_000), engines.clone());
        let handle = monitor.clone();

        monitor.start();
        assert!(handle.is_running());
        handle.start();

        advance_ms(1_500).await;
        assert!(handle.get_metrics_snapshot("chromium").is_some());

        handle.stop();
        assert!(!monitor.is_running());
        assert_eq!(engines.status_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_every_handle_stops_ticks() {
        let engines = FakeEngineManager::new();
        engines.set_status("chromium", StatusFactory::healthy());
        let monitor = MonitoringService::new(test_config(HOUR_MS, 1_000), engines.clone());
        let handle = monitor.clone();

        monitor.start();
        advance_ms(1_500).await;
        drop(monitor);

        // A surviving clone keeps the schedule alive
        advance_ms(1_000).await;
        let calls = engines.status_calls();
        assert_eq!(calls, 2);

        drop(handle);
        advance_ms(60_000).await;
        assert_eq!(engines.status_calls(), calls);
        assert_eq!(Arc::strong_count(&engines), 1);
    }

    // ==================== Failure Tolerance ====================

    #[tokio::test(start_paused = true)]
    async fn test_failed_tick_is_skipped() {
        let engines = FakeEngineManager::new();
        engines.set_status("chromium", StatusFactory::healthy());
        engines.fail_next(1);
        let monitor = MonitoringService::new(test_config(HOUR_MS, 1_000), engines.clone());

        monitor.start();
        advance_ms(1_500).await;
        assert!(monitor.get_all_metrics_snapshots().is_empty());

        advance_ms(1_000).await;
        monitor.stop();

        let snapshots = monitor.get_all_metrics_snapshots();
        assert_eq!(snapshots.len(), 1);
        assert!(snapshots["chromium"].is_healthy);
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_tick_is_skipped() {
        let engines = FakeEngineManager::new();
        engines.set_status("chromium", StatusFactory::healthy());
        engines.panic_next(1);
        let monitor = MonitoringService::new(test_config(HOUR_MS, 1_000), engines.clone());

        monitor.start();
        advance_ms(1_500).await;
        assert!(monitor.get_metrics_snapshot("chromium").is_none());

        advance_ms(1_000).await;
        monitor.stop();
        assert!(monitor.get_metrics_snapshot("chromium").is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_counter_failure_falls_back_to_status() {
        let engines = FakeEngineManager::new();
        engines.set_status("chromium", StatusFactory::slow(2_500.0));
        engines.fail_counters(true);
        let monitor = MonitoringService::new(test_config(HOUR_MS, 1_000), engines.clone());

        monitor.start();
        advance_ms(1_500).await;
        monitor.stop();

        let snapshot = monitor.get_metrics_snapshot("chromium").unwrap();
        assert_eq!(snapshot.performance.average_response_time, 2_500.0);
        assert_eq!(snapshot.performance.total_requests, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_negative_intervals_fire_repeatedly() {
        let engines = FakeEngineManager::new();
        engines.set_status("chromium", StatusFactory::healthy());
        let monitor = MonitoringService::new(test_config(-1, 0), engines.clone());

        monitor.start();
        advance_ms(20).await;
        monitor.stop();

        assert!(engines.health_checks() > 1);
        assert!(engines.status_calls() > 2);
    }

    // ==================== Queries ====================

    #[tokio::test(start_paused = true)]
    async fn test_snapshot_tracks_latest_tick() {
        let engines = FakeEngineManager::new();
        engines.set_status("chromium", StatusFactory::healthy());
        let monitor = MonitoringService::new(test_config(HOUR_MS, 1_000), engines.clone());

        monitor.start();
        advance_ms(1_500).await;
        engines.set_status("chromium", StatusFactory::unhealthy("GPU reset"));
        advance_ms(1_000).await;
        monitor.stop();

        let snapshot = monitor.get_metrics_snapshot("chromium").unwrap();
        assert!(!snapshot.is_healthy);
        assert_eq!(snapshot.errors, vec!["GPU reset".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_removed_engine_keeps_history() {
        let engines = FakeEngineManager::new();
        engines.set_status("chromium", StatusFactory::healthy());
        engines.set_status("webkit", StatusFactory::healthy());
        let monitor = MonitoringService::new(test_config(HOUR_MS, 1_000), engines.clone());

        monitor.start();
        advance_ms(1_500).await;
        engines.remove_engine("webkit");
        advance_ms(1_000).await;
        monitor.stop();

        let snapshots = monitor.get_all_metrics_snapshots();
        assert_eq!(snapshots.len(), 2);
        assert!(snapshots["webkit"].timestamp <= snapshots["chromium"].timestamp);
    }

    #[tokio::test]
    async fn test_health_summary_reads_engine_manager() {
        let engines = FakeEngineManager::new();
        engines.set_status("chromium", StatusFactory::healthy());
        engines.set_status("wkhtmltopdf", StatusFactory::unhealthy("segfault"));
        let monitor = MonitoringService::new(test_config(1_000, 1_000), engines.clone());

        let summary = monitor.get_engine_health_summary().await.unwrap();
        assert!(summary["chromium"].healthy);
        assert!(!summary["wkhtmltopdf"].healthy);
        assert!(!monitor.is_running());
    }
}
