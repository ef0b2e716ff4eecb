//! Metrics export integration tests

#[cfg(test)]
mod tests {
    use crate::common::{FakeEngineManager, StatusFactory, advance_ms, test_config};
    use render_monitor::monitoring::metrics::CSV_HEADER;
    use render_monitor::{ExportFormat, MetricsSnapshot, MonitorError, MonitoringService};
    use std::time::Duration;

    const HOUR_MS: i64 = 3_600_000;

    async fn monitor_with_ticks(ticks: u64) -> MonitoringService {
        let engines = FakeEngineManager::new();
        engines.set_status("chromium", StatusFactory::healthy());
        engines.set_status("webkit", StatusFactory::unhealthy("font cache corrupt"));
        let monitor = MonitoringService::new(test_config(HOUR_MS, 1_000), engines);

        monitor.start();
        advance_ms(ticks * 1_000 + 500).await;
        monitor.stop();
        monitor
    }

    #[tokio::test(start_paused = true)]
    async fn test_json_export_contains_every_snapshot() {
        let monitor = monitor_with_ticks(3).await;

        let json = monitor
            .export_metrics(ExportFormat::Json, Duration::from_secs(3_600))
            .unwrap();
        let snapshots: Vec<MetricsSnapshot> = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshots.len(), 6);
        assert!(snapshots.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        assert!(json.contains("\"engineName\""));
        assert!(json.contains("\"resourceUsage\""));
    }

    #[tokio::test(start_paused = true)]
    async fn test_csv_export_has_one_row_per_snapshot() {
        let monitor = monitor_with_ticks(1).await;

        let csv = monitor
            .export_metrics(ExportFormat::Csv, Duration::from_secs(3_600))
            .unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines.iter().any(|l| l.contains(",chromium,true,")));
        assert!(lines.iter().any(|l| l.contains(",webkit,false,")));
        assert!(lines.iter().all(|l| l.split(',').count() == 10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_exports_nothing() {
        let monitor = monitor_with_ticks(2).await;

        std::thread::sleep(Duration::from_millis(5));
        let csv = monitor
            .export_metrics(ExportFormat::Csv, Duration::ZERO)
            .unwrap();
        assert_eq!(csv, "");

        let json = monitor
            .export_metrics(ExportFormat::Json, Duration::ZERO)
            .unwrap();
        assert_eq!(json.trim(), "[]");
    }

    #[tokio::test]
    async fn test_export_before_any_tick() {
        let engines = FakeEngineManager::new();
        let monitor = MonitoringService::new(test_config(1_000, 1_000), engines);

        assert_eq!(
            monitor
                .export_metrics(ExportFormat::Csv, Duration::from_secs(60))
                .unwrap(),
            ""
        );
        assert_eq!(
            monitor
                .export_metrics(ExportFormat::Json, Duration::MAX)
                .unwrap()
                .trim(),
            "[]"
        );
    }

    #[test]
    fn test_export_format_parsing() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::Csv.to_string(), "csv");

        let err = "xml".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, MonitorError::InvalidFormat(_)));
    }
}
