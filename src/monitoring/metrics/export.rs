//! Snapshot serialization for export

use crate::monitoring::types::{ExportFormat, MetricsSnapshot};
use crate::utils::error::{MonitorError, Result};
use chrono::SecondsFormat;

/// Header row of the CSV export
pub const CSV_HEADER: &str = "timestamp,engineName,isHealthy,memoryUsage,activeTasks,totalRequests,successfulRequests,failedRequests,averageResponseTime,errorsCount";

/// Serialize snapshots in the requested format
pub fn export_snapshots(format: ExportFormat, snapshots: &[MetricsSnapshot]) -> Result<String> {
    match format {
        ExportFormat::Json => serde_json::to_string_pretty(snapshots)
            .map_err(|e| MonitorError::export(format!("Failed to serialize snapshots: {}", e))),
        ExportFormat::Csv => Ok(to_csv(snapshots)),
    }
}

/// CSV rendering; zero rows yields an empty string with no header
fn to_csv(snapshots: &[MetricsSnapshot]) -> String {
    if snapshots.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(CSV_HEADER.len() + snapshots.len() * 96);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for s in snapshots {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{}\n",
            s.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            csv_field(&s.engine_name),
            s.is_healthy,
            s.resource_usage.memory_usage,
            s.resource_usage.active_tasks,
            s.performance.total_requests,
            s.performance.successful_requests,
            s.performance.failed_requests,
            s.performance.average_response_time,
            s.errors.len(),
        ));
    }

    out
}

/// Quote a field when it contains a delimiter, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
