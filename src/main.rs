//! render-monitor - watch a rendering engine pool
//!
//! Reads engine status from a JSON file, runs the monitor for a while and
//! prints the collected metrics on exit.

#![allow(missing_docs)]

use clap::Parser;
use render_monitor::utils::logging::init_logging;
use render_monitor::{AppConfig, ExportFormat, FileEngineManager, MonitoringService};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "render-monitor", version, about = "Rendering engine health monitor")]
struct Args {
    /// YAML configuration file
    #[arg(short, long, env = "RENDER_MONITOR_CONFIG")]
    config: Option<PathBuf>,

    /// JSON file the engine pool publishes its status to
    #[arg(short, long, env = "RENDER_MONITOR_STATUS_FILE")]
    status_file: PathBuf,

    /// Optional JSON file with per-engine task counters
    #[arg(long, env = "RENDER_MONITOR_COUNTERS_FILE")]
    counters_file: Option<PathBuf>,

    /// How long to monitor before exiting
    #[arg(short, long, default_value_t = 60)]
    duration_secs: u64,

    /// Print collected metrics on exit
    #[arg(short, long)]
    export: Option<ExportFormat>,

    /// Export window, defaults to the monitoring duration
    #[arg(long)]
    export_period_ms: Option<u64>,

    /// Log as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match AppConfig::read_file(path).await {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => AppConfig::default(),
    };
    config.logging.json |= args.json_logs;
    init_logging(&config.logging);
    if let Some(path) = &args.config {
        info!("Loaded configuration from: {:?}", path);
    }
    config.log_warnings();

    let mut engines = FileEngineManager::new(&args.status_file);
    if let Some(counters) = &args.counters_file {
        engines = engines.with_counters(counters);
    }

    let monitor = MonitoringService::new(config.monitoring, Arc::new(engines));
    monitor.start();

    let duration = Duration::from_secs(args.duration_secs);
    tokio::select! {
        _ = tokio::time::sleep(duration) => {}
        _ = tokio::signal::ctrl_c() => info!("Interrupted, shutting down"),
    }
    monitor.stop();

    match monitor.get_engine_health_summary().await {
        Ok(summary) => debug!(?summary, "Final engine health"),
        Err(e) => error!(error = %e, "Failed to read final engine health"),
    }
    info!(
        active_alerts = monitor.get_active_alert_count(),
        critical_alerts = monitor.get_critical_alert_count(),
        "Monitoring finished"
    );

    if let Some(format) = args.export {
        let period = args
            .export_period_ms
            .map(Duration::from_millis)
            .unwrap_or(duration);
        match monitor.export_metrics(format, period) {
            Ok(output) => print!("{}", output),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
