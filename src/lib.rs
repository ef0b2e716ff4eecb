//! # render-monitor
//!
//! Health and performance monitoring for a pool of rendering engines.
//!
//! The monitor polls an [`EngineManager`] on two independent schedules: a
//! health check that raises alerts for unhealthy engines, and a metrics
//! collection that stores one [`MetricsSnapshot`] per engine and checks
//! failure rate, latency and memory thresholds. Alerts stay open until an
//! operator acknowledges them.
//!
//! ## Features
//!
//! - **Non-blocking scheduling**: periodic Tokio tasks, cancelled by `stop()`
//! - **Bounded history**: time-based retention plus a per-engine cap
//! - **Tagged alerts**: every alert carries a machine-checkable [`AlertKind`]
//! - **Export**: JSON or CSV of every snapshot in a time window
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use render_monitor::{ExportFormat, FileEngineManager, MonitoringConfig, MonitoringService};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engines = Arc::new(FileEngineManager::new("engines.json"));
//!     let monitor = MonitoringService::new(MonitoringConfig::default(), engines);
//!
//!     monitor.start();
//!     tokio::time::sleep(Duration::from_secs(120)).await;
//!     monitor.stop();
//!
//!     println!("{}", monitor.export_metrics(ExportFormat::Csv, Duration::from_secs(3600))?);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod config;
pub mod engine;
pub mod monitoring;
pub mod utils;

// Re-export main types
pub use config::{AlertThresholds, AppConfig, LoggingConfig, MonitoringConfig};
pub use engine::{
    EngineCounters, EngineManager, EnginePerformance, EngineStatus, EngineStatusReport,
    FileEngineManager,
};
pub use monitoring::{
    Alert, AlertKind, AlertSeverity, AlertStats, EngineHealth, ExportFormat, MetricsSnapshot,
    MonitoringService,
};
pub use utils::error::{MonitorError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
