//! Engine health and performance monitoring
//!
//! [`MonitoringService`] polls an [`EngineManager`](crate::engine::EngineManager)
//! on two independent schedules, keeps a bounded history of per-engine
//! snapshots, and raises alerts when thresholds are crossed.

// Public submodules
pub mod alerts;
pub mod evaluator;
pub mod metrics;

// Internal submodules
mod background;
mod system;
mod types;


// Re-export public types
pub use alerts::{AlertCandidate, AlertRegistry, AlertStats};
pub use evaluator::ThresholdEvaluator;
pub use metrics::MetricsStore;
pub use system::MonitoringService;
pub use types::{
    Alert, AlertKind, AlertSeverity, EngineHealth, ExportFormat, MetricsSnapshot,
    PerformanceStats, ResourceUsage,
};
