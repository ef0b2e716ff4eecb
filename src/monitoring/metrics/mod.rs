//! Engine metrics history
//!
//! Per-engine, time-ordered snapshot history with retention-based eviction,
//! plus the JSON/CSV serializers used for export.

mod bounded;
mod export;
mod store;


pub use export::{export_snapshots, CSV_HEADER};
pub use store::MetricsStore;
