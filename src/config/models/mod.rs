//! Configuration data models
//!
//! This module defines all configuration structures used by the monitor.

pub mod logging;
pub mod monitoring;

pub use logging::*;
pub use monitoring::*;

fn default_true() -> bool {
    true
}
