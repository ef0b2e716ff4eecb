//! Alert registry
//!
//! Keeps every raised alert in creation order together with its resolution
//! state and aggregate statistics.

mod manager;
mod types;

pub use manager::AlertRegistry;
pub use types::{AlertCandidate, AlertStats};
