//! Error handling for the monitor
//!
//! This module defines the error type shared by every monitoring component.

mod helpers;
mod types;

pub use types::{MonitorError, Result};
