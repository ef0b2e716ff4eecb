//! Configuration validation
//!
//! Validation never rejects a configuration. Each validator returns the list
//! of suspicious settings it found and the loader logs them as warnings.

mod monitoring_validators;
mod trait_def;

pub use trait_def::Validate;
