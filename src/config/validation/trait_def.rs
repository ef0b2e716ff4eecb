//! Validation trait definition

/// Validation trait for configuration structures
pub trait Validate {
    /// Human readable warnings, empty when the configuration looks sane
    fn validate(&self) -> Vec<String>;
}
