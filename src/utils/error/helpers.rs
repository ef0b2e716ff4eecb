//! Helper functions for creating specific error types

use super::types::MonitorError;

impl MonitorError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn engine_manager<S: Into<String>>(message: S) -> Self {
        Self::EngineManager(message.into())
    }

    pub fn alert_not_found<S: Into<String>>(id: S) -> Self {
        Self::AlertNotFound(id.into())
    }

    pub fn export<S: Into<String>>(message: S) -> Self {
        Self::Export(message.into())
    }

    pub fn invalid_format<S: Into<String>>(format: S) -> Self {
        Self::InvalidFormat(format.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error reports a missing alert
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AlertNotFound(_))
    }
}
