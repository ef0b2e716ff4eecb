//! Logging setup
//!
//! Installs the global `tracing` subscriber used by the binary. Library code
//! only emits events through the `tracing` macros and never installs a
//! subscriber itself.

#[cfg(test)]
pub(crate) mod capture;

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Build the env filter, preferring `RUST_LOG` over the configured level
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber
///
/// Returns `false` when a subscriber was already installed, which happens when
/// tests or an embedding application set one up first.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = build_filter(config);

    if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok()
    }
}
