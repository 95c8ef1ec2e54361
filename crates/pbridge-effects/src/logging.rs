//! Tracing subscriber setup for embedders
//!
//! The facade only emits `tracing` events; installing a subscriber is the
//! embedder's choice. This helper installs the standard `fmt` subscriber
//! filtered by [`LoggingConfig::level`].

use pbridge_core::{BridgeError, LoggingConfig, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter described by `config`
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.level)
        .map_err(|e| BridgeError::config(format!("invalid log filter {:?}: {e}", config.level)))
}

/// Install a global `fmt` subscriber
///
/// Returns `Ok(false)` if a global subscriber was already installed, which
/// leaves the existing one in place.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool> {
    let filter = env_filter(config)?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_target(true)
        .try_init()
        .is_ok();
    Ok(installed)
}
