//! Tracing setup for the notectl CLI
//!
//! Usage:
//!   notectl --debug serve             # Debug logging to console
//!   RUST_LOG=notectl=debug notectl    # Fine-grained log control
//!
//! The config file's `[log] level` supplies the default filter when
//! RUST_LOG is unset.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Enable debug logging (overrides the configured default)
    pub debug: bool,
    /// Filter used when RUST_LOG is unset
    pub default_level: String,
}

/// Initialize console tracing with an env-filter.
pub fn init(config: &TracingConfig) -> Result<()> {
    let fallback = if config.debug {
        "debug".to_string()
    } else {
        config.default_level.clone()
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
