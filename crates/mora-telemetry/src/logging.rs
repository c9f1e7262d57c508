//! Logging subscriber installation.

use crate::{TelemetryConfig, TelemetryError};
use tracing_subscriber::EnvFilter;

/// Guard that keeps logging active. Hold for the process lifetime.
pub struct TelemetryGuard {
    _private: (),
}

/// Install the global `tracing` subscriber: compact human-readable lines to
/// stdout, filtered by the configured directive.
pub fn init_logging(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let filter =
        EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::Filter(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| TelemetryError::Subscriber(e.to_string()))?;

    tracing::info!(service = %config.service_name, "logging initialized");
    Ok(TelemetryGuard { _private: () })
}
