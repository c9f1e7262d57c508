//! Telemetry configuration.

use std::env;

/// Logging configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct TelemetryConfig {
    /// Service name stamped on the startup line.
    pub service_name: String,
    /// `tracing` env-filter directive (e.g. `info`, `mora_pool=debug,info`).
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "mora".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Build from `MORA_SERVICE_NAME` / `MORA_LOG_LEVEL`, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            service_name: env::var("MORA_SERVICE_NAME").unwrap_or(default.service_name),
            log_level: env::var("MORA_LOG_LEVEL").unwrap_or(default.log_level),
        }
    }
}
