//! # Mora Telemetry
//!
//! Structured logging for the Mora services.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mora_telemetry::{TelemetryConfig, init_logging};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     let _guard = init_logging(&config).expect("Failed to init logging");
//!
//!     // Application code here; `tracing` events now reach stdout.
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MORA_SERVICE_NAME` | `mora` | Service name stamped on startup |
//! | `MORA_LOG_LEVEL` | `info` | Log level filter (`tracing` env-filter syntax) |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod logging;

pub use config::TelemetryConfig;
pub use logging::{init_logging, TelemetryGuard};

use thiserror::Error;

/// Telemetry initialization errors.
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The env-filter directive string did not parse.
    #[error("Invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed.
    #[error("Failed to install logging subscriber: {0}")]
    Subscriber(String),
}
