//! # Santa Telemetry
//!
//! Structured logging for the secret-santa tools.
//!
//! ## Outputs
//!
//! - **Console**: human-readable `fmt` output on stderr, or JSON lines
//! - **Log file**: plain-text copy of every event (`secret_santa.log` by default)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use santa_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env().with_verbosity(1);
//!     let _guard = init_telemetry(&config).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RUST_LOG` | `warn` | Baseline filter directives |
//! | `SANTA_LOG_LEVEL` | unset | Level applied on top of `RUST_LOG` (`-v` wins over it) |
//! | `SANTA_JSON_LOGS` | `false` | JSON console output |
//! | `SANTA_CONSOLE_OUTPUT` | `true` | Console output on/off |
//! | `SANTA_LOG_FILE` | `secret_santa.log` | Log file path (`off` disables) |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::LoggingGuard;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install subscriber: {0}")]
    SubscriberInit(String),
}

/// Initialize logging for the process.
///
/// Returns a guard that must be held for the lifetime of the application.
/// Fails if a global subscriber is already installed.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let logging = logging::init_logging(config)?;
    Ok(TelemetryGuard { _logging: logging })
}

/// Guard that keeps telemetry active. Drop to flush.
pub struct TelemetryGuard {
    _logging: LoggingGuard,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::debug!("Shutting down telemetry");
    }
}
