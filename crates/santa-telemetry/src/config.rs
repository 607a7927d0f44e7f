//! Telemetry configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Log file written next to the working directory unless disabled.
pub const DEFAULT_LOG_FILE: &str = "secret_santa.log";

/// Configuration for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to the startup event
    pub service_name: String,

    /// Baseline filter (trace, debug, info, warn, error) or `EnvFilter` directives
    pub log_level: String,

    /// Directives applied on top of the baseline and of `RUST_LOG`
    /// (`SANTA_LOG_LEVEL`, `-v`).
    pub level_override: Option<String>,

    /// Whether to enable console output
    pub console_output: bool,

    /// Whether console output is JSON
    pub json_logs: bool,

    /// Plain-text log file. `None` disables it.
    pub log_file: Option<PathBuf>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "secret-santa".to_string(),
            log_level: "warn".to_string(),
            level_override: None,
            console_output: true,
            json_logs: false,
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `RUST_LOG`: Baseline filter (default: warn)
    /// - `SANTA_LOG_LEVEL`: Level applied on top of `RUST_LOG`
    /// - `SANTA_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `SANTA_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `SANTA_LOG_FILE`: Log file path (default: secret_santa.log, `off` or empty disables)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service_name: defaults.service_name,

            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),

            level_override: env::var("SANTA_LOG_LEVEL")
                .ok()
                .filter(|v| !v.trim().is_empty()),

            console_output: env::var("SANTA_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.console_output),

            json_logs: env::var("SANTA_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),

            log_file: match env::var("SANTA_LOG_FILE") {
                Ok(v) => parse_log_file(&v),
                Err(_) => defaults.log_file,
            },
        }
    }

    /// Apply a counted `-v` flag: 1 is `info`, 2 or more is `debug`.
    /// Zero leaves the configured levels alone.
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        match verbosity {
            0 => {}
            1 => self.level_override = Some("info".to_string()),
            _ => self.level_override = Some("debug".to_string()),
        }
        self
    }

    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        self.log_file = log_file;
        self
    }
}

fn parse_log_file(value: &str) -> Option<PathBuf> {
    let value = value.trim();
    match value.to_lowercase().as_str() {
        "" | "off" | "none" | "0" | "false" => None,
        _ => Some(PathBuf::from(value)),
    }
}
