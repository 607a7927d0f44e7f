//! Subscriber setup: env filter, console layer (fmt or JSON) and log file layer.

use std::fs::{File, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Handle to the installed logging layers.
pub struct LoggingGuard {
    _initialized: bool,
}

/// Build the level filter from `RUST_LOG` and the configuration.
pub(crate) fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(), config)
}

/// Baseline is `rust_log` when it parses, else `config.log_level`.
/// `config.level_override` directives are added on top, so a global level
/// from `-v` replaces the baseline's while per-target directives stay.
pub(crate) fn filter_from(
    rust_log: Option<&str>,
    config: &TelemetryConfig,
) -> Result<EnvFilter, TelemetryError> {
    let invalid = |filter: &str, reason: String| TelemetryError::Filter {
        filter: filter.to_string(),
        reason,
    };

    let baseline = rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok());
    let mut filter = match baseline {
        Some(filter) => filter,
        None => EnvFilter::try_new(&config.log_level)
            .map_err(|e| invalid(&config.log_level, e.to_string()))?,
    };

    if let Some(level) = &config.level_override {
        for directive in level.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            let directive: Directive = directive
                .parse()
                .map_err(|e: tracing_subscriber::filter::ParseError| {
                    invalid(level, e.to_string())
                })?;
            filter = filter.add_directive(directive);
        }
    }
    Ok(filter)
}

pub(crate) fn open_log_file(config: &TelemetryConfig) -> Result<Option<File>, TelemetryError> {
    let Some(path) = &config.log_file else {
        return Ok(None);
    };
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(Some)
        .map_err(|source| TelemetryError::LogFile {
            path: path.display().to_string(),
            source,
        })
}

/// Install the global subscriber.
pub fn init_logging(config: &TelemetryConfig) -> Result<LoggingGuard, TelemetryError> {
    let env_filter = build_filter(config)?;

    let json_layer = (config.console_output && config.json_logs).then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
    });

    let fmt_layer = (config.console_output && !config.json_logs).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(true)
    });

    let file_layer = open_log_file(config)?.map(|file| {
        fmt::layer()
            .with_writer(Mutex::new(file))
            .with_target(true)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(fmt_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    tracing::debug!(
        service = %config.service_name,
        level = %config.log_level,
        level_override = ?config.level_override,
        json_logs = config.json_logs,
        log_file = ?config.log_file,
        "Logging initialized"
    );

    Ok(LoggingGuard { _initialized: true })
}
