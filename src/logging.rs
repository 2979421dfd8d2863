//! Logging System
//!
//! Structured logging using the `tracing` crate. Logs go to stderr so stdout
//! only ever carries the run summary.

use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding an `EnvFilter` directive that overrides the configured level.
pub const LOG_ENV_VAR: &str = "SML_MANIFEST_LOG";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "off".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            color: default_true(),
        }
    }
}

/// Initialize the global subscriber.
///
/// `SML_MANIFEST_LOG` wins over `config.level` when set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ManifestError> {
    let filter = build_env_filter(config)?;
    let format = validate_format(&config.format)?;

    let base_subscriber = Registry::default().with(filter);

    let result = if format == LogFormat::Json {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| ManifestError::ConfigError(format!("Failed to initialize logging: {}", e)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

fn validate_format(format: &str) -> Result<LogFormat, ManifestError> {
    match format {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(ManifestError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}

fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ManifestError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level).map_err(|e| {
        ManifestError::ConfigError(format!("Invalid log level '{}': {}", config.level, e))
    })
}
