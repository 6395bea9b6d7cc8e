use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::domain::models::LoggingConfig;

const LOG_FILE_NAME: &str = "breedcache.log";

/// Logger implementation using tracing
///
/// Holds the file writer guard, if any, so buffered log lines are flushed
/// when the logger is dropped.
pub struct LoggerImpl {
    _guard: Option<WorkerGuard>,
}

impl LoggerImpl {
    /// Initialize the global subscriber from the logging configuration
    ///
    /// Console output goes to stderr so command output on stdout stays clean.
    /// `RUST_LOG` takes precedence over the configured level.
    ///
    /// # Errors
    /// Returns an error if the level or format is unknown, the log file
    /// cannot be created, or a global subscriber is already installed
    pub fn init(config: &LoggingConfig) -> Result<Self> {
        let default_level = parse_log_level(&config.level)?;
        let json = parse_log_format(&config.format)?;

        let env_filter = || {
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy()
        };

        let stderr_layer = if json {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_current_span(true)
                .with_target(true)
                .with_filter(env_filter())
                .boxed()
        } else {
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_filter(env_filter())
                .boxed()
        };

        let (file_layer, guard) = match config.log_dir.as_deref() {
            Some(log_dir) => {
                let (layer, guard) = json_file_layer(Path::new(log_dir))?;
                (Some(layer.with_filter(env_filter()).boxed()), Some(guard))
            }
            None => (None, None),
        };

        tracing_subscriber::registry()
            .with(stderr_layer)
            .with(file_layer)
            .try_init()?;

        Ok(Self { _guard: guard })
    }
}

/// File layer - always JSON for structured logging
fn json_file_layer<S>(log_dir: &Path) -> Result<(impl Layer<S>, WorkerGuard)>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(log_dir)
        .with_context(|| format!("Failed to create log file in {}", log_dir.display()))?;
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_current_span(true)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    Ok((layer, guard))
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => bail!("Invalid log level: {level}"),
    }
}

/// Parse log format string, returning whether JSON output is requested
pub fn parse_log_format(format: &str) -> Result<bool> {
    match format.to_lowercase().as_str() {
        "json" => Ok(true),
        "pretty" => Ok(false),
        _ => bail!("Invalid log format: {format}"),
    }
}
