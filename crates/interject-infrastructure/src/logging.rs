//! Structured logging with tracing
//!
//! Installs a `tracing_subscriber` registry: an env filter, one stdout
//! layer and, when `file_output` is set, a daily-rolling file layer. Both
//! output layers share the configured format.

use std::ffi::OsStr;
use std::path::Path;

use interject_domain::{Error, Result};
use tracing::{Level, Subscriber, info};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_FILTER_ENV};

pub use crate::config::LoggingConfig;

/// Initialize the global subscriber from `config`
///
/// `INTERJECT_LOG` overrides the configured level with a full filter
/// directive. Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file = config.file_output.as_deref().map(|path| {
        let directory = path.parent().unwrap_or_else(|| Path::new("."));
        let stem = path
            .file_stem()
            .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_STEM));
        output_layer(
            config.json_format,
            tracing_appender::rolling::daily(directory, stem),
            false,
        )
    });

    Registry::default()
        .with(filter)
        .with(output_layer(config.json_format, std::io::stdout, true))
        .with(file)
        .try_init()
        .map_err(|err| Error::configuration_with_source("Failed to install logger", err))?;

    info!(%level, json = config.json_format, "Logging initialized");
    Ok(())
}

fn output_layer<S, W>(json: bool, writer: W, ansi: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// Parse a configured level name, case-insensitively
pub fn parse_log_level(level: &str) -> Result<Level> {
    let parsed = match level.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            return Err(Error::configuration(format!(
                "unknown log level '{level}', expected one of trace, debug, info, warn, error"
            )));
        }
    };
    Ok(parsed)
}
