//! Structured logging for the graphgen binary: `tracing` events to stderr,
//! filtered by `RUST_LOG` (default `info`), human-readable or JSON per
//! `GRAPHGEN_LOG_FORMAT`.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FORMAT_ENV: &str = "GRAPHGEN_LOG_FORMAT";

static INITIALISED: OnceLock<()> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat { provided: String },
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs the global subscriber once; later calls are no-ops.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let use_json = match env::var_os(LOG_FORMAT_ENV) {
        Some(raw) => parse_log_format(&raw.to_string_lossy())?,
        None => false,
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let fmt_layer = if use_json {
        fmt_layer.json().boxed()
    } else {
        fmt_layer.boxed()
    };

    // best-effort: another logger may already own the `log` slot
    let _ = LogTracer::init();
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    let _ = INITIALISED.set(());
    Ok(())
}

fn parse_log_format(raw: &str) -> Result<bool, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" => Ok(false),
        "json" => Ok(true),
        other => Err(LoggingError::UnsupportedFormat {
            provided: other.to_owned(),
        }),
    }
}
