//! Logging - tracing subscriber setup
//!
//! Logs go to stdout and to a daily-rolling file in the data directory.
//! `RUST_LOG` overrides the default filter (`debug` in development builds,
//! `info` otherwise).

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::APP_NAME;
use crate::error::Result;
use crate::helpers::{get_or_create_data_dir, is_development};

/// Install the global subscriber. Keep the returned guard alive for the
/// lifetime of the process so buffered file logs are flushed.
pub fn init_logging() -> Result<WorkerGuard> {
    let log_dir = get_or_create_data_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, format!("{APP_NAME}.log"));
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let default_level = if is_development() { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    tracing::info!(log_dir = ?log_dir, "Logging initialized");
    Ok(guard)
}
