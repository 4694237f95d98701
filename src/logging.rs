use crate::persistence::{ensure_data_dir, log_file};
use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable overriding the configured filter
pub const LOG_ENV: &str = "TEND_LOG";

/// Send tracing output to tend.log in the data directory; the terminal
/// belongs to the TUI. Keep the guard alive until exit so buffered lines flush.
pub fn init_logging(data_dir: &Path, default_filter: &str) -> Result<WorkerGuard> {
    ensure_data_dir(data_dir)?;
    let path = log_file(data_dir);
    let file_name = path
        .file_name()
        .context("Log file path has no file name")?;

    let appender = tracing_appender::rolling::never(data_dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(guard)
}
