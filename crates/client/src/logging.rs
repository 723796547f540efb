//! Tracing setup: stderr always, plus an optional log file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LogConfig;

/// Installs the global subscriber.
///
/// The filter defaults to `info` and honours `RUST_LOG`. The returned guard
/// flushes the file writer when dropped, so keep it alive until exit.
pub fn setup_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard, log_path) = match &config.file_name {
        Some(file_name) => {
            let log_dir = config.directory.clone().unwrap_or_else(log_dir);
            std::fs::create_dir_all(&log_dir).with_context(|| {
                format!("Failed to create log directory {}", log_dir.display())
            })?;

            let file_appender = tracing_appender::rolling::never(&log_dir, file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard), Some(log_dir.join(file_name)))
        }
        None => (None, None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    if let Some(path) = log_path {
        tracing::debug!("Log file: {}", path.display());
    }
    Ok(guard)
}

/// Platform cache directory for logs, e.g. `~/.cache/wumpus/logs` on Linux.
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "wumpus")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("wumpus"))
        .join("logs")
}
