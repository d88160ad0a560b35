//! Tracing subscriber setup shared by the binaries.
//!
//! The desktop and the terminal REPL own the terminal, so their logs go to a
//! daily-rolling file. `RUST_LOG` takes precedence over the configured level.

use folio_core::error::{FolioError, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Builds the filter from `RUST_LOG`, falling back to `default_level`, then `info`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs a global subscriber writing to `<log_dir>/<file_prefix>.YYYY-MM-DD`.
///
/// The returned guard flushes buffered lines when dropped; keep it alive for
/// the lifetime of the program.
pub fn init_file_logging(
    log_dir: &Path,
    file_prefix: &str,
    default_level: &str,
) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let appender = tracing_appender::rolling::daily(log_dir, file_prefix);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| FolioError::internal(format!("Failed to install logger: {}", e)))?;

    tracing::info!("[Logging] Writing logs to {:?}", log_dir);
    Ok(guard)
}

/// Installs a global subscriber writing to stderr, for short-lived commands.
pub fn init_stderr_logging(default_level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| FolioError::internal(format!("Failed to install logger: {}", e)))
}
