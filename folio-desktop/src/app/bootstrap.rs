use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use folio_core::config::RootConfig;
use folio_execution::logging;
use folio_infrastructure::{ConfigService, FolioPaths};
use tracing_appender::non_blocking::WorkerGuard;

use crate::app::DesktopState;

#[derive(Parser, Debug, Default)]
#[command(name = "folio-desktop", version, about = "PortfolioOS in your terminal")]
pub struct DesktopArgs {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "folio_desktop_lib=trace"
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

/// Everything `run` needs, built before the terminal is taken over.
pub struct AppBootstrap {
    pub state: DesktopState,
    pub tick_interval: Duration,
    /// Flushes the log file on drop
    pub log_guard: Option<WorkerGuard>,
}

fn load_config(args: &DesktopArgs) -> Result<RootConfig> {
    let service = match &args.config {
        Some(path) => ConfigService::with_path(path.clone()),
        None => ConfigService::new()?,
    };
    Ok(service.get_config())
}

impl AppBootstrap {
    pub fn new(args: &DesktopArgs) -> Result<Self> {
        let config = load_config(args)?;
        let level = args
            .log_level
            .clone()
            .unwrap_or_else(|| config.debug.log_level.clone());

        // Logging must never write to the terminal the desktop draws on.
        let log_guard = match FolioPaths::log_dir() {
            Ok(dir) => logging::init_file_logging(&dir, "folio-desktop.log", &level).ok(),
            Err(_) => None,
        };

        tracing::info!(
            tick_ms = config.clock.tick_interval_ms,
            policy = ?config.window.toggle_policy(),
            "[Bootstrap] Desktop configured"
        );

        Ok(Self {
            state: DesktopState::new(&config),
            tick_interval: config.clock.tick_interval(),
            log_guard,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::window::TogglePolicy;

    #[test]
    fn test_args_parse() {
        let args = DesktopArgs::try_parse_from([
            "folio-desktop",
            "--config",
            "/tmp/c.toml",
            "--log-level",
            "debug",
        ])
        .expect("valid args");
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let args = DesktopArgs {
            config: Some(PathBuf::from("/nonexistent/folio/config.toml")),
            log_level: None,
        };
        let config = load_config(&args).expect("defaults");
        assert_eq!(config, RootConfig::default());
        assert_eq!(config.window.toggle_policy(), TogglePolicy::ClearAllMinimized);
    }
}
