//! Unified path management for folio configuration and log files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/folio/             # Config directory (platform config dir)
//! ├── config.toml              # Application configuration
//! └── logs/                    # Application logs
//!     └── folio-desktop.log.YYYY-MM-DD
//! ```

use folio_core::error::{FolioError, Result};
use std::path::PathBuf;

/// Directory name under the platform config directory.
const APP_DIR_NAME: &str = "folio";

/// Resolves folio paths for the current platform.
pub struct FolioPaths;

impl FolioPaths {
    /// Returns the folio configuration directory (e.g. `~/.config/folio/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| FolioError::config("Cannot find config directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the directory rolling log files are written to.
    pub fn log_dir() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("logs"))
    }
}
