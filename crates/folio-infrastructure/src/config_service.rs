//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` (by default
//! `~/.config/folio/config.toml`) and caches it.

use crate::paths::FolioPaths;
use folio_core::config::RootConfig;
use folio_core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// Configuration service that loads and caches the root configuration.
///
/// A missing or empty file is not an error: it yields `RootConfig::default()`.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration, filled on first access.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a service for the platform default config file.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(FolioPaths::config_file()?))
    }

    /// Creates a service reading from an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// A file that fails to parse is logged and replaced by defaults; use
    /// [`ConfigService::load`] to see the error.
    pub fn get_config(&self) -> RootConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load().unwrap_or_else(|e| {
            tracing::warn!(
                "[ConfigService] Falling back to defaults, {:?} is invalid: {}",
                self.path,
                e
            );
            RootConfig::default()
        });

        let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *write_lock = Some(loaded.clone());
        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *write_lock = None;
    }

    /// Reads and parses the config file, bypassing the cache.
    pub fn load(&self) -> Result<RootConfig> {
        if !self.path.exists() {
            tracing::debug!("[ConfigService] No config at {:?}, using defaults", self.path);
            return Ok(RootConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(RootConfig::default());
        }

        let config: RootConfig = toml::from_str(&content)?;
        tracing::info!("[ConfigService] Loaded config from {:?}", self.path);
        Ok(config)
    }

    /// Writes `config` to the file, creating parent directories, and caches it.
    pub fn save(&self, config: &RootConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(config)?;
        fs::write(&self.path, toml_string)?;
        tracing::info!("[ConfigService] Saved config to {:?}", self.path);

        let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *write_lock = Some(config.clone());
        Ok(())
    }

    /// Writes the default configuration.
    ///
    /// Returns `false` without touching the file when it already exists and
    /// `force` is not set.
    pub fn init(&self, force: bool) -> Result<bool> {
        if self.path.exists() && !force {
            return Ok(false);
        }
        self.save(&RootConfig::default())?;
        Ok(true)
    }
}
