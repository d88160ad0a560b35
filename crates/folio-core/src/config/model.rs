//! Configuration models loaded from `config.toml`.
//!
//! Every section and field has a default, so a missing file, a missing
//! section or a partially filled one all yield a usable configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::window::TogglePolicy;

/// Clock ticker settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockSettings {
    /// Milliseconds between clock ticks
    pub tick_interval_ms: u64,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
        }
    }
}

impl ClockSettings {
    /// Tick interval, never shorter than one millisecond.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugSettings {
    /// `tracing` filter directive ("info", "folio_desktop=debug", ...)
    pub log_level: String,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Window manager behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Whether closing the active app from the dock also forgets every
    /// minimized app.
    pub toggle_clears_all_minimized: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            toggle_clears_all_minimized: true,
        }
    }
}

impl WindowSettings {
    pub fn toggle_policy(&self) -> TogglePolicy {
        TogglePolicy::from_clears_all(self.toggle_clears_all_minimized)
    }
}

/// Menu bar contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopSettings {
    pub title: String,
    /// Items shown left of the clock
    pub status_items: Vec<String>,
}

impl Default for DesktopSettings {
    fn default() -> Self {
        Self {
            title: "PortfolioOS".to_string(),
            status_items: vec!["Wi-Fi".to_string(), "Battery 87%".to_string()],
        }
    }
}

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootConfig {
    pub clock: ClockSettings,
    pub debug: DebugSettings,
    pub window: WindowSettings,
    pub desktop: DesktopSettings,
}
