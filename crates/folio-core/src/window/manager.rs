//! The window manager state machine.

use serde::{Deserialize, Serialize};

use super::action::WindowAction;
use crate::app::AppId;

/// Per-application window state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    Closed,
    Active,
    Minimized,
}

/// What toggling the active app closed does to the minimized set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TogglePolicy {
    /// Every minimized app is forgotten along with the toggled one.
    #[default]
    ClearAllMinimized,
    /// Only the toggled app is affected.
    ClearToggledOnly,
}

impl TogglePolicy {
    /// Maps the `window.toggle_clears_all_minimized` config flag.
    pub fn from_clears_all(clears_all: bool) -> Self {
        if clears_all {
            TogglePolicy::ClearAllMinimized
        } else {
            TogglePolicy::ClearToggledOnly
        }
    }
}

/// Tracks which application is in the foreground and which are minimized.
///
/// Invariant: `active_app`, when set, is never in `minimized_apps`. Every
/// public transition preserves it.
///
/// `minimized_apps` keeps insertion order so that [`WindowManager::restore_first`]
/// restores the app that was minimized earliest.
///
/// Serialize-only: a state is reached through transitions, never loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WindowManager {
    active_app: Option<AppId>,
    minimized_apps: Vec<AppId>,
    policy: TogglePolicy,
}

impl WindowManager {
    /// Creates a manager with every app closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager with every app closed and the given toggle policy.
    pub fn with_policy(policy: TogglePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// The foreground application, if any.
    pub fn active_app(&self) -> Option<AppId> {
        self.active_app
    }

    /// Minimized applications, earliest first.
    pub fn minimized_apps(&self) -> &[AppId] {
        &self.minimized_apps
    }

    pub fn is_minimized(&self, app: AppId) -> bool {
        self.minimized_apps.contains(&app)
    }

    pub fn is_active(&self, app: AppId) -> bool {
        self.active_app == Some(app)
    }

    /// Whether the app's window should be drawn.
    pub fn is_visible(&self, app: AppId) -> bool {
        self.is_active(app) && !self.is_minimized(app)
    }

    pub fn state_of(&self, app: AppId) -> WindowState {
        if self.is_active(app) {
            WindowState::Active
        } else if self.is_minimized(app) {
            WindowState::Minimized
        } else {
            WindowState::Closed
        }
    }

    /// Dock click.
    ///
    /// Toggling the active app closes it. Under [`TogglePolicy::ClearAllMinimized`]
    /// this also empties the minimized set. Toggling any other app brings it to
    /// the foreground, taking it out of the minimized set if it was there.
    pub fn toggle(&mut self, app: AppId) {
        if self.active_app == Some(app) {
            self.active_app = None;
            match self.policy {
                TogglePolicy::ClearAllMinimized => self.minimized_apps.clear(),
                TogglePolicy::ClearToggledOnly => self.remove_minimized(app),
            }
        } else {
            self.active_app = Some(app);
            self.remove_minimized(app);
        }
    }

    /// Hides `app` without closing it. Other minimized apps are untouched.
    pub fn minimize(&mut self, app: AppId) {
        if !self.minimized_apps.contains(&app) {
            self.minimized_apps.push(app);
        }
        if self.active_app == Some(app) {
            self.active_app = None;
        }
    }

    /// Brings a minimized (or closed) app back to the foreground.
    pub fn restore(&mut self, app: AppId) {
        self.remove_minimized(app);
        self.active_app = Some(app);
    }

    /// Restores the earliest minimized app and returns it.
    pub fn restore_first(&mut self) -> Option<AppId> {
        let first = self.minimized_apps.first().copied()?;
        self.restore(first);
        Some(first)
    }

    pub fn close(&mut self, app: AppId) {
        if self.active_app == Some(app) {
            self.active_app = None;
        }
        self.remove_minimized(app);
    }

    /// Windows always fill the desktop; there is nothing to maximize.
    pub fn maximize(&mut self, _app: AppId) {}

    /// Applies a [`WindowAction`] in place.
    pub fn apply(&mut self, action: WindowAction) {
        match action {
            WindowAction::Toggle(app) => self.toggle(app),
            WindowAction::Minimize(app) => self.minimize(app),
            WindowAction::Maximize(app) => self.maximize(app),
            WindowAction::Restore(app) => self.restore(app),
            WindowAction::Close(app) => self.close(app),
            WindowAction::RestoreFirst => {
                self.restore_first();
            }
        }
    }

    /// Text for the minimized indicator, or `None` when nothing is minimized.
    pub fn minimized_summary(&self) -> Option<String> {
        match self.minimized_apps.len() {
            0 => None,
            1 => Some("1 app minimized".to_string()),
            n => Some(format!("{n} apps minimized")),
        }
    }

    fn remove_minimized(&mut self, app: AppId) {
        self.minimized_apps.retain(|minimized| *minimized != app);
    }
}
