//! Window actions and the pure reducer over [`WindowManager`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::manager::WindowManager;
use crate::app::AppId;

/// A discrete request issued by the dock, a title bar, or the minimized indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "app", rename_all = "snake_case")]
pub enum WindowAction {
    /// Dock click.
    Toggle(AppId),
    /// Yellow title-bar button.
    Minimize(AppId),
    /// Green title-bar button.
    Maximize(AppId),
    Restore(AppId),
    /// Red title-bar button.
    Close(AppId),
    /// "Restore" on the minimized indicator.
    RestoreFirst,
}

impl fmt::Display for WindowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowAction::Toggle(app) => write!(f, "toggle({app})"),
            WindowAction::Minimize(app) => write!(f, "minimize({app})"),
            WindowAction::Maximize(app) => write!(f, "maximize({app})"),
            WindowAction::Restore(app) => write!(f, "restore({app})"),
            WindowAction::Close(app) => write!(f, "close({app})"),
            WindowAction::RestoreFirst => write!(f, "restore_first"),
        }
    }
}

/// Applies `action` to `state` and returns the resulting state.
///
/// `state` is left untouched.
pub fn reduce(state: &WindowManager, action: WindowAction) -> WindowManager {
    let mut next = state.clone();
    next.apply(action);
    next
}
