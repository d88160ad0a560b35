use folio_core::window::WindowState;
use folio_core::{AppId, WindowAction};

use crate::app::DesktopState;

pub fn apply(state: &mut DesktopState, action: WindowAction) {
    if let WindowAction::Maximize(app) = action {
        tracing::debug!(app = %app, "[Desktop] Maximize has no effect");
    }
    state.dispatch(action);
}

/// The action a keyboard shortcut like "close" targets: the active window.
pub fn for_active(
    state: &DesktopState,
    action: fn(AppId) -> WindowAction,
) -> Option<WindowAction> {
    state
        .windows
        .active_app()
        .filter(|app| state.windows.state_of(*app) == WindowState::Active)
        .map(action)
}
