use crate::app::DesktopState;
use crate::ui::layout::DesktopLayout;
use crate::ui::views::Anchor;
use crate::ui::window::scroll_extent;

/// Moves the active body `delta` lines toward newer content.
///
/// The stored scroll of a bottom-anchored body counts up from the newest
/// line, so the direction flips there.
pub fn scroll(state: &mut DesktopState, layout: &DesktopLayout, delta: i32) {
    let Some(app) = state.windows.active_app() else {
        return;
    };
    let (max, anchor) = scroll_extent(state, app, &layout.chrome());
    let delta = match anchor {
        Anchor::Top => delta,
        Anchor::Bottom => delta.saturating_neg(),
    };
    state.scroll_active(delta, max);
}
