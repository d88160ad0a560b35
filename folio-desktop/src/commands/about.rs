use crate::app::DesktopState;

pub fn toggle(state: &mut DesktopState) {
    state.about.toggle();
    tracing::debug!(expanded = state.about.is_expanded(), "[About] Toggled");
}
