use crate::app::DesktopState;

pub fn next_category(state: &mut DesktopState) {
    state.portfolio.select_next(&state.content.projects);
    tracing::debug!(category = %state.portfolio.selected(), "[Portfolio] Category selected");
}

pub fn previous_category(state: &mut DesktopState) {
    state.portfolio.select_previous(&state.content.projects);
    tracing::debug!(category = %state.portfolio.selected(), "[Portfolio] Category selected");
}
