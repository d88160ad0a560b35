use chrono::{DateTime, Local};
use folio_core::about::AboutView;
use folio_core::clock::format_time;
use folio_core::config::{DesktopSettings, RootConfig};
use folio_core::content::{PortfolioContent, builtin_content};
use folio_core::portfolio::PortfolioView;
use folio_core::terminal::{Interpretation, TerminalSession};
use folio_core::window::{WindowAction, WindowState};
use folio_core::{AppId, WindowManager};

/// Everything the desktop renders, owned by the event loop.
///
/// The window manager decides which window is shown; each application keeps
/// its own view state, which survives minimizing and is reset when its
/// window is closed.
#[derive(Debug, Clone)]
pub struct DesktopState {
    pub windows: WindowManager,
    pub content: &'static PortfolioContent,
    pub settings: DesktopSettings,
    pub terminal: TerminalSession,
    /// Text typed after the terminal prompt
    pub terminal_input: String,
    pub portfolio: PortfolioView,
    pub about: AboutView,
    /// Formatted time for the menu bar and title bars
    pub clock: String,
    /// Body scroll offset per app, indexed by dock slot
    scroll: [u16; 4],
    should_quit: bool,
}

impl DesktopState {
    pub fn new(config: &RootConfig) -> Self {
        Self {
            windows: WindowManager::with_policy(config.window.toggle_policy()),
            content: builtin_content(),
            settings: config.desktop.clone(),
            terminal: TerminalSession::new(),
            terminal_input: String::new(),
            portfolio: PortfolioView::new(),
            about: AboutView::new(),
            clock: format_time(&Local::now()),
            scroll: [0; 4],
            should_quit: false,
        }
    }

    /// Applies a window action, resetting the view state of any app it closes.
    pub fn dispatch(&mut self, action: WindowAction) {
        let before = AppId::ALL.map(|app| self.windows.state_of(app));
        self.windows.apply(action);

        for (app, was) in AppId::ALL.into_iter().zip(before) {
            if was != WindowState::Closed && self.windows.state_of(app) == WindowState::Closed {
                self.reset_view(app);
            }
        }

        tracing::debug!(
            action = %action,
            active = ?self.windows.active_app(),
            minimized = ?self.windows.minimized_apps(),
            "[Desktop] Window action applied"
        );
    }

    fn reset_view(&mut self, app: AppId) {
        match app {
            AppId::Resume => {}
            AppId::Portfolio => self.portfolio = PortfolioView::new(),
            AppId::About => self.about = AboutView::new(),
            AppId::Terminal => {
                self.terminal = TerminalSession::new();
                self.terminal_input.clear();
            }
        }
        self.reset_scroll(app);
    }

    pub fn set_clock(&mut self, now: DateTime<Local>) {
        self.clock = format_time(&now);
    }

    pub fn scroll(&self, app: AppId) -> u16 {
        self.scroll[app.dock_index()]
    }

    /// Scrolls the active window body, keeping the stored value within
    /// `0..=max`. A value left over from a longer body is clamped first, so
    /// the first step in either direction moves the view.
    pub fn scroll_active(&mut self, delta: i32, max: u16) {
        if let Some(app) = self.windows.active_app() {
            let slot = &mut self.scroll[app.dock_index()];
            let next = (i32::from((*slot).min(max)) + delta).clamp(0, i32::from(max));
            *slot = u16::try_from(next).unwrap_or(max);
        }
    }

    pub fn reset_scroll(&mut self, app: AppId) {
        self.scroll[app.dock_index()] = 0;
    }

    /// Runs the typed terminal line and clears the input.
    pub fn submit_terminal(&mut self) -> Interpretation {
        let input = std::mem::take(&mut self.terminal_input);
        let interpretation = self.terminal.submit(&input, self.content);
        if interpretation != Interpretation::Ignore {
            tracing::info!(input = input.trim(), "[Terminal] Command submitted");
        }
        interpretation
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::portfolio::CategoryFilter;
    use folio_core::terminal::PROMPT;

    fn state() -> DesktopState {
        DesktopState::new(&RootConfig::default())
    }

    #[test]
    fn test_minimize_preserves_view_state() {
        let mut state = state();
        state.dispatch(WindowAction::Toggle(AppId::Terminal));
        state.terminal_input = "skills".to_string();
        state.submit_terminal();
        state.dispatch(WindowAction::Minimize(AppId::Terminal));
        state.dispatch(WindowAction::Restore(AppId::Terminal));
        assert_eq!(state.terminal.history().len(), 5);
    }

    #[test]
    fn test_close_resets_view_state() {
        let mut state = state();
        state.dispatch(WindowAction::Toggle(AppId::Portfolio));
        state
            .portfolio
            .select(CategoryFilter::from_label("Data Science"));
        state.scroll_active(4, 10);
        state.dispatch(WindowAction::Close(AppId::Portfolio));
        assert_eq!(state.portfolio.selected(), &CategoryFilter::All);
        assert_eq!(state.scroll(AppId::Portfolio), 0);
    }

    #[test]
    fn test_toggle_quirk_resets_minimized_views_it_forgets() {
        let mut state = state();
        state.dispatch(WindowAction::Toggle(AppId::About));
        state.about.toggle();
        state.dispatch(WindowAction::Minimize(AppId::About));
        state.dispatch(WindowAction::Toggle(AppId::Resume));
        state.dispatch(WindowAction::Toggle(AppId::Resume));
        assert!(state.windows.minimized_apps().is_empty());
        assert!(!state.about.is_expanded());
    }

    #[test]
    fn test_submit_terminal_clears_input() {
        let mut state = state();
        state.terminal_input = "  clear ".to_string();
        assert_eq!(state.submit_terminal(), Interpretation::Clear);
        assert!(state.terminal_input.is_empty());
        assert_eq!(state.terminal.history(), &[PROMPT.to_string()]);
    }

    #[test]
    fn test_scroll_only_moves_active_window() {
        let mut state = state();
        state.scroll_active(3, 10);
        assert_eq!(state.scroll(AppId::Resume), 0);

        state.dispatch(WindowAction::Toggle(AppId::Resume));
        state.scroll_active(3, 10);
        state.scroll_active(-5, 10);
        assert_eq!(state.scroll(AppId::Resume), 0);
        state.scroll_active(2, 10);
        assert_eq!(state.scroll(AppId::Resume), 2);
    }

    #[test]
    fn test_scroll_is_stored_clamped() {
        let mut state = state();
        state.dispatch(WindowAction::Toggle(AppId::About));
        for _ in 0..20 {
            state.scroll_active(10, 8);
        }
        assert_eq!(state.scroll(AppId::About), 8);
        state.scroll_active(-10, 8);
        assert_eq!(state.scroll(AppId::About), 0);
    }

    #[test]
    fn test_scroll_beyond_a_shrunken_body_moves_immediately() {
        let mut state = state();
        state.dispatch(WindowAction::Toggle(AppId::About));
        state.scroll_active(12, 12);
        // The body got shorter; the first step back starts from its end.
        state.scroll_active(-1, 5);
        assert_eq!(state.scroll(AppId::About), 4);
    }
}
