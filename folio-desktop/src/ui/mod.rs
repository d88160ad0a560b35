//! Desktop rendering.
//!
//! `draw` is the only entry point; it is a pure function of `DesktopState`
//! and the frame size, which keeps it testable on a `TestBackend`.

pub mod dock;
pub mod layout;
pub mod menu_bar;
pub mod minimized;
pub mod text;
pub mod theme;
pub mod views;
pub mod welcome;
pub mod window;

use ratatui::Frame;
use ratatui::widgets::Block;

use crate::app::DesktopState;
use layout::DesktopLayout;

pub fn draw(frame: &mut Frame, state: &DesktopState) {
    let layout = DesktopLayout::new(frame.size());

    frame.render_widget(Block::default().style(theme::desktop_style()), frame.size());
    menu_bar::draw(frame, layout.menu_bar, state);

    match state.windows.active_app() {
        Some(app) if state.windows.is_visible(app) => {
            window::draw(frame, &layout.chrome(), app, state);
        }
        Some(_) => {}
        None => welcome::draw(frame, layout.desktop),
    }

    minimized::draw(frame, &layout, state);
    dock::draw(frame, &layout, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::AppId;
    use folio_core::config::RootConfig;
    use folio_core::window::WindowAction;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &DesktopState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("test backend");
        terminal.draw(|frame| draw(frame, state)).expect("draw");
        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_empty_desktop_shows_welcome() {
        let state = DesktopState::new(&RootConfig::default());
        let screen = render(&state);
        assert!(screen.contains("PortfolioOS"));
        assert!(screen.contains("Welcome"));
        assert!(screen.contains("Battery 87%"));
        assert!(screen.contains("Terminal"));
        assert!(!screen.contains("Restore"));
    }

    #[test]
    fn test_active_window_replaces_welcome() {
        let mut state = DesktopState::new(&RootConfig::default());
        state.dispatch(WindowAction::Toggle(AppId::About));
        let screen = render(&state);
        assert!(screen.contains("About Me"));
        assert!(screen.contains("Read More"));
        assert!(!screen.contains("Click on an app"));
    }

    #[test]
    fn test_minimized_indicator() {
        let mut state = DesktopState::new(&RootConfig::default());
        state.dispatch(WindowAction::Toggle(AppId::Terminal));
        state.dispatch(WindowAction::Minimize(AppId::Terminal));
        let screen = render(&state);
        assert!(screen.contains("1 app minimized"));
        assert!(screen.contains("[Restore]"));
        assert!(screen.contains("Welcome"));
    }

    #[test]
    fn test_custom_menu_bar() {
        let mut config = RootConfig::default();
        config.desktop.title = "FolioBox".to_string();
        config.desktop.status_items = vec!["VPN".to_string()];
        let state = DesktopState::new(&config);
        let screen = render(&state);
        let menu = screen.lines().next().unwrap_or_default();
        assert!(menu.contains("FolioBox"));
        assert!(menu.contains("VPN"));
        assert!(!menu.contains("Wi-Fi"));
    }
}
