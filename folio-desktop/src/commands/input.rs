//! Key and mouse bindings.
//!
//! Function keys work everywhere. Letter shortcuts are disabled while the
//! Terminal has focus, since there they are typed into the prompt.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use folio_core::{AppId, WindowAction};

use super::DesktopCommand;
use super::window::for_active;
use crate::app::DesktopState;
use crate::ui::layout::{ChromeButton, DesktopLayout, contains};

const PAGE: i32 = 10;
const WHEEL: i32 = 3;

fn focused(state: &DesktopState) -> Option<AppId> {
    state
        .windows
        .active_app()
        .filter(|app| state.windows.is_visible(*app))
}

pub fn map_key(state: &DesktopState, key: KeyEvent) -> Option<DesktopCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(DesktopCommand::Quit);
    }

    let command = match key.code {
        KeyCode::F(n @ 1..=4) => AppId::from_dock_index(usize::from(n - 1))
            .map(|app| DesktopCommand::Window(WindowAction::Toggle(app))),
        KeyCode::F(5) => for_active(state, WindowAction::Close).map(DesktopCommand::Window),
        KeyCode::F(6) => for_active(state, WindowAction::Minimize).map(DesktopCommand::Window),
        KeyCode::F(7) => for_active(state, WindowAction::Maximize).map(DesktopCommand::Window),
        KeyCode::F(8) => Some(DesktopCommand::Window(WindowAction::RestoreFirst)),
        KeyCode::Up => Some(DesktopCommand::Scroll(-1)),
        KeyCode::Down => Some(DesktopCommand::Scroll(1)),
        KeyCode::PageUp => Some(DesktopCommand::Scroll(-PAGE)),
        KeyCode::PageDown => Some(DesktopCommand::Scroll(PAGE)),
        _ => None,
    };
    if command.is_some() {
        return command;
    }

    match focused(state) {
        Some(AppId::Terminal) => terminal_key(key),
        Some(AppId::Portfolio) => match key.code {
            KeyCode::Left => Some(DesktopCommand::PreviousCategory),
            KeyCode::Right => Some(DesktopCommand::NextCategory),
            _ => shortcut(state, key),
        },
        Some(AppId::About) => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(DesktopCommand::ToggleAbout),
            _ => shortcut(state, key),
        },
        _ => shortcut(state, key),
    }
}

fn terminal_key(key: KeyEvent) -> Option<DesktopCommand> {
    match key.code {
        KeyCode::Enter => Some(DesktopCommand::TerminalSubmit),
        KeyCode::Backspace => Some(DesktopCommand::TerminalBackspace),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(DesktopCommand::TerminalChar(c))
        }
        _ => None,
    }
}

fn shortcut(state: &DesktopState, key: KeyEvent) -> Option<DesktopCommand> {
    let KeyCode::Char(c) = key.code else {
        return None;
    };
    match c {
        '1'..='4' => AppId::from_dock_index(c as usize - '1' as usize)
            .map(|app| DesktopCommand::Window(WindowAction::Toggle(app))),
        'x' => for_active(state, WindowAction::Close).map(DesktopCommand::Window),
        'm' => for_active(state, WindowAction::Minimize).map(DesktopCommand::Window),
        'r' => Some(DesktopCommand::Window(WindowAction::RestoreFirst)),
        'q' => Some(DesktopCommand::Quit),
        _ => None,
    }
}

/// Resolves a mouse event against the layout of the last drawn frame.
pub fn map_mouse(
    state: &DesktopState,
    layout: &DesktopLayout,
    mouse: MouseEvent,
) -> Option<DesktopCommand> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::ScrollUp => return Some(DesktopCommand::Scroll(-WHEEL)),
        MouseEventKind::ScrollDown => return Some(DesktopCommand::Scroll(WHEEL)),
        MouseEventKind::Down(MouseButton::Left) => {}
        _ => return None,
    }

    if let Some(app) = layout.dock_hit(column, row) {
        return Some(DesktopCommand::Window(WindowAction::Toggle(app)));
    }

    if !state.windows.minimized_apps().is_empty() && contains(layout.restore_button(), column, row)
    {
        return Some(DesktopCommand::Window(WindowAction::RestoreFirst));
    }

    let app = focused(state)?;
    let action = match layout.chrome().button_hit(column, row)? {
        ChromeButton::Close => WindowAction::Close(app),
        ChromeButton::Minimize => WindowAction::Minimize(app),
        ChromeButton::Maximize => WindowAction::Maximize(app),
    };
    Some(DesktopCommand::Window(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::config::RootConfig;
    use ratatui::layout::Rect;

    fn state_with(app: Option<AppId>) -> DesktopState {
        let mut state = DesktopState::new(&RootConfig::default());
        if let Some(app) = app {
            state.dispatch(WindowAction::Toggle(app));
        }
        state
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_function_keys_toggle_dock_apps() {
        let state = state_with(None);
        assert_eq!(
            map_key(&state, press(KeyCode::F(3))),
            Some(DesktopCommand::Window(WindowAction::Toggle(AppId::About)))
        );
        assert_eq!(map_key(&state, press(KeyCode::F(9))), None);
    }

    #[test]
    fn test_window_keys_need_an_active_window() {
        let state = state_with(None);
        assert_eq!(map_key(&state, press(KeyCode::F(5))), None);
        assert_eq!(map_key(&state, press(KeyCode::Char('x'))), None);

        let state = state_with(Some(AppId::Resume));
        assert_eq!(
            map_key(&state, press(KeyCode::Char('x'))),
            Some(DesktopCommand::Window(WindowAction::Close(AppId::Resume)))
        );
        assert_eq!(
            map_key(&state, press(KeyCode::F(7))),
            Some(DesktopCommand::Window(WindowAction::Maximize(AppId::Resume)))
        );
    }

    #[test]
    fn test_terminal_captures_letters() {
        let state = state_with(Some(AppId::Terminal));
        assert_eq!(
            map_key(&state, press(KeyCode::Char('q'))),
            Some(DesktopCommand::TerminalChar('q'))
        );
        assert_eq!(
            map_key(&state, press(KeyCode::Enter)),
            Some(DesktopCommand::TerminalSubmit)
        );
        // Function keys still reach the window manager.
        assert_eq!(
            map_key(&state, press(KeyCode::F(6))),
            Some(DesktopCommand::Window(WindowAction::Minimize(AppId::Terminal)))
        );
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let state = state_with(Some(AppId::Terminal));
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&state, key), Some(DesktopCommand::Quit));
    }

    #[test]
    fn test_view_specific_keys() {
        let state = state_with(Some(AppId::Portfolio));
        assert_eq!(
            map_key(&state, press(KeyCode::Right)),
            Some(DesktopCommand::NextCategory)
        );
        let state = state_with(Some(AppId::About));
        assert_eq!(
            map_key(&state, press(KeyCode::Char(' '))),
            Some(DesktopCommand::ToggleAbout)
        );
        let state = state_with(Some(AppId::Resume));
        assert_eq!(map_key(&state, press(KeyCode::Left)), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let state = state_with(None);
        let mut key = press(KeyCode::F(1));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(&state, key), None);
    }

    #[test]
    fn test_mouse_clicks() {
        let layout = DesktopLayout::new(Rect::new(0, 0, 100, 40));
        let mut state = state_with(Some(AppId::About));

        let dock = layout.dock_item(AppId::Terminal);
        assert_eq!(
            map_mouse(&state, &layout, click(dock.x, dock.y)),
            Some(DesktopCommand::Window(WindowAction::Toggle(AppId::Terminal)))
        );

        let close = layout.chrome().button(ChromeButton::Close);
        assert_eq!(
            map_mouse(&state, &layout, click(close.x, close.y)),
            Some(DesktopCommand::Window(WindowAction::Close(AppId::About)))
        );

        let restore = layout.restore_button();
        assert_eq!(map_mouse(&state, &layout, click(restore.x, restore.y)), None);
        state.dispatch(WindowAction::Minimize(AppId::About));
        assert_eq!(
            map_mouse(&state, &layout, click(restore.x, restore.y)),
            Some(DesktopCommand::Window(WindowAction::RestoreFirst))
        );
        // With nothing active the title bar is empty desktop.
        assert_eq!(map_mouse(&state, &layout, click(close.x, close.y)), None);
    }
}
