use folio_core::AppId;
use folio_core::terminal::Interpretation;

use crate::app::DesktopState;

pub fn push_char(state: &mut DesktopState, c: char) {
    state.terminal_input.push(c);
}

pub fn backspace(state: &mut DesktopState) {
    state.terminal_input.pop();
}

/// Runs the typed line. New output snaps the view back to the newest line.
pub fn submit(state: &mut DesktopState) {
    if state.submit_terminal() != Interpretation::Ignore {
        state.reset_scroll(AppId::Terminal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::config::RootConfig;
    use folio_core::terminal::PROMPT;
    use folio_core::WindowAction;

    fn terminal_state() -> DesktopState {
        let mut state = DesktopState::new(&RootConfig::default());
        state.dispatch(WindowAction::Toggle(AppId::Terminal));
        state
    }

    #[test]
    fn test_typing_and_submit() {
        let mut state = terminal_state();
        for c in "helq".chars() {
            push_char(&mut state, c);
        }
        backspace(&mut state);
        push_char(&mut state, 'p');
        submit(&mut state);

        let history = state.terminal.history();
        assert_eq!(history[history.len() - 3], "> help");
        assert!(state.terminal_input.is_empty());
    }

    #[test]
    fn test_blank_submit_keeps_transcript() {
        let mut state = terminal_state();
        push_char(&mut state, ' ');
        submit(&mut state);
        assert_eq!(state.terminal.history().len(), 3);
        assert_eq!(state.terminal.history().last().map(String::as_str), Some(PROMPT));
    }

    #[test]
    fn test_submit_resets_scrollback() {
        let mut state = terminal_state();
        state.scroll_active(5, 20);
        assert_eq!(state.scroll(AppId::Terminal), 5);
        for c in "skills".chars() {
            push_char(&mut state, c);
        }
        submit(&mut state);
        assert_eq!(state.scroll(AppId::Terminal), 0);
    }
}
