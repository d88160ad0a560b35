use folio_core::terminal::{PROMPT, TerminalSession, builtin_commands};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::ui::{text, theme};

const CURSOR: &str = "█";

/// Rest of the first builtin command `input` is a prefix of, and what it does.
fn completion_hint(input: &str) -> Option<(&'static str, &'static str)> {
    let typed = input.trim_start().to_lowercase();
    if typed.is_empty() {
        return None;
    }
    builtin_commands()
        .iter()
        .find(|cmd| cmd.name.len() > typed.len() && cmd.name.starts_with(&typed))
        .map(|cmd| (&cmd.name[typed.len()..], cmd.description))
}

/// The transcript with the trailing prompt replaced by the line being typed.
pub fn lines(session: &TerminalSession, input: &str, width: usize) -> Vec<Line<'static>> {
    let history = session.history();
    let (past, prompt) = match history.split_last() {
        Some((last, past)) if last == PROMPT => (past, true),
        _ => (history, false),
    };

    let mut lines: Vec<Line<'static>> = past
        .iter()
        .flat_map(|entry| text::wrap(entry, width))
        .map(Line::from)
        .collect();

    if prompt {
        let typed = format!("{PROMPT}{input}");
        let mut rows = text::wrap(&typed, width.saturating_sub(1));
        // `wrap` drops the prompt's trailing space on an empty line.
        if input.trim().is_empty() {
            rows = vec![typed];
        }
        let last = rows.pop().unwrap_or_default();
        lines.extend(rows.into_iter().map(Line::from));
        let mut spans = vec![
            Span::raw(last),
            Span::styled(CURSOR, theme::terminal_style().add_modifier(Modifier::SLOW_BLINK)),
        ];
        if let Some((rest, description)) = completion_hint(input) {
            let dimmed = theme::terminal_style().patch(theme::dimmed_style());
            spans.push(Span::styled(rest, dimmed));
            spans.push(Span::styled(format!("  {description}"), dimmed));
        }
        lines.push(Line::from(spans));
    }
    lines
}
