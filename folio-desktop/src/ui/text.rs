//! Plain-text layout helpers.
//!
//! Window bodies are wrapped up front so the renderer knows their height,
//! which scrolling and line clamping depend on.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display columns `text` occupies. Wide glyphs count double.
pub fn columns(text: &str) -> usize {
    text.width()
}

/// Word-wraps `text` to `width` display columns. Words longer than a line are
/// split between characters; a glyph wider than `width` gets a line to itself.
///
/// Always returns at least one (possibly empty) line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for word in text.split_whitespace() {
        let word_width = columns(word);
        if used > 0 && used + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        if used > 0 {
            current.push(' ');
            used += 1;
        }
        if used + word_width <= width {
            current.push_str(word);
            used += word_width;
            continue;
        }

        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if used > 0 && used + w > width {
                lines.push(std::mem::take(&mut current));
                used = 0;
            }
            current.push(c);
            used += w;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Keeps the first `max_lines` lines, marking the cut with an ellipsis.
pub fn clamp(mut lines: Vec<String>, max_lines: usize) -> Vec<String> {
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }
    lines
}

/// Wraps `text` into styled lines.
pub fn paragraph(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, style)))
        .collect()
}

/// `left` and `right` on one line, `right` flush with `width`.
pub fn spread(
    left: &str,
    left_style: Style,
    right: &str,
    right_style: Style,
    width: usize,
) -> Line<'static> {
    let used = columns(left) + columns(right);
    let gap = width.saturating_sub(used).max(1);
    Line::from(vec![
        Span::styled(left.to_string(), left_style),
        Span::raw(" ".repeat(gap)),
        Span::styled(right.to_string(), right_style),
    ])
}

/// Packs `[item]` chips into as many lines as needed.
pub fn chips(items: &[String], width: usize, style: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for item in items {
        let chip = format!(" {item} ");
        let len = columns(&chip) + 1;
        if used > 0 && used + len > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        spans.push(Span::styled(chip, style));
        spans.push(Span::raw(" "));
        used += len;
    }

    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}
