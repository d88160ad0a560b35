use folio_core::AppId;
use ratatui::Frame;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};

use super::layout::{ChromeButton, WindowChrome};
use super::{text, theme};
use super::views::{self, Anchor, ViewBody};
use crate::app::DesktopState;

/// Horizontal padding inside the window body.
const BODY_PADDING: u16 = 1;

fn button_color(button: ChromeButton) -> Style {
    let color = match button {
        ChromeButton::Close => theme::CLOSE_COLOR,
        ChromeButton::Minimize => theme::MINIMIZE_COLOR,
        ChromeButton::Maximize => theme::MAXIMIZE_COLOR,
    };
    theme::title_bar_style().fg(color)
}

fn title_bar(app: AppId, clock: &str, width: u16) -> Line<'static> {
    let mut spans = Vec::new();
    let mut used = 0;
    for button in ChromeButton::ALL {
        let offset = usize::from(WindowChrome::button_offset(button));
        spans.push(Span::raw(" ".repeat(offset - used)));
        spans.push(Span::styled("●", button_color(button)));
        used = offset + 1;
    }

    let title = format!("   {} {}", app.glyph(), app.window_title());
    used += text::columns(&title);
    spans.push(Span::styled(title, theme::heading_style()));

    let clock = format!("{clock} ");
    let gap = usize::from(width).saturating_sub(used + text::columns(&clock));
    spans.push(Span::raw(" ".repeat(gap)));
    spans.push(Span::styled(clock, theme::muted_style()));
    Line::from(spans)
}

/// Largest scroll that still changes what a body of `total` lines shows.
pub fn max_scroll(total: usize, height: u16) -> u16 {
    u16::try_from(total.saturating_sub(usize::from(height))).unwrap_or(u16::MAX)
}

/// Turns a stored scroll into the offset actually shown.
///
/// Scrolls past the end are clamped. Bottom-anchored bodies count the
/// scroll upward from the newest line.
pub fn visible_offset(total: usize, height: u16, scroll: u16, anchor: Anchor) -> u16 {
    let max = max_scroll(total, height);
    let scroll = scroll.min(max);
    match anchor {
        Anchor::Top => scroll,
        Anchor::Bottom => max - scroll,
    }
}

fn wrapped_body(state: &DesktopState, app: AppId, chrome: &WindowChrome) -> ViewBody {
    let inner_width = chrome.body.width.saturating_sub(BODY_PADDING * 2);
    views::body(state, app, usize::from(inner_width))
}

/// How far `app`'s body can scroll inside `chrome`, and which end it keeps.
pub fn scroll_extent(state: &DesktopState, app: AppId, chrome: &WindowChrome) -> (u16, Anchor) {
    let body = wrapped_body(state, app, chrome);
    (max_scroll(body.lines.len(), chrome.body.height), body.anchor)
}

/// First body line shown for `app` inside `chrome`.
pub fn body_offset(state: &DesktopState, app: AppId, chrome: &WindowChrome) -> u16 {
    let body = wrapped_body(state, app, chrome);
    visible_offset(body.lines.len(), chrome.body.height, state.scroll(app), body.anchor)
}

pub fn draw(frame: &mut Frame, chrome: &WindowChrome, app: AppId, state: &DesktopState) {
    if chrome.outer.width < 12 || chrome.outer.height < 4 {
        return;
    }

    frame.render_widget(Clear, chrome.outer);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_style())
            .style(theme::window_style()),
        chrome.outer,
    );
    frame.render_widget(
        Paragraph::new(title_bar(app, &state.clock, chrome.title_bar.width))
            .style(theme::title_bar_style()),
        chrome.title_bar,
    );

    let body = wrapped_body(state, app, chrome);
    let offset = visible_offset(
        body.lines.len(),
        chrome.body.height,
        state.scroll(app),
        body.anchor,
    );
    frame.render_widget(
        Paragraph::new(body.lines)
            .style(body.style)
            .block(Block::default().padding(Padding::horizontal(BODY_PADDING)))
            .scroll((offset, 0)),
        chrome.body,
    );
}
