use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::theme;
use crate::app::DesktopState;

pub fn draw(frame: &mut Frame, area: Rect, state: &DesktopState) {
    if area.height == 0 {
        return;
    }

    let mut left = vec![Span::raw(" ")];
    for color in [theme::CLOSE_COLOR, theme::MINIMIZE_COLOR, theme::MAXIMIZE_COLOR] {
        left.push(Span::styled("●", Style::default().fg(color)));
        left.push(Span::raw(" "));
    }
    left.push(Span::raw("  "));
    left.push(Span::styled(
        state.settings.title.clone(),
        theme::heading_style(),
    ));

    let mut right: Vec<Span> = state
        .settings
        .status_items
        .iter()
        .map(|item| Span::raw(format!("{item}   ")))
        .collect();
    right.push(Span::styled(format!("{} ", state.clock), theme::heading_style()));

    let used: usize = left.iter().chain(right.iter()).map(Span::width).sum();
    let gap = usize::from(area.width).saturating_sub(used).max(1);
    let mut spans = left;
    spans.push(Span::raw(" ".repeat(gap)));
    spans.extend(right);

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(theme::menu_bar_style()),
        area,
    );
}
