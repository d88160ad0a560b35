use folio_core::AppId;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::theme;

const WELCOME_HEIGHT: u16 = 6;

/// Shown while no application is active.
pub fn draw(frame: &mut Frame, area: Rect) {
    let apps = AppId::ALL
        .iter()
        .map(|app| format!("{} {}", app.glyph(), app.label()))
        .collect::<Vec<_>>()
        .join("     ");

    let lines = vec![
        Line::from(Span::styled("Welcome", theme::heading_style())),
        Line::default(),
        Line::from(Span::styled(
            "Click on an app in the dock to get started",
            theme::muted_style(),
        )),
        Line::default(),
        Line::from(Span::styled(apps, theme::muted_style())),
        Line::from(Span::styled(
            "F1-F4 open · F8 restore · q quit",
            theme::muted_style().patch(theme::dimmed_style()),
        )),
    ];

    let height = WELCOME_HEIGHT.min(area.height);
    let centered = Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
}
