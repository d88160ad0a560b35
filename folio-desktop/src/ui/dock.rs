use folio_core::AppId;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::layout::DesktopLayout;
use super::theme;
use crate::app::DesktopState;

pub fn draw(frame: &mut Frame, layout: &DesktopLayout, state: &DesktopState) {
    if layout.dock.height == 0 {
        return;
    }

    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_style())
            .style(theme::menu_bar_style()),
        layout.dock,
    );

    for app in AppId::ALL {
        let style = if state.windows.is_active(app) {
            theme::selected_style()
        } else if state.windows.is_minimized(app) {
            theme::menu_bar_style().patch(theme::dimmed_style())
        } else {
            theme::menu_bar_style()
        };
        let lines = vec![
            Line::from(Span::raw(format!("{} F{}", app.glyph(), app.dock_index() + 1))),
            Line::from(Span::raw(app.label())),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(style),
            layout.dock_item(app),
        );
    }
}
