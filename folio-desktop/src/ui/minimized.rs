use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::layout::{DesktopLayout, RESTORE_LABEL};
use super::{text, theme};
use crate::app::DesktopState;

/// "N apps minimized [Restore]" in the top-right corner of the desktop.
pub fn draw(frame: &mut Frame, layout: &DesktopLayout, state: &DesktopState) {
    let Some(summary) = state.windows.minimized_summary() else {
        return;
    };
    if layout.indicator.height == 0 {
        return;
    }

    let button = layout.restore_button();
    let label = format!("◷ {summary} ");
    let width = u16::try_from(text::columns(&label))
        .unwrap_or(u16::MAX)
        .min(button.x - layout.indicator.x);
    let area = Rect {
        x: button.x - width,
        width,
        ..layout.indicator
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(label, theme::muted_style()))),
        area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            RESTORE_LABEL,
            theme::selected_style(),
        ))),
        button,
    );
}
