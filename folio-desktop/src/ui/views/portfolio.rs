use folio_core::content::PortfolioContent;
use folio_core::portfolio::{PortfolioView, categories};
use ratatui::layout::Alignment;
use ratatui::text::{Line, Span};

use crate::ui::{text, theme};

/// Category buttons, wrapped like the chips below them.
fn category_row(content: &PortfolioContent, view: &PortfolioView, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans = Vec::new();
    let mut used = 0;

    for category in categories(&content.projects) {
        let label = format!(" {category} ");
        let len = text::columns(&label) + 1;
        if used > 0 && used + len > width {
            lines.push(Line::from(std::mem::take(&mut spans)).alignment(Alignment::Center));
            used = 0;
        }
        let style = if view.selected().label() == category {
            theme::selected_style()
        } else {
            theme::chip_style()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        used += len;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans).alignment(Alignment::Center));
    }
    lines
}

pub fn lines(content: &PortfolioContent, view: &PortfolioView, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("My Portfolio", theme::heading_style()))
            .alignment(Alignment::Center),
        Line::from(Span::styled(
            "Showcasing my best work and projects",
            theme::muted_style(),
        ))
        .alignment(Alignment::Center),
        Line::default(),
    ];
    lines.extend(category_row(content, view, width));
    lines.push(
        Line::from(Span::styled("◀ ▶ change category", theme::muted_style()))
            .alignment(Alignment::Center),
    );

    for project in view.visible_projects(&content.projects) {
        lines.push(Line::default());
        lines.push(text::spread(
            &project.name,
            theme::heading_style(),
            &format!("[{}]", project.category),
            theme::muted_style(),
            width,
        ));
        lines.extend(text::paragraph(
            &project.description,
            width,
            theme::muted_style(),
        ));
        lines.extend(text::chips(&project.technologies, width, theme::chip_style()));
        lines.push(Line::from(vec![
            Span::styled("↗ Live Demo ", theme::accent_style()),
            Span::styled(project.demo.clone(), theme::muted_style()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("⌥ Code ", theme::accent_style()),
            Span::styled(project.github.clone(), theme::muted_style()),
        ]));
    }
    lines
}
