use folio_core::about::AboutView;
use folio_core::content::PortfolioContent;
use ratatui::text::{Line, Span};

use crate::ui::{text, theme};

pub fn lines(content: &PortfolioContent, view: &AboutView, width: usize) -> Vec<Line<'static>> {
    let profile = &content.profile;
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" ( {} ) ", profile.initials()),
            theme::selected_style(),
        )),
        Line::default(),
        Line::from(Span::styled(profile.name.clone(), theme::heading_style())),
        Line::from(Span::styled(profile.title.clone(), theme::accent_style())),
        Line::default(),
    ];
    lines.extend(text::paragraph(&profile.bio, width, theme::window_style()));
    lines.push(Line::default());

    // The extended paragraphs are clamped as a single block.
    let mut extended = Vec::new();
    for (index, paragraph) in profile.extended_bio.iter().enumerate() {
        if index > 0 {
            extended.push(String::new());
        }
        extended.extend(text::wrap(paragraph, width));
    }
    if let Some(limit) = view.line_limit() {
        extended = text::clamp(extended, usize::from(limit));
    }
    lines.extend(
        extended
            .into_iter()
            .map(|line| Line::from(Span::styled(line, theme::window_style()))),
    );

    let chevron = if view.is_expanded() { "▴" } else { "▾" };
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("[{} {chevron}]  (Enter)", view.toggle_label()),
        theme::accent_style(),
    )));
    lines.push(Line::default());

    let mut links = Vec::new();
    for link in &profile.social_links {
        links.push(Span::styled(link.label.clone(), theme::muted_style()));
        links.push(Span::raw("   "));
    }
    lines.push(Line::from(links));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::about::COLLAPSED_LINE_LIMIT;
    use folio_core::content::builtin_content;

    fn rendered(view: &AboutView) -> Vec<String> {
        lines(builtin_content(), view, 60)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_collapsed_clamps_extended_bio() {
        let view = AboutView::new();
        let collapsed = rendered(&view);
        assert!(collapsed.iter().any(|l| l.contains("Read More")));
        assert!(!collapsed.iter().any(|l| l.contains("mentoring")));
        assert_eq!(
            collapsed.iter().filter(|l| l.ends_with('…')).count(),
            1,
            "exactly one truncation marker after {COLLAPSED_LINE_LIMIT} lines"
        );
    }

    #[test]
    fn test_expanded_shows_everything() {
        let mut view = AboutView::new();
        view.toggle();
        let expanded = rendered(&view);
        assert!(expanded.iter().any(|l| l.contains("Show Less")));
        assert!(expanded.iter().any(|l| l.contains("aspiring developers.")));
        assert!(expanded.len() > rendered(&AboutView::new()).len());
    }
}
