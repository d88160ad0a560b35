use folio_core::content::PortfolioContent;
use ratatui::layout::Alignment;
use ratatui::text::{Line, Span};

use crate::ui::{text, theme};

fn section(lines: &mut Vec<Line<'static>>, title: &str) {
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(title.to_string(), theme::heading_style())));
}

pub fn lines(content: &PortfolioContent, width: usize) -> Vec<Line<'static>> {
    let profile = &content.profile;
    let mut lines = vec![
        Line::from(Span::styled(profile.name.clone(), theme::heading_style()))
            .alignment(Alignment::Center),
        Line::from(Span::styled(profile.title.clone(), theme::muted_style()))
            .alignment(Alignment::Center),
    ];
    let contact = format!(
        "✉ {}  ☎ {}  ⌂ {}",
        profile.email, profile.phone, profile.location
    );
    lines.extend(
        text::paragraph(&contact, width, theme::muted_style())
            .into_iter()
            .map(|line| line.alignment(Alignment::Center)),
    );

    section(&mut lines, "Experience");
    for job in &content.experience {
        lines.push(text::spread(
            &job.position,
            theme::heading_style(),
            &job.duration,
            theme::muted_style(),
            width,
        ));
        lines.push(Line::from(Span::styled(
            job.company.clone(),
            theme::accent_style(),
        )));
        lines.extend(text::paragraph(
            &job.description,
            width,
            theme::muted_style(),
        ));
        lines.push(Line::default());
    }

    section(&mut lines, "Skills");
    lines.push(Line::from("Technical Skills"));
    lines.extend(text::chips(&profile.skills, width, theme::chip_style()));

    section(&mut lines, "Education");
    for school in &content.education {
        lines.push(text::spread(
            &school.degree,
            theme::heading_style(),
            &school.year,
            theme::muted_style(),
            width,
        ));
        lines.push(Line::from(Span::styled(
            school.institution.clone(),
            theme::accent_style(),
        )));
        lines.extend(text::paragraph(
            &school.description,
            width,
            theme::muted_style(),
        ));
    }
    lines
}
