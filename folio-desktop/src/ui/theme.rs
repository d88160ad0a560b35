//! Centralized palette used by every part of the desktop.

use ratatui::style::{Color, Modifier, Style};

pub fn desktop_style() -> Style {
    Style::default().bg(Color::Rgb(238, 242, 255)).fg(Color::Rgb(55, 65, 81))
}

pub fn menu_bar_style() -> Style {
    Style::default().bg(Color::Rgb(249, 250, 251)).fg(Color::Rgb(55, 65, 81))
}

pub fn window_style() -> Style {
    Style::default().bg(Color::White).fg(Color::Rgb(55, 65, 81))
}

pub fn title_bar_style() -> Style {
    Style::default().bg(Color::Rgb(209, 213, 219)).fg(Color::Rgb(55, 65, 81))
}

pub fn border_style() -> Style {
    Style::default().fg(Color::Rgb(156, 163, 175))
}

pub fn heading_style() -> Style {
    Style::default()
        .fg(Color::Rgb(31, 41, 55))
        .add_modifier(Modifier::BOLD)
}

pub fn accent_style() -> Style {
    Style::default().fg(Color::Rgb(37, 99, 235))
}

pub fn muted_style() -> Style {
    Style::default().fg(Color::Rgb(107, 114, 128))
}

pub fn chip_style() -> Style {
    Style::default().bg(Color::Rgb(219, 234, 254)).fg(Color::Rgb(30, 64, 175))
}

pub fn selected_style() -> Style {
    Style::default()
        .bg(Color::Rgb(37, 99, 235))
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn dimmed_style() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

pub fn terminal_style() -> Style {
    Style::default().bg(Color::Black).fg(Color::Rgb(74, 222, 128))
}

pub const CLOSE_COLOR: Color = Color::Rgb(239, 68, 68);
pub const MINIMIZE_COLOR: Color = Color::Rgb(234, 179, 8);
pub const MAXIMIZE_COLOR: Color = Color::Rgb(34, 197, 94);
