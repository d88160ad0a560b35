//! Window bodies, one module per application.
//!
//! A view turns state into pre-wrapped lines; the window frame decides which
//! slice of them is visible.

pub mod about;
pub mod portfolio;
pub mod resume;
pub mod terminal;

use folio_core::AppId;
use ratatui::style::Style;
use ratatui::text::Line;

use super::theme;
use crate::app::DesktopState;

/// Which end of the body stays in view when it overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Top,
    /// Follows the newest line, as a terminal does
    Bottom,
}

pub struct ViewBody {
    pub lines: Vec<Line<'static>>,
    pub anchor: Anchor,
    pub style: Style,
}

pub fn body(state: &DesktopState, app: AppId, width: usize) -> ViewBody {
    match app {
        AppId::Resume => ViewBody {
            lines: resume::lines(state.content, width),
            anchor: Anchor::Top,
            style: theme::window_style(),
        },
        AppId::Portfolio => ViewBody {
            lines: portfolio::lines(state.content, &state.portfolio, width),
            anchor: Anchor::Top,
            style: theme::window_style(),
        },
        AppId::About => ViewBody {
            lines: about::lines(state.content, &state.about, width),
            anchor: Anchor::Top,
            style: theme::window_style(),
        },
        AppId::Terminal => ViewBody {
            lines: terminal::lines(&state.terminal, &state.terminal_input, width),
            anchor: Anchor::Bottom,
            style: theme::terminal_style(),
        },
    }
}
