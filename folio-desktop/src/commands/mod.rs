//! Commands issued by the keyboard, the mouse and the dock.
//!
//! Input is first mapped to a `DesktopCommand` (see `input`), then applied to
//! the desktop state by the handler for the view it targets.

pub mod about;
pub mod input;
pub mod portfolio;
pub mod scroll;
pub mod terminal;
pub mod window;

use folio_core::WindowAction;

use crate::app::DesktopState;
use crate::ui::layout::DesktopLayout;

pub use input::{map_key, map_mouse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopCommand {
    Window(WindowAction),
    /// Scrolls the active window body by the given number of lines.
    /// Negative moves toward older content.
    Scroll(i32),
    TerminalChar(char),
    TerminalBackspace,
    TerminalSubmit,
    NextCategory,
    PreviousCategory,
    ToggleAbout,
    Quit,
}

/// `layout` is the one last drawn; scrolling needs it to know how tall the
/// active body is.
pub fn apply(state: &mut DesktopState, layout: &DesktopLayout, command: DesktopCommand) {
    match command {
        DesktopCommand::Window(action) => window::apply(state, action),
        DesktopCommand::Scroll(delta) => scroll::scroll(state, layout, delta),
        DesktopCommand::TerminalChar(c) => terminal::push_char(state, c),
        DesktopCommand::TerminalBackspace => terminal::backspace(state),
        DesktopCommand::TerminalSubmit => terminal::submit(state),
        DesktopCommand::NextCategory => portfolio::next_category(state),
        DesktopCommand::PreviousCategory => portfolio::previous_category(state),
        DesktopCommand::ToggleAbout => about::toggle(state),
        DesktopCommand::Quit => {
            tracing::info!("[Desktop] Quit requested");
            state.request_quit();
        }
    }
}
