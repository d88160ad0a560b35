//! Screen geometry shared by drawing and mouse hit-testing.
//!
//! Everything here is a pure function of the terminal area, so a click can be
//! resolved against the same rectangles the last frame was drawn into.

use folio_core::AppId;
use ratatui::layout::Rect;

pub const DOCK_ITEM_WIDTH: u16 = 12;
pub const DOCK_HEIGHT: u16 = 4;
const DOCK_WIDTH: u16 = DOCK_ITEM_WIDTH * 4 + 2;
const WINDOW_MAX_WIDTH: u16 = 96;
pub const RESTORE_LABEL: &str = "[Restore]";

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopLayout {
    pub menu_bar: Rect,
    /// Area between the menu bar and the dock
    pub desktop: Rect,
    pub dock: Rect,
    /// Where the active window is drawn
    pub window: Rect,
    /// Top-right row used by the minimized indicator
    pub indicator: Rect,
}

impl DesktopLayout {
    pub fn new(area: Rect) -> Self {
        let menu_height = area.height.min(1);
        let menu_bar = Rect {
            height: menu_height,
            ..area
        };

        let dock_height = if area.height > DOCK_HEIGHT + 2 {
            DOCK_HEIGHT
        } else {
            0
        };
        let dock_width = DOCK_WIDTH.min(area.width);
        let dock = Rect {
            x: area.x + (area.width - dock_width) / 2,
            y: area.y + area.height - dock_height,
            width: dock_width,
            height: dock_height,
        };

        let desktop = Rect {
            x: area.x,
            y: area.y + menu_height,
            width: area.width,
            height: area.height.saturating_sub(menu_height + dock_height),
        };

        let indicator = Rect {
            height: desktop.height.min(1),
            ..desktop
        };

        let window_width = desktop.width.saturating_sub(4).min(WINDOW_MAX_WIDTH);
        let window = Rect {
            x: desktop.x + (desktop.width - window_width) / 2,
            y: desktop.y + indicator.height,
            width: window_width,
            height: desktop.height.saturating_sub(indicator.height),
        };

        Self {
            menu_bar,
            desktop,
            dock,
            window,
            indicator,
        }
    }

    /// Clickable area of one dock item, inside the dock border.
    pub fn dock_item(&self, app: AppId) -> Rect {
        let x = self.dock.x + 1 + DOCK_ITEM_WIDTH * app.dock_index() as u16;
        let right = self.dock.x + self.dock.width.saturating_sub(1);
        Rect {
            x: x.min(right),
            y: self.dock.y + self.dock.height.min(1),
            width: DOCK_ITEM_WIDTH.min(right.saturating_sub(x)),
            height: self.dock.height.saturating_sub(2),
        }
    }

    pub fn dock_hit(&self, column: u16, row: u16) -> Option<AppId> {
        AppId::ALL
            .into_iter()
            .find(|app| contains(self.dock_item(*app), column, row))
    }

    /// The `[Restore]` button, flush right in the indicator row.
    pub fn restore_button(&self) -> Rect {
        let width = (RESTORE_LABEL.len() as u16).min(self.indicator.width);
        Rect {
            x: self.indicator.x + self.indicator.width.saturating_sub(width + 1),
            width,
            ..self.indicator
        }
    }

    pub fn chrome(&self) -> WindowChrome {
        WindowChrome::new(self.window)
    }
}

/// A title-bar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeButton {
    Close,
    Minimize,
    Maximize,
}

impl ChromeButton {
    pub const ALL: [ChromeButton; 3] = [
        ChromeButton::Close,
        ChromeButton::Minimize,
        ChromeButton::Maximize,
    ];
}

/// Rectangles inside a bordered window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowChrome {
    pub outer: Rect,
    pub title_bar: Rect,
    pub body: Rect,
}

impl WindowChrome {
    pub fn new(outer: Rect) -> Self {
        let inner_width = outer.width.saturating_sub(2);
        let title_bar = Rect {
            x: outer.x + outer.width.min(1),
            y: outer.y + outer.height.min(1),
            width: inner_width,
            height: outer.height.saturating_sub(2).min(1),
        };
        let body = Rect {
            x: title_bar.x,
            y: title_bar.y + title_bar.height,
            width: inner_width,
            height: outer.height.saturating_sub(2 + title_bar.height),
        };
        Self {
            outer,
            title_bar,
            body,
        }
    }

    /// Column offset of a button's dot within the title bar.
    pub fn button_offset(button: ChromeButton) -> u16 {
        match button {
            ChromeButton::Close => 1,
            ChromeButton::Minimize => 4,
            ChromeButton::Maximize => 7,
        }
    }

    pub fn button(&self, button: ChromeButton) -> Rect {
        let x = self.title_bar.x + Self::button_offset(button);
        Rect {
            x,
            y: self.title_bar.y,
            width: 2.min(self.title_bar.width.saturating_sub(x - self.title_bar.x)),
            height: self.title_bar.height,
        }
    }

    pub fn button_hit(&self, column: u16, row: u16) -> Option<ChromeButton> {
        ChromeButton::ALL
            .into_iter()
            .find(|button| contains(self.button(*button), column, row))
    }
}
