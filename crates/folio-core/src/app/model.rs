//! The fixed set of desktop applications.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Identifies one of the four desktop applications.
///
/// The set is closed: every window operation is total over these variants.
/// Variant order is dock order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AppId {
    Resume,
    Portfolio,
    About,
    Terminal,
}

impl AppId {
    /// All applications in dock order.
    pub const ALL: [AppId; 4] = [
        AppId::Resume,
        AppId::Portfolio,
        AppId::About,
        AppId::Terminal,
    ];

    /// Label under the dock icon.
    pub fn label(self) -> &'static str {
        match self {
            AppId::Resume => "Resume",
            AppId::Portfolio => "Portfolio",
            AppId::About => "About",
            AppId::Terminal => "Terminal",
        }
    }

    /// Title shown in the window's title bar.
    pub fn window_title(self) -> &'static str {
        match self {
            AppId::Resume => "Resume",
            AppId::Portfolio => "Portfolio",
            AppId::About => "About Me",
            AppId::Terminal => "Terminal",
        }
    }

    /// Single-cell glyph used for the dock and title bar icons.
    pub fn glyph(self) -> &'static str {
        match self {
            AppId::Resume => "≡",
            AppId::Portfolio => "▤",
            AppId::About => "☺",
            AppId::Terminal => "›",
        }
    }

    /// Zero-based dock slot.
    pub fn dock_index(self) -> usize {
        match self {
            AppId::Resume => 0,
            AppId::Portfolio => 1,
            AppId::About => 2,
            AppId::Terminal => 3,
        }
    }

    /// Inverse of [`AppId::dock_index`].
    pub fn from_dock_index(index: usize) -> Option<AppId> {
        Self::ALL.get(index).copied()
    }
}
