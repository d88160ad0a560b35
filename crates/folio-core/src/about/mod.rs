//! State of the About window.

/// Number of lines the extended bio is clamped to while collapsed.
pub const COLLAPSED_LINE_LIMIT: u16 = 3;

/// Expand/collapse flag for the extended bio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AboutView {
    expanded: bool,
}

impl AboutView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Text of the expand/collapse button.
    pub fn toggle_label(&self) -> &'static str {
        if self.expanded { "Show Less" } else { "Read More" }
    }

    /// Maximum rendered lines for the extended bio, `None` when unclamped.
    pub fn line_limit(&self) -> Option<u16> {
        if self.expanded {
            None
        } else {
            Some(COLLAPSED_LINE_LIMIT)
        }
    }
}
