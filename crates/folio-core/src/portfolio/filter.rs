//! Category filtering for the Portfolio window.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::content::Project;

/// Label of the pseudo-category that disables filtering.
pub const ALL_CATEGORIES: &str = "All";

/// The category selection in the Portfolio window.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parses a category label; `"All"` means no filter.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `"All"` followed by each distinct project category in first-appearance order.
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut labels = vec![ALL_CATEGORIES.to_string()];
    for project in projects {
        if !labels.iter().any(|label| *label == project.category) {
            labels.push(project.category.clone());
        }
    }
    labels
}

/// Projects selected by `filter`, in their original order.
pub fn filter_projects<'a>(projects: &'a [Project], filter: &CategoryFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Selected category of the Portfolio window.
///
/// Survives minimizing; reset only when the window is closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioView {
    selected: CategoryFilter,
}

impl PortfolioView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &CategoryFilter {
        &self.selected
    }

    pub fn select(&mut self, filter: CategoryFilter) {
        self.selected = filter;
    }

    pub fn visible_projects<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filter_projects(projects, &self.selected)
    }

    /// Moves to the next category, wrapping around.
    pub fn select_next(&mut self, projects: &[Project]) {
        self.step(projects, 1);
    }

    /// Moves to the previous category, wrapping around.
    pub fn select_previous(&mut self, projects: &[Project]) {
        let len = categories(projects).len();
        self.step(projects, len.saturating_sub(1));
    }

    fn step(&mut self, projects: &[Project], offset: usize) {
        let labels = categories(projects);
        let current = labels
            .iter()
            .position(|label| label == self.selected.label())
            .unwrap_or(0);
        let next = (current + offset) % labels.len();
        self.selected = CategoryFilter::from_label(&labels[next]);
    }
}
