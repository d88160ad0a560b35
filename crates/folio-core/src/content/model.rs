//! Portfolio content models.

use serde::{Deserialize, Serialize};

/// A link shown in the About window footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Display label ("GitHub", "LinkedIn", ...)
    pub label: String,
    pub url: String,
}

/// Personal details shown in the Resume and About windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Short bio, always shown in full
    pub bio: String,
    /// Longer bio paragraphs, clamped until "Read More"
    pub extended_bio: Vec<String>,
    pub skills: Vec<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

impl Profile {
    /// Initials for the avatar, e.g. "AJ" for "Alex Johnson".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    /// Category used by the Portfolio filter
    pub category: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// Preview image URL (not rendered in the terminal)
    pub image: String,
    /// Live demo URL
    pub demo: String,
    /// Source repository URL
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    /// Free-form period, e.g. "2020 - Present"
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub year: String,
    pub description: String,
}

/// Everything the desktop displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
}

impl PortfolioContent {
    /// Project names in display order.
    pub fn project_names(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.name.as_str()).collect()
    }
}
