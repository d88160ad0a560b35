//! Read-only portfolio content.

pub mod builtin;
pub mod model;

pub use builtin::builtin_content;
pub use model::{Education, Experience, PortfolioContent, Profile, Project, SocialLink};
