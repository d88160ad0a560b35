//! State of the Portfolio window.

pub mod filter;

pub use filter::{ALL_CATEGORIES, CategoryFilter, PortfolioView, categories, filter_projects};
