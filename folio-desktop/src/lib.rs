//! PortfolioOS desktop rendered in the terminal.

pub mod app;
pub mod commands;
pub mod tui;
pub mod ui;
