//! Domain core of the Folio desktop.
//!
//! Everything here is independent of any rendering framework: the window
//! manager, the terminal interpreter, the portfolio filter and the about
//! toggle are plain state with pure transitions.

pub mod about;
pub mod app;
pub mod clock;
pub mod config;
pub mod content;
pub mod error;
pub mod portfolio;
pub mod terminal;
pub mod window;

// Re-export common error type
pub use error::FolioError;

pub use app::AppId;
pub use window::{WindowAction, WindowManager};
