pub mod bootstrap;
pub mod run;
pub mod state;

pub use bootstrap::{AppBootstrap, DesktopArgs};
pub use state::DesktopState;
