//! Configuration domain models.

pub mod model;

pub use model::{ClockSettings, DebugSettings, DesktopSettings, RootConfig, WindowSettings};
