//! Window management for the desktop.
//!
//! A single application can be in the foreground at a time; others are either
//! closed or minimized. All transitions are total over [`AppId`](crate::app::AppId).

pub mod action;
pub mod manager;

#[cfg(test)]
mod manager_test;

pub use action::{WindowAction, reduce};
pub use manager::{TogglePolicy, WindowManager, WindowState};
