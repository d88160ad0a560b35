//! Application identities shown in the dock.

pub mod model;

pub use model::AppId;
