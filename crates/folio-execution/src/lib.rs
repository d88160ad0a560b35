//! Runtime services for the Folio binaries: the clock ticker task and
//! logging setup.

pub mod clock_ticker;
pub mod logging;

pub use clock_ticker::{ClockTicker, TickerHandle};
