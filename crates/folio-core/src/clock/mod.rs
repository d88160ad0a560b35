//! Clock display formatting.

use chrono::{DateTime, TimeZone};
use std::fmt;

/// strftime pattern for the menu bar and title bar clocks.
pub const TIME_FORMAT: &str = "%I:%M %p";

/// Formats `time` as a 12-hour clock with a two-digit hour, e.g. `09:05 AM`.
pub fn format_time<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    time.format(TIME_FORMAT).to_string()
}
