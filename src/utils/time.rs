//! Timestamp rendering shared by the fallback digest and the Slack envelope

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Locale-string style layout, e.g. `10/17/2026, 3:04:05 PM`.
pub const LOCALE_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

#[must_use]
pub fn format_locale_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format(LOCALE_TIMESTAMP_FORMAT).to_string()
}
