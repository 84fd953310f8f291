//! Date formatting.

use chrono::{DateTime, Utc};

use super::text::pluralize;
use crate::error::Result;

/// Formats a date as `Jan 02, 2024`.
#[must_use]
pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%b %d, %Y").to_string()
}

/// Formats a timestamp as `Jan 02, 2024 15:04`.
#[must_use]
pub fn format_date_time(dt: DateTime<Utc>) -> String {
    dt.format("%b %d, %Y %H:%M").to_string()
}

/// Describes `then` relative to `now` (`5 minutes ago`).
///
/// Anything older than a week falls back to [`format_date`].
#[must_use]
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - then;
    if elapsed < chrono::Duration::zero() {
        return "in the future".to_string();
    }

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if elapsed.num_seconds() < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} {} ago", pluralize(minutes, "minute", "minutes"))
    } else if hours < 24 {
        format!("{hours} {} ago", pluralize(hours, "hour", "hours"))
    } else if days < 7 {
        format!("{days} {} ago", pluralize(days, "day", "days"))
    } else {
        format_date(then)
    }
}

/// Parses an RFC 3339 / ISO 8601 timestamp into UTC.
///
/// # Errors
///
/// Returns `Error::DateParse` if the string is not a valid timestamp.
pub fn parse_iso8601(s: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(s.trim())?.with_timezone(&Utc))
}
