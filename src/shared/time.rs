//! Timestamp parsing.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Timestamp format used across the API.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Placeholder the API sends when a date is unknown.
pub const BACKUP_TIMESTAMP: &str = "0001-01-01T00:00:00";

/// Parse an API timestamp into UTC.
///
/// Accepts `TIME_FORMAT`, RFC 3339 (`Z` suffix, fractional seconds) and the
/// zone-less backup value. Returns `None` for anything else.
pub fn parse_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_str(raw, TIME_FORMAT) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}
