//! Human-readable dates and times for the UI.

use chrono::{DateTime, NaiveDate, NaiveTime};

/// `2025-01-20` or `2025-01-20T09:00:00Z` → `Jan 20, 2025`.
///
/// Unparseable input is returned unchanged.
pub fn format_date_human(value: &str) -> String {
    let date_part = value.get(..10).unwrap_or(value);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// RFC 3339 timestamp → `Jan 20, 2025 9:35 AM`; falls back to the date only.
pub fn format_datetime_human(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.format("%b %-d, %Y %-I:%M %p").to_string(),
        Err(_) => format_date_human(value),
    }
}

/// `14:30` or `14:30:00` → `2:30 PM`.
pub fn format_time_human(value: &str) -> String {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_else(|_| value.to_string())
}

/// Unix seconds → `Jan 20, 2025 9:35 AM` (UTC).
pub fn format_unix_human(seconds: i64) -> String {
    DateTime::from_timestamp(seconds, 0)
        .map(|dt| dt.format("%b %-d, %Y %-I:%M %p").to_string())
        .unwrap_or_else(|| "Never".to_string())
}
