//! Calendar helpers for appointment dates (`YYYY-MM-DD`).

use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date in the browser's local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Reject empty, malformed or past dates. Today is accepted.
pub fn check_not_past(s: &str, today: NaiveDate) -> Result<(), &'static str> {
    if s.trim().is_empty() {
        return Err("Date is required");
    }
    match parse_date(s) {
        Some(date) if date < today => Err("Date cannot be in the past"),
        Some(_) => Ok(()),
        None => Err("Enter a valid date"),
    }
}
