//! Calendar-date helpers.
//!
//! The application works exclusively with `YYYY-MM-DD` strings and the
//! local-process calendar date; no timezone arithmetic beyond that.

use chrono::{Local, NaiveDate};

use crate::error::{CoreError, Result};

/// Parses a strict `YYYY-MM-DD` string.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .filter(|date| date.format("%Y-%m-%d").to_string() == trimmed)
        .ok_or_else(|| CoreError::InvalidDate(value.to_string()))
}

/// Formats a date back to its `YYYY-MM-DD` wire form.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// True when the value names a calendar day strictly before today.
///
/// Unparseable input is neither past nor future.
pub fn is_past_date(value: &str) -> bool {
    match parse_iso_date(value) {
        Ok(date) => date < Local::now().date_naive(),
        Err(_) => false,
    }
}

/// True when the value names a calendar day strictly after today.
pub fn is_future_date(value: &str) -> bool {
    match parse_iso_date(value) {
        Ok(date) => date > Local::now().date_naive(),
        Err(_) => false,
    }
}
