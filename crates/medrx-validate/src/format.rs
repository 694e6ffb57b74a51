//! Primitive format checkers.
//!
//! Every predicate is total: any input string yields a boolean, never a
//! panic. Record validators call these unconditionally, so the patterns do
//! all the guarding themselves.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// One non-whitespace, non-`@` run, a literal `@`, another run, a literal
/// `.`, another run. Deliberately loose; deliverability is not checked.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex")
});

/// Optional `+`, optional country code `1`, then 10-14 digits.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?1?\d{10,14}$").expect("invalid phone regex"));

/// `YYYY-MM-DD` digit grouping. Calendar validity is checked separately.
static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("invalid date regex"));

/// `12345` or `12345-6789`.
static ZIP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("invalid ZIP regex"));

/// Exactly 6 digits (Pharmacy Benefit Manager routing number).
static RX_BIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6}$").expect("invalid RxBIN regex"));

/// Exactly 10 digits (National Provider Identifier).
static NPI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10}$").expect("invalid NPI regex"));

/// 5-4-2 digit grouping (National Drug Code).
static NDC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}-\d{4}-\d{2}$").expect("invalid NDC regex"));

/// US state and territory postal abbreviations (50 states, DC, and the five
/// inhabited territories).
const STATE_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "DC", "AS", "GU", "MP", "PR", "VI",
];

/// Returns true for a plausibly-shaped email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Returns true for a US-style phone number, with or without `+1` prefix.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Returns true for a `YYYY-MM-DD` string naming a real calendar date.
///
/// `2023-02-31` matches the digit grouping but is rejected here.
pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}

/// Parses a strict `YYYY-MM-DD` string into a calendar date.
///
/// Stricter than `NaiveDate::parse_from_str`, which tolerates single-digit
/// months and days.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let captures = DATE_REGEX.captures(value)?;
    let year: i32 = captures.get(1)?.as_str().parse().ok()?;
    let month: u32 = captures.get(2)?.as_str().parse().ok()?;
    let day: u32 = captures.get(3)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Returns true for a 5-digit or ZIP+4 US postal code.
pub fn is_valid_zip(value: &str) -> bool {
    ZIP_REGEX.is_match(value)
}

/// Returns true for a US state or territory postal abbreviation.
///
/// Case-insensitive; blank input is false.
pub fn is_valid_state_code(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    STATE_CODES.iter().any(|code| code.eq_ignore_ascii_case(trimmed))
}

/// Returns true for a 6-digit RxBIN.
pub fn is_valid_rx_bin(value: &str) -> bool {
    RX_BIN_REGEX.is_match(value)
}

/// Returns true for a 10-digit NPI.
pub fn is_valid_npi(value: &str) -> bool {
    NPI_REGEX.is_match(value)
}

/// Returns true for an NDC in 5-4-2 grouping.
pub fn is_valid_ndc(value: &str) -> bool {
    NDC_REGEX.is_match(value)
}
