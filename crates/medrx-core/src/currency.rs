//! Minor-currency-unit conversion.
//!
//! Monetary amounts are stored as integer cents; floating point only
//! appears at the display boundary.

/// Converts a dollar amount to integer cents, rounding half away from zero.
pub fn dollars_to_cents(dollars: f64) -> i64 {
    (dollars * 100.0).round() as i64
}

/// Converts integer cents to a dollar amount.
pub fn cents_to_dollars(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Renders integer cents as a `$d.cc` display string.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    format!("{sign}${}.{:02}", magnitude / 100, magnitude % 100)
}
