//! Small helpers shared by the record validators.

use medrx_core::normalized_text;

/// Appends a presence error when the field is blank after trimming.
///
/// Returns whether the field is present, so callers can skip the format
/// check for an absent field instead of reporting it twice.
pub(crate) fn require(errors: &mut Vec<String>, value: &str, message: &str) -> bool {
    if normalized_text(value).is_none() {
        errors.push(message.to_string());
        return false;
    }
    true
}

/// Treats a blank optional field as absent, mirroring how clients omit
/// fields they never populated.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    normalized_text(value?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_reports_blank_once() {
        let mut errors = Vec::new();
        assert!(!require(&mut errors, "   ", "Email is required"));
        assert!(require(&mut errors, "a@b.com", "Email is required"));
        assert_eq!(errors, vec!["Email is required".to_string()]);
    }

    #[test]
    fn present_skips_blank_optionals() {
        assert_eq!(present(None), None);
        assert_eq!(present(Some("  ")), None);
        assert_eq!(present(Some(" x ")), Some("x"));
    }
}
