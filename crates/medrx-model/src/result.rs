//! Validation outcome reporting.

use serde::{Deserialize, Serialize};

/// The outcome of validating one record.
///
/// Built fresh on every validation call and never cached or shared. Errors
/// appear in the exact order the checks appended them, so callers can render
/// first-error-first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Seals a list of collected violations into a result.
    pub fn from_errors(errors: Vec<String>) -> Self {
        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// A result with no violations.
    pub fn valid() -> Self {
        ValidationResult {
            is_valid: true,
            errors: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_errors_sets_validity_flag() {
        assert!(ValidationResult::from_errors(vec![]).is_valid);
        let result = ValidationResult::from_errors(vec!["Email is required".to_string()]);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn wire_shape_uses_is_valid_camel_case() {
        let json = serde_json::to_value(ValidationResult::valid()).unwrap();
        assert_eq!(json["isValid"], true);
        assert!(json["errors"].as_array().unwrap().is_empty());
    }
}
