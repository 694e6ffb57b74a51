//! User record validation.

use medrx_model::{UserRecord, ValidationResult};
use tracing::debug;

use crate::format::{is_valid_date, is_valid_email, is_valid_phone, is_valid_state_code, is_valid_zip};
use crate::util::require;

/// Longest accepted first or last name, in characters.
const MAX_NAME_LEN: usize = 100;

/// Validates a user record, collecting every violation in checklist order.
///
/// Never panics and never mutates the record; all problems come back as
/// entries in [`ValidationResult::errors`].
pub fn validate_user(record: &UserRecord) -> ValidationResult {
    let mut errors = Vec::new();

    if require(&mut errors, &record.email, "Email is required")
        && !is_valid_email(record.email.trim())
    {
        errors.push("Invalid email format".to_string());
    }

    if require(&mut errors, &record.first_name, "First name is required")
        && record.first_name.trim().chars().count() > MAX_NAME_LEN
    {
        errors.push("First name must be 100 characters or fewer".to_string());
    }

    if require(&mut errors, &record.last_name, "Last name is required")
        && record.last_name.trim().chars().count() > MAX_NAME_LEN
    {
        errors.push("Last name must be 100 characters or fewer".to_string());
    }

    if require(&mut errors, &record.date_of_birth, "Date of birth is required")
        && !is_valid_date(record.date_of_birth.trim())
    {
        errors.push("Invalid date of birth format".to_string());
    }

    if require(&mut errors, &record.phone_number, "Phone number is required")
        && !is_valid_phone(record.phone_number.trim())
    {
        errors.push("Invalid phone number format".to_string());
    }

    match &record.address {
        None => errors.push("Address is required".to_string()),
        Some(address) => {
            // A partial address yields one error per missing component.
            require(&mut errors, &address.street, "Street address is required");
            require(&mut errors, &address.city, "City is required");
            if require(&mut errors, &address.state, "State is required")
                && !is_valid_state_code(&address.state)
            {
                errors.push("Invalid state code".to_string());
            }
            if require(&mut errors, &address.zip_code, "ZIP code is required")
                && !is_valid_zip(address.zip_code.trim())
            {
                errors.push("Invalid ZIP code format".to_string());
            }
        }
    }

    debug!(violations = errors.len(), "validated user record");
    ValidationResult::from_errors(errors)
}
