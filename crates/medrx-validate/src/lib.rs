//! Record validation for the medrx medication-management core.
//!
//! Every exported function is a synchronous pure function: it reads its
//! input, allocates its own [`ValidationResult`], and returns. Nothing here
//! throws, locks, or touches IO, so all of it is safe to call concurrently.
//!
//! Violations are data, not errors: each validator walks a fixed checklist,
//! appends one human-readable message per broken rule, and reports
//! `is_valid` only when the list stayed empty.

pub mod format;
mod insurance;
mod prescription;
mod user;
mod util;

pub use format::{
    is_valid_date, is_valid_email, is_valid_ndc, is_valid_npi, is_valid_phone, is_valid_rx_bin,
    is_valid_state_code, is_valid_zip, parse_date,
};
pub use insurance::{is_insurance_active, is_insurance_active_on, validate_insurance};
pub use prescription::validate_prescription;
pub use user::validate_user;

pub use medrx_model::ValidationResult;
