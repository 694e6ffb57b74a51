//! Data model for the medrx medication-management core.
//!
//! Record types mirror the JSON wire shapes exchanged with clients; the
//! vocabulary enums are the closed code sets those records are validated
//! against. Nothing in this crate performs IO.

pub mod enums;
pub mod envelope;
pub mod insurance;
pub mod prescription;
pub mod result;
pub mod user;

pub use enums::{
    ClaimStatus, DenialReason, ErrorCode, MedicationForm, PlanType, PrescriptionStatus, join_codes,
};
pub use envelope::{ErrorBody, ErrorEnvelope, ValidationDetails};
pub use insurance::InsuranceRecord;
pub use prescription::PrescriptionRecord;
pub use result::ValidationResult;
pub use user::{Address, UserRecord};
