//! User account records.

use serde::{Deserialize, Serialize};

/// Postal address attached to a user profile.
///
/// An address is optional on the user, but once present every component is
/// required; the validator reports each missing component separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    /// Two-letter US state or territory postal abbreviation.
    pub state: String,
    /// `12345` or `12345-6789`.
    pub zip_code: String,
}

/// A user of the medication-management application, as submitted by a client
/// before any validation has run.
///
/// Required text fields are plain strings; a field left empty (or blank after
/// trimming) is treated as absent by the validator. Genuinely optional fields
/// are `Option`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub email: String,
    /// At most 100 characters, non-empty after trim.
    pub first_name: String,
    /// At most 100 characters, non-empty after trim.
    pub last_name: String,
    /// `YYYY-MM-DD`.
    pub date_of_birth: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}
