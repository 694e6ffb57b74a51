//! Closed vocabulary sets for the medication-management domain.
//!
//! Each enumeration is a fixed, ordered set of string codes shared between
//! client and server. The serialized form of every variant is the exact wire
//! code, so values round-trip unchanged through JSON transport and storage.
//!
//! Membership is verbatim and case-sensitive: `from_code` accepts a code only
//! when it appears exactly among the declared values. Validators use the
//! `ALL` tables (declaration order) to list legal values in error messages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Insurance plan type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanType {
    /// Health Maintenance Organization.
    #[serde(rename = "HMO")]
    Hmo,
    /// Preferred Provider Organization.
    #[serde(rename = "PPO")]
    Ppo,
    /// Exclusive Provider Organization.
    #[serde(rename = "EPO")]
    Epo,
    /// Point of Service.
    #[serde(rename = "POS")]
    Pos,
    /// High Deductible Health Plan.
    #[serde(rename = "HDHP")]
    Hdhp,
    #[serde(rename = "MEDICARE")]
    Medicare,
    #[serde(rename = "MEDICAID")]
    Medicaid,
    #[serde(rename = "OTHER")]
    Other,
}

impl PlanType {
    /// All plan types in declaration order.
    pub const ALL: &'static [PlanType] = &[
        PlanType::Hmo,
        PlanType::Ppo,
        PlanType::Epo,
        PlanType::Pos,
        PlanType::Hdhp,
        PlanType::Medicare,
        PlanType::Medicaid,
        PlanType::Other,
    ];

    /// Returns the canonical wire code.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Hmo => "HMO",
            PlanType::Ppo => "PPO",
            PlanType::Epo => "EPO",
            PlanType::Pos => "POS",
            PlanType::Hdhp => "HDHP",
            PlanType::Medicare => "MEDICARE",
            PlanType::Medicaid => "MEDICAID",
            PlanType::Other => "OTHER",
        }
    }

    /// Exact, case-sensitive membership test.
    pub fn from_code(code: &str) -> Option<PlanType> {
        Self::ALL.iter().copied().find(|v| v.as_str() == code)
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Unknown plan type: {s}"))
    }
}

/// Lifecycle status of a prescription.
///
/// Transitions between statuses are enforced by the server layer; the core
/// only defines the legal set of codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrescriptionStatus {
    Pending,
    Active,
    Filled,
    Transferred,
    Cancelled,
    Expired,
}

impl PrescriptionStatus {
    /// All statuses in declaration order.
    pub const ALL: &'static [PrescriptionStatus] = &[
        PrescriptionStatus::Pending,
        PrescriptionStatus::Active,
        PrescriptionStatus::Filled,
        PrescriptionStatus::Transferred,
        PrescriptionStatus::Cancelled,
        PrescriptionStatus::Expired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrescriptionStatus::Pending => "pending",
            PrescriptionStatus::Active => "active",
            PrescriptionStatus::Filled => "filled",
            PrescriptionStatus::Transferred => "transferred",
            PrescriptionStatus::Cancelled => "cancelled",
            PrescriptionStatus::Expired => "expired",
        }
    }

    /// Exact, case-sensitive membership test.
    pub fn from_code(code: &str) -> Option<PrescriptionStatus> {
        Self::ALL.iter().copied().find(|v| v.as_str() == code)
    }
}

impl fmt::Display for PrescriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrescriptionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Unknown prescription status: {s}"))
    }
}

/// Dosage form of a medication product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedicationForm {
    Tablet,
    Capsule,
    Liquid,
    Injection,
    Cream,
    Ointment,
    Inhaler,
    Patch,
    Drops,
    Suppository,
    Other,
}

impl MedicationForm {
    /// All forms in declaration order.
    pub const ALL: &'static [MedicationForm] = &[
        MedicationForm::Tablet,
        MedicationForm::Capsule,
        MedicationForm::Liquid,
        MedicationForm::Injection,
        MedicationForm::Cream,
        MedicationForm::Ointment,
        MedicationForm::Inhaler,
        MedicationForm::Patch,
        MedicationForm::Drops,
        MedicationForm::Suppository,
        MedicationForm::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MedicationForm::Tablet => "tablet",
            MedicationForm::Capsule => "capsule",
            MedicationForm::Liquid => "liquid",
            MedicationForm::Injection => "injection",
            MedicationForm::Cream => "cream",
            MedicationForm::Ointment => "ointment",
            MedicationForm::Inhaler => "inhaler",
            MedicationForm::Patch => "patch",
            MedicationForm::Drops => "drops",
            MedicationForm::Suppository => "suppository",
            MedicationForm::Other => "other",
        }
    }

    /// Exact, case-sensitive membership test.
    pub fn from_code(code: &str) -> Option<MedicationForm> {
        Self::ALL.iter().copied().find(|v| v.as_str() == code)
    }
}

impl fmt::Display for MedicationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MedicationForm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Unknown medication form: {s}"))
    }
}

/// Adjudication status of a pharmacy claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Submitted,
    Pending,
    Approved,
    Denied,
    Reversed,
    Paid,
}

impl ClaimStatus {
    /// All claim statuses in declaration order.
    pub const ALL: &'static [ClaimStatus] = &[
        ClaimStatus::Submitted,
        ClaimStatus::Pending,
        ClaimStatus::Approved,
        ClaimStatus::Denied,
        ClaimStatus::Reversed,
        ClaimStatus::Paid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "submitted",
            ClaimStatus::Pending => "pending",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Denied => "denied",
            ClaimStatus::Reversed => "reversed",
            ClaimStatus::Paid => "paid",
        }
    }

    /// Exact, case-sensitive membership test.
    pub fn from_code(code: &str) -> Option<ClaimStatus> {
        Self::ALL.iter().copied().find(|v| v.as_str() == code)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Unknown claim status: {s}"))
    }
}

/// Reason a pharmacy claim was denied by the adjudication system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    PriorAuthorizationRequired,
    NotCovered,
    RefillTooSoon,
    QuantityLimitExceeded,
    PlanTerminated,
    InvalidBin,
    PatientNotFound,
    Other,
}

impl DenialReason {
    /// All denial reasons in declaration order.
    pub const ALL: &'static [DenialReason] = &[
        DenialReason::PriorAuthorizationRequired,
        DenialReason::NotCovered,
        DenialReason::RefillTooSoon,
        DenialReason::QuantityLimitExceeded,
        DenialReason::PlanTerminated,
        DenialReason::InvalidBin,
        DenialReason::PatientNotFound,
        DenialReason::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DenialReason::PriorAuthorizationRequired => "prior_authorization_required",
            DenialReason::NotCovered => "not_covered",
            DenialReason::RefillTooSoon => "refill_too_soon",
            DenialReason::QuantityLimitExceeded => "quantity_limit_exceeded",
            DenialReason::PlanTerminated => "plan_terminated",
            DenialReason::InvalidBin => "invalid_bin",
            DenialReason::PatientNotFound => "patient_not_found",
            DenialReason::Other => "other",
        }
    }

    /// Exact, case-sensitive membership test.
    pub fn from_code(code: &str) -> Option<DenialReason> {
        Self::ALL.iter().copied().find(|v| v.as_str() == code)
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DenialReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Unknown denial reason: {s}"))
    }
}

/// Machine-readable error code carried in the transport envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    NotFound,
    Unauthorized,
    Forbidden,
    DuplicateResource,
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    /// All error codes in declaration order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::ValidationError,
        ErrorCode::NotFound,
        ErrorCode::Unauthorized,
        ErrorCode::Forbidden,
        ErrorCode::DuplicateResource,
        ErrorCode::DatabaseError,
        ErrorCode::InternalError,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::DuplicateResource => "DUPLICATE_RESOURCE",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Exact, case-sensitive membership test.
    pub fn from_code(code: &str) -> Option<ErrorCode> {
        Self::ALL.iter().copied().find(|v| v.as_str() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Unknown error code: {s}"))
    }
}

/// Joins the wire codes of a vocabulary table for use in error messages.
pub fn join_codes<T>(all: &[T], as_str: fn(&T) -> &'static str) -> String {
    all.iter().map(as_str).collect::<Vec<_>>().join(", ")
}
