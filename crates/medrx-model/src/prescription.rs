//! Prescription records.

use serde::{Deserialize, Serialize};

/// A prescription as submitted by a client before validation.
///
/// `insurance_id` is optional: cash-pay prescriptions are allowed. The
/// `medication_form` and `status` fields carry raw wire codes and are checked
/// against [`crate::MedicationForm`] and [`crate::PrescriptionStatus`] during
/// validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionRecord {
    pub user_id: String,
    /// Absent for cash-pay prescriptions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_id: Option<String>,
    pub medication_name: String,
    /// Raw form code, validated against [`crate::MedicationForm`].
    pub medication_form: String,
    /// Free text, e.g. "500 mg".
    pub strength: String,
    /// National Drug Code, `NNNNN-NNNN-NN`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ndc: Option<String>,
    pub dosage_instructions: String,
    /// Units dispensed per fill; must be at least 1.
    pub quantity: f64,
    /// Days the quantity is expected to last; must be at least 1.
    pub days_supply: f64,
    /// Refills authorized by the prescriber; zero or greater.
    pub refills_allowed: i64,
    /// Refills left on the prescription; zero or greater and never more than
    /// `refills_allowed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refills_remaining: Option<i64>,
    pub prescriber_name: String,
    /// 10-digit National Provider Identifier of the prescriber.
    #[serde(rename = "prescriberNPI")]
    pub prescriber_npi: String,
    /// `YYYY-MM-DD`.
    pub prescribed_date: String,
    /// Raw status code, validated against [`crate::PrescriptionStatus`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// 10-digit NPI of the dispensing pharmacy.
    #[serde(default, rename = "pharmacyNPI", skip_serializing_if = "Option::is_none")]
    pub pharmacy_npi: Option<String>,
}

impl Default for PrescriptionRecord {
    fn default() -> Self {
        PrescriptionRecord {
            user_id: String::new(),
            insurance_id: None,
            medication_name: String::new(),
            medication_form: String::new(),
            strength: String::new(),
            ndc: None,
            dosage_instructions: String::new(),
            quantity: 0.0,
            days_supply: 0.0,
            refills_allowed: 0,
            refills_remaining: None,
            prescriber_name: String::new(),
            prescriber_npi: String::new(),
            prescribed_date: String::new(),
            status: None,
            pharmacy_npi: None,
        }
    }
}
