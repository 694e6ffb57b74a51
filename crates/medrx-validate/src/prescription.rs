//! Prescription record validation.

use medrx_model::{MedicationForm, PrescriptionRecord, PrescriptionStatus, ValidationResult, join_codes};
use tracing::debug;

use crate::format::{is_valid_date, is_valid_ndc, is_valid_npi};
use crate::util::{present, require};

/// Validates a prescription record, collecting every violation in checklist
/// order: required fields, format checks, then cross-field invariants.
///
/// `insurance_id` is deliberately unchecked beyond its shape as an opaque
/// identifier: cash-pay prescriptions carry no insurance at all.
pub fn validate_prescription(record: &PrescriptionRecord) -> ValidationResult {
    let mut errors = Vec::new();

    require(&mut errors, &record.user_id, "User ID is required");
    require(
        &mut errors,
        &record.medication_name,
        "Medication name is required",
    );

    if require(&mut errors, &record.medication_form, "Medication form is required")
        && MedicationForm::from_code(record.medication_form.trim()).is_none()
    {
        errors.push(format!(
            "Invalid medication form. Must be one of: {}",
            join_codes(MedicationForm::ALL, MedicationForm::as_str)
        ));
    }

    require(&mut errors, &record.strength, "Strength is required");

    if let Some(ndc) = present(record.ndc.as_deref()) {
        if !is_valid_ndc(ndc) {
            errors.push("Invalid NDC format".to_string());
        }
    }

    require(
        &mut errors,
        &record.dosage_instructions,
        "Dosage instructions are required",
    );

    if record.quantity < 1.0 || !record.quantity.is_finite() {
        errors.push("Quantity must be at least 1".to_string());
    }
    if record.days_supply < 1.0 || !record.days_supply.is_finite() {
        errors.push("Days supply must be at least 1".to_string());
    }
    if record.refills_allowed < 0 {
        errors.push("Refills allowed cannot be negative".to_string());
    }
    if let Some(remaining) = record.refills_remaining {
        if remaining < 0 {
            errors.push("Refills remaining cannot be negative".to_string());
        }
    }

    require(&mut errors, &record.prescriber_name, "Prescriber name is required");

    if require(&mut errors, &record.prescriber_npi, "Prescriber NPI is required")
        && !is_valid_npi(record.prescriber_npi.trim())
    {
        errors.push("Prescriber NPI must be exactly 10 digits".to_string());
    }

    if require(&mut errors, &record.prescribed_date, "Prescribed date is required")
        && !is_valid_date(record.prescribed_date.trim())
    {
        errors.push("Invalid prescribed date format".to_string());
    }

    if let Some(status) = present(record.status.as_deref()) {
        if PrescriptionStatus::from_code(status).is_none() {
            errors.push(format!(
                "Invalid prescription status. Must be one of: {}",
                join_codes(PrescriptionStatus::ALL, PrescriptionStatus::as_str)
            ));
        }
    }

    if let Some(pharmacy_npi) = present(record.pharmacy_npi.as_deref()) {
        if !is_valid_npi(pharmacy_npi) {
            errors.push("Pharmacy NPI must be exactly 10 digits".to_string());
        }
    }

    // Cross-field invariant: runs regardless of the per-field outcomes.
    if let Some(remaining) = record.refills_remaining {
        if remaining > record.refills_allowed {
            errors.push("Refills remaining cannot exceed refills allowed".to_string());
        }
    }

    debug!(violations = errors.len(), "validated prescription record");
    ValidationResult::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_prescription() -> PrescriptionRecord {
        PrescriptionRecord {
            user_id: "user-1".to_string(),
            insurance_id: Some("ins-9".to_string()),
            medication_name: "Amoxicillin".to_string(),
            medication_form: "capsule".to_string(),
            strength: "500 mg".to_string(),
            ndc: Some("12345-1234-12".to_string()),
            dosage_instructions: "Take one capsule three times daily".to_string(),
            quantity: 30.0,
            days_supply: 10.0,
            refills_allowed: 2,
            refills_remaining: Some(2),
            prescriber_name: "Dr. Chen".to_string(),
            prescriber_npi: "1234567890".to_string(),
            prescribed_date: "2024-03-15".to_string(),
            status: Some("active".to_string()),
            pharmacy_npi: Some("0987654321".to_string()),
        }
    }

    #[test]
    fn well_formed_prescription_is_valid() {
        let result = validate_prescription(&valid_prescription());
        assert!(result.is_valid, "unexpected errors: {:?}", result.errors);
    }

    #[test]
    fn cash_pay_without_insurance_or_optionals_is_valid() {
        let record = PrescriptionRecord {
            insurance_id: None,
            ndc: None,
            refills_remaining: None,
            status: None,
            pharmacy_npi: None,
            ..valid_prescription()
        };
        let result = validate_prescription(&record);
        assert!(result.is_valid, "unexpected errors: {:?}", result.errors);
    }

    #[test]
    fn refills_remaining_cannot_exceed_allowed() {
        let record = PrescriptionRecord {
            refills_allowed: 2,
            refills_remaining: Some(5),
            ..valid_prescription()
        };
        let result = validate_prescription(&record);
        assert_eq!(
            result.errors,
            vec!["Refills remaining cannot exceed refills allowed"]
        );
    }

    #[test]
    fn negative_refills_remaining_reports_both_violations() {
        let record = PrescriptionRecord {
            refills_allowed: -2,
            refills_remaining: Some(-1),
            ..valid_prescription()
        };
        let result = validate_prescription(&record);
        assert_eq!(
            result.errors,
            vec![
                "Refills allowed cannot be negative",
                "Refills remaining cannot be negative",
                "Refills remaining cannot exceed refills allowed",
            ]
        );
    }

    #[test]
    fn quantity_floor_is_one() {
        let record = PrescriptionRecord {
            quantity: 0.5,
            ..valid_prescription()
        };
        let result = validate_prescription(&record);
        assert_eq!(result.errors, vec!["Quantity must be at least 1"]);
    }

    #[test]
    fn form_error_lists_legal_values() {
        let record = PrescriptionRecord {
            medication_form: "Tablet".to_string(),
            ..valid_prescription()
        };
        let result = validate_prescription(&record);
        assert_eq!(
            result.errors,
            vec![
                "Invalid medication form. Must be one of: tablet, capsule, liquid, injection, \
                 cream, ointment, inhaler, patch, drops, suppository, other"
            ]
        );
    }

    #[test]
    fn blank_optional_status_is_treated_as_absent() {
        let record = PrescriptionRecord {
            status: Some("   ".to_string()),
            ..valid_prescription()
        };
        let result = validate_prescription(&record);
        assert!(result.is_valid);
    }

    #[test]
    fn bad_ndc_grouping_is_rejected() {
        let record = PrescriptionRecord {
            ndc: Some("1234-1234-12".to_string()),
            ..valid_prescription()
        };
        let result = validate_prescription(&record);
        assert_eq!(result.errors, vec!["Invalid NDC format"]);
    }

    #[test]
    fn missing_prescriber_npi_reports_presence_only() {
        let record = PrescriptionRecord {
            prescriber_npi: String::new(),
            ..valid_prescription()
        };
        let result = validate_prescription(&record);
        assert_eq!(result.errors, vec!["Prescriber NPI is required"]);
    }
}
