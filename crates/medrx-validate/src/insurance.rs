//! Insurance record validation and active-state derivation.

use chrono::{Local, NaiveDate};
use medrx_model::{InsuranceRecord, PlanType, ValidationResult, join_codes};
use tracing::debug;

use crate::format::{is_valid_date, is_valid_rx_bin, parse_date};
use crate::util::{present, require};

/// Validates an insurance record, collecting every violation in checklist
/// order: required fields, format checks, then cross-field invariants.
///
/// Cross-field checks are not short-circuited by per-field failures, so one
/// bad field pair can surface more than one error. No de-duplication occurs.
pub fn validate_insurance(record: &InsuranceRecord) -> ValidationResult {
    let mut errors = Vec::new();

    require(&mut errors, &record.user_id, "User ID is required");
    require(
        &mut errors,
        &record.insurance_company,
        "Insurance company is required",
    );
    require(&mut errors, &record.policy_number, "Policy number is required");

    if require(&mut errors, &record.plan_type, "Plan type is required")
        && PlanType::from_code(record.plan_type.trim()).is_none()
    {
        errors.push(format!(
            "Invalid plan type. Must be one of: {}",
            join_codes(PlanType::ALL, PlanType::as_str)
        ));
    }

    require(&mut errors, &record.plan_name, "Plan name is required");

    if require(&mut errors, &record.rx_bin, "RxBIN is required")
        && !is_valid_rx_bin(record.rx_bin.trim())
    {
        errors.push("RxBIN must be exactly 6 digits".to_string());
    }

    if record.deductible < 0 {
        errors.push("Deductible cannot be negative".to_string());
    }
    if record.deductible_met < 0 {
        errors.push("Deductible met cannot be negative".to_string());
    }
    if record.out_of_pocket_max < 0 {
        errors.push("Out-of-pocket maximum cannot be negative".to_string());
    }
    if record.out_of_pocket_met < 0 {
        errors.push("Out-of-pocket met cannot be negative".to_string());
    }

    if require(&mut errors, &record.effective_date, "Effective date is required")
        && !is_valid_date(record.effective_date.trim())
    {
        errors.push("Invalid effective date format".to_string());
    }

    if let Some(termination) = present(record.termination_date.as_deref()) {
        if !is_valid_date(termination) {
            errors.push("Invalid termination date format".to_string());
        }
    }

    // Cross-field invariants. Date ordering can only be judged when both
    // dates name real calendar days.
    if let (Some(effective), Some(termination)) = (
        parse_date(record.effective_date.trim()),
        present(record.termination_date.as_deref()).and_then(parse_date),
    ) {
        if termination <= effective {
            errors.push("Termination date must be after effective date".to_string());
        }
    }

    if record.deductible_met > record.deductible {
        errors.push("Deductible met cannot exceed deductible".to_string());
    }
    if record.out_of_pocket_met > record.out_of_pocket_max {
        errors.push("Out-of-pocket met cannot exceed out-of-pocket maximum".to_string());
    }

    debug!(violations = errors.len(), "validated insurance record");
    ValidationResult::from_errors(errors)
}

/// Whether the coverage is active today, by the local calendar date.
pub fn is_insurance_active(record: &InsuranceRecord) -> bool {
    is_insurance_active_on(record, Local::now().date_naive())
}

/// Whether the coverage is active on the given calendar date.
///
/// A record is active when its override flag is set, its effective date is
/// on or before the evaluation date, and its termination date (if any) is
/// not strictly before the evaluation date. Coverage terminating today is
/// still active today. A missing or unparseable termination date never
/// deactivates the record; an unparseable effective date always does.
pub fn is_insurance_active_on(record: &InsuranceRecord, today: NaiveDate) -> bool {
    if !record.is_active {
        return false;
    }
    let Some(effective) = parse_date(record.effective_date.trim()) else {
        return false;
    };
    if effective > today {
        return false;
    }
    match present(record.termination_date.as_deref()).and_then(parse_date) {
        Some(termination) => !(termination < today),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_insurance() -> InsuranceRecord {
        InsuranceRecord {
            user_id: "user-1".to_string(),
            insurance_company: "Acme Health".to_string(),
            policy_number: "POL-778".to_string(),
            plan_type: "PPO".to_string(),
            plan_name: "Acme Gold".to_string(),
            rx_bin: "610502".to_string(),
            deductible: 150_000,
            deductible_met: 25_000,
            out_of_pocket_max: 600_000,
            out_of_pocket_met: 40_000,
            effective_date: "2024-01-01".to_string(),
            termination_date: Some("2024-12-31".to_string()),
            is_active: true,
        }
    }

    #[test]
    fn well_formed_insurance_is_valid() {
        let result = validate_insurance(&valid_insurance());
        assert!(result.is_valid, "unexpected errors: {:?}", result.errors);
    }

    #[test]
    fn plan_type_error_lists_legal_values() {
        let record = InsuranceRecord {
            plan_type: "ppo".to_string(),
            ..valid_insurance()
        };
        let result = validate_insurance(&record);
        assert_eq!(
            result.errors,
            vec![
                "Invalid plan type. Must be one of: HMO, PPO, EPO, POS, HDHP, MEDICARE, \
                 MEDICAID, OTHER"
            ]
        );
    }

    #[test]
    fn termination_before_effective_is_rejected() {
        let record = InsuranceRecord {
            effective_date: "2024-01-01".to_string(),
            termination_date: Some("2023-01-01".to_string()),
            ..valid_insurance()
        };
        let result = validate_insurance(&record);
        assert_eq!(
            result.errors,
            vec!["Termination date must be after effective date"]
        );
    }

    #[test]
    fn termination_equal_to_effective_is_rejected() {
        let record = InsuranceRecord {
            termination_date: Some("2024-01-01".to_string()),
            ..valid_insurance()
        };
        let result = validate_insurance(&record);
        assert_eq!(
            result.errors,
            vec!["Termination date must be after effective date"]
        );
    }

    #[test]
    fn deductible_ceiling_fires_independently_of_field_checks() {
        let record = InsuranceRecord {
            deductible: 500,
            deductible_met: 600,
            ..valid_insurance()
        };
        let result = validate_insurance(&record);
        assert_eq!(result.errors, vec!["Deductible met cannot exceed deductible"]);
    }

    #[test]
    fn negative_amount_and_ceiling_both_reported() {
        // -100 met against a -200 deductible violates both the sign rule and
        // the ceiling rule; both errors surface, none is de-duplicated.
        let record = InsuranceRecord {
            deductible: -200,
            deductible_met: -100,
            ..valid_insurance()
        };
        let result = validate_insurance(&record);
        assert_eq!(
            result.errors,
            vec![
                "Deductible cannot be negative",
                "Deductible met cannot be negative",
                "Deductible met cannot exceed deductible",
            ]
        );
    }

    #[test]
    fn missing_rx_bin_reports_presence_only() {
        let record = InsuranceRecord {
            rx_bin: String::new(),
            ..valid_insurance()
        };
        let result = validate_insurance(&record);
        assert_eq!(result.errors, vec!["RxBIN is required"]);
    }

    #[test]
    fn active_window_respects_calendar_dates() {
        let record = valid_insurance();
        let before = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let during = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let after = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(!is_insurance_active_on(&record, before));
        assert!(is_insurance_active_on(&record, during));
        assert!(!is_insurance_active_on(&record, after));
    }

    #[test]
    fn same_day_termination_is_still_active() {
        let record = valid_insurance();
        let termination_day = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert!(is_insurance_active_on(&record, termination_day));
    }

    #[test]
    fn override_flag_deactivates_regardless_of_dates() {
        let record = InsuranceRecord {
            is_active: false,
            ..valid_insurance()
        };
        let during = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(!is_insurance_active_on(&record, during));
    }

    #[test]
    fn open_ended_coverage_stays_active() {
        let record = InsuranceRecord {
            termination_date: None,
            ..valid_insurance()
        };
        let far_future = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();
        assert!(is_insurance_active_on(&record, far_future));
    }
}
