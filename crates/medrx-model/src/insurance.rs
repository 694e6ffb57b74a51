//! Insurance coverage records.

use serde::{Deserialize, Serialize};

/// An insurance coverage entry for a user, as submitted by a client before
/// validation.
///
/// Monetary fields are minor currency units (cents); the core never performs
/// currency arithmetic beyond the documented ceiling comparisons. The
/// `plan_type` field carries the raw wire code and is checked against
/// [`crate::PlanType`] during validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceRecord {
    pub user_id: String,
    pub insurance_company: String,
    pub policy_number: String,
    /// Raw plan type code, validated against [`crate::PlanType`].
    pub plan_type: String,
    pub plan_name: String,
    /// 6-digit Pharmacy Benefit Manager routing identifier.
    #[serde(rename = "rxBIN")]
    pub rx_bin: String,
    /// Annual deductible in minor currency units.
    pub deductible: i64,
    /// Amount of the deductible met so far, minor currency units.
    pub deductible_met: i64,
    /// Annual out-of-pocket maximum in minor currency units.
    pub out_of_pocket_max: i64,
    /// Out-of-pocket amount met so far, minor currency units.
    pub out_of_pocket_met: i64,
    /// `YYYY-MM-DD`.
    pub effective_date: String,
    /// `YYYY-MM-DD`; must be after `effective_date` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<String>,
    /// Manual override: a record flagged inactive is inactive regardless of
    /// its dates. Defaults to true.
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

impl Default for InsuranceRecord {
    fn default() -> Self {
        InsuranceRecord {
            user_id: String::new(),
            insurance_company: String::new(),
            policy_number: String::new(),
            plan_type: String::new(),
            plan_name: String::new(),
            rx_bin: String::new(),
            deductible: 0,
            deductible_met: 0,
            out_of_pocket_max: 0,
            out_of_pocket_met: 0,
            effective_date: String::new(),
            termination_date: None,
            is_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rx_bin_wire_name_is_preserved() {
        let record = InsuranceRecord {
            rx_bin: "012345".to_string(),
            ..InsuranceRecord::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["rxBIN"], "012345");
    }

    #[test]
    fn is_active_defaults_to_true_when_absent_from_wire() {
        let record: InsuranceRecord = serde_json::from_str(
            r#"{"userId":"u1","insuranceCompany":"","policyNumber":"","planType":"",
                "planName":"","rxBIN":"","deductible":0,"deductibleMet":0,
                "outOfPocketMax":0,"outOfPocketMet":0,"effectiveDate":""}"#,
        )
        .unwrap();
        assert!(record.is_active);
    }
}
