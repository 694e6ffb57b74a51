//! Command implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use medrx_model::{ErrorEnvelope, InsuranceRecord, PrescriptionRecord, UserRecord, ValidationResult};
use medrx_validate::{validate_insurance, validate_prescription, validate_user};

use crate::cli::Command;

/// Runs one validation command and returns the result for reporting.
pub fn run(command: &Command) -> Result<ValidationResult> {
    match command {
        Command::User { file } => {
            let record: UserRecord = read_record(file)?;
            info!(path = %file.display(), "validating user record");
            Ok(validate_user(&record))
        }
        Command::Insurance { file } => {
            let record: InsuranceRecord = read_record(file)?;
            info!(path = %file.display(), "validating insurance record");
            Ok(validate_insurance(&record))
        }
        Command::Prescription { file } => {
            let record: PrescriptionRecord = read_record(file)?;
            info!(path = %file.display(), "validating prescription record");
            Ok(validate_prescription(&record))
        }
    }
}

/// Prints a validation result, as plain text or a JSON error envelope.
pub fn report(result: &ValidationResult, json: bool) -> Result<()> {
    if json {
        if result.is_valid {
            println!(r#"{{"success":true}}"#);
        } else {
            let envelope = ErrorEnvelope::validation(result);
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        return Ok(());
    }
    if result.is_valid {
        println!("valid");
    } else {
        println!("invalid ({} violations)", result.errors.len());
        for error in &result.errors {
            println!("  - {error}");
        }
    }
    Ok(())
}

fn read_record<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse {} as JSON", path.display()))
}
