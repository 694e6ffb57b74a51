//! Transport error envelope.
//!
//! The server layer wraps failed operations in a fixed envelope shape:
//! `{"success": false, "error": {"code": ..., "message": ..., "details": ...}}`.
//! The core defines the shape so client and server agree on it, but never
//! sends it anywhere itself.

use serde::{Deserialize, Serialize};

use crate::{ErrorCode, ValidationResult};

/// Detail payload for a `VALIDATION_ERROR` envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationDetails {
    pub errors: Vec<String>,
}

/// Body of the `error` member of the envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ValidationDetails>,
}

/// The full error envelope handed back to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorBody,
}

impl ErrorEnvelope {
    /// Wraps a failed [`ValidationResult`] in the documented envelope.
    pub fn validation(result: &ValidationResult) -> Self {
        ErrorEnvelope {
            success: false,
            error: ErrorBody {
                code: ErrorCode::ValidationError,
                message: "Validation failed".to_string(),
                details: Some(ValidationDetails {
                    errors: result.errors.clone(),
                }),
            },
        }
    }

    /// An envelope for a non-validation failure, without details.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ErrorEnvelope {
            success: false,
            error: ErrorBody {
                code,
                message: message.into(),
                details: None,
            },
        }
    }
}
