//! Record identifier generation.

use uuid::Uuid;

/// Generates a fresh opaque record identifier (UUID v4, hyphenated).
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}
