//! Input text normalization.

/// Trims a raw input string, returning `None` when nothing remains.
///
/// Validators and callers use this to treat whitespace-only input the same
/// as an absent field.
pub fn normalized_text(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
