//! Input validation helpers
//!
//! Centralized text length constants and validation functions.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: chart, table, guest
pub const MAX_NAME_LEN: usize = 200;

/// Notes and venue names
pub const MAX_NOTE_LEN: usize = 500;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate an optional string against the length limit.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_and_oversized_text() {
        assert!(validate_required_text("  ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Head table", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn optional_text_allows_none() {
        assert!(validate_optional_text(None, "notes", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(Some("fine"), "notes", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(Some(&"x".repeat(501)), "notes", MAX_NOTE_LEN).is_err());
    }
}
