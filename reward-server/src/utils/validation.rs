//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so limits are applied
//! at the handler boundary.

use crate::utils::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: user, restaurant, offer title, slider title
pub const MAX_NAME_LEN: usize = 200;

/// Offer / redemption descriptions
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (stored as-is; hashing belongs to the auth service)
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs / image references
pub const MAX_URL_LEN: usize = 2048;

/// Minimum digits for a phone number
pub const MIN_PHONE_LEN: usize = 10;

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

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
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

/// Validate a phone number the way the registration form does.
pub fn validate_phone(phone: &str) -> Result<(), AppError> {
    if phone.len() < MIN_PHONE_LEN {
        return Err(AppError::new(ErrorCode::PhoneInvalid));
    }
    Ok(())
}
