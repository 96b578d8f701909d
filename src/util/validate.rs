//! Input checks run before any storage access.

use crate::error::AppError;

/// Rejects empty or whitespace-only values for a required field.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be blank", field)));
    }

    Ok(())
}

/// Rejects values that are not safe to embed in a URL path segment.
///
/// Allowed characters are ASCII letters, digits, `-` and `_`.
pub fn require_url_safe(field: &str, value: &str) -> Result<(), AppError> {
    require_non_blank(field, value)?;

    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::Validation(format!(
            "{} may only contain ASCII letters, digits, '-' and '_'",
            field
        )));
    }

    Ok(())
}
