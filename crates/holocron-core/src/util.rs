use crate::error::AppError;

/// Require a non-blank string field, returning it trimmed.
///
/// Example: `required("username", Some(" luke ".into()))` → `Ok("luke")`
pub fn required(field: &str, value: Option<String>) -> Result<String, AppError> {
    optional(value).ok_or_else(|| AppError::Validation(format!("Missing required field: {field}")))
}

/// Normalize an optional string field: blank becomes `None`, the rest is trimmed.
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
