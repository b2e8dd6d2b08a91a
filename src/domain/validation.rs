use super::AppError;

/// Returns `true` when the value is empty or consists only of whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Rejects a blank value with the given message.
pub fn require_not_blank<'a>(value: &'a str, message: &str) -> Result<&'a str, AppError> {
    if is_blank(value) {
        return Err(AppError::invalid_argument(message));
    }
    Ok(value)
}
