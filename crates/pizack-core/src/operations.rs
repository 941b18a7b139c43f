//! Input validation shared by the store and its interfaces.

use crate::{PizackError, Result};

/// Trim `raw` and reject it when nothing is left.
///
/// # Errors
///
/// * `PizackError::InvalidInput` - When the value is empty or whitespace
///
/// # Examples
///
/// ```rust
/// # use pizack_core::operations::validate_title;
/// assert_eq!(validate_title("title", "  Build login ")?, "Build login");
/// assert!(validate_title("title", "   ").is_err());
/// # Result::<(), pizack_core::PizackError>::Ok(())
/// ```
pub fn validate_title<'a>(field: &str, raw: &'a str) -> Result<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PizackError::invalid_input(field)
            .with_reason(format!("The {field} cannot be empty")));
    }
    Ok(trimmed)
}

/// Normalize an optional description: trimmed, and `None` when blank.
pub fn normalize_description(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from)
}
