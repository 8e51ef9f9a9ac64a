//! Request precondition checks.
//!
//! Pure logic, no database dependencies. Every check runs before any
//! persistence call and reports failures as [`CoreError::Validation`],
//! which the API layer maps to 422. Nothing here writes partial state.

use crate::error::CoreError;
use crate::slug::SLUG_LEN;
use crate::types::DbId;

/// Maximum size of a playground's `contents` blob, in bytes.
///
/// One less than the 24-bit boundary: the limit of the MEDIUMTEXT column
/// the original store kept contents in.
pub const MAX_CONTENTS_BYTES: usize = 16_777_214;

/// Check that `contents` is present, non-empty, and within the size bound.
pub fn validate_contents(contents: &str) -> Result<(), CoreError> {
    if contents.is_empty() {
        return Err(CoreError::Validation(
            "contents must not be empty".to_string(),
        ));
    }
    if contents.len() > MAX_CONTENTS_BYTES {
        return Err(CoreError::Validation(format!(
            "contents exceeds maximum size of {MAX_CONTENTS_BYTES} bytes"
        )));
    }
    Ok(())
}

/// Check that an update request carries a slug of exactly [`SLUG_LEN`]
/// characters.
pub fn validate_update_slug(slug: &str) -> Result<(), CoreError> {
    if slug.len() != SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "slug must be exactly {SLUG_LEN} characters"
        )));
    }
    Ok(())
}

/// Check the required fields of a legacy create/new-version request:
/// `name`, `author`, and `contents` must all be present and non-empty.
pub fn validate_legacy_fields(
    name: Option<&str>,
    author: Option<&str>,
    contents: Option<&str>,
) -> Result<(), CoreError> {
    for (field, value) in [("name", name), ("author", author), ("contents", contents)] {
        match value {
            Some(v) if !v.is_empty() => {}
            _ => {
                return Err(CoreError::Validation(format!(
                    "required field '{field}' is missing"
                )));
            }
        }
    }
    Ok(())
}

/// Parse a legacy path parameter as an integer.
///
/// Legacy ids and version numbers arrive as raw path segments; anything
/// that does not parse is a client error, not a routing miss.
pub fn parse_int_param(name: &str, raw: &str) -> Result<DbId, CoreError> {
    raw.parse::<DbId>()
        .map_err(|_| CoreError::Validation(format!("'{name}' must be an integer, got '{raw}'")))
}
