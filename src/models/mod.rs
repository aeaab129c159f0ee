// src/models/mod.rs

pub mod comment;
pub mod quiz;
pub mod record;
pub mod stats;

/// Rejects strings made only of whitespace.
/// `length(min = 1)` alone lets "   " through.
pub(crate) fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("must_not_be_blank"));
    }
    Ok(())
}
