//! Parsing of raw per-turn input.

use std::num::IntErrorKind;

use crate::errors::domain::{DomainError, ValidationKind};

/// Parse a raw turn value as a base-10 integer.
///
/// Surrounding whitespace and a leading sign are accepted. Blank or
/// non-numeric input is `NotANumber`; a number too large to represent is
/// reported as `OutOfRange`, since it is numeric but can never be valid.
pub fn parse_value(raw: &str) -> Result<i64, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::NotANumber,
            "Please enter a value. Blank inputs are not allowed.",
        ));
    }

    trimmed.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => DomainError::validation(
            ValidationKind::OutOfRange,
            format!("{trimmed} is out of range."),
        ),
        _ => DomainError::validation(
            ValidationKind::NotANumber,
            format!("Please enter a valid number (got {trimmed:?})."),
        ),
    })
}
