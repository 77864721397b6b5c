//! Structural validation rules for payload fields.
//!
//! Pure predicates, each failing with an error that names the offending
//! field and the violated constraint. The builder runs them the moment a
//! value is supplied, so the first violation wins and construction never
//! proceeds on malformed input. Nothing here checks that an identifier is
//! real or registered; only shape (length, character class) is enforced.

use crate::errors::{PromptPayError, Result};
use rust_decimal::Decimal;

/// Checks that `value` is non-empty and contains only ASCII digits.
pub fn numeric(field: &str, value: &str) -> Result<()> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PromptPayError::NotNumeric(field.to_string()));
    }
    Ok(())
}

/// Checks that `value` is non-empty and contains only ASCII letters and
/// digits. Punctuation, whitespace, and non-ASCII are all rejected.
pub fn alphanumeric(field: &str, value: &str) -> Result<()> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(PromptPayError::NotAlphanumeric(field.to_string()));
    }
    Ok(())
}

/// Checks that `value` is at most `max` bytes long.
pub fn max_length(field: &str, value: &str, max: usize) -> Result<()> {
    if value.len() > max {
        return Err(PromptPayError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

/// Checks that `value` is non-negative and carries at most two fractional
/// digits once trailing zeros are stripped. Over-precision amounts are
/// rejected, never rounded.
pub fn amount(value: Decimal) -> Result<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(PromptPayError::NegativeAmount);
    }
    if value.normalize().scale() > 2 {
        return Err(PromptPayError::AmountPrecision);
    }
    Ok(())
}
