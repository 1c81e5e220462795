//! Invocation arguments arrive as flat strings. These helpers turn them into
//! typed values, or into a `Validation` error naming the offending field,
//! before anything is constructed or written.

use chrono::{DateTime, NaiveDate};

use crate::errors::{ReechError, Result};
use crate::keyspace::validate_id;

/// Reject empty or whitespace-only free-text arguments
///
/// # Errors
///
/// Returns `Validation` naming `field`.
pub fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReechError::validation(field, "must not be empty"));
    }
    Ok(())
}

/// Validate an argument that becomes (part of) a ledger key
///
/// # Errors
///
/// Returns `Validation` naming `field`.
pub fn require_id(field: &str, value: &str) -> Result<()> {
    validate_id(field, value)
}

/// Parse a weight in kilograms; must be finite and strictly positive
///
/// # Errors
///
/// Returns `Validation` on `weightKg` if unparseable, non-finite, zero or negative.
///
/// ```
/// use reech_core::rules::validation::parse_weight_kg;
///
/// assert_eq!(parse_weight_kg("10.5").unwrap(), 10.5);
/// assert!(parse_weight_kg("-1.0").is_err());
/// assert!(parse_weight_kg("ten").is_err());
/// ```
pub fn parse_weight_kg(raw: &str) -> Result<f64> {
    let weight: f64 = raw
        .parse()
        .map_err(|_| ReechError::validation("weightKg", format!("'{}' is not a number", raw)))?;
    if !weight.is_finite() {
        return Err(ReechError::validation("weightKg", "must be finite"));
    }
    if weight <= 0.0 {
        return Err(ReechError::validation("weightKg", "weight must be positive"));
    }
    Ok(weight)
}

/// Check that `raw` is an ISO-8601 calendar date (`2025-08-09`) or an
/// RFC 3339 timestamp (`2025-08-09T06:30:00Z`)
///
/// Reports compare dates as strings, so only zero-padded forms are accepted.
///
/// # Errors
///
/// Returns `Validation` naming `field`.
///
/// ```
/// use reech_core::rules::validation::require_iso_date;
///
/// assert!(require_iso_date("date", "2025-08-09").is_ok());
/// assert!(require_iso_date("date", "2025-08-09T06:30:00Z").is_ok());
/// assert!(require_iso_date("date", "2025-8-9").is_err());
/// assert!(require_iso_date("date", "09/08/2025").is_err());
/// ```
pub fn require_iso_date(field: &str, raw: &str) -> Result<()> {
    if has_date_shape(raw) {
        let calendar_date =
            raw.len() == 10 && NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok();
        if calendar_date || DateTime::parse_from_rfc3339(raw).is_ok() {
            return Ok(());
        }
    }
    Err(ReechError::validation(
        field,
        format!("'{}' is not an ISO-8601 date", raw),
    ))
}

/// `YYYY-MM-DD` digit layout in the first ten bytes
///
/// chrono's numeric fields skip leading whitespace, so `2025-08- 9` would
/// otherwise parse.
fn has_date_shape(raw: &str) -> bool {
    match raw.as_bytes().get(..10) {
        Some(head) => head.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        }),
        None => false,
    }
}

/// Parse a list argument encoded as a JSON array of strings
///
/// Order and duplicates are preserved.
///
/// # Errors
///
/// Returns `Validation` naming `field` if `raw` is not a JSON string array.
pub fn parse_string_list(field: &str, raw: &str) -> Result<Vec<String>> {
    serde_json::from_str::<Vec<String>>(raw).map_err(|_| {
        ReechError::validation(field, "must be a JSON array of strings")
    })
}

/// Parse a whole-number argument
///
/// # Errors
///
/// Returns `Validation` naming `field`.
pub fn parse_int(field: &str, raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| ReechError::validation(field, format!("'{}' is not an integer", raw)))
}
