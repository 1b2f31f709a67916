//! Identifier validation.
//!
//! Pure: surrounding whitespace is trimmed, nothing else is normalized
//! (no case folding, so `1234ab-1` is rejected).

use crate::errors::{AppError, AppResult};
use crate::models::{Identifier, IdentifierKind};
use regex::Regex;
use std::sync::LazyLock;

static REGISTRATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}[A-Z]{2}-[1-7]$").unwrap());

static VIN_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}$").unwrap());

pub fn validate(kind: IdentifierKind, raw: &str) -> AppResult<Identifier> {
    let candidate = raw.trim();

    let ok = match kind {
        IdentifierKind::Registration => REGISTRATION_RE.is_match(candidate),
        IdentifierKind::Vin => VIN_SUFFIX_RE.is_match(candidate),
    };

    if !ok {
        return Err(AppError::InvalidFormat(format!(
            "'{}' is not a valid {} identifier (expected {})",
            candidate,
            kind.code(),
            kind.pattern_hint()
        )));
    }

    Ok(Identifier::new_unchecked(candidate))
}

/// Hours must be a finite, strictly positive number.
pub fn validate_hours(hours: f64) -> AppResult<f64> {
    if !hours.is_finite() || hours <= 0.0 {
        return Err(AppError::InvalidValue(format!(
            "hours must be a positive number, got {}",
            hours
        )));
    }
    Ok(hours)
}

/// Parse user-typed hours, accepting a decimal comma ("2,5").
pub fn parse_hours(raw: &str) -> AppResult<f64> {
    let normalized = raw.trim().replace(',', ".");
    let hours = normalized
        .parse::<f64>()
        .map_err(|_| AppError::InvalidValue(format!("'{}' is not a number", raw.trim())))?;
    validate_hours(hours)
}
