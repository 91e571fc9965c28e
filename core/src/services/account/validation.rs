//! Request field validation applied before any storage call

use crate::domain::entities::account::Score;
use crate::errors::{DomainError, DomainResult};

/// Smallest f64 that is out of i64 range (2^63)
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Require a non-blank field and return it trimmed.
pub fn require_field<'a>(field: &str, value: &'a str) -> DomainResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_input(field, "must not be blank"));
    }
    Ok(trimmed)
}

/// Require a non-blank secret. Unlike `require_field` the value is returned
/// untouched: surrounding whitespace is part of a password.
pub fn require_secret<'a>(field: &str, value: &'a str) -> DomainResult<&'a str> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_input(field, "must not be blank"));
    }
    Ok(value)
}

/// A score as the caller supplied it.
///
/// Integers travel as `Whole` and are stored exactly; only `Decimal` input
/// goes through the float checks of `parse_score`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreInput {
    Whole(i64),
    Decimal(f64),
}

impl From<i64> for ScoreInput {
    fn from(value: i64) -> Self {
        ScoreInput::Whole(value)
    }
}

impl From<f64> for ScoreInput {
    fn from(value: f64) -> Self {
        ScoreInput::Decimal(value)
    }
}

impl ScoreInput {
    /// Resolve into a stored `Score`
    pub fn into_score(self) -> DomainResult<Score> {
        match self {
            ScoreInput::Whole(value) => Ok(value),
            ScoreInput::Decimal(value) => parse_score(value),
        }
    }
}

/// Convert a raw numeric score into a `Score`.
///
/// Rejects NaN, infinities, fractional values and anything outside the
/// 64-bit signed range.
pub fn parse_score(value: f64) -> DomainResult<Score> {
    if !value.is_finite() {
        return Err(DomainError::invalid_input("score", "must be a finite number"));
    }
    if value.fract() != 0.0 {
        return Err(DomainError::invalid_input("score", "must be a whole number"));
    }
    if !(-I64_BOUND..I64_BOUND).contains(&value) {
        return Err(DomainError::invalid_input("score", "is out of range"));
    }
    Ok(value as Score)
}
