//! Input validation functions
//!
//! Numeric precondition checks shared by the calculation modules. Every
//! check rejects NaN and infinities along with out-of-range values.

use crate::errors::{CalcResult, InvalidInputError};

/// Require a finite value strictly greater than zero
pub fn ensure_positive(field: &'static str, value: f64) -> CalcResult<()> {
    ensure_finite(field, value)?;
    if value <= 0.0 {
        return Err(InvalidInputError::new(field, "must be greater than zero"));
    }
    Ok(())
}

/// Require a finite value
pub fn ensure_finite(field: &'static str, value: f64) -> CalcResult<()> {
    if value.is_nan() || value.is_infinite() {
        return Err(InvalidInputError::new(field, "must be a valid number"));
    }
    Ok(())
}

/// Validate age in whole years
pub fn validate_age_years(age_years: i32) -> CalcResult<()> {
    if age_years < 0 {
        return Err(InvalidInputError::new("age_years", "cannot be negative"));
    }
    Ok(())
}

/// Validate goal horizon in weeks
pub fn validate_weeks(weeks: i32) -> CalcResult<()> {
    if weeks <= 0 {
        return Err(InvalidInputError::new("weeks", "must be at least 1"));
    }
    Ok(())
}
