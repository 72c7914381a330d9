//! Input guards shared by the calculations.
//!
//! Every guard returns the value unchanged on success so it can be used
//! inline, and reports failures as [`EngineError::InvalidParameter`].

use crate::error::{EngineError, EngineResult};

/// Rejects `NaN` and infinities.
pub(crate) fn require_finite(field: &str, value: f64) -> EngineResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::invalid(field, format!("must be a finite number, got {}", value)))
    }
}

/// Rejects non-finite and negative values.
pub(crate) fn require_non_negative(field: &str, value: f64) -> EngineResult<f64> {
    let value = require_finite(field, value)?;
    if value < 0.0 {
        return Err(EngineError::invalid(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(value)
}

/// Longest horizon, in years, a loan term, savings plan or schedule may span.
pub const MAX_HORIZON_YEARS: u32 = 100;

/// Rejects non-finite, negative and overly long horizons.
pub(crate) fn require_horizon(field: &str, years: f64) -> EngineResult<f64> {
    let years = require_non_negative(field, years)?;
    if years > f64::from(MAX_HORIZON_YEARS) {
        return Err(EngineError::invalid(
            field,
            format!("must not exceed {} years, got {}", MAX_HORIZON_YEARS, years),
        ));
    }
    Ok(years)
}

/// Rejects a computed amount that overflowed to infinity or became `NaN`.
pub(crate) fn require_finite_result(field: &str, value: f64) -> EngineResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::ResultOutOfRange {
            field: field.to_string(),
            value,
        })
    }
}

/// Rejects non-finite, zero and negative values.
pub(crate) fn require_positive(field: &str, value: f64) -> EngineResult<f64> {
    let value = require_finite(field, value)?;
    if value <= 0.0 {
        return Err(EngineError::invalid(
            field,
            format!("must be greater than zero, got {}", value),
        ));
    }
    Ok(value)
}
