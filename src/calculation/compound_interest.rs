//! Lump-sum compound interest.

use crate::error::{EngineError, EngineResult};
use crate::models::{CompoundInterestResult, CompoundInterestTerms};

use super::validation::{require_finite_result, require_non_negative};

/// Grows a principal at a nominal annual rate compounded `n` times a year.
///
/// `amount = principal * (1 + r/n)^(n*t)` with `r` the annual rate as a
/// fraction and `t` the number of years.
///
/// # Errors
///
/// Returns `InvalidParameter` if principal, rate or years is negative or not
/// finite, or if the compounding frequency is zero. Returns
/// `ResultOutOfRange` if the amount overflows.
///
/// # Examples
///
/// ```
/// use finance_engine::calculation::compound_interest;
/// use finance_engine::models::CompoundInterestTerms;
///
/// let result = compound_interest(&CompoundInterestTerms {
///     principal: 1_000.0,
///     annual_rate_percent: 10.0,
///     years: 2.0,
///     compounding_frequency_per_year: 1,
/// })
/// .unwrap();
/// assert!((result.total_amount - 1_210.0).abs() < 1e-9);
/// ```
pub fn compound_interest(terms: &CompoundInterestTerms) -> EngineResult<CompoundInterestResult> {
    let principal = require_non_negative("principal", terms.principal)?;
    let rate = require_non_negative("annual_rate_percent", terms.annual_rate_percent)? / 100.0;
    let years = require_non_negative("years", terms.years)?;

    if terms.compounding_frequency_per_year == 0 {
        return Err(EngineError::invalid(
            "compounding_frequency_per_year",
            "must be at least 1",
        ));
    }
    let n = f64::from(terms.compounding_frequency_per_year);

    let total_amount =
        require_finite_result("total_amount", principal * (1.0 + rate / n).powf(n * years))?;

    Ok(CompoundInterestResult {
        total_amount,
        interest_earned: total_amount - principal,
    })
}
