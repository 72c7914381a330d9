//! Retirement savings projection.
//!
//! Current savings grow as a lump sum while monthly contributions grow as
//! an ordinary annuity, both at the expected monthly return. The nominal
//! result is then discounted by inflation to today's purchasing power.

use crate::error::{EngineError, EngineResult};
use crate::models::{RetirementPlan, RetirementProjection};

use super::growth::{annuity_factor, growth_minus_one};
use super::validation::{
    require_finite, require_finite_result, require_horizon, require_non_negative,
};

/// Future value of end-of-month contributions.
///
/// `C * ((1+i)^m - 1) / i`, which tends to `C * m` as `i` approaches zero.
pub fn annuity_future_value(contribution: f64, monthly_rate: f64, months: f64) -> f64 {
    contribution * annuity_factor(monthly_rate, months)
}

/// Projects savings at retirement.
///
/// # Errors
///
/// Returns `InvalidParameter` if:
/// - either age is negative or not finite
/// - `retirement_age` is not greater than `current_age`
/// - the years to retirement exceed [`super::MAX_HORIZON_YEARS`]
/// - savings or contribution is negative or not finite
/// - the return or inflation rate is not finite, or is at or below -100%
///
/// Returns `ResultOutOfRange` if the projected balance overflows.
///
/// # Examples
///
/// ```
/// use finance_engine::calculation::project_retirement;
/// use finance_engine::models::RetirementPlan;
///
/// let projection = project_retirement(&RetirementPlan {
///     current_age: 40.0,
///     retirement_age: 50.0,
///     current_savings: 10_000.0,
///     monthly_contribution: 100.0,
///     expected_annual_return_percent: 0.0,
///     inflation_rate_percent: 0.0,
/// })
/// .unwrap();
/// assert_eq!(projection.future_value, 22_000.0);
/// assert_eq!(projection.real_value, 22_000.0);
/// ```
pub fn project_retirement(plan: &RetirementPlan) -> EngineResult<RetirementProjection> {
    let current_age = require_non_negative("current_age", plan.current_age)?;
    let retirement_age = require_non_negative("retirement_age", plan.retirement_age)?;
    if retirement_age <= current_age {
        return Err(EngineError::invalid(
            "retirement_age",
            format!(
                "must be greater than current age ({} <= {})",
                retirement_age, current_age
            ),
        ));
    }
    let savings = require_non_negative("current_savings", plan.current_savings)?;
    let contribution = require_non_negative("monthly_contribution", plan.monthly_contribution)?;
    let expected_return = require_rate(
        "expected_annual_return_percent",
        plan.expected_annual_return_percent,
    )?;
    let inflation = require_rate("inflation_rate_percent", plan.inflation_rate_percent)?;

    let years = require_horizon("years_to_retirement", plan.years_to_retirement())?;
    let monthly_rate = expected_return / 100.0 / 12.0;
    let total_months = years * 12.0;

    let future_value = require_finite_result(
        "future_value",
        savings * (1.0 + growth_minus_one(monthly_rate, total_months))
            + annuity_future_value(contribution, monthly_rate, total_months),
    )?;
    let real_value = require_finite_result(
        "real_value",
        future_value / (1.0 + growth_minus_one(inflation / 100.0, years)),
    )?;

    Ok(RetirementProjection {
        future_value,
        real_value,
        years_to_retirement: years,
        total_contributions: require_finite_result(
            "total_contributions",
            contribution * total_months + savings,
        )?,
    })
}

/// Rates may be negative but must leave a positive growth factor.
fn require_rate(field: &str, percent: f64) -> EngineResult<f64> {
    let percent = require_finite(field, percent)?;
    if percent <= -100.0 {
        return Err(EngineError::invalid(
            field,
            format!("must be greater than -100, got {}", percent),
        ));
    }
    Ok(percent)
}
