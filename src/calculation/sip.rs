//! Systematic investment plan (SIP) projection.
//!
//! A SIP invests a fixed amount at the start of every month. The future
//! value is the annuity-due formula
//! `M * ((1+i)^months - 1) / i * (1+i)`, which tends to `M * months` as `i`
//! approaches zero.

use std::iter::FusedIterator;

use crate::error::EngineResult;
use crate::models::{SipPlan, SipProjectionPoint, SipResult};

use super::growth::annuity_factor;
use super::validation::{require_finite_result, require_horizon, require_non_negative};

/// Future value of `months` start-of-month contributions.
pub fn sip_future_value(monthly_investment: f64, monthly_rate: f64, months: f64) -> f64 {
    monthly_investment * annuity_factor(monthly_rate, months) * (1.0 + monthly_rate)
}

fn validate(plan: &SipPlan) -> EngineResult<()> {
    require_non_negative("monthly_investment", plan.monthly_investment)?;
    require_horizon("years", plan.years)?;
    require_non_negative("annual_return_percent", plan.annual_return_percent)?;
    Ok(())
}

/// Projects the value of a SIP at the end of its term.
///
/// # Errors
///
/// Returns `InvalidParameter` if any plan field is negative or not finite,
/// or if `years` exceeds [`super::MAX_HORIZON_YEARS`]. Returns
/// `ResultOutOfRange` if the projected value overflows.
///
/// # Examples
///
/// ```
/// use finance_engine::calculation::project_sip;
/// use finance_engine::models::SipPlan;
///
/// let result = project_sip(&SipPlan {
///     monthly_investment: 1_000.0,
///     years: 5.0,
///     annual_return_percent: 0.0,
/// })
/// .unwrap();
/// assert_eq!(result.future_value, 60_000.0);
/// assert_eq!(result.total_returns, 0.0);
/// ```
pub fn project_sip(plan: &SipPlan) -> EngineResult<SipResult> {
    validate(plan)?;

    let months = plan.years * 12.0;
    let future_value = require_finite_result(
        "future_value",
        sip_future_value(plan.monthly_investment, plan.monthly_rate(), months),
    )?;
    let total_investment = require_finite_result(
        "total_investment",
        plan.monthly_investment * months,
    )?;

    Ok(SipResult {
        future_value,
        total_investment,
        total_returns: future_value - total_investment,
    })
}

/// Returns a lazy year-by-year projection for years `0..=floor(years)`.
///
/// # Errors
///
/// Returns `InvalidParameter` if any plan field is negative or not finite,
/// or if `years` exceeds [`super::MAX_HORIZON_YEARS`]. Returns
/// `ResultOutOfRange` if the final year's value overflows; earlier years
/// are smaller, so every point the iterator yields is finite.
pub fn yearly_projection(plan: &SipPlan) -> EngineResult<SipProjection> {
    validate(plan)?;
    let projection = SipProjection {
        monthly_investment: plan.monthly_investment,
        monthly_rate: plan.monthly_rate(),
        next_year: 0,
        last_year: plan.years.floor() as u32,
        exhausted: false,
    };
    require_finite_result("value", projection.point_at(projection.last_year).value)?;
    Ok(projection)
}

/// Iterator over yearly SIP projection points.
///
/// Every point is a pure function of its year index, so cloning the
/// iterator before consuming it gives an identical, independent sequence.
#[derive(Debug, Clone)]
pub struct SipProjection {
    monthly_investment: f64,
    monthly_rate: f64,
    next_year: u32,
    last_year: u32,
    exhausted: bool,
}

impl SipProjection {
    /// Computes the projection point for an arbitrary year.
    pub fn point_at(&self, year: u32) -> SipProjectionPoint {
        let months = f64::from(year) * 12.0;
        SipProjectionPoint {
            year,
            invested: self.monthly_investment * months,
            value: sip_future_value(self.monthly_investment, self.monthly_rate, months),
        }
    }
}

impl Iterator for SipProjection {
    type Item = SipProjectionPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let point = self.point_at(self.next_year);
        if self.next_year == self.last_year {
            self.exhausted = true;
        } else {
            self.next_year += 1;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.exhausted {
            0
        } else {
            (self.last_year - self.next_year) as usize + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SipProjection {}

impl FusedIterator for SipProjection {}
