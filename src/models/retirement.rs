//! Retirement plan models.

use serde::{Deserialize, Serialize};

/// Inputs for a retirement savings projection.
///
/// # Example
///
/// ```
/// use finance_engine::models::RetirementPlan;
///
/// let plan = RetirementPlan {
///     current_age: 30.0,
///     retirement_age: 60.5,
///     current_savings: 50_000.0,
///     monthly_contribution: 500.0,
///     expected_annual_return_percent: 7.0,
///     inflation_rate_percent: 3.0,
/// };
/// assert_eq!(plan.years_to_retirement(), 30.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementPlan {
    /// Age today, in years; fractional ages are allowed.
    pub current_age: f64,
    /// Planned retirement age; must be greater than `current_age`.
    pub retirement_age: f64,
    /// Savings already accumulated.
    pub current_savings: f64,
    /// Amount added at the end of every month.
    pub monthly_contribution: f64,
    /// Expected annual return as a percentage.
    pub expected_annual_return_percent: f64,
    /// Expected annual inflation as a percentage.
    pub inflation_rate_percent: f64,
}

impl RetirementPlan {
    /// Years between now and retirement (0 if the ages are inverted).
    pub fn years_to_retirement(&self) -> f64 {
        (self.retirement_age - self.current_age).max(0.0)
    }
}

/// Projected savings at retirement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementProjection {
    /// Nominal balance at retirement.
    pub future_value: f64,
    /// `future_value` in today's purchasing power.
    pub real_value: f64,
    /// Years until retirement.
    pub years_to_retirement: f64,
    /// Current savings plus every monthly contribution.
    pub total_contributions: f64,
}
