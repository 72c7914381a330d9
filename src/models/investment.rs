//! Investment growth models: lump-sum compounding and SIP plans.

use serde::{Deserialize, Serialize};

/// Terms of a lump-sum compound interest calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestTerms {
    /// Initial amount invested.
    pub principal: f64,
    /// Nominal annual rate as a percentage.
    pub annual_rate_percent: f64,
    /// Investment horizon in years.
    pub years: f64,
    /// Number of compounding periods per year (at least 1).
    pub compounding_frequency_per_year: u32,
}

/// Result of a lump-sum compound interest calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    /// Principal plus accumulated interest.
    pub total_amount: f64,
    /// `total_amount - principal`.
    pub interest_earned: f64,
}

/// A systematic investment plan: a fixed amount invested every month.
///
/// # Example
///
/// ```
/// use finance_engine::models::SipPlan;
///
/// let plan = SipPlan {
///     monthly_investment: 1_000.0,
///     years: 5.0,
///     annual_return_percent: 12.0,
/// };
/// assert_eq!(plan.monthly_rate(), 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipPlan {
    /// Amount invested at the start of every month.
    pub monthly_investment: f64,
    /// Plan duration in years.
    pub years: f64,
    /// Expected annual return as a percentage.
    pub annual_return_percent: f64,
}

impl SipPlan {
    /// Monthly return as a fraction.
    pub fn monthly_rate(&self) -> f64 {
        self.annual_return_percent / 12.0 / 100.0
    }
}

/// Aggregate outcome of a SIP at the end of its term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipResult {
    /// Value of all contributions plus growth.
    pub future_value: f64,
    /// Sum of all monthly contributions.
    pub total_investment: f64,
    /// `future_value - total_investment`.
    pub total_returns: f64,
}

/// One point of a year-by-year SIP projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipProjectionPoint {
    /// Year index, starting at 0.
    pub year: u32,
    /// Contributions made by the end of this year.
    pub invested: f64,
    /// Projected value at the end of this year.
    pub value: f64,
}
