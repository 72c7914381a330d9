//! Loan models for amortized (EMI) calculations.

use serde::{Deserialize, Serialize};

/// Terms of an amortizing loan.
///
/// # Example
///
/// ```
/// use finance_engine::models::LoanTerms;
///
/// let terms = LoanTerms {
///     principal: 300_000.0,
///     annual_rate_percent: 8.5,
///     term_years: 20.0,
/// };
/// assert_eq!(terms.number_of_payments(), 240.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Purchase price or amount borrowed before any down payment.
    pub principal: f64,
    /// Nominal annual interest rate as a percentage.
    pub annual_rate_percent: f64,
    /// Loan term in years.
    pub term_years: f64,
}

impl LoanTerms {
    /// Periodic (monthly) interest rate as a fraction.
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }

    /// Total number of monthly payments.
    pub fn number_of_payments(&self) -> f64 {
        self.term_years * 12.0
    }
}

/// Principal and interest paid during one schedule year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyBreakdown {
    /// Zero-based year index.
    pub year: u32,
    /// Principal repaid during the year.
    pub principal_paid: f64,
    /// Interest paid during the year.
    pub interest_paid: f64,
    /// Balance left after the year.
    pub remaining_principal: f64,
}

/// Result of an amortization calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// Principal minus down payment.
    pub loan_amount: f64,
    /// Fixed monthly installment.
    pub periodic_payment: f64,
    /// Installment multiplied by the number of payments.
    pub total_payment: f64,
    /// Total payment minus loan amount.
    pub total_interest: f64,
    /// Year-by-year split, truncated at the requested cap.
    pub schedule: Vec<YearlyBreakdown>,
}
