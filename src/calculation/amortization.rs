//! Amortized loan (EMI) calculation.
//!
//! This module computes the fixed monthly installment that repays a loan
//! over its term, the resulting totals, and a yearly principal/interest
//! split for the first few years of the loan.

use crate::error::{EngineError, EngineResult};
use crate::models::{AmortizationResult, LoanTerms, YearlyBreakdown};

use super::growth::{annuity_factor, growth_minus_one};
use super::validation::{
    MAX_HORIZON_YEARS, require_finite_result, require_horizon, require_non_negative,
    require_positive,
};

/// Default number of years covered by the yearly schedule.
pub const DEFAULT_SCHEDULE_YEARS: u32 = 5;

/// Fixed installment for an annuity loan.
///
/// `loan_amount * r * (1+r)^n / ((1+r)^n - 1)`, which tends to
/// `loan_amount / n` as the periodic rate approaches zero.
pub fn periodic_payment(loan_amount: f64, periodic_rate: f64, number_of_payments: f64) -> f64 {
    let growth = 1.0 + growth_minus_one(periodic_rate, number_of_payments);
    loan_amount * growth / annuity_factor(periodic_rate, number_of_payments)
}

/// Computes the amortization of a loan.
///
/// The loan amount is the principal less the down payment. The schedule
/// holds one row per year index from `0` through
/// `min(schedule_years, floor(term_years))` inclusive. Each row charges a
/// full year of interest on the balance at the start of the year
/// (`balance * r * 12`) and attributes the rest of twelve installments to
/// principal; interest is not recomputed month by month.
///
/// # Errors
///
/// Returns `InvalidParameter` if:
/// - `principal` or `term_years` is not positive
/// - `term_years` or `schedule_years` exceeds [`MAX_HORIZON_YEARS`]
/// - `annual_rate_percent` or `down_payment` is negative
/// - `down_payment` exceeds `principal`
/// - any input is not finite
///
/// Returns `ResultOutOfRange` if the installment or a schedule row
/// overflows.
///
/// # Examples
///
/// ```
/// use finance_engine::calculation::compute_amortization;
/// use finance_engine::models::LoanTerms;
///
/// let terms = LoanTerms {
///     principal: 120_000.0,
///     annual_rate_percent: 0.0,
///     term_years: 10.0,
/// };
/// let result = compute_amortization(&terms, 0.0, 5).unwrap();
/// assert_eq!(result.periodic_payment, 1_000.0);
/// assert_eq!(result.total_interest, 0.0);
/// ```
pub fn compute_amortization(
    terms: &LoanTerms,
    down_payment: f64,
    schedule_years: u32,
) -> EngineResult<AmortizationResult> {
    let principal = require_positive("principal", terms.principal)?;
    require_non_negative("annual_rate_percent", terms.annual_rate_percent)?;
    let term_years = require_horizon(
        "term_years",
        require_positive("term_years", terms.term_years)?,
    )?;
    if schedule_years > MAX_HORIZON_YEARS {
        return Err(EngineError::invalid(
            "schedule_years",
            format!(
                "must not exceed {} years, got {}",
                MAX_HORIZON_YEARS, schedule_years
            ),
        ));
    }
    let down_payment = require_non_negative("down_payment", down_payment)?;

    if down_payment > principal {
        return Err(EngineError::invalid(
            "down_payment",
            format!(
                "must not exceed the principal ({} > {})",
                down_payment, principal
            ),
        ));
    }

    let loan_amount = principal - down_payment;
    let monthly_rate = terms.monthly_rate();
    let number_of_payments = terms.number_of_payments();

    let payment = require_finite_result(
        "periodic_payment",
        periodic_payment(loan_amount, monthly_rate, number_of_payments),
    )?;
    let total_payment = require_finite_result("total_payment", payment * number_of_payments)?;
    let total_interest = total_payment - loan_amount;

    let last_year = schedule_years.min(term_years.floor() as u32);
    let yearly_payment = payment * 12.0;
    let mut remaining_principal = loan_amount;
    let mut schedule = Vec::with_capacity(last_year as usize + 1);

    for year in 0..=last_year {
        let interest_paid =
            require_finite_result("interest_paid", remaining_principal * monthly_rate * 12.0)?;
        let principal_paid = require_finite_result("principal_paid", yearly_payment - interest_paid)?;
        remaining_principal = require_finite_result(
            "remaining_principal",
            remaining_principal - principal_paid,
        )?;

        schedule.push(YearlyBreakdown {
            year,
            principal_paid,
            interest_paid,
            remaining_principal,
        });
    }

    Ok(AmortizationResult {
        loan_amount,
        periodic_payment: payment,
        total_payment,
        total_interest,
        schedule,
    })
}
