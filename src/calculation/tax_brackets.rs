//! Progressive tax bracket integration.
//!
//! This module integrates an income over a [`TaxBracketTable`], taxing each
//! slice of income at its bracket's marginal rate. Flat slab schedules are
//! expressed as ordinary bracket tables and go through the same path.

use crate::config::FilingStatusTables;
use crate::error::EngineResult;
use crate::models::{BracketSlice, BracketTaxResult, FilingStatus, TaxBracketTable, TaxEstimate};

use super::validation::{require_finite, require_non_negative};

/// Computes the tax owed on a taxable income.
///
/// Brackets are walked in ascending order while tracking the previous
/// bracket's ceiling. The amount taxed in each bracket is
/// `min(remaining, upper_limit - previous_limit)`, clamped at zero. The walk
/// stops as soon as the remaining income is exhausted.
///
/// # Errors
///
/// Returns `InvalidParameter` if `taxable_income` is negative or not finite.
///
/// # Examples
///
/// ```
/// use finance_engine::calculation::compute_tax;
/// use finance_engine::models::{TaxBracket, TaxBracketTable};
///
/// let table = TaxBracketTable::new(vec![
///     TaxBracket::bounded(10.0, 10_000.0),
///     TaxBracket::unbounded(20.0),
/// ])
/// .unwrap();
///
/// let result = compute_tax(15_000.0, &table).unwrap();
/// assert_eq!(result.total_tax, 2_000.0);
/// assert_eq!(result.slices.len(), 2);
/// ```
pub fn compute_tax(taxable_income: f64, table: &TaxBracketTable) -> EngineResult<BracketTaxResult> {
    let taxable_income = require_non_negative("taxable_income", taxable_income)?;

    let mut total_tax = 0.0;
    let mut remaining = taxable_income;
    let mut previous_limit = 0.0;
    let mut slices = Vec::new();

    for bracket in table.brackets() {
        if remaining <= 0.0 {
            break;
        }

        let ceiling = bracket.ceiling();
        let taxable_amount = remaining.min(ceiling - previous_limit).max(0.0);
        if taxable_amount <= 0.0 {
            break;
        }

        let tax = taxable_amount * bracket.rate / 100.0;
        total_tax += tax;
        remaining -= taxable_amount;

        slices.push(BracketSlice {
            rate: bracket.rate,
            lower: previous_limit,
            upper: bracket.upper_limit,
            taxable_amount,
            tax,
        });

        previous_limit = ceiling;
    }

    Ok(BracketTaxResult { total_tax, slices })
}

/// Total tax as a percentage of gross income.
///
/// A gross income of zero yields an effective rate of zero.
pub fn effective_rate_percent(total_tax: f64, gross_income: f64) -> f64 {
    if gross_income == 0.0 {
        0.0
    } else {
        total_tax / gross_income * 100.0
    }
}

/// Estimates tax on a gross income against a single table.
///
/// Deductions are subtracted first and the taxable income floored at zero.
/// Negative deductions are accepted as given.
///
/// # Errors
///
/// Returns `InvalidParameter` if `gross_income` is negative or either input
/// is not finite.
pub fn estimate_with_table(
    gross_income: f64,
    deductions: f64,
    table: &TaxBracketTable,
) -> EngineResult<TaxEstimate> {
    let gross_income = require_non_negative("income", gross_income)?;
    let deductions = require_finite("deductions", deductions)?;

    let taxable_income = (gross_income - deductions).max(0.0);
    let BracketTaxResult { total_tax, slices } = compute_tax(taxable_income, table)?;

    Ok(TaxEstimate {
        gross_income,
        taxable_income,
        total_tax,
        effective_rate_percent: effective_rate_percent(total_tax, gross_income),
        take_home_pay: gross_income - total_tax,
        slices,
    })
}

/// Estimates tax for a filing status, selecting its bracket table.
///
/// # Examples
///
/// ```no_run
/// use finance_engine::calculation::estimate_tax;
/// use finance_engine::config::ConfigLoader;
/// use finance_engine::models::FilingStatus;
///
/// let loader = ConfigLoader::load("./config/us_2023").unwrap();
/// let estimate =
///     estimate_tax(60_000.0, FilingStatus::Single, 0.0, loader.config().brackets()).unwrap();
/// assert!((estimate.total_tax - 8_507.5).abs() < 1e-6);
/// ```
pub fn estimate_tax(
    gross_income: f64,
    filing_status: FilingStatus,
    deductions: f64,
    tables: &FilingStatusTables,
) -> EngineResult<TaxEstimate> {
    estimate_with_table(gross_income, deductions, tables.for_status(filing_status))
}

/// Computes tax under a flat slab schedule.
///
/// Slab schedules are plain bracket tables, so this is the same integration
/// as [`estimate_with_table`].
pub fn compute_slab_tax(
    income: f64,
    deductions: f64,
    slabs: &TaxBracketTable,
) -> EngineResult<TaxEstimate> {
    estimate_with_table(income, deductions, slabs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::TaxBracket;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn single_2023() -> TaxBracketTable {
        TaxBracketTable::new(vec![
            TaxBracket::bounded(10.0, 11_000.0),
            TaxBracket::bounded(12.0, 44_725.0),
            TaxBracket::bounded(22.0, 95_375.0),
            TaxBracket::bounded(24.0, 182_100.0),
            TaxBracket::bounded(32.0, 231_250.0),
            TaxBracket::bounded(35.0, 578_125.0),
            TaxBracket::unbounded(37.0),
        ])
        .unwrap()
    }

    fn married_2023() -> TaxBracketTable {
        TaxBracketTable::new(vec![
            TaxBracket::bounded(10.0, 22_000.0),
            TaxBracket::bounded(12.0, 89_450.0),
            TaxBracket::bounded(22.0, 190_750.0),
            TaxBracket::bounded(24.0, 364_200.0),
            TaxBracket::bounded(32.0, 462_500.0),
            TaxBracket::bounded(35.0, 693_750.0),
            TaxBracket::unbounded(37.0),
        ])
        .unwrap()
    }

    fn slab_schedule() -> TaxBracketTable {
        TaxBracketTable::new(vec![
            TaxBracket::bounded(0.0, 250_000.0),
            TaxBracket::bounded(5.0, 500_000.0),
            TaxBracket::bounded(10.0, 750_000.0),
            TaxBracket::bounded(15.0, 1_000_000.0),
            TaxBracket::bounded(20.0, 1_250_000.0),
            TaxBracket::bounded(25.0, 1_500_000.0),
            TaxBracket::unbounded(30.0),
        ])
        .unwrap()
    }

    fn tables() -> FilingStatusTables {
        FilingStatusTables {
            single: single_2023(),
            married: married_2023(),
        }
    }

    #[test]
    fn test_zero_income_owes_nothing() {
        let result = compute_tax(0.0, &single_2023()).unwrap();
        assert_eq!(result.total_tax, 0.0);
        assert!(result.slices.is_empty());
    }

    #[test]
    fn test_income_inside_first_bracket() {
        let result = compute_tax(5_000.0, &single_2023()).unwrap();
        assert_close(result.total_tax, 500.0);
        assert_eq!(result.slices.len(), 1);
    }

    #[test]
    fn test_income_exactly_on_bracket_boundary() {
        let result = compute_tax(11_000.0, &single_2023()).unwrap();
        assert_close(result.total_tax, 1_100.0);
        assert_eq!(result.slices.len(), 1);
    }

    #[test]
    fn test_single_60000_spans_three_brackets() {
        // 10% x 11000 + 12% x 33725 + 22% x 15275
        let result = compute_tax(60_000.0, &single_2023()).unwrap();
        assert_close(result.total_tax, 8_507.5);
        assert_eq!(result.slices.len(), 3);
        assert_close(result.slices[1].taxable_amount, 33_725.0);
        assert_close(result.slices[2].taxable_amount, 15_275.0);
        assert_eq!(result.slices[2].lower, 44_725.0);
        assert_eq!(result.slices[2].upper, Some(95_375.0));
    }

    #[test]
    fn test_top_bracket_is_unbounded() {
        let result = compute_tax(1_000_000.0, &single_2023()).unwrap();
        let last = result.slices.last().unwrap();
        assert_eq!(last.rate, 37.0);
        assert_eq!(last.upper, None);
        assert_close(last.taxable_amount, 1_000_000.0 - 578_125.0);
    }

    #[test]
    fn test_slices_sum_to_taxable_income() {
        let result = compute_tax(250_000.0, &single_2023()).unwrap();
        let taxed: f64 = result.slices.iter().map(|s| s.taxable_amount).sum();
        assert_close(taxed, 250_000.0);
    }

    #[test]
    fn test_negative_taxable_income_is_rejected() {
        let result = compute_tax(-1.0, &single_2023());
        assert!(matches!(result, Err(EngineError::InvalidParameter { .. })));
    }

    #[test]
    fn test_estimate_single_60000() {
        let estimate = estimate_tax(60_000.0, FilingStatus::Single, 0.0, &tables()).unwrap();
        assert_close(estimate.taxable_income, 60_000.0);
        assert_close(estimate.total_tax, 8_507.5);
        assert_close(estimate.effective_rate_percent, 8_507.5 / 60_000.0 * 100.0);
        assert_close(estimate.take_home_pay, 60_000.0 - 8_507.5);
    }

    #[test]
    fn test_estimate_married_uses_married_table() {
        // 10% x 22000 + 12% x 67450 + 22% x 30550
        let estimate = estimate_tax(120_000.0, FilingStatus::Married, 0.0, &tables()).unwrap();
        assert_close(estimate.total_tax, 17_015.0);
    }

    #[test]
    fn test_deductions_reduce_taxable_income_but_not_gross() {
        let estimate =
            estimate_tax(60_000.0, FilingStatus::Single, 13_850.0, &tables()).unwrap();
        assert_close(estimate.taxable_income, 46_150.0);
        assert_close(estimate.gross_income, 60_000.0);
        // 1100 + 4047 + 22% x 1425
        assert_close(estimate.total_tax, 5_460.5);
        assert_close(estimate.effective_rate_percent, 5_460.5 / 60_000.0 * 100.0);
    }

    #[test]
    fn test_deductions_larger_than_income_floor_at_zero() {
        let estimate = estimate_tax(10_000.0, FilingStatus::Single, 25_000.0, &tables()).unwrap();
        assert_eq!(estimate.taxable_income, 0.0);
        assert_eq!(estimate.total_tax, 0.0);
        assert_eq!(estimate.take_home_pay, 10_000.0);
    }

    #[test]
    fn test_zero_gross_income_has_zero_effective_rate() {
        let estimate = estimate_tax(0.0, FilingStatus::Single, 0.0, &tables()).unwrap();
        assert_eq!(estimate.effective_rate_percent, 0.0);
    }

    #[test]
    fn test_negative_deductions_are_not_rejected() {
        let estimate = estimate_tax(10_000.0, FilingStatus::Single, -1_000.0, &tables()).unwrap();
        assert_close(estimate.taxable_income, 11_000.0);
    }

    #[test]
    fn test_non_finite_deductions_are_rejected() {
        let result = estimate_tax(10_000.0, FilingStatus::Single, f64::NAN, &tables());
        match result {
            Err(EngineError::InvalidParameter { field, .. }) => assert_eq!(field, "deductions"),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_slab_tax_below_exemption_is_zero() {
        let estimate = compute_slab_tax(250_000.0, 0.0, &slab_schedule()).unwrap();
        assert_eq!(estimate.total_tax, 0.0);
    }

    #[test]
    fn test_slab_tax_matches_cumulative_breakpoints() {
        // 12500 + 25000 + 37500 + 20% x 200000
        let estimate = compute_slab_tax(1_200_000.0, 0.0, &slab_schedule()).unwrap();
        assert_close(estimate.total_tax, 115_000.0);

        // 187500 + 30% x 500000
        let estimate = compute_slab_tax(2_000_000.0, 0.0, &slab_schedule()).unwrap();
        assert_close(estimate.total_tax, 337_500.0);
    }

    #[test]
    fn test_slab_tax_applies_deductions() {
        let estimate = compute_slab_tax(700_000.0, 200_000.0, &slab_schedule()).unwrap();
        assert_close(estimate.taxable_income, 500_000.0);
        assert_close(estimate.total_tax, 12_500.0);
    }
}
