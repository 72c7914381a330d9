//! Itemized versus standard deduction comparison.
//!
//! Itemized amounts are capped or floored according to [`DeductionRules`]
//! and the total is compared against the standard deduction for the filing
//! status. The larger of the two is recommended.

use crate::config::DeductionRules;
use crate::error::EngineResult;
use crate::models::{DeductionSummary, ItemizedDeductionInputs, ItemizedDeductions};

use super::validation::require_non_negative;

/// Compares itemized deductions with the standard deduction.
///
/// - property tax is limited to `property_tax_cap`
/// - student loan interest is limited to `student_loan_interest_cap`
/// - only healthcare costs above `healthcare_agi_floor_percent` of AGI count
/// - retirement contributions are reported back but not itemized
///
/// # Errors
///
/// Returns `InvalidParameter` if any amount is negative or not finite.
pub fn compare_deductions(
    inputs: &ItemizedDeductionInputs,
    rules: &DeductionRules,
) -> EngineResult<DeductionSummary> {
    let mortgage_interest = require_non_negative("mortgage_interest", inputs.mortgage_interest)?;
    let property_tax = require_non_negative("property_tax", inputs.property_tax)?;
    let charitable_contributions =
        require_non_negative("charitable_contributions", inputs.charitable_contributions)?;
    let student_loan_interest =
        require_non_negative("student_loan_interest", inputs.student_loan_interest)?;
    let retirement_contributions =
        require_non_negative("retirement_contributions", inputs.retirement_contributions)?;
    let healthcare_costs = require_non_negative("healthcare_costs", inputs.healthcare_costs)?;
    let agi = require_non_negative("adjusted_gross_income", inputs.adjusted_gross_income)?;

    let healthcare_floor = agi * rules.healthcare_agi_floor_percent / 100.0;

    let itemized = ItemizedDeductions {
        mortgage_interest,
        property_tax: property_tax.min(rules.property_tax_cap),
        charitable_contributions,
        student_loan_interest: student_loan_interest.min(rules.student_loan_interest_cap),
        healthcare_costs: (healthcare_costs - healthcare_floor).max(0.0),
    };

    let total_itemized = itemized.total();
    let standard_deduction = rules.standard_for(inputs.filing_status);

    Ok(DeductionSummary {
        itemized,
        total_itemized,
        standard_deduction,
        recommended_deduction: total_itemized.max(standard_deduction),
        retirement_contributions,
    })
}
