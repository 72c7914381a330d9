//! Tax models: filing status, bracket tables and tax results.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The filing status used to select a bracket table.
///
/// Parsing is lenient: labels are matched case-insensitively and anything
/// unrecognised falls back to [`FilingStatus::Single`].
///
/// # Example
///
/// ```
/// use finance_engine::models::FilingStatus;
///
/// assert_eq!(FilingStatus::from_label("MARRIED"), FilingStatus::Married);
/// assert_eq!(FilingStatus::from_label("head_of_household"), FilingStatus::Single);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    /// Single filer. Also the fallback for unknown labels.
    #[default]
    Single,
    /// Married filing jointly.
    Married,
}

impl FilingStatus {
    /// Resolves a free-form label to a filing status.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "married" => FilingStatus::Married,
            _ => FilingStatus::Single,
        }
    }

    /// Returns the canonical lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilingStatus::Single => "single",
            FilingStatus::Married => "married",
        }
    }
}

/// A single marginal-rate bracket.
///
/// `upper_limit` is the cumulative ceiling of the bracket; `None` marks the
/// final, unbounded bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Marginal rate as a percentage (e.g. `22.0` for 22%).
    pub rate: f64,
    /// Cumulative upper limit of this bracket, or `None` for no ceiling.
    #[serde(default)]
    pub upper_limit: Option<f64>,
}

impl TaxBracket {
    /// Creates a bracket with a finite ceiling.
    pub fn bounded(rate: f64, upper_limit: f64) -> Self {
        Self {
            rate,
            upper_limit: Some(upper_limit),
        }
    }

    /// Creates the final bracket with no ceiling.
    pub fn unbounded(rate: f64) -> Self {
        Self {
            rate,
            upper_limit: None,
        }
    }

    /// Returns the ceiling, treating an unbounded bracket as infinite.
    pub fn ceiling(&self) -> f64 {
        self.upper_limit.unwrap_or(f64::INFINITY)
    }
}

/// An ordered, validated progressive bracket table.
///
/// Invariants checked on construction:
/// - at least one bracket
/// - every rate is finite and within `0..=100`
/// - rates are non-decreasing
/// - upper limits are finite, positive and strictly increasing
/// - only the last bracket is unbounded, and it must be
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TaxBracket>", into = "Vec<TaxBracket>")]
pub struct TaxBracketTable {
    brackets: Vec<TaxBracket>,
}

impl TaxBracketTable {
    /// Validates and wraps a list of brackets.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBracketTable`] when any ordering or
    /// range invariant is violated.
    pub fn new(brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        if brackets.is_empty() {
            return Err(table_error("table must contain at least one bracket"));
        }

        let last_index = brackets.len() - 1;
        let mut previous_rate = 0.0_f64;
        let mut previous_limit = 0.0_f64;

        for (index, bracket) in brackets.iter().enumerate() {
            if !bracket.rate.is_finite() || !(0.0..=100.0).contains(&bracket.rate) {
                return Err(table_error(format!(
                    "bracket {} has rate {} outside 0..=100",
                    index, bracket.rate
                )));
            }
            if bracket.rate < previous_rate {
                return Err(table_error(format!(
                    "bracket {} rate {} is lower than the previous rate {}",
                    index, bracket.rate, previous_rate
                )));
            }

            match bracket.upper_limit {
                Some(limit) if index == last_index => {
                    return Err(table_error(format!(
                        "final bracket must be unbounded, found upper limit {}",
                        limit
                    )));
                }
                Some(limit) => {
                    if !limit.is_finite() || limit <= previous_limit {
                        return Err(table_error(format!(
                            "bracket {} upper limit {} must be finite and greater than {}",
                            index, limit, previous_limit
                        )));
                    }
                    previous_limit = limit;
                }
                None if index != last_index => {
                    return Err(table_error(format!(
                        "only the final bracket may be unbounded (bracket {})",
                        index
                    )));
                }
                None => {}
            }

            previous_rate = bracket.rate;
        }

        Ok(Self { brackets })
    }

    /// Returns the brackets in ascending order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Returns the highest marginal rate in the table.
    pub fn top_rate(&self) -> f64 {
        self.brackets.last().map(|b| b.rate).unwrap_or(0.0)
    }
}

impl TryFrom<Vec<TaxBracket>> for TaxBracketTable {
    type Error = EngineError;

    fn try_from(brackets: Vec<TaxBracket>) -> Result<Self, Self::Error> {
        TaxBracketTable::new(brackets)
    }
}

impl From<TaxBracketTable> for Vec<TaxBracket> {
    fn from(table: TaxBracketTable) -> Self {
        table.brackets
    }
}

fn table_error(message: impl Into<String>) -> EngineError {
    EngineError::InvalidBracketTable {
        message: message.into(),
    }
}

/// The portion of income taxed within one bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BracketSlice {
    /// Marginal rate applied to this slice.
    pub rate: f64,
    /// Lower bound of the bracket.
    pub lower: f64,
    /// Upper bound of the bracket, `None` when unbounded.
    pub upper: Option<f64>,
    /// Income taxed inside this bracket.
    pub taxable_amount: f64,
    /// Tax owed on this slice.
    pub tax: f64,
}

/// Output of a bare bracket integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketTaxResult {
    /// Total tax across all brackets.
    pub total_tax: f64,
    /// Per-bracket breakdown, only for brackets that taxed a positive amount.
    pub slices: Vec<BracketSlice>,
}

/// A full tax estimate for a gross income against one bracket table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxEstimate {
    /// Income before deductions.
    pub gross_income: f64,
    /// `max(gross_income - deductions, 0)`.
    pub taxable_income: f64,
    /// Total tax owed.
    pub total_tax: f64,
    /// Total tax as a percentage of gross income (0 when gross income is 0).
    pub effective_rate_percent: f64,
    /// Gross income minus total tax.
    pub take_home_pay: f64,
    /// Per-bracket breakdown.
    pub slices: Vec<BracketSlice>,
}

/// Itemizable expenses submitted for a deduction comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemizedDeductionInputs {
    /// Mortgage interest paid.
    pub mortgage_interest: f64,
    /// State and local property tax paid.
    pub property_tax: f64,
    /// Charitable contributions.
    pub charitable_contributions: f64,
    /// Student loan interest paid.
    pub student_loan_interest: f64,
    /// Retirement plan contributions.
    pub retirement_contributions: f64,
    /// Out-of-pocket healthcare costs.
    pub healthcare_costs: f64,
    /// Adjusted gross income, used for the healthcare floor.
    pub adjusted_gross_income: f64,
    /// Filing status, selecting the standard deduction.
    pub filing_status: FilingStatus,
}

/// Itemized amounts after caps and floors have been applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemizedDeductions {
    /// Mortgage interest, uncapped.
    pub mortgage_interest: f64,
    /// Property tax, limited by the SALT cap.
    pub property_tax: f64,
    /// Charitable contributions, uncapped.
    pub charitable_contributions: f64,
    /// Student loan interest, limited by its cap.
    pub student_loan_interest: f64,
    /// Healthcare costs above the AGI floor.
    pub healthcare_costs: f64,
}

impl ItemizedDeductions {
    /// Sum of all itemized amounts.
    pub fn total(&self) -> f64 {
        self.mortgage_interest
            + self.property_tax
            + self.charitable_contributions
            + self.student_loan_interest
            + self.healthcare_costs
    }
}

/// Comparison of itemized deductions against the standard deduction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionSummary {
    /// Capped itemized amounts.
    pub itemized: ItemizedDeductions,
    /// Sum of the itemized amounts.
    pub total_itemized: f64,
    /// Standard deduction for the filing status.
    pub standard_deduction: f64,
    /// The larger of `total_itemized` and `standard_deduction`.
    pub recommended_deduction: f64,
    /// Echoed back; retirement contributions are reported, not itemized.
    pub retirement_contributions: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_2023() -> Vec<TaxBracket> {
        vec![
            TaxBracket::bounded(10.0, 11_000.0),
            TaxBracket::bounded(12.0, 44_725.0),
            TaxBracket::bounded(22.0, 95_375.0),
            TaxBracket::unbounded(37.0),
        ]
    }

    #[test]
    fn test_filing_status_is_case_insensitive() {
        assert_eq!(FilingStatus::from_label("Married"), FilingStatus::Married);
        assert_eq!(FilingStatus::from_label(" married "), FilingStatus::Married);
        assert_eq!(FilingStatus::from_label("SINGLE"), FilingStatus::Single);
    }

    #[test]
    fn test_unknown_filing_status_falls_back_to_single() {
        assert_eq!(FilingStatus::from_label("widowed"), FilingStatus::Single);
        assert_eq!(FilingStatus::from_label(""), FilingStatus::Single);
    }

    #[test]
    fn test_valid_table_is_accepted() {
        let table = TaxBracketTable::new(single_2023()).unwrap();
        assert_eq!(table.brackets().len(), 4);
        assert_eq!(table.top_rate(), 37.0);
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let result = TaxBracketTable::new(vec![]);
        assert!(matches!(
            result,
            Err(EngineError::InvalidBracketTable { .. })
        ));
    }

    #[test]
    fn test_decreasing_rate_is_rejected() {
        let result = TaxBracketTable::new(vec![
            TaxBracket::bounded(20.0, 10_000.0),
            TaxBracket::unbounded(10.0),
        ]);
        assert!(matches!(
            result,
            Err(EngineError::InvalidBracketTable { .. })
        ));
    }

    #[test]
    fn test_non_increasing_limits_are_rejected() {
        let result = TaxBracketTable::new(vec![
            TaxBracket::bounded(10.0, 10_000.0),
            TaxBracket::bounded(12.0, 10_000.0),
            TaxBracket::unbounded(22.0),
        ]);
        assert!(matches!(
            result,
            Err(EngineError::InvalidBracketTable { .. })
        ));
    }

    #[test]
    fn test_bounded_final_bracket_is_rejected() {
        let result = TaxBracketTable::new(vec![TaxBracket::bounded(10.0, 10_000.0)]);
        assert!(matches!(
            result,
            Err(EngineError::InvalidBracketTable { .. })
        ));
    }

    #[test]
    fn test_unbounded_middle_bracket_is_rejected() {
        let result = TaxBracketTable::new(vec![
            TaxBracket::unbounded(10.0),
            TaxBracket::unbounded(12.0),
        ]);
        assert!(matches!(
            result,
            Err(EngineError::InvalidBracketTable { .. })
        ));
    }

    #[test]
    fn test_rate_above_one_hundred_is_rejected() {
        let result = TaxBracketTable::new(vec![TaxBracket::unbounded(120.0)]);
        assert!(matches!(
            result,
            Err(EngineError::InvalidBracketTable { .. })
        ));
    }

    #[test]
    fn test_table_deserializes_with_validation() {
        let json = r#"[{"rate": 10, "upper_limit": 1000}, {"rate": 20}]"#;
        let table: TaxBracketTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.brackets()[1].upper_limit, None);

        let bad = r#"[{"rate": 20, "upper_limit": 1000}, {"rate": 10}]"#;
        assert!(serde_json::from_str::<TaxBracketTable>(bad).is_err());
    }

    #[test]
    fn test_itemized_total_sums_all_fields() {
        let itemized = ItemizedDeductions {
            mortgage_interest: 1.0,
            property_tax: 2.0,
            charitable_contributions: 3.0,
            student_loan_interest: 4.0,
            healthcare_costs: 5.0,
        };
        assert_eq!(itemized.total(), 15.0);
    }
}
