//! Request types for the finance calculation API.
//!
//! These mirror the JSON bodies accepted by each endpoint and convert into
//! the engine's model types. Optional fields carry the same defaults the
//! calculators have always applied.

use serde::{Deserialize, Serialize};

use crate::models::{
    CompoundInterestTerms, FilingStatus, ItemizedDeductionInputs, LoanTerms, RetirementPlan,
    SipPlan,
};

/// Request body for `POST /tax/estimate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxEstimateRequest {
    /// Gross income.
    pub income: f64,
    /// Filing status label; unknown or missing labels use the single table.
    #[serde(default)]
    pub filing_status: Option<String>,
    /// Deductions subtracted from gross income.
    #[serde(default)]
    pub deductions: f64,
}

impl TaxEstimateRequest {
    /// Resolves the filing status label.
    pub fn filing_status(&self) -> FilingStatus {
        self.filing_status
            .as_deref()
            .map(FilingStatus::from_label)
            .unwrap_or_default()
    }
}

/// Query string for `GET /tax/brackets`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BracketQuery {
    /// Filing status label; defaults to single.
    #[serde(default)]
    pub filing_status: Option<String>,
}

impl BracketQuery {
    /// Resolves the filing status label.
    pub fn filing_status(&self) -> FilingStatus {
        self.filing_status
            .as_deref()
            .map(FilingStatus::from_label)
            .unwrap_or_default()
    }
}

/// Request body for `POST /tax/slab`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlabTaxRequest {
    /// Gross income.
    pub income: f64,
    /// Total of all claimed deductions.
    #[serde(default)]
    pub deductions: f64,
}

/// Request body for `POST /tax/deductions`. Every amount defaults to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeductionsRequest {
    /// Mortgage interest paid.
    pub mortgage_interest: f64,
    /// Property tax paid.
    pub property_tax: f64,
    /// Charitable contributions.
    pub charitable_contributions: f64,
    /// Student loan interest paid.
    pub student_loan_interest: f64,
    /// Retirement plan contributions.
    pub retirement_contributions: f64,
    /// Out-of-pocket healthcare costs.
    pub healthcare_costs: f64,
    /// Adjusted gross income.
    pub agi: f64,
    /// Filing status label.
    pub filing_status: Option<String>,
}

impl From<DeductionsRequest> for ItemizedDeductionInputs {
    fn from(req: DeductionsRequest) -> Self {
        ItemizedDeductionInputs {
            mortgage_interest: req.mortgage_interest,
            property_tax: req.property_tax,
            charitable_contributions: req.charitable_contributions,
            student_loan_interest: req.student_loan_interest,
            retirement_contributions: req.retirement_contributions,
            healthcare_costs: req.healthcare_costs,
            adjusted_gross_income: req.agi,
            filing_status: req
                .filing_status
                .as_deref()
                .map(FilingStatus::from_label)
                .unwrap_or_default(),
        }
    }
}

/// Request body for `POST /calculator/loan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    /// Purchase price or amount borrowed.
    pub principal: f64,
    /// Annual interest rate as a percentage.
    pub rate: f64,
    /// Term in years.
    pub term: f64,
    /// Down payment subtracted from the principal.
    #[serde(default)]
    pub down_payment: f64,
    /// Number of schedule years; the configured default when absent.
    #[serde(default)]
    pub schedule_years: Option<u32>,
    /// Free-form loan label, echoed back.
    #[serde(default)]
    pub loan_type: Option<String>,
}

impl LoanRequest {
    /// Extracts the loan terms.
    pub fn terms(&self) -> LoanTerms {
        LoanTerms {
            principal: self.principal,
            annual_rate_percent: self.rate,
            term_years: self.term,
        }
    }
}

/// Request body for `POST /calculator/compound-interest`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInterestRequest {
    /// Initial amount.
    pub principal: f64,
    /// Annual rate as a percentage.
    pub rate: f64,
    /// Horizon in years.
    pub time: f64,
    /// Compounding periods per year; missing or zero means annual.
    #[serde(default)]
    pub compounding_frequency: Option<u32>,
}

impl From<&CompoundInterestRequest> for CompoundInterestTerms {
    fn from(req: &CompoundInterestRequest) -> Self {
        CompoundInterestTerms {
            principal: req.principal,
            annual_rate_percent: req.rate,
            years: req.time,
            compounding_frequency_per_year: req
                .compounding_frequency
                .filter(|n| *n > 0)
                .unwrap_or(1),
        }
    }
}

/// Request body for `POST /calculator/sip`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipRequest {
    /// Amount invested every month.
    pub monthly_investment: f64,
    /// Duration in years.
    pub years: f64,
    /// Expected annual return as a percentage.
    pub return_rate: f64,
}

impl From<&SipRequest> for SipPlan {
    fn from(req: &SipRequest) -> Self {
        SipPlan {
            monthly_investment: req.monthly_investment,
            years: req.years,
            annual_return_percent: req.return_rate,
        }
    }
}

/// Request body for `POST /calculator/retirement`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementRequest {
    /// Age today; may be fractional.
    pub current_age: f64,
    /// Planned retirement age.
    pub retirement_age: f64,
    /// Savings accumulated so far.
    pub current_savings: f64,
    /// Monthly contribution.
    pub monthly_contribution: f64,
    /// Expected annual return as a percentage.
    pub expected_return: f64,
    /// Expected annual inflation as a percentage.
    pub inflation_rate: f64,
}

impl From<&RetirementRequest> for RetirementPlan {
    fn from(req: &RetirementRequest) -> Self {
        RetirementPlan {
            current_age: req.current_age,
            retirement_age: req.retirement_age,
            current_savings: req.current_savings,
            monthly_contribution: req.monthly_contribution,
            expected_annual_return_percent: req.expected_return,
            inflation_rate_percent: req.inflation_rate,
        }
    }
}
