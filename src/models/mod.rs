//! Core data models for the finance calculation engine.
//!
//! This module contains the value objects consumed and produced by the
//! calculation functions. None of them carry identity or state beyond a
//! single calculation call.

mod investment;
mod loan;
mod retirement;
mod tax;

pub use investment::{
    CompoundInterestResult, CompoundInterestTerms, SipPlan, SipProjectionPoint, SipResult,
};
pub use loan::{AmortizationResult, LoanTerms, YearlyBreakdown};
pub use retirement::{RetirementPlan, RetirementProjection};
pub use tax::{
    BracketSlice, BracketTaxResult, DeductionSummary, FilingStatus, ItemizedDeductionInputs,
    ItemizedDeductions, TaxBracket, TaxBracketTable, TaxEstimate,
};
