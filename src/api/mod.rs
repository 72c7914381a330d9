//! HTTP API module for the finance calculation engine.
//!
//! This module exposes the tax, loan, investment and retirement
//! calculators as JSON endpoints. Monetary amounts in responses are
//! rounded to two decimal places and serialized as strings.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BracketQuery, CompoundInterestRequest, DeductionsRequest, LoanRequest, RetirementRequest,
    SipRequest, SlabTaxRequest, TaxEstimateRequest,
};
pub use response::{ApiError, money};
pub use state::AppState;
