//! Calculation logic for the finance calculation engine.
//!
//! This module contains the pure numeric calculations: progressive tax
//! bracket integration (including flat slab schedules and itemized
//! deduction comparison), amortized loan payments with a yearly schedule,
//! lump-sum compound interest, SIP projections, and retirement savings
//! projections. Every function validates its inputs and returns full
//! precision `f64` values; rounding is left to the presentation layer.

mod amortization;
mod compound_interest;
mod deductions;
mod growth;
mod retirement;
mod sip;
mod tax_brackets;
mod validation;

pub use amortization::{DEFAULT_SCHEDULE_YEARS, compute_amortization, periodic_payment};
pub use compound_interest::compound_interest;
pub use deductions::compare_deductions;
pub use growth::{annuity_factor, growth_minus_one};
pub use retirement::{annuity_future_value, project_retirement};
pub use sip::{SipProjection, project_sip, sip_future_value, yearly_projection};
pub use tax_brackets::{
    compute_slab_tax, compute_tax, effective_rate_percent, estimate_tax, estimate_with_table,
};
pub use validation::MAX_HORIZON_YEARS;
