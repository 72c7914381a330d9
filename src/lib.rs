//! Personal finance calculation engine
//!
//! This crate computes progressive income tax from configurable bracket
//! tables, amortized loan installments, compound interest and SIP growth,
//! and inflation-adjusted retirement projections. The [`api`] module serves
//! the calculators over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
