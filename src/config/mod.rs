//! Configuration loading and management for the finance calculation engine.
//!
//! This module loads the tax tables and engine defaults from YAML files.
//! Tables are passed explicitly into the calculations; nothing here is
//! global state.
//!
//! # Example
//!
//! ```no_run
//! use finance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/us_2023").unwrap();
//! println!("Loaded tables: {}", config.tax_year().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DeductionRules, EngineDefaults, FilingStatusTables, FinanceConfig, SlabSchedule,
    StandardDeductions, TaxYearMetadata,
};
