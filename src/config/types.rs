//! Configuration types for the finance calculation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Bracket tables are
//! validated as they are deserialized.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::calculation::DEFAULT_SCHEDULE_YEARS;
use crate::models::{FilingStatus, TaxBracketTable};

/// Metadata about the tax year the tables describe.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxYearMetadata {
    /// Short identifier (e.g., "US-2023").
    pub code: String,
    /// Human-readable name of the table set.
    pub name: String,
    /// The tax year the tables apply to.
    pub tax_year: i32,
    /// First day the tables are effective.
    pub effective_date: NaiveDate,
    /// Where the figures were taken from.
    pub source_url: String,
}

/// Bracket tables keyed by filing status, from brackets.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct FilingStatusTables {
    /// Table for single filers, also used for unknown statuses.
    pub single: TaxBracketTable,
    /// Table for married couples filing jointly.
    pub married: TaxBracketTable,
}

impl FilingStatusTables {
    /// Returns the table for a filing status.
    pub fn for_status(&self, status: FilingStatus) -> &TaxBracketTable {
        match status {
            FilingStatus::Single => &self.single,
            FilingStatus::Married => &self.married,
        }
    }
}

/// A flat slab schedule used by the secondary tax planner, from slabs.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct SlabSchedule {
    /// Human-readable name of the schedule.
    pub name: String,
    /// ISO currency code the breakpoints are expressed in.
    pub currency: String,
    /// The slabs, expressed as a progressive bracket table.
    pub slabs: TaxBracketTable,
}

/// Standard deduction amounts by filing status.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardDeductions {
    /// Standard deduction for single filers.
    pub single: f64,
    /// Standard deduction for married couples filing jointly.
    pub married: f64,
}

/// Caps and floors for itemized deductions, from deductions.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionRules {
    /// Standard deductions.
    pub standard: StandardDeductions,
    /// Maximum deductible property tax (SALT cap).
    pub property_tax_cap: f64,
    /// Maximum deductible student loan interest.
    pub student_loan_interest_cap: f64,
    /// Share of AGI healthcare costs must exceed, as a percentage.
    pub healthcare_agi_floor_percent: f64,
}

impl DeductionRules {
    /// Returns the standard deduction for a filing status.
    pub fn standard_for(&self, status: FilingStatus) -> f64 {
        match status {
            FilingStatus::Single => self.standard.single,
            FilingStatus::Married => self.standard.married,
        }
    }
}

/// Engine-wide defaults, from engine.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineDefaults {
    /// Number of years shown in an amortization schedule when the caller
    /// does not ask for a specific count.
    pub amortization_schedule_years: u32,
}

impl Default for EngineDefaults {
    fn default() -> Self {
        Self {
            amortization_schedule_years: DEFAULT_SCHEDULE_YEARS,
        }
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct FinanceConfig {
    metadata: TaxYearMetadata,
    brackets: FilingStatusTables,
    slabs: SlabSchedule,
    deductions: DeductionRules,
    defaults: EngineDefaults,
}

impl FinanceConfig {
    /// Creates a new FinanceConfig from its component parts.
    pub fn new(
        metadata: TaxYearMetadata,
        brackets: FilingStatusTables,
        slabs: SlabSchedule,
        deductions: DeductionRules,
        defaults: EngineDefaults,
    ) -> Self {
        Self {
            metadata,
            brackets,
            slabs,
            deductions,
            defaults,
        }
    }

    /// Returns the tax year metadata.
    pub fn tax_year(&self) -> &TaxYearMetadata {
        &self.metadata
    }

    /// Returns the bracket tables.
    pub fn brackets(&self) -> &FilingStatusTables {
        &self.brackets
    }

    /// Returns the slab schedule.
    pub fn slab_schedule(&self) -> &SlabSchedule {
        &self.slabs
    }

    /// Returns the deduction rules.
    pub fn deduction_rules(&self) -> &DeductionRules {
        &self.deductions
    }

    /// Returns the engine defaults.
    pub fn defaults(&self) -> &EngineDefaults {
        &self.defaults
    }
}
