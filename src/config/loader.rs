//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax tables
//! and engine defaults from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{FilingStatus, TaxBracketTable};

use super::types::{
    DeductionRules, EngineDefaults, FilingStatusTables, FinanceConfig, SlabSchedule,
    TaxYearMetadata,
};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/us_2023/
/// ├── tax_year.yaml    # Tax year metadata
/// ├── brackets.yaml    # Progressive bracket tables per filing status
/// ├── slabs.yaml       # Slab schedule for the tax planner
/// ├── deductions.yaml  # Standard deductions and itemized caps
/// └── engine.yaml      # Engine defaults (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use finance_engine::config::ConfigLoader;
/// use finance_engine::models::FilingStatus;
///
/// let loader = ConfigLoader::load("./config/us_2023").unwrap();
/// let table = loader.bracket_table(FilingStatus::Single);
/// println!("Top rate: {}%", table.top_rate());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: FinanceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// `engine.yaml` may be omitted, in which case [`EngineDefaults::default`]
    /// is used. Every other file is required.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if a required file is missing
    /// - `ConfigParseError` if a file is not valid YAML, misses a field, or
    ///   contains a bracket table that violates its invariants
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<TaxYearMetadata>(&path.join("tax_year.yaml"))?;
        let brackets = Self::load_yaml::<FilingStatusTables>(&path.join("brackets.yaml"))?;
        let slabs = Self::load_yaml::<SlabSchedule>(&path.join("slabs.yaml"))?;
        let deductions = Self::load_yaml::<DeductionRules>(&path.join("deductions.yaml"))?;

        let engine_path = path.join("engine.yaml");
        let defaults = if engine_path.exists() {
            Self::load_yaml::<EngineDefaults>(&engine_path)?
        } else {
            EngineDefaults::default()
        };

        debug!(
            code = %metadata.code,
            tax_year = metadata.tax_year,
            schedule_years = defaults.amortization_schedule_years,
            "Loaded finance configuration"
        );

        Ok(Self {
            config: FinanceConfig::new(metadata, brackets, slabs, deductions, defaults),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &FinanceConfig {
        &self.config
    }

    /// Returns the tax year metadata.
    pub fn tax_year(&self) -> &TaxYearMetadata {
        self.config.tax_year()
    }

    /// Returns the bracket table for a filing status.
    pub fn bracket_table(&self, status: FilingStatus) -> &TaxBracketTable {
        self.config.brackets().for_status(status)
    }

    /// Returns the slab schedule.
    pub fn slab_schedule(&self) -> &SlabSchedule {
        self.config.slab_schedule()
    }

    /// Returns the deduction rules.
    pub fn deduction_rules(&self) -> &DeductionRules {
        self.config.deduction_rules()
    }

    /// Returns the engine defaults.
    pub fn defaults(&self) -> &EngineDefaults {
        self.config.defaults()
    }
}
