//! Error types for the finance calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading tax tables or
//! running a calculation.

use thiserror::Error;

/// The main error type for the finance calculation engine.
///
/// Every calculation validates its inputs and reports bad input through this
/// type instead of producing `NaN` or infinite results.
///
/// # Example
///
/// ```
/// use finance_engine::error::EngineError;
///
/// let error = EngineError::InvalidParameter {
///     field: "principal".to_string(),
///     message: "must be greater than zero".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid parameter 'principal': must be greater than zero"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A tax bracket table violated one of its ordering invariants.
    #[error("Invalid bracket table: {message}")]
    InvalidBracketTable {
        /// A description of the violated invariant.
        message: String,
    },

    /// A calculation input was missing, non-finite, or out of range.
    #[error("Invalid parameter '{field}': {message}")]
    InvalidParameter {
        /// The name of the offending input field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A computed amount could not be represented as a decimal for output.
    #[error("Result '{field}' is out of range: {value}")]
    ResultOutOfRange {
        /// The name of the output field.
        field: String,
        /// The value that could not be represented.
        value: f64,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidParameter`].
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidParameter {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
