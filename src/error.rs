//! Error types for the HRMS calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing leave durations
//! and payroll figures.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the HRMS calculation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use hrms_engine::error::EngineError;
///
/// let error = EngineError::InvalidRange {
///     start: NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 9, 9).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date range: start 2025-09-15 is after end 2025-09-09"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The start of a date range falls after its end.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

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

    /// A payroll submission contained a field outside its valid domain.
    #[error("Invalid payroll field '{field}': {message}")]
    InvalidPayroll {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl EngineError {
    /// A money amount whose result does not fit in a `Decimal`.
    pub(crate) fn amount_overflow(field: &str) -> Self {
        EngineError::InvalidPayroll {
            field: field.to_string(),
            message: "amount exceeds the supported decimal range".to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
