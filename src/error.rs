//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition the engine refuses to calculate through.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/company.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/company.yaml");
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
    #[error("Failed to parse configuration '{path}': {message}")]
    ConfigParseError {
        /// The path (or source name) that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value violates an invariant the calculator relies on.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfiguration {
        /// The dotted path of the offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A clock time could not be parsed as `HH:MM`.
    #[error("Invalid clock time '{value}': expected HH:MM")]
    InvalidTime {
        /// The raw value that was supplied.
        value: String,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift on {date}: {message}")]
    InvalidShift {
        /// The work date of the shift.
        date: chrono::NaiveDate,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// No industry template exists with the requested id.
    #[error("Industry template not found: {id}")]
    TemplateNotFound {
        /// The template id that was requested.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
