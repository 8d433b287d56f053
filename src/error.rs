//! Error types for the Salary Engine.
//!
//! Input validation failures are reported as [`ValidationError`], which the
//! caller can show to the user before asking for the same field again. Every
//! other failure of the crate is an [`EngineError`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::InputField;

/// The category of a rejected input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// The value was empty or whitespace only.
    EmptyValue,
    /// The value (or one of its list entries) is not a whole number.
    NotANumber,
    /// The number is outside the permitted range.
    RangeExceeded,
    /// The value conflicts with another field, or a field it depends on is unset.
    CrossFieldConstraintViolated,
    /// A list contains the same entry twice.
    DuplicateValue,
    /// A list of child numbers is not a contiguous run.
    SequenceGapDetected,
    /// The value is not one of the recognized names or rates.
    UnrecognizedEnumValue,
}

/// A rejected value for one field of a [`SalaryInput`](crate::models::SalaryInput).
///
/// The message is meant for the end user; the record keeps its previous value
/// for the field.
///
/// # Example
///
/// ```
/// use salary_engine::error::ValidationErrorKind;
/// use salary_engine::models::SalaryInput;
///
/// let mut input = SalaryInput::new();
/// let error = input.set_base_salary("12a").unwrap_err();
/// assert_eq!(error.kind, ValidationErrorKind::NotANumber);
/// assert!(input.base_salary().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// The field whose value was rejected.
    pub field: InputField,
    /// The category of the failure.
    pub kind: ValidationErrorKind,
    /// A user-facing description of the problem.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: InputField, kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

/// The main error type for the Salary Engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input value was rejected by its setter.
    #[error("Invalid value for '{}': {}", .0.field, .0.message)]
    Validation(#[from] ValidationError),

    /// The calculation needed a field that was never set.
    #[error("Input field '{field}' has not been set")]
    MissingInput {
        /// The field that was missing.
        field: InputField,
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

    /// Configuration parsed but its tables are unusable.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the problem.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
