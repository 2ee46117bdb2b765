//! # Error Types
//!
//! Structured error types for algebra_core. Wrong answers are never errors
//! (the checker just reports `false`); these variants cover the places where
//! a caller handed us something we cannot work with.
//!
//! ## Example
//!
//! ```rust
//! use algebra_core::errors::{AlgebraError, AlgebraResult};
//!
//! fn validate_answer(answer: &str) -> AlgebraResult<&str> {
//!     let trimmed = answer.trim();
//!     if trimmed.is_empty() {
//!         return Err(AlgebraError::EmptyAnswer);
//!     }
//!     Ok(trimmed)
//! }
//!
//! assert!(validate_answer("   ").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for algebra_core operations
pub type AlgebraResult<T> = Result<T, AlgebraError>;

/// Structured error type for algebra_core operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum AlgebraError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The answer was blank or whitespace only
    #[error("Answer is empty")]
    EmptyAnswer,

    /// Answer text is not a valid arithmetic expression
    #[error("Could not parse '{input}': {reason}")]
    ParseError { input: String, reason: String },

    /// Equation category name not recognised
    #[error("Unknown equation category: {name}")]
    UnknownCategory { name: String },

    /// Difficulty tier name not recognised
    #[error("Unknown difficulty: {name}")]
    UnknownDifficulty { name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Settings schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl AlgebraError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        AlgebraError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ParseError
    pub fn parse_error(input: impl Into<String>, reason: impl Into<String>) -> Self {
        AlgebraError::ParseError {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownCategory error
    pub fn unknown_category(name: impl Into<String>) -> Self {
        AlgebraError::UnknownCategory { name: name.into() }
    }

    /// Create an UnknownDifficulty error
    pub fn unknown_difficulty(name: impl Into<String>) -> Self {
        AlgebraError::UnknownDifficulty { name: name.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        AlgebraError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the user can simply try again (re-type the answer)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AlgebraError::EmptyAnswer | AlgebraError::ParseError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            AlgebraError::InvalidInput { .. } => "INVALID_INPUT",
            AlgebraError::EmptyAnswer => "EMPTY_ANSWER",
            AlgebraError::ParseError { .. } => "PARSE_ERROR",
            AlgebraError::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
            AlgebraError::UnknownDifficulty { .. } => "UNKNOWN_DIFFICULTY",
            AlgebraError::FileError { .. } => "FILE_ERROR",
            AlgebraError::SerializationError { .. } => "SERIALIZATION_ERROR",
            AlgebraError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = AlgebraError::parse_error("3//2", "unexpected token");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"ParseError\""));
        let roundtrip: AlgebraError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AlgebraError::EmptyAnswer.error_code(), "EMPTY_ANSWER");
        assert_eq!(AlgebraError::unknown_category("cubic").error_code(), "UNKNOWN_CATEGORY");
        assert_eq!(AlgebraError::unknown_difficulty("expert").error_code(), "UNKNOWN_DIFFICULTY");
    }

    #[test]
    fn test_recoverable() {
        assert!(AlgebraError::EmptyAnswer.is_recoverable());
        assert!(!AlgebraError::file_error("read", "x.json", "denied").is_recoverable());
    }
}
