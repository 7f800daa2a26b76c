//! Custom error types for finflow
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The budget arithmetic itself is total and
//! never produces these errors; they cover the edges (config I/O, CLI
//! argument parsing, terminal setup).

use thiserror::Error;

/// The main error type for finflow operations
#[derive(Error, Debug)]
pub enum FinflowError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed CLI arguments (e.g. an expense spec that won't parse)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl FinflowError {
    /// Create an invalid-argument error for a malformed expense spec
    pub fn bad_expense_spec(spec: impl Into<String>) -> Self {
        Self::InvalidArgument(format!(
            "expense spec '{}' is not NAME:AMOUNT:CATEGORY",
            spec.into()
        ))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FinflowError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for finflow operations
pub type FinflowResult<T> = Result<T, FinflowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinflowError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_bad_expense_spec() {
        let err = FinflowError::bad_expense_spec("Rent=1200");
        assert_eq!(
            err.to_string(),
            "Invalid argument: expense spec 'Rent=1200' is not NAME:AMOUNT:CATEGORY"
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(FinflowError::Validation("bad".into()).is_validation());
        assert!(!FinflowError::Io("oops".into()).is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let finflow_err: FinflowError = io_err.into();
        assert!(matches!(finflow_err, FinflowError::Io(_)));
    }
}
