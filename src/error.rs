//! Custom error types for FlowTrack
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for FlowTrack operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// The date string is not a real calendar date in DD-MM-YYYY form
    #[error("Invalid date '{0}': expected a real calendar date in DD-MM-YYYY form")]
    InvalidDate(String),

    /// The amount string is not a decimal number
    #[error("Invalid amount '{0}': expected a decimal number")]
    InvalidAmount(String),

    /// Underlying persistence read/write failures
    #[error("Storage error: {0}")]
    Storage(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export was requested while the store holds no records
    #[error("Nothing to export: no expenses recorded")]
    NothingToExport,

    /// Password attempts exhausted; the session ends, stored data is untouched
    #[error("Access denied: password attempts exhausted")]
    AccessDenied,

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    /// Create an invalid-date error from the offending input
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate(input.into())
    }

    /// Create an invalid-amount error from the offending input
    pub fn invalid_amount(input: impl Into<String>) -> Self {
        Self::InvalidAmount(input.into())
    }

    /// Check if this is a date validation error
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Self::InvalidDate(_))
    }

    /// Check if this is an amount validation error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if this error denies further input for the session
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for FlowTrack operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::invalid_date("31-02-2024");
        assert_eq!(
            err.to_string(),
            "Invalid date '31-02-2024': expected a real calendar date in DD-MM-YYYY form"
        );
        assert!(err.is_invalid_date());
    }

    #[test]
    fn test_invalid_amount_error() {
        let err = TrackerError::invalid_amount("abc");
        assert_eq!(
            err.to_string(),
            "Invalid amount 'abc': expected a decimal number"
        );
        assert!(err.is_invalid_amount());
    }

    #[test]
    fn test_access_denied() {
        let err = TrackerError::AccessDenied;
        assert!(err.is_access_denied());
        assert_eq!(err.to_string(), "Access denied: password attempts exhausted");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tracker_err: TrackerError = io_err.into();
        assert!(matches!(tracker_err, TrackerError::Io(_)));
    }
}
