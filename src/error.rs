//! Error types for the tool rental engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a checkout or catalog load can produce.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single request field that failed validation.
///
/// Validation collects one of these per failing field so callers can
/// render a field-to-message map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// The request field name, as it appears in the JSON payload.
    pub field: String,
    /// A human-readable description of the failure.
    pub message: String,
}

impl FieldViolation {
    /// Creates a new violation for the given field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The main error type for the tool rental engine.
///
/// # Example
///
/// ```
/// use tool_rental::error::RentalError;
///
/// let error = RentalError::NotFound {
///     tool_code: "XXXX".to_string(),
/// };
/// assert_eq!(error.to_string(), "Tool not found with code: XXXX");
/// ```
#[derive(Debug, Error)]
pub enum RentalError {
    /// The rental request contained malformed or out-of-range fields.
    ///
    /// The display message is the first violation's message.
    #[error("{message}")]
    InvalidInput {
        /// The message of the first failing field.
        message: String,
        /// Every failing field, in validation order.
        violations: Vec<FieldViolation>,
    },

    /// No catalog entry exists for the tool code.
    #[error("Tool not found with code: {tool_code}")]
    NotFound {
        /// The tool code that was not found.
        tool_code: String,
    },

    /// A catalog entry exists but is missing required pricing data.
    #[error("{message}")]
    InvalidState {
        /// A description of the integrity fault.
        message: String,
    },

    /// Catalog file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Catalog file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl RentalError {
    /// Builds an `InvalidInput` error from a non-empty list of violations.
    ///
    /// Returns `None` when there is nothing to report.
    pub fn from_violations(violations: Vec<FieldViolation>) -> Option<Self> {
        let message = violations.first()?.message.clone();
        Some(RentalError::InvalidInput {
            message,
            violations,
        })
    }
}

/// A type alias for Results that return RentalError.
pub type RentalResult<T> = Result<T, RentalError>;
