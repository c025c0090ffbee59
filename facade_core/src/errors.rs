//! # Error Types
//!
//! Structured error types for facade_core. Errors carry enough context to be
//! rendered in a dashboard or handled programmatically, and serialize to JSON
//! alongside the analysis payloads they relate to.
//!
//! ## Example
//!
//! ```rust
//! use facade_core::errors::{FacadeError, FacadeResult};
//!
//! fn validate_width(width_m: f64) -> FacadeResult<()> {
//!     if width_m <= 0.0 {
//!         return Err(FacadeError::invalid_input(
//!             "module_width",
//!             width_m.to_string(),
//!             "Module width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for facade_core operations
pub type FacadeResult<T> = Result<T, FacadeError>;

/// Structured error type for analysis and snapshot operations.
///
/// Each variant provides specific context about what went wrong, so a host
/// UI can highlight the offending form field or fall back gracefully.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FacadeError {
    /// A profile field is invalid (non-positive, non-numeric, etc.)
    #[error("Invalid profile field '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required profile field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A dataset build was requested with no profiles to analyze
    #[error("Profile set is empty - at least one profile is required")]
    EmptyProfileSet,

    /// Snapshot file I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl FacadeError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FacadeError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        FacadeError::MissingField {
            field: field.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FacadeError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FacadeError::InvalidInput { .. } => "INVALID_INPUT",
            FacadeError::MissingField { .. } => "MISSING_FIELD",
            FacadeError::EmptyProfileSet => "EMPTY_PROFILE_SET",
            FacadeError::FileError { .. } => "FILE_ERROR",
            FacadeError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
