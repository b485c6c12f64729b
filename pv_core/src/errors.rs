//! # Error Types
//!
//! Structured error types for pv_core. Every failure the crate can report is
//! one of these variants, so front ends can show a message to the user and
//! still hand a machine-readable form to scripts (`--json` on the CLI).
//!
//! ## Example
//!
//! ```rust
//! use pv_core::errors::{CalcError, CalcResult};
//!
//! fn check_rail_length(rail_length_m: f64) -> CalcResult<()> {
//!     if rail_length_m <= 0.0 {
//!         return Err(CalcError::invalid_parameter(
//!             "mounting_rail_length_m",
//!             rail_length_m.to_string(),
//!             "Rail length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_rail_length(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for pv_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for purchase-list operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A site parameter is missing, malformed, or out of bounds
    #[error("Invalid parameter '{field}': {value} - {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

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

    /// Typst compilation or PDF emission failed
    #[error("Render failed during {stage}: {reason}")]
    RenderFailed { stage: String, reason: String },
}

impl CalcError {
    /// Create an InvalidParameter error
    pub fn invalid_parameter(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidParameter {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a RenderFailed error
    pub fn render_failed(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::RenderFailed {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field, if this is a parameter error
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidParameter { .. } => "INVALID_PARAMETER",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::RenderFailed { .. } => "RENDER_FAILED",
        }
    }
}
