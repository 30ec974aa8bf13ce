//! Error handling for LayerCake
//!
//! Every failure to build a layer or cake from input surfaces as
//! [`LayerCakeError::Validation`]. File and JSON errors only come from the
//! store and the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for LayerCake operations
pub type Result<T> = std::result::Result<T, LayerCakeError>;

/// Main error type for LayerCake operations
#[derive(Error, Debug)]
pub enum LayerCakeError {
    // Validation Errors
    #[error("Validation failed for '{field}': {reason}")]
    Validation { field: String, reason: String },

    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LayerCakeError {
    /// Build a validation error for a field path such as `nonBinary.preference`
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        LayerCakeError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            LayerCakeError::Validation { .. } => "VALIDATION_ERROR",
            LayerCakeError::FileNotFound { .. } => "FILE_NOT_FOUND",
            LayerCakeError::FileReadError { .. } => "FILE_READ_ERROR",
            LayerCakeError::FileWriteError { .. } => "FILE_WRITE_ERROR",
            LayerCakeError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// True for the domain validation kind
    pub fn is_validation(&self) -> bool {
        matches!(self, LayerCakeError::Validation { .. })
    }

    /// Returns a user-friendly recovery suggestion.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            LayerCakeError::Validation { .. } => Some(concat!(
                "Each layer needs 'usesPronoun' and 'preference'; ",
                "a cake needs 'male', 'female', 'nonBinary' and 'agender'."
            )),
            LayerCakeError::FileNotFound { .. } => Some("Check the file path and try again."),
            LayerCakeError::Serialization(_) => Some("Check that the file is well-formed JSON."),
            _ => None,
        }
    }
}
