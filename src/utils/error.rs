//! Error types and handling
//!
//! Common error types used across the capture core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Capture failed: {0}")]
    CaptureFailed(String),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Display not found: index {0}")]
    DisplayNotFound(usize),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<png::EncodingError> for AppError {
    fn from(error: png::EncodingError) -> Self {
        AppError::Encoding(error.to_string())
    }
}

/// Error response for the host shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        let code = match &error {
            AppError::CaptureFailed(_) => "CAPTURE_FAILED",
            AppError::InvalidRegion(_) => "INVALID_REGION",
            AppError::DisplayNotFound(_) => "DISPLAY_NOT_FOUND",
            AppError::Encoding(_) => "ENCODING_ERROR",
            AppError::Platform(_) => "PLATFORM_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        };

        ErrorResponse {
            code: code.to_string(),
            message: error.to_string(),
        }
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
