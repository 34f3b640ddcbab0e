//! # Error Types
//!
//! Errors as the pages see them, plus the startup error for `run`.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Sweet Shop                         │
//! │                                                                         │
//! │  Page action (admin "save")                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Form parse?  ─── ValidationError ─────────────┐                 │  │
//! │  │         │                                      │                 │  │
//! │  │         ▼                                      ▼                 │  │
//! │  │  MockApi call ─── StoreError ─────────────► ApiError ──► Toast   │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ────────────────────────────────────────────► Toast     │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  toast("Error", "Failed to add sweet: name is required")               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use serde::Serialize;
use sweets_core::{CoreError, ValidationError};
use sweets_store::StoreError;
use thiserror::Error;

/// Error a page action turns into a toast.
///
/// ## Serialization
/// ```json
/// {
///   "code": "OUT_OF_STOCK",
///   "message": "Out of stock"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable message, shown as the toast description
    pub message: String,
}

/// Error codes for page actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No sweet with that id
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Purchase with nothing left
    OutOfStock,

    /// A business rule other than stock (e.g. overflow)
    BusinessLogic,

    /// Session storage could not be read or written
    SessionError,

    /// Anything else
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::SweetNotFound { .. } => ApiError::new(ErrorCode::NotFound, message),
            CoreError::OutOfStock { .. } => ApiError::new(ErrorCode::OutOfStock, message),
            CoreError::StockOverflow { .. } => ApiError::new(ErrorCode::BusinessLogic, message),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(e) => e.into(),
            StoreError::SessionIo(e) => {
                tracing::error!("Session storage failed: {}", e);
                ApiError::new(ErrorCode::SessionError, "Session storage failed")
            }
            StoreError::SessionFormat(e) => {
                tracing::error!("Session data is corrupt: {}", e);
                ApiError::new(ErrorCode::SessionError, "Session data is corrupt")
            }
            StoreError::Internal(e) => {
                tracing::error!("Internal store error: {}", e);
                ApiError::internal("Something went wrong")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Startup Errors
// =============================================================================

/// Errors that stop the application from starting or running.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No session file location available; set SWEETS_SESSION_PATH")]
    NoSessionPath,

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
