//! # Store Error Types
//!
//! Error types for mock backend operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Sweet::purchase_one → CoreError::OutOfStock                           │
//! │  std::io / serde_json (session file)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← one type for every facade call             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in sweet-shop) ← code + message for the toast               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sweets_core::{CoreError, ValidationError};
use thiserror::Error;

/// Mock backend errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A domain rule or validation failure.
    ///
    /// Displayed transparently so "Out of stock" reaches the toast verbatim.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading or writing the session file failed.
    #[error("Session storage failed: {0}")]
    SessionIo(#[from] std::io::Error),

    /// The session file holds something that is not valid JSON.
    #[error("Session data is corrupt: {0}")]
    SessionFormat(#[from] serde_json::Error),

    /// Internal store error (e.g. a poisoned lock).
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

impl StoreError {
    /// Creates a not-found error for a sweet id.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::Core(CoreError::not_found(id))
    }

    /// True for errors meaning "no sweet with that id".
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Core(CoreError::SweetNotFound { .. }))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
