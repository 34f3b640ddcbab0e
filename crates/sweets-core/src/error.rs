//! # Error Types
//!
//! Domain-specific error types for sweets-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sweets-core errors (this file)                                        │
//! │  ├── CoreError        - Domain rule violations (not found, stock)      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  sweets-store errors (separate crate)                                  │
//! │  └── StoreError       - Session storage / serialization failures       │
//! │                                                                         │
//! │  sweet-shop errors (in app)                                            │
//! │  └── ApiError         - What a page turns into a toast                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → Toast     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `Display` text of `SweetNotFound` and `OutOfStock` is exactly what the
//! customer sees in the failure toast, so it stays short.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No sweet with this id exists in the store.
    ///
    /// ## When This Occurs
    /// - `update`, `purchase` or `restock` on an id that was never created
    /// - The sweet was deleted from another view before the action ran
    #[error("Sweet not found")]
    SweetNotFound { id: String },

    /// Purchase attempted while the quantity is already zero.
    ///
    /// ## User Workflow
    /// ```text
    /// Click Purchase on "Strawberry Gummies" (quantity 0)
    ///      │
    ///      ▼
    /// OutOfStock { id: "2" }
    ///      │
    ///      ▼
    /// Toast: "Purchase failed" / "Out of stock"
    /// ```
    #[error("Out of stock")]
    OutOfStock { id: String },

    /// Adding stock would overflow the quantity counter.
    #[error("Stock level for sweet {id} would overflow")]
    StockOverflow { id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a SweetNotFound error for a given id.
    pub fn not_found(id: impl Into<String>) -> Self {
        CoreError::SweetNotFound { id: id.into() }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any store mutation happens, so a rejected form leaves the
/// catalog untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., "abc" typed into the price field).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(CoreError::not_found("42").to_string(), "Sweet not found");
        assert_eq!(
            CoreError::OutOfStock { id: "2".into() }.to_string(),
            "Out of stock"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Negative {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "amount".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
