//! # Validation Module
//!
//! Input validation utilities for the Sweet Shop.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Admin form (sweet-shop)                                      │
//! │  ├── Text → number parsing (price, quantity, restock amount)           │
//! │  └── Immediate toast on malformed input                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: MockApi facade (sweets-store)                                │
//! │  └── THIS MODULE: field rules on NewSweet / SweetPatch / amounts       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Sweet methods (types.rs)                                     │
//! │  └── Stock rules: no purchase at zero, no overflow on restock          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sweets_core::validation::{validate_sweet_name, validate_restock_amount};
//!
//! assert!(validate_sweet_name("Caramel Fudge").is_ok());
//! assert!(validate_restock_amount(-5).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{NewSweet, SweetPatch};
use crate::MAX_RESTOCK_AMOUNT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NAME_LEN: usize = 100;
const MAX_CATEGORY_LEN: usize = 50;
const MAX_DESCRIPTION_LEN: usize = 500;

// =============================================================================
// String Validators
// =============================================================================

fn validate_required_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a sweet name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 100 characters
pub fn validate_sweet_name(name: &str) -> ValidationResult<()> {
    validate_required_text("name", name, MAX_NAME_LEN)
}

/// Validates a category.
///
/// Categories are free text; whatever the admin types becomes a new entry in
/// the dashboard's category selector.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    validate_required_text("category", category, MAX_CATEGORY_LEN)
}

/// Validates an optional description (at most 500 characters).
pub fn validate_description(description: Option<&str>) -> ValidationResult<()> {
    match description {
        Some(text) if text.chars().count() > MAX_DESCRIPTION_LEN => Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        }),
        _ => Ok(()),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free samples)
///
/// ## Example
/// ```rust
/// use sweets_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1299).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock quantity.
///
/// ## Rules
/// - Must be non-negative (>= 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a restock amount.
///
/// ## Rules
/// - Must be positive (> 0): a zero or negative restock is rejected instead
///   of silently lowering stock
/// - Must not exceed `MAX_RESTOCK_AMOUNT`
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Admin: Restock dialog                                                  │
/// │                                                                         │
/// │  Admin enters amount: 10                                               │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_restock_amount(10) ← THIS FUNCTION                           │
/// │       │                                                                 │
/// │       ├── amount <= 0?    → Error: "amount must be positive"           │
/// │       │                                                                 │
/// │       ├── amount > 9999?  → Error: "amount must be between 1 and 9999" │
/// │       │                                                                 │
/// │       └── OK → quantity += amount                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_restock_amount(amount: i64) -> ValidationResult<()> {
    if amount <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    if amount > MAX_RESTOCK_AMOUNT {
        return Err(ValidationError::OutOfRange {
            field: "amount".to_string(),
            min: 1,
            max: MAX_RESTOCK_AMOUNT,
        });
    }

    Ok(())
}

/// Parses a whole number typed into a form field.
///
/// ```rust
/// use sweets_core::validation::parse_whole_number;
///
/// assert_eq!(parse_whole_number("quantity", " 12 ").unwrap(), 12);
/// assert!(parse_whole_number("quantity", "1.5").is_err());
/// ```
pub fn parse_whole_number(field: &str, input: &str) -> ValidationResult<i64> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    text.parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a whole number".to_string(),
        })
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates every field of a sweet about to be created.
pub fn validate_new_sweet(sweet: &NewSweet) -> ValidationResult<()> {
    validate_sweet_name(&sweet.name)?;
    validate_category(&sweet.category)?;
    validate_price_cents(sweet.price_cents)?;
    validate_quantity(sweet.quantity)?;
    validate_description(sweet.description.as_deref())?;
    Ok(())
}

/// Validates the fields present in a partial update.
///
/// Absent fields are left alone and therefore not checked.
pub fn validate_patch(patch: &SweetPatch) -> ValidationResult<()> {
    if let Some(name) = &patch.name {
        validate_sweet_name(name)?;
    }
    if let Some(category) = &patch.category {
        validate_category(category)?;
    }
    if let Some(price) = patch.price_cents {
        validate_price_cents(price)?;
    }
    if let Some(qty) = patch.quantity {
        validate_quantity(qty)?;
    }
    validate_description(patch.description.as_deref())?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
