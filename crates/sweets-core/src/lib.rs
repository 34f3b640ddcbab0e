//! # sweets-core: Pure Domain Logic for the Sweet Shop
//!
//! This crate is the **heart** of the Sweet Shop. It holds the domain types
//! and every business rule as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sweet Shop Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  sweet-shop (terminal app)                      │   │
//! │  │   Shell ──► Dashboard page ──► Admin page ──► Components        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  sweets-store (mock backend)                    │   │
//! │  │   MockApi facade, in-memory repository, session storage         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ sweets-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │ validation│  │   │
//! │  │   │   Sweet   │  │   Money   │  │  filter   │  │   rules   │  │   │
//! │  │   │   User    │  │  parsing  │  │  stats    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO TIMERS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Sweet, NewSweet, SweetPatch, User)
//! - [`money`] - Money type with integer cents (no floating point!)
//! - [`catalog`] - Dashboard filtering, category choices, inventory stats
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use sweets_core::money::Money;
//!
//! let price = Money::parse("12.99").unwrap();
//! assert_eq!(price.cents(), 1299);
//! assert_eq!(price.to_string(), "$12.99");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{CategoryFilter, InventoryStats, SweetFilter};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sentinel value of the category selector that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Largest amount a single restock may add.
///
/// Guards against typos like `10000` instead of `100` in the restock dialog.
pub const MAX_RESTOCK_AMOUNT: i64 = 9_999;
