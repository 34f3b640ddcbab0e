//! # Domain Types
//!
//! Core domain types used throughout the Sweet Shop.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Sweet       │   │    NewSweet     │   │   SweetPatch    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  (Sweet - id)   │   │  every field    │       │
//! │  │  name           │   │                 │   │  optional       │       │
//! │  │  category       │   │  create input   │   │  update input   │       │
//! │  │  price_cents    │   └─────────────────┘   └─────────────────┘       │
//! │  │  quantity       │                                                    │
//! │  │  description?   │   ┌─────────────────┐                             │
//! │  │  image?         │   │      User       │                             │
//! │  └─────────────────┘   │  ─────────────  │                             │
//! │                        │  id, email      │                             │
//! │                        │  name, is_admin │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stock Rules
//! The stock-changing rules live on [`Sweet`] itself so every store
//! implementation applies them the same way:
//! - [`Sweet::purchase_one`] refuses to go below zero
//! - [`Sweet::restock`] refuses non-positive amounts and overflow

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_restock_amount;

// =============================================================================
// Sweet
// =============================================================================

/// An inventory item offered in the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Sweet {
    /// Unique identifier, assigned by the store at creation time.
    pub id: String,

    /// Display name shown on cards and table rows.
    pub name: String,

    /// Free-text category; the set of categories drives the dashboard filter.
    pub category: String,

    /// Price in cents.
    pub price_cents: i64,

    /// Units in stock. Never negative.
    pub quantity: i64,

    /// Optional short description shown on the card.
    pub description: Option<String>,

    /// Optional image reference (URL or asset path).
    pub image: Option<String>,
}

impl Sweet {
    /// Builds a stored sweet from create input and an assigned id.
    pub fn from_new(id: impl Into<String>, new: NewSweet) -> Self {
        Sweet {
            id: id.into(),
            name: new.name,
            category: new.category,
            price_cents: new.price_cents,
            quantity: new.quantity,
            description: new.description,
            image: new.image,
        }
    }

    /// Returns the price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// True when nothing is left to sell.
    #[inline]
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }

    /// True when at least one unit can be purchased.
    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Merges every present field of `patch` into this sweet.
    ///
    /// The id is never touched.
    pub fn apply_patch(&mut self, patch: SweetPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price_cents) = patch.price_cents {
            self.price_cents = price_cents;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(image) = patch.image {
            self.image = Some(image);
        }
    }

    /// Sells one unit.
    ///
    /// ## Returns
    /// - `Ok(())` - quantity decremented by exactly one
    /// - `Err(CoreError::OutOfStock)` - quantity was zero, nothing changed
    pub fn purchase_one(&mut self) -> CoreResult<()> {
        if self.quantity <= 0 {
            return Err(CoreError::OutOfStock {
                id: self.id.clone(),
            });
        }

        self.quantity -= 1;
        Ok(())
    }

    /// Adds `amount` units to the stock.
    ///
    /// Restock is additive, so calling it twice adds twice.
    ///
    /// ## Returns
    /// - `Err(CoreError::Validation)` - amount not in `1..=MAX_RESTOCK_AMOUNT`
    /// - `Err(CoreError::StockOverflow)` - the sum does not fit
    pub fn restock(&mut self, amount: i64) -> CoreResult<()> {
        validate_restock_amount(amount)?;

        self.quantity = self
            .quantity
            .checked_add(amount)
            .ok_or_else(|| CoreError::StockOverflow {
                id: self.id.clone(),
            })?;
        Ok(())
    }
}

// =============================================================================
// New Sweet / Sweet Patch
// =============================================================================

/// Create input: every Sweet field except the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewSweet {
    pub name: String,
    pub category: String,
    pub price_cents: i64,
    pub quantity: i64,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Partial update input. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SweetPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price_cents: Option<i64>,
    pub quantity: Option<i64>,
    pub description: Option<String>,
    pub image: Option<String>,
}

// =============================================================================
// User
// =============================================================================

/// The signed-in identity held in session storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================
