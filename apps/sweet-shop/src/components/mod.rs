//! # Presentation Components
//!
//! Stateless text renderers. Each takes a sweet plus props and returns the
//! lines to print; none of them touch the store.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sweet_card        grid view (dashboard)                               │
//! │  ┌──────────────────────────────┐                                      │
//! │  │ Chocolate Truffles   45 left │                                      │
//! │  │ Rich dark chocolate truffles │                                      │
//! │  │ [Chocolate] $12.99           │                                      │
//! │  │ [Purchase]                   │                                      │
//! │  └──────────────────────────────┘                                      │
//! │                                                                         │
//! │  sweet_table_row   table view (dashboard, admin)                       │
//! │  1  Chocolate Truffles  Chocolate  $12.99  45  [Purchase]              │
//! │                                                                         │
//! │  skeleton          placeholders while a load is pending                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod skeleton;
pub mod sweet_card;
pub mod sweet_table_row;

use std::fmt;

use sweets_core::Sweet;

/// Label shown instead of a count when nothing is left.
pub const OUT_OF_STOCK_LABEL: &str = "Out of Stock";

/// A button as the terminal shows it: `[Label]` when usable, `(Label)` when
/// disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: &'static str,
    pub enabled: bool,
}

impl ActionButton {
    pub fn enabled(label: &'static str) -> Self {
        ActionButton {
            label,
            enabled: true,
        }
    }

    pub fn disabled(label: &'static str) -> Self {
        ActionButton {
            label,
            enabled: false,
        }
    }
}

impl fmt::Display for ActionButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.enabled {
            write!(f, "[{}]", self.label)
        } else {
            write!(f, "({})", self.label)
        }
    }
}

/// The customer's purchase button.
///
/// Disabled when out of stock or while a purchase of this sweet is in
/// flight.
pub fn purchase_button(sweet: &Sweet, is_purchasing: bool) -> ActionButton {
    if sweet.is_out_of_stock() {
        ActionButton::disabled(OUT_OF_STOCK_LABEL)
    } else if is_purchasing {
        ActionButton::disabled("Purchasing...")
    } else {
        ActionButton::enabled("Purchase")
    }
}

/// Truncates to `width` characters, marking the cut with `…`.
pub(crate) fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
