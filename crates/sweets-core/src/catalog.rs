//! # Catalog Module
//!
//! Client-side views over a loaded list of sweets: the dashboard filter,
//! the category selector choices and the admin summary counters.
//!
//! ## Filter Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Dashboard Filtering                                  │
//! │                                                                         │
//! │  all sweets                                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Search   ── name contains text (case-insensitive), skipped if empty   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Category ── category == selection, skipped for "all"                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Price    ── min <= price <= max                                       │
//! │              empty min = 0, empty max = unbounded                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filtered sweets (original order kept)                                 │
//! │                                                                         │
//! │  Each axis is an independent predicate, so the axes can run in any     │
//! │  order and re-applying the filter to its own output changes nothing.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Sweet;
use crate::ALL_CATEGORIES;

// =============================================================================
// Category Filter
// =============================================================================

/// The category selector's value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// The "all" sentinel: no category filtering.
    #[default]
    All,
    /// Keep only sweets whose category equals this string exactly.
    Named(String),
}

impl CategoryFilter {
    /// Maps a selector value to a filter; `"all"` is the sentinel.
    pub fn from_selection(selection: &str) -> Self {
        if selection == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(selection.to_string())
        }
    }

    /// Returns the selector value this filter corresponds to.
    pub fn as_selection(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }
}

// =============================================================================
// Filter Axes
// =============================================================================

/// One independent dimension of the dashboard filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAxis {
    Search,
    Category,
    Price,
}

impl FilterAxis {
    /// All axes in the order the dashboard applies them.
    pub const ALL: [FilterAxis; 3] = [FilterAxis::Search, FilterAxis::Category, FilterAxis::Price];
}

// =============================================================================
// Sweet Filter
// =============================================================================

/// The dashboard's filter inputs, kept as the user typed them.
///
/// Price bounds stay as text because that is what the inputs hold; they are
/// parsed on every evaluation. A bound that does not parse is treated as
/// empty rather than hiding the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweetFilter {
    pub search: String,
    pub category: CategoryFilter,
    pub min_price: String,
    pub max_price: String,
}

impl SweetFilter {
    /// Lower price bound; empty or unparseable text means zero.
    pub fn min_bound(&self) -> Money {
        parse_bound(&self.min_price).unwrap_or_else(Money::zero)
    }

    /// Upper price bound; `None` means unbounded.
    pub fn max_bound(&self) -> Option<Money> {
        parse_bound(&self.max_price)
    }

    /// True when no axis would remove anything.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.category == CategoryFilter::All
            && parse_bound(&self.min_price).is_none()
            && parse_bound(&self.max_price).is_none()
    }

    /// Checks a single axis against one sweet.
    pub fn matches_axis(&self, axis: FilterAxis, sweet: &Sweet) -> bool {
        match axis {
            FilterAxis::Search => {
                self.search.is_empty()
                    || sweet
                        .name
                        .to_lowercase()
                        .contains(&self.search.to_lowercase())
            }
            FilterAxis::Category => match &self.category {
                CategoryFilter::All => true,
                CategoryFilter::Named(name) => sweet.category == *name,
            },
            FilterAxis::Price => {
                let price = sweet.price();
                price >= self.min_bound() && self.max_bound().map_or(true, |max| price <= max)
            }
        }
    }

    /// Checks every axis against one sweet.
    pub fn matches(&self, sweet: &Sweet) -> bool {
        FilterAxis::ALL
            .iter()
            .all(|axis| self.matches_axis(*axis, sweet))
    }

    /// Keeps the sweets passing a single axis.
    pub fn apply_axis(&self, axis: FilterAxis, sweets: &[Sweet]) -> Vec<Sweet> {
        sweets
            .iter()
            .filter(|sweet| self.matches_axis(axis, sweet))
            .cloned()
            .collect()
    }

    /// Keeps the sweets passing every axis, in their original order.
    pub fn apply(&self, sweets: &[Sweet]) -> Vec<Sweet> {
        sweets
            .iter()
            .filter(|sweet| self.matches(sweet))
            .cloned()
            .collect()
    }
}

fn parse_bound(text: &str) -> Option<Money> {
    if text.trim().is_empty() {
        return None;
    }
    Money::parse(text).ok()
}

// =============================================================================
// Category Choices
// =============================================================================

/// Returns the category selector entries: `"all"` followed by each distinct
/// category in first-seen order.
///
/// ```rust
/// use sweets_core::catalog::category_choices;
///
/// assert_eq!(category_choices(&[]), vec!["all".to_string()]);
/// ```
pub fn category_choices(sweets: &[Sweet]) -> Vec<String> {
    let mut choices = vec![ALL_CATEGORIES.to_string()];
    for sweet in sweets {
        if !choices[1..].contains(&sweet.category) {
            choices.push(sweet.category.clone());
        }
    }
    choices
}

// =============================================================================
// Inventory Stats
// =============================================================================

/// Admin summary counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_products: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
}

impl InventoryStats {
    /// Counts a loaded list.
    pub fn from_sweets(sweets: &[Sweet]) -> Self {
        InventoryStats {
            total_products: sweets.len(),
            in_stock: sweets.iter().filter(|s| s.is_in_stock()).count(),
            out_of_stock: sweets.iter().filter(|s| s.is_out_of_stock()).count(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sweet(id: &str, name: &str, category: &str, price_cents: i64, quantity: i64) -> Sweet {
        Sweet {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price_cents,
            quantity,
            description: None,
            image: None,
        }
    }

    fn catalog() -> Vec<Sweet> {
        vec![
            sweet("1", "Chocolate Truffles", "Chocolate", 1299, 45),
            sweet("2", "Strawberry Gummies", "Gummies", 599, 0),
            sweet("3", "Caramel Fudge", "Fudge", 899, 23),
            sweet("4", "Mint Hard Candy", "Hard Candy", 499, 120),
            sweet("5", "Lollipops Assorted", "Lollipops", 399, 78),
            sweet("6", "Sour Worms", "Gummies", 699, 0),
        ]
    }

    fn ids(sweets: &[Sweet]) -> Vec<&str> {
        sweets.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = SweetFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&catalog()), catalog());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let filter = SweetFilter {
            search: "GUMM".to_string(),
            ..SweetFilter::default()
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec!["2"]);
    }

    #[test]
    fn test_category_filter() {
        let two = vec![
            sweet("1", "Chocolate Truffles", "Chocolate", 1299, 45),
            sweet("2", "Strawberry Gummies", "Gummies", 599, 0),
        ];
        let filter = SweetFilter {
            category: CategoryFilter::from_selection("Gummies"),
            ..SweetFilter::default()
        };
        assert_eq!(ids(&filter.apply(&two)), vec!["2"]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let filter = SweetFilter {
            min_price: "4.99".to_string(),
            max_price: "6.99".to_string(),
            ..SweetFilter::default()
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec!["2", "4", "6"]);
    }

    #[test]
    fn test_empty_bounds_default_to_zero_and_unbounded() {
        let only_min = SweetFilter {
            min_price: "8".to_string(),
            ..SweetFilter::default()
        };
        assert_eq!(ids(&only_min.apply(&catalog())), vec!["1", "3"]);

        let only_max = SweetFilter {
            max_price: "4".to_string(),
            ..SweetFilter::default()
        };
        assert_eq!(ids(&only_max.apply(&catalog())), vec!["5"]);
    }

    #[test]
    fn test_unparseable_bound_is_ignored() {
        let filter = SweetFilter {
            min_price: "cheap".to_string(),
            ..SweetFilter::default()
        };
        assert_eq!(filter.min_bound(), Money::zero());
        assert_eq!(filter.apply(&catalog()).len(), 6);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = SweetFilter {
            search: "o".to_string(),
            category: CategoryFilter::All,
            min_price: "4".to_string(),
            max_price: "10".to_string(),
        };
        let once = filter.apply(&catalog());
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_axes_commute() {
        let filter = SweetFilter {
            search: "s".to_string(),
            category: CategoryFilter::Named("Gummies".to_string()),
            min_price: "6".to_string(),
            max_price: String::new(),
        };
        let expected = filter.apply(&catalog());

        let orders = [
            [FilterAxis::Search, FilterAxis::Category, FilterAxis::Price],
            [FilterAxis::Search, FilterAxis::Price, FilterAxis::Category],
            [FilterAxis::Category, FilterAxis::Search, FilterAxis::Price],
            [FilterAxis::Category, FilterAxis::Price, FilterAxis::Search],
            [FilterAxis::Price, FilterAxis::Search, FilterAxis::Category],
            [FilterAxis::Price, FilterAxis::Category, FilterAxis::Search],
        ];
        for order in orders {
            let result = order
                .iter()
                .fold(catalog(), |acc, axis| filter.apply_axis(*axis, &acc));
            assert_eq!(result, expected, "order {:?}", order);
        }
        assert_eq!(ids(&expected), vec!["6"]);
    }

    #[test]
    fn test_category_choices_dedupe_in_first_seen_order() {
        assert_eq!(
            category_choices(&catalog()),
            vec!["all", "Chocolate", "Gummies", "Fudge", "Hard Candy", "Lollipops"]
        );
    }

    #[test]
    fn test_category_filter_selection_round_trip() {
        assert_eq!(CategoryFilter::from_selection("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_selection("Fudge").as_selection(),
            "Fudge"
        );
    }

    #[test]
    fn test_inventory_stats() {
        let stats = InventoryStats::from_sweets(&catalog());
        assert_eq!(
            stats,
            InventoryStats {
                total_products: 6,
                in_stock: 4,
                out_of_stock: 2,
            }
        );
        assert_eq!(InventoryStats::from_sweets(&[]), InventoryStats::default());
    }
}
