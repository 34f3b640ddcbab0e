//! # Money Module
//!
//! Provides the `Money` type for handling prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Price filter "min 5.99" against a float price of 5.99:                │
//! │    5.99 stored as 5.98999999999999976...  ❌ comparison is fragile      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "5.99" is parsed once into 599 cents                                │
//! │    Every comparison and sum after that is exact                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sweets_core::money::Money;
//!
//! let price = Money::from_cents(1299);
//! assert_eq!(price.to_string(), "$12.99");
//!
//! // Text from a form field or a filter input
//! let min = Money::parse("5").unwrap();
//! assert!(price >= min);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::ValidationResult;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Admin form "12.99" ──► Money::parse ──► Sweet.price_cents              │
/// │                                               │                         │
/// │  Dashboard min/max ──► Money::parse ──► SweetFilter price bounds        │
/// │                                               │                         │
/// │                                               ▼                         │
/// │                               Displayed as "$12.99" on cards and rows   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parses a decimal price such as `"12.99"`, `"5"`, `"0.5"` or `".75"`.
    ///
    /// ## Rules
    /// - Surrounding whitespace is ignored
    /// - An optional leading `-` is accepted (range checks happen in validation)
    /// - At most two decimal places
    /// - No currency symbol, no thousands separators
    ///
    /// ## Example
    /// ```rust
    /// use sweets_core::money::Money;
    ///
    /// assert_eq!(Money::parse("12.99").unwrap().cents(), 1299);
    /// assert_eq!(Money::parse("3.5").unwrap().cents(), 350);
    /// assert!(Money::parse("1.999").is_err());
    /// assert!(Money::parse("abc").is_err());
    /// ```
    pub fn parse(input: &str) -> ValidationResult<Money> {
        Self::parse_field("price", input)
    }

    /// Same as [`Money::parse`] but reports errors against `field`.
    pub fn parse_field(field: &str, input: &str) -> ValidationResult<Money> {
        let text = input.trim();
        if text.is_empty() {
            return Err(ValidationError::Required {
                field: field.to_string(),
            });
        }

        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: reason.to_string(),
        };

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (major, minor) = match unsigned.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (unsigned, ""),
        };

        if major.is_empty() && minor.is_empty() {
            return Err(invalid("must be a number"));
        }
        if !major.chars().all(|c| c.is_ascii_digit()) || !minor.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("must be a number"));
        }
        if minor.len() > 2 {
            return Err(invalid("must have at most 2 decimal places"));
        }

        let major_value: i64 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| invalid("is too large"))?
        };
        let minor_value: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| invalid("must be a number"))? * 10,
            _ => minor.parse().map_err(|_| invalid("must be a number"))?,
        };

        let cents = major_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor_value))
            .ok_or_else(|| invalid("is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Formats the value without a currency symbol, for editing in a form.
    ///
    /// ```rust
    /// use sweets_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(599).to_plain_string(), "5.99");
    /// assert_eq!(Money::from_cents(500).to_plain_string(), "5.00");
    /// ```
    pub fn to_plain_string(&self) -> String {
        format!(
            "{}{}.{:02}",
            if self.is_negative() { "-" } else { "" },
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Display shows the price fixed to two decimals with a dollar sign.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1299).to_string(), "$12.99");
        assert_eq!(Money::from_cents(399).to_string(), "$3.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(7).to_string(), "$0.07");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
    }

    #[test]
    fn test_parse_accepts_common_forms() {
        assert_eq!(Money::parse("12.99").unwrap().cents(), 1299);
        assert_eq!(Money::parse("12").unwrap().cents(), 1200);
        assert_eq!(Money::parse("12.").unwrap().cents(), 1200);
        assert_eq!(Money::parse("0.5").unwrap().cents(), 50);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("  4.99  ").unwrap().cents(), 499);
        assert_eq!(Money::parse("-1.25").unwrap().cents(), -125);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Money::parse(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("$5").is_err());
        assert!(Money::parse("1,000").is_err());
        assert!(Money::parse("1.999").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_field_names_the_field() {
        let err = Money::parse_field("min price", "x").unwrap_err();
        assert!(err.to_string().starts_with("min price"));
    }

    #[test]
    fn test_plain_string_round_trips_through_parse() {
        for cents in [0, 5, 99, 100, 1299, 12000] {
            let money = Money::from_cents(cents);
            assert_eq!(Money::parse(&money.to_plain_string()).unwrap(), money);
        }
    }

    #[test]
    fn test_ordering_follows_cents() {
        assert!(Money::from_cents(599) < Money::from_cents(1299));
        assert_eq!(Money::default(), Money::zero());
    }
}
