//! Type-safe price representation using decimal arithmetic.
//!
//! The storefront trades in a single currency (South African Rand), so
//! `Price` wraps a bare [`Decimal`] amount and renders with the `R` prefix.

use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative monetary amount in Rand.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// A zero price.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The total for `qty` units at this unit price.
    #[must_use]
    pub fn line_total(&self, qty: u32) -> Self {
        Self(self.0 * Decimal::from(qty))
    }
}

impl std::fmt::Display for Price {
    /// Format for display (e.g., "R199.50").
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R{:.2}", self.0)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn test_display_uses_rand_prefix() {
        assert_eq!(Price::new(dec!(200)).to_string(), "R200.00");
        assert_eq!(Price::new(dec!(310.5)).to_string(), "R310.50");
        assert_eq!(Price::zero().to_string(), "R0.00");
    }

    #[test]
    fn test_line_total() {
        let unit = Price::new(dec!(200));
        assert_eq!(unit.line_total(2), Price::new(dec!(400)));
        assert_eq!(unit.line_total(1), unit);
    }

    #[test]
    fn test_sum() {
        let subtotal: Price = [Price::new(dec!(400)), Price::new(dec!(310))]
            .into_iter()
            .sum();
        assert_eq!(subtotal, Price::new(dec!(710)));
    }
}
