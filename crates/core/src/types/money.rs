//! Non-negative monetary amounts using decimal arithmetic.

use core::fmt;
use core::ops::{Add, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Money`] value.
#[derive(thiserror::Error, Debug, Clone)]
pub enum MoneyError {
    /// The amount is below zero.
    #[error("money amount cannot be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative USD amount.
///
/// Backed by [`Decimal`] so totals like `200 * 0.08` come out exact.
/// Displays in the storefront's `$x.xx` form.
///
/// ## Examples
///
/// ```
/// use lumina_core::Money;
/// use rust_decimal::Decimal;
///
/// let price = Money::from_major(100);
/// let tax = price.tax(Decimal::new(8, 2));
/// assert_eq!((price + tax).to_string(), "$108.00");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a `Money` value, rejecting negative amounts.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Negative`] if `amount < 0`.
    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Whole-dollar amount (e.g., `from_major(299)` is `$299.00`).
    #[must_use]
    pub fn from_major(dollars: u32) -> Self {
        Self(Decimal::from(dollars))
    }

    /// Amount in cents (e.g., `from_cents(1_254_050)` is `$12,540.50`).
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(cents as i64, 2))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Tax owed on this amount at the given fractional rate (e.g., `0.08`).
    ///
    /// Rounded to cents, banker's rounding.
    #[must_use]
    pub fn tax(&self, rate: Decimal) -> Self {
        Self((self.0 * rate).round_dp(2))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative() {
        assert!(matches!(
            Money::new(Decimal::new(-1, 2)),
            Err(MoneyError::Negative(_))
        ));
        assert!(Money::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(Money::from_major(216).to_string(), "$216.00");
        assert_eq!(Money::from_cents(1850).to_string(), "$18.50");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_tax_at_eight_percent() {
        let subtotal = Money::from_major(200);
        let tax = subtotal.tax(Decimal::new(8, 2));
        assert_eq!(tax, Money::from_major(16));
        assert_eq!((subtotal + tax).to_string(), "$216.00");
    }

    #[test]
    fn test_line_arithmetic() {
        let line = Money::from_major(50) * 2;
        assert_eq!(line, Money::from_major(100));

        let total: Money = [Money::from_major(100), Money::from_major(100)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_major(200));
    }

    #[test]
    fn test_serde_uses_decimal_string() {
        let money = Money::from_cents(1_254_050);
        let json = serde_json::to_string(&money).unwrap();
        assert_eq!(json, "\"12540.50\"");

        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, money);
    }
}
