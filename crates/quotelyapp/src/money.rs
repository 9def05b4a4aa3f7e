//! Money amounts using decimal arithmetic.
//!
//! Amounts are exact decimals all the way through line totals and sums; the
//! only rounding happens when an amount is formatted for display (two places,
//! midpoint away from zero).

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decimal places shown for money.
pub const DISPLAY_PLACES: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// The amount rounded for display.
    pub fn rounded(&self) -> Decimal {
        let mut rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_PLACES, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DISPLAY_PLACES);
        rounded
    }

    /// `None` when the sum does not fit in a `Decimal`.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// `None` when the product does not fit in a `Decimal`.
    pub fn checked_mul(self, rhs: Decimal) -> Option<Money> {
        self.0.checked_mul(rhs).map(Money)
    }

    /// Formatted with a currency symbol, e.g. `£25.25`.
    pub fn display_with(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded())
    }
}

impl FromStr for Money {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s.trim().trim_start_matches(['£', '$', '€']);
        Decimal::from_str(cleaned)
            .map(Money)
            .map_err(|_| format!("Invalid amount: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn displays_two_places() {
        assert_eq!(money("10").to_string(), "10.00");
        assert_eq!(money("5.25").to_string(), "5.25");
        assert_eq!(money("0.005").to_string(), "0.01");
        assert_eq!(money("2.344").to_string(), "2.34");
    }

    #[test]
    fn sums_without_binary_float_drift() {
        let total = money("0.1").checked_add(money("0.2")).unwrap();
        assert_eq!(total, money("0.3"));
        assert_eq!(total.to_string(), "0.30");
    }

    #[test]
    fn parses_with_currency_symbol() {
        assert_eq!(money("£12.50"), Money::new(Decimal::new(1250, 2)));
        assert!("twelve".parse::<Money>().is_err());
    }

    #[test]
    fn overflow_is_reported_not_panicked() {
        assert_eq!(Money::new(Decimal::MAX).checked_mul(Decimal::TWO), None);
        assert_eq!(Money::new(Decimal::MAX).checked_add(money("1")), None);
        assert_eq!(money("2.5").checked_mul(Decimal::from(3)), Some(money("7.5")));
    }

    #[test]
    fn display_with_symbol() {
        assert_eq!(money("3").display_with("£"), "£3.00");
    }
}
