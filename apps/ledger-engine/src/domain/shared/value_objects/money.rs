//! Money value object for integral currency amounts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::units::Units;

/// An amount of integral currency units.
///
/// The ledger record format stores currency as plain integers; no
/// fractional amounts exist anywhere in the format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the inner amount.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns true if this amount is positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns true if this amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns true if this amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition; `None` on overflow.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Checked subtraction; `None` on overflow.
    #[must_use]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Total cost of `units` at this per-unit price; `None` on overflow.
    #[must_use]
    pub fn checked_cost(self, units: Units) -> Option<Self> {
        self.0.checked_mul(units.count()).map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl From<Money> for i64 {
    fn from(money: Money) -> Self {
        money.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_new_and_display() {
        let m = Money::new(5000);
        assert_eq!(m.amount(), 5000);
        assert_eq!(format!("{m}"), "5000");
    }

    #[test]
    fn money_zero() {
        assert!(Money::ZERO.is_zero());
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::ZERO.is_negative());
    }

    #[test]
    fn money_sign_predicates() {
        assert!(Money::new(100).is_positive());
        assert!(Money::new(-100).is_negative());
    }

    #[test]
    fn money_checked_add_and_sub() {
        assert_eq!(
            Money::new(100).checked_add(Money::new(50)),
            Some(Money::new(150))
        );
        assert_eq!(Money::new(i64::MAX).checked_add(Money::new(1)), None);

        assert_eq!(
            Money::new(100).checked_sub(Money::new(50)),
            Some(Money::new(50))
        );
        assert_eq!(Money::new(i64::MIN).checked_sub(Money::new(1)), None);
    }

    #[test]
    fn money_checked_cost() {
        let price = Money::new(100);
        assert_eq!(price.checked_cost(Units::new(50)), Some(Money::new(5000)));
        assert_eq!(Money::new(i64::MAX).checked_cost(Units::new(2)), None);
    }

    #[test]
    fn money_ordering() {
        assert!(Money::new(100) > Money::new(50));
        assert!(Money::new(50) <= Money::new(50));
    }

    #[test]
    fn money_serde_is_plain_integer() {
        let json = serde_json::to_string(&Money::new(10000)).unwrap();
        assert_eq!(json, "10000");

        let parsed: Money = serde_json::from_str("10000").unwrap();
        assert_eq!(parsed, Money::new(10000));
    }
}
