//! Unit-count value object for asset supply and holdings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A count of asset units.
///
/// Stored in ledger records as a plain integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Units(i64);

impl Units {
    /// Zero units.
    pub const ZERO: Self = Self(0);

    /// Create a new unit count.
    #[must_use]
    pub const fn new(count: i64) -> Self {
        Self(count)
    }

    /// Get the inner count.
    #[must_use]
    pub const fn count(&self) -> i64 {
        self.0
    }

    /// Returns true if the count is positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns true if the count is zero.
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
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Units {
    fn from(count: i64) -> Self {
        Self(count)
    }
}

impl From<Units> for i64 {
    fn from(units: Units) -> Self {
        units.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_new_and_count() {
        let u = Units::new(50);
        assert_eq!(u.count(), 50);
        assert_eq!(format!("{u}"), "50");
    }

    #[test]
    fn units_zero() {
        assert!(Units::ZERO.is_zero());
        assert!(!Units::ZERO.is_positive());
        assert_eq!(Units::default(), Units::ZERO);
    }

    #[test]
    fn units_checked_add() {
        assert_eq!(
            Units::new(30).checked_add(Units::new(20)),
            Some(Units::new(50))
        );
        assert_eq!(Units::new(i64::MAX).checked_add(Units::new(1)), None);
    }

    #[test]
    fn units_checked_sub() {
        assert_eq!(
            Units::new(50).checked_sub(Units::new(20)),
            Some(Units::new(30))
        );
        assert_eq!(Units::new(i64::MIN).checked_sub(Units::new(1)), None);
    }

    #[test]
    fn units_ordering() {
        assert!(Units::new(30) < Units::new(50));
        assert!(Units::new(50) >= Units::new(50));
    }

    #[test]
    fn units_serde_is_plain_integer() {
        let json = serde_json::to_string(&Units::new(50)).unwrap();
        assert_eq!(json, "50");

        let parsed: Units = serde_json::from_str("50").unwrap();
        assert_eq!(parsed, Units::new(50));
    }
}
