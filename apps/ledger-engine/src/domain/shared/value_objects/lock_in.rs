//! Lock-in period value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default lock-in, in seconds: 7 days.
pub const DEFAULT_LOCK_IN_SECONDS: i64 = 604_800;

/// Duration after a subscription during which redemption of that
/// asset by that investor is disallowed.
///
/// Process-wide; there is no per-asset override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockInPeriod(i64);

impl LockInPeriod {
    /// Create a lock-in period from whole seconds.
    #[must_use]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Create a lock-in period from whole days.
    #[must_use]
    pub fn from_days(days: i64) -> Self {
        Self(chrono::Duration::days(days).num_seconds())
    }

    /// Get the period in seconds.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.0
    }
}

impl Default for LockInPeriod {
    fn default() -> Self {
        Self(DEFAULT_LOCK_IN_SECONDS)
    }
}

impl fmt::Display for LockInPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
