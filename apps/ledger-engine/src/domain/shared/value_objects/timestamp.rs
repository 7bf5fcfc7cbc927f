//! Caller-supplied timestamps.
//!
//! Every timestamp in the engine arrives as an operation argument.
//! The engine never samples a local clock: independent re-executions
//! of the same input must agree on every comparison.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::lock_in::LockInPeriod;

/// A Unix timestamp in whole seconds, supplied by the caller.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a timestamp from Unix seconds.
    #[must_use]
    pub const fn new(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Get the Unix timestamp in seconds.
    #[must_use]
    pub const fn unix_seconds(&self) -> i64 {
        self.0
    }

    /// Returns true if the timestamp is before the Unix epoch.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Build from a chrono datetime, truncated to whole seconds.
    #[must_use]
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp())
    }

    /// Convert to a chrono datetime, if representable.
    #[must_use]
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }

    /// Render as RFC 3339, if representable.
    #[must_use]
    pub fn to_rfc3339(&self) -> Option<String> {
        self.as_datetime().map(|dt| dt.to_rfc3339())
    }

    /// The instant a lock-in starting here stops applying.
    ///
    /// Saturates at `i64::MAX` rather than wrapping.
    #[must_use]
    pub const fn lock_in_expiry(self, lock_in: LockInPeriod) -> Self {
        Self(self.0.saturating_add(lock_in.seconds()))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Timestamp {
    fn from(seconds: i64) -> Self {
        Self(seconds)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}
