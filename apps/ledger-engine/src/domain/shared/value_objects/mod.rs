//! Shared Value Objects
//!
//! Immutable domain types used across the ledger.
//! Value objects are compared by value, not identity.

mod identifiers;
mod lock_in;
mod money;
mod timestamp;
mod units;

pub use identifiers::{InvestorId, Isin};
pub use lock_in::{DEFAULT_LOCK_IN_SECONDS, LockInPeriod};
pub use money::Money;
pub use timestamp::Timestamp;
pub use units::Units;
