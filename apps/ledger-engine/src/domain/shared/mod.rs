//! Shared Domain Types
//!
//! Value objects and errors shared across the ledger core.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::{
    DEFAULT_LOCK_IN_SECONDS, InvestorId, Isin, LockInPeriod, Money, Timestamp, Units,
};
