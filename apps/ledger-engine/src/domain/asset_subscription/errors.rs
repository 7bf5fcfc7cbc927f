//! Deterministic rejections of ledger operations.

use std::fmt;

use crate::domain::shared::{Money, Timestamp, Units};

/// The kind of ledger record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// An Investor record.
    Investor,
    /// An Asset record.
    Asset,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Investor => write!(f, "investor"),
            Self::Asset => write!(f, "asset"),
        }
    }
}

/// Errors the transition engine returns to callers.
///
/// This is a closed taxonomy: every variant carries the context a
/// caller needs to branch on the failure without parsing message text.
/// All variants are terminal for the current operation; nothing is
/// retried and no partial state is ever left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Malformed or out-of-range operation input.
    InvalidInput {
        /// Field with the invalid value.
        field: String,
        /// Error message.
        message: String,
    },

    /// A record already exists under the requested key.
    AlreadyExists {
        /// Record kind.
        kind: RecordKind,
        /// Requested primary key.
        id: String,
    },

    /// A referenced record is absent from the ledger.
    NotFound {
        /// Record kind.
        kind: RecordKind,
        /// Requested primary key.
        id: String,
    },

    /// Requested more units than the asset has available.
    InsufficientSupply {
        /// Asset key.
        isin: String,
        /// Units requested.
        requested: Units,
        /// Units available.
        available: Units,
    },

    /// Subscription cost exceeds the investor's balance.
    InsufficientBalance {
        /// Investor key.
        investor_id: String,
        /// Cost of the requested subscription.
        required: Money,
        /// Current balance.
        available: Money,
    },

    /// Requested more units than the investor holds.
    InsufficientHoldings {
        /// Asset key.
        isin: String,
        /// Units requested.
        requested: Units,
        /// Units held.
        held: Units,
    },

    /// Redemption below the minimum size.
    BelowMinimumRedemption {
        /// Units requested.
        requested: Units,
        /// Minimum redeemable size.
        minimum: Units,
    },

    /// The lock-in period for this position has not elapsed.
    LockInActive {
        /// Asset key.
        isin: String,
        /// First instant at which redemption is allowed.
        unlocks_at: Timestamp,
        /// Caller-supplied current instant.
        now: Timestamp,
    },
}

impl LedgerError {
    /// Shorthand for an `InvalidInput` error.
    pub(crate) fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::AlreadyExists { kind, id } => {
                write!(f, "{kind} already exists: {id}")
            }
            Self::NotFound { kind, id } => {
                write!(f, "{kind} not found: {id}")
            }
            Self::InsufficientSupply {
                isin,
                requested,
                available,
            } => {
                write!(
                    f,
                    "Insufficient supply of {isin}: requested {requested}, available {available}"
                )
            }
            Self::InsufficientBalance {
                investor_id,
                required,
                available,
            } => {
                write!(
                    f,
                    "Insufficient balance for {investor_id}: required {required}, available {available}"
                )
            }
            Self::InsufficientHoldings {
                isin,
                requested,
                held,
            } => {
                write!(
                    f,
                    "Insufficient holdings of {isin}: requested {requested}, held {held}"
                )
            }
            Self::BelowMinimumRedemption { requested, minimum } => {
                write!(
                    f,
                    "Redemption of {requested} units is below the minimum of {minimum}"
                )
            }
            Self::LockInActive {
                isin,
                unlocks_at,
                now,
            } => {
                write!(f, "{isin} is locked until {unlocks_at} (now: {now})")
            }
        }
    }
}

impl std::error::Error for LedgerError {}
