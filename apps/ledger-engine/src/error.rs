//! Crate-level error surface.

use thiserror::Error;

use crate::application::ports::StoreError;
use crate::domain::asset_subscription::errors::LedgerError;
use crate::domain::shared::DomainError;

/// Any failure a use case can return.
///
/// `Rejected` is the deterministic business taxonomy every replica
/// agrees on; `Store` covers infrastructure failures at the ledger
/// boundary; `Invariant` marks stored state this engine could not have
/// produced. All three are terminal for the current operation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Deterministic rejection of the operation.
    #[error(transparent)]
    Rejected(#[from] LedgerError),

    /// Ledger store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Aggregate invariant violated by stored state.
    #[error(transparent)]
    Invariant(#[from] DomainError),
}

impl EngineError {
    /// The business rejection, if this is one.
    #[must_use]
    pub const fn as_rejection(&self) -> Option<&LedgerError> {
        match self {
            Self::Rejected(err) => Some(err),
            Self::Store(_) | Self::Invariant(_) => None,
        }
    }
}
