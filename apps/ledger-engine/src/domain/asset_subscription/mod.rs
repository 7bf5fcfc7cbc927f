//! Asset Subscription Bounded Context
//!
//! The business logic of the subscription ledger: investors hold cash
//! balances, assets carry a finite unit supply, and subscriptions and
//! redemptions move value between them under supply, funds, and
//! lock-in constraints.
//!
//! # Key Concepts
//!
//! - **Asset / Investor aggregates**: the two record types the ledger
//!   store owns; every mutation touches exactly one of each
//! - **Validation service**: pure precondition checks, run before any
//!   write is staged
//! - **Domain events**: one per successful mutation, published for
//!   external subscribers

pub mod aggregate;
pub mod errors;
pub mod events;
pub mod services;

pub use aggregate::{Asset, CreateInvestorCommand, Investor, RegisterAssetCommand};
pub use errors::{LedgerError, RecordKind};
pub use events::{
    AssetRegistered, InvestorCreated, LedgerEvent, UnitsRedeemed, UnitsSubscribed,
};
pub use services::MIN_REDEMPTION_UNITS;
