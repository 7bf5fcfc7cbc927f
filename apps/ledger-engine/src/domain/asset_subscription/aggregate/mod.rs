//! Aggregate roots of the asset-subscription ledger.

pub mod asset;
pub mod investor;

pub use asset::{Asset, RegisterAssetCommand};
pub use investor::{CreateInvestorCommand, Investor};
