//! Domain events published after successful mutations.
//!
//! One event is emitted per successful mutating operation, after its
//! writes are committed, never on failure.

use serde::{Deserialize, Serialize};

use crate::domain::asset_subscription::aggregate::{Asset, Investor};
use crate::domain::shared::{InvestorId, Isin, Money, Timestamp, Units};

/// All events this ledger publishes.
///
/// Wire names and payload shapes are consumed by external subscribers;
/// both are a compatibility surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerEvent {
    /// A new investor record was persisted.
    InvestorCreated(InvestorCreated),
    /// A new asset record was persisted.
    AssetRegistered(AssetRegistered),
    /// An investor subscribed to asset units.
    UnitsSubscribed(UnitsSubscribed),
    /// An investor redeemed asset units.
    UnitsRedeemed(UnitsRedeemed),
}

impl LedgerEvent {
    /// The event name used on the wire.
    #[must_use]
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::InvestorCreated(_) => "CreateUser",
            Self::AssetRegistered(_) => "RegisterAsset",
            Self::UnitsSubscribed(_) => "SubscriptionEvent",
            Self::UnitsRedeemed(_) => "RedemptionEvent",
        }
    }

    /// The payload published with the event.
    ///
    /// Creation events carry the serialized record; subscription and
    /// redemption events carry a one-line summary.
    ///
    /// # Errors
    ///
    /// Returns an error if record encoding fails.
    pub fn wire_payload(&self) -> Result<Vec<u8>, serde_json::Error> {
        match self {
            Self::InvestorCreated(e) => serde_json::to_vec(&e.investor),
            Self::AssetRegistered(e) => serde_json::to_vec(&e.asset),
            Self::UnitsSubscribed(e) => Ok(e.summary().into_bytes()),
            Self::UnitsRedeemed(e) => Ok(e.summary().into_bytes()),
        }
    }
}

/// Event: a new investor record was persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestorCreated {
    /// The record as written.
    pub investor: Investor,
}

/// Event: a new asset record was persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRegistered {
    /// The record as written.
    pub asset: Asset,
}

/// Event: an investor subscribed to asset units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitsSubscribed {
    /// Subscribing investor.
    pub investor_id: InvestorId,
    /// Subscribed asset.
    pub isin: Isin,
    /// Units taken.
    pub units: Units,
    /// Amount debited.
    pub cost: Money,
    /// Caller-supplied subscription instant.
    pub timestamp: Timestamp,
}

impl UnitsSubscribed {
    /// One-line summary published as the event payload.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "investor {} subscribed {} units of {} for {}",
            self.investor_id, self.units, self.isin, self.cost
        )
    }
}

/// Event: an investor redeemed asset units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitsRedeemed {
    /// Redeeming investor.
    pub investor_id: InvestorId,
    /// Redeemed asset.
    pub isin: Isin,
    /// Units returned.
    pub units: Units,
    /// Amount credited.
    pub proceeds: Money,
    /// Caller-supplied redemption instant.
    pub timestamp: Timestamp,
}

impl UnitsRedeemed {
    /// One-line summary published as the event payload.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "investor {} redeemed {} units of {} for {}",
            self.investor_id, self.units, self.isin, self.proceeds
        )
    }
}
