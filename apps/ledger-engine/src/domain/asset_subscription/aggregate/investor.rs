//! Investor Aggregate Root
//!
//! An investor's cash balance and per-asset positions. The balance and
//! the two position maps mutate only through subscription and
//! redemption; the id is fixed at creation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::asset_subscription::errors::LedgerError;
use crate::domain::asset_subscription::services::validation;
use crate::domain::shared::{InvestorId, Isin, Money, Timestamp, Units};

/// Command to create a new investor.
#[derive(Debug, Clone)]
pub struct CreateInvestorCommand {
    /// Primary key of the new investor record.
    pub investor_id: InvestorId,
    /// Opening cash balance.
    pub balance: Money,
}

/// Investor Aggregate Root.
///
/// Serialized field names are the ledger record format. The position
/// maps are ordered so the serialized bytes of a record are identical
/// across independent executions of the same input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investor {
    investor_id: InvestorId,
    balance: Money,
    // Absent ISIN implies zero holdings; records written before the
    // first subscription carry no maps at all.
    #[serde(default)]
    holdings: BTreeMap<Isin, Units>,
    #[serde(default)]
    subscription_timestamps: BTreeMap<Isin, Timestamp>,
}

impl Investor {
    /// Open a new investor account with a starting balance.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty id or non-positive balance.
    pub fn open(cmd: CreateInvestorCommand) -> Result<Self, LedgerError> {
        validation::validate_new_investor(&cmd.investor_id, cmd.balance)?;

        Ok(Self {
            investor_id: cmd.investor_id,
            balance: cmd.balance,
            holdings: BTreeMap::new(),
            subscription_timestamps: BTreeMap::new(),
        })
    }

    /// Get the investor id.
    #[must_use]
    pub const fn investor_id(&self) -> &InvestorId {
        &self.investor_id
    }

    /// Get the cash balance.
    #[must_use]
    pub const fn balance(&self) -> Money {
        self.balance
    }

    /// Get all holdings.
    #[must_use]
    pub const fn holdings(&self) -> &BTreeMap<Isin, Units> {
        &self.holdings
    }

    /// Units held for `isin`; an absent entry means zero.
    #[must_use]
    pub fn holdings_of(&self, isin: &Isin) -> Units {
        self.holdings.get(isin).copied().unwrap_or(Units::ZERO)
    }

    /// The most recent subscription instant for `isin`, if any.
    #[must_use]
    pub fn subscription_timestamp(&self, isin: &Isin) -> Option<Timestamp> {
        self.subscription_timestamps.get(isin).copied()
    }

    /// Apply a subscription: debit the cost and record the position.
    ///
    /// A repeat subscription to the same ISIN replaces the recorded
    /// units and restarts the lock-in clock.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientBalance` if the cost exceeds the balance.
    pub fn apply_subscription(
        &mut self,
        isin: &Isin,
        units: Units,
        cost: Money,
        at: Timestamp,
    ) -> Result<(), LedgerError> {
        if cost > self.balance {
            return Err(LedgerError::InsufficientBalance {
                investor_id: self.investor_id.to_string(),
                required: cost,
                available: self.balance,
            });
        }
        self.balance = Money::new(self.balance.amount() - cost.amount());
        self.holdings.insert(isin.clone(), units);
        self.subscription_timestamps.insert(isin.clone(), at);
        Ok(())
    }

    /// Apply a redemption: credit the proceeds and reduce the position.
    ///
    /// A fully redeemed position stays in the holdings map with a zero
    /// count; portfolio reads report it that way.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientHoldings` if fewer than `units` are held,
    /// or `InvalidInput` if the credited balance is not representable.
    pub fn apply_redemption(
        &mut self,
        isin: &Isin,
        units: Units,
        proceeds: Money,
    ) -> Result<(), LedgerError> {
        let held = self.holdings_of(isin);
        if units > held {
            return Err(LedgerError::InsufficientHoldings {
                isin: isin.to_string(),
                requested: units,
                held,
            });
        }
        let credited = self
            .balance
            .checked_add(proceeds)
            .ok_or_else(|| {
                LedgerError::invalid_input("balance", "credited balance is not representable")
            })?;
        self.holdings
            .insert(isin.clone(), Units::new(held.count() - units.count()));
        self.balance = credited;
        Ok(())
    }

    /// Serialize to the ledger record format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Deserialize from the ledger record format.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid investor record.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
