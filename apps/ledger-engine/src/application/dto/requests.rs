//! Request payloads for the operation surface.
//!
//! These are the shapes the invoking runtime hands the engine. Each
//! converts into a parsed command; an unparsable payload or an
//! out-of-range field is an `InvalidInput` rejection before anything
//! is read from the store.

use serde::{Deserialize, Serialize};

use crate::domain::asset_subscription::aggregate::{CreateInvestorCommand, RegisterAssetCommand};
use crate::domain::asset_subscription::errors::LedgerError;
use crate::domain::shared::{InvestorId, Isin, Money, Timestamp, Units};

fn malformed(source: &serde_json::Error) -> LedgerError {
    LedgerError::invalid_input("request", source.to_string())
}

fn parse_position_args(
    investor_id: String,
    isin: String,
    units: i64,
    timestamp: i64,
) -> Result<(InvestorId, Isin, Units, Timestamp), LedgerError> {
    let investor_id = InvestorId::new(investor_id);
    if investor_id.is_empty() {
        return Err(LedgerError::invalid_input("investor_id", "must not be empty"));
    }
    let isin = Isin::new(isin);
    if isin.is_empty() {
        return Err(LedgerError::invalid_input("isin", "must not be empty"));
    }
    if units <= 0 {
        return Err(LedgerError::invalid_input("units", "must be positive"));
    }
    if timestamp < 0 {
        return Err(LedgerError::invalid_input("timestamp", "must not be negative"));
    }
    Ok((investor_id, isin, Units::new(units), Timestamp::new(timestamp)))
}

/// Payload for the CreateUser operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInvestorRequest {
    /// Primary key of the new investor record.
    pub investor_id: String,
    /// Opening cash balance, integral currency units.
    pub balance: i64,
}

impl CreateInvestorRequest {
    /// Parse from a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unparsable payload.
    pub fn from_json(bytes: &[u8]) -> Result<Self, LedgerError> {
        serde_json::from_slice(bytes).map_err(|e| malformed(&e))
    }

    /// Convert into the domain command. Field validation happens when
    /// the record is opened.
    #[must_use]
    pub fn into_command(self) -> CreateInvestorCommand {
        CreateInvestorCommand {
            investor_id: InvestorId::new(self.investor_id),
            balance: Money::new(self.balance),
        }
    }
}

/// Payload for the RegisterAsset operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterAssetRequest {
    /// Primary key of the new asset record.
    pub isin: String,
    /// Issuing company name.
    pub company_name: String,
    /// Descriptive asset type.
    pub asset_type: String,
    /// Total issuance.
    pub total_units: i64,
    /// Price per unit, integral currency units.
    pub price_per_unit: i64,
    /// Initially subscribable supply.
    pub available_units: i64,
}

impl RegisterAssetRequest {
    /// Parse from a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unparsable payload.
    pub fn from_json(bytes: &[u8]) -> Result<Self, LedgerError> {
        serde_json::from_slice(bytes).map_err(|e| malformed(&e))
    }

    /// Convert into the domain command. Field validation happens when
    /// the record is registered.
    #[must_use]
    pub fn into_command(self) -> RegisterAssetCommand {
        RegisterAssetCommand {
            isin: Isin::new(self.isin),
            company_name: self.company_name,
            asset_type: self.asset_type,
            total_units: Units::new(self.total_units),
            price_per_unit: Money::new(self.price_per_unit),
            available_units: Units::new(self.available_units),
        }
    }
}

/// Parsed arguments of a subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionCommand {
    /// Subscribing investor.
    pub investor_id: InvestorId,
    /// Asset to subscribe to.
    pub isin: Isin,
    /// Units requested.
    pub units: Units,
    /// Caller-supplied subscription instant.
    pub timestamp: Timestamp,
}

/// Payload for the SubscribeAsset operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    /// Subscribing investor.
    pub investor_id: String,
    /// Asset to subscribe to.
    pub isin: String,
    /// Units requested.
    pub units: i64,
    /// Caller-supplied subscription instant, Unix seconds.
    pub timestamp: i64,
}

impl SubscriptionRequest {
    /// Parse from a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unparsable payload.
    pub fn from_json(bytes: &[u8]) -> Result<Self, LedgerError> {
        serde_json::from_slice(bytes).map_err(|e| malformed(&e))
    }

    /// Convert into a parsed command.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for empty keys, non-positive units, or a
    /// negative timestamp.
    pub fn into_command(self) -> Result<SubscriptionCommand, LedgerError> {
        let (investor_id, isin, units, timestamp) =
            parse_position_args(self.investor_id, self.isin, self.units, self.timestamp)?;
        Ok(SubscriptionCommand {
            investor_id,
            isin,
            units,
            timestamp,
        })
    }
}

/// Parsed arguments of a redemption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedemptionCommand {
    /// Redeeming investor.
    pub investor_id: InvestorId,
    /// Asset to redeem from.
    pub isin: Isin,
    /// Units to return.
    pub units: Units,
    /// Caller-supplied redemption instant.
    pub timestamp: Timestamp,
}

/// Payload for the RedeemAsset operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionRequest {
    /// Redeeming investor.
    pub investor_id: String,
    /// Asset to redeem from.
    pub isin: String,
    /// Units to return.
    pub units: i64,
    /// Caller-supplied redemption instant, Unix seconds.
    pub timestamp: i64,
}

impl RedemptionRequest {
    /// Parse from a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unparsable payload.
    pub fn from_json(bytes: &[u8]) -> Result<Self, LedgerError> {
        serde_json::from_slice(bytes).map_err(|e| malformed(&e))
    }

    /// Convert into a parsed command.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for empty keys, non-positive units, or a
    /// negative timestamp.
    pub fn into_command(self) -> Result<RedemptionCommand, LedgerError> {
        let (investor_id, isin, units, timestamp) =
            parse_position_args(self.investor_id, self.isin, self.units, self.timestamp)?;
        Ok(RedemptionCommand {
            investor_id,
            isin,
            units,
            timestamp,
        })
    }
}
