//! Asset Aggregate Root
//!
//! An issued asset and its remaining subscribable supply. Everything
//! but `available_units` is fixed at registration.

use serde::{Deserialize, Serialize};

use crate::domain::asset_subscription::errors::LedgerError;
use crate::domain::asset_subscription::services::validation;
use crate::domain::shared::{DomainError, Isin, Money, Units};

/// Command to register a new asset.
#[derive(Debug, Clone)]
pub struct RegisterAssetCommand {
    /// Primary key of the new asset record.
    pub isin: Isin,
    /// Issuing company name.
    pub company_name: String,
    /// Descriptive asset type.
    pub asset_type: String,
    /// Total issuance, immutable after registration.
    pub total_units: Units,
    /// Price per unit, fixed at registration.
    pub price_per_unit: Money,
    /// Initially subscribable supply.
    pub available_units: Units,
}

/// Asset Aggregate Root.
///
/// Serialized field names are the ledger record format; renaming one
/// is a breaking change for every record already written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    isin: Isin,
    company_name: String,
    asset_type: String,
    total_units: Units,
    price_per_unit: Money,
    available_units: Units,
}

impl Asset {
    /// Register a new asset from a command.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any string field is empty, any numeric
    /// field is non-positive, or the available supply exceeds the total
    /// issuance.
    pub fn register(cmd: RegisterAssetCommand) -> Result<Self, LedgerError> {
        validation::validate_new_asset(&cmd)?;

        Ok(Self {
            isin: cmd.isin,
            company_name: cmd.company_name,
            asset_type: cmd.asset_type,
            total_units: cmd.total_units,
            price_per_unit: cmd.price_per_unit,
            available_units: cmd.available_units,
        })
    }

    /// Get the ISIN.
    #[must_use]
    pub const fn isin(&self) -> &Isin {
        &self.isin
    }

    /// Get the issuing company name.
    #[must_use]
    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    /// Get the asset type.
    #[must_use]
    pub fn asset_type(&self) -> &str {
        &self.asset_type
    }

    /// Get the total issuance.
    #[must_use]
    pub const fn total_units(&self) -> Units {
        self.total_units
    }

    /// Get the per-unit price.
    #[must_use]
    pub const fn price_per_unit(&self) -> Money {
        self.price_per_unit
    }

    /// Get the currently subscribable supply.
    #[must_use]
    pub const fn available_units(&self) -> Units {
        self.available_units
    }

    /// Take `units` out of the available supply.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientSupply` if fewer than `units` are available.
    pub fn reserve(&mut self, units: Units) -> Result<(), LedgerError> {
        if units > self.available_units {
            return Err(LedgerError::InsufficientSupply {
                isin: self.isin.to_string(),
                requested: units,
                available: self.available_units,
            });
        }
        self.available_units = Units::new(self.available_units.count() - units.count());
        Ok(())
    }

    /// Return `units` to the available supply.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the restored supply would
    /// exceed the total issuance; a record this engine wrote can never
    /// reach that state.
    pub fn release(&mut self, units: Units) -> Result<(), DomainError> {
        let restored = self
            .available_units
            .checked_add(units)
            .filter(|restored| *restored <= self.total_units)
            .ok_or_else(|| DomainError::InvariantViolation {
                aggregate: "Asset".to_string(),
                invariant: "available_units <= total_units".to_string(),
                state: format!(
                    "available={}, released={}, total={}",
                    self.available_units, units, self.total_units
                ),
            })?;
        self.available_units = restored;
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
    /// Returns an error if the bytes are not a valid asset record.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
