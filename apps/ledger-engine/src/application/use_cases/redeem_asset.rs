//! Redeem Asset Use Case
//!
//! The inverse two-key mutation: a successful redemption returns units
//! to the asset's supply and credits the investor, subject to the
//! minimum size and the lock-in clock.

use std::sync::Arc;

use crate::application::dto::RedemptionRequest;
use crate::application::ports::{EventEmitterPort, LedgerStorePort, WriteBatch};
use crate::application::use_cases::records;
use crate::config::EngineConfig;
use crate::domain::asset_subscription::errors::LedgerError;
use crate::domain::asset_subscription::events::{LedgerEvent, UnitsRedeemed};
use crate::domain::asset_subscription::services::validation;
use crate::error::EngineError;

/// Use case for redeeming an investor's asset units.
pub struct RedeemAssetUseCase<S, E>
where
    S: LedgerStorePort,
    E: EventEmitterPort,
{
    store: Arc<S>,
    emitter: Arc<E>,
    config: EngineConfig,
}

impl<S, E> RedeemAssetUseCase<S, E>
where
    S: LedgerStorePort,
    E: EventEmitterPort,
{
    /// Create the use case over the given ports and configuration.
    pub fn new(store: Arc<S>, emitter: Arc<E>, config: EngineConfig) -> Self {
        Self {
            store,
            emitter,
            config,
        }
    }

    /// Execute the operation.
    ///
    /// Effects on success: `available_units += units`,
    /// `balance += units * price_per_unit`, `holdings[isin] -= units`.
    /// The lock-in comparison uses the caller-supplied timestamp; the
    /// boundary is inclusive.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a malformed request, `NotFound` when either
    /// record is absent, `BelowMinimumRedemption`,
    /// `InsufficientHoldings`, or `LockInActive` per the validation
    /// rules, plus store failures.
    pub async fn execute(&self, request: RedemptionRequest) -> Result<(), EngineError> {
        let cmd = request.into_command()?;

        let mut asset = records::load_asset(self.store.as_ref(), &cmd.isin).await?;
        let mut investor = records::load_investor(self.store.as_ref(), &cmd.investor_id).await?;

        validation::validate_redemption(
            &investor,
            &cmd.isin,
            cmd.units,
            cmd.timestamp,
            self.config.lock_in,
        )?;

        let proceeds = asset
            .price_per_unit()
            .checked_cost(cmd.units)
            .ok_or_else(|| {
                LedgerError::invalid_input("units", "redemption proceeds are not representable")
            })?;

        asset.release(cmd.units)?;
        investor.apply_redemption(&cmd.isin, cmd.units, proceeds)?;

        let mut batch = WriteBatch::new();
        batch.put(asset.isin().as_str(), records::encode_asset(&asset)?);
        batch.put(
            investor.investor_id().as_str(),
            records::encode_investor(&investor)?,
        );
        self.store.commit(batch).await?;

        tracing::info!(
            investor_id = %cmd.investor_id,
            isin = %cmd.isin,
            units = %cmd.units,
            proceeds = %proceeds,
            "redemption applied"
        );

        let event = LedgerEvent::UnitsRedeemed(UnitsRedeemed {
            investor_id: cmd.investor_id,
            isin: cmd.isin,
            units: cmd.units,
            proceeds,
            timestamp: cmd.timestamp,
        });
        records::publish(self.emitter.as_ref(), &event).await;

        Ok(())
    }
}
