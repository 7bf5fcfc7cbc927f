//! Subscribe Asset Use Case
//!
//! The two-key mutation at the center of the ledger: a successful
//! subscription debits the investor and reserves asset supply, staged
//! into one write batch so both records change or neither does.

use std::sync::Arc;

use crate::application::dto::SubscriptionRequest;
use crate::application::ports::{EventEmitterPort, LedgerStorePort, WriteBatch};
use crate::application::use_cases::records;
use crate::domain::asset_subscription::events::{LedgerEvent, UnitsSubscribed};
use crate::domain::asset_subscription::services::validation;
use crate::error::EngineError;

/// Use case for subscribing an investor to asset units.
pub struct SubscribeAssetUseCase<S, E>
where
    S: LedgerStorePort,
    E: EventEmitterPort,
{
    store: Arc<S>,
    emitter: Arc<E>,
}

impl<S, E> SubscribeAssetUseCase<S, E>
where
    S: LedgerStorePort,
    E: EventEmitterPort,
{
    /// Create the use case over the given ports.
    pub fn new(store: Arc<S>, emitter: Arc<E>) -> Self {
        Self { store, emitter }
    }

    /// Execute the operation.
    ///
    /// Effects on success: `available_units -= units`,
    /// `balance -= units * price_per_unit`, `holdings[isin] = units`
    /// (replacing any prior position), and the lock-in clock restarts
    /// at the request timestamp.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a malformed request, `NotFound` when either
    /// record is absent, `InsufficientSupply` or `InsufficientBalance`
    /// per the validation rules, plus store failures.
    pub async fn execute(&self, request: SubscriptionRequest) -> Result<(), EngineError> {
        let cmd = request.into_command()?;

        let mut asset = records::load_asset(self.store.as_ref(), &cmd.isin).await?;
        let mut investor = records::load_investor(self.store.as_ref(), &cmd.investor_id).await?;

        let cost = validation::validate_subscription(&asset, &investor, cmd.units)?;

        asset.reserve(cmd.units)?;
        investor.apply_subscription(&cmd.isin, cmd.units, cost, cmd.timestamp)?;

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
            cost = %cost,
            "subscription applied"
        );

        let event = LedgerEvent::UnitsSubscribed(UnitsSubscribed {
            investor_id: cmd.investor_id,
            isin: cmd.isin,
            units: cmd.units,
            cost,
            timestamp: cmd.timestamp,
        });
        records::publish(self.emitter.as_ref(), &event).await;

        Ok(())
    }
}
