//! Shared record load/encode helpers for the use cases.

use crate::application::ports::{EventEmitterPort, LedgerStorePort, StoreError};
use crate::domain::asset_subscription::aggregate::{Asset, Investor};
use crate::domain::asset_subscription::errors::{LedgerError, RecordKind};
use crate::domain::asset_subscription::events::LedgerEvent;
use crate::domain::shared::{InvestorId, Isin};
use crate::error::EngineError;

/// Load an asset record or fail with `NotFound`.
pub(super) async fn load_asset<S: LedgerStorePort>(
    store: &S,
    isin: &Isin,
) -> Result<Asset, EngineError> {
    let bytes = store
        .get(isin.as_str())
        .await?
        .ok_or_else(|| LedgerError::NotFound {
            kind: RecordKind::Asset,
            id: isin.to_string(),
        })?;
    Asset::from_bytes(&bytes).map_err(|e| StoreError::corrupt_record(isin.as_str(), &e).into())
}

/// Load an investor record or fail with `NotFound`.
pub(super) async fn load_investor<S: LedgerStorePort>(
    store: &S,
    investor_id: &InvestorId,
) -> Result<Investor, EngineError> {
    let bytes = store
        .get(investor_id.as_str())
        .await?
        .ok_or_else(|| LedgerError::NotFound {
            kind: RecordKind::Investor,
            id: investor_id.to_string(),
        })?;
    Investor::from_bytes(&bytes)
        .map_err(|e| StoreError::corrupt_record(investor_id.as_str(), &e).into())
}

/// Fail with `AlreadyExists` if a record is present under `key`.
pub(super) async fn ensure_absent<S: LedgerStorePort>(
    store: &S,
    kind: RecordKind,
    key: &str,
) -> Result<(), EngineError> {
    if store.get(key).await?.is_some() {
        return Err(LedgerError::AlreadyExists {
            kind,
            id: key.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Encode an asset record for staging.
pub(super) fn encode_asset(asset: &Asset) -> Result<Vec<u8>, EngineError> {
    asset
        .to_bytes()
        .map_err(|e| StoreError::corrupt_record(asset.isin().as_str(), &e).into())
}

/// Encode an investor record for staging.
pub(super) fn encode_investor(investor: &Investor) -> Result<Vec<u8>, EngineError> {
    investor
        .to_bytes()
        .map_err(|e| StoreError::corrupt_record(investor.investor_id().as_str(), &e).into())
}

/// Publish an event, logging instead of failing: the state writes are
/// already committed and emission is fire-and-forget.
pub(super) async fn publish<E: EventEmitterPort>(emitter: &E, event: &LedgerEvent) {
    match event.wire_payload() {
        Ok(payload) => {
            if let Err(e) = emitter.emit(event.wire_name(), payload).await {
                tracing::error!(event = event.wire_name(), error = %e, "failed to emit ledger event");
            }
        }
        Err(e) => {
            tracing::error!(event = event.wire_name(), error = %e, "failed to encode event payload");
        }
    }
}
