//! Register Asset Use Case

use std::sync::Arc;

use crate::application::dto::RegisterAssetRequest;
use crate::application::ports::{EventEmitterPort, LedgerStorePort, WriteBatch};
use crate::application::use_cases::records;
use crate::domain::asset_subscription::aggregate::Asset;
use crate::domain::asset_subscription::errors::RecordKind;
use crate::domain::asset_subscription::events::{AssetRegistered, LedgerEvent};
use crate::error::EngineError;

/// Use case for registering a new asset on the ledger.
pub struct RegisterAssetUseCase<S, E>
where
    S: LedgerStorePort,
    E: EventEmitterPort,
{
    store: Arc<S>,
    emitter: Arc<E>,
}

impl<S, E> RegisterAssetUseCase<S, E>
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
    /// Create-if-absent: an existing record under the same ISIN fails
    /// with `AlreadyExists` and nothing is written.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for empty or non-positive fields,
    /// `AlreadyExists` for a duplicate ISIN, plus store failures.
    pub async fn execute(&self, request: RegisterAssetRequest) -> Result<(), EngineError> {
        let asset = Asset::register(request.into_command())?;

        records::ensure_absent(self.store.as_ref(), RecordKind::Asset, asset.isin().as_str())
            .await?;

        let mut batch = WriteBatch::new();
        batch.put(asset.isin().as_str(), records::encode_asset(&asset)?);
        self.store.commit(batch).await?;

        tracing::info!(
            isin = %asset.isin(),
            total_units = %asset.total_units(),
            "asset registered"
        );

        let event = LedgerEvent::AssetRegistered(AssetRegistered { asset });
        records::publish(self.emitter.as_ref(), &event).await;

        Ok(())
    }
}
