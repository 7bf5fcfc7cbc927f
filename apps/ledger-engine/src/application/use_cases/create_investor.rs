//! Create Investor Use Case (the `CreateUser` operation)

use std::sync::Arc;

use crate::application::dto::CreateInvestorRequest;
use crate::application::ports::{EventEmitterPort, LedgerStorePort, WriteBatch};
use crate::application::use_cases::records;
use crate::domain::asset_subscription::aggregate::Investor;
use crate::domain::asset_subscription::errors::RecordKind;
use crate::domain::asset_subscription::events::{InvestorCreated, LedgerEvent};
use crate::error::EngineError;

/// Use case for adding an investor record to the ledger.
pub struct CreateInvestorUseCase<S, E>
where
    S: LedgerStorePort,
    E: EventEmitterPort,
{
    store: Arc<S>,
    emitter: Arc<E>,
}

impl<S, E> CreateInvestorUseCase<S, E>
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
    /// Create-if-absent: an existing record under the same id fails
    /// with `AlreadyExists` and nothing is written.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an empty id or non-positive balance,
    /// `AlreadyExists` for a duplicate id, plus store failures.
    pub async fn execute(&self, request: CreateInvestorRequest) -> Result<(), EngineError> {
        let investor = Investor::open(request.into_command())?;

        records::ensure_absent(
            self.store.as_ref(),
            RecordKind::Investor,
            investor.investor_id().as_str(),
        )
        .await?;

        let mut batch = WriteBatch::new();
        batch.put(
            investor.investor_id().as_str(),
            records::encode_investor(&investor)?,
        );
        self.store.commit(batch).await?;

        tracing::info!(investor_id = %investor.investor_id(), "investor record created");

        let event = LedgerEvent::InvestorCreated(InvestorCreated { investor });
        records::publish(self.emitter.as_ref(), &event).await;

        Ok(())
    }
}
