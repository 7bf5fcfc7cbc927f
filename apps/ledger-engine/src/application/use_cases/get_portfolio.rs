//! Get Portfolio Use Case
//!
//! Read-only: loads one investor record and copies its positions into
//! a response.

use std::sync::Arc;

use crate::application::dto::PortfolioDto;
use crate::application::ports::LedgerStorePort;
use crate::application::use_cases::records;
use crate::domain::shared::InvestorId;
use crate::error::EngineError;

/// Use case for reading an investor's portfolio.
pub struct GetPortfolioUseCase<S>
where
    S: LedgerStorePort,
{
    store: Arc<S>,
}

impl<S> GetPortfolioUseCase<S>
where
    S: LedgerStorePort,
{
    /// Create the use case over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Execute the operation.
    ///
    /// # Errors
    ///
    /// `NotFound` when no record exists under `investor_id`, plus
    /// store failures.
    pub async fn execute(&self, investor_id: &str) -> Result<PortfolioDto, EngineError> {
        let investor =
            records::load_investor(self.store.as_ref(), &InvestorId::new(investor_id)).await?;
        Ok(PortfolioDto::from_investor(&investor))
    }
}
