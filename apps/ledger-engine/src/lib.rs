// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Ledger Engine - Rust Core Library
//!
//! Deterministic transition engine for a permissioned asset-subscription
//! ledger: investors hold cash balances, assets carry a finite unit
//! supply, and subscriptions and redemptions move value between them
//! under supply, funds, and lock-in constraints.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects, domain events)
//!   - `asset_subscription`: Asset/Investor aggregates, validation, events
//!   - `shared`: identifiers, money, units, timestamps
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`LedgerStorePort`, `EventEmitterPort`)
//!   - `use_cases`: `CreateInvestor`, `RegisterAsset`, `SubscribeAsset`, `RedeemAsset`, `GetPortfolio`
//!   - `dto`: Request and response shapes at the operation surface
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: in-memory ledger store for testing and development
//!   - `messaging`: recording event emitter for test observation
//!
//! # Determinism
//!
//! The surrounding ledger runtime re-executes operations on independent
//! validators and compares results, so every code path here is a pure
//! function of the operation input and the records it reads: no clock is
//! sampled (timestamps are caller-supplied arguments), map serialization
//! is ordered, and all arithmetic is checked.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Engine configuration.
pub mod config;

/// Crate-level error surface.
pub mod error;

/// Console tracing setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::asset_subscription::{
    Asset, AssetRegistered, CreateInvestorCommand, Investor, InvestorCreated, LedgerError,
    LedgerEvent, MIN_REDEMPTION_UNITS, RecordKind, RegisterAssetCommand, UnitsRedeemed,
    UnitsSubscribed,
};
pub use domain::shared::{
    DEFAULT_LOCK_IN_SECONDS, DomainError, InvestorId, Isin, LockInPeriod, Money, Timestamp, Units,
};

// Application re-exports
pub use application::dto::{
    CreateInvestorRequest, PortfolioDto, RedemptionRequest, RegisterAssetRequest,
    SubscriptionRequest,
};
pub use application::ports::{
    EmitError, EventEmitterPort, LedgerStorePort, NoOpEventEmitter, StoreError, WriteBatch,
};
pub use application::use_cases::{
    CreateInvestorUseCase, GetPortfolioUseCase, RedeemAssetUseCase, RegisterAssetUseCase,
    SubscribeAssetUseCase,
};
pub use config::EngineConfig;
pub use error::EngineError;

// Infrastructure re-exports
pub use infrastructure::messaging::RecordingEventEmitter;
pub use infrastructure::persistence::InMemoryLedgerStore;
