//! Domain Layer
//!
//! The innermost layer containing business logic with zero
//! infrastructure dependencies. This layer defines:
//!
//! - **Aggregates**: Consistency boundaries with invariants
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Events**: Records of state transitions
//! - **Domain Services**: Stateless business logic
//!
//! # Bounded Contexts
//!
//! - [`asset_subscription`]: subscription and redemption of asset
//!   units against investor balances

pub mod asset_subscription;
pub mod shared;
