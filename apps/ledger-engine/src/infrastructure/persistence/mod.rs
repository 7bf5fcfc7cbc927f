//! Persistence Adapters
//!
//! Implementations of the ledger store port. The production store is
//! the surrounding ledger runtime's world state; the adapter here is
//! the in-memory stand-in used for testing and development.

pub mod in_memory;

pub use in_memory::InMemoryLedgerStore;
