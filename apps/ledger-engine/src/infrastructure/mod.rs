//! Infrastructure Layer
//!
//! Adapters (implementations) for the ports defined in the application
//! layer:
//!
//! - `persistence/`: ledger store adapters
//! - `messaging/`: event emitter adapters
//!
//! The distributed-ledger runtime that sequences and replicates
//! transactions provides the production adapters; it is out of scope
//! here and consumed only through the ports.

pub mod messaging;
pub mod persistence;
