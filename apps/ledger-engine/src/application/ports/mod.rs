//! Application Ports (Driven)
//!
//! Ports define interfaces to the external collaborators this core
//! consumes: the versioned key-value store that owns all records, and
//! the emitter that publishes domain events. Adapters live in the
//! infrastructure layer.

mod event_emitter_port;
mod ledger_store_port;

pub use event_emitter_port::{EmitError, EventEmitterPort, NoOpEventEmitter};
pub use ledger_store_port::{LedgerStorePort, StoreError, WriteBatch};
