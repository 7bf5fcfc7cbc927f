//! Event Emitter Port (Driven Port)
//!
//! Interface for publishing domain events to external subscribers.

use async_trait::async_trait;

/// Event emission error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EmitError {
    /// Emission failed.
    #[error("event emission failed: {message}")]
    Failed {
        /// Failure description.
        message: String,
    },
}

/// Port for publishing domain events.
///
/// Called at most once per successful mutating operation, after the
/// state writes are committed, never on failure. Emission is
/// fire-and-forget from the engine's perspective.
#[async_trait]
pub trait EventEmitterPort: Send + Sync {
    /// Publish one event under its wire name.
    async fn emit(&self, name: &str, payload: Vec<u8>) -> Result<(), EmitError>;
}

/// No-op event emitter for testing.
#[derive(Debug, Clone, Default)]
pub struct NoOpEventEmitter;

#[async_trait]
impl EventEmitterPort for NoOpEventEmitter {
    async fn emit(&self, _name: &str, _payload: Vec<u8>) -> Result<(), EmitError> {
        Ok(())
    }
}
