//! Engine configuration.

use crate::domain::shared::{DomainError, LockInPeriod};

/// Configuration injected into the transition engine at construction.
///
/// The lock-in period is process-wide with no per-asset override; it
/// is a constructor argument rather than a module global so tests can
/// vary it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Lock-in applied to every subscription.
    pub lock_in: LockInPeriod,
}

impl EngineConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock-in period is negative.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.lock_in.seconds() < 0 {
            return Err(DomainError::InvalidValue {
                field: "lock_in".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        Ok(())
    }
}
