//! Console tracing setup.
//!
//! The engine records structured events; installing a subscriber is
//! the host process's concern. `RUST_LOG` controls the filter.

use tracing_subscriber::EnvFilter;

/// Initialize console tracing.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();
}
