//! Stateless domain services.

pub mod validation;

pub use validation::MIN_REDEMPTION_UNITS;
