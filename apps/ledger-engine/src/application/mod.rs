//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces to the ledger store and the event emitter
//! - **Use Cases**: One per ledger operation
//! - **DTOs**: Request and response shapes at the operation surface

pub mod dto;
pub mod ports;
pub mod use_cases;

pub use dto::*;
pub use ports::*;
pub use use_cases::*;
