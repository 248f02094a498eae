//! Transfer bounded context.
//!
//! Transfer instructions, outcomes, business rules, the error taxonomy,
//! and the fact record emitted once a transfer completes.

pub mod errors;
pub mod events;
pub mod services;
pub mod value_objects;

pub use errors::TransferError;
pub use events::TransferEvent;
pub use services::TransferPolicy;
pub use value_objects::{TransferInput, TransferResult, TransferStatus};
