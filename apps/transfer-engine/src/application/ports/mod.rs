//! Application Ports (Driven)
//!
//! Ports define interfaces for the external collaborators the transfer
//! flow depends on. Adapters implement them in the infrastructure layer
//! (or ship beside the port for in-memory defaults).

mod event_publisher_port;
mod idempotency_store_port;

pub use event_publisher_port::{EventPublishError, NoOpEventPublisher, TransferEventPublisher};
pub use idempotency_store_port::{
    IdempotencyRecord, IdempotencyStore, IdempotencyStoreError, InMemoryIdempotencyStore,
};
