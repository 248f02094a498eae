//! Event Publisher Port (Driven Port)
//!
//! Interface for handing completed-transfer facts to external systems.

use async_trait::async_trait;

use crate::domain::transfer::TransferEvent;

/// Event publishing error.
///
/// Non-fatal for the transfer itself: by the time publishing runs, the
/// funds movement is already durable, so a failure here downgrades the
/// outcome instead of rolling anything back.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EventPublishError {
    /// Connection error.
    #[error("Event publish connection error: {message}")]
    ConnectionError {
        /// Error detail.
        message: String,
    },

    /// Serialization error.
    #[error("Event serialization error: {message}")]
    SerializationError {
        /// Error detail.
        message: String,
    },

    /// Publishing failed.
    #[error("Event publish failed: {message}")]
    PublishFailed {
        /// Error detail.
        message: String,
    },
}

/// Port for publishing transfer events.
#[async_trait]
pub trait TransferEventPublisher: Send + Sync {
    /// Publish a transfer event.
    async fn publish(&self, event: TransferEvent) -> Result<(), EventPublishError>;
}

/// No-op event publisher for testing and wiring defaults.
#[derive(Debug, Clone, Default)]
pub struct NoOpEventPublisher;

#[async_trait]
impl TransferEventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: TransferEvent) -> Result<(), EventPublishError> {
        Ok(())
    }
}
