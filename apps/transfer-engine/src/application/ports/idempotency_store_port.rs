//! Idempotency Store Port (Driven Port)
//!
//! Interface for remembering completed transfer results per
//! caller-supplied idempotency key, so a retried request is answered
//! from the cache instead of re-executed.

use async_trait::async_trait;

use crate::domain::shared::IdempotencyKey;
use crate::domain::transfer::{TransferInput, TransferResult};

/// Idempotency store error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IdempotencyStoreError {
    /// The backing store failed.
    #[error("Idempotency store error: {message}")]
    Backend {
        /// Error detail.
        message: String,
    },
}

/// What the store remembers per key: the submitted input alongside the
/// result, so a replay with a different payload can be detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdempotencyRecord {
    /// The input the key was first used with.
    pub input: TransferInput,
    /// The cached result.
    pub result: TransferResult,
}

/// Port for idempotency-key storage.
#[async_trait]
pub trait IdempotencyStore: Send + Sync {
    /// Look up the record for a key.
    async fn find(
        &self,
        key: &IdempotencyKey,
    ) -> Result<Option<IdempotencyRecord>, IdempotencyStoreError>;

    /// Remember the record for a key.
    async fn record(
        &self,
        key: IdempotencyKey,
        record: IdempotencyRecord,
    ) -> Result<(), IdempotencyStoreError>;
}

/// In-memory implementation for testing and single-process deployments.
#[derive(Debug, Default)]
pub struct InMemoryIdempotencyStore {
    records: std::sync::RwLock<std::collections::HashMap<IdempotencyKey, IdempotencyRecord>>,
}

impl InMemoryIdempotencyStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdempotencyStore for InMemoryIdempotencyStore {
    async fn find(
        &self,
        key: &IdempotencyKey,
    ) -> Result<Option<IdempotencyRecord>, IdempotencyStoreError> {
        let records = self
            .records
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(records.get(key).cloned())
    }

    async fn record(
        &self,
        key: IdempotencyKey,
        record: IdempotencyRecord,
    ) -> Result<(), IdempotencyStoreError> {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        records.insert(key, record);
        Ok(())
    }
}
