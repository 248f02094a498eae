//! Per-account lock coordination.
//!
//! Serializes concurrent transfers that touch overlapping accounts.
//! Locks are always acquired in ascending `AccountId` order, so every
//! transfer that needs multiple locks requests them in the same global
//! order and no wait-for cycle can form: two transfers referencing the
//! same pair of accounts in opposite directions cannot deadlock.
//!
//! The coordinator is an in-process guard that keeps read-modify-write
//! cycles from racing; it complements, and never replaces, the
//! repository's version-checked writes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tokio::time::{Instant, timeout_at};

use crate::domain::shared::AccountId;
use crate::domain::transfer::TransferError;

/// Coordinates exclusive access to accounts across concurrent transfers.
///
/// One async mutex is kept per account id; acquisition suspends the
/// calling task until the lock is free (no spinning). tokio's FIFO
/// mutex queue keeps waiting transfers from being postponed
/// indefinitely.
#[derive(Debug, Default)]
pub struct AccountLockCoordinator {
    locks: Mutex<HashMap<AccountId, Arc<AsyncMutex<()>>>>,
}

impl AccountLockCoordinator {
    /// Create a new coordinator with no locks held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire locks for the given accounts, in canonical order, within
    /// `max_wait` total.
    ///
    /// Duplicate ids collapse to a single lock, so a set touching one
    /// account acquires exactly one lock. The returned guard set
    /// releases every lock when dropped, on every exit path.
    ///
    /// # Errors
    ///
    /// Returns `LockTimeout` if the deadline expires while waiting;
    /// locks acquired before the timeout are released and nothing has
    /// been mutated.
    pub async fn acquire(
        &self,
        ids: &[&AccountId],
        max_wait: Duration,
    ) -> Result<AccountLockSet, TransferError> {
        let mut ordered: Vec<&AccountId> = ids.to_vec();
        ordered.sort();
        ordered.dedup();

        let deadline = Instant::now() + max_wait;
        let mut guards = Vec::with_capacity(ordered.len());
        for id in ordered {
            let handle = self.handle(id);
            match timeout_at(deadline, handle.lock_owned()).await {
                Ok(guard) => guards.push(guard),
                Err(_) => {
                    // Earlier guards drop here, releasing their locks.
                    return Err(TransferError::LockTimeout {
                        account_id: id.to_string(),
                        waited_ms: u64::try_from(max_wait.as_millis()).unwrap_or(u64::MAX),
                    });
                }
            }
        }

        Ok(AccountLockSet { guards })
    }

    /// Get or create the lock handle for an account.
    ///
    /// Entries live for the process lifetime; account cardinality is
    /// bounded by the ledger.
    fn handle(&self, id: &AccountId) -> Arc<AsyncMutex<()>> {
        let mut locks = self
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            locks
                .entry(id.clone())
                .or_insert_with(|| Arc::new(AsyncMutex::new(()))),
        )
    }
}

/// RAII guard over the locks held for one transfer.
///
/// Dropping the set releases every lock, which is what guarantees
/// release on success, error, panic, and cancellation alike.
#[derive(Debug)]
pub struct AccountLockSet {
    guards: Vec<OwnedMutexGuard<()>>,
}

impl AccountLockSet {
    /// Number of locks held.
    #[must_use]
    pub fn held(&self) -> usize {
        self.guards.len()
    }
}
