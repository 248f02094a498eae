//! Execute Transfer Use Case
//!
//! Orchestrates one transfer instruction through lock acquisition,
//! loading, validation, in-memory application, version-checked
//! persistence, and event emission:
//!
//! locks acquired → accounts loaded → policy validated → balances
//! applied → both accounts persisted → locks released → event
//! published → result returned. A failure at any step short-circuits
//! to the caller; the lock guards release on every exit path.

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    IdempotencyRecord, IdempotencyStore, TransferEventPublisher,
};
use crate::application::services::{AccountLockCoordinator, AccountLockSet};
use crate::domain::account::{Account, AccountError, AccountRepository};
use crate::domain::shared::IdempotencyKey;
use crate::domain::transfer::{
    TransferEvent, TransferError, TransferInput, TransferPolicy, TransferResult, TransferStatus,
};

/// Use case for executing a funds transfer between two ledger accounts.
///
/// Safe to share across concurrent requests: transfers touching
/// disjoint accounts proceed in parallel, transfers sharing an account
/// serialize on the coordinator's per-account locks.
pub struct ExecuteTransferUseCase<R, E, S>
where
    R: AccountRepository + 'static,
    E: TransferEventPublisher + 'static,
    S: IdempotencyStore + 'static,
{
    account_repo: Arc<R>,
    event_publisher: Arc<E>,
    idempotency_store: Arc<S>,
    locks: Arc<AccountLockCoordinator>,
    lock_wait: Duration,
}

impl<R, E, S> ExecuteTransferUseCase<R, E, S>
where
    R: AccountRepository + 'static,
    E: TransferEventPublisher + 'static,
    S: IdempotencyStore + 'static,
{
    /// Create a new ExecuteTransferUseCase.
    pub fn new(
        account_repo: Arc<R>,
        event_publisher: Arc<E>,
        idempotency_store: Arc<S>,
        locks: Arc<AccountLockCoordinator>,
        lock_wait: Duration,
    ) -> Self {
        Self {
            account_repo,
            event_publisher,
            idempotency_store,
            locks,
            lock_wait,
        }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] from the failure taxonomy; whatever
    /// the failure, no lock remains held and no partial in-memory
    /// mutation is visible to other transfers.
    pub async fn execute(&self, input: TransferInput) -> Result<TransferResult, TransferError> {
        // Replay check runs before any lock is taken.
        if let Some(key) = input.idempotency_key() {
            if let Some(cached) = self.replay(key, &input).await? {
                return Ok(cached);
            }
        }

        tracing::debug!(
            origin = %input.origin_account_id(),
            destination = %input.destination_account_id(),
            amount = %input.amount(),
            "executing transfer"
        );

        // Both locks are taken in canonical order before anything is
        // read or written.
        let lock_set = self
            .locks
            .acquire(
                &[input.origin_account_id(), input.destination_account_id()],
                self.lock_wait,
            )
            .await?;

        let origin = self.account_repo.get(input.origin_account_id()).await?;
        let destination = self
            .account_repo
            .get(input.destination_account_id())
            .await?;

        TransferPolicy::validate(&input, &origin, &destination)?;

        // Debit first; if it fails the credit is never attempted, so no
        // partial in-memory mutation exists.
        let debited = origin.debit(input.amount())?;
        let credited = destination.credit(input.amount())?;

        self.commit(
            input,
            lock_set,
            origin.version(),
            destination.version(),
            debited,
            credited,
        )
        .await
    }

    /// Persist both accounts, release the locks, publish the event, and
    /// cache the result.
    ///
    /// Runs in its own task so the atomic persist always runs to
    /// completion or failure even if the caller's future is dropped;
    /// cancellation before this point releases the locks via guard
    /// drop with no side effects.
    async fn commit(
        &self,
        input: TransferInput,
        lock_set: AccountLockSet,
        origin_prior_version: u64,
        destination_prior_version: u64,
        debited: Account,
        credited: Account,
    ) -> Result<TransferResult, TransferError> {
        let account_repo = Arc::clone(&self.account_repo);
        let event_publisher = Arc::clone(&self.event_publisher);
        let idempotency_store = Arc::clone(&self.idempotency_store);

        let handle = tokio::spawn(async move {
            let result = Self::persist_and_publish(
                &account_repo,
                &event_publisher,
                &idempotency_store,
                &input,
                lock_set,
                origin_prior_version,
                destination_prior_version,
                debited,
                credited,
            )
            .await;

            match &result {
                Ok(outcome) => tracing::debug!(
                    origin = %input.origin_account_id(),
                    destination = %input.destination_account_id(),
                    status = %outcome.status,
                    "transfer completed"
                ),
                Err(err) => tracing::debug!(
                    origin = %input.origin_account_id(),
                    destination = %input.destination_account_id(),
                    error = %err,
                    "transfer failed"
                ),
            }

            result
        });

        match handle.await {
            Ok(result) => result,
            // The commit task is never aborted, so a join error carries
            // its panic payload.
            Err(err) => std::panic::resume_unwind(err.into_panic()),
        }
    }

    #[allow(clippy::too_many_arguments)]
    async fn persist_and_publish(
        account_repo: &R,
        event_publisher: &E,
        idempotency_store: &S,
        input: &TransferInput,
        lock_set: AccountLockSet,
        origin_prior_version: u64,
        destination_prior_version: u64,
        debited: Account,
        credited: Account,
    ) -> Result<TransferResult, TransferError> {
        account_repo
            .save(&debited, origin_prior_version)
            .await
            .map_err(Self::surface_conflict)?;
        account_repo
            .save(&credited, destination_prior_version)
            .await
            .map_err(Self::surface_conflict)?;

        // Persistence is done; locks release before the publisher is
        // notified.
        drop(lock_set);

        let event = TransferEvent::record(
            input.origin_account_id().clone(),
            input.destination_account_id().clone(),
            input.amount(),
        );
        let status = match event_publisher.publish(event).await {
            Ok(()) => TransferStatus::Completed,
            Err(err) => {
                tracing::warn!(
                    origin = %input.origin_account_id(),
                    destination = %input.destination_account_id(),
                    error = %err,
                    "transfer event publish failed; reporting degraded success"
                );
                TransferStatus::CompletedWithPublishWarning
            }
        };

        let result = TransferResult::new(debited.balance(), credited.balance(), status);

        if let Some(key) = input.idempotency_key() {
            let record = IdempotencyRecord {
                input: input.clone(),
                result: result.clone(),
            };
            if let Err(err) = idempotency_store.record(key.clone(), record).await {
                tracing::warn!(key = %key, error = %err, "failed to cache transfer result");
            }
        }

        Ok(result)
    }

    /// Look up a prior execution under the same key.
    ///
    /// A hit with a matching payload returns the cached result; a hit
    /// with a different payload is a conflict. Store failures degrade
    /// to executing the transfer without replay protection.
    async fn replay(
        &self,
        key: &IdempotencyKey,
        input: &TransferInput,
    ) -> Result<Option<TransferResult>, TransferError> {
        match self.idempotency_store.find(key).await {
            Ok(Some(record)) => {
                if record.input == *input {
                    tracing::debug!(key = %key, "returning cached transfer result");
                    Ok(Some(record.result))
                } else {
                    Err(TransferError::IdempotencyConflict {
                        key: key.to_string(),
                    })
                }
            }
            Ok(None) => Ok(None),
            Err(err) => {
                tracing::warn!(
                    key = %key,
                    error = %err,
                    "idempotency store lookup failed; proceeding without replay protection"
                );
                Ok(None)
            }
        }
    }

    /// A version-check failure under the lock means something bypassed
    /// the coordinator. Surfaced loudly, never retried.
    fn surface_conflict(err: AccountError) -> TransferError {
        if let AccountError::VersionConflict {
            account_id,
            expected_version,
            actual_version,
        } = &err
        {
            tracing::error!(
                account_id = %account_id,
                expected_version,
                actual_version,
                "version check failed while holding the account lock"
            );
        }
        TransferError::from(err)
    }
}
