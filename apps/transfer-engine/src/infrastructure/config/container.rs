//! Dependency Injection Container
//!
//! Manages creation and wiring of all application components. The
//! repository, publisher, and idempotency store are passed in
//! explicitly at composition time; the core keeps no globals.

use std::sync::Arc;

use crate::application::ports::{IdempotencyStore, TransferEventPublisher};
use crate::application::services::AccountLockCoordinator;
use crate::application::use_cases::ExecuteTransferUseCase;
use crate::config::TransferSettings;
use crate::domain::account::AccountRepository;

/// Dependency injection container.
///
/// Holds all wired dependencies for the transfer service. Every use
/// case created from one container shares the same lock coordinator, so
/// all transfers in the process serialize through one set of account
/// locks.
pub struct Container<R, E, S>
where
    R: AccountRepository + 'static,
    E: TransferEventPublisher + 'static,
    S: IdempotencyStore + 'static,
{
    account_repo: Arc<R>,
    event_publisher: Arc<E>,
    idempotency_store: Arc<S>,
    locks: Arc<AccountLockCoordinator>,
    settings: TransferSettings,
}

impl<R, E, S> Container<R, E, S>
where
    R: AccountRepository + 'static,
    E: TransferEventPublisher + 'static,
    S: IdempotencyStore + 'static,
{
    /// Create a new container with all dependencies.
    pub fn new(
        account_repo: Arc<R>,
        event_publisher: Arc<E>,
        idempotency_store: Arc<S>,
        settings: TransferSettings,
    ) -> Self {
        Self {
            account_repo,
            event_publisher,
            idempotency_store,
            locks: Arc::new(AccountLockCoordinator::new()),
            settings,
        }
    }

    /// Get the account repository.
    pub fn account_repo(&self) -> Arc<R> {
        Arc::clone(&self.account_repo)
    }

    /// Get the event publisher port.
    pub fn event_publisher(&self) -> Arc<E> {
        Arc::clone(&self.event_publisher)
    }

    /// Get the idempotency store port.
    pub fn idempotency_store(&self) -> Arc<S> {
        Arc::clone(&self.idempotency_store)
    }

    /// Get the shared lock coordinator.
    pub fn locks(&self) -> Arc<AccountLockCoordinator> {
        Arc::clone(&self.locks)
    }

    /// Get the transfer settings.
    pub const fn settings(&self) -> &TransferSettings {
        &self.settings
    }

    /// Create an `ExecuteTransferUseCase`.
    pub fn execute_transfer_use_case(&self) -> ExecuteTransferUseCase<R, E, S> {
        ExecuteTransferUseCase::new(
            Arc::clone(&self.account_repo),
            Arc::clone(&self.event_publisher),
            Arc::clone(&self.idempotency_store),
            Arc::clone(&self.locks),
            self.settings.lock_wait(),
        )
    }
}
