//! Account Repository Trait
//!
//! Defines the persistence abstraction for ledger accounts.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::aggregate::Account;
use super::errors::AccountError;
use crate::domain::shared::AccountId;

/// Repository trait for Account persistence.
///
/// This is a domain interface (port) that is implemented by
/// infrastructure adapters (in-memory, database, etc.).
///
/// Writes are optimistic: `save` carries the version the writer read,
/// and the adapter must reject the write if the stored version differs.
/// The version check detects lost updates even if a caller bypasses the
/// in-process lock coordinator.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Load an account by its identifier.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no account exists for the identifier.
    async fn get(&self, id: &AccountId) -> Result<Account, AccountError>;

    /// Persist an updated account, checking the expected prior version.
    ///
    /// # Errors
    ///
    /// Returns `VersionConflict` if the stored version does not equal
    /// `expected_version`, or `NotFound` if the account is missing.
    async fn save(&self, account: &Account, expected_version: u64) -> Result<(), AccountError>;
}
