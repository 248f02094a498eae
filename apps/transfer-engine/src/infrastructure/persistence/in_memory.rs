//! In-memory account repository.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::account::{Account, AccountError, AccountRepository};
use crate::domain::shared::AccountId;

/// In-memory implementation of `AccountRepository`.
///
/// Suitable for testing and single-process deployments. `save` enforces
/// the optimistic version check: the stored version must equal the
/// version the writer read, or the write is rejected.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account (for composition and test setup).
    pub fn insert(&self, account: Account) {
        let mut accounts = self
            .accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        accounts.insert(account.id().clone(), account);
    }

    /// Get the number of accounts in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn get(&self, id: &AccountId) -> Result<Account, AccountError> {
        let accounts = self
            .accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        accounts
            .get(id)
            .cloned()
            .ok_or_else(|| AccountError::NotFound {
                account_id: id.to_string(),
            })
    }

    async fn save(&self, account: &Account, expected_version: u64) -> Result<(), AccountError> {
        let mut accounts = self
            .accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let stored = accounts
            .get(account.id())
            .ok_or_else(|| AccountError::NotFound {
                account_id: account.id().to_string(),
            })?;

        if stored.version() != expected_version {
            return Err(AccountError::VersionConflict {
                account_id: account.id().to_string(),
                expected_version,
                actual_version: stored.version(),
            });
        }

        accounts.insert(account.id().clone(), account.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::Money;
    use rust_decimal_macros::dec;

    fn make_account(id: &str, balance: rust_decimal::Decimal) -> Account {
        Account::open(AccountId::new(id), Money::new(balance).unwrap())
    }

    #[tokio::test]
    async fn insert_and_get() {
        let repo = InMemoryAccountRepository::new();
        let acct = make_account("acct-1", dec!(100));
        repo.insert(acct.clone());

        let loaded = repo.get(acct.id()).await.unwrap();
        assert_eq!(loaded, acct);
    }

    #[tokio::test]
    async fn get_missing_account() {
        let repo = InMemoryAccountRepository::new();
        let err = repo.get(&AccountId::new("nope")).await.unwrap_err();
        assert!(matches!(err, AccountError::NotFound { .. }));
    }

    #[tokio::test]
    async fn save_with_matching_version() {
        let repo = InMemoryAccountRepository::new();
        let acct = make_account("acct-1", dec!(100));
        repo.insert(acct.clone());

        let debited = acct.debit(Money::new(dec!(30)).unwrap()).unwrap();
        repo.save(&debited, acct.version()).await.unwrap();

        let loaded = repo.get(acct.id()).await.unwrap();
        assert_eq!(loaded.balance().amount(), dec!(70));
        assert_eq!(loaded.version(), 1);
    }

    #[tokio::test]
    async fn save_rejects_stale_version() {
        let repo = InMemoryAccountRepository::new();
        let acct = make_account("acct-1", dec!(100));
        repo.insert(acct.clone());

        // First writer wins.
        let first = acct.debit(Money::new(dec!(10)).unwrap()).unwrap();
        repo.save(&first, 0).await.unwrap();

        // Second writer read version 0 and must be rejected.
        let second = acct.debit(Money::new(dec!(20)).unwrap()).unwrap();
        let err = repo.save(&second, 0).await.unwrap_err();
        assert!(matches!(
            err,
            AccountError::VersionConflict {
                expected_version: 0,
                actual_version: 1,
                ..
            }
        ));

        // The store still holds the first write.
        let loaded = repo.get(acct.id()).await.unwrap();
        assert_eq!(loaded.balance().amount(), dec!(90));
    }

    #[tokio::test]
    async fn save_missing_account() {
        let repo = InMemoryAccountRepository::new();
        let acct = make_account("acct-1", dec!(100));

        let err = repo.save(&acct, 0).await.unwrap_err();
        assert!(matches!(err, AccountError::NotFound { .. }));
    }

    #[test]
    fn len_and_is_empty() {
        let repo = InMemoryAccountRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.len(), 0);

        repo.insert(make_account("acct-1", dec!(100)));
        assert!(!repo.is_empty());
        assert_eq!(repo.len(), 1);
    }
}
