//! Account aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{AccountId, DomainError, Money};

/// A ledger account holding a monetary balance.
///
/// Mutations are functional: `debit` and `credit` return a *new*
/// `Account` with the version bumped by one, and never touch the
/// original value. A reader holding a snapshot can therefore never
/// observe a half-updated account, and the version doubles as the
/// optimistic-concurrency token checked by the repository on write.
///
/// Invariant: the balance is never negative (enforced by [`Money`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    balance: Money,
    version: u64,
}

impl Account {
    /// Open an account with an initial balance at version 0.
    #[must_use]
    pub const fn open(id: AccountId, balance: Money) -> Self {
        Self {
            id,
            balance,
            version: 0,
        }
    }

    /// The account identifier.
    #[must_use]
    pub const fn id(&self) -> &AccountId {
        &self.id
    }

    /// The current balance.
    #[must_use]
    pub const fn balance(&self) -> Money {
        self.balance
    }

    /// The optimistic-concurrency version token.
    ///
    /// Increments by exactly 1 on every successful mutation.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Withdraw `amount`, returning the updated account.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientFunds` if the balance cannot cover the
    /// amount; the account is left untouched.
    pub fn debit(&self, amount: Money) -> Result<Self, DomainError> {
        let balance = self.balance.subtract(amount)?;
        Ok(Self {
            id: self.id.clone(),
            balance,
            version: self.version + 1,
        })
    }

    /// Deposit `amount`, returning the updated account.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the resulting balance is not
    /// representable.
    pub fn credit(&self, amount: Money) -> Result<Self, DomainError> {
        let balance = self.balance.add(amount)?;
        Ok(Self {
            id: self.id.clone(),
            balance,
            version: self.version + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(value: rust_decimal::Decimal) -> Money {
        Money::new(value).unwrap()
    }

    fn account(balance: rust_decimal::Decimal) -> Account {
        Account::open(AccountId::new("acct-1"), money(balance))
    }

    #[test]
    fn open_starts_at_version_zero() {
        let acct = account(dec!(100));
        assert_eq!(acct.version(), 0);
        assert_eq!(acct.balance().amount(), dec!(100));
    }

    #[test]
    fn debit_returns_new_account() {
        let acct = account(dec!(100));
        let debited = acct.debit(money(dec!(30))).unwrap();

        assert_eq!(debited.balance().amount(), dec!(70));
        assert_eq!(debited.version(), 1);
        assert_eq!(debited.id(), acct.id());

        // Original untouched.
        assert_eq!(acct.balance().amount(), dec!(100));
        assert_eq!(acct.version(), 0);
    }

    #[test]
    fn debit_insufficient_funds() {
        let acct = account(dec!(10));
        let err = acct.debit(money(dec!(50))).unwrap_err();
        assert!(matches!(err, DomainError::InsufficientFunds { .. }));
        assert_eq!(acct.balance().amount(), dec!(10));
    }

    #[test]
    fn debit_to_exactly_zero() {
        let acct = account(dec!(100));
        let debited = acct.debit(money(dec!(100))).unwrap();
        assert!(debited.balance().is_zero());
    }

    #[test]
    fn credit_returns_new_account() {
        let acct = account(dec!(50));
        let credited = acct.credit(money(dec!(30))).unwrap();

        assert_eq!(credited.balance().amount(), dec!(80));
        assert_eq!(credited.version(), 1);
        assert_eq!(acct.version(), 0);
    }

    #[test]
    fn version_increments_by_one_per_mutation() {
        let acct = account(dec!(100));
        let step1 = acct.debit(money(dec!(10))).unwrap();
        let step2 = step1.credit(money(dec!(5))).unwrap();
        let step3 = step2.debit(money(dec!(20))).unwrap();

        assert_eq!(step1.version(), 1);
        assert_eq!(step2.version(), 2);
        assert_eq!(step3.version(), 3);
    }

    #[test]
    fn account_serde_roundtrip() {
        let acct = account(dec!(100.25));
        let json = serde_json::to_string(&acct).unwrap();
        let parsed: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, acct);
    }
}
