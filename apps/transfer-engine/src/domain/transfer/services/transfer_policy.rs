//! Transfer business-rule evaluation.

use crate::domain::account::Account;
use crate::domain::shared::AccountId;
use crate::domain::transfer::errors::TransferError;
use crate::domain::transfer::value_objects::TransferInput;

/// Pure validation of a transfer instruction against the loaded
/// accounts.
///
/// Checks run in a fixed order so error reporting is deterministic —
/// the first failing check wins:
///
/// 1. origin and destination are distinct accounts
/// 2. the amount is strictly positive
/// 3. the loaded accounts match the instruction's identifiers
/// 4. the origin balance covers the amount
///
/// Checks 1 and 2 repeat the [`TransferInput`] constructor's shape
/// validation so the policy stands alone as the single authority on
/// transfer rules, whatever path an input arrived by.
pub struct TransferPolicy;

impl TransferPolicy {
    /// Evaluate the transfer rules.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule as a [`TransferError`].
    pub fn validate(
        input: &TransferInput,
        origin: &Account,
        destination: &Account,
    ) -> Result<(), TransferError> {
        if input.origin_account_id() == input.destination_account_id() {
            return Err(TransferError::SameAccount {
                account_id: input.origin_account_id().to_string(),
            });
        }

        if !input.amount().is_positive() {
            return Err(TransferError::InvalidAmount {
                message: format!("amount must be positive: {}", input.amount()),
            });
        }

        Self::check_identity(input.origin_account_id(), origin)?;
        Self::check_identity(input.destination_account_id(), destination)?;

        if !origin.balance().covers(&input.amount()) {
            return Err(TransferError::InsufficientFunds {
                available: origin.balance().to_string(),
                requested: input.amount().to_string(),
            });
        }

        Ok(())
    }

    fn check_identity(expected: &AccountId, loaded: &Account) -> Result<(), TransferError> {
        if loaded.id() == expected {
            Ok(())
        } else {
            Err(TransferError::AccountNotFound {
                account_id: expected.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::Money;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    fn money(value: Decimal) -> Money {
        Money::new(value).unwrap()
    }

    fn account(id: &str, balance: Decimal) -> Account {
        Account::open(AccountId::new(id), money(balance))
    }

    fn input(origin: &str, destination: &str, amount: Decimal) -> TransferInput {
        TransferInput::unchecked(
            AccountId::new(origin),
            AccountId::new(destination),
            money(amount),
            None,
        )
    }

    #[test_case(dec!(100), dec!(30) ; "partial balance")]
    #[test_case(dec!(100), dec!(100) ; "entire balance")]
    #[test_case(dec!(0.01), dec!(0.01) ; "smallest unit")]
    fn validate_passes(balance: Decimal, amount: Decimal) {
        let origin = account("acct-a", balance);
        let destination = account("acct-b", dec!(50));
        let input = input("acct-a", "acct-b", amount);

        assert!(TransferPolicy::validate(&input, &origin, &destination).is_ok());
    }

    #[test]
    fn validate_rejects_same_account() {
        let origin = account("acct-a", dec!(100));
        let input = input("acct-a", "acct-a", dec!(30));

        let err = TransferPolicy::validate(&input, &origin, &origin).unwrap_err();
        assert!(matches!(err, TransferError::SameAccount { .. }));
    }

    #[test]
    fn validate_rejects_zero_amount() {
        let origin = account("acct-a", dec!(100));
        let destination = account("acct-b", dec!(50));
        let input = input("acct-a", "acct-b", Decimal::ZERO);

        let err = TransferPolicy::validate(&input, &origin, &destination).unwrap_err();
        assert!(matches!(err, TransferError::InvalidAmount { .. }));
    }

    #[test]
    fn validate_rejects_insufficient_funds() {
        let origin = account("acct-a", dec!(10));
        let destination = account("acct-b", dec!(50));
        let input = input("acct-a", "acct-b", dec!(50));

        let err = TransferPolicy::validate(&input, &origin, &destination).unwrap_err();
        assert!(matches!(err, TransferError::InsufficientFunds { .. }));
    }

    #[test]
    fn validate_first_failing_check_wins() {
        // Same account AND zero amount: the distinct-accounts check is
        // evaluated first and must win.
        {
            let origin = account("acct-a", dec!(100));
            let input = input("acct-a", "acct-a", Decimal::ZERO);

            let err = TransferPolicy::validate(&input, &origin, &origin).unwrap_err();
            assert!(matches!(err, TransferError::SameAccount { .. }));
        }

        // Zero amount AND insufficient funds: the amount check wins.
        let origin = account("acct-a", Decimal::ZERO);
        let destination = account("acct-b", dec!(50));
        let input = input("acct-a", "acct-b", Decimal::ZERO);

        let err = TransferPolicy::validate(&input, &origin, &destination).unwrap_err();
        assert!(matches!(err, TransferError::InvalidAmount { .. }));
    }

    #[test]
    fn validate_rejects_mismatched_loaded_accounts() {
        let origin = account("acct-x", dec!(100));
        let destination = account("acct-b", dec!(50));
        let input = input("acct-a", "acct-b", dec!(30));

        let err = TransferPolicy::validate(&input, &origin, &destination).unwrap_err();
        assert!(matches!(
            err,
            TransferError::AccountNotFound { account_id } if account_id == "acct-a"
        ));
    }
}
