//! Validated transfer instruction.

use crate::domain::shared::{AccountId, IdempotencyKey, Money};
use crate::domain::transfer::errors::TransferError;

/// A validated instruction to move value between two ledger accounts.
///
/// Construction enforces the inbound contract: distinct accounts and a
/// strictly positive amount. An input that fails the shape checks never
/// reaches the locking or persistence machinery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferInput {
    origin_account_id: AccountId,
    destination_account_id: AccountId,
    amount: Money,
    idempotency_key: Option<IdempotencyKey>,
}

impl TransferInput {
    /// Build a transfer instruction, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns `SameAccount` if both ids are equal, or `InvalidAmount`
    /// if the amount is not strictly positive.
    pub fn new(
        origin_account_id: AccountId,
        destination_account_id: AccountId,
        amount: Money,
        idempotency_key: Option<IdempotencyKey>,
    ) -> Result<Self, TransferError> {
        if origin_account_id == destination_account_id {
            return Err(TransferError::SameAccount {
                account_id: origin_account_id.to_string(),
            });
        }
        if !amount.is_positive() {
            return Err(TransferError::InvalidAmount {
                message: format!("amount must be positive: {amount}"),
            });
        }
        Ok(Self {
            origin_account_id,
            destination_account_id,
            amount,
            idempotency_key,
        })
    }

    /// Build an instruction without shape validation.
    ///
    /// Only for exercising the policy's defensive checks in tests.
    #[cfg(test)]
    pub(crate) fn unchecked(
        origin_account_id: AccountId,
        destination_account_id: AccountId,
        amount: Money,
        idempotency_key: Option<IdempotencyKey>,
    ) -> Self {
        Self {
            origin_account_id,
            destination_account_id,
            amount,
            idempotency_key,
        }
    }

    /// Account to debit.
    #[must_use]
    pub const fn origin_account_id(&self) -> &AccountId {
        &self.origin_account_id
    }

    /// Account to credit.
    #[must_use]
    pub const fn destination_account_id(&self) -> &AccountId {
        &self.destination_account_id
    }

    /// Amount to move.
    #[must_use]
    pub const fn amount(&self) -> Money {
        self.amount
    }

    /// Caller-supplied idempotency key, if any.
    #[must_use]
    pub const fn idempotency_key(&self) -> Option<&IdempotencyKey> {
        self.idempotency_key.as_ref()
    }
}
