//! Transfer errors.
//!
//! The structured failure taxonomy returned to callers. The excluded
//! presentation layer maps these to transport-level statuses.

use std::fmt;

use crate::domain::account::AccountError;
use crate::domain::shared::DomainError;

/// Errors that can occur while executing a transfer.
///
/// Validation failures (`InvalidAmount`, `SameAccount`,
/// `AccountNotFound`, `InsufficientFunds`) are terminal for the attempt
/// and never retried. `ConcurrentModification` and `LockTimeout` signal
/// transient contention; retry policy belongs to the caller, not the
/// core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// Transfer amount is zero, negative, or not representable.
    InvalidAmount {
        /// Error message.
        message: String,
    },

    /// Origin and destination are the same account.
    SameAccount {
        /// The repeated account ID.
        account_id: String,
    },

    /// One of the referenced accounts does not exist.
    AccountNotFound {
        /// Account ID.
        account_id: String,
    },

    /// Origin balance cannot cover the transfer amount.
    InsufficientFunds {
        /// Amount available.
        available: String,
        /// Amount requested.
        requested: String,
    },

    /// A version check failed at the storage layer.
    ///
    /// Under correct lock usage this is unreachable; it is surfaced as a
    /// consistency violation, never silently retried.
    ConcurrentModification {
        /// Account ID.
        account_id: String,
        /// Version the writer expected to replace.
        expected_version: u64,
        /// Version actually found in the store.
        actual_version: u64,
    },

    /// Lock acquisition did not complete within the allowed wait.
    LockTimeout {
        /// Account whose lock was being waited on.
        account_id: String,
        /// Total wait bound in milliseconds.
        waited_ms: u64,
    },

    /// An idempotency key was reused with a different payload.
    IdempotencyConflict {
        /// The reused key.
        key: String,
    },
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount { message } => {
                write!(f, "Invalid transfer amount: {message}")
            }
            Self::SameAccount { account_id } => {
                write!(
                    f,
                    "Origin and destination must differ: {account_id}"
                )
            }
            Self::AccountNotFound { account_id } => {
                write!(f, "Account not found: {account_id}")
            }
            Self::InsufficientFunds {
                available,
                requested,
            } => {
                write!(
                    f,
                    "Insufficient funds: requested {requested}, available {available}"
                )
            }
            Self::ConcurrentModification {
                account_id,
                expected_version,
                actual_version,
            } => {
                write!(
                    f,
                    "Concurrent modification of account {account_id}: expected version {expected_version}, found {actual_version}"
                )
            }
            Self::LockTimeout {
                account_id,
                waited_ms,
            } => {
                write!(
                    f,
                    "Timed out after {waited_ms}ms waiting for lock on account {account_id}"
                )
            }
            Self::IdempotencyConflict { key } => {
                write!(
                    f,
                    "Idempotency key reused with a different payload: {key}"
                )
            }
        }
    }
}

impl std::error::Error for TransferError {}

impl From<DomainError> for TransferError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidAmount { message } => Self::InvalidAmount { message },
            DomainError::InsufficientFunds {
                available,
                requested,
            } => Self::InsufficientFunds {
                available,
                requested,
            },
        }
    }
}

impl From<AccountError> for TransferError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::NotFound { account_id } => Self::AccountNotFound { account_id },
            AccountError::VersionConflict {
                account_id,
                expected_version,
                actual_version,
            } => Self::ConcurrentModification {
                account_id,
                expected_version,
                actual_version,
            },
        }
    }
}
