//! Account persistence errors.

use std::fmt;

/// Errors raised by account lookup and persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// No account exists for the identifier.
    NotFound {
        /// Account ID.
        account_id: String,
    },

    /// The stored version does not match the expected version.
    ///
    /// Indicates a write raced past the lock coordinator; treated as a
    /// consistency violation by the transfer flow, never retried.
    VersionConflict {
        /// Account ID.
        account_id: String,
        /// Version the writer expected to replace.
        expected_version: u64,
        /// Version actually found in the store.
        actual_version: u64,
    },
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { account_id } => {
                write!(f, "Account not found: {account_id}")
            }
            Self::VersionConflict {
                account_id,
                expected_version,
                actual_version,
            } => {
                write!(
                    f,
                    "Version conflict on account {account_id}: expected {expected_version}, found {actual_version}"
                )
            }
        }
    }
}

impl std::error::Error for AccountError {}
