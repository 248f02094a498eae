//! Shared domain errors.

use std::fmt;

/// Domain-level errors raised by the shared value objects.
///
/// These errors are independent of infrastructure concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Amount is negative, zero where positivity is required, or not
    /// representable at the required precision.
    InvalidAmount {
        /// Error message.
        message: String,
    },

    /// A subtraction would drive a balance below zero.
    InsufficientFunds {
        /// Amount available.
        available: String,
        /// Amount requested.
        requested: String,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount { message } => {
                write!(f, "Invalid amount: {message}")
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
        }
    }
}

impl std::error::Error for DomainError {}
