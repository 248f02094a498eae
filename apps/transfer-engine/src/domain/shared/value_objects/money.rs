//! Money value object for ledger balances and transfer amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::domain::shared::DomainError;

/// A non-negative monetary amount.
///
/// Represented as a Decimal for precise financial calculations; no
/// floating point is involved anywhere in the money path. Invariant:
/// the wrapped value is never negative, so a `Money` can always be used
/// as a ledger balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a Money value from a Decimal.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the value is negative.
    pub fn new(amount: Decimal) -> Result<Self, DomainError> {
        if amount < Decimal::ZERO {
            return Err(DomainError::InvalidAmount {
                message: format!("amount cannot be negative: {amount}"),
            });
        }
        Ok(Self(amount))
    }

    /// Create a strictly positive Money value, as required for transfer
    /// amounts.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the value is zero or negative.
    pub fn positive(amount: Decimal) -> Result<Self, DomainError> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::InvalidAmount {
                message: format!("amount must be positive: {amount}"),
            });
        }
        Ok(Self(amount))
    }

    /// Create a Money value from minor units (e.g. cents).
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the value is negative.
    pub fn from_minor_units(units: i64) -> Result<Self, DomainError> {
        Self::new(Decimal::new(units, 2))
    }

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if this amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if this amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    /// Add another amount, returning a new value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the sum is not representable.
    pub fn add(self, other: Self) -> Result<Self, DomainError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidAmount {
                message: format!("amount overflow: {} + {}", self.0, other.0),
            })
    }

    /// Subtract another amount, returning a new value.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientFunds` if the result would be negative.
    pub fn subtract(self, other: Self) -> Result<Self, DomainError> {
        if other.0 > self.0 {
            return Err(DomainError::InsufficientFunds {
                available: self.0.to_string(),
                requested: other.0.to_string(),
            });
        }
        Ok(Self(self.0 - other.0))
    }

    /// Sufficient-funds comparison: can this balance cover `amount`?
    #[must_use]
    pub fn covers(&self, amount: &Self) -> bool {
        self.0 >= amount.0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}
