//! Transfer DTOs for the transport boundary.
//!
//! The gateway validates shape at the edge and converts to the domain
//! [`TransferInput`]; results convert back into a serializable form the
//! presentation layer can map onto its transport.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{AccountId, IdempotencyKey, Money};
use crate::domain::transfer::{TransferError, TransferInput, TransferResult};

/// Inbound transfer request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequestDto {
    /// Account to debit.
    pub origin_account_id: String,
    /// Account to credit.
    pub destination_account_id: String,
    /// Amount to move.
    pub amount: Decimal,
    /// Optional caller-supplied idempotency key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

impl TransferRequestDto {
    /// Convert into a validated domain input.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` or `SameAccount` if the request fails
    /// the inbound contract.
    pub fn into_input(self) -> Result<TransferInput, TransferError> {
        let amount = Money::positive(self.amount)?;
        TransferInput::new(
            AccountId::new(self.origin_account_id),
            AccountId::new(self.destination_account_id),
            amount,
            self.idempotency_key.map(IdempotencyKey::new),
        )
    }
}

/// Outbound transfer result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferResultDto {
    /// Origin balance after the debit.
    pub origin_new_balance: Decimal,
    /// Destination balance after the credit.
    pub destination_new_balance: Decimal,
    /// Outcome status name.
    pub status: String,
}

impl TransferResultDto {
    /// Build from a domain result.
    #[must_use]
    pub fn from_result(result: &TransferResult) -> Self {
        Self {
            origin_new_balance: result.origin_new_balance.amount(),
            destination_new_balance: result.destination_new_balance.amount(),
            status: result.status.to_string(),
        }
    }
}
