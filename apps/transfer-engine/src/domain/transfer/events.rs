//! Domain events for transfers.
//!
//! A [`TransferEvent`] is an immutable fact record of a completed
//! transfer. The core hands it to the publisher and never retains it.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{AccountId, Money, Timestamp, TransferId};

/// Fact record emitted after a transfer has been durably persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEvent {
    /// Unique identifier of the transfer.
    pub transfer_id: TransferId,
    /// Account that was debited.
    pub origin_account_id: AccountId,
    /// Account that was credited.
    pub destination_account_id: AccountId,
    /// Amount moved.
    pub amount: Money,
    /// When the transfer completed.
    pub occurred_at: Timestamp,
}

impl TransferEvent {
    /// Record a completed transfer, stamping a fresh id and timestamp.
    #[must_use]
    pub fn record(
        origin_account_id: AccountId,
        destination_account_id: AccountId,
        amount: Money,
    ) -> Self {
        Self {
            transfer_id: TransferId::generate(),
            origin_account_id,
            destination_account_id,
            amount,
            occurred_at: Timestamp::now(),
        }
    }
}
