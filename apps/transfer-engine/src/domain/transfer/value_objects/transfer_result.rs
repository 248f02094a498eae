//! Transfer outcome value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::Money;

/// Outcome status of a completed transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferStatus {
    /// Funds moved and the transfer event was published.
    Completed,
    /// Funds moved durably, but publishing the transfer event failed.
    CompletedWithPublishWarning,
}

impl TransferStatus {
    /// Returns true if the transfer event reached the publisher.
    #[must_use]
    pub const fn is_published(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns true for the degraded-success outcome.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::CompletedWithPublishWarning)
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "COMPLETED"),
            Self::CompletedWithPublishWarning => {
                write!(f, "COMPLETED_WITH_PUBLISH_WARNING")
            }
        }
    }
}

/// Result of a successful transfer: both updated balances and the
/// outcome status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferResult {
    /// Origin balance after the debit.
    pub origin_new_balance: Money,
    /// Destination balance after the credit.
    pub destination_new_balance: Money,
    /// Outcome status.
    pub status: TransferStatus,
}

impl TransferResult {
    /// Build a result from the two updated balances.
    #[must_use]
    pub const fn new(
        origin_new_balance: Money,
        destination_new_balance: Money,
        status: TransferStatus,
    ) -> Self {
        Self {
            origin_new_balance,
            destination_new_balance,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn status_predicates() {
        assert!(TransferStatus::Completed.is_published());
        assert!(!TransferStatus::Completed.is_degraded());

        assert!(!TransferStatus::CompletedWithPublishWarning.is_published());
        assert!(TransferStatus::CompletedWithPublishWarning.is_degraded());
    }

    #[test]
    fn status_display() {
        assert_eq!(TransferStatus::Completed.to_string(), "COMPLETED");
        assert_eq!(
            TransferStatus::CompletedWithPublishWarning.to_string(),
            "COMPLETED_WITH_PUBLISH_WARNING"
        );
    }

    #[test]
    fn result_carries_balances() {
        let result = TransferResult::new(
            Money::new(dec!(70)).unwrap(),
            Money::new(dec!(80)).unwrap(),
            TransferStatus::Completed,
        );

        assert_eq!(result.origin_new_balance.amount(), dec!(70));
        assert_eq!(result.destination_new_balance.amount(), dec!(80));
        assert_eq!(result.status, TransferStatus::Completed);
    }

    #[test]
    fn result_serde_roundtrip() {
        let result = TransferResult::new(
            Money::new(dec!(70)).unwrap(),
            Money::new(dec!(80)).unwrap(),
            TransferStatus::CompletedWithPublishWarning,
        );

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("COMPLETED_WITH_PUBLISH_WARNING"));

        let parsed: TransferResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
