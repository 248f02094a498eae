//! Shared value objects.

mod identifiers;
mod money;
mod timestamp;

pub use identifiers::{AccountId, IdempotencyKey, TransferId};
pub use money::Money;
pub use timestamp::Timestamp;
