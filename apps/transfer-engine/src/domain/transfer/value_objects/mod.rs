//! Transfer value objects.

mod transfer_input;
mod transfer_result;

pub use transfer_input::TransferInput;
pub use transfer_result::{TransferResult, TransferStatus};
