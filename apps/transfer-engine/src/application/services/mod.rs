//! Application services.
//!
//! Cross-cutting coordination that belongs to the orchestration layer
//! rather than to any single aggregate.

mod account_locks;

pub use account_locks::{AccountLockCoordinator, AccountLockSet};
