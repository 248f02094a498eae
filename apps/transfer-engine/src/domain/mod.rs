//! Domain Layer
//!
//! The innermost layer containing business logic with zero
//! infrastructure dependencies. This layer defines:
//!
//! - **Aggregates**: Consistency boundaries with invariants
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Events**: Records of state transitions
//! - **Domain Services**: Stateless business logic
//! - **Repository Traits**: Persistence abstractions (implemented in adapters)
//!
//! # Bounded Contexts
//!
//! - [`account`]: Ledger accounts with optimistic-version balances
//! - [`transfer`]: Transfer instructions, rules, outcomes, and events

pub mod account;
pub mod shared;
pub mod transfer;
