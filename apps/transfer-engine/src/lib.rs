// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Transfer Engine - Rust Core Library
//!
//! Funds transfer domain service for the Ledger system.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! The transfer engine follows Clean Architecture principles with
//! Domain-Driven Design:
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects, domain
//!   events)
//!   - `account`: Account aggregate with functional balance updates and
//!     an optimistic version token
//!   - `transfer`: Transfer instructions, business rules, outcomes, and
//!     the completed-transfer fact record
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems
//!     (`TransferEventPublisher`, `IdempotencyStore`)
//!   - `services`: `AccountLockCoordinator` — deadlock-free ordered
//!     locking over account pairs
//!   - `use_cases`: `ExecuteTransferUseCase` — the transfer state
//!     machine
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: Account repository (in-memory)
//!   - `config`: Dependency injection container
//!
//! # Guarantees
//!
//! A transfer either debits the origin and credits the destination or
//! changes nothing; no account balance ever goes negative; transfers
//! touching the same accounts serialize without deadlocking, whatever
//! order they name the accounts in; results are durable before the
//! outcome event is published.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases, ports, and coordination services.
pub mod application;

/// Infrastructure layer - Adapters and composition.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// Tracing initialization.
pub mod telemetry;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::account::{Account, AccountError, AccountRepository};
pub use domain::shared::{AccountId, DomainError, IdempotencyKey, Money, Timestamp, TransferId};
pub use domain::transfer::{
    TransferError, TransferEvent, TransferInput, TransferPolicy, TransferResult, TransferStatus,
};

// Application re-exports
pub use application::dto::{TransferRequestDto, TransferResultDto};
pub use application::ports::{
    EventPublishError, IdempotencyRecord, IdempotencyStore, IdempotencyStoreError,
    InMemoryIdempotencyStore, NoOpEventPublisher, TransferEventPublisher,
};
pub use application::services::{AccountLockCoordinator, AccountLockSet};
pub use application::use_cases::ExecuteTransferUseCase;

// Infrastructure re-exports
pub use config::{ConfigError, Settings, TransferSettings, load_settings};
pub use infrastructure::config::Container;
pub use infrastructure::persistence::InMemoryAccountRepository;
