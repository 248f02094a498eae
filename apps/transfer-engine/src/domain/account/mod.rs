//! Account bounded context.
//!
//! The [`Account`](aggregate::Account) aggregate, its errors, and the
//! repository port implemented by persistence adapters.

pub mod aggregate;
pub mod errors;
pub mod repository;

pub use aggregate::Account;
pub use errors::AccountError;
pub use repository::AccountRepository;
