//! Strongly-typed identifiers for domain entities.
//!
//! These prevent mixing up IDs from different contexts. `AccountId`
//! additionally carries a total order: the lock coordinator sorts by it
//! to acquire per-account locks in one global order.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generate a new unique identifier using UUID v4.
            #[must_use]
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Get the inner string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_id!(AccountId, "Unique identifier for a ledger account.");
define_id!(TransferId, "Unique identifier for a completed transfer.");
define_id!(
    IdempotencyKey,
    "Caller-supplied token ensuring a retried transfer is not re-executed."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_new_and_display() {
        let id = AccountId::new("acct-123");
        assert_eq!(id.as_str(), "acct-123");
        assert_eq!(format!("{id}"), "acct-123");
    }

    #[test]
    fn account_id_generate_is_unique() {
        let id1 = AccountId::generate();
        let id2 = AccountId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn account_id_equality() {
        let id1 = AccountId::new("acct-123");
        let id2 = AccountId::new("acct-123");
        let id3 = AccountId::new("acct-456");
        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn account_id_ordering_is_total() {
        let a = AccountId::new("acct-a");
        let b = AccountId::new("acct-b");
        assert!(a < b);
        assert!(b > a);
        assert_eq!(a.cmp(&a), std::cmp::Ordering::Equal);
    }

    #[test]
    fn account_id_from_string() {
        let id: AccountId = "acct-123".into();
        assert_eq!(id.as_str(), "acct-123");

        let id: AccountId = String::from("acct-456").into();
        assert_eq!(id.as_str(), "acct-456");
    }

    #[test]
    fn account_id_into_inner() {
        let id = AccountId::new("acct-123");
        let inner = id.into_inner();
        assert_eq!(inner, "acct-123");
    }

    #[test]
    fn transfer_id_generate() {
        let id = TransferId::generate();
        assert!(!id.as_str().is_empty());
    }

    #[test]
    fn idempotency_key_new() {
        let key = IdempotencyKey::new("req-2026-08-06-0001");
        assert_eq!(key.as_str(), "req-2026-08-06-0001");
    }

    #[test]
    fn serde_roundtrip() {
        let id = AccountId::new("acct-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"acct-123\"");

        let parsed: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn hash_works_for_collections() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(AccountId::new("acct-1"));
        set.insert(AccountId::new("acct-2"));
        set.insert(AccountId::new("acct-1")); // duplicate

        assert_eq!(set.len(), 2);
    }
}
