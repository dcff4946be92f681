//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are opaque strings on the wire (a persisted catalog keeps ids
//! like `"1"` or `"admin-123"` readable), wrapped in newtypes so product and
//! user ids cannot be confused.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Identifier of a user (actor identity).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_string_newtype!(ProductId);
impl_string_newtype!(UserId);

impl ProductId {
    /// Generate a fresh product id.
    ///
    /// Uses UUIDv7 (time-ordered), so generated ids sort by creation time and
    /// are collision-free for practical purposes. Prefer passing ids
    /// explicitly in tests for determinism.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }
}

impl UserId {
    /// Generate a fresh id for an auto-provisioned user.
    ///
    /// The `user-` prefix keeps provisioned ids distinguishable from the
    /// preconfigured accounts when reading a persisted session slot.
    pub fn generate() -> Self {
        Self(format!("user-{}", Uuid::now_v7()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_round_trips_through_serde_as_bare_string() {
        let id = ProductId::new("1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1\"");
        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn generated_product_ids_are_unique() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn generated_user_ids_carry_the_provisioned_prefix() {
        let id = UserId::generate();
        assert!(id.as_str().starts_with("user-"));
    }
}
