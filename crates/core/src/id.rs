//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are opaque strings: records synced from the document database
//! carry generated ids, rows from the spreadsheet carry whatever the `ID`
//! column holds, and customers are keyed by a slug of their name.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of an order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

/// Identifier of a product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Identifier of a customer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

macro_rules! impl_string_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Generate a new opaque identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
            /// for determinism.
            pub fn generate() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            /// Wrap an identifier as delivered by the entity store.
            ///
            /// No validation happens here; ids coming from the store are
            /// trusted as-is (an empty id is still an id).
            pub fn from_raw(raw: impl Into<String>) -> Self {
                Self(raw.into())
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

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: empty", $name)));
                }
                Ok(Self(trimmed.to_string()))
            }
        }
    };
}

impl_string_id!(OrderId, "OrderId");
impl_string_id!(ProductId, "ProductId");
impl_string_id!(CustomerId, "CustomerId");

impl CustomerId {
    /// Derive the deterministic customer key from a display name.
    ///
    /// Lowercases the name and replaces every run of whitespace with a single
    /// `-`, so `"Jan  Kowalski"` and `"jan kowalski"` map to the same customer.
    pub fn from_name(name: &str) -> Self {
        let mut slug = String::with_capacity(name.len());
        let mut in_whitespace = false;
        for ch in name.chars() {
            if ch.is_whitespace() {
                if !in_whitespace {
                    slug.push('-');
                }
                in_whitespace = true;
            } else {
                slug.extend(ch.to_lowercase());
                in_whitespace = false;
            }
        }
        Self(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_slug_collapses_whitespace_and_lowercases() {
        assert_eq!(CustomerId::from_name("Jan  Kowalski").as_str(), "jan-kowalski");
        assert_eq!(CustomerId::from_name("ŁUKASZ\tNowak").as_str(), "łukasz-nowak");
        assert_eq!(
            CustomerId::from_name("jan kowalski"),
            CustomerId::from_name("Jan Kowalski")
        );
    }

    #[test]
    fn parsing_rejects_blank_ids() {
        assert!("   ".parse::<OrderId>().is_err());
        assert_eq!("  abc ".parse::<ProductId>().unwrap().as_str(), "abc");
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(OrderId::generate(), OrderId::generate());
    }
}
