//! Newtype IDs for type-safe entity references.
//!
//! Catalog products and cart lines are both identified by strings in the
//! persisted JSON, so separate newtypes keep them from being mixed up.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a catalog product.
///
/// Product IDs are opaque strings. The repeat-order flow may mint symbolic
/// IDs from item names when a historical item is no longer in the catalog,
/// so no structure is assumed beyond non-emptiness by convention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product ID from a string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Stable unique identifier of one cart line.
///
/// Assigned when the line is created and immutable afterwards. Lines written
/// by old clients may lack one; the cart normalizer assigns it on first read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    /// Generate a fresh random line ID (UUID v4).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Generate a line ID from the wall clock plus random bits.
    ///
    /// Fallback generator for hosts without a usable cryptographic RNG.
    /// Collision-resistant enough for a single cart, not globally unique.
    #[must_use]
    pub fn from_clock() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        Self(format!("{millis}-{:x}", rand::random::<u64>()))
    }

    /// Create a line ID from an existing string (e.g. a persisted record).
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LineId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}
