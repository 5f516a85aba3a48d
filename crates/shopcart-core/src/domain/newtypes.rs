//! Domain newtypes with validation
//!
//! This module provides strongly-typed wrappers for storefront identifiers
//! and cart quantities. Each newtype ensures data validity at construction time.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

// ============================================================================
// Catalog identifiers
// ============================================================================

/// Server-assigned identifier of a product
///
/// Serialized transparently as an integer. When used as a JSON object key
/// (as in a cart mapping) it appears as a decimal string, e.g. `"42"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create a ProductId from a raw integer
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| DomainError::InvalidId(format!("Invalid ProductId '{s}': {e}")))
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Server-assigned identifier of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u64);

impl CategoryId {
    /// Create a CategoryId from a raw integer
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| DomainError::InvalidId(format!("Invalid CategoryId '{s}': {e}")))
    }
}

impl From<u64> for CategoryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ============================================================================
// Quantity
// ============================================================================

/// A strictly positive number of units of one product
///
/// Zero is not representable: a line whose quantity reaches zero is removed
/// from the cart rather than kept as an empty entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// A single unit
    pub const ONE: Quantity = Quantity(1);

    /// Create a new Quantity, rejecting zero
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if `value` is zero
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::InvalidQuantity(
                "must be greater than 0".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Interpret a signed user-supplied amount
    ///
    /// Returns `Ok(None)` for zero and negative values, which callers treat
    /// as a removal request.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if `value` exceeds `u32::MAX`
    pub fn from_signed(value: i64) -> Result<Option<Self>, DomainError> {
        if value <= 0 {
            return Ok(None);
        }
        let value = u32::try_from(value)
            .map_err(|_| DomainError::InvalidQuantity(format!("{value} is too large")))?;
        Ok(Some(Self(value)))
    }

    /// Get the raw value
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u32::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
