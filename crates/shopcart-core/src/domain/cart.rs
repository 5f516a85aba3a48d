//! Cart mapping and cart details
//!
//! The [`CartMapping`] (product → quantity) is the authoritative representation
//! exchanged with the server on every cart call. [`CartDetails`] is the
//! server-computed read projection (line items, total, count) used for display.
//!
//! ## Wire format
//!
//! A mapping is a JSON object whose keys are product ids rendered as strings:
//!
//! ```
//! use shopcart_core::domain::{CartMapping, ProductId, Quantity};
//!
//! let mut cart = CartMapping::new();
//! cart.insert(ProductId::new(42), Quantity::new(2).unwrap());
//! assert_eq!(cart.to_json_string().unwrap(), r#"{"42":2}"#);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::errors::DomainError;
use super::newtypes::{ProductId, Quantity};

// ============================================================================
// CartMapping
// ============================================================================

/// Mapping from product identifier to a strictly positive quantity
///
/// Entries are kept in ascending product-id order so that serialization is
/// deterministic. Decoding drops entries whose quantity is zero or negative:
/// the server signals a removal that way, and a zero entry is never valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CartMapping(BTreeMap<ProductId, Quantity>);

impl CartMapping {
    /// Creates an empty mapping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the cart has no lines
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct products in the cart
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Quantity of a product, if present
    pub fn get(&self, product_id: ProductId) -> Option<Quantity> {
        self.0.get(&product_id).copied()
    }

    /// Returns true if the product has a line in the cart
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.0.contains_key(&product_id)
    }

    /// Sets the quantity for a product, returning the previous quantity
    pub fn insert(&mut self, product_id: ProductId, quantity: Quantity) -> Option<Quantity> {
        self.0.insert(product_id, quantity)
    }

    /// Iterates over `(product, quantity)` pairs in product-id order
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, Quantity)> + '_ {
        self.0.iter().map(|(id, qty)| (*id, *qty))
    }

    /// Sum of all quantities
    pub fn total_quantity(&self) -> u64 {
        self.0.values().map(|q| u64::from(q.get())).sum()
    }

    /// Decodes a mapping from its JSON text form
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedCart` if the text is not a JSON object
    /// of integer keys to integer quantities.
    pub fn from_json_str(text: &str) -> Result<Self, DomainError> {
        serde_json::from_str(text).map_err(|e| DomainError::MalformedCart(e.to_string()))
    }

    /// Encodes the mapping as compact JSON, e.g. `{"42":2}`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedCart` if serialization fails
    pub fn to_json_string(&self) -> Result<String, DomainError> {
        serde_json::to_string(self).map_err(|e| DomainError::MalformedCart(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for CartMapping {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = BTreeMap::<ProductId, i64>::deserialize(deserializer)?;
        let mut cart = BTreeMap::new();
        for (id, qty) in raw {
            if let Some(qty) = Quantity::from_signed(qty).map_err(serde::de::Error::custom)? {
                cart.insert(id, qty);
            }
        }
        Ok(Self(cart))
    }
}

impl FromIterator<(ProductId, Quantity)> for CartMapping {
    fn from_iter<I: IntoIterator<Item = (ProductId, Quantity)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ============================================================================
// Request / response bodies
// ============================================================================

/// Body of the add and update calls: `{product_id, quantity, cart}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItemRequest {
    pub product_id: ProductId,
    pub quantity: Quantity,
    /// Snapshot of the client cart taken before the call
    pub cart: CartMapping,
}

/// Body of the remove call: `{cart}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshotRequest {
    pub cart: CartMapping,
}

/// Response of the add, update and remove calls
///
/// The server answers `{cart: {...}}`; a response without the field is
/// treated by callers as a failed mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartResponse {
    #[serde(default)]
    pub cart: Option<CartMapping>,
}

// ============================================================================
// CartDetails
// ============================================================================

/// One line of the server-computed cart projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Any further fields the server sends, kept verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Server-computed read projection of the cart
///
/// Derived, never authoritative on the client: it is replaced wholesale on
/// every successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartDetails {
    #[serde(default)]
    pub items: Vec<CartLine>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub items_count: u64,
}

impl CartDetails {
    /// The canonical projection of an empty cart: no items, zero total
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}
