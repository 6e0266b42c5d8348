//! # Catalog Types
//!
//! Type definitions for the static product catalog consumed by the cart.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Unique product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub Cow<'static, str>);

impl ProductId {
    /// Creates a new product ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    /// Creates a product ID from a static string slice (zero-copy).
    #[must_use]
    pub fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// PRODUCT DESCRIPTOR
// ============================================================================

/// Raw product entry from the static catalog.
///
/// Numeric fields are signed and optional because catalog data arrives from
/// outside the crate and may be malformed. Descriptors are never rejected:
/// sanitization happens when one enters the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDescriptor {
    /// Product ID.
    pub id:            ProductId,
    /// Display title.
    pub title:         String,
    /// Brand name.
    #[serde(default)]
    pub brand:         String,
    /// Category slug (e.g. "refrigerators").
    #[serde(default)]
    pub category:      Option<String>,
    /// List price in whole currency units.
    pub price:         i64,
    /// Reference "full" price (strike-through display).
    #[serde(default)]
    pub mrp:           Option<i64>,
    /// Discount percent applied against the greater of list/reference price.
    #[serde(default)]
    pub discount:      Option<i32>,
    /// Average customer rating.
    #[serde(default)]
    pub rating:        Option<f32>,
    /// Number of customer reviews.
    #[serde(default)]
    pub reviews:       Option<i64>,
    /// Image URL or asset reference.
    #[serde(default)]
    pub image:         Option<String>,
    /// Whether the product is in stock.
    #[serde(default)]
    pub in_stock:      Option<bool>,
    /// Capacity label (e.g. "653 L", "8 kg").
    #[serde(default)]
    pub capacity:      Option<String>,
    /// Energy rating label (e.g. "5 Star").
    #[serde(default)]
    pub energy_rating: Option<String>,
    /// Specification mapping (label -> value).
    #[serde(default)]
    pub specs:         Option<HashMap<String, String>>,
    /// Suggested quantity carried by some catalog rows; used by the cart
    /// only when no explicit quantity is given.
    #[serde(default)]
    pub quantity:      Option<i64>,
}

impl ProductDescriptor {
    /// Creates a descriptor with the mandatory fields; everything else
    /// starts unset and is defaulted when the descriptor enters the cart.
    #[must_use]
    pub fn new(id: ProductId, title: impl Into<String>, price: i64) -> Self {
        Self {
            id,
            title: title.into(),
            brand: String::new(),
            category: None,
            price,
            mrp: None,
            discount: None,
            rating: None,
            reviews: None,
            image: None,
            in_stock: None,
            capacity: None,
            energy_rating: None,
            specs: None,
            quantity: None,
        }
    }

    /// Sets the brand.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Sets the category slug.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the reference price.
    #[must_use]
    pub fn with_mrp(mut self, mrp: i64) -> Self {
        self.mrp = Some(mrp);
        self
    }

    /// Sets the discount percent.
    #[must_use]
    pub fn with_discount(mut self, percent: i32) -> Self {
        self.discount = Some(percent);
        self
    }

    /// Sets the stock flag.
    #[must_use]
    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    /// Sets the suggested quantity.
    #[must_use]
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }
}
