//! # Product Catalog
//!
//! Read-only access to the static product catalog that feeds the cart.

mod tests;

use std::collections::HashMap;

use crate::errors::{StorefrontError, StorefrontResult};
use crate::types::catalog::{ProductDescriptor, ProductId};

/// Read-only product catalog.
///
/// The catalog is static input data with a single consumer; it is loaded
/// once and never mutated. Filters preserve catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Descriptors in catalog order.
    products: Vec<ProductDescriptor>,
    /// Index from product ID to position in `products`.
    by_id:    HashMap<ProductId, usize>,
}

impl Catalog {
    /// Creates a catalog from a descriptor list.
    ///
    /// Duplicate IDs are dropped; the first occurrence wins.
    #[must_use]
    pub fn new(products: Vec<ProductDescriptor>) -> Self {
        let mut catalog = Self {
            products: Vec::with_capacity(products.len()),
            by_id:    HashMap::new(),
        };

        for product in products {
            if catalog.by_id.contains_key(&product.id) {
                continue;
            }
            catalog.by_id.insert(product.id.clone(), catalog.products.len());
            catalog.products.push(product);
        }

        catalog
    }

    /// Parses a catalog from a JSON array of product descriptors.
    ///
    /// # Errors
    /// Returns an error when the document is not a valid descriptor array.
    pub fn from_json(raw: &str) -> StorefrontResult<Self> {
        let products: Vec<ProductDescriptor> =
            serde_json::from_str(raw).map_err(StorefrontError::CatalogParse)?;
        Ok(Self::new(products))
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&ProductDescriptor> {
        self.by_id.get(id).map(|&index| &self.products[index])
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[ProductDescriptor] {
        &self.products
    }

    /// Products in a category.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&ProductDescriptor> {
        self.products
            .iter()
            .filter(|p| p.category.as_deref() == Some(category))
            .collect()
    }

    /// Products of a brand.
    #[must_use]
    pub fn by_brand(&self, brand: &str) -> Vec<&ProductDescriptor> {
        self.products.iter().filter(|p| p.brand == brand).collect()
    }

    /// Products currently in stock. A missing stock flag counts as in
    /// stock, matching the cart's defaulting rule.
    #[must_use]
    pub fn in_stock(&self) -> Vec<&ProductDescriptor> {
        self.products.iter().filter(|p| p.in_stock.unwrap_or(true)).collect()
    }
}
