//! Cart line type and the effective-price rule.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::catalog::{ProductDescriptor, ProductId};

/// One product's presence in the cart.
///
/// Prices and display fields are captured when the line is created; a later
/// add of the same product only increases the quantity and never refreshes
/// the cached fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product ID (identity key, unique within the cart).
    pub id:                   ProductId,
    /// Display title (cached).
    pub title:                String,
    /// Brand name (cached).
    pub brand:                String,
    /// Category slug.
    pub category:             String,
    /// List price in whole currency units.
    pub unit_list_price:      u64,
    /// Reference "full" price; defaults to the list price when missing.
    pub unit_reference_price: u64,
    /// Discount percent, 0..=100.
    pub discount_percent:     u8,
    /// Quantity; at least 1 while the line exists.
    pub quantity:             u32,
    /// Average customer rating.
    pub rating:               f32,
    /// Number of customer reviews.
    pub review_count:         u32,
    /// Image URL or asset reference.
    pub image:                Option<String>,
    /// Stock flag at the time of adding.
    pub in_stock:             bool,
    /// Capacity label.
    pub capacity:             Option<String>,
    /// Energy rating label.
    pub energy_rating:        Option<String>,
    /// Specification mapping (label -> value).
    pub specs:                HashMap<String, String>,
}

impl CartLine {
    /// Creates a line from a catalog descriptor.
    ///
    /// Malformed fields are defaulted, never rejected: a negative list price
    /// is clamped to 0, a missing or negative reference price falls back to
    /// the list price, the discount percent is clamped to 0..=100, a
    /// negative review count becomes 0, and a missing stock flag counts as
    /// in stock.
    #[must_use]
    pub fn from_descriptor(descriptor: &ProductDescriptor, quantity: u32) -> Self {
        let unit_list_price = descriptor.price.max(0) as u64;
        let unit_reference_price = match descriptor.mrp {
            Some(mrp) if mrp >= 0 => mrp as u64,
            _ => unit_list_price,
        };
        let discount_percent = descriptor.discount.unwrap_or(0).clamp(0, 100) as u8;
        let review_count =
            descriptor.reviews.unwrap_or(0).clamp(0, i64::from(u32::MAX)) as u32;

        Self {
            id: descriptor.id.clone(),
            title: descriptor.title.clone(),
            brand: descriptor.brand.clone(),
            category: descriptor.category.clone().unwrap_or_default(),
            unit_list_price,
            unit_reference_price,
            discount_percent,
            quantity: quantity.max(1),
            rating: descriptor.rating.unwrap_or(0.0),
            review_count,
            image: descriptor.image.clone(),
            in_stock: descriptor.in_stock.unwrap_or(true),
            capacity: descriptor.capacity.clone(),
            energy_rating: descriptor.energy_rating.clone(),
            specs: descriptor.specs.clone().unwrap_or_default(),
        }
    }

    /// Effective unit price actually charged.
    ///
    /// With a discount, the reduction applies to the greater of the list and
    /// reference prices, rounded half-up. Without one, the lower of the two
    /// is charged.
    #[must_use]
    pub fn effective_unit_price(&self) -> u64 {
        if self.discount_percent > 0 {
            let base = self.unit_list_price.max(self.unit_reference_price);
            let remaining = u64::from(100 - self.discount_percent);
            base.saturating_mul(remaining).saturating_add(50) / 100
        } else {
            self.unit_list_price.min(self.unit_reference_price)
        }
    }

    /// Line total (effective unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.effective_unit_price().saturating_mul(u64::from(self.quantity))
    }

    /// Updates the quantity. Callers keep the >= 1 invariant; a quantity
    /// below one must remove the line instead of storing it.
    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}
