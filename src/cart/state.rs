//! Cart aggregate state and its transitions.

use serde::{Deserialize, Serialize};

use crate::types::catalog::{ProductDescriptor, ProductId};

use super::line::CartLine;

/// Derived cart totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of all line quantities.
    pub total_items: u32,
    /// Sum of effective line totals.
    pub total_price: u64,
}

impl CartTotals {
    /// Calculates totals for a set of lines in a single pass.
    #[must_use]
    pub fn calculate(lines: &[CartLine]) -> Self {
        let mut total_items: u32 = 0;
        let mut total_price: u64 = 0;
        for line in lines {
            total_items = total_items.saturating_add(line.quantity);
            total_price = total_price.saturating_add(line.line_total());
        }
        Self { total_items, total_price }
    }
}

/// The cart aggregate: ordered lines (unique by id) plus derived totals.
///
/// Totals are recomputed from the lines after every transition rather than
/// maintained incrementally; carts are small and recomputation cannot drift.
/// Transitions here are pure in-memory computations with no I/O; the store
/// layers persistence and notifications on top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// Lines in insertion order.
    pub lines:  Vec<CartLine>,
    /// Derived totals.
    pub totals: CartTotals,
}

impl CartState {
    /// Creates an empty aggregate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether a line with the given product ID exists.
    #[must_use]
    pub fn contains_line(&self, id: &ProductId) -> bool {
        self.lines.iter().any(|l| &l.id == id)
    }

    /// Looks up a line by product ID.
    #[must_use]
    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == id)
    }

    /// Recomputes the derived totals from the current lines.
    pub(crate) fn recompute_totals(&mut self) {
        self.totals = CartTotals::calculate(&self.lines);
    }

    /// Adds a product to the cart.
    ///
    /// If the product is already present its quantity increases and the
    /// cached fields stay untouched; otherwise a sanitized new line is
    /// appended.
    pub(crate) fn add_line(&mut self, descriptor: &ProductDescriptor, quantity: u32) {
        let quantity = quantity.max(1);

        if let Some(line) = self.lines.iter_mut().find(|l| l.id == descriptor.id) {
            let new_qty = line.quantity.saturating_add(quantity);
            line.set_quantity(new_qty);
        } else {
            self.lines.push(CartLine::from_descriptor(descriptor, quantity));
        }

        self.recompute_totals();
    }

    /// Removes the line with the given product ID.
    ///
    /// Returns whether a line was removed; an absent ID is a no-op.
    pub(crate) fn remove_line(&mut self, id: &ProductId) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| &l.id != id);

        let removed = self.lines.len() != initial_len;
        if removed {
            self.recompute_totals();
        }
        removed
    }

    /// Sets a line's quantity to an exact value.
    ///
    /// A quantity of zero removes the line. Returns whether state changed;
    /// an absent ID is a no-op.
    pub(crate) fn set_quantity(&mut self, id: &ProductId, quantity: u32) -> bool {
        if quantity < 1 {
            return self.remove_line(id);
        }

        if let Some(line) = self.lines.iter_mut().find(|l| &l.id == id) {
            line.set_quantity(quantity);
            self.recompute_totals();
            true
        } else {
            false
        }
    }

    /// Resets to the empty aggregate. Returns whether state changed.
    pub(crate) fn clear(&mut self) -> bool {
        if self.lines.is_empty() {
            return false;
        }
        self.lines.clear();
        self.recompute_totals();
        true
    }
}
