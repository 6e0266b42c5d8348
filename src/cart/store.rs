//! Cart store: state ownership, persistence hook, and notifications.

use tracing::{debug, warn};

use crate::types::catalog::{ProductDescriptor, ProductId};

use super::events::{CartEvent, CartObserver};
use super::snapshot::SnapshotStore;
use super::state::{CartState, CartTotals};

/// The cart store.
///
/// Owns the single cart aggregate for a client session. Every mutation runs
/// the pure transition on [`CartState`], then a post-commit hook persists
/// the whole snapshot and notifies observers. A failed persist leaves the
/// in-memory state authoritative for the session; there is no rollback and
/// no retry.
pub struct CartStore {
    /// Current aggregate.
    state:     CartState,
    /// Snapshot persistence backend.
    snapshot:  Box<dyn SnapshotStore>,
    /// Registered change observers.
    observers: Vec<Box<dyn CartObserver>>,
}

impl CartStore {
    /// Creates a store over the given snapshot backend, rehydrating any
    /// previously persisted state.
    ///
    /// Totals are recomputed from the rehydrated lines, so they can never
    /// drift from the persisted line data. A backend that fails to load, or
    /// holds nothing, yields the empty aggregate.
    #[must_use]
    pub fn new(snapshot: Box<dyn SnapshotStore>) -> Self {
        let mut state = match snapshot.load() {
            Ok(Some(state)) => state,
            Ok(None) => CartState::new(),
            Err(err) => {
                warn!(error = %err, "Failed to load cart snapshot; starting empty");
                CartState::new()
            },
        };
        state.recompute_totals();

        Self { state, snapshot, observers: Vec::new() }
    }

    /// Registers a change observer.
    pub fn subscribe(&mut self, observer: Box<dyn CartObserver>) {
        self.observers.push(observer);
    }

    /// Current cart state.
    #[must_use]
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Current derived totals.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        self.state.totals
    }

    /// Whether a line with the given product ID is in the cart.
    #[must_use]
    pub fn contains_line(&self, id: &ProductId) -> bool {
        self.state.contains_line(id)
    }

    /// Adds a product to the cart.
    ///
    /// An explicit `quantity` always wins. `None` falls back to the
    /// descriptor's own `quantity` field when that is at least 1, and
    /// defaults to 1 otherwise. Adding an already-present product increases
    /// its quantity and leaves the cached price/display fields untouched.
    /// Malformed descriptor fields are defaulted, never rejected.
    pub fn add_line(&mut self, descriptor: &ProductDescriptor, quantity: Option<u32>) {
        let quantity = quantity.unwrap_or_else(|| descriptor_quantity(descriptor));
        debug!(id = %descriptor.id, quantity, "add_line");

        self.state.add_line(descriptor, quantity);
        self.commit(CartEvent::LineAdded {
            id:    descriptor.id.clone(),
            title: descriptor.title.clone(),
        });
    }

    /// Removes the line with the given product ID.
    ///
    /// An absent ID is a silent no-op: nothing is persisted and no event
    /// fires.
    pub fn remove_line(&mut self, id: &ProductId) {
        debug!(id = %id, "remove_line");

        if self.state.remove_line(id) {
            self.commit(CartEvent::LineRemoved { id: id.clone() });
        }
    }

    /// Sets a line's quantity to an exact value (not incremented).
    ///
    /// A quantity of zero removes the line; an absent ID is a no-op.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) {
        if quantity < 1 {
            self.remove_line(id);
            return;
        }

        debug!(id = %id, quantity, "set_quantity");
        if self.state.set_quantity(id, quantity) {
            self.commit(CartEvent::QuantityChanged { id: id.clone(), quantity });
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        debug!("clear");

        if self.state.clear() {
            self.commit(CartEvent::Cleared);
        }
    }

    /// Post-commit hook: persist the whole snapshot, then notify observers.
    fn commit(&mut self, event: CartEvent) {
        if let Err(err) = self.snapshot.save(&self.state) {
            // In-memory state stays authoritative for the session.
            warn!(error = %err, "Failed to persist cart snapshot");
        }

        for observer in &self.observers {
            observer.notify(&event);
        }
    }
}

/// Quantity a descriptor contributes when the caller passes none.
fn descriptor_quantity(descriptor: &ProductDescriptor) -> u32 {
    match descriptor.quantity {
        Some(qty) if qty >= 1 => u32::try_from(qty).unwrap_or(u32::MAX),
        _ => 1,
    }
}
