//! Cart change notifications.

use crate::types::catalog::ProductId;

/// Notification emitted after a cart mutation commits.
///
/// Events feed toast-style UI feedback; they are not part of state
/// correctness and fire only for mutations that actually changed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A product was added (new line or quantity increase).
    LineAdded {
        /// Product ID.
        id:    ProductId,
        /// Display title, for toast text.
        title: String,
    },
    /// A line was removed.
    LineRemoved {
        /// Product ID.
        id: ProductId,
    },
    /// A line's quantity was set to a new exact value.
    QuantityChanged {
        /// Product ID.
        id:       ProductId,
        /// New quantity.
        quantity: u32,
    },
    /// The cart was emptied.
    Cleared,
}

/// Observer of cart change events.
///
/// Observers run after the state transition has committed and the snapshot
/// has been persisted; they must not mutate the cart re-entrantly.
pub trait CartObserver {
    /// Called once per effective mutation.
    fn notify(&self, event: &CartEvent);
}

impl<F: Fn(&CartEvent)> CartObserver for F {
    fn notify(&self, event: &CartEvent) {
        self(event);
    }
}
