//! Session-scoped cart context.

use super::snapshot::SnapshotStore;
use super::store::CartStore;

/// Session-scoped cart context.
///
/// A client session owns exactly one cart store. UI layers receive the
/// session by reference instead of reaching for an ambient singleton.
/// Accessing the store before [`CartSession::init`] is a programming error
/// and fails fast rather than operating on absent state.
#[derive(Default)]
pub struct CartSession {
    /// The session's store, present after `init`.
    store: Option<CartStore>,
}

impl CartSession {
    /// Creates an uninitialized session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes the session's store over a snapshot backend, rehydrating
    /// any persisted state. Replaces a previously initialized store.
    pub fn init(&mut self, snapshot: Box<dyn SnapshotStore>) -> &mut CartStore {
        self.store = Some(CartStore::new(snapshot));
        self.store.as_mut().expect("store just initialized")
    }

    /// Whether the session has an initialized store.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.store.is_some()
    }

    /// The session's store.
    ///
    /// # Panics
    /// Panics when called before [`CartSession::init`].
    #[must_use]
    pub fn store(&self) -> &CartStore {
        self.store.as_ref().expect("cart store accessed before CartSession::init")
    }

    /// Mutable access to the session's store.
    ///
    /// # Panics
    /// Panics when called before [`CartSession::init`].
    pub fn store_mut(&mut self) -> &mut CartStore {
        self.store.as_mut().expect("cart store accessed before CartSession::init")
    }
}
