//! # Cart Store
//!
//! The cart state machine for a client session: add, remove,
//! update-quantity, and clear over an ordered set of lines, with derived
//! totals, snapshot persistence across sessions, and change notifications
//! for the UI layer.

mod events;
mod line;
mod session;
mod snapshot;
mod state;
mod store;

pub use events::{CartEvent, CartObserver};
pub use line::CartLine;
pub use session::CartSession;
pub use snapshot::{JsonFileSnapshot, MemorySnapshot, SnapshotStore, SNAPSHOT_FILE_NAME};
pub use state::{CartState, CartTotals};
pub use store::CartStore;
