//! # Storefront Cart
//!
//! Client-side cart core for a retail appliance storefront: the cart state
//! machine (add, remove, update-quantity, clear) with derived totals,
//! snapshot persistence across sessions, change notifications for the UI
//! layer, and read-only access to the static product catalog that feeds it.

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod cart;
pub mod catalog;
pub mod errors;
pub mod types;

// Re-exports for public API
pub use cart::{
    CartEvent, CartLine, CartObserver, CartSession, CartState, CartStore, CartTotals,
    JsonFileSnapshot, MemorySnapshot, SnapshotStore,
};
pub use catalog::Catalog;
pub use errors::{StorefrontError, StorefrontResult};
pub use types::catalog::{ProductDescriptor, ProductId};
