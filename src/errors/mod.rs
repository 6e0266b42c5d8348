//! Error types for the storefront cart crate.

use thiserror::Error;

/// Storefront-specific errors.
///
/// Cart mutations have no error states of their own: malformed input is
/// sanitized and absent line ids are no-ops. Errors exist only at the
/// persistence and catalog edges.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Snapshot storage could not be read or written.
    #[error("snapshot I/O error: {0}")]
    SnapshotIo(#[from] std::io::Error),
    /// Snapshot could not be serialized or deserialized.
    #[error("snapshot serialization error: {0}")]
    SnapshotSerialize(#[from] serde_json::Error),
    /// Snapshot lock was poisoned by a panicking writer.
    #[error("snapshot lock poisoned")]
    SnapshotLock,
    /// Catalog data could not be parsed.
    #[error("catalog parse error: {0}")]
    CatalogParse(#[source] serde_json::Error),
}

/// Result type for storefront operations.
pub type StorefrontResult<T> = Result<T, StorefrontError>;
