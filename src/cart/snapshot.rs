//! Snapshot persistence for the cart aggregate.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use tracing::warn;

use crate::errors::{StorefrontError, StorefrontResult};

use super::state::CartState;

/// Fixed file name the cart snapshot is stored under.
pub const SNAPSHOT_FILE_NAME: &str = "storefront-cart.json";

/// Storage seam for the persisted cart snapshot.
///
/// One serialized snapshot of the whole aggregate, read once at startup and
/// overwritten wholesale on every mutation.
pub trait SnapshotStore {
    /// Loads the previously persisted snapshot, if any.
    ///
    /// An absent snapshot is `Ok(None)`, not an error.
    ///
    /// # Errors
    /// Returns an error when the backing storage cannot be read.
    fn load(&self) -> StorefrontResult<Option<CartState>>;

    /// Persists the given state wholesale.
    ///
    /// # Errors
    /// Returns an error when the backing storage cannot be written.
    fn save(&self, state: &CartState) -> StorefrontResult<()>;
}

/// JSON file snapshot backend.
///
/// The client-local equivalent of a fixed-key storage slot: one JSON
/// document under [`SNAPSHOT_FILE_NAME`] in the given directory.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshot {
    /// Full path of the snapshot file.
    path: PathBuf,
}

impl JsonFileSnapshot {
    /// Creates a backend storing the snapshot under `dir`.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { path: dir.as_ref().join(SNAPSHOT_FILE_NAME) }
    }

    /// Returns the snapshot file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileSnapshot {
    fn load(&self) -> StorefrontResult<Option<CartState>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StorefrontError::SnapshotIo(err)),
        };

        match serde_json::from_str(&raw) {
            Ok(state) => Ok(Some(state)),
            Err(err) => {
                // An unparseable snapshot falls back to the empty aggregate.
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Discarding unparseable cart snapshot"
                );
                Ok(None)
            },
        }
    }

    fn save(&self, state: &CartState) -> StorefrontResult<()> {
        let raw = serde_json::to_string(state)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory snapshot backend for tests and ephemeral sessions.
///
/// Clones share the same storage slot, so a later store can rehydrate from
/// what an earlier one persisted.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshot {
    /// Last persisted state.
    stored: Arc<Mutex<Option<CartState>>>,
}

impl MemorySnapshot {
    /// Creates an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-seeded with a snapshot.
    #[must_use]
    pub fn seeded(state: CartState) -> Self {
        Self { stored: Arc::new(Mutex::new(Some(state))) }
    }

    /// Returns a copy of the last persisted state, if any.
    #[must_use]
    pub fn last_saved(&self) -> Option<CartState> {
        self.stored.lock().map(|s| s.clone()).unwrap_or(None)
    }
}

impl SnapshotStore for MemorySnapshot {
    fn load(&self) -> StorefrontResult<Option<CartState>> {
        let stored = self.stored.lock().map_err(|_| StorefrontError::SnapshotLock)?;
        Ok(stored.clone())
    }

    fn save(&self, state: &CartState) -> StorefrontResult<()> {
        let mut stored = self.stored.lock().map_err(|_| StorefrontError::SnapshotLock)?;
        *stored = Some(state.clone());
        Ok(())
    }
}
