//! Storage trait definitions.

use crate::error::Result;
use crate::history::Snapshot;
use std::sync::Arc;

/// Fixed storage key for the history snapshot.
pub const HISTORY_KEY: &str = "eduframe-history";

/// Persistence backend for the history snapshot.
///
/// Backends only ever see whole snapshots; there is no incremental write.
pub trait SnapshotStore: Send + Sync {
    /// Load the stored snapshot, `None` if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored payload cannot be read or parsed.
    fn load_snapshot(&self) -> Result<Option<Snapshot>>;

    /// Replace the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn save_snapshot(&self, snapshot: &Snapshot) -> Result<()>;
}

impl<T: SnapshotStore + ?Sized> SnapshotStore for Arc<T> {
    fn load_snapshot(&self) -> Result<Option<Snapshot>> {
        (**self).load_snapshot()
    }

    fn save_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        (**self).save_snapshot(snapshot)
    }
}
