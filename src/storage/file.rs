//! File-based storage backend.

use crate::error::Result;
use crate::history::Snapshot;
use crate::storage::traits::{HISTORY_KEY, SnapshotStore};
use std::fs;
use std::path::PathBuf;

/// File-based storage backend with atomic writes.
#[derive(Debug)]
pub struct FileBackend {
    base_dir: PathBuf,
}

impl FileBackend {
    /// Create a new file backend.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Path to the snapshot file.
    #[must_use]
    pub fn snapshot_path(&self) -> PathBuf {
        self.base_dir.join(format!("{HISTORY_KEY}.json"))
    }
}

impl SnapshotStore for FileBackend {
    fn load_snapshot(&self) -> Result<Option<Snapshot>> {
        let path = self.snapshot_path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        Ok(Some(Snapshot::from_json(&contents)?))
    }

    fn save_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        let path = self.snapshot_path();
        let temp = path.with_extension("tmp");

        fs::write(&temp, snapshot.to_json()?)?;

        // Rename is atomic, readers never see a half-written snapshot
        fs::rename(&temp, &path)?;

        Ok(())
    }
}
