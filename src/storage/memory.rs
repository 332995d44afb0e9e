//! In-memory storage backend.

use crate::error::Result;
use crate::history::Snapshot;
use crate::storage::traits::SnapshotStore;
use std::io;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory storage backend for tests and embedding.
///
/// Keeps the serialized payload rather than the parsed snapshot, so loads
/// go through the same parsing and validation as the file backend.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    payload: RwLock<Option<String>>,
    fail_writes: AtomicBool,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-seeded with a raw payload.
    #[must_use]
    pub fn with_payload(payload: &str) -> Self {
        Self {
            payload: RwLock::new(Some(payload.to_string())),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make subsequent saves fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// The raw stored payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<String> {
        self.payload
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl SnapshotStore for MemoryBackend {
    fn load_snapshot(&self) -> Result<Option<Snapshot>> {
        self.payload()
            .map(|payload| Snapshot::from_json(&payload))
            .transpose()
    }

    fn save_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(io::Error::other("storage unavailable").into());
        }
        let json = snapshot.to_json()?;
        *self
            .payload
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(json);
        Ok(())
    }
}
