//! The in-memory history collection and its persistence.

use crate::history::entry::{HistoryEntry, Snapshot};
use crate::storage::SnapshotStore;
use tracing::{debug, warn};

/// Ordered history of past analyses, newest first.
///
/// Every mutation persists the whole resulting collection as one snapshot
/// before returning. Save failures are logged and the in-memory collection
/// stays authoritative for the rest of the session.
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    backend: Box<dyn SnapshotStore>,
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl HistoryStore {
    /// Restore the collection from `backend`.
    ///
    /// An absent, unreadable or malformed snapshot yields an empty history;
    /// the failure is logged, never returned.
    #[must_use]
    pub fn load(backend: Box<dyn SnapshotStore>) -> Self {
        let entries = match backend.load_snapshot() {
            Ok(Some(snapshot)) => snapshot.entries,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to load history, starting empty");
                Vec::new()
            }
        };
        debug!(count = entries.len(), "history loaded");
        Self { entries, backend }
    }

    /// Record a new analysis at the front of the history and return its id.
    pub fn add(&mut self, topic: &str, response: &str) -> String {
        let entry = HistoryEntry::new(topic, response);
        let id = entry.id.clone();
        self.entries.insert(0, entry);
        debug!(%id, "history entry added");
        self.persist();
        id
    }

    /// Look up an entry by id. A miss is not an error.
    #[must_use]
    pub fn select(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Remove the entry with `id`, if any, and persist.
    ///
    /// Returns `true` if `id` is the caller's `active` entry, so the caller
    /// knows to clear its selection.
    pub fn delete(&mut self, id: &str, active: Option<&str>) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() != before {
            debug!(%id, "history entry deleted");
        }
        self.persist();
        active == Some(id)
    }

    /// Remove every entry and persist the empty collection.
    pub fn clear(&mut self) {
        self.entries.clear();
        debug!("history cleared");
        self.persist();
    }

    /// Entries whose topic contains `term`, ignoring case.
    ///
    /// A blank term returns every entry. Order is preserved.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&HistoryEntry> {
        if term.trim().is_empty() {
            return self.entries.iter().collect();
        }
        let needle = term.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.topic.to_lowercase().contains(&needle))
            .collect()
    }

    /// All entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) {
        let snapshot = Snapshot::new(self.entries.clone());
        if let Err(e) = self.backend.save_snapshot(&snapshot) {
            warn!(error = %e, "failed to save history");
        }
    }
}
