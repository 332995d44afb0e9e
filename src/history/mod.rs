//! Local history of past analyses.

pub mod entry;
pub mod store;

pub use entry::{HistoryEntry, Snapshot};
pub use store::HistoryStore;
