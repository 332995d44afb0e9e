//! Storage backends for the history snapshot.

pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use traits::{HISTORY_KEY, SnapshotStore};
