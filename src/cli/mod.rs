//! CLI command implementations.

pub mod analyze;
pub mod clear;
pub mod delete;
pub mod display;
pub mod history;
pub mod render;
pub mod show;

use crate::config::Config;
use crate::error::Result;
use crate::history::HistoryStore;
use crate::storage::FileBackend;
use std::io::IsTerminal;

/// Open the history store at the configured storage path.
///
/// # Errors
///
/// Returns an error if the storage directory cannot be created.
pub fn open_history(config: &Config) -> Result<HistoryStore> {
    let backend = FileBackend::new(config.storage.path.clone())?;
    Ok(HistoryStore::load(Box::new(backend)))
}

/// Whether stdout is a terminal that should get ANSI styling.
fn styled_stdout() -> bool {
    std::io::stdout().is_terminal()
}
