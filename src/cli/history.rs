//! `eduframe history` command implementation.

use crate::cli::display::format_history;
use crate::cli::open_history;
use crate::config::load_config;
use crate::error::Result;
use crate::history::HistoryStore;

/// Default number of entries to show.
const DEFAULT_LIMIT: usize = 20;

/// Run the history command.
///
/// Lists saved analyses, newest first, optionally filtered by a
/// case-insensitive topic search.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the storage
/// directory cannot be created.
pub fn run(search: Option<&str>, limit: Option<usize>) -> Result<()> {
    let config = load_config()?;
    let store = open_history(&config)?;
    print!("{}", listing(&store, search, limit.unwrap_or(DEFAULT_LIMIT)));
    Ok(())
}

fn listing(store: &HistoryStore, search: Option<&str>, limit: usize) -> String {
    if limit == 0 {
        return String::new();
    }
    let mut matches = store.search(search.unwrap_or_default());
    matches.truncate(limit);
    format_history(&matches, search, store.len())
}
