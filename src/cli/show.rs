//! `eduframe show` command implementation.

use crate::cli::display::{format_blocks, format_date};
use crate::cli::{open_history, styled_stdout};
use crate::config::load_config;
use crate::error::{Error, Result};
use crate::history::HistoryStore;
use crate::markdown::render;

/// Run the show command.
///
/// Prints a saved analysis in full.
///
/// # Errors
///
/// Returns an error if no entry has the given id.
pub fn run(id: &str) -> Result<()> {
    let config = load_config()?;
    let store = open_history(&config)?;
    print!("{}", show_entry(&store, id, styled_stdout())?);
    Ok(())
}

fn show_entry(store: &HistoryStore, id: &str, styled: bool) -> Result<String> {
    let entry = store
        .select(id)
        .ok_or_else(|| Error::EntryNotFound(id.to_string()))?;

    let mut out = format!("{} ({})\n\n", entry.topic, format_date(entry.timestamp));
    out.push_str(&format_blocks(&render(&entry.response), styled));
    Ok(out)
}
