//! `eduframe clear` command implementation.

use crate::cli::open_history;
use crate::config::load_config;
use crate::error::Result;

/// Run the clear command. Removes every saved analysis.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the storage
/// directory cannot be created.
pub fn run() -> Result<()> {
    let config = load_config()?;
    let mut store = open_history(&config)?;
    let removed = store.len();
    store.clear();
    println!("Cleared {removed} entries");
    Ok(())
}
