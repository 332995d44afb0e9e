//! `eduframe delete` command implementation.

use crate::cli::open_history;
use crate::config::load_config;
use crate::error::{Error, Result};
use crate::history::HistoryStore;

/// Run the delete command.
///
/// # Errors
///
/// Returns an error if no entry has the given id.
pub fn run(id: &str) -> Result<()> {
    let config = load_config()?;
    let mut store = open_history(&config)?;
    delete_entry(&mut store, id)?;
    println!("Deleted {id}");
    Ok(())
}

fn delete_entry(store: &mut HistoryStore, id: &str) -> Result<()> {
    if store.select(id).is_none() {
        return Err(Error::EntryNotFound(id.to_string()));
    }
    store.delete(id, None);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    #[test]
    fn deletes_existing_entry() {
        let mut store = HistoryStore::load(Box::new(MemoryBackend::new()));
        let keep = store.add("keep", "r");
        let gone = store.add("gone", "r");

        delete_entry(&mut store, &gone).unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.select(&keep).is_some());
    }

    #[test]
    fn missing_entry_is_error() {
        let mut store = HistoryStore::load(Box::new(MemoryBackend::new()));
        store.add("keep", "r");

        assert!(matches!(
            delete_entry(&mut store, "missing"),
            Err(Error::EntryNotFound(_))
        ));
        assert_eq!(store.len(), 1);
    }
}
