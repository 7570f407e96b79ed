//! Command implementations.
//!
//! Every command reads a snapshot file, drives [`MemoryStore`] and, when it
//! changed the map, writes the snapshot back. A command that fails leaves
//! the file untouched. Commands return the text to print.

pub mod add;
pub mod config;
pub mod layout;
pub mod new;
pub mod participant;
pub mod reattach;
pub mod remove;
pub mod search;
pub mod show;
pub mod validate;

pub use self::add::execute_add;
pub use self::config::execute_config;
pub use self::layout::execute_layout;
pub use self::new::execute_new;
pub use self::participant::execute_participant;
pub use self::reattach::{execute_reparent, execute_retarget};
pub use self::remove::execute_delete;
pub use self::search::execute_search;
pub use self::show::execute_show;
pub use self::validate::execute_validate;

use crate::config::Config;
use crate::error::Result;
use debatemap_store::{LoadMode, MemoryStore};
use std::fs;
use std::path::Path;

/// Load a map file into a store configured from `config`.
pub fn open_map(path: &Path, config: &Config) -> Result<MemoryStore> {
    let bytes = fs::read(path)?;
    let mut store = MemoryStore::with_config(config.store.clone());
    store.load_json(&bytes, LoadMode::Replace)?;
    tracing::debug!(path = %path.display(), "opened map");
    Ok(store)
}

/// Write a store back to its map file.
pub fn save_map(store: &MemoryStore, path: &Path) -> Result<()> {
    fs::write(path, store.to_json()?)?;
    tracing::debug!(path = %path.display(), "saved map");
    Ok(())
}
