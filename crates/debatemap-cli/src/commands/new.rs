//! New command implementation.

use crate::cli::NewArgs;
use crate::commands::save_map;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use debatemap_domain::DebateStore;
use debatemap_store::MemoryStore;

/// Execute the new command.
pub fn execute_new(args: NewArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    if args.map.exists() && !args.force {
        return Err(CliError::AlreadyExists(args.map.display().to_string()));
    }

    let store = MemoryStore::with_config(config.store.clone());
    save_map(&store, &args.map)?;

    let path = args.map.display().to_string();
    Ok(formatter.outcome(
        &path,
        &format!(
            "Created {} with {} participant(s)",
            path,
            store.graph().participants.len()
        ),
    ))
}
