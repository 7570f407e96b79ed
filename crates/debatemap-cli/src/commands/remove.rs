//! Delete command implementation.

use crate::cli::DeleteArgs;
use crate::commands::{open_map, save_map};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use debatemap_domain::{DebateStore, StatementId};

/// Execute the delete command.
///
/// Either every statement is deleted or the file is left as it was.
pub fn execute_delete(args: DeleteArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let mut store = open_map(&args.map, config)?;

    let mut relations = 0;
    for id in &args.ids {
        relations += store.delete_statement(&StatementId::from(id.as_str()))?.len();
    }
    save_map(&store, &args.map)?;

    Ok(formatter.outcome(
        &args.ids.join("\n"),
        &format!(
            "Deleted {} statement(s) and {} relation(s)",
            args.ids.len(),
            relations
        ),
    ))
}
