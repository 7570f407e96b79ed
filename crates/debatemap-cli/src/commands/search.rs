//! Search command implementation.

use crate::cli::SearchArgs;
use crate::commands::open_map;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use debatemap_domain::DebateStore;
use debatemap_view::{DisplayMode, Overlay};

/// Execute the search command.
///
/// Collapsed subtrees are searched too.
pub fn execute_search(args: SearchArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let mut store = open_map(&args.map, config)?;
    store.set_all_collapsed(false);

    let projection = store.project(&Overlay::default().with_search(args.query, DisplayMode::Dim));
    let graph = store.graph();
    let hits: Vec<_> = projection
        .hits()
        .iter()
        .filter_map(|id| graph.statement(id))
        .collect();
    formatter.format_statements(graph, &hits)
}
