//! Layout command implementation.

use crate::cli::LayoutArgs;
use crate::commands::open_map;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use debatemap_view::{DisplayMode, Overlay};
use std::fs;

/// Execute the layout command.
pub fn execute_layout(args: LayoutArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let store = open_map(&args.map, config)?;
    let overlay = match args.search {
        Some(query) => Overlay::default().with_search(query, DisplayMode::Hide),
        None => Overlay::default(),
    };
    let layout = store.layout(&overlay, &config.layout);

    if args.write {
        let mut snapshot = store.snapshot();
        snapshot.attach_positions(&layout);
        fs::write(&args.map, snapshot.to_json_bytes()?)?;
        tracing::debug!(positions = layout.len(), "stored positions");
    }

    formatter.format_layout(&layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing;
    use debatemap_store::Snapshot;

    #[test]
    fn test_roots_side_by_side() {
        let (_dir, map) = testing::fresh_map();
        let args = LayoutArgs {
            map,
            search: None,
            write: false,
        };
        let output = execute_layout(args, &Config::default(), &testing::quiet()).unwrap();
        // thesisA, then thesisB one node width plus two gaps to the right
        assert_eq!(output, "thesisA 0 0\nthesisB 440 0");
    }

    #[test]
    fn test_write_positions() {
        let (_dir, map) = testing::fresh_map();
        let args = LayoutArgs {
            map: map.clone(),
            search: Some("nothing matches this".to_string()),
            write: true,
        };
        let output = execute_layout(args, &Config::default(), &testing::quiet()).unwrap();
        assert!(output.is_empty());

        let args = LayoutArgs {
            map: map.clone(),
            search: None,
            write: true,
        };
        execute_layout(args, &Config::default(), &testing::quiet()).unwrap();
        let snapshot = Snapshot::from_json_slice(&fs::read(&map).unwrap()).unwrap();
        assert!(snapshot.nodes.iter().all(|node| node.position.is_some()));

        // Positions are advisory: the map still opens.
        assert!(open_map(&map, &Config::default()).is_ok());
    }
}
