//! Show command implementation.

use crate::cli::ShowArgs;
use crate::commands::open_map;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use debatemap_domain::{DebateStore, Statement};
use debatemap_view::{DisplayMode, Filters, Overlay};

/// Execute the show command.
pub fn execute_show(args: ShowArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let mut store = open_map(&args.map, config)?;
    if !args.collapsed {
        store.set_all_collapsed(false);
    }

    let filters = Filters {
        participants: args.participant.into_iter().map(Into::into).collect(),
        kinds: args.kind.into_iter().map(Into::into).collect(),
        strengths: args.strength.into_iter().map(Into::into).collect(),
    };
    let projection = store.project(&Overlay::default().with_filters(filters, DisplayMode::Hide));

    let graph = store.graph();
    let statements: Vec<&Statement> = graph
        .statements
        .iter()
        .filter(|s| projection.is_visible(&s.id))
        .collect();
    formatter.format_statements(graph, &statements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::KindArg;
    use crate::commands::{save_map, testing};
    use debatemap_domain::{NewStatement, StatementId, StatementPatch, StrengthType};

    fn args(map: std::path::PathBuf) -> ShowArgs {
        ShowArgs {
            map,
            participant: Vec::new(),
            kind: Vec::new(),
            strength: Vec::new(),
            collapsed: false,
        }
    }

    #[test]
    fn test_filters_hide_statements() {
        let (_dir, map) = testing::fresh_map();
        let mut store = open_map(&map, &Config::default()).unwrap();
        let arg = store
            .add_argument(NewStatement::new("A".into(), "X").with_strength(StrengthType::Type1), None)
            .unwrap();
        save_map(&store, &map).unwrap();

        let mut only_arguments = args(map.clone());
        only_arguments.kind = vec![KindArg::Argument];
        let output = execute_show(only_arguments, &Config::default(), &testing::quiet()).unwrap();
        assert_eq!(output, arg.to_string());

        let mut only_b = args(map);
        only_b.participant = vec!["B".to_string()];
        let output = execute_show(only_b, &Config::default(), &testing::quiet()).unwrap();
        assert_eq!(output, "thesisB");
    }

    #[test]
    fn test_collapsed_flag() {
        let (_dir, map) = testing::fresh_map();
        let mut store = open_map(&map, &Config::default()).unwrap();
        store
            .add_argument(NewStatement::new("A".into(), "X").with_strength(StrengthType::Type1), None)
            .unwrap();
        let patch = StatementPatch {
            collapsed: Some(true),
            ..Default::default()
        };
        store.update_statement(&StatementId::from("thesisA"), patch).unwrap();
        save_map(&store, &map).unwrap();

        let expanded = execute_show(args(map.clone()), &Config::default(), &testing::quiet()).unwrap();
        assert_eq!(expanded.lines().count(), 3);

        let mut collapsed = args(map);
        collapsed.collapsed = true;
        let output = execute_show(collapsed, &Config::default(), &testing::quiet()).unwrap();
        assert_eq!(output.lines().collect::<Vec<_>>(), vec!["thesisA", "thesisB"]);
    }
}
