//! Validate command implementation.

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use debatemap_rules::RuleChecker;
use debatemap_store::{LoadMode, Snapshot};
use std::fs;

/// Execute the validate command.
///
/// Checks the file under the configured rule set, which may be narrower than
/// the one the map was written with.
pub fn execute_validate(args: ValidateArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let bytes = fs::read(&args.map)?;
    let graph = Snapshot::from_json_slice(&bytes)?.into_graph(LoadMode::Replace)?;
    RuleChecker::new(config.store.rules.clone()).audit(&graph)?;

    Ok(formatter.outcome(
        &args.map.display().to_string(),
        &format!(
            "{} is valid: {} statement(s), {} relation(s), {} participant(s)",
            args.map.display(),
            graph.statements.len(),
            graph.relations.len(),
            graph.participants.len()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{open_map, save_map, testing};
    use crate::error::CliError;
    use debatemap_domain::{DebateStore, NewStatement, StrengthType};
    use debatemap_rules::RuleConfig;

    #[test]
    fn test_fresh_map_is_valid() {
        let (_dir, map) = testing::fresh_map();
        let output = execute_validate(ValidateArgs { map }, &Config::default(), &testing::plain()).unwrap();
        assert!(output.contains("2 statement(s)"));
    }

    #[test]
    fn test_legacy_rules_reject_counter_on_evidence() {
        let (_dir, map) = testing::fresh_map();
        let mut store = open_map(&map, &Config::default()).unwrap();
        let arg = store
            .add_argument(NewStatement::new("A".into(), "X").with_strength(StrengthType::Type1), None)
            .unwrap();
        let evidence = store
            .add_evidence(NewStatement::new("A".into(), "E").with_strength(StrengthType::Type1), &arg)
            .unwrap();
        store
            .add_counter(NewStatement::new("B".into(), "C").with_strength(StrengthType::Type1), &evidence)
            .unwrap();
        save_map(&store, &map).unwrap();

        let mut legacy = Config::default();
        legacy.store.rules = RuleConfig::legacy();
        let err = execute_validate(ValidateArgs { map }, &legacy, &testing::plain()).unwrap_err();
        assert!(matches!(err, CliError::Rules(_)), "got {:?}", err);
    }

    #[test]
    fn test_garbage_is_rejected() {
        let (_dir, map) = testing::fresh_map();
        fs::write(&map, b"{\"version\": 7}").unwrap();
        let err = execute_validate(ValidateArgs { map }, &Config::default(), &testing::plain()).unwrap_err();
        assert!(matches!(err, CliError::Store(_)));
    }
}
