//! Reparent and retarget command implementations.

use crate::cli::{ReparentArgs, RetargetArgs};
use crate::commands::{open_map, save_map};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use debatemap_domain::{DebateStore, StatementId};

/// Execute the reparent command.
///
/// The relation follows the child's kind, so a Counter is moved by
/// retargeting its attack and an Argument by rewriting its supports edge.
pub fn execute_reparent(args: ReparentArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let mut store = open_map(&args.map, config)?;
    let child = StatementId::from(args.child);
    let parent = StatementId::from(args.parent);

    let relation = store.reattach(&child, &parent)?;
    save_map(&store, &args.map)?;

    Ok(formatter.outcome(
        relation.as_str(),
        &format!("Moved {} under {}", child, parent),
    ))
}

/// Execute the retarget command.
pub fn execute_retarget(args: RetargetArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let mut store = open_map(&args.map, config)?;
    let source = StatementId::from(args.source);
    let target = StatementId::from(args.target);

    let relation = store.set_relation_target(&source, args.relation.into(), &target)?;
    save_map(&store, &args.map)?;

    Ok(formatter.outcome(
        relation.as_str(),
        &format!("{} now points at {}", source, target),
    ))
}
