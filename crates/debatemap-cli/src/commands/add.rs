//! Add command implementation.

use crate::cli::{AddArgs, KindArg};
use crate::commands::{open_map, save_map};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use debatemap_domain::{DebateStore, NewStatement, StatementId, StatementKind};

/// Execute the add command.
pub fn execute_add(args: AddArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let mut store = open_map(&args.map, config)?;

    let mut draft = NewStatement::new(args.participant.into(), args.title);
    if let Some(body) = args.body {
        draft = draft.with_body(body);
    }
    if let Some(first_mention) = args.first_mention {
        draft = draft.with_first_mention(first_mention);
    }
    draft.strength = args.strength.map(Into::into);

    let to = args.to.map(StatementId::from);
    let kind = StatementKind::from(args.kind);
    let target = || {
        to.as_ref()
            .ok_or_else(|| CliError::InvalidInput(format!("a {} needs --to", kind)))
    };

    let id = match args.kind {
        KindArg::Thesis => {
            if to.is_some() {
                return Err(CliError::InvalidInput("a Thesis has no parent".to_string()));
            }
            store.add_thesis(draft)?
        }
        KindArg::Argument => store.add_argument(draft, to.as_ref())?,
        KindArg::Summary => store.add_argument_summary(draft, target()?)?,
        KindArg::Counter => store.add_counter(draft, target()?)?,
        KindArg::Evidence => store.add_evidence(draft, target()?)?,
        KindArg::Agreement => store.add_agreement(draft, target()?)?,
    };
    save_map(&store, &args.map)?;

    Ok(formatter.outcome(id.as_str(), &format!("Added {} {}", kind, id)))
}
