//! Participant command implementation.

use crate::cli::{ParticipantAction, ParticipantArgs};
use crate::commands::{open_map, save_map};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use debatemap_domain::{DebateStore, ParticipantId};

/// Execute the participant command.
pub fn execute_participant(args: ParticipantArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let mut store = open_map(&args.map, config)?;

    match args.action {
        ParticipantAction::List => formatter.format_participants(store.graph()),
        ParticipantAction::Add { name } => {
            let id = store.add_participant();
            if let Some(name) = name {
                store.update_participant(&id, &name)?;
            }
            save_map(&store, &args.map)?;
            Ok(formatter.outcome(id.as_str(), &format!("Added participant {}", id)))
        }
        ParticipantAction::Rename { id, name } => {
            let id = ParticipantId::from(id);
            store.update_participant(&id, &name)?;
            save_map(&store, &args.map)?;
            Ok(formatter.outcome(id.as_str(), &format!("Renamed {} to {}", id, name)))
        }
    }
}
