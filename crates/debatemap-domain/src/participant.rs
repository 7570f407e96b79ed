//! Participant module - the parties to a debate

use crate::ParticipantId;

/// A participant in the debate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Short letter identifier (`A`, `B`, ...)
    pub id: ParticipantId,

    /// Display name
    pub name: String,
}

impl Participant {
    /// Create a new participant
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Default display name for a freshly added participant
    pub fn default_name(id: &ParticipantId) -> String {
        format!("Participant {}", id)
    }
}
