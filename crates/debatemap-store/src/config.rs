//! Store configuration

use debatemap_rules::RuleConfig;
use serde::{Deserialize, Serialize};

/// Configuration of a [`MemoryStore`](crate::MemoryStore)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Attachment rule set
    pub rules: RuleConfig,

    /// Let `add_argument` without a parent create a Thesis when the
    /// participant has none; when off the call fails with `NotFound`
    pub implicit_thesis: bool,

    /// Participants (each with one Thesis) a fresh store starts with
    pub seed_participants: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            rules: RuleConfig::default(),
            implicit_thesis: true,
            seed_participants: 2,
        }
    }
}

impl StoreConfig {
    /// Older, narrower rule set and no implicit Thesis creation
    pub fn strict() -> Self {
        Self {
            rules: RuleConfig::legacy(),
            implicit_thesis: false,
            ..Default::default()
        }
    }

    /// An empty store: no participants, no theses
    pub fn empty() -> Self {
        Self {
            seed_participants: 0,
            ..Default::default()
        }
    }
}
