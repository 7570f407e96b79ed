//! Rule configuration

use serde::{Deserialize, Serialize};

/// Configuration for the attachment rules
///
/// The default is the broad rule set. [`RuleConfig::legacy`] reproduces the
/// older, narrower rules in which Counters and Evidence may only point at
/// Arguments and Counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Allow a Counter to attack an Evidence
    pub counter_may_attack_evidence: bool,

    /// Allow an Evidence to back an Argument Summary
    pub evidence_may_back_summary: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            counter_may_attack_evidence: true,
            evidence_may_back_summary: true,
        }
    }
}

impl RuleConfig {
    /// The older rule set (Counter/Evidence target only Argument/Counter)
    pub fn legacy() -> Self {
        Self {
            counter_may_attack_evidence: false,
            evidence_may_back_summary: false,
        }
    }
}
