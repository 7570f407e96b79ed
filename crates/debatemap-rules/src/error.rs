//! Rule violation types

use thiserror::Error;

/// A broken constraint, carrying a human-readable sentence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    /// A kind or participant rule forbids the change
    #[error("Constraint violated: {0}")]
    Constraint(String),

    /// A referenced statement, relation or participant does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The change would create a cycle in the hierarchy
    #[error("Cycle: {0}")]
    Cycle(String),

    /// The Thesis already has an Argument Summary
    #[error("Duplicate summary: {0}")]
    DuplicateSummary(String),
}

impl RuleViolation {
    /// The sentence describing the violation, without the category prefix
    pub fn reason(&self) -> &str {
        match self {
            RuleViolation::Constraint(reason)
            | RuleViolation::NotFound(reason)
            | RuleViolation::Cycle(reason)
            | RuleViolation::DuplicateSummary(reason) => reason,
        }
    }
}
