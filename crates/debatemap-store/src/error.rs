//! Store error types

use debatemap_rules::RuleViolation;
use thiserror::Error;

/// Errors that can occur during store operations
///
/// Every failing operation leaves the store untouched.
#[derive(Error, Debug)]
pub enum StoreError {
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

    /// The snapshot version or shape is not recognized
    #[error("Unsupported snapshot: {0}")]
    UnsupportedSnapshot(String),

    /// Snapshot bytes could not be produced
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<RuleViolation> for StoreError {
    fn from(violation: RuleViolation) -> Self {
        match violation {
            RuleViolation::Constraint(reason) => StoreError::Constraint(reason),
            RuleViolation::NotFound(reason) => StoreError::NotFound(reason),
            RuleViolation::Cycle(reason) => StoreError::Cycle(reason),
            RuleViolation::DuplicateSummary(reason) => StoreError::DuplicateSummary(reason),
        }
    }
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
