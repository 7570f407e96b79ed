//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Store operation failed
    #[error("{0}")]
    Store(#[from] debatemap_store::StoreError),

    /// Snapshot breaks a graph invariant
    #[error("Invalid map: {0}")]
    Rules(#[from] debatemap_rules::RuleViolation),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Refused to overwrite an existing map
    #[error("{0} already exists (use --force to overwrite)")]
    AlreadyExists(String),
}
