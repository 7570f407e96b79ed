//! Debatemap CLI library.
//!
//! A scripted driver over debate-map snapshot files. Each command loads a
//! file into a [`debatemap_store::MemoryStore`], runs one store operation and
//! writes the result back; the CLI itself adds no graph semantics.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
