//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use debatemap_domain::{RelationKind, StatementKind, StrengthType};
use std::path::PathBuf;

/// Debatemap CLI - Edit and inspect debate maps stored as snapshot files.
#[derive(Debug, Parser)]
#[command(name = "debatemap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "DEBATEMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log store operations to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new map with the configured seed participants
    New(NewArgs),

    /// Check a map against every graph rule
    Validate(ValidateArgs),

    /// List the statements of a map
    Show(ShowArgs),

    /// Compute node positions
    Layout(LayoutArgs),

    /// Search statement titles and bodies
    Search(SearchArgs),

    /// Add a statement
    Add(AddArgs),

    /// Delete statements and every relation touching them
    Delete(DeleteArgs),

    /// Move a statement under a new parent
    Reparent(ReparentArgs),

    /// Point a statement's relation at a new target
    Retarget(RetargetArgs),

    /// Manage participants
    Participant(ParticipantArgs),

    /// Inspect or write the configuration file
    Config(ConfigArgs),
}

/// Arguments for the new command.
#[derive(Debug, Parser)]
pub struct NewArgs {
    /// Snapshot file to create
    pub map: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Snapshot file
    pub map: PathBuf,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Snapshot file
    pub map: PathBuf,

    /// Only statements of these participants
    #[arg(short, long)]
    pub participant: Vec<String>,

    /// Only statements of these kinds
    #[arg(short, long, value_enum)]
    pub kind: Vec<KindArg>,

    /// Only statements of these strength types (others always pass)
    #[arg(short, long, value_enum)]
    pub strength: Vec<StrengthArg>,

    /// Honour collapsed flags
    #[arg(long)]
    pub collapsed: bool,
}

/// Arguments for the layout command.
#[derive(Debug, Parser)]
pub struct LayoutArgs {
    /// Snapshot file
    pub map: PathBuf,

    /// Only lay out statements matching this search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Store the computed positions in the snapshot file
    #[arg(short, long)]
    pub write: bool,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Snapshot file
    pub map: PathBuf,

    /// Search query; double quotes group phrases
    pub query: String,
}

/// Arguments for the add command.
#[derive(Debug, Parser)]
pub struct AddArgs {
    /// Snapshot file
    pub map: PathBuf,

    /// Statement kind
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Title
    pub title: String,

    /// Owning participant
    #[arg(short, long)]
    pub participant: String,

    /// Parent (Argument) or target (every other non-Thesis kind)
    #[arg(short, long)]
    pub to: Option<String>,

    /// Longer text
    #[arg(short, long)]
    pub body: Option<String>,

    /// Strength type, required for Arguments, Counters and Evidence
    #[arg(short, long, value_enum)]
    pub strength: Option<StrengthArg>,

    /// First mention, typically HH:MM:SS
    #[arg(short = 'm', long)]
    pub first_mention: Option<String>,
}

/// Arguments for the delete command.
#[derive(Debug, Parser)]
pub struct DeleteArgs {
    /// Snapshot file
    pub map: PathBuf,

    /// Statement IDs to delete
    #[arg(required = true)]
    pub ids: Vec<String>,
}

/// Arguments for the reparent command.
#[derive(Debug, Parser)]
pub struct ReparentArgs {
    /// Snapshot file
    pub map: PathBuf,

    /// Statement to move
    pub child: String,

    /// New parent
    pub parent: String,
}

/// Arguments for the retarget command.
#[derive(Debug, Parser)]
pub struct RetargetArgs {
    /// Snapshot file
    pub map: PathBuf,

    /// Source of the relation
    pub source: String,

    /// New target
    pub target: String,

    /// Relation to move
    #[arg(short, long, value_enum, default_value = "attacks")]
    pub relation: RelationArg,
}

/// Arguments for participant management.
#[derive(Debug, Parser)]
pub struct ParticipantArgs {
    /// Snapshot file
    pub map: PathBuf,

    #[command(subcommand)]
    pub action: ParticipantAction,
}

/// Participant management actions.
#[derive(Debug, Subcommand)]
pub enum ParticipantAction {
    /// List all participants
    List,

    /// Register the next participant
    Add {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Rename a participant
    Rename {
        /// Participant ID
        id: String,
        /// New display name
        name: String,
    },
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write the effective configuration to the configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Statement kind argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    /// Top-level claim
    Thesis,
    /// Supports its parent
    Argument,
    /// Restates a Thesis
    Summary,
    /// Attacks an opponent's statement
    Counter,
    /// Backs a statement of the same participant
    Evidence,
    /// Concedes an opponent's statement
    Agreement,
}

/// Strength type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrengthArg {
    /// Type 1
    #[value(name = "1", alias = "type1")]
    Type1,
    /// Type 2
    #[value(name = "2", alias = "type2")]
    Type2,
    /// Type 3
    #[value(name = "3", alias = "type3")]
    Type3,
    /// Type 4
    #[value(name = "4", alias = "type4")]
    Type4,
}

/// Relation argument for retarget; only kinds with a single target qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RelationArg {
    /// Counter attacks target
    Attacks,
    /// Evidence backs target
    EvidenceOf,
    /// Agreement concedes target
    AgreesWith,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<KindArg> for StatementKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Thesis => StatementKind::Thesis,
            KindArg::Argument => StatementKind::Argument,
            KindArg::Summary => StatementKind::ArgumentSummary,
            KindArg::Counter => StatementKind::Counter,
            KindArg::Evidence => StatementKind::Evidence,
            KindArg::Agreement => StatementKind::Agreement,
        }
    }
}

impl From<StrengthArg> for StrengthType {
    fn from(strength: StrengthArg) -> Self {
        match strength {
            StrengthArg::Type1 => StrengthType::Type1,
            StrengthArg::Type2 => StrengthType::Type2,
            StrengthArg::Type3 => StrengthType::Type3,
            StrengthArg::Type4 => StrengthType::Type4,
        }
    }
}

impl From<RelationArg> for RelationKind {
    fn from(relation: RelationArg) -> Self {
        match relation {
            RelationArg::Attacks => RelationKind::Attacks,
            RelationArg::EvidenceOf => RelationKind::EvidenceOf,
            RelationArg::AgreesWith => RelationKind::AgreesWith,
        }
    }
}
