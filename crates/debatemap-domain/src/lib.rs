//! Debatemap Domain Layer
//!
//! This crate contains the core vocabulary of a debate map: typed statements,
//! typed relations between them, and the participants who own them. It keeps
//! external dependencies to `uuid` alone and defines the read model and trait
//! interface that the rule, view, layout and store crates build upon.
//!
//! ## Key Concepts
//!
//! - **Statement**: A node of the map (Thesis, Argument, Argument Summary,
//!   Counter, Evidence, Agreement), owned by exactly one participant
//! - **Relation**: A typed edge. Hierarchical kinds (`supports`, `attacks`,
//!   `evidence-of`, `agrees-with`) define parent/child; peer kinds
//!   (`t2-link`, `refers-to`) are undirected decoration
//! - **Participant**: A party to the debate, identified by a short letter id
//! - **DebateGraph**: The read model every other layer queries
//!
//! ## Architecture
//!
//! - Pure data and queries only; no I/O, no logging
//! - Mutation goes through an implementation of [`traits::DebateStore`]
//!   (see `debatemap-store`), which enforces the invariants

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod graph;
pub mod id;
pub mod palette;
pub mod participant;
pub mod relation;
pub mod statement;
pub mod timestamp;
pub mod traits;

// Re-exports for convenience
pub use graph::DebateGraph;
pub use id::{ParticipantId, RelationId, StatementId};
pub use palette::{color_for_index, PALETTE};
pub use participant::Participant;
pub use relation::{Relation, RelationKind};
pub use statement::{NewStatement, Statement, StatementKind, StatementPatch, StrengthType};
pub use timestamp::{format_timestamp, parse_timestamp};
pub use traits::DebateStore;
