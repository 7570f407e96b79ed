//! Trait definitions for external interactions
//!
//! These traits define the boundary between the domain model and the
//! constraint-checked store that owns it. Implementations live in other crates.

use crate::{
    DebateGraph, NewStatement, ParticipantId, RelationId, RelationKind, StatementId, StatementPatch,
};

/// The single mutation facade over a debate graph
///
/// Implemented by the infrastructure layer (debatemap-store). Every method is
/// all-or-nothing: on error the graph is left untouched.
pub trait DebateStore {
    /// Error type for store operations
    type Error;

    /// Read-only view of the current graph
    fn graph(&self) -> &DebateGraph;

    /// Add a Thesis
    fn add_thesis(&mut self, draft: NewStatement) -> Result<StatementId, Self::Error>;

    /// Add an Argument under `parent`, or under the participant's default Thesis
    fn add_argument(
        &mut self,
        draft: NewStatement,
        parent: Option<&StatementId>,
    ) -> Result<StatementId, Self::Error>;

    /// Add a Counter attacking `target`
    fn add_counter(
        &mut self,
        draft: NewStatement,
        target: &StatementId,
    ) -> Result<StatementId, Self::Error>;

    /// Add an Evidence backing `target`
    fn add_evidence(
        &mut self,
        draft: NewStatement,
        target: &StatementId,
    ) -> Result<StatementId, Self::Error>;

    /// Add an Agreement conceding `target`
    fn add_agreement(
        &mut self,
        draft: NewStatement,
        target: &StatementId,
    ) -> Result<StatementId, Self::Error>;

    /// Add the Argument Summary of `thesis`
    fn add_argument_summary(
        &mut self,
        draft: NewStatement,
        thesis: &StatementId,
    ) -> Result<StatementId, Self::Error>;

    /// Apply a partial update to a statement
    fn update_statement(
        &mut self,
        id: &StatementId,
        patch: StatementPatch,
    ) -> Result<(), Self::Error>;

    /// Delete a statement and every incident relation, returning the removed relation ids
    fn delete_statement(&mut self, id: &StatementId) -> Result<Vec<RelationId>, Self::Error>;

    /// Re-parent an Argument or Argument Summary
    fn set_supports_parent(
        &mut self,
        child: &StatementId,
        new_parent: &StatementId,
    ) -> Result<RelationId, Self::Error>;

    /// Re-target the `attacks`, `evidence-of` or `agrees-with` relation of `source`
    fn set_relation_target(
        &mut self,
        source: &StatementId,
        kind: RelationKind,
        new_target: &StatementId,
    ) -> Result<RelationId, Self::Error>;

    /// Replace the `t2-link` set of `source`
    fn set_t2_links(
        &mut self,
        source: &StatementId,
        targets: &[StatementId],
    ) -> Result<Vec<RelationId>, Self::Error>;

    /// Extend the `t2-link` set of `source`
    fn add_t2_links(
        &mut self,
        source: &StatementId,
        targets: &[StatementId],
    ) -> Result<Vec<RelationId>, Self::Error>;

    /// Replace the `refers-to` set of `source`
    fn set_ref_links(
        &mut self,
        source: &StatementId,
        targets: &[StatementId],
    ) -> Result<Vec<RelationId>, Self::Error>;

    /// Extend the `refers-to` set of `source`
    fn add_ref_links(
        &mut self,
        source: &StatementId,
        targets: &[StatementId],
    ) -> Result<Vec<RelationId>, Self::Error>;

    /// Set `collapsed` on every statement
    fn set_all_collapsed(&mut self, collapsed: bool);

    /// Register a new participant with the next free letter id
    fn add_participant(&mut self) -> ParticipantId;

    /// Rename a participant
    fn update_participant(&mut self, id: &ParticipantId, name: &str) -> Result<(), Self::Error>;
}
