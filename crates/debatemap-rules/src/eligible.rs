//! Candidate targets for attachment mode

use crate::{ChildRef, RuleChecker, RuleResult};
use debatemap_domain::{DebateGraph, ParticipantId, RelationKind, StatementId, StatementKind};

impl RuleChecker {
    /// Statements an existing statement could be re-attached to
    ///
    /// Used to fill the eligible-target set when the user is asked to pick a
    /// new parent or target. The current parent is included.
    pub fn eligible_parents(&self, graph: &DebateGraph, id: &StatementId) -> RuleResult<Vec<StatementId>> {
        let statement = self.require_statement(graph, id)?;
        let child = ChildRef::existing(statement);
        Ok(graph
            .statements
            .iter()
            .filter(|candidate| &candidate.id != id)
            .filter(|candidate| self.check_attachment(graph, child, &candidate.id).is_ok())
            .map(|candidate| candidate.id.clone())
            .collect())
    }

    /// Statements a new statement of `kind` owned by `participant` could attach to
    pub fn eligible_targets(
        &self,
        graph: &DebateGraph,
        kind: StatementKind,
        participant: &ParticipantId,
    ) -> Vec<StatementId> {
        let child = ChildRef::new(kind, participant);
        graph
            .statements
            .iter()
            .filter(|candidate| self.check_attachment(graph, child, &candidate.id).is_ok())
            .map(|candidate| candidate.id.clone())
            .collect()
    }

    /// Statements `source` could be linked to with a peer relation of `kind`
    pub fn eligible_peers(
        &self,
        graph: &DebateGraph,
        kind: RelationKind,
        source: &StatementId,
    ) -> RuleResult<Vec<StatementId>> {
        self.require_statement(graph, source)?;
        Ok(graph
            .statements
            .iter()
            .filter(|candidate| &candidate.id != source)
            .filter(|candidate| self.check_peer(graph, kind, source, &candidate.id).is_ok())
            .map(|candidate| candidate.id.clone())
            .collect())
    }
}
