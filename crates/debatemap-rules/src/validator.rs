//! Constraint predicates for proposed relations

use crate::{RuleConfig, RuleResult, RuleViolation};
use debatemap_domain::{
    DebateGraph, ParticipantId, RelationKind, Statement, StatementId, StatementKind, StrengthType,
};

/// The statement on the child side of a proposed hierarchical relation
///
/// `id` is `None` while the statement is still being created; an existing
/// statement (re-parenting, re-targeting, auditing) carries its id so that
/// cycles and duplicate summaries are checked against it.
#[derive(Debug, Clone, Copy)]
pub struct ChildRef<'a> {
    /// Kind of the child
    pub kind: StatementKind,
    /// Owner of the child
    pub participant: &'a ParticipantId,
    /// Id of the child, if it already exists
    pub id: Option<&'a StatementId>,
}

impl<'a> ChildRef<'a> {
    /// A child that does not exist yet
    pub fn new(kind: StatementKind, participant: &'a ParticipantId) -> Self {
        Self {
            kind,
            participant,
            id: None,
        }
    }

    /// An existing statement as child
    pub fn existing(statement: &'a Statement) -> Self {
        Self {
            kind: statement.kind,
            participant: &statement.participant,
            id: Some(&statement.id),
        }
    }
}

/// Checks proposed changes against the attachment rules
#[derive(Debug, Clone, Default)]
pub struct RuleChecker {
    config: RuleConfig,
}

impl RuleChecker {
    /// Create a checker with the given configuration
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    /// Create a checker with the default (broad) rule set
    pub fn default_config() -> Self {
        Self::new(RuleConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Look up a statement or fail with `NotFound`
    pub fn require_statement<'g>(
        &self,
        graph: &'g DebateGraph,
        id: &StatementId,
    ) -> RuleResult<&'g Statement> {
        graph
            .statement(id)
            .ok_or_else(|| RuleViolation::NotFound(format!("statement '{}' does not exist", id)))
    }

    /// Fail with `NotFound` unless the participant is registered
    pub fn require_participant(&self, graph: &DebateGraph, id: &ParticipantId) -> RuleResult {
        if graph.participant(id).is_none() {
            return Err(RuleViolation::NotFound(format!(
                "participant '{}' does not exist",
                id
            )));
        }
        Ok(())
    }

    /// Strength type must be present iff the kind requires one
    pub fn check_strength(&self, kind: StatementKind, strength: Option<StrengthType>) -> RuleResult {
        match (kind.requires_strength(), strength) {
            (true, None) => Err(RuleViolation::Constraint(format!(
                "a {} requires a strength type",
                kind
            ))),
            (false, Some(strength)) => Err(RuleViolation::Constraint(format!(
                "a {} cannot carry a strength type ({} given)",
                kind, strength
            ))),
            _ => Ok(()),
        }
    }

    /// Check that `child` may hang below `parent`
    ///
    /// The relation kind is implied by the child's kind. Order of checks:
    /// existence, cycles, parent kind, owners, summary uniqueness.
    pub fn check_attachment(
        &self,
        graph: &DebateGraph,
        child: ChildRef<'_>,
        parent: &StatementId,
    ) -> RuleResult {
        let parent_statement = self.require_statement(graph, parent)?;

        if let Some(child_id) = child.id {
            if child_id == parent {
                return Err(RuleViolation::Cycle(format!(
                    "statement '{}' cannot be attached to itself",
                    child_id
                )));
            }
            if graph.is_descendant(parent, child_id) {
                return Err(RuleViolation::Cycle(format!(
                    "'{}' is a descendant of '{}'",
                    parent, child_id
                )));
            }
        }

        let relation = child.kind.parent_relation().ok_or_else(|| {
            RuleViolation::Constraint(format!("a {} cannot have a parent", child.kind))
        })?;

        let allowed = self.allowed_parent_kinds(child.kind);
        if !allowed.contains(&parent_statement.kind) {
            return Err(RuleViolation::Constraint(format!(
                "a {} cannot be attached to a {} with {}",
                child.kind, parent_statement.kind, relation
            )));
        }

        let same_owner = child.participant == &parent_statement.participant;
        if Self::requires_same_participant(relation) && !same_owner {
            return Err(RuleViolation::Constraint(format!(
                "a {} must belong to the same participant as its parent (parent '{}' belongs to {})",
                child.kind, parent, parent_statement.participant
            )));
        }
        if !Self::requires_same_participant(relation) && same_owner {
            return Err(RuleViolation::Constraint(format!(
                "a {} must target a statement of another participant ('{}' belongs to {})",
                child.kind, parent, parent_statement.participant
            )));
        }

        if child.kind == StatementKind::ArgumentSummary {
            let other = graph
                .summaries_of(parent)
                .find(|summary| Some(&summary.id) != child.id);
            if let Some(other) = other {
                return Err(RuleViolation::DuplicateSummary(format!(
                    "thesis '{}' already has argument summary '{}'",
                    parent, other.id
                )));
            }
        }

        Ok(())
    }

    /// Check an existing hierarchical relation between `source` and `target`
    ///
    /// The relation kind must match the kind of its child endpoint, and the
    /// attachment rules must hold.
    pub fn check_relation(
        &self,
        graph: &DebateGraph,
        kind: RelationKind,
        source: &StatementId,
        target: &StatementId,
    ) -> RuleResult {
        if kind.is_peer() {
            return self.check_peer(graph, kind, source, target);
        }

        // `supports` runs parent -> child, the others child -> parent.
        let (parent, child) = match kind {
            RelationKind::Supports => (source, target),
            _ => (target, source),
        };

        let child_statement = self.require_statement(graph, child)?;
        self.require_statement(graph, parent)?;

        if child_statement.kind.parent_relation() != Some(kind) {
            return Err(RuleViolation::Constraint(format!(
                "a {} cannot be the child of a {} relation",
                child_statement.kind, kind
            )));
        }

        self.check_attachment(graph, ChildRef::existing(child_statement), parent)
    }

    /// Check a peer link between `a` and `b`
    pub fn check_peer(
        &self,
        graph: &DebateGraph,
        kind: RelationKind,
        a: &StatementId,
        b: &StatementId,
    ) -> RuleResult {
        if !kind.is_peer() {
            return Err(RuleViolation::Constraint(format!(
                "{} is not a peer relation",
                kind
            )));
        }

        let first = self.require_statement(graph, a)?;
        let second = self.require_statement(graph, b)?;

        if a == b {
            return Err(RuleViolation::Constraint(format!(
                "a {} needs two distinct statements ('{}' given twice)",
                kind, a
            )));
        }

        if kind == RelationKind::T2Link {
            if first.kind != second.kind {
                return Err(RuleViolation::Constraint(format!(
                    "a t2-link joins statements of the same kind ({} and {} given)",
                    first.kind, second.kind
                )));
            }
            if !first.kind.requires_strength() {
                return Err(RuleViolation::Constraint(format!(
                    "a t2-link cannot join statements of kind {}",
                    first.kind
                )));
            }
            if first.participant != second.participant {
                return Err(RuleViolation::Constraint(
                    "a t2-link joins statements of the same participant".to_string(),
                ));
            }
            if !first.is_t2_candidate() || !second.is_t2_candidate() {
                return Err(RuleViolation::Constraint(
                    "a t2-link joins only Type 2 statements".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Parent kinds a child of `kind` may attach to under the active configuration
    pub fn allowed_parent_kinds(&self, kind: StatementKind) -> Vec<StatementKind> {
        use StatementKind::*;
        match kind {
            Thesis => vec![],
            Argument => vec![Thesis, Argument, Counter, Evidence],
            ArgumentSummary => vec![Thesis],
            Counter => {
                let mut kinds = vec![Argument, Counter];
                if self.config.counter_may_attack_evidence {
                    kinds.push(Evidence);
                }
                kinds
            }
            Evidence => {
                let mut kinds = vec![Argument, Counter];
                if self.config.evidence_may_back_summary {
                    kinds.push(ArgumentSummary);
                }
                kinds
            }
            Agreement => vec![Argument, Counter],
        }
    }

    /// Whether parent and child of this relation must share an owner
    pub fn requires_same_participant(kind: RelationKind) -> bool {
        match kind {
            RelationKind::Supports | RelationKind::EvidenceOf => true,
            RelationKind::Attacks | RelationKind::AgreesWith => false,
            RelationKind::T2Link => true,
            RelationKind::RefersTo => false,
        }
    }
}
