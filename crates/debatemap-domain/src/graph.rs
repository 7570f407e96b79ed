//! Debate graph read model
//!
//! [`DebateGraph`] holds participants, statements and relations side by side
//! and answers the structural queries the rule, view and layout layers need.
//! Hierarchical relations are read through [`Relation::parent_child`]; peer
//! relations never contribute to parentage.

use crate::{
    color_for_index, Participant, ParticipantId, Relation, RelationId, RelationKind, Statement,
    StatementId, StatementKind,
};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// The full debate graph: participants, statements and relations
///
/// Insertion order of every collection is meaningful: it is the order used
/// in snapshots and the tie-breaker wherever a query picks "the first" match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebateGraph {
    /// Registered participants, in registration order
    pub participants: Vec<Participant>,

    /// Statements, in creation order
    pub statements: Vec<Statement>,

    /// Relations, in creation order
    pub relations: Vec<Relation>,
}

impl DebateGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a statement
    pub fn statement(&self, id: &StatementId) -> Option<&Statement> {
        self.statements.iter().find(|s| &s.id == id)
    }

    /// Look up a statement mutably
    pub fn statement_mut(&mut self, id: &StatementId) -> Option<&mut Statement> {
        self.statements.iter_mut().find(|s| &s.id == id)
    }

    /// Whether a statement with this id exists
    pub fn contains_statement(&self, id: &StatementId) -> bool {
        self.statement(id).is_some()
    }

    /// Look up a relation
    pub fn relation(&self, id: &RelationId) -> Option<&Relation> {
        self.relations.iter().find(|r| &r.id == id)
    }

    /// Look up a relation mutably
    pub fn relation_mut(&mut self, id: &RelationId) -> Option<&mut Relation> {
        self.relations.iter_mut().find(|r| &r.id == id)
    }

    /// Look up a participant
    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.id == id)
    }

    /// Look up a participant mutably
    pub fn participant_mut(&mut self, id: &ParticipantId) -> Option<&mut Participant> {
        self.participants.iter_mut().find(|p| &p.id == id)
    }

    /// Registry position of a participant
    pub fn participant_index(&self, id: &ParticipantId) -> Option<usize> {
        self.participants.iter().position(|p| &p.id == id)
    }

    /// Palette color of a participant (by registry position)
    pub fn participant_color(&self, id: &ParticipantId) -> Option<&'static str> {
        self.participant_index(id).map(color_for_index)
    }

    /// The hierarchical relation attaching `child` to its parent
    ///
    /// A well-formed graph has at most one.
    pub fn parent_relation(&self, child: &StatementId) -> Option<&Relation> {
        self.relations.iter().find(|r| r.child() == Some(child))
    }

    /// The hierarchical parent of `child`
    pub fn parent_of(&self, child: &StatementId) -> Option<&StatementId> {
        self.parent_relation(child).and_then(Relation::parent)
    }

    /// Hierarchical children of `parent`, in relation order
    pub fn children_of(&self, parent: &StatementId) -> Vec<&Statement> {
        self.relations
            .iter()
            .filter(|r| r.parent() == Some(parent))
            .filter_map(|r| r.child().and_then(|c| self.statement(c)))
            .collect()
    }

    /// Child lists of every parent, restricted to extant endpoints
    pub fn child_map(&self) -> BTreeMap<StatementId, Vec<StatementId>> {
        let mut map: BTreeMap<StatementId, Vec<StatementId>> = BTreeMap::new();
        for relation in &self.relations {
            if let Some((parent, child)) = relation.parent_child() {
                if self.contains_statement(parent) && self.contains_statement(child) {
                    map.entry(parent.clone()).or_default().push(child.clone());
                }
            }
        }
        map
    }

    /// Parent of every child, restricted to extant endpoints
    ///
    /// If a malformed graph gives a child two parents, the first relation wins.
    pub fn parent_map(&self) -> BTreeMap<StatementId, StatementId> {
        let mut map = BTreeMap::new();
        for relation in &self.relations {
            if let Some((parent, child)) = relation.parent_child() {
                if self.contains_statement(parent) && self.contains_statement(child) {
                    map.entry(child.clone()).or_insert_with(|| parent.clone());
                }
            }
        }
        map
    }

    /// Every hierarchical descendant of `id` (excluding `id` itself)
    pub fn descendants_of(&self, id: &StatementId) -> BTreeSet<StatementId> {
        let children = self.child_map();
        let mut seen = BTreeSet::new();
        let mut queue: VecDeque<&StatementId> = VecDeque::new();
        queue.push_back(id);

        while let Some(current) = queue.pop_front() {
            if let Some(kids) = children.get(current) {
                for kid in kids {
                    if kid != id && seen.insert(kid.clone()) {
                        queue.push_back(kid);
                    }
                }
            }
        }
        seen
    }

    /// Whether `candidate` lies in the hierarchical subtree below `ancestor`
    pub fn is_descendant(&self, candidate: &StatementId, ancestor: &StatementId) -> bool {
        let mut current = candidate;
        let mut steps = 0;
        while let Some(parent) = self.parent_of(current) {
            if parent == ancestor {
                return true;
            }
            current = parent;
            steps += 1;
            // A cyclic graph never reaches a root; stop after visiting every node.
            if steps > self.statements.len() {
                return false;
            }
        }
        false
    }

    /// The Argument Summary attached to `thesis`, if any
    pub fn summary_of(&self, thesis: &StatementId) -> Option<&Statement> {
        self.relations
            .iter()
            .filter(|r| r.kind == RelationKind::Supports && &r.source == thesis)
            .filter_map(|r| self.statement(&r.target))
            .find(|s| s.kind == StatementKind::ArgumentSummary)
    }

    /// Every Argument Summary attached to `thesis` via `supports`
    pub fn summaries_of<'a>(
        &'a self,
        thesis: &'a StatementId,
    ) -> impl Iterator<Item = &'a Statement> + 'a {
        self.relations
            .iter()
            .filter(move |r| r.kind == RelationKind::Supports && &r.source == thesis)
            .filter_map(move |r| self.statement(&r.target))
            .filter(|s| s.kind == StatementKind::ArgumentSummary)
    }

    /// Theses owned by `participant`, in creation order
    pub fn theses_of<'a>(
        &'a self,
        participant: &'a ParticipantId,
    ) -> impl Iterator<Item = &'a Statement> + 'a {
        self.statements
            .iter()
            .filter(move |s| s.kind == StatementKind::Thesis && &s.participant == participant)
    }

    /// Every relation with `id` as an endpoint
    pub fn incident_relations<'a>(
        &'a self,
        id: &'a StatementId,
    ) -> impl Iterator<Item = &'a Relation> + 'a {
        self.relations.iter().filter(move |r| r.touches(id))
    }

    /// The peer relation of `kind` between `a` and `b`, in either direction
    pub fn peer_relation(
        &self,
        kind: RelationKind,
        a: &StatementId,
        b: &StatementId,
    ) -> Option<&Relation> {
        self.relations
            .iter()
            .find(|r| r.kind == kind && r.joins(a, b))
    }

    /// Statements linked to `id` by peer relations of `kind`
    pub fn peers_of(&self, kind: RelationKind, id: &StatementId) -> Vec<&StatementId> {
        self.relations
            .iter()
            .filter(|r| r.kind == kind)
            .filter_map(|r| r.other_end(id))
            .collect()
    }

    /// Copy of the graph restricted to `keep`
    ///
    /// Relations survive only if both endpoints are kept. Participants are
    /// always copied in full.
    pub fn subgraph(&self, keep: &BTreeSet<StatementId>) -> DebateGraph {
        DebateGraph {
            participants: self.participants.clone(),
            statements: self
                .statements
                .iter()
                .filter(|s| keep.contains(&s.id))
                .cloned()
                .collect(),
            relations: self
                .relations
                .iter()
                .filter(|r| keep.contains(&r.source) && keep.contains(&r.target))
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NewStatement, StrengthType};

    fn statement(id: &str, kind: StatementKind, participant: &str) -> Statement {
        let mut draft = NewStatement::new(participant.into(), id);
        if kind.requires_strength() {
            draft = draft.with_strength(StrengthType::Type1);
        }
        Statement::from_draft(id.into(), kind, draft)
    }

    fn relation(id: &str, source: &str, target: &str, kind: RelationKind) -> Relation {
        Relation::new(id.into(), source.into(), target.into(), kind)
    }

    /// thesis <- arg1 <- counter (by B), arg1 <- evidence, thesis <- summary
    fn sample() -> DebateGraph {
        DebateGraph {
            participants: vec![
                Participant::new("A".into(), "Alice"),
                Participant::new("B".into(), "Bob"),
            ],
            statements: vec![
                statement("thesis", StatementKind::Thesis, "A"),
                statement("arg1", StatementKind::Argument, "A"),
                statement("counter", StatementKind::Counter, "B"),
                statement("evidence", StatementKind::Evidence, "A"),
                statement("summary", StatementKind::ArgumentSummary, "A"),
            ],
            relations: vec![
                relation("r1", "thesis", "arg1", RelationKind::Supports),
                relation("r2", "counter", "arg1", RelationKind::Attacks),
                relation("r3", "evidence", "arg1", RelationKind::EvidenceOf),
                relation("r4", "thesis", "summary", RelationKind::Supports),
                relation("r5", "counter", "evidence", RelationKind::RefersTo),
            ],
        }
    }

    #[test]
    fn test_parent_of() {
        let graph = sample();
        assert_eq!(graph.parent_of(&"arg1".into()).map(|id| id.as_str()), Some("thesis"));
        assert_eq!(graph.parent_of(&"counter".into()).map(|id| id.as_str()), Some("arg1"));
        assert_eq!(graph.parent_of(&"thesis".into()), None);
    }

    #[test]
    fn test_children_and_descendants() {
        let graph = sample();
        let kids: Vec<&str> = graph
            .children_of(&"arg1".into())
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(kids, vec!["counter", "evidence"]);

        let descendants = graph.descendants_of(&"thesis".into());
        assert_eq!(descendants.len(), 4);
        assert!(graph.is_descendant(&"evidence".into(), &"thesis".into()));
        assert!(!graph.is_descendant(&"thesis".into(), &"evidence".into()));
    }

    #[test]
    fn test_peer_relations_do_not_parent() {
        let graph = sample();
        let parents = graph.parent_map();
        assert_eq!(parents.get(&StatementId::from("evidence")).map(|id| id.as_str()), Some("arg1"));
        assert_eq!(graph.peers_of(RelationKind::RefersTo, &"evidence".into()).len(), 1);
        assert!(graph
            .peer_relation(RelationKind::RefersTo, &"evidence".into(), &"counter".into())
            .is_some());
    }

    #[test]
    fn test_summary_lookup() {
        let graph = sample();
        assert_eq!(graph.summary_of(&"thesis".into()).map(|s| s.id.as_str()), Some("summary"));
        assert!(graph.summary_of(&"arg1".into()).is_none());
    }

    #[test]
    fn test_lookups_outlive_the_queried_id() {
        let graph = sample();
        let relation = {
            let child = StatementId::from("counter");
            graph.parent_relation(&child)
        };
        let summary = {
            let thesis = StatementId::from("thesis");
            graph.summary_of(&thesis)
        };

        assert_eq!(relation.map(|r| r.id.as_str()), Some("r2"));
        assert_eq!(relation.and_then(|r| r.parent()).map(|id| id.as_str()), Some("arg1"));
        assert_eq!(summary.map(|s| s.id.as_str()), Some("summary"));
    }

    #[test]
    fn test_subgraph_drops_dangling_relations() {
        let graph = sample();
        let keep: BTreeSet<StatementId> = ["thesis", "arg1"].iter().map(|s| StatementId::from(*s)).collect();
        let sub = graph.subgraph(&keep);
        assert_eq!(sub.statements.len(), 2);
        assert_eq!(sub.relations.len(), 1);
        assert_eq!(sub.participants.len(), 2);
    }

    #[test]
    fn test_participant_color() {
        let graph = sample();
        assert_eq!(graph.participant_color(&"B".into()), Some(crate::PALETTE[1]));
        assert_eq!(graph.participant_color(&"Z".into()), None);
    }

    #[test]
    fn test_cyclic_graph_terminates() {
        let mut graph = sample();
        graph.relations.push(relation("loop", "arg1", "thesis", RelationKind::Supports));
        assert!(graph.descendants_of(&"thesis".into()).len() >= 4);
        // Must return instead of looping forever.
        let _ = graph.is_descendant(&"summary".into(), &"missing".into());
    }
}
