//! Whole-graph invariant audit

use crate::{RuleChecker, RuleConfig, RuleResult, RuleViolation};
use debatemap_domain::{DebateGraph, RelationKind, StatementId};
use std::collections::{BTreeMap, BTreeSet};

/// Audit `graph` with the default rule set
///
/// See [`RuleChecker::audit`].
pub fn audit(graph: &DebateGraph) -> RuleResult {
    RuleChecker::new(RuleConfig::default()).audit(graph)
}

impl RuleChecker {
    /// Check every structural invariant of a debate graph
    ///
    /// Returns the first violation found:
    /// 1. participant, statement and relation ids are unique
    /// 2. every statement's participant and every relation's endpoints exist
    /// 3. strength types are present exactly where required
    /// 4. every hierarchical relation obeys the attachment rules, and each child
    ///    has a single parent relation
    /// 5. the hierarchy is acyclic
    /// 6. peer links obey their rules and are unique per unordered pair
    pub fn audit(&self, graph: &DebateGraph) -> RuleResult {
        self.audit_ids(graph)?;

        for statement in &graph.statements {
            self.require_participant(graph, &statement.participant)?;
            self.check_strength(statement.kind, statement.strength)
                .map_err(|e| RuleViolation::Constraint(format!("statement '{}': {}", statement.id, e.reason())))?;
        }

        for relation in &graph.relations {
            for endpoint in [&relation.source, &relation.target] {
                if !graph.contains_statement(endpoint) {
                    return Err(RuleViolation::NotFound(format!(
                        "relation '{}' refers to missing statement '{}'",
                        relation.id, endpoint
                    )));
                }
            }
        }

        self.audit_acyclic(graph)?;
        self.audit_hierarchy(graph)?;
        self.audit_peers(graph)?;
        Ok(())
    }

    fn audit_ids(&self, graph: &DebateGraph) -> RuleResult {
        let mut participants = BTreeSet::new();
        for participant in &graph.participants {
            if !participants.insert(&participant.id) {
                return Err(RuleViolation::Constraint(format!(
                    "participant id '{}' is used twice",
                    participant.id
                )));
            }
        }

        let mut statements = BTreeSet::new();
        for statement in &graph.statements {
            if !statements.insert(&statement.id) {
                return Err(RuleViolation::Constraint(format!(
                    "statement id '{}' is used twice",
                    statement.id
                )));
            }
        }

        let mut relations = BTreeSet::new();
        for relation in &graph.relations {
            if !relations.insert(&relation.id) {
                return Err(RuleViolation::Constraint(format!(
                    "relation id '{}' is used twice",
                    relation.id
                )));
            }
        }
        Ok(())
    }

    fn audit_hierarchy(&self, graph: &DebateGraph) -> RuleResult {
        let mut parent_count: BTreeMap<&StatementId, usize> = BTreeMap::new();

        for relation in graph.relations.iter().filter(|r| r.kind.is_hierarchical()) {
            self.check_relation(graph, relation.kind, &relation.source, &relation.target)?;
            if let Some(child) = relation.child() {
                let count = parent_count.entry(child).or_insert(0);
                *count += 1;
                if *count > 1 {
                    return Err(RuleViolation::Constraint(format!(
                        "statement '{}' has more than one parent",
                        child
                    )));
                }
            }
        }
        Ok(())
    }

    fn audit_acyclic(&self, graph: &DebateGraph) -> RuleResult {
        // Follow every parent edge (not just the first) so malformed graphs with
        // several parents per child are still checked.
        let mut parents: BTreeMap<&StatementId, Vec<&StatementId>> = BTreeMap::new();
        for relation in &graph.relations {
            if let Some((parent, child)) = relation.parent_child() {
                parents.entry(child).or_default().push(parent);
            }
        }

        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Visiting,
            Done,
        }

        let mut marks: BTreeMap<&StatementId, Mark> = BTreeMap::new();
        for start in graph.statements.iter().map(|s| &s.id) {
            if marks.contains_key(start) {
                continue;
            }
            // Iterative DFS over parent edges: (node, index of next parent to visit)
            let mut stack: Vec<(&StatementId, usize)> = vec![(start, 0)];
            marks.insert(start, Mark::Visiting);

            while let Some((node, next)) = stack.pop() {
                let ups = parents.get(node).map(Vec::as_slice).unwrap_or(&[]);
                if next < ups.len() {
                    stack.push((node, next + 1));
                    let up = ups[next];
                    match marks.get(up) {
                        Some(Mark::Visiting) => {
                            return Err(RuleViolation::Cycle(format!(
                                "statement '{}' is its own ancestor",
                                up
                            )));
                        }
                        Some(Mark::Done) => {}
                        None => {
                            marks.insert(up, Mark::Visiting);
                            stack.push((up, 0));
                        }
                    }
                } else {
                    marks.insert(node, Mark::Done);
                }
            }
        }
        Ok(())
    }

    fn audit_peers(&self, graph: &DebateGraph) -> RuleResult {
        let mut seen: BTreeSet<(RelationKind, &StatementId, &StatementId)> = BTreeSet::new();
        for relation in graph.relations.iter().filter(|r| r.kind.is_peer()) {
            self.check_peer(graph, relation.kind, &relation.source, &relation.target)?;
            let (low, high) = if relation.source <= relation.target {
                (&relation.source, &relation.target)
            } else {
                (&relation.target, &relation.source)
            };
            if !seen.insert((relation.kind, low, high)) {
                return Err(RuleViolation::Constraint(format!(
                    "more than one {} between '{}' and '{}'",
                    relation.kind, low, high
                )));
            }
        }
        Ok(())
    }
}
