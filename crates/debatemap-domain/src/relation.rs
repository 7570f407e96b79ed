//! Relation module - typed edges between statements

use crate::{RelationId, StatementId};
use std::fmt;

/// Kind of relation between two statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RelationKind {
    /// `source` supports `target`; the source is the parent
    Supports,

    /// `source` (a Counter) attacks `target`; the target is the parent
    Attacks,

    /// `source` (an Evidence) backs `target`; the target is the parent
    EvidenceOf,

    /// `source` (an Agreement) concedes `target`; the target is the parent
    AgreesWith,

    /// Undirected link between two same-kind, same-participant Type 2 statements
    T2Link,

    /// Undirected textual cross-reference between any two statements
    RefersTo,
}

impl RelationKind {
    /// All relation kinds
    pub const ALL: [RelationKind; 6] = [
        RelationKind::Supports,
        RelationKind::Attacks,
        RelationKind::EvidenceOf,
        RelationKind::AgreesWith,
        RelationKind::T2Link,
        RelationKind::RefersTo,
    ];

    /// Get the wire name of the relation kind
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Supports => "supports",
            RelationKind::Attacks => "attacks",
            RelationKind::EvidenceOf => "evidence-of",
            RelationKind::AgreesWith => "agrees-with",
            RelationKind::T2Link => "t2-link",
            RelationKind::RefersTo => "refers-to",
        }
    }

    /// Parse a relation kind from its wire name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "supports" => Some(RelationKind::Supports),
            "attacks" => Some(RelationKind::Attacks),
            "evidence-of" => Some(RelationKind::EvidenceOf),
            "agrees-with" => Some(RelationKind::AgreesWith),
            "t2-link" => Some(RelationKind::T2Link),
            "refers-to" => Some(RelationKind::RefersTo),
            _ => None,
        }
    }

    /// Whether this kind defines a parent/child relation
    pub fn is_hierarchical(&self) -> bool {
        !self.is_peer()
    }

    /// Whether this kind is an undirected, visual-only peer link
    pub fn is_peer(&self) -> bool {
        matches!(self, RelationKind::T2Link | RelationKind::RefersTo)
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RelationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid relation kind: {}", s))
    }
}

/// A typed relation between two statements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    /// Unique identifier
    pub id: RelationId,

    /// Source statement
    pub source: StatementId,

    /// Target statement
    pub target: StatementId,

    /// Relation kind
    pub kind: RelationKind,
}

impl Relation {
    /// Create a new relation
    pub fn new(id: RelationId, source: StatementId, target: StatementId, kind: RelationKind) -> Self {
        Self {
            id,
            source,
            target,
            kind,
        }
    }

    /// Create a peer relation with endpoints in canonical order (smaller id first)
    pub fn peer(id: RelationId, a: StatementId, b: StatementId, kind: RelationKind) -> Self {
        debug_assert!(kind.is_peer(), "peer() called with hierarchical kind {}", kind);
        let (source, target) = if a <= b { (a, b) } else { (b, a) };
        Self::new(id, source, target, kind)
    }

    /// Create a hierarchical relation from its parent and child, orienting
    /// source and target the way `kind` requires
    pub fn attaching(id: RelationId, kind: RelationKind, parent: StatementId, child: StatementId) -> Self {
        debug_assert!(kind.is_hierarchical(), "attaching() called with peer kind {}", kind);
        match kind {
            RelationKind::Supports => Self::new(id, parent, child, kind),
            _ => Self::new(id, child, parent, kind),
        }
    }

    /// The `(parent, child)` pair this relation defines, if hierarchical
    ///
    /// `supports` points from parent to child; `attacks`, `evidence-of` and
    /// `agrees-with` point from child to parent.
    pub fn parent_child(&self) -> Option<(&StatementId, &StatementId)> {
        match self.kind {
            RelationKind::Supports => Some((&self.source, &self.target)),
            RelationKind::Attacks | RelationKind::EvidenceOf | RelationKind::AgreesWith => {
                Some((&self.target, &self.source))
            }
            RelationKind::T2Link | RelationKind::RefersTo => None,
        }
    }

    /// The parent endpoint, if hierarchical
    pub fn parent(&self) -> Option<&StatementId> {
        self.parent_child().map(|(parent, _)| parent)
    }

    /// The child endpoint, if hierarchical
    pub fn child(&self) -> Option<&StatementId> {
        self.parent_child().map(|(_, child)| child)
    }

    /// Whether either endpoint is `id`
    pub fn touches(&self, id: &StatementId) -> bool {
        &self.source == id || &self.target == id
    }

    /// Whether this relation joins `a` and `b`, in either direction
    pub fn joins(&self, a: &StatementId, b: &StatementId) -> bool {
        (&self.source == a && &self.target == b) || (&self.source == b && &self.target == a)
    }

    /// The endpoint opposite to `id`, if `id` is an endpoint
    pub fn other_end(&self, id: &StatementId) -> Option<&StatementId> {
        if &self.source == id {
            Some(&self.target)
        } else if &self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }
}
