//! Snapshot documents
//!
//! A snapshot is the only persisted artifact: a versioned, self-contained
//! JSON document holding participants, nodes and edges. Ids are carried
//! verbatim. Transient UI state (selection, highlight, filters) and the
//! `self_collapsed` flag are never written.
//!
//! ```json
//! {
//!   "version": 1,
//!   "participants": [{ "id": "A", "name": "Alice" }],
//!   "nodes": [{ "id": "thesisA", "kind": "Thesis", "participantId": "A", "title": "A Thesis", "collapsed": false }],
//!   "edges": []
//! }
//! ```

use crate::{Result, StoreError};
use debatemap_domain::{
    DebateGraph, Participant, Relation, RelationKind, Statement, StatementKind, StrengthType,
};
use debatemap_layout::{Layout, Point};
use serde::{Deserialize, Serialize};

/// The only snapshot version this crate reads and writes
pub const SNAPSHOT_VERSION: u32 = 1;

/// How a snapshot replaces the current state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadMode {
    /// Keep each node's `collapsed` flag as stored
    #[default]
    Replace,
    /// Collapse every node, for a tidy first view on start-up
    ColdBoot,
}

/// A versioned, self-contained graph document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Document version, currently always 1
    pub version: u32,
    /// Participants in registry order
    #[serde(default)]
    pub participants: Vec<ParticipantRecord>,
    /// Statements
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    /// Relations
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// A participant entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    /// Participant id
    pub id: String,
    /// Display name
    pub name: String,
}

/// A statement entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    /// Statement id
    pub id: String,
    /// Statement kind name, e.g. `ArgumentSummary`
    pub kind: String,
    /// Owning participant id
    pub participant_id: String,
    /// Title
    pub title: String,
    /// Optional body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Optional first-mention timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_mention: Option<String>,
    /// Strength name, e.g. `Type 2`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength_type: Option<String>,
    /// Whether descendants are hidden
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Advisory top-left position; ignored on load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
}

/// A relation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Relation id
    pub id: String,
    /// Source statement id
    pub source: String,
    /// Target statement id
    pub target: String,
    /// Relation kind wire name, e.g. `evidence-of`
    pub kind: String,
}

impl Snapshot {
    /// Capture a graph
    pub fn from_graph(graph: &DebateGraph) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            participants: graph
                .participants
                .iter()
                .map(|p| ParticipantRecord {
                    id: p.id.to_string(),
                    name: p.name.clone(),
                })
                .collect(),
            nodes: graph.statements.iter().map(NodeRecord::from).collect(),
            edges: graph.relations.iter().map(EdgeRecord::from).collect(),
        }
    }

    /// Rebuild the graph described by this snapshot
    ///
    /// Checks the version and the vocabulary (kind and strength names) only;
    /// structural invariants are audited by the store on load.
    pub fn into_graph(self, mode: LoadMode) -> Result<DebateGraph> {
        check_version(u64::from(self.version))?;

        let participants = self
            .participants
            .into_iter()
            .map(|p| Participant::new(p.id.into(), p.name))
            .collect();
        let statements = self
            .nodes
            .into_iter()
            .map(|node| node.into_statement(mode))
            .collect::<Result<Vec<_>>>()?;
        let relations = self
            .edges
            .into_iter()
            .map(EdgeRecord::into_relation)
            .collect::<Result<Vec<_>>>()?;

        Ok(DebateGraph {
            participants,
            statements,
            relations,
        })
    }

    /// Record the layout position of every node it covers
    pub fn attach_positions(&mut self, layout: &Layout) {
        for node in &mut self.nodes {
            node.position = layout.position(&node.id.as_str().into());
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Parse a JSON document
    ///
    /// A wrong version or an unrecognized shape both fail with
    /// [`StoreError::UnsupportedSnapshot`].
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| StoreError::UnsupportedSnapshot(format!("not a JSON document: {}", e)))?;

        let version = value
            .get("version")
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| {
                StoreError::UnsupportedSnapshot("missing or non-numeric version".to_string())
            })?;
        check_version(version)?;

        serde_json::from_value(value)
            .map_err(|e| StoreError::UnsupportedSnapshot(format!("unrecognized shape: {}", e)))
    }
}

fn check_version(version: u64) -> Result<()> {
    if version != u64::from(SNAPSHOT_VERSION) {
        return Err(StoreError::UnsupportedSnapshot(format!(
            "version {} is not supported (expected {})",
            version, SNAPSHOT_VERSION
        )));
    }
    Ok(())
}

impl From<&Statement> for NodeRecord {
    fn from(statement: &Statement) -> Self {
        Self {
            id: statement.id.to_string(),
            kind: statement.kind.as_str().to_string(),
            participant_id: statement.participant.to_string(),
            title: statement.title.clone(),
            body: statement.body.clone(),
            first_mention: statement.first_mention.clone(),
            strength_type: statement.strength.map(|s| s.as_str().to_string()),
            collapsed: Some(statement.collapsed),
            position: None,
        }
    }
}

impl NodeRecord {
    fn into_statement(self, mode: LoadMode) -> Result<Statement> {
        let kind = StatementKind::parse(&self.kind).ok_or_else(|| {
            StoreError::UnsupportedSnapshot(format!(
                "node '{}' has unknown kind '{}'",
                self.id, self.kind
            ))
        })?;
        let strength = self
            .strength_type
            .as_deref()
            .map(|name| {
                StrengthType::parse(name).ok_or_else(|| {
                    StoreError::UnsupportedSnapshot(format!(
                        "node '{}' has unknown strength type '{}'",
                        self.id, name
                    ))
                })
            })
            .transpose()?;

        Ok(Statement {
            id: self.id.into(),
            kind,
            participant: self.participant_id.into(),
            title: self.title,
            body: self.body,
            first_mention: self.first_mention,
            strength,
            collapsed: match mode {
                LoadMode::Replace => self.collapsed.unwrap_or(false),
                LoadMode::ColdBoot => true,
            },
            self_collapsed: false,
        })
    }
}

impl From<&Relation> for EdgeRecord {
    fn from(relation: &Relation) -> Self {
        Self {
            id: relation.id.to_string(),
            source: relation.source.to_string(),
            target: relation.target.to_string(),
            kind: relation.kind.as_str().to_string(),
        }
    }
}

impl EdgeRecord {
    fn into_relation(self) -> Result<Relation> {
        let kind = RelationKind::parse(&self.kind).ok_or_else(|| {
            StoreError::UnsupportedSnapshot(format!(
                "edge '{}' has unknown kind '{}'",
                self.id, self.kind
            ))
        })?;
        Ok(Relation::new(
            self.id.into(),
            self.source.into(),
            self.target.into(),
            kind,
        ))
    }
}
