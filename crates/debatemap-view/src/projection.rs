//! View projection: visibility and display flags for every node and edge

use crate::{matches_terms, parse_terms, time_neighbors, DisplayMode, Overlay};
use debatemap_domain::{DebateGraph, RelationId, StatementId};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Display state of one statement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeDisplay {
    /// Part of the visible graph
    pub visible: bool,
    /// Matches the active search
    pub hit: bool,
    /// Drawn de-emphasized
    pub dimmed: bool,
    /// Endpoint of the focused relation
    pub edge_active: bool,
    /// Candidate in attachment mode
    pub eligible_target: bool,
    /// Can be clicked (false for non-candidates in attachment mode)
    pub pickable: bool,
}

/// Display state of one relation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeDisplay {
    /// Both endpoints are visible
    pub visible: bool,
    /// The focused relation
    pub active: bool,
    /// Drawn de-emphasized
    pub dimmed: bool,
}

/// The result of projecting a graph through an overlay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    /// Per-statement display state
    pub nodes: BTreeMap<StatementId, NodeDisplay>,
    /// Per-relation display state
    pub edges: BTreeMap<RelationId, EdgeDisplay>,
}

impl Projection {
    /// Project `graph` through `overlay`
    pub fn compute(graph: &DebateGraph, overlay: &Overlay) -> Self {
        let collapsed_hidden = collapsed_descendants(graph);
        let terms = parse_terms(&overlay.search);
        let searching = !terms.is_empty();

        // Collapse, then hide-mode filter and search.
        let mut nodes: BTreeMap<StatementId, NodeDisplay> = BTreeMap::new();
        for statement in &graph.statements {
            let hit = matches_terms(statement, &terms);
            let search_fail = searching && !hit;
            let filter_fail = !overlay.filters.passes(statement);

            let hidden = collapsed_hidden.contains(&statement.id)
                || (search_fail && overlay.search_mode == DisplayMode::Hide)
                || (filter_fail && overlay.filter_mode == DisplayMode::Hide);
            let dimmed = (search_fail && overlay.search_mode == DisplayMode::Dim)
                || (filter_fail && overlay.filter_mode == DisplayMode::Dim);

            nodes.insert(
                statement.id.clone(),
                NodeDisplay {
                    visible: !hidden,
                    hit,
                    dimmed: dimmed && !hidden,
                    edge_active: false,
                    eligible_target: false,
                    pickable: !hidden,
                },
            );
        }

        let is_visible = |nodes: &BTreeMap<StatementId, NodeDisplay>, id: &StatementId| {
            nodes.get(id).is_some_and(|n| n.visible)
        };

        let mut edges: BTreeMap<RelationId, EdgeDisplay> = graph
            .relations
            .iter()
            .map(|relation| {
                let visible = is_visible(&nodes, &relation.source) && is_visible(&nodes, &relation.target);
                (
                    relation.id.clone(),
                    EdgeDisplay {
                        visible,
                        active: false,
                        dimmed: false,
                    },
                )
            })
            .collect();

        // Edge focus
        let focused = overlay
            .active_edge
            .as_ref()
            .and_then(|id| graph.relation(id))
            .filter(|relation| edges.get(&relation.id).is_some_and(|e| e.visible));
        if let Some(relation) = focused {
            for (id, node) in nodes.iter_mut().filter(|(_, n)| n.visible) {
                if relation.touches(id) {
                    node.edge_active = true;
                } else {
                    node.dimmed = true;
                }
            }
            if let Some(edge) = edges.get_mut(&relation.id) {
                edge.active = true;
            }
        }

        // Time highlight
        if let Some(cursor) = overlay.time_cursor {
            let visible_statements = graph
                .statements
                .iter()
                .filter(|s| is_visible(&nodes, &s.id));
            let neighbors = time_neighbors(visible_statements, cursor);
            if !neighbors.is_empty() {
                for (id, node) in nodes.iter_mut().filter(|(_, n)| n.visible) {
                    if !neighbors.contains(id) {
                        node.dimmed = true;
                    }
                }
            }
        }

        // Attachment mode
        if !overlay.eligible_targets.is_empty() {
            for (id, node) in nodes.iter_mut().filter(|(_, n)| n.visible) {
                if overlay.eligible_targets.contains(id) {
                    node.eligible_target = true;
                } else {
                    node.dimmed = true;
                    node.pickable = false;
                }
            }
        }

        for relation in &graph.relations {
            let endpoint_dimmed = [&relation.source, &relation.target]
                .iter()
                .any(|id| nodes.get(*id).is_some_and(|n| n.dimmed));
            if let Some(edge) = edges.get_mut(&relation.id) {
                let other_focused = focused.is_some() && !edge.active;
                edge.dimmed = edge.visible && !edge.active && (endpoint_dimmed || other_focused);
            }
        }

        tracing::trace!(
            statements = nodes.len(),
            visible = nodes.values().filter(|n| n.visible).count(),
            hits = nodes.values().filter(|n| n.hit).count(),
            "computed view projection"
        );

        Self { nodes, edges }
    }

    /// Display state of a statement
    pub fn node(&self, id: &StatementId) -> Option<&NodeDisplay> {
        self.nodes.get(id)
    }

    /// Display state of a relation
    pub fn edge(&self, id: &RelationId) -> Option<&EdgeDisplay> {
        self.edges.get(id)
    }

    /// Whether a statement is visible
    pub fn is_visible(&self, id: &StatementId) -> bool {
        self.nodes.get(id).is_some_and(|n| n.visible)
    }

    /// Ids of all visible statements
    pub fn visible_ids(&self) -> BTreeSet<StatementId> {
        self.nodes
            .iter()
            .filter(|(_, n)| n.visible)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Ids of all search hits (visible or not)
    pub fn hits(&self) -> Vec<StatementId> {
        self.nodes
            .iter()
            .filter(|(_, n)| n.hit)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// The visible subgraph, ready for layout
    pub fn visible_graph(&self, graph: &DebateGraph) -> DebateGraph {
        graph.subgraph(&self.visible_ids())
    }
}

/// Every hierarchical descendant of a collapsed statement
///
/// The collapsed statements themselves stay visible unless they are below
/// another collapsed statement.
fn collapsed_descendants(graph: &DebateGraph) -> BTreeSet<StatementId> {
    let children = graph.child_map();
    let mut hidden = BTreeSet::new();
    let mut queue: VecDeque<&StatementId> = graph
        .statements
        .iter()
        .filter(|s| s.collapsed)
        .map(|s| &s.id)
        .collect();

    while let Some(current) = queue.pop_front() {
        if let Some(kids) = children.get(current) {
            for kid in kids {
                if hidden.insert(kid.clone()) {
                    queue.push_back(kid);
                }
            }
        }
    }
    hidden
}
