//! Top-down tree layout
//!
//! Layout runs in two passes over a forest extracted from the hierarchical
//! relations: a bottom-up `measure` that records how far each subtree reaches
//! left and right of its root's center, then a top-down `place` that turns
//! those relative offsets into absolute positions. Peer relations are ignored.

use crate::{Layout, LayoutConfig, Point};
use debatemap_domain::{DebateGraph, Statement, StatementId, StatementKind};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Deterministic layout engine
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out every statement of `graph`
    ///
    /// Pass the visible subgraph, not the full graph: hidden statements would
    /// otherwise take up space.
    pub fn layout(&self, graph: &DebateGraph) -> Layout {
        let forest = Forest::build(graph);
        let mut tree = TreeLayout {
            forest: &forest,
            config: &self.config,
            offsets: BTreeMap::new(),
        };

        let mut positions = BTreeMap::new();
        let mut cursor = 0.0;
        for &root in &forest.roots {
            let extent = tree.measure(root);
            let center = cursor + extent.left;
            tree.place(root, center, 0, false, &mut positions);
            cursor = center + extent.right + self.config.root_gap();
        }

        tracing::trace!(
            statements = positions.len(),
            roots = forest.roots.len(),
            detached = forest.detached,
            "computed layout"
        );

        Layout::new(positions, self.config.node_width, self.config.node_height)
    }
}

/// Lay out `graph` with `config`
///
/// # Examples
///
/// ```
/// use debatemap_domain::{DebateGraph, NewStatement, Participant, Statement, StatementKind};
/// use debatemap_layout::{compute_layout, LayoutConfig};
///
/// let mut graph = DebateGraph::new();
/// graph.participants.push(Participant::new("A".into(), "Alice"));
/// graph.statements.push(Statement::from_draft(
///     "t".into(),
///     StatementKind::Thesis,
///     NewStatement::new("A".into(), "Cities should ban cars"),
/// ));
///
/// let layout = compute_layout(&graph, &LayoutConfig::default());
/// assert_eq!(layout.position(&"t".into()).map(|p| p.y), Some(0.0));
/// ```
pub fn compute_layout(graph: &DebateGraph, config: &LayoutConfig) -> Layout {
    LayoutEngine::new(config.clone()).layout(graph)
}

/// How far a subtree reaches left and right of its root's center
#[derive(Debug, Clone, Copy)]
struct Extent {
    left: f64,
    right: f64,
}

/// Each child's center relative to its parent's center
type Offsets<'g> = Vec<(&'g StatementId, f64)>;

/// The hierarchical relations reduced to a forest
///
/// Every statement appears exactly once. A statement that somehow has two
/// parents keeps the first; one that no root reaches becomes a root itself.
#[derive(Debug, Default)]
struct Forest<'g> {
    roots: Vec<&'g StatementId>,
    children: BTreeMap<&'g StatementId, Vec<&'g StatementId>>,
    summaries: BTreeMap<&'g StatementId, &'g StatementId>,
    detached: usize,
}

impl<'g> Forest<'g> {
    fn build(graph: &'g DebateGraph) -> Self {
        let statements: BTreeMap<&StatementId, &Statement> =
            graph.statements.iter().map(|s| (&s.id, s)).collect();

        let mut raw: BTreeMap<&StatementId, Vec<&Statement>> = BTreeMap::new();
        let mut has_parent: BTreeSet<&StatementId> = BTreeSet::new();
        for relation in &graph.relations {
            let Some((parent, child)) = relation.parent_child() else {
                continue;
            };
            let Some(child_statement) = statements.get(child) else {
                continue;
            };
            if parent == child || !statements.contains_key(parent) || !has_parent.insert(child) {
                continue;
            }
            raw.entry(parent).or_default().push(*child_statement);
        }
        for kids in raw.values_mut() {
            kids.sort_by(|a, b| sibling_order(a, b));
        }

        let mut roots: Vec<&Statement> = graph
            .statements
            .iter()
            .filter(|s| s.kind == StatementKind::Thesis || !has_parent.contains(&s.id))
            .collect();
        roots.sort_by(|a, b| root_order(a, b));

        let mut forest = Forest::default();
        let mut claimed: BTreeSet<&StatementId> = BTreeSet::new();
        for root in roots {
            forest.adopt(root, &raw, &mut claimed);
        }
        for statement in &graph.statements {
            if !claimed.contains(&statement.id) {
                forest.detached += 1;
                forest.adopt(statement, &raw, &mut claimed);
            }
        }
        forest
    }

    /// Add the tree below `root`, skipping anything already claimed
    fn adopt(
        &mut self,
        root: &'g Statement,
        raw: &BTreeMap<&'g StatementId, Vec<&'g Statement>>,
        claimed: &mut BTreeSet<&'g StatementId>,
    ) {
        if !claimed.insert(&root.id) {
            return;
        }
        self.roots.push(&root.id);

        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let mut kids: Vec<&'g Statement> = raw
                .get(&node.id)
                .into_iter()
                .flatten()
                .copied()
                .filter(|&kid| claimed.insert(&kid.id))
                .collect();

            if node.kind == StatementKind::Thesis {
                if let Some(i) = kids.iter().position(|k| k.kind == StatementKind::ArgumentSummary) {
                    let summary = kids.remove(i);
                    self.summaries.insert(&node.id, &summary.id);
                    stack.push(summary);
                }
            }

            if !kids.is_empty() {
                self.children
                    .insert(&node.id, kids.iter().map(|&k| &k.id).collect());
                stack.extend(kids);
            }
        }
    }

    fn children_of(&self, id: &StatementId) -> &[&'g StatementId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Evidence, Agreement, Argument, Counter; then title, then id
fn sibling_order(a: &Statement, b: &Statement) -> Ordering {
    a.kind
        .sibling_priority()
        .cmp(&b.kind.sibling_priority())
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.id.cmp(&b.id))
}

/// Theses first, then title, then id
fn root_order(a: &Statement, b: &Statement) -> Ordering {
    let a_thesis = a.kind == StatementKind::Thesis;
    let b_thesis = b.kind == StatementKind::Thesis;
    b_thesis
        .cmp(&a_thesis)
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.id.cmp(&b.id))
}

struct TreeLayout<'a, 'g> {
    forest: &'a Forest<'g>,
    config: &'a LayoutConfig,
    offsets: BTreeMap<&'g StatementId, Offsets<'g>>,
}

impl<'g> TreeLayout<'_, 'g> {
    fn measure(&mut self, id: &'g StatementId) -> Extent {
        let forest = self.forest;
        let kids: Vec<(&'g StatementId, Extent)> = forest
            .children_of(id)
            .iter()
            .map(|&kid| (kid, self.measure(kid)))
            .collect();
        let summary = forest.summaries.get(id).map(|&s| self.measure(s));

        let (left, right, offsets) = match summary {
            Some(summary) => flank(&kids, summary, self.config.x_gap),
            None => row(&kids, self.config.x_gap),
        };
        let half = self.config.node_width / 2.0;
        let extent = Extent {
            left: left.max(half),
            right: right.max(half),
        };
        self.offsets.insert(id, offsets);
        extent
    }

    fn place(
        &self,
        id: &'g StatementId,
        center: f64,
        depth: usize,
        raised: bool,
        out: &mut BTreeMap<StatementId, Point>,
    ) {
        let mut y = depth as f64 * self.config.level_height();
        if raised {
            y -= self.config.summary_raise;
        }
        out.insert(id.clone(), Point::new(center - self.config.node_width / 2.0, y));

        if let Some(offsets) = self.offsets.get(id) {
            for (kid, offset) in offsets {
                self.place(*kid, center + offset, depth + 1, false, out);
            }
        }
        if let Some(&summary) = self.forest.summaries.get(id) {
            self.place(summary, center, depth + 1, true, out);
        }
    }
}

/// Children side by side, parent centered between the outermost child centers
///
/// Returns the reach left and right of the parent's center and each child's offset.
fn row<'g>(kids: &[(&'g StatementId, Extent)], gap: f64) -> (f64, f64, Offsets<'g>) {
    let mut cursor = 0.0;
    let mut centers = Vec::with_capacity(kids.len());
    for (id, extent) in kids {
        let center = cursor + extent.left;
        centers.push((*id, center));
        cursor = center + extent.right + gap;
    }
    let (Some(&(_, first)), Some(&(_, last))) = (centers.first(), centers.last()) else {
        return (0.0, 0.0, Vec::new());
    };

    let mid = (first + last) / 2.0;
    let block_width = cursor - gap;
    let offsets = centers.into_iter().map(|(id, c)| (id, c - mid)).collect();
    (mid, block_width - mid, offsets)
}

/// Summary centered at offset 0, `ceil(n/2)` siblings to its left, the rest to its right
fn flank<'g>(
    kids: &[(&'g StatementId, Extent)],
    summary: Extent,
    gap: f64,
) -> (f64, f64, Offsets<'g>) {
    let (left, right) = kids.split_at(kids.len().div_ceil(2));
    let mut offsets = Vec::with_capacity(kids.len());

    let mut edge = -summary.left;
    for (id, extent) in left.iter().rev() {
        let center = edge - gap - extent.right;
        offsets.push((*id, center));
        edge = center - extent.left;
    }
    offsets.reverse();
    let reach_left = -edge;

    let mut edge = summary.right;
    for (id, extent) in right {
        let center = edge + gap + extent.left;
        offsets.push((*id, center));
        edge = center + extent.right;
    }
    (reach_left, edge, offsets)
}
