//! Geometry properties of the layout engine over random trees

use debatemap_domain::{
    DebateGraph, NewStatement, Participant, Relation, RelationKind, Statement, StatementId,
    StatementKind, StrengthType,
};
use debatemap_layout::{compute_layout, Layout, LayoutConfig};
use proptest::prelude::*;

const KINDS: [StatementKind; 4] = [
    StatementKind::Argument,
    StatementKind::Counter,
    StatementKind::Evidence,
    StatementKind::Agreement,
];

/// A Thesis plus one statement per `(parent, kind)` pair
///
/// Statement `i` hangs off node `parent % (i + 1)` (0 is the Thesis) with kind
/// `KINDS[kind % 4]`; Counters and Agreements belong to the second participant.
/// Optionally a Summary under the Thesis carrying two Evidence of its own.
fn tree(nodes: &[(usize, usize)], with_summary: bool) -> DebateGraph {
    let mut graph = DebateGraph::new();
    graph.participants.push(Participant::new("A".into(), "Alice"));
    graph.participants.push(Participant::new("B".into(), "Bob"));
    graph.statements.push(Statement::from_draft(
        "n0".into(),
        StatementKind::Thesis,
        NewStatement::new("A".into(), "thesis"),
    ));

    for (i, (parent, kind)) in nodes.iter().enumerate() {
        let id = format!("n{}", i + 1);
        let kind = KINDS[kind % KINDS.len()];
        let owner = match kind {
            StatementKind::Counter | StatementKind::Agreement => "B",
            _ => "A",
        };
        let mut draft = NewStatement::new(owner.into(), format!("title {:03}", (i * 7) % 13));
        if kind != StatementKind::Agreement {
            draft = draft.with_strength(StrengthType::Type1);
        }
        graph
            .statements
            .push(Statement::from_draft(id.as_str().into(), kind, draft));
        graph.relations.push(Relation::attaching(
            format!("r{}", i + 1).into(),
            kind.parent_relation().unwrap(),
            format!("n{}", parent % (i + 1)).into(),
            id.into(),
        ));
    }

    if with_summary {
        graph.statements.push(Statement::from_draft(
            "summary".into(),
            StatementKind::ArgumentSummary,
            NewStatement::new("A".into(), "summary"),
        ));
        graph.relations.push(Relation::new(
            "rs".into(),
            "n0".into(),
            "summary".into(),
            RelationKind::Supports,
        ));
        for (id, title) in [("se1", "backing one"), ("se2", "backing two")] {
            graph.statements.push(Statement::from_draft(
                id.into(),
                StatementKind::Evidence,
                NewStatement::new("A".into(), title).with_strength(StrengthType::Type2),
            ));
            graph.relations.push(Relation::attaching(
                format!("r{}", id).into(),
                RelationKind::EvidenceOf,
                "summary".into(),
                id.into(),
            ));
        }
    }
    graph
}

fn random_nodes(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..50, 0usize..KINDS.len()), len)
}

fn center_x(layout: &Layout, id: &StatementId) -> f64 {
    layout.center(id).map(|p| p.x).unwrap_or(f64::NAN)
}

proptest! {
    #[test]
    fn layout_is_deterministic(nodes in random_nodes(0..25), summary in any::<bool>()) {
        let graph = tree(&nodes, summary);
        let config = LayoutConfig::default();
        let first = compute_layout(&graph, &config);
        prop_assert_eq!(&first, &compute_layout(&graph, &config));

        let mut shuffled = graph.clone();
        shuffled.statements.reverse();
        shuffled.relations.reverse();
        prop_assert_eq!(&first, &compute_layout(&shuffled, &config));
    }

    #[test]
    fn every_statement_is_placed_without_overlap(nodes in random_nodes(0..25), summary in any::<bool>()) {
        let graph = tree(&nodes, summary);
        let layout = compute_layout(&graph, &LayoutConfig::default());
        prop_assert_eq!(layout.len(), graph.statements.len());

        let rects: Vec<_> = graph.statements.iter().filter_map(|s| layout.rect(&s.id)).collect();
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                prop_assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn parents_are_centered_over_children(nodes in random_nodes(1..25), summary in any::<bool>()) {
        let graph = tree(&nodes, summary);
        let layout = compute_layout(&graph, &LayoutConfig::default());

        for statement in &graph.statements {
            let children = graph.children_of(&statement.id);
            if children.is_empty() {
                continue;
            }
            let parent_x = center_x(&layout, &statement.id);

            if let Some(summary) = children.iter().find(|c| c.kind == StatementKind::ArgumentSummary) {
                prop_assert!((center_x(&layout, &summary.id) - parent_x).abs() <= 0.5);
                continue;
            }

            let xs: Vec<f64> = children.iter().map(|c| center_x(&layout, &c.id)).collect();
            let min = xs.iter().copied().fold(f64::INFINITY, f64::min);
            let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!((parent_x - (min + max) / 2.0).abs() <= 0.5);
        }
    }

    #[test]
    fn rows_follow_depth(nodes in random_nodes(0..25), summary in any::<bool>()) {
        let graph = tree(&nodes, summary);
        let config = LayoutConfig::default();
        let layout = compute_layout(&graph, &config);

        for statement in &graph.statements {
            let mut depth = 0.0;
            let mut current = &statement.id;
            while let Some(parent) = graph.parent_of(current) {
                depth += 1.0;
                current = parent;
            }
            let mut expected = depth * config.level_height();
            if statement.kind == StatementKind::ArgumentSummary {
                expected -= config.summary_raise;
            }
            let y = layout.position(&statement.id).map(|p| p.y);
            prop_assert_eq!(y, Some(expected));
        }
    }
}

#[test]
fn anchoring_keeps_reference_still_after_growth() {
    let config = LayoutConfig::default();
    let before = compute_layout(&tree(&[(0, 0)], false), &config);
    let thesis = StatementId::from("n0");
    let previous = before.position(&thesis).unwrap();

    let grown = tree(&[(0, 0), (0, 1), (0, 2), (1, 0)], false);
    let after = compute_layout(&grown, &config).anchored(&thesis, previous);
    assert_eq!(after.position(&thesis), Some(previous));
}

#[test]
fn bounds_cover_the_block() {
    let config = LayoutConfig::default();
    let layout = compute_layout(&tree(&[(0, 0), (0, 3), (0, 1)], false), &config);
    let bounds = layout.bounds().unwrap();
    assert_eq!(bounds.min_x, 0.0);
    assert_eq!(bounds.width(), 3.0 * 320.0 + 2.0 * 60.0);
    assert_eq!(bounds.height(), 300.0 + 120.0);
}
