//! Integration tests for debatemap-store
//!
//! These tests drive the store through the end-to-end scenarios a map editor
//! relies on: seeding, typed constructors, rule failures, layout of the
//! result, re-parenting and deletion.

use debatemap_domain::{
    DebateStore, NewStatement, RelationKind, StatementId, StatementKind, StrengthType,
};
use debatemap_layout::LayoutConfig;
use debatemap_store::{LoadMode, MemoryStore, Snapshot, StoreConfig, StoreError};
use debatemap_view::{DisplayMode, Overlay};

fn argument(participant: &str, title: &str) -> NewStatement {
    NewStatement::new(participant.into(), title).with_strength(StrengthType::Type1)
}

fn thesis_a() -> StatementId {
    "thesisA".into()
}

/// thesisA with Arguments X, Y, Z (added out of order)
fn three_arguments(store: &mut MemoryStore) -> (StatementId, StatementId, StatementId) {
    let z = store.add_argument(argument("A", "Z"), Some(&thesis_a())).unwrap();
    let x = store.add_argument(argument("A", "X"), Some(&thesis_a())).unwrap();
    let y = store.add_argument(argument("A", "Y"), Some(&thesis_a())).unwrap();
    (x, y, z)
}

#[test]
fn test_fresh_state_and_default_parent() {
    let mut store = MemoryStore::new();
    let graph = store.graph();
    let ids: Vec<&str> = graph.participants.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);
    assert!(graph.contains_statement(&"thesisA".into()));
    assert!(graph.contains_statement(&"thesisB".into()));

    let arg = store
        .add_argument(argument("A", "Arg1").with_body(""), None)
        .unwrap();
    let relation = store.graph().parent_relation(&arg).unwrap();
    assert_eq!(relation.kind, RelationKind::Supports);
    assert_eq!(relation.source, thesis_a());
    assert_eq!(relation.target, arg);
    assert_eq!(store.graph().statement(&arg).unwrap().body, None);
}

#[test]
fn test_counter_on_thesis_is_a_constraint_error() {
    let mut store = MemoryStore::new();
    let before = store.graph().clone();
    let err = store
        .add_counter(argument("A", "Nope"), &thesis_a())
        .unwrap_err();
    assert!(matches!(err, StoreError::Constraint(_)), "got {:?}", err);
    assert_eq!(store.graph(), &before, "failed call must not change the graph");
}

#[test]
fn test_second_summary_is_rejected() {
    let mut store = MemoryStore::new();
    store
        .add_argument_summary(NewStatement::new("A".into(), "Summary"), &thesis_a())
        .unwrap();
    let err = store
        .add_argument_summary(NewStatement::new("A".into(), "Another"), &thesis_a())
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateSummary(_)), "got {:?}", err);
}

#[test]
fn test_layout_row_under_thesis() {
    let mut store = MemoryStore::new();
    let (x, y, z) = three_arguments(&mut store);
    let layout = store.layout(&Overlay::default(), &LayoutConfig::default());

    let center = |id: &StatementId| layout.center(id).unwrap();
    assert_eq!(center(&x).y, center(&y).y);
    assert_eq!(center(&y).y, center(&z).y);
    assert!(center(&x).x < center(&y).x && center(&y).x < center(&z).x);

    let block = (center(&x).x + center(&z).x) / 2.0;
    assert!((center(&thesis_a()).x - block).abs() <= 0.5);
}

#[test]
fn test_layout_summary_splits_arguments() {
    let mut store = MemoryStore::new();
    let (x, y, z) = three_arguments(&mut store);
    let s = store
        .add_argument_summary(NewStatement::new("A".into(), "S"), &thesis_a())
        .unwrap();
    let layout = store.layout(&Overlay::default(), &LayoutConfig::default());

    let cx = |id: &StatementId| layout.center(id).unwrap().x;
    assert!((cx(&s) - cx(&thesis_a())).abs() <= 0.5);
    assert!(cx(&x) < cx(&s));
    assert!(cx(&y) < cx(&s));
    assert!(cx(&z) > cx(&s));
    assert!(layout.position(&s).unwrap().y < layout.position(&x).unwrap().y);
}

#[test]
fn test_reparent_onto_descendant_is_a_cycle() {
    let mut store = MemoryStore::new();
    let x = store.add_argument(argument("A", "X"), None).unwrap();
    let child = store.add_argument(argument("A", "X1"), Some(&x)).unwrap();
    let grandchild = store.add_argument(argument("A", "X11"), Some(&child)).unwrap();

    for target in [&child, &grandchild] {
        let err = store.set_supports_parent(&x, target).unwrap_err();
        assert!(matches!(err, StoreError::Cycle(_)), "got {:?}", err);
    }
    assert_eq!(store.graph().parent_of(&x), Some(&thesis_a()));
}

#[test]
fn test_delete_leaves_no_trace() {
    let mut store = MemoryStore::new();
    let x = store
        .add_argument(argument("A", "X").with_strength(StrengthType::Type2), None)
        .unwrap();
    let y = store
        .add_argument(argument("A", "Y").with_strength(StrengthType::Type2), None)
        .unwrap();
    let child = store.add_argument(argument("A", "X1"), Some(&x)).unwrap();
    let counter = store.add_counter(argument("B", "C"), &x).unwrap();
    store.add_t2_links(&x, &[y.clone()]).unwrap();
    store.add_ref_links(&x, &["thesisB".into()]).unwrap();

    let removed = store.delete_statement(&x).unwrap();
    assert_eq!(removed.len(), 5);
    assert!(store.graph().relations.iter().all(|r| !r.touches(&x)));

    let snapshot = store.snapshot();
    assert!(snapshot.nodes.iter().all(|n| n.id != x.as_str()));
    assert!(snapshot
        .edges
        .iter()
        .all(|e| e.source != x.as_str() && e.target != x.as_str()));

    // Orphans stay as detached roots and still get laid out.
    assert_eq!(store.graph().parent_of(&child), None);
    assert_eq!(store.graph().parent_of(&counter), None);
    let layout = store.layout(&Overlay::default(), &LayoutConfig::default());
    assert_eq!(layout.position(&child).map(|p| p.y), Some(0.0));
    assert_eq!(layout.len(), store.graph().statements.len());
}

#[test]
fn test_snapshot_round_trip() {
    let mut store = MemoryStore::new();
    let (x, y, _) = three_arguments(&mut store);
    store.add_counter(argument("B", "C"), &x).unwrap();
    store
        .add_evidence(argument("A", "E").with_first_mention("00:10:00"), &y)
        .unwrap();
    store.add_ref_links(&x, &[y.clone()]).unwrap();
    store.add_participant();
    store.update_participant(&"C".into(), "Carol").unwrap();

    let bytes = store.to_json().unwrap();
    let mut restored = MemoryStore::with_config(StoreConfig::empty());
    restored.load_json(&bytes, LoadMode::Replace).unwrap();
    assert_eq!(restored.graph(), store.graph());

    let mut cold = MemoryStore::new();
    cold.load_json(&bytes, LoadMode::ColdBoot).unwrap();
    assert!(cold.graph().statements.iter().all(|s| s.collapsed));
    assert_eq!(cold.graph().relations, store.graph().relations);
}

#[test]
fn test_load_rejects_broken_snapshots() {
    let mut store = MemoryStore::new();
    let x = store.add_argument(argument("A", "X"), None).unwrap();
    let good = store.snapshot();

    let mut wrong_version = good.clone();
    wrong_version.version = 2;
    assert!(matches!(
        store.load_snapshot(wrong_version, LoadMode::Replace),
        Err(StoreError::UnsupportedSnapshot(_))
    ));

    let mut dangling = good.clone();
    dangling.edges[0].target = "ghost".to_string();
    assert!(matches!(
        store.load_snapshot(dangling, LoadMode::Replace),
        Err(StoreError::NotFound(_))
    ));

    let mut missing_strength = good.clone();
    missing_strength
        .nodes
        .iter_mut()
        .filter(|n| n.id == x.as_str())
        .for_each(|n| n.strength_type = None);
    assert!(matches!(
        store.load_snapshot(missing_strength, LoadMode::Replace),
        Err(StoreError::Constraint(_))
    ));

    let mut cyclic = good.clone();
    let edge = cyclic.edges[0].clone();
    cyclic.edges.push(debatemap_store::EdgeRecord {
        id: "loop".to_string(),
        source: edge.target,
        target: edge.source,
        kind: "supports".to_string(),
    });
    assert!(store.load_snapshot(cyclic, LoadMode::Replace).is_err());

    assert_eq!(store.snapshot(), good, "rejected loads must not change the store");
}

#[test]
fn test_load_resets_ui_state() {
    let mut store = MemoryStore::new();
    let x = store.add_argument(argument("A", "X"), None).unwrap();
    store.ui_mut().set_selected(Some(x));
    let snapshot: Snapshot = store.snapshot();
    store.load_snapshot(snapshot, LoadMode::Replace).unwrap();
    assert_eq!(store.ui().selected, None);
}

#[test]
fn test_search_hide_feeds_layout() {
    let mut store = MemoryStore::new();
    let (x, y, _) = three_arguments(&mut store);
    store
        .update_statement(
            &x,
            debatemap_domain::StatementPatch {
                body: Some(Some("About carbon taxes".to_string())),
                ..Default::default()
            },
        )
        .unwrap();

    let overlay = Overlay::default().with_search("carbon", DisplayMode::Hide);
    let projection = store.project(&overlay);
    assert_eq!(projection.hits(), vec![x.clone()]);

    let layout = store.layout(&overlay, &LayoutConfig::default());
    assert_eq!(layout.len(), 1);
    assert!(layout.position(&x).is_some());
    assert!(layout.position(&y).is_none());
}

#[test]
fn test_legacy_rules_reject_counter_on_evidence() {
    let mut broad = MemoryStore::new();
    let x = broad.add_argument(argument("A", "X"), None).unwrap();
    let e = broad.add_evidence(argument("A", "E"), &x).unwrap();
    assert!(broad.add_counter(argument("B", "C"), &e).is_ok());

    let mut legacy = MemoryStore::with_config(StoreConfig::strict());
    let x = legacy.add_argument(argument("A", "X"), None).unwrap();
    let e = legacy.add_evidence(argument("A", "E"), &x).unwrap();
    let err = legacy.add_counter(argument("B", "C"), &e).unwrap_err();
    assert!(matches!(err, StoreError::Constraint(_)));
    assert_eq!(
        legacy.graph().statement(&e).map(|s| s.kind),
        Some(StatementKind::Evidence)
    );
}
