//! Property tests: random operation sequences keep every invariant

use debatemap_domain::{
    DebateStore, NewStatement, ParticipantId, RelationKind, StatementId, StatementPatch,
    StrengthType,
};
use debatemap_rules::audit;
use debatemap_store::{LoadMode, MemoryStore, StoreError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Thesis(usize),
    Argument(usize, Option<usize>, usize),
    Counter(usize, usize, usize),
    Evidence(usize, usize, usize),
    Agreement(usize, usize),
    Summary(usize, usize),
    Strength(usize, usize),
    Delete(usize),
    Reparent(usize, usize),
    Retarget(usize, usize),
    T2(usize, Vec<usize>, bool),
    Refs(usize, Vec<usize>, bool),
    Collapse(bool),
    Participant,
}

fn op() -> impl Strategy<Value = Op> {
    let i = 0usize..64;
    prop_oneof![
        i.clone().prop_map(Op::Thesis),
        (i.clone(), prop::option::of(i.clone()), 0usize..4).prop_map(|(p, t, s)| Op::Argument(p, t, s)),
        (i.clone(), i.clone(), 0usize..4).prop_map(|(p, t, s)| Op::Counter(p, t, s)),
        (i.clone(), i.clone(), 0usize..4).prop_map(|(p, t, s)| Op::Evidence(p, t, s)),
        (i.clone(), i.clone()).prop_map(|(p, t)| Op::Agreement(p, t)),
        (i.clone(), i.clone()).prop_map(|(p, t)| Op::Summary(p, t)),
        (i.clone(), 0usize..4).prop_map(|(t, s)| Op::Strength(t, s)),
        i.clone().prop_map(Op::Delete),
        (i.clone(), i.clone()).prop_map(|(a, b)| Op::Reparent(a, b)),
        (i.clone(), i.clone()).prop_map(|(a, b)| Op::Retarget(a, b)),
        (i.clone(), prop::collection::vec(i.clone(), 0..4), any::<bool>()).prop_map(|(a, t, r)| Op::T2(a, t, r)),
        (i.clone(), prop::collection::vec(i.clone(), 0..4), any::<bool>()).prop_map(|(a, t, r)| Op::Refs(a, t, r)),
        any::<bool>().prop_map(Op::Collapse),
        Just(Op::Participant),
    ]
}

const STRENGTHS: [StrengthType; 4] = [
    StrengthType::Type1,
    StrengthType::Type2,
    StrengthType::Type3,
    StrengthType::Type4,
];

fn participant(store: &MemoryStore, i: usize) -> ParticipantId {
    let participants = &store.graph().participants;
    participants[i % participants.len()].id.clone()
}

fn statement(store: &MemoryStore, i: usize) -> StatementId {
    let statements = &store.graph().statements;
    if statements.is_empty() {
        return "missing".into();
    }
    statements[i % statements.len()].id.clone()
}

fn draft(store: &MemoryStore, p: usize, strength: Option<usize>) -> NewStatement {
    let mut draft = NewStatement::new(participant(store, p), format!("s{}", store.graph().statements.len()));
    draft.strength = strength.map(|s| STRENGTHS[s]);
    draft
}

/// Apply one operation; `Err` only carries the category for reporting
fn apply(store: &mut MemoryStore, op: &Op) -> Result<(), StoreError> {
    match op {
        Op::Thesis(p) => store.add_thesis(draft(store, *p, None)).map(drop),
        Op::Argument(p, t, s) => {
            let parent = t.map(|t| statement(store, t));
            store.add_argument(draft(store, *p, Some(*s)), parent.as_ref()).map(drop)
        }
        Op::Counter(p, t, s) => {
            let target = statement(store, *t);
            store.add_counter(draft(store, *p, Some(*s)), &target).map(drop)
        }
        Op::Evidence(p, t, s) => {
            let target = statement(store, *t);
            store.add_evidence(draft(store, *p, Some(*s)), &target).map(drop)
        }
        Op::Agreement(p, t) => {
            let target = statement(store, *t);
            store.add_agreement(draft(store, *p, None), &target).map(drop)
        }
        Op::Summary(p, t) => {
            let target = statement(store, *t);
            store.add_argument_summary(draft(store, *p, None), &target).map(drop)
        }
        Op::Strength(t, s) => {
            let id = statement(store, *t);
            let patch = StatementPatch {
                strength: Some(STRENGTHS[*s]),
                ..Default::default()
            };
            store.update_statement(&id, patch)
        }
        Op::Delete(t) => {
            let id = statement(store, *t);
            let removed = store.delete_statement(&id)?;
            assert!(store.graph().relations.iter().all(|r| !r.touches(&id)));
            assert!(removed.iter().all(|r| store.graph().relation(r).is_none()));
            Ok(())
        }
        Op::Reparent(a, b) => {
            let (child, parent) = (statement(store, *a), statement(store, *b));
            store.reattach(&child, &parent).map(drop)
        }
        Op::Retarget(a, b) => {
            let (source, target) = (statement(store, *a), statement(store, *b));
            store
                .set_relation_target(&source, RelationKind::Attacks, &target)
                .map(drop)
        }
        Op::T2(a, targets, replace) => {
            let source = statement(store, *a);
            let targets: Vec<StatementId> = targets.iter().map(|t| statement(store, *t)).collect();
            if *replace {
                store.set_t2_links(&source, &targets).map(drop)
            } else {
                store.add_t2_links(&source, &targets).map(drop)
            }
        }
        Op::Refs(a, targets, replace) => {
            let source = statement(store, *a);
            let targets: Vec<StatementId> = targets.iter().map(|t| statement(store, *t)).collect();
            if *replace {
                store.set_ref_links(&source, &targets).map(drop)
            } else {
                store.add_ref_links(&source, &targets).map(drop)
            }
        }
        Op::Collapse(flag) => {
            store.set_all_collapsed(*flag);
            Ok(())
        }
        Op::Participant => {
            store.add_participant();
            Ok(())
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn operations_keep_graph_valid(ops in prop::collection::vec(op(), 1..60)) {
        let mut store = MemoryStore::new();
        for op in &ops {
            let before = store.graph().clone();
            let result = apply(&mut store, op);
            if result.is_err() {
                prop_assert_eq!(store.graph(), &before, "failed {:?} changed the graph", op);
            }
            let audited = audit(store.graph());
            prop_assert!(audited.is_ok(), "after {:?}: {:?}", op, audited);
        }
    }

    #[test]
    fn snapshots_round_trip(ops in prop::collection::vec(op(), 1..40)) {
        let mut store = MemoryStore::new();
        for op in &ops {
            let _ = apply(&mut store, op);
        }

        let bytes = store.to_json().unwrap();
        let mut restored = MemoryStore::new();
        restored.load_json(&bytes, LoadMode::Replace).unwrap();
        prop_assert_eq!(restored.graph(), store.graph());
    }
}
