//! In-memory graph store

use crate::{LoadMode, Result, Snapshot, StoreConfig, StoreError};
use debatemap_domain::{
    DebateGraph, DebateStore, NewStatement, Participant, ParticipantId, Relation, RelationId,
    RelationKind, Statement, StatementId, StatementKind, StatementPatch, StrengthType,
};
use debatemap_layout::{Layout, LayoutConfig, LayoutEngine};
use debatemap_rules::{ChildRef, RuleChecker};
use debatemap_view::{Overlay, Projection, UiState};

/// The authoritative, constraint-checked debate graph
///
/// Every mutation goes through this facade. It consults the [`RuleChecker`]
/// before touching the graph, so a failed call leaves both the graph and the
/// UI state exactly as they were.
///
/// UI state (selection, attachment mode, filters, link highlight) lives next
/// to the graph but is never part of snapshots or invariants.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    graph: DebateGraph,
    ui: UiState,
    checker: RuleChecker,
    config: StoreConfig,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// A store seeded with participants `A` and `B` and their theses
    /// `thesisA` and `thesisB`
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// A store with the given configuration
    pub fn with_config(config: StoreConfig) -> Self {
        let mut store = Self {
            graph: DebateGraph::new(),
            ui: UiState::default(),
            checker: RuleChecker::new(config.rules.clone()),
            config,
        };
        store.seed();
        store
    }

    /// Wrap an existing graph after auditing it
    pub fn from_graph(graph: DebateGraph, config: StoreConfig) -> Result<Self> {
        let checker = RuleChecker::new(config.rules.clone());
        checker.audit(&graph)?;
        Ok(Self {
            graph,
            ui: UiState::default(),
            checker,
            config,
        })
    }

    fn seed(&mut self) {
        for index in 0..self.config.seed_participants {
            let participant = ParticipantId::from_index(index);
            self.graph.participants.push(Participant::new(
                participant.clone(),
                Participant::default_name(&participant),
            ));
            self.graph.statements.push(Statement::from_draft(
                StatementId::new(format!("thesis{}", participant)),
                StatementKind::Thesis,
                NewStatement::new(participant.clone(), format!("{} Thesis", participant)),
            ));
        }
    }

    /// The active configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The rule checker used for every mutation
    pub fn checker(&self) -> &RuleChecker {
        &self.checker
    }

    /// Transient UI state
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Mutable UI state; these fields carry no constraints
    pub fn ui_mut(&mut self) -> &mut UiState {
        &mut self.ui
    }

    /// Palette color of a participant
    pub fn participant_color(&self, id: &ParticipantId) -> Option<&'static str> {
        self.graph.participant_color(id)
    }

    /// Overlay built from the current UI state
    pub fn overlay(&self) -> Overlay {
        Overlay::from_ui(&self.ui)
    }

    /// Project the graph through `overlay`
    pub fn project(&self, overlay: &Overlay) -> Projection {
        Projection::compute(&self.graph, overlay)
    }

    /// Lay out the statements `overlay` leaves visible
    pub fn layout(&self, overlay: &Overlay, config: &LayoutConfig) -> Layout {
        let visible = self.project(overlay).visible_graph(&self.graph);
        LayoutEngine::new(config.clone()).layout(&visible)
    }

    /// Enter attachment mode for `id`, offering every legal new parent
    ///
    /// Returns the candidates. A statement that cannot have a parent (a
    /// Thesis) yields no candidates and leaves attachment mode off.
    pub fn begin_attachment(&mut self, id: &StatementId) -> Result<Vec<StatementId>> {
        let candidates = self.checker.eligible_parents(&self.graph, id)?;
        if candidates.is_empty() {
            self.ui.end_attachment();
        } else {
            self.ui.begin_attachment(id.clone(), candidates.clone());
        }
        Ok(candidates)
    }

    /// Re-attach the statement in attachment mode to `target` and leave the mode
    pub fn complete_attachment(&mut self, target: &StatementId) -> Result<RelationId> {
        let child = self.ui.reparent_target.clone().ok_or_else(|| {
            StoreError::NotFound("no statement is waiting for a new parent".to_string())
        })?;
        let relation = self.reattach(&child, target)?;
        self.ui.end_attachment();
        Ok(relation)
    }

    /// Move `child` under `new_parent`, using the relation its kind requires
    pub fn reattach(&mut self, child: &StatementId, new_parent: &StatementId) -> Result<RelationId> {
        let kind = self.checker.require_statement(&self.graph, child)?.kind;
        match kind.parent_relation() {
            Some(RelationKind::Supports) => self.set_supports_parent(child, new_parent),
            Some(relation) => self.set_relation_target(child, relation, new_parent),
            None => Err(StoreError::Constraint(format!(
                "a {} cannot have a parent",
                kind
            ))),
        }
    }

    /// Export the graph as a snapshot document
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_graph(&self.graph)
    }

    /// Replace the whole graph with a snapshot
    ///
    /// The snapshot must pass the full invariant audit. UI state is reset.
    pub fn load_snapshot(&mut self, snapshot: Snapshot, mode: LoadMode) -> Result<()> {
        let graph = snapshot.into_graph(mode)?;
        self.checker.audit(&graph)?;

        tracing::info!(
            participants = graph.participants.len(),
            statements = graph.statements.len(),
            relations = graph.relations.len(),
            mode = ?mode,
            "loaded snapshot"
        );
        self.graph = graph;
        self.ui = UiState::default();
        Ok(())
    }

    /// Load a snapshot from JSON bytes
    pub fn load_json(&mut self, bytes: &[u8], mode: LoadMode) -> Result<()> {
        let snapshot = Snapshot::from_json_slice(bytes)?;
        self.load_snapshot(snapshot, mode)
    }

    /// Export a snapshot as JSON bytes
    pub fn to_json(&self) -> Result<Vec<u8>> {
        self.snapshot().to_json_bytes()
    }

    fn fresh_statement_id(&self) -> StatementId {
        loop {
            let id = StatementId::generate();
            if !self.graph.contains_statement(&id) {
                return id;
            }
        }
    }

    fn fresh_relation_id(&self) -> RelationId {
        loop {
            let id = RelationId::generate();
            if self.graph.relation(&id).is_none() {
                return id;
            }
        }
    }

    fn check_draft(&self, kind: StatementKind, draft: &NewStatement) -> Result<()> {
        self.checker.require_participant(&self.graph, &draft.participant)?;
        self.checker.check_strength(kind, draft.strength)?;
        Ok(())
    }

    fn insert_thesis(&mut self, draft: NewStatement) -> StatementId {
        let id = self.fresh_statement_id();
        self.graph
            .statements
            .push(Statement::from_draft(id.clone(), StatementKind::Thesis, draft));
        id
    }

    fn add_child(
        &mut self,
        kind: StatementKind,
        draft: NewStatement,
        parent: &StatementId,
    ) -> Result<StatementId> {
        self.check_draft(kind, &draft)?;
        self.checker
            .check_attachment(&self.graph, ChildRef::new(kind, &draft.participant), parent)?;
        let relation_kind = kind
            .parent_relation()
            .ok_or_else(|| StoreError::Constraint(format!("a {} cannot have a parent", kind)))?;

        let id = self.fresh_statement_id();
        let relation_id = self.fresh_relation_id();
        self.graph
            .statements
            .push(Statement::from_draft(id.clone(), kind, draft));
        self.graph.relations.push(Relation::attaching(
            relation_id.clone(),
            relation_kind,
            parent.clone(),
            id.clone(),
        ));

        tracing::debug!(statement = %id, %kind, %parent, relation = %relation_id, "added statement");
        Ok(id)
    }

    /// The Thesis an Argument without explicit parent attaches to
    ///
    /// Returns the Thesis and whether it was created for this call.
    fn default_parent(&mut self, participant: &ParticipantId) -> Result<(StatementId, bool)> {
        if let Some(thesis) = self.graph.theses_of(participant).next() {
            return Ok((thesis.id.clone(), false));
        }
        if !self.config.implicit_thesis {
            return Err(StoreError::NotFound(format!(
                "participant '{}' has no thesis to attach an argument to",
                participant
            )));
        }

        let id = self.insert_thesis(NewStatement::new(
            participant.clone(),
            format!("{} Thesis", participant),
        ));
        tracing::info!(%participant, thesis = %id, "created implicit thesis");
        Ok((id, true))
    }

    /// Replace or extend the peer links of `kind` at `source`
    ///
    /// Unknown ids fail the whole call before anything changes. Existing
    /// candidates that break the peer rules are skipped. Returns the ids of
    /// every `kind` link touching `source` afterwards.
    fn link_peers(
        &mut self,
        kind: RelationKind,
        source: &StatementId,
        targets: &[StatementId],
        replace: bool,
    ) -> Result<Vec<RelationId>> {
        self.checker.require_statement(&self.graph, source)?;
        for target in targets {
            self.checker.require_statement(&self.graph, target)?;
        }

        let mut wanted: Vec<&StatementId> = Vec::new();
        for target in targets {
            if !wanted.contains(&target)
                && self.checker.check_peer(&self.graph, kind, source, target).is_ok()
            {
                wanted.push(target);
            }
        }

        if replace {
            let dropped: Vec<RelationId> = self
                .graph
                .relations
                .iter()
                .filter(|r| r.kind == kind)
                .filter(|r| r.other_end(source).is_some_and(|other| !wanted.contains(&other)))
                .map(|r| r.id.clone())
                .collect();
            self.remove_relations(&dropped);
        }

        let mut added = 0;
        for target in wanted {
            if self.graph.peer_relation(kind, source, target).is_none() {
                let id = self.fresh_relation_id();
                self.graph
                    .relations
                    .push(Relation::peer(id, source.clone(), target.clone(), kind));
                added += 1;
            }
        }

        let links: Vec<RelationId> = self
            .graph
            .relations
            .iter()
            .filter(|r| r.kind == kind && r.touches(source))
            .map(|r| r.id.clone())
            .collect();
        tracing::debug!(%source, %kind, added, total = links.len(), replace, "updated peer links");
        Ok(links)
    }

    fn remove_relations(&mut self, ids: &[RelationId]) {
        if ids.is_empty() {
            return;
        }
        self.graph.relations.retain(|r| !ids.contains(&r.id));
        for id in ids {
            self.ui.forget_relation(id);
        }
    }
}

impl DebateStore for MemoryStore {
    type Error = StoreError;

    fn graph(&self) -> &DebateGraph {
        &self.graph
    }

    fn add_thesis(&mut self, draft: NewStatement) -> Result<StatementId> {
        self.check_draft(StatementKind::Thesis, &draft)?;
        let id = self.insert_thesis(draft);
        tracing::debug!(statement = %id, kind = %StatementKind::Thesis, "added statement");
        Ok(id)
    }

    fn add_argument(
        &mut self,
        draft: NewStatement,
        parent: Option<&StatementId>,
    ) -> Result<StatementId> {
        let Some(parent) = parent else {
            self.check_draft(StatementKind::Argument, &draft)?;
            let (thesis, created) = self.default_parent(&draft.participant)?;
            let result = self.add_child(StatementKind::Argument, draft, &thesis);
            if result.is_err() && created {
                self.graph.statements.retain(|s| s.id != thesis);
            }
            return result;
        };
        self.add_child(StatementKind::Argument, draft, parent)
    }

    fn add_counter(&mut self, draft: NewStatement, target: &StatementId) -> Result<StatementId> {
        self.add_child(StatementKind::Counter, draft, target)
    }

    fn add_evidence(&mut self, draft: NewStatement, target: &StatementId) -> Result<StatementId> {
        self.add_child(StatementKind::Evidence, draft, target)
    }

    fn add_agreement(&mut self, draft: NewStatement, target: &StatementId) -> Result<StatementId> {
        self.add_child(StatementKind::Agreement, draft, target)
    }

    fn add_argument_summary(
        &mut self,
        draft: NewStatement,
        thesis: &StatementId,
    ) -> Result<StatementId> {
        self.add_child(StatementKind::ArgumentSummary, draft, thesis)
    }

    fn update_statement(&mut self, id: &StatementId, patch: StatementPatch) -> Result<()> {
        let statement = self.checker.require_statement(&self.graph, id)?;
        if let Some(strength) = patch.strength {
            self.checker.check_strength(statement.kind, Some(strength))?;
        }

        let leaves_type2 = patch
            .strength
            .is_some_and(|strength| strength != StrengthType::Type2);
        if leaves_type2 {
            let dropped: Vec<RelationId> = self
                .graph
                .incident_relations(id)
                .filter(|r| r.kind == RelationKind::T2Link)
                .map(|r| r.id.clone())
                .collect();
            if !dropped.is_empty() {
                tracing::debug!(statement = %id, links = dropped.len(), "dropping t2-links");
            }
            self.remove_relations(&dropped);
        }

        if let Some(statement) = self.graph.statement_mut(id) {
            patch.apply_to(statement);
        }
        tracing::debug!(statement = %id, "updated statement");
        Ok(())
    }

    fn delete_statement(&mut self, id: &StatementId) -> Result<Vec<RelationId>> {
        self.checker.require_statement(&self.graph, id)?;

        let removed: Vec<RelationId> = self
            .graph
            .incident_relations(id)
            .map(|r| r.id.clone())
            .collect();
        self.remove_relations(&removed);
        self.graph.statements.retain(|s| &s.id != id);
        self.ui.forget_statement(id);

        tracing::debug!(statement = %id, relations = removed.len(), "deleted statement");
        Ok(removed)
    }

    fn set_supports_parent(
        &mut self,
        child: &StatementId,
        new_parent: &StatementId,
    ) -> Result<RelationId> {
        let statement = self.checker.require_statement(&self.graph, child)?;
        if !matches!(
            statement.kind,
            StatementKind::Argument | StatementKind::ArgumentSummary
        ) {
            return Err(StoreError::Constraint(format!(
                "only Arguments and Argument Summaries are attached with supports ('{}' is a {})",
                child, statement.kind
            )));
        }
        self.checker
            .check_attachment(&self.graph, ChildRef::existing(statement), new_parent)?;

        let existing = self.graph.parent_relation(child).map(|r| r.id.clone());
        let relation_id = match existing {
            Some(id) => {
                if let Some(relation) = self.graph.relation_mut(&id) {
                    relation.source = new_parent.clone();
                }
                id
            }
            None => {
                let id = self.fresh_relation_id();
                self.graph.relations.push(Relation::attaching(
                    id.clone(),
                    RelationKind::Supports,
                    new_parent.clone(),
                    child.clone(),
                ));
                id
            }
        };

        tracing::debug!(statement = %child, parent = %new_parent, relation = %relation_id, "re-parented statement");
        Ok(relation_id)
    }

    fn set_relation_target(
        &mut self,
        source: &StatementId,
        kind: RelationKind,
        new_target: &StatementId,
    ) -> Result<RelationId> {
        let statement = self.checker.require_statement(&self.graph, source)?;
        if kind == RelationKind::Supports || statement.kind.parent_relation() != Some(kind) {
            return Err(StoreError::Constraint(format!(
                "a {} cannot be re-targeted through {}",
                statement.kind, kind
            )));
        }
        self.checker
            .check_attachment(&self.graph, ChildRef::existing(statement), new_target)?;

        let existing = self
            .graph
            .relations
            .iter()
            .find(|r| r.kind == kind && &r.source == source)
            .map(|r| r.id.clone());
        let relation_id = match existing {
            Some(id) => {
                if let Some(relation) = self.graph.relation_mut(&id) {
                    relation.target = new_target.clone();
                }
                id
            }
            None => {
                let id = self.fresh_relation_id();
                self.graph.relations.push(Relation::attaching(
                    id.clone(),
                    kind,
                    new_target.clone(),
                    source.clone(),
                ));
                id
            }
        };

        tracing::debug!(statement = %source, target = %new_target, relation = %relation_id, "re-targeted statement");
        Ok(relation_id)
    }

    fn set_t2_links(
        &mut self,
        source: &StatementId,
        targets: &[StatementId],
    ) -> Result<Vec<RelationId>> {
        self.link_peers(RelationKind::T2Link, source, targets, true)
    }

    fn add_t2_links(
        &mut self,
        source: &StatementId,
        targets: &[StatementId],
    ) -> Result<Vec<RelationId>> {
        self.link_peers(RelationKind::T2Link, source, targets, false)
    }

    fn set_ref_links(
        &mut self,
        source: &StatementId,
        targets: &[StatementId],
    ) -> Result<Vec<RelationId>> {
        self.link_peers(RelationKind::RefersTo, source, targets, true)
    }

    fn add_ref_links(
        &mut self,
        source: &StatementId,
        targets: &[StatementId],
    ) -> Result<Vec<RelationId>> {
        self.link_peers(RelationKind::RefersTo, source, targets, false)
    }

    fn set_all_collapsed(&mut self, collapsed: bool) {
        for statement in &mut self.graph.statements {
            statement.collapsed = collapsed;
        }
        tracing::debug!(collapsed, statements = self.graph.statements.len(), "set collapsed on all statements");
    }

    fn add_participant(&mut self) -> ParticipantId {
        let mut index = self.graph.participants.len();
        let id = loop {
            let candidate = ParticipantId::from_index(index);
            if self.graph.participant(&candidate).is_none() {
                break candidate;
            }
            index += 1;
        };
        self.graph
            .participants
            .push(Participant::new(id.clone(), Participant::default_name(&id)));
        tracing::debug!(participant = %id, "added participant");
        id
    }

    fn update_participant(&mut self, id: &ParticipantId, name: &str) -> Result<()> {
        let participant = self
            .graph
            .participant_mut(id)
            .ok_or_else(|| StoreError::NotFound(format!("participant '{}' does not exist", id)))?;
        participant.name = name.to_string();
        tracing::debug!(participant = %id, name, "renamed participant");
        Ok(())
    }
}
