//! Overlay inputs and transient UI state

use debatemap_domain::{
    parse_timestamp, ParticipantId, RelationId, Statement, StatementId, StatementKind, StrengthType,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How statements that fail a search or filter are shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Keep them visible but dimmed
    #[default]
    Dim,
    /// Remove them (and their edges) from the visible graph
    Hide,
}

/// Participant, kind and strength filter sets
///
/// An empty set lets everything through on that axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    /// Allowed participants
    pub participants: BTreeSet<ParticipantId>,
    /// Allowed statement kinds
    pub kinds: BTreeSet<StatementKind>,
    /// Allowed strength types (statements without one always pass)
    pub strengths: BTreeSet<StrengthType>,
}

impl Filters {
    /// Whether no filter is active
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty() && self.kinds.is_empty() && self.strengths.is_empty()
    }

    /// Whether a statement passes every active filter
    pub fn passes(&self, statement: &Statement) -> bool {
        let participant_ok =
            self.participants.is_empty() || self.participants.contains(&statement.participant);
        let kind_ok = self.kinds.is_empty() || self.kinds.contains(&statement.kind);
        let strength_ok = self.strengths.is_empty()
            || statement
                .strength
                .map_or(true, |strength| self.strengths.contains(&strength));
        participant_ok && kind_ok && strength_ok
    }
}

/// Transient UI state that lives next to the graph but never in snapshots
///
/// These are plain fields: they carry no constraints of their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Currently selected statement
    pub selected: Option<StatementId>,
    /// Statement being re-parented or re-targeted
    pub reparent_target: Option<StatementId>,
    /// Non-empty while the user is asked to pick a parent or target
    pub eligible_attach_targets: Vec<StatementId>,
    /// Hovered or clicked relation
    pub link_highlight: Option<RelationId>,
    /// Active filters
    pub filters: Filters,
    /// How filtered-out statements are shown
    pub filter_mode: DisplayMode,
}

impl UiState {
    /// Select a statement (or clear the selection)
    pub fn set_selected(&mut self, id: Option<StatementId>) {
        self.selected = id;
    }

    /// Enter attachment mode for `target` with the given candidates
    pub fn begin_attachment(&mut self, target: StatementId, candidates: Vec<StatementId>) {
        self.reparent_target = Some(target);
        self.eligible_attach_targets = candidates;
    }

    /// Leave attachment mode
    pub fn end_attachment(&mut self) {
        self.reparent_target = None;
        self.eligible_attach_targets.clear();
    }

    /// Whether the UI is asking the user to pick a parent or target
    pub fn in_attachment_mode(&self) -> bool {
        !self.eligible_attach_targets.is_empty()
    }

    /// Highlight a relation (or clear the highlight)
    pub fn set_link_highlight(&mut self, id: Option<RelationId>) {
        self.link_highlight = id;
    }

    /// Replace the filters
    pub fn set_filters(&mut self, filters: Filters, mode: DisplayMode) {
        self.filters = filters;
        self.filter_mode = mode;
    }

    /// Drop every reference to a deleted statement
    ///
    /// Attachment mode ends when the waiting statement or its last candidate
    /// goes away.
    pub fn forget_statement(&mut self, id: &StatementId) {
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        if self.reparent_target.as_ref() == Some(id) {
            self.end_attachment();
        }
        self.eligible_attach_targets.retain(|candidate| candidate != id);
        if self.eligible_attach_targets.is_empty() {
            self.end_attachment();
        }
    }

    /// Drop every reference to a deleted relation
    pub fn forget_relation(&mut self, id: &RelationId) {
        if self.link_highlight.as_ref() == Some(id) {
            self.link_highlight = None;
        }
    }
}

/// All inputs of a view projection besides the graph itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    /// Raw search query
    pub search: String,
    /// How non-matching statements are shown while a search is active
    pub search_mode: DisplayMode,
    /// Active filters
    pub filters: Filters,
    /// How filtered-out statements are shown
    pub filter_mode: DisplayMode,
    /// Hovered or clicked relation
    pub active_edge: Option<RelationId>,
    /// Time highlight cursor, in seconds
    pub time_cursor: Option<u32>,
    /// Candidates while in attachment mode
    pub eligible_targets: BTreeSet<StatementId>,
}

impl Overlay {
    /// Overlay carrying the filter, highlight and attachment state of the UI
    pub fn from_ui(ui: &UiState) -> Self {
        Self {
            filters: ui.filters.clone(),
            filter_mode: ui.filter_mode,
            active_edge: ui.link_highlight.clone(),
            eligible_targets: ui.eligible_attach_targets.iter().cloned().collect(),
            ..Default::default()
        }
    }

    /// Set the search query
    pub fn with_search(mut self, query: impl Into<String>, mode: DisplayMode) -> Self {
        self.search = query.into();
        self.search_mode = mode;
        self
    }

    /// Set the filters
    pub fn with_filters(mut self, filters: Filters, mode: DisplayMode) -> Self {
        self.filters = filters;
        self.filter_mode = mode;
        self
    }

    /// Focus a relation
    pub fn with_active_edge(mut self, id: RelationId) -> Self {
        self.active_edge = Some(id);
        self
    }

    /// Set the time cursor from an `HH:MM:SS` string; unparseable input clears it
    pub fn with_time_cursor(mut self, cursor: &str) -> Self {
        self.time_cursor = parse_timestamp(cursor);
        self
    }

    /// Enter attachment mode with the given candidates
    pub fn with_eligible_targets(mut self, targets: impl IntoIterator<Item = StatementId>) -> Self {
        self.eligible_targets = targets.into_iter().collect();
        self
    }
}
