//! Statement module - the nodes of a debate map

use crate::{ParticipantId, RelationKind, StatementId};
use std::fmt;

/// Kind of a statement
///
/// The kind decides which hierarchical relation attaches the statement to its
/// parent and whether a [`StrengthType`] is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatementKind {
    /// Top-level claim of one participant; never has a parent
    Thesis,

    /// Supports its parent, by the same participant
    Argument,

    /// High-level restatement of a Thesis, at most one per Thesis
    ArgumentSummary,

    /// Attacks an opponent's Argument, Counter or Evidence
    Counter,

    /// Backs an Argument, Counter or Argument Summary of the same participant
    Evidence,

    /// Concedes an opponent's Argument or Counter
    Agreement,
}

impl StatementKind {
    /// All kinds, in declaration order
    pub const ALL: [StatementKind; 6] = [
        StatementKind::Thesis,
        StatementKind::Argument,
        StatementKind::ArgumentSummary,
        StatementKind::Counter,
        StatementKind::Evidence,
        StatementKind::Agreement,
    ];

    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Thesis => "Thesis",
            StatementKind::Argument => "Argument",
            StatementKind::ArgumentSummary => "ArgumentSummary",
            StatementKind::Counter => "Counter",
            StatementKind::Evidence => "Evidence",
            StatementKind::Agreement => "Agreement",
        }
    }

    /// Parse a kind from a string, ignoring case, spaces, dashes and underscores
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "thesis" => Some(StatementKind::Thesis),
            "argument" => Some(StatementKind::Argument),
            "argumentsummary" | "summary" => Some(StatementKind::ArgumentSummary),
            "counter" => Some(StatementKind::Counter),
            "evidence" => Some(StatementKind::Evidence),
            "agreement" => Some(StatementKind::Agreement),
            _ => None,
        }
    }

    /// Whether statements of this kind must carry a strength type
    pub fn requires_strength(&self) -> bool {
        matches!(
            self,
            StatementKind::Argument | StatementKind::Counter | StatementKind::Evidence
        )
    }

    /// The hierarchical relation that attaches a statement of this kind to its parent
    ///
    /// Returns `None` for a Thesis, which is always a root.
    pub fn parent_relation(&self) -> Option<RelationKind> {
        match self {
            StatementKind::Thesis => None,
            StatementKind::Argument | StatementKind::ArgumentSummary => Some(RelationKind::Supports),
            StatementKind::Counter => Some(RelationKind::Attacks),
            StatementKind::Evidence => Some(RelationKind::EvidenceOf),
            StatementKind::Agreement => Some(RelationKind::AgreesWith),
        }
    }

    /// Left-to-right ordering priority among siblings in the layout
    ///
    /// Evidence < Agreement < Argument < Counter. Summaries and theses are
    /// placed separately and sort last.
    pub fn sibling_priority(&self) -> u8 {
        match self {
            StatementKind::Evidence => 0,
            StatementKind::Agreement => 1,
            StatementKind::Argument => 2,
            StatementKind::Counter => 3,
            StatementKind::ArgumentSummary => 4,
            StatementKind::Thesis => 5,
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StatementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid statement kind: {}", s))
    }
}

/// How a statement logically relates to its parent
///
/// Required on Arguments, Counters and Evidence, forbidden elsewhere.
/// `Type2` statements additionally take part in `t2-link` clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthType {
    /// Type 1
    Type1,
    /// Type 2 (joint support, see `t2-link`)
    Type2,
    /// Type 3
    Type3,
    /// Type 4
    Type4,
}

impl StrengthType {
    /// All strength types
    pub const ALL: [StrengthType; 4] = [
        StrengthType::Type1,
        StrengthType::Type2,
        StrengthType::Type3,
        StrengthType::Type4,
    ];

    /// Get the display name (`"Type 1"` ... `"Type 4"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthType::Type1 => "Type 1",
            StrengthType::Type2 => "Type 2",
            StrengthType::Type3 => "Type 3",
            StrengthType::Type4 => "Type 4",
        }
    }

    /// Parse `"Type 1"`, `"Type1"`, `"type 1"` or a bare `"1"`
    pub fn parse(s: &str) -> Option<Self> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let lower = compact.to_lowercase();
        let digits = lower.strip_prefix("type").unwrap_or(&lower);
        match digits {
            "1" => Some(StrengthType::Type1),
            "2" => Some(StrengthType::Type2),
            "3" => Some(StrengthType::Type3),
            "4" => Some(StrengthType::Type4),
            _ => None,
        }
    }
}

impl fmt::Display for StrengthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StrengthType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid strength type: {}", s))
    }
}

/// A statement - one node of the debate map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Unique identifier
    pub id: StatementId,

    /// Kind of statement
    pub kind: StatementKind,

    /// Owning participant
    pub participant: ParticipantId,

    /// Short title shown on the node
    pub title: String,

    /// Optional longer text
    pub body: Option<String>,

    /// Free-form timestamp of the first mention, typically `HH:MM:SS`
    pub first_mention: Option<String>,

    /// Strength qualifier, present iff the kind requires one
    pub strength: Option<StrengthType>,

    /// Hides hierarchical descendants in the view
    pub collapsed: bool,

    /// Auxiliary view flag, never persisted
    pub self_collapsed: bool,
}

impl Statement {
    /// Build a statement from a draft
    pub fn from_draft(id: StatementId, kind: StatementKind, draft: NewStatement) -> Self {
        Self {
            id,
            kind,
            participant: draft.participant,
            title: draft.title,
            body: draft.body,
            first_mention: draft.first_mention,
            strength: draft.strength,
            collapsed: false,
            self_collapsed: false,
        }
    }

    /// Whether this statement may take part in a `t2-link`
    pub fn is_t2_candidate(&self) -> bool {
        self.kind.requires_strength() && self.strength == Some(StrengthType::Type2)
    }
}

/// Input for the typed statement constructors of a store
///
/// # Examples
///
/// ```
/// use debatemap_domain::{NewStatement, ParticipantId, StrengthType};
///
/// let draft = NewStatement::new(ParticipantId::from("A"), "Taxes fund schools")
///     .with_body("Most school budgets come from property taxes")
///     .with_strength(StrengthType::Type1)
///     .with_first_mention("00:12:30");
/// assert_eq!(draft.strength, Some(StrengthType::Type1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStatement {
    /// Owning participant
    pub participant: ParticipantId,
    /// Title
    pub title: String,
    /// Optional body
    pub body: Option<String>,
    /// Optional first-mention timestamp
    pub first_mention: Option<String>,
    /// Strength, required for Arguments, Counters and Evidence
    pub strength: Option<StrengthType>,
}

impl NewStatement {
    /// Start a draft with the mandatory fields
    pub fn new(participant: ParticipantId, title: impl Into<String>) -> Self {
        Self {
            participant,
            title: title.into(),
            body: None,
            first_mention: None,
            strength: None,
        }
    }

    /// Attach a body; empty strings are treated as no body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let body = body.into();
        self.body = if body.is_empty() { None } else { Some(body) };
        self
    }

    /// Attach a first-mention timestamp
    pub fn with_first_mention(mut self, first_mention: impl Into<String>) -> Self {
        self.first_mention = Some(first_mention.into());
        self
    }

    /// Attach a strength type
    pub fn with_strength(mut self, strength: StrengthType) -> Self {
        self.strength = Some(strength);
        self
    }
}

/// Partial update of the mutable fields of a statement
///
/// Kind and participant are fixed at creation. For the doubly optional
/// fields, `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementPatch {
    /// New title
    pub title: Option<String>,
    /// New body, or `Some(None)` to clear
    pub body: Option<Option<String>>,
    /// New first mention, or `Some(None)` to clear
    pub first_mention: Option<Option<String>>,
    /// New strength type
    pub strength: Option<StrengthType>,
    /// New collapsed flag
    pub collapsed: Option<bool>,
    /// New self-collapsed flag
    pub self_collapsed: Option<bool>,
}

impl StatementPatch {
    /// Whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self == &StatementPatch::default()
    }

    /// Apply the patch to a statement without any validation
    pub fn apply_to(self, statement: &mut Statement) {
        if let Some(title) = self.title {
            statement.title = title;
        }
        if let Some(body) = self.body {
            statement.body = body;
        }
        if let Some(first_mention) = self.first_mention {
            statement.first_mention = first_mention;
        }
        if let Some(strength) = self.strength {
            statement.strength = Some(strength);
        }
        if let Some(collapsed) = self.collapsed {
            statement.collapsed = collapsed;
        }
        if let Some(self_collapsed) = self.self_collapsed {
            statement.self_collapsed = self_collapsed;
        }
    }
}
