//! Time highlight: the statements mentioned right before and after a cursor

use debatemap_domain::{parse_timestamp, Statement, StatementId};

/// The statements surrounding a time cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeNeighbors {
    /// Latest first mention at or before the cursor
    pub lower: Option<StatementId>,
    /// Earliest first mention after the cursor
    pub upper: Option<StatementId>,
}

impl TimeNeighbors {
    /// Whether `id` is one of the two neighbors
    pub fn contains(&self, id: &StatementId) -> bool {
        self.lower.as_ref() == Some(id) || self.upper.as_ref() == Some(id)
    }

    /// Whether neither neighbor exists
    pub fn is_empty(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }
}

/// Find the lower and upper time neighbors of `cursor` (in seconds)
///
/// Statements without a parseable first mention are ignored. On equal
/// timestamps the statement seen first wins.
pub fn time_neighbors<'a>(
    statements: impl IntoIterator<Item = &'a Statement>,
    cursor: u32,
) -> TimeNeighbors {
    let mut lower: Option<(u32, &StatementId)> = None;
    let mut upper: Option<(u32, &StatementId)> = None;

    for statement in statements {
        let Some(seconds) = statement.first_mention.as_deref().and_then(parse_timestamp) else {
            continue;
        };
        if seconds <= cursor {
            if lower.map_or(true, |(best, _)| seconds > best) {
                lower = Some((seconds, &statement.id));
            }
        } else if upper.map_or(true, |(best, _)| seconds < best) {
            upper = Some((seconds, &statement.id));
        }
    }

    TimeNeighbors {
        lower: lower.map(|(_, id)| id.clone()),
        upper: upper.map(|(_, id)| id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debatemap_domain::{NewStatement, StatementKind};

    fn mentioned(id: &str, at: Option<&str>) -> Statement {
        let mut draft = NewStatement::new("A".into(), id);
        draft.first_mention = at.map(str::to_string);
        Statement::from_draft(id.into(), StatementKind::Thesis, draft)
    }

    #[test]
    fn test_neighbors() {
        let statements = vec![
            mentioned("a", Some("00:01:00")),
            mentioned("b", Some("00:02:00")),
            mentioned("c", Some("00:03:00")),
            mentioned("d", None),
            mentioned("e", Some("garbage")),
        ];
        let n = time_neighbors(&statements, 150);
        assert_eq!(n.lower, Some("b".into()));
        assert_eq!(n.upper, Some("c".into()));
        assert!(n.contains(&"b".into()));
        assert!(!n.contains(&"a".into()));
    }

    #[test]
    fn test_cursor_on_exact_mention_is_lower() {
        let statements = vec![mentioned("a", Some("00:01:00")), mentioned("b", Some("00:02:00"))];
        let n = time_neighbors(&statements, 60);
        assert_eq!(n.lower, Some("a".into()));
        assert_eq!(n.upper, Some("b".into()));
    }

    #[test]
    fn test_before_first_and_after_last() {
        let statements = vec![mentioned("a", Some("00:01:00"))];
        assert_eq!(time_neighbors(&statements, 0).lower, None);
        assert_eq!(time_neighbors(&statements, 0).upper, Some("a".into()));
        assert_eq!(time_neighbors(&statements, 999).upper, None);
    }

    #[test]
    fn test_ties_keep_first() {
        let statements = vec![mentioned("a", Some("00:01:00")), mentioned("b", Some("1:00"))];
        assert_eq!(time_neighbors(&statements, 60).lower, Some("a".into()));
    }
}
