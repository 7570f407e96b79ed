//! Debatemap Rules
//!
//! Pure constraint predicates over a [`DebateGraph`](debatemap_domain::DebateGraph).
//!
//! The rules decide, for a proposed relation, whether the kinds and owners of
//! its endpoints allow it:
//!
//! | Relation | Child | Parent kinds | Owners |
//! |----------|-------|--------------|--------|
//! | `supports` | Argument | Thesis, Argument, Counter, Evidence | same |
//! | `supports` | Argument Summary | Thesis (one summary each) | same |
//! | `attacks` | Counter | Argument, Counter, Evidence | different |
//! | `evidence-of` | Evidence | Argument, Counter, Argument Summary | same |
//! | `agrees-with` | Agreement | Argument, Counter | different |
//!
//! Peer links: `t2-link` joins two same-kind, same-participant Type 2
//! statements; `refers-to` joins any two distinct statements.
//!
//! # Examples
//!
//! ```
//! use debatemap_domain::{DebateGraph, StatementKind};
//! use debatemap_rules::{RuleChecker, RuleConfig};
//!
//! let checker = RuleChecker::new(RuleConfig::default());
//! let graph = DebateGraph::new();
//!
//! // An empty graph satisfies every invariant
//! assert!(checker.audit(&graph).is_ok());
//! assert!(checker.check_strength(StatementKind::Argument, None).is_err());
//! ```

#![warn(missing_docs)]

mod audit;
mod config;
mod eligible;
mod error;
mod validator;

pub use audit::audit;
pub use config::RuleConfig;
pub use error::RuleViolation;
pub use validator::{ChildRef, RuleChecker};

/// Result type for rule checks
pub type RuleResult<T = ()> = std::result::Result<T, RuleViolation>;
