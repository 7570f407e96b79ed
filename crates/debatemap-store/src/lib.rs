//! Debatemap Storage Layer
//!
//! Implements the [`DebateStore`](debatemap_domain::DebateStore) trait over
//! an in-memory [`DebateGraph`](debatemap_domain::DebateGraph).
//!
//! # Architecture
//!
//! - [`MemoryStore`] is the single mutation facade. Every operation is
//!   checked against `debatemap-rules` first and either applies completely
//!   or fails with a [`StoreError`] and changes nothing.
//! - Transient UI state (`debatemap-view`'s `UiState`) lives beside the graph
//!   and is reset on snapshot load.
//! - [`Snapshot`] is the versioned JSON document that carries the graph in
//!   and out.
//!
//! # Examples
//!
//! ```
//! use debatemap_domain::{DebateStore, NewStatement, StrengthType};
//! use debatemap_store::{LoadMode, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! let arg = store
//!     .add_argument(NewStatement::new("A".into(), "Arg1").with_strength(StrengthType::Type1), None)
//!     .unwrap();
//! assert_eq!(store.graph().parent_of(&arg).map(|id| id.as_str()), Some("thesisA"));
//!
//! let bytes = store.to_json().unwrap();
//! let mut restored = MemoryStore::new();
//! restored.load_json(&bytes, LoadMode::Replace).unwrap();
//! assert_eq!(restored.graph(), store.graph());
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod snapshot;
mod store;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use snapshot::{EdgeRecord, LoadMode, NodeRecord, ParticipantRecord, Snapshot, SNAPSHOT_VERSION};
pub use store::MemoryStore;
