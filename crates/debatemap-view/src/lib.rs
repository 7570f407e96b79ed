//! Debatemap View Projection
//!
//! Turns a [`DebateGraph`](debatemap_domain::DebateGraph) plus overlay inputs
//! (collapse flags, search query, filters, focused edge, time cursor,
//! attachment mode) into per-node and per-edge display flags and the visible
//! subgraph handed to the layout engine.
//!
//! Overlays compose in a fixed order:
//!
//! 1. collapse hiding (descendants of collapsed statements)
//! 2. filter and search in `hide` mode
//! 3. dim flags: filter/search in `dim` mode, edge focus, time highlight,
//!    attachment mode
//!
//! # Examples
//!
//! ```
//! use debatemap_domain::DebateGraph;
//! use debatemap_view::{DisplayMode, Overlay, Projection};
//!
//! let graph = DebateGraph::new();
//! let overlay = Overlay::default().with_search("\"free trade\" tariffs", DisplayMode::Hide);
//! let projection = Projection::compute(&graph, &overlay);
//! assert!(projection.visible_ids().is_empty());
//! ```

#![warn(missing_docs)]

mod overlay;
mod projection;
mod search;
mod time;

pub use overlay::{DisplayMode, Filters, Overlay, UiState};
pub use projection::{EdgeDisplay, NodeDisplay, Projection};
pub use search::{matches_terms, parse_terms};
pub use time::{time_neighbors, TimeNeighbors};
