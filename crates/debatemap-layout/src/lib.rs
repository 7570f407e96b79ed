//! Debatemap Layout Engine
//!
//! Deterministic top-down placement of a debate graph. Every statement gets a
//! box of the same size; hierarchical depth decides the row, measured subtree
//! widths decide the column. An Argument Summary sits centered under its
//! Thesis with the Thesis' other children split around it.
//!
//! The engine is a pure function of the graph and a [`LayoutConfig`]: it keeps
//! no state between runs. Use [`Layout::anchored`] to keep a reference
//! statement still across re-layouts.

mod config;
mod geometry;
mod tree;

pub use config::LayoutConfig;
pub use geometry::{Layout, Point, Rect};
pub use tree::{compute_layout, LayoutEngine};
