//! Points, rectangles and the computed layout

use debatemap_domain::StatementId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A position in layout units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Whether the two rectangles share interior area
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }
}

/// Top-left positions of every laid-out statement
///
/// All boxes share the same size, taken from the configuration the layout
/// was computed with.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    positions: BTreeMap<StatementId, Point>,
    node_width: f64,
    node_height: f64,
}

impl Layout {
    pub(crate) fn new(positions: BTreeMap<StatementId, Point>, node_width: f64, node_height: f64) -> Self {
        Self {
            positions,
            node_width,
            node_height,
        }
    }

    /// Top-left corner of a statement's box
    pub fn position(&self, id: &StatementId) -> Option<Point> {
        self.positions.get(id).copied()
    }

    /// Center of a statement's box
    pub fn center(&self, id: &StatementId) -> Option<Point> {
        self.position(id).map(|p| Point::new(p.x + self.node_width / 2.0, p.y + self.node_height / 2.0))
    }

    /// A statement's box
    pub fn rect(&self, id: &StatementId) -> Option<Rect> {
        self.position(id).map(|p| self.rect_at(p))
    }

    fn rect_at(&self, p: Point) -> Rect {
        Rect {
            min_x: p.x,
            min_y: p.y,
            max_x: p.x + self.node_width,
            max_y: p.y + self.node_height,
        }
    }

    pub fn positions(&self) -> &BTreeMap<StatementId, Point> {
        &self.positions
    }

    pub fn into_positions(self) -> BTreeMap<StatementId, Point> {
        self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StatementId, &Point)> {
        self.positions.iter()
    }

    /// Shift every position by `(dx, dy)`
    pub fn translated(mut self, dx: f64, dy: f64) -> Self {
        for p in self.positions.values_mut() {
            p.x += dx;
            p.y += dy;
        }
        self
    }

    /// Translate the layout so `reference` sits at `previous`
    ///
    /// Used after a re-layout to keep a reference statement (usually the
    /// first Thesis) still on screen. If `reference` is not laid out the
    /// layout is returned unchanged.
    pub fn anchored(self, reference: &StatementId, previous: Point) -> Self {
        match self.position(reference) {
            Some(current) => self.translated(previous.x - current.x, previous.y - current.y),
            None => self,
        }
    }

    /// Bounding box of every statement box, or `None` when empty
    pub fn bounds(&self) -> Option<Rect> {
        self.positions
            .values()
            .map(|p| self.rect_at(*p))
            .reduce(|acc, r| acc.union(&r))
    }
}
