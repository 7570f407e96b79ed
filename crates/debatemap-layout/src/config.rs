use serde::{Deserialize, Serialize};

/// Layout configuration
///
/// All dimensions are in logical layout units (not pixels).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of every statement box
    pub node_width: f64,
    /// Height of every statement box
    pub node_height: f64,
    /// Horizontal space between sibling subtrees
    pub x_gap: f64,
    /// Vertical space between depth levels
    pub y_gap: f64,
    /// How far an Argument Summary is lifted above its depth level
    pub summary_raise: f64,
    /// Space between root trees, as a multiple of `x_gap`
    pub root_gap_factor: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 320.0,
            node_height: 120.0,
            x_gap: 60.0,
            y_gap: 180.0,
            summary_raise: 30.0,
            root_gap_factor: 2.0,
        }
    }
}

impl LayoutConfig {
    /// Vertical distance between two depth levels
    pub fn level_height(&self) -> f64 {
        self.node_height + self.y_gap
    }

    /// Horizontal distance between two root trees
    pub fn root_gap(&self) -> f64 {
        self.x_gap * self.root_gap_factor
    }
}
