//! Positions nodes on a 2-D canvas for drawing.
//!
//! The root is centred horizontally. Children spread symmetrically around
//! their parent, and the horizontal gap shrinks by a constant factor with
//! every level so that deeper subtrees stay within their parent's span.

use conv::ValueFrom;

use crate::tree::Tree;

/// Canvas and spacing parameters used by [`layout`] and the SVG renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutOptions {
    /// Width of the canvas.
    pub width: f64,
    /// Height of the canvas.
    pub height: f64,
    /// Vertical position of the root centre.
    pub root_y: f64,
    /// Vertical distance between two levels.
    pub level_height: f64,
    /// Horizontal gap used for the children of the root.
    pub initial_gap: f64,
    /// Factor by which the gap is divided at every level.
    pub gap_divisor: f64,
    /// Radius of the node circles.
    pub radius: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            root_y: 50.0,
            level_height: 100.0,
            initial_gap: 250.0,
            gap_divisor: 3.0,
            radius: 30.0,
        }
    }
}

impl LayoutOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn root_y(mut self, root_y: f64) -> Self {
        self.root_y = root_y;
        self
    }

    #[must_use]
    pub fn level_height(mut self, level_height: f64) -> Self {
        self.level_height = level_height;
        self
    }

    #[must_use]
    pub fn gap(mut self, initial_gap: f64, gap_divisor: f64) -> Self {
        self.initial_gap = initial_gap;
        self.gap_divisor = gap_divisor;
        self
    }

    #[must_use]
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

/// Where a node is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub node: usize,
    pub depth: usize,
    pub x: f64,
    pub y: f64,
}

/// A parent to child connection, by index into [`Layout::placements`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub parent: usize,
    pub child: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    pub placements: Vec<Placement>,
    pub edges: Vec<Edge>,
}

impl Layout {
    /// Placement of the node with the given tree handle.
    #[must_use]
    pub fn placement_of(&self, node: usize) -> Option<&Placement> {
        self.placements.iter().find(|placement| placement.node == node)
    }
}

fn to_f64(n: usize) -> f64 {
    f64::value_from(n).unwrap_or(f64::MAX)
}

/// Computes a placement for every node, parents before their children.
#[must_use]
pub fn layout<T, const K: usize>(tree: &Tree<T, K>, options: &LayoutOptions) -> Layout {
    let mut result = Layout::default();
    let root = match tree.root() {
        Some(root) => root,
        None => return result,
    };

    // (node, depth, x, gap, index of the parent placement)
    let mut stack = vec![(root, 0, options.width / 2.0, options.initial_gap, usize::MAX)];
    while let Some((node, depth, x, gap, parent)) = stack.pop() {
        let y = options.root_y + to_f64(depth) * options.level_height;
        let index = result.placements.len();
        result.placements.push(Placement { node, depth, x, y });
        if parent != usize::MAX {
            result.edges.push(Edge { parent, child: index });
        }

        let Some(current) = tree.node(node) else {
            continue;
        };
        for slot in (0..K).rev() {
            if let Ok(Some(child)) = current.child_at(slot) {
                let child_x = child_offset(x, gap, slot, K);
                stack.push((child, depth + 1, child_x, gap / options.gap_divisor, index));
            }
        }
    }
    result
}

// Slots are spread evenly over `[x - gap, x + gap]`; a single slot sits below.
fn child_offset(x: f64, gap: f64, slot: usize, slots: usize) -> f64 {
    if slots < 2 {
        return x;
    }
    x - gap + 2.0 * gap * to_f64(slot) / to_f64(slots - 1)
}
