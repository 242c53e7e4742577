//! Pane geometry and hit testing
//!
//! A pure data model for resolving drag hover targets, kept free of any
//! toolkit dependency so it can be property-tested. The host hands in the
//! viewport rectangle it renders the tree into; this module subdivides it
//! along each branch's orientation and ratio and answers "which pane is
//! under this point?". A point over no pane (outside the viewport) is a
//! valid no-target answer.

use super::tree::PaneNode;
use super::types::{Orientation, PaneId};

/// An axis-aligned rectangle in the host's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width; non-negative.
    pub width: f64,
    /// Height; non-negative.
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if the point lies inside this rectangle.
    ///
    /// The left/top edges are inclusive, right/bottom exclusive, so
    /// adjacent panes never both claim a point on their shared divider.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    fn split(&self, orientation: Orientation, ratio: f64) -> (Self, Self) {
        match orientation {
            Orientation::Row => {
                let first_height = self.height * ratio;
                (
                    Self::new(self.x, self.y, self.width, first_height),
                    Self::new(
                        self.x,
                        self.y + first_height,
                        self.width,
                        self.height - first_height,
                    ),
                )
            }
            Orientation::Column => {
                let first_width = self.width * ratio;
                (
                    Self::new(self.x, self.y, first_width, self.height),
                    Self::new(
                        self.x + first_width,
                        self.y,
                        self.width - first_width,
                        self.height,
                    ),
                )
            }
        }
    }
}

/// Computes the rectangle of every leaf pane, in left-to-right order.
#[must_use]
pub fn pane_rects(node: &PaneNode, viewport: Rect) -> Vec<(PaneId, Rect)> {
    let mut out = Vec::new();
    collect_rects(node, viewport, &mut out);
    out
}

fn collect_rects(node: &PaneNode, area: Rect, out: &mut Vec<(PaneId, Rect)>) {
    match node {
        PaneNode::Leaf(leaf) => out.push((leaf.id(), area)),
        PaneNode::Branch(branch) => {
            let (first, second) = area.split(branch.orientation(), branch.ratio());
            collect_rects(branch.first(), first, out);
            collect_rects(branch.second(), second, out);
        }
    }
}

/// Resolves the pane under the point, or `None` if the point is over no
/// pane.
#[must_use]
pub fn pane_at(node: &PaneNode, viewport: Rect, x: f64, y: f64) -> Option<PaneId> {
    if !viewport.contains(x, y) {
        return None;
    }
    match node {
        PaneNode::Leaf(leaf) => Some(leaf.id()),
        PaneNode::Branch(branch) => {
            let (first, second) = viewport.split(branch.orientation(), branch.ratio());
            if first.contains(x, y) {
                pane_at(branch.first(), first, x, y)
            } else {
                pane_at(branch.second(), second, x, y)
            }
        }
    }
}
