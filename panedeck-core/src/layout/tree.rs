//! Pane tree structure for split layouts
//!
//! This module provides the binary tree used to represent split pane
//! layouts. Each node is either a leaf pane (an ordered group of document
//! tabs with a current selection) or a branch (two children separated by a
//! movable divider).
//!
//! # Tree Structure
//!
//! ```text
//! Branch(Column)
//! ├── Leaf(1, [main.rs, lib.rs])
//! └── Branch(Row)
//!     ├── Leaf(2, [notes.md])
//!     └── Leaf(3, [])
//! ```
//!
//! The tree supports arbitrary nesting depth. Empty structure is removed by
//! [`PaneNode::simplify`], which runs bottom-up and guarantees that no
//! branch survives with an empty side.

use crate::document::{Document, tab_label};

use super::types::{DocumentId, Orientation, PaneId};

/// Default split ratio (50% of available space to the first child).
pub const DEFAULT_SPLIT_RATIO: f64 = 0.5;

/// Minimum valid split ratio.
pub const MIN_SPLIT_RATIO: f64 = 0.0;

/// Maximum valid split ratio.
pub const MAX_SPLIT_RATIO: f64 = 1.0;

/// A document tab inside a leaf pane.
///
/// Couples the externally-created document with its stable ID and the
/// rendered tab label (title plus dirty marker while unsaved).
#[derive(Debug)]
pub struct Tab {
    id: DocumentId,
    document: Box<dyn Document>,
    label: String,
}

impl Tab {
    /// Wraps a document in a new tab with a fresh ID and a label derived
    /// from the document's current state.
    #[must_use]
    pub fn new(document: Box<dyn Document>) -> Self {
        let label = tab_label(document.as_ref());
        Self {
            id: DocumentId::new(),
            document,
            label,
        }
    }

    /// The stable document ID.
    #[must_use]
    pub const fn id(&self) -> DocumentId {
        self.id
    }

    /// The rendered tab label, dirty marker included when applicable.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Read access to the document.
    #[must_use]
    pub fn document(&self) -> &dyn Document {
        self.document.as_ref()
    }

    /// Mutable access to the document.
    pub fn document_mut(&mut self) -> &mut dyn Document {
        self.document.as_mut()
    }

    /// Re-derives the label from the document's title and dirty flag.
    pub fn refresh_label(&mut self) {
        self.label = tab_label(self.document.as_ref());
    }
}

/// A leaf pane: an ordered group of document tabs with a selection.
#[derive(Debug)]
pub struct LeafPane {
    id: PaneId,
    tabs: Vec<Tab>,
    current: usize,
    pane_number: usize,
}

impl LeafPane {
    /// Creates a new empty pane with a unique ID.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: PaneId::new(),
            tabs: Vec::new(),
            current: 0,
            pane_number: 0,
        }
    }

    /// Unique pane ID.
    #[must_use]
    pub const fn id(&self) -> PaneId {
        self.id
    }

    /// Returns true if this pane holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Number of documents in this pane.
    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// The tabs in display order.
    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Mutable access to the tabs in display order.
    pub fn tabs_mut(&mut self) -> &mut [Tab] {
        &mut self.tabs
    }

    /// Index of the selected tab. Meaningless while the pane is empty.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Selects the tab at `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.current = index;
        }
    }

    /// The selected tab, if the pane is non-empty.
    #[must_use]
    pub fn current_tab(&self) -> Option<&Tab> {
        self.tabs.get(self.current)
    }

    /// Mutable access to the selected tab.
    pub fn current_tab_mut(&mut self) -> Option<&mut Tab> {
        self.tabs.get_mut(self.current)
    }

    /// Tab at `index`, if in range.
    #[must_use]
    pub fn tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    /// Mutable tab at `index`, if in range.
    pub fn tab_mut(&mut self, index: usize) -> Option<&mut Tab> {
        self.tabs.get_mut(index)
    }

    /// Index of the tab holding `document`, if this pane owns it.
    #[must_use]
    pub fn find_tab(&self, document: DocumentId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id() == document)
    }

    /// Appends a tab and selects it.
    pub fn append_tab(&mut self, tab: Tab) {
        self.tabs.push(tab);
        self.current = self.tabs.len() - 1;
    }

    /// Removes and returns the tab at `index`, keeping the selection on the
    /// same document where possible and in range otherwise.
    pub fn remove_tab(&mut self, index: usize) -> Option<Tab> {
        if index >= self.tabs.len() {
            return None;
        }
        let tab = self.tabs.remove(index);
        if self.tabs.is_empty() {
            self.current = 0;
        } else if index < self.current {
            self.current -= 1;
        } else {
            self.current = self.current.min(self.tabs.len() - 1);
        }
        Some(tab)
    }

    /// Display pane number (1-based, assigned by renumbering).
    #[must_use]
    pub const fn pane_number(&self) -> usize {
        self.pane_number
    }

    /// Sets the display pane number.
    pub fn set_pane_number(&mut self, number: usize) {
        self.pane_number = number;
    }
}

impl Default for LeafPane {
    fn default() -> Self {
        Self::new()
    }
}

/// A branch: two children separated by a movable divider.
#[derive(Debug)]
pub struct BranchNode {
    orientation: Orientation,
    ratio: f64,
    first: Box<PaneNode>,
    second: Box<PaneNode>,
}

impl BranchNode {
    /// Creates a branch with the default split ratio.
    #[must_use]
    pub fn new(orientation: Orientation, first: PaneNode, second: PaneNode) -> Self {
        Self {
            orientation,
            ratio: DEFAULT_SPLIT_RATIO,
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// Split orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Proportion of space allocated to the first child, in
    /// [[`MIN_SPLIT_RATIO`], [`MAX_SPLIT_RATIO`]].
    #[must_use]
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Sets the divider ratio, clamped to the valid range.
    pub fn set_ratio(&mut self, ratio: f64) {
        self.ratio = ratio.clamp(MIN_SPLIT_RATIO, MAX_SPLIT_RATIO);
    }

    /// First child (top for `Row`, left for `Column`).
    #[must_use]
    pub fn first(&self) -> &PaneNode {
        &self.first
    }

    /// Second child (bottom for `Row`, right for `Column`).
    #[must_use]
    pub fn second(&self) -> &PaneNode {
        &self.second
    }
}

/// A node in the pane tree: either a leaf pane or a two-way split.
#[derive(Debug)]
pub enum PaneNode {
    /// A leaf pane holding document tabs.
    Leaf(LeafPane),
    /// A split holding two child nodes.
    Branch(BranchNode),
}

impl PaneNode {
    /// Creates a new leaf node with an empty pane.
    #[must_use]
    pub fn new_leaf() -> Self {
        Self::Leaf(LeafPane::new())
    }

    /// Returns true if this is a leaf node.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns true if this is a branch node.
    #[must_use]
    pub const fn is_branch(&self) -> bool {
        matches!(self, Self::Branch(_))
    }

    /// The leaf pane, if this is a leaf node.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&LeafPane> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Branch(_) => None,
        }
    }

    /// Mutable leaf pane, if this is a leaf node.
    pub fn as_leaf_mut(&mut self) -> Option<&mut LeafPane> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Branch(_) => None,
        }
    }

    /// The branch, if this is a branch node.
    #[must_use]
    pub const fn as_branch(&self) -> Option<&BranchNode> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(branch) => Some(branch),
        }
    }

    /// Returns true if this subtree holds no documents.
    ///
    /// A leaf is empty when it has no tabs; a branch is empty when both
    /// children are recursively empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Leaf(leaf) => leaf.is_empty(),
            Self::Branch(branch) => branch.first.is_empty() && branch.second.is_empty(),
        }
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// All leaf panes in left-to-right order. This ordering drives pane
    /// numbering.
    #[must_use]
    pub fn leaves(&self) -> Vec<&LeafPane> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a LeafPane>) {
        match self {
            Self::Leaf(leaf) => out.push(leaf),
            Self::Branch(branch) => {
                branch.first.collect_leaves(out);
                branch.second.collect_leaves(out);
            }
        }
    }

    /// All leaf panes in left-to-right order, mutably.
    pub fn leaves_mut(&mut self) -> Vec<&mut LeafPane> {
        let mut out = Vec::new();
        self.collect_leaves_mut(&mut out);
        out
    }

    fn collect_leaves_mut<'a>(&'a mut self, out: &mut Vec<&'a mut LeafPane>) {
        match self {
            Self::Leaf(leaf) => out.push(leaf),
            Self::Branch(branch) => {
                branch.first.collect_leaves_mut(out);
                branch.second.collect_leaves_mut(out);
            }
        }
    }

    /// All pane IDs in left-to-right order.
    #[must_use]
    pub fn pane_ids(&self) -> Vec<PaneId> {
        self.leaves().iter().map(|l| l.id()).collect()
    }

    /// Finds a leaf pane by ID.
    #[must_use]
    pub fn find_leaf(&self, pane_id: PaneId) -> Option<&LeafPane> {
        match self {
            Self::Leaf(leaf) => (leaf.id() == pane_id).then_some(leaf),
            Self::Branch(branch) => branch
                .first
                .find_leaf(pane_id)
                .or_else(|| branch.second.find_leaf(pane_id)),
        }
    }

    /// Finds a leaf pane by ID, mutably.
    pub fn find_leaf_mut(&mut self, pane_id: PaneId) -> Option<&mut LeafPane> {
        match self {
            Self::Leaf(leaf) => (leaf.id() == pane_id).then_some(leaf),
            Self::Branch(branch) => {
                if let Some(leaf) = branch.first.find_leaf_mut(pane_id) {
                    Some(leaf)
                } else {
                    branch.second.find_leaf_mut(pane_id)
                }
            }
        }
    }

    /// Returns true if the tree contains a pane with the given ID.
    #[must_use]
    pub fn contains_pane(&self, pane_id: PaneId) -> bool {
        self.find_leaf(pane_id).is_some()
    }

    /// The first leaf pane (leftmost/topmost).
    #[must_use]
    pub fn first_leaf(&self) -> &LeafPane {
        match self {
            Self::Leaf(leaf) => leaf,
            Self::Branch(branch) => branch.first.first_leaf(),
        }
    }

    /// Number of leaf panes in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(branch) => branch.first.leaf_count() + branch.second.leaf_count(),
        }
    }

    /// Tree depth: a single leaf has depth 0, each split level adds 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Branch(branch) => 1 + branch.first.depth().max(branch.second.depth()),
        }
    }

    /// Finds the pane owning `document`, with the tab index inside it.
    #[must_use]
    pub fn find_document(&self, document: DocumentId) -> Option<(PaneId, usize)> {
        self.leaves()
            .iter()
            .find_map(|leaf| leaf.find_tab(document).map(|idx| (leaf.id(), idx)))
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Converts this leaf in place into a branch.
    ///
    /// The existing pane (documents, selection, ID) becomes the first child;
    /// the second child is a fresh empty leaf whose ID is returned. The
    /// caller populates it, typically with a duplicate of the selected
    /// document. No-op (`None`) if this node is already a branch.
    pub fn split_leaf(&mut self, orientation: Orientation) -> Option<PaneId> {
        if self.is_branch() {
            return None;
        }
        let old = std::mem::replace(self, Self::new_leaf());
        let Self::Leaf(kept) = old else {
            unreachable!("branch case returned above");
        };
        let sibling = LeafPane::new();
        let sibling_id = sibling.id();
        *self = Self::Branch(BranchNode::new(
            orientation,
            Self::Leaf(kept),
            Self::Leaf(sibling),
        ));
        Some(sibling_id)
    }

    /// Splits the leaf with `pane_id` anywhere in this subtree.
    ///
    /// Returns the new sibling's ID, or `None` if the pane was not found.
    pub fn split_pane(&mut self, pane_id: PaneId, orientation: Orientation) -> Option<PaneId> {
        match self {
            Self::Leaf(leaf) => {
                if leaf.id() == pane_id {
                    self.split_leaf(orientation)
                } else {
                    None
                }
            }
            Self::Branch(branch) => branch
                .first
                .split_pane(pane_id, orientation)
                .or_else(|| branch.second.split_pane(pane_id, orientation)),
        }
    }

    /// Discards a branch's children and becomes the given leaf.
    ///
    /// Used only by [`simplify`](Self::simplify); no-op (`false`) on a leaf
    /// node.
    pub fn collapse_to_leaf(&mut self, leaf: LeafPane) -> bool {
        if self.is_leaf() {
            return false;
        }
        *self = Self::Leaf(leaf);
        true
    }

    /// Removes empty structure, bottom-up.
    ///
    /// After the call no branch in this subtree has an empty side:
    /// - both children empty → this node becomes a fresh empty leaf;
    /// - one side empty → the non-empty side (leaf or whole subtree) is
    ///   promoted to replace this node, keeping its own documents,
    ///   selection, and (for a promoted branch) its own split ratio;
    /// - neither empty → no change.
    ///
    /// Idempotent and total: a second call finds nothing to collapse.
    pub fn simplify(&mut self) {
        let Self::Branch(branch) = self else {
            return;
        };
        branch.first.simplify();
        branch.second.simplify();

        let first_empty = branch.first.is_empty();
        let second_empty = branch.second.is_empty();

        if first_empty && second_empty {
            tracing::debug!("collapsing fully empty branch to a fresh leaf");
            self.collapse_to_leaf(LeafPane::new());
        } else if first_empty {
            let promoted = std::mem::replace(branch.second.as_mut(), Self::new_leaf());
            *self = promoted;
        } else if second_empty {
            let promoted = std::mem::replace(branch.first.as_mut(), Self::new_leaf());
            *self = promoted;
        }
    }

    /// Updates the ratio of the branch whose first child subtree starts at
    /// the leaf with `first_pane_id`.
    ///
    /// This is how user-dragged divider positions are persisted back into
    /// the model. Returns `true` if a branch was found and updated.
    pub fn update_split_ratio(&mut self, first_pane_id: PaneId, ratio: f64) -> bool {
        match self {
            Self::Leaf(_) => false,
            Self::Branch(branch) => {
                if branch.first.first_leaf().id() == first_pane_id {
                    branch.set_ratio(ratio);
                    true
                } else {
                    branch.first.update_split_ratio(first_pane_id, ratio)
                        || branch.second.update_split_ratio(first_pane_id, ratio)
                }
            }
        }
    }
}
