//! Pane tree orchestrator
//!
//! [`PaneTree`] owns the root of the pane layout and exposes the operation
//! surface the rest of the editor uses: opening, closing and moving
//! documents, splitting the active pane, saving, and the simplification
//! pass that removes empty structure.
//!
//! Every operation that can change leaf count or order ends by renumbering
//! panes and revalidating the active pane; host notifications fire last, so
//! a re-entrant handler always observes a fully consistent tree.
//!
//! # Example
//!
//! ```ignore
//! use panedeck_core::layout::{Orientation, PaneTree};
//!
//! let mut tree = PaneTree::new();
//! let doc_id = tree.open_document(factory.create("src/main.rs"), None);
//!
//! // Split the active pane into two columns; the new pane holds a
//! // duplicate of the selected document and becomes active.
//! let sibling = tree.split_active_pane(Orientation::Column).unwrap();
//! assert_eq!(tree.active_pane(), sibling);
//! assert_eq!(tree.pane_count(), 2);
//! ```

use std::fmt;

use crate::document::Document;
use crate::notify::{HostNotifier, NoOpHostNotifier};

use super::error::{LayoutError, MoveOutcome};
use super::tree::{MAX_SPLIT_RATIO, MIN_SPLIT_RATIO, PaneNode, Tab};
use super::types::{DocumentId, Orientation, PaneId};

/// The pane layout of one editor window.
///
/// Owns the node tree (always at least one leaf), tracks the active pane by
/// stable ID, and notifies the host window of active-pane and pane-count
/// changes.
///
/// # Active pane
///
/// The active pane receives newly opened documents and is the target of
/// pane-scoped commands. It is stored as a [`PaneId`] and revalidated
/// against the live tree on every use: when the pane it names has been
/// collapsed away, the reference heals to the first pane that still holds
/// documents, or the first pane outright.
pub struct PaneTree {
    root: PaneNode,
    active: PaneId,
    notifier: Box<dyn HostNotifier>,
    notified_active: PaneId,
    notified_panes: usize,
}

impl PaneTree {
    /// Creates a tree with a single empty pane, which is active.
    #[must_use]
    pub fn new() -> Self {
        Self::with_notifier(Box::new(NoOpHostNotifier))
    }

    /// Creates a tree that reports changes to the given host notifier.
    #[must_use]
    pub fn with_notifier(notifier: Box<dyn HostNotifier>) -> Self {
        let mut root = PaneNode::new_leaf();
        let active = root.first_leaf().id();
        for leaf in root.leaves_mut() {
            leaf.set_pane_number(1);
        }
        Self {
            root,
            active,
            notifier,
            notified_active: active,
            notified_panes: 1,
        }
    }

    // ========================================================================
    // Document lifecycle
    // ========================================================================

    /// Opens a document in `pane` (the active pane when `None` or stale),
    /// selects it, and makes that pane active.
    ///
    /// Path de-duplication is the caller's job: check
    /// [`is_open`](Self::is_open) first if one view per file is wanted.
    pub fn open_document(
        &mut self,
        document: Box<dyn Document>,
        pane: Option<PaneId>,
    ) -> DocumentId {
        self.heal_active();
        let target = pane
            .filter(|p| self.root.contains_pane(*p))
            .unwrap_or(self.active);

        let tab = Tab::new(document);
        let id = tab.id();
        if let Some(leaf) = self.root.find_leaf_mut(target) {
            leaf.append_tab(tab);
        }
        self.active = target;
        tracing::debug!("opened {} in {}", id, target);
        self.dispatch_notifications();
        id
    }

    /// Closes and destroys the document at `index` in `pane`.
    ///
    /// If the pane empties it is collapsed away, and a stale active pane is
    /// re-elected (first pane with documents, else the first pane). Unknown
    /// panes and out-of-range indices are benign no-ops (`false`).
    pub fn close_document(&mut self, pane: PaneId, index: usize) -> bool {
        let Some(leaf) = self.root.find_leaf_mut(pane) else {
            tracing::debug!("close ignored: {} not in tree", pane);
            return false;
        };
        let Some(tab) = leaf.remove_tab(index) else {
            tracing::debug!("close ignored: index {} out of range in {}", index, pane);
            return false;
        };
        let emptied = leaf.is_empty();
        tracing::debug!("closed {} from {}", tab.id(), pane);
        drop(tab);

        if emptied {
            self.root.simplify();
        }
        self.renumber_panes();
        self.heal_active();
        self.dispatch_notifications();
        true
    }

    /// Relocates the document at `index` in `src` to the end of `dst`,
    /// selects it there, and makes `dst` active.
    ///
    /// No-op when `src == dst`, when either pane is unknown, or when the
    /// index is out of range. If the source pane empties it is collapsed
    /// away. The move is atomic from the caller's perspective: there is no
    /// observable moment with zero or two owners.
    ///
    /// Both the drag-and-drop drop handler and the "move to pane N" context
    /// menu action go through this method, so the two produce identical end
    /// states for identical inputs.
    pub fn move_document(&mut self, src: PaneId, index: usize, dst: PaneId) -> MoveOutcome {
        if src == dst {
            return MoveOutcome::NoOp;
        }
        if !self.root.contains_pane(dst) {
            tracing::debug!("move ignored: destination {} not in tree", dst);
            return MoveOutcome::NoOp;
        }
        let Some(src_leaf) = self.root.find_leaf_mut(src) else {
            tracing::debug!("move ignored: source {} not in tree", src);
            return MoveOutcome::NoOp;
        };
        let Some(tab) = src_leaf.remove_tab(index) else {
            tracing::debug!("move ignored: index {} out of range in {}", index, src);
            return MoveOutcome::NoOp;
        };
        let document = tab.id();
        let source_emptied = src_leaf.is_empty();

        if let Some(dst_leaf) = self.root.find_leaf_mut(dst) {
            dst_leaf.append_tab(tab);
        }
        self.active = dst;
        tracing::debug!("moved {} from {} to {}", document, src, dst);

        if source_emptied {
            self.root.simplify();
        }
        self.renumber_panes();
        self.heal_active();
        self.dispatch_notifications();
        MoveOutcome::Moved {
            document,
            source_collapsed: source_emptied,
        }
    }

    // ========================================================================
    // Split
    // ========================================================================

    /// Splits the active pane in two.
    ///
    /// The selected document is duplicated (same path, new instance), the
    /// pane becomes a branch with the original documents on the first side,
    /// and the duplicate is placed in the new sibling, which becomes
    /// active. Returns the sibling's ID, or `None` (no-op) when the active
    /// pane holds no documents.
    pub fn split_active_pane(&mut self, orientation: Orientation) -> Option<PaneId> {
        self.heal_active();
        let source = self.active;
        let duplicate = self
            .root
            .find_leaf(source)
            .and_then(|leaf| leaf.current_tab())
            .map(|tab| tab.document().duplicate());
        let Some(duplicate) = duplicate else {
            tracing::debug!("split ignored: {} has no documents", source);
            return None;
        };

        let sibling = self.root.split_pane(source, orientation)?;
        let tab = Tab::new(duplicate);
        tracing::debug!("split {} ({}), duplicate {} in {}", source, orientation, tab.id(), sibling);
        if let Some(leaf) = self.root.find_leaf_mut(sibling) {
            leaf.append_tab(tab);
        }
        self.active = sibling;
        self.renumber_panes();
        self.dispatch_notifications();
        Some(sibling)
    }

    // ========================================================================
    // Saving
    // ========================================================================

    /// Saves the active pane's selected document.
    ///
    /// A clean (or absent) selection is a successful no-op. On success the
    /// tab's dirty marker is stripped; on failure the marker and all other
    /// state are left untouched. Returns `false` only when a save attempt
    /// failed.
    pub fn save_active(&mut self) -> bool {
        self.heal_active();
        let Some(tab) = self
            .root
            .find_leaf_mut(self.active)
            .and_then(super::tree::LeafPane::current_tab_mut)
        else {
            return true;
        };
        if !tab.document().is_dirty() {
            return true;
        }
        if tab.document_mut().save() {
            tab.refresh_label();
            true
        } else {
            tracing::warn!("save failed for {}", tab.id());
            false
        }
    }

    /// Saves every dirty document in the tree.
    ///
    /// Returns the number of documents successfully saved. Documents whose
    /// save fails keep their dirty marker.
    pub fn save_all(&mut self) -> usize {
        let mut saved = 0;
        for leaf in self.root.leaves_mut() {
            for tab in leaf.tabs_mut() {
                if !tab.document().is_dirty() {
                    continue;
                }
                if tab.document_mut().save() {
                    tab.refresh_label();
                    saved += 1;
                } else {
                    tracing::warn!("save failed for {}", tab.id());
                }
            }
        }
        saved
    }

    // ========================================================================
    // Structure maintenance
    // ========================================================================

    /// Removes empty structure, renumbers panes, and revalidates the active
    /// pane.
    ///
    /// Idempotent and total; safe to call mid-chain from nested callbacks.
    pub fn simplify(&mut self) {
        self.root.simplify();
        self.renumber_panes();
        self.heal_active();
        self.dispatch_notifications();
    }

    /// Reassigns display pane numbers 1..=N over the left-to-right leaf
    /// order.
    pub fn renumber_panes(&mut self) {
        for (i, leaf) in self.root.leaves_mut().into_iter().enumerate() {
            leaf.set_pane_number(i + 1);
        }
    }

    // ========================================================================
    // Active pane
    // ========================================================================

    /// The active pane, revalidated against the live tree.
    ///
    /// A stale reference (the pane was collapsed away) self-heals to the
    /// first pane holding documents, or the first pane outright.
    pub fn active_pane(&mut self) -> PaneId {
        self.heal_active();
        self.dispatch_notifications();
        self.active
    }

    /// Declares `pane` active (pane-body click).
    ///
    /// # Errors
    ///
    /// [`LayoutError::PaneNotFound`] if the pane is not in the live tree.
    pub fn set_active(&mut self, pane: PaneId) -> Result<(), LayoutError> {
        if !self.root.contains_pane(pane) {
            return Err(LayoutError::PaneNotFound(pane));
        }
        self.active = pane;
        self.dispatch_notifications();
        Ok(())
    }

    /// The tab-click interaction: selects the tab at `index` in `pane` and
    /// makes the pane active.
    ///
    /// Unknown panes and out-of-range indices are benign no-ops (`false`).
    pub fn select_tab(&mut self, pane: PaneId, index: usize) -> bool {
        let Some(leaf) = self.root.find_leaf_mut(pane) else {
            return false;
        };
        if index >= leaf.tab_count() {
            return false;
        }
        leaf.select(index);
        self.active = pane;
        self.dispatch_notifications();
        true
    }

    // ========================================================================
    // Divider ratios
    // ========================================================================

    /// Persists a user-dragged divider position: sets the ratio of the
    /// branch whose first child subtree starts at `first_pane`.
    ///
    /// # Errors
    ///
    /// [`LayoutError::InvalidRatio`] for a ratio outside [0.0, 1.0];
    /// [`LayoutError::PaneNotFound`] if no branch matches.
    pub fn set_split_ratio(&mut self, first_pane: PaneId, ratio: f64) -> Result<(), LayoutError> {
        if !(MIN_SPLIT_RATIO..=MAX_SPLIT_RATIO).contains(&ratio) {
            return Err(LayoutError::InvalidRatio(ratio));
        }
        if self.root.update_split_ratio(first_pane, ratio) {
            Ok(())
        } else {
            Err(LayoutError::PaneNotFound(first_pane))
        }
    }

    // ========================================================================
    // Dirty-state propagation
    // ========================================================================

    /// Reacts to a document's modified-changed notification.
    ///
    /// The owning pane is resolved dynamically at notification time, never
    /// cached at subscription time (the document may have moved panes
    /// since), and the tab label's dirty marker is refreshed from the
    /// document's current state. Unknown documents are ignored.
    pub fn document_modified_changed(&mut self, document: DocumentId) {
        let Some((pane, index)) = self.root.find_document(document) else {
            tracing::debug!("modified-changed ignored: {} not in tree", document);
            return;
        };
        if let Some(tab) = self
            .root
            .find_leaf_mut(pane)
            .and_then(|leaf| leaf.tab_mut(index))
        {
            tab.refresh_label();
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Number of leaf panes. Always at least 1.
    #[must_use]
    pub fn pane_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Pane IDs in left-to-right (numbering) order.
    #[must_use]
    pub fn pane_ids(&self) -> Vec<PaneId> {
        self.root.pane_ids()
    }

    /// Total number of open documents across all panes.
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.root.leaves().iter().map(|l| l.tab_count()).sum()
    }

    /// Returns true if any pane holds a document with this path.
    ///
    /// The caller's pre-check for open-by-path de-duplication.
    #[must_use]
    pub fn is_open(&self, path: &str) -> bool {
        self.root
            .leaves()
            .iter()
            .any(|leaf| leaf.tabs().iter().any(|tab| tab.document().path() == path))
    }

    /// The selected document in `pane`, if any.
    #[must_use]
    pub fn selected_document(&self, pane: PaneId) -> Option<DocumentId> {
        self.root
            .find_leaf(pane)?
            .current_tab()
            .map(super::tree::Tab::id)
    }

    /// Tab labels of `pane` in display order.
    #[must_use]
    pub fn tab_labels(&self, pane: PaneId) -> Option<Vec<String>> {
        let leaf = self.root.find_leaf(pane)?;
        Some(leaf.tabs().iter().map(|t| t.label().to_owned()).collect())
    }

    /// Display number of `pane` (1-based).
    #[must_use]
    pub fn pane_number(&self, pane: PaneId) -> Option<usize> {
        self.root.find_leaf(pane).map(super::tree::LeafPane::pane_number)
    }

    /// The pane currently owning `document`.
    #[must_use]
    pub fn document_pane(&self, document: DocumentId) -> Option<PaneId> {
        self.root.find_document(document).map(|(pane, _)| pane)
    }

    /// The root node, for read-only traversal (rendering, hit testing).
    #[must_use]
    pub const fn root(&self) -> &PaneNode {
        &self.root
    }

    /// Tree depth: 0 for a single pane.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Re-elects the active pane if the stored ID is no longer in the tree:
    /// first pane with documents, else the first pane.
    fn heal_active(&mut self) {
        if self.root.contains_pane(self.active) {
            return;
        }
        let healed = self
            .root
            .leaves()
            .iter()
            .find(|leaf| !leaf.is_empty())
            .map_or_else(|| self.root.first_leaf().id(), |leaf| leaf.id());
        tracing::debug!("active pane {} gone, healing to {}", self.active, healed);
        self.active = healed;
    }

    /// Publishes pane-count and active-pane changes since the last
    /// dispatch. Called at the end of every operation, after the tree is
    /// fully consistent.
    fn dispatch_notifications(&mut self) {
        let count = self.root.leaf_count();
        if count != self.notified_panes {
            self.notified_panes = count;
            self.notifier.pane_count_changed(count);
        }
        if self.active != self.notified_active {
            self.notified_active = self.active;
            self.notifier.active_pane_changed(self.active);
        }
    }
}

impl Default for PaneTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PaneTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaneTree")
            .field("root", &self.root)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
