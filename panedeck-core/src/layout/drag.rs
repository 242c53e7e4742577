//! Tab drag-and-drop controller
//!
//! Transient state for an in-progress tab drag: press on a tab header
//! records the source, hover continuously resolves the pane under the
//! pointer (no match is a valid no-target state), and drop either relocates
//! the tab through [`PaneTree::move_document`] or ends as a guaranteed
//! no-op. Abandoning a drag leaves the tree completely unchanged.

use super::error::{DropOutcome, MoveOutcome};
use super::geometry::Rect;
use super::model::PaneTree;
use super::types::PaneId;

/// State of one in-progress tab drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TabDrag {
    source: PaneId,
    index: usize,
    target: Option<PaneId>,
}

/// Controller for tab drag-and-drop.
///
/// At most one drag is in progress at a time; beginning a new drag
/// replaces an abandoned one.
#[derive(Debug, Default)]
pub struct DragController {
    drag: Option<TabDrag>,
}

impl DragController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Returns true while a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The source pane and tab index of the current drag.
    #[must_use]
    pub fn source(&self) -> Option<(PaneId, usize)> {
        self.drag.map(|d| (d.source, d.index))
    }

    /// The pane currently hovered, if any.
    #[must_use]
    pub fn target(&self) -> Option<PaneId> {
        self.drag.and_then(|d| d.target)
    }

    /// Starts a drag from the tab at `index` in `source`.
    pub fn begin(&mut self, source: PaneId, index: usize) {
        tracing::debug!("drag begin from {} index {}", source, index);
        self.drag = Some(TabDrag {
            source,
            index,
            target: None,
        });
    }

    /// Updates the hovered pane. `None` means the pointer is over no pane.
    ///
    /// Ignored while no drag is in progress.
    pub fn hover(&mut self, target: Option<PaneId>) {
        if let Some(drag) = &mut self.drag {
            drag.target = target;
        }
    }

    /// Resolves the hovered pane from pointer coordinates over the tree's
    /// viewport, then records it like [`hover`](Self::hover).
    pub fn hover_at(&mut self, tree: &PaneTree, viewport: Rect, x: f64, y: f64) {
        let target = super::geometry::pane_at(tree.root(), viewport, x, y);
        self.hover(target);
    }

    /// Completes the drag.
    ///
    /// Relocates the dragged tab to the hovered pane via
    /// [`PaneTree::move_document`], the same path as the "move to pane"
    /// menu command. Dropping on the source pane or on no pane is a no-op
    /// with zero state change. The drag state is cleared in every case.
    pub fn drop(&mut self, tree: &mut PaneTree) -> DropOutcome {
        let Some(drag) = self.drag.take() else {
            return DropOutcome::NotDragging;
        };
        let Some(target) = drag.target else {
            tracing::debug!("drag from {} dropped on no target", drag.source);
            return DropOutcome::NoTarget;
        };
        if target == drag.source {
            tracing::debug!("drag from {} dropped back on its source", drag.source);
            return DropOutcome::SameSource;
        }
        match tree.move_document(drag.source, drag.index, target) {
            MoveOutcome::Moved { document, .. } => DropOutcome::Moved { document },
            MoveOutcome::NoOp => DropOutcome::NoTarget,
        }
    }

    /// Abandons the drag with zero residual effect.
    pub fn cancel(&mut self) {
        if self.drag.take().is_some() {
            tracing::debug!("drag cancelled");
        }
    }
}
