//! Error and outcome types for layout operations
//!
//! Most mutations on the tree degrade to benign no-ops on structural misuse
//! (bad pane, out-of-range tab index, self-moves), so they report through
//! the outcome enums here rather than through `Result`. Only
//! explicitly-targeted commands return [`LayoutError`].

use super::types::{DocumentId, PaneId};

/// Errors returned by explicitly-targeted layout commands.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The specified pane does not exist in the live tree.
    #[error("pane not found: {0}")]
    PaneNotFound(PaneId),

    /// Tab index outside the pane's document list.
    #[error("tab index {index} out of range for {pane} (len {len})")]
    TabIndexOutOfRange {
        /// The pane that was addressed.
        pane: PaneId,
        /// The offending index.
        index: usize,
        /// Number of documents in the pane.
        len: usize,
    },

    /// Invalid split ratio (must be between 0.0 and 1.0).
    #[error("invalid split ratio: {0} (must be between 0.0 and 1.0)")]
    InvalidRatio(f64),
}

/// Result of relocating a document between panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The document was appended to the destination pane.
    Moved {
        /// The document that moved.
        document: DocumentId,
        /// True if the source pane emptied and was collapsed away.
        source_collapsed: bool,
    },
    /// Nothing changed: same pane, unknown pane, or bad index.
    NoOp,
}

impl MoveOutcome {
    /// Returns true if a document actually changed panes.
    #[must_use]
    pub const fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    /// Returns the moved document ID, if any.
    #[must_use]
    pub const fn document(&self) -> Option<DocumentId> {
        match self {
            Self::Moved { document, .. } => Some(*document),
            Self::NoOp => None,
        }
    }
}

/// Result of completing a tab drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The dragged tab moved to the hovered pane.
    Moved {
        /// The document that moved.
        document: DocumentId,
    },
    /// The pointer was over no pane; the drag ends with no effect.
    NoTarget,
    /// The drop landed back on the source pane; guaranteed no-op.
    SameSource,
    /// No drag was in progress.
    NotDragging,
}

impl DropOutcome {
    /// Returns true if the drop relocated a document.
    #[must_use]
    pub const fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}
