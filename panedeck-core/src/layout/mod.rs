//! Split-pane layout module
//!
//! This module provides the core data model for the editor's pane layout:
//! an arbitrarily nested, resizable binary-split tree of tab groups.
//! Documents live in leaf panes, panes split in two, and empty structure is
//! collapsed automatically after every removal.
//!
//! # Architecture
//!
//! - **Binary tree**: every split has exactly two sides; deeper layouts are
//!   nested splits, never n-ary ones.
//! - **Stable pane IDs**: the active pane (and any external reference to a
//!   pane) is a [`PaneId`] resolved against the live tree on every use.
//! - **Self-simplifying**: no reachable state presents a split with an
//!   empty side; pane numbers are contiguous 1..=N left to right.
//!
//! # Module Structure
//!
//! - `types` - Identifier types (`PaneId`, `DocumentId`, `Orientation`)
//! - `tree` - Node structure (`PaneNode`, `LeafPane`, `BranchNode`, `Tab`)
//! - `model` - The orchestrator (`PaneTree`)
//! - `drag` - Tab drag-and-drop (`DragController`)
//! - `geometry` - Viewport subdivision and pointer hit testing
//! - `error` - Error and outcome types
//!
//! # Example
//!
//! ```
//! use panedeck_core::layout::{Orientation, PaneTree};
//!
//! let mut tree = PaneTree::new();
//! assert_eq!(tree.pane_count(), 1);
//!
//! // An empty pane cannot be split; opening a document first makes the
//! // split duplicate it into the new sibling.
//! assert!(tree.split_active_pane(Orientation::Column).is_none());
//! ```

mod drag;
mod error;
mod geometry;
mod model;
mod tree;
mod types;

pub use drag::DragController;
pub use error::{DropOutcome, LayoutError, MoveOutcome};
pub use geometry::{Rect, pane_at, pane_rects};
pub use model::PaneTree;
pub use tree::{
    BranchNode, DEFAULT_SPLIT_RATIO, LeafPane, MAX_SPLIT_RATIO, MIN_SPLIT_RATIO, PaneNode, Tab,
};
pub use types::{DocumentId, Orientation, PaneId};
