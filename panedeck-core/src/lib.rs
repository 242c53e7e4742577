//! Panedeck Core Library
//!
//! This crate provides the pane layout core of the Panedeck editor: the
//! split-pane / tab-group manager that arranges open documents into an
//! arbitrarily nested, resizable binary-split layout.
//!
//! # Crate Structure
//!
//! - [`layout`] - Pane tree, orchestrator, drag-and-drop, hit testing
//! - [`document`] - External document and factory contracts
//! - [`notify`] - Host window notification seam
//! - [`tracing`] - Structured logging bootstrap
//!
//! Document editing, rendering, file I/O, and settings storage live in the
//! surrounding editor; this crate consumes them only through the narrow
//! contracts in [`document`] and [`notify`].

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod document;
pub mod layout;
pub mod notify;
pub mod tracing;

pub use document::{DIRTY_MARKER, Document, DocumentFactory, tab_label};
pub use layout::{
    BranchNode, DEFAULT_SPLIT_RATIO, DocumentId, DragController, DropOutcome, LayoutError,
    LeafPane, MAX_SPLIT_RATIO, MIN_SPLIT_RATIO, MoveOutcome, Orientation, PaneId, PaneNode,
    PaneTree, Rect, Tab, pane_at, pane_rects,
};
pub use notify::{CallbackHostNotifier, HostNotifier, NoOpHostNotifier};
pub use tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, field_names,
    get_tracing_config, init_tracing, is_tracing_initialized, span_names,
};
