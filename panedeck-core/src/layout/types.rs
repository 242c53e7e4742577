//! Core identifier types for the pane layout system
//!
//! This module contains the fundamental identifier types and enums used
//! throughout the layout tree.

use std::fmt;
use uuid::Uuid;

/// Unique identifier for a pane within the layout tree.
///
/// Each leaf pane has a unique ID that persists throughout its lifetime,
/// even as the tree structure around it changes. Consumers should treat a
/// `PaneId` as an opaque handle and resolve it against the live tree on
/// every use: the pane it names may have been collapsed away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaneId(pub Uuid);

impl PaneId {
    /// Creates a new random pane ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PaneId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pane({})", self.0)
    }
}

/// Unique identifier for an open document.
///
/// Assigned by the tree when a document is opened; stable while the
/// document moves between panes. Two documents opened from the same path
/// (e.g. the original and a split duplicate) have distinct IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    /// Creates a new random document ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a document ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Document({})", self.0)
    }
}

/// Orientation of a two-way split.
///
/// When a pane is split, it is divided into two child panes arranged
/// either as two rows (top/bottom) or two columns (left/right).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Children stacked as rows, first on top.
    Row,
    /// Children arranged as columns, first on the left.
    Column,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "Row"),
            Self::Column => write!(f, "Column"),
        }
    }
}
