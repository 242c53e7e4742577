//! External document contract
//!
//! The layout core does not edit, render, or persist file buffers; it only
//! arranges them. The editor supplies buffers through the [`Document`] trait
//! and creates them through a [`DocumentFactory`]. A document is owned by
//! exactly one leaf pane at a time; dropping the boxed trait object is what
//! destroys the buffer from the layout's point of view.

use std::fmt;

/// Marker appended to a tab label while its document has unsaved changes.
///
/// A successful save strips it again.
pub const DIRTY_MARKER: &str = " *";

/// An open file buffer supplied by the editor.
///
/// The layout core queries the dirty flag when refreshing tab labels and
/// delegates saving to the buffer itself. `duplicate` is used by
/// split-pane creation to open a second, independent view of the same file.
pub trait Document: fmt::Debug {
    /// The file path backing this buffer. Empty for an untitled buffer.
    fn path(&self) -> &str;

    /// Display title for the tab, without any dirty marker.
    fn title(&self) -> String;

    /// Returns true if the buffer has unsaved changes.
    fn is_dirty(&self) -> bool;

    /// Writes the buffer to its backing path.
    ///
    /// Returns `false` on failure; the layout leaves the dirty marker in
    /// place and does not retry.
    fn save(&mut self) -> bool;

    /// Creates a new, independent buffer for the same path.
    fn duplicate(&self) -> Box<dyn Document>;
}

/// Factory for creating documents from paths.
///
/// Implemented by the editor; the file-type resolution needed to set up
/// highlighting for a new buffer happens behind this seam.
pub trait DocumentFactory {
    /// Opens a buffer for `path`. An empty path yields an untitled buffer.
    fn create(&mut self, path: &str) -> Box<dyn Document>;
}

/// Builds the tab label for a document: its title, plus [`DIRTY_MARKER`]
/// while the document is dirty.
#[must_use]
pub fn tab_label(document: &dyn Document) -> String {
    let title = document.title();
    if document.is_dirty() {
        format!("{title}{DIRTY_MARKER}")
    } else {
        title
    }
}
