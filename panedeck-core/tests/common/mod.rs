//! Shared test support: a scripted in-memory document and factory.

use std::cell::Cell;
use std::rc::Rc;

use panedeck_core::{Document, DocumentFactory};

/// An in-memory buffer with a scriptable dirty flag and save behavior.
#[derive(Debug)]
pub struct ScriptedDoc {
    path: String,
    dirty: Rc<Cell<bool>>,
    save_ok: bool,
}

impl ScriptedDoc {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_owned(),
            dirty: Rc::new(Cell::new(false)),
            save_ok: true,
        }
    }

    pub fn dirty(path: &str) -> Self {
        let doc = Self::new(path);
        doc.dirty.set(true);
        doc
    }

    #[allow(dead_code)]
    pub fn failing_save(path: &str) -> Self {
        let mut doc = Self::dirty(path);
        doc.save_ok = false;
        doc
    }

    /// Returns the document plus a handle for flipping its dirty flag, the
    /// way the editor does before delivering a modified-changed
    /// notification.
    #[allow(dead_code)]
    pub fn with_shared_dirty(path: &str) -> (Self, Rc<Cell<bool>>) {
        let doc = Self::new(path);
        let handle = Rc::clone(&doc.dirty);
        (doc, handle)
    }
}

impl Document for ScriptedDoc {
    fn path(&self) -> &str {
        &self.path
    }

    fn title(&self) -> String {
        if self.path.is_empty() {
            "Untitled".to_owned()
        } else {
            self.path.rsplit('/').next().unwrap_or(&self.path).to_owned()
        }
    }

    fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    fn save(&mut self) -> bool {
        if self.save_ok {
            self.dirty.set(false);
        }
        self.save_ok
    }

    fn duplicate(&self) -> Box<dyn Document> {
        Box::new(Self {
            path: self.path.clone(),
            dirty: Rc::new(Cell::new(false)),
            save_ok: self.save_ok,
        })
    }
}

/// Factory creating [`ScriptedDoc`] buffers, counting how many it made.
#[derive(Debug, Default)]
pub struct ScriptedFactory {
    created: usize,
}

impl ScriptedFactory {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn created(&self) -> usize {
        self.created
    }
}

impl DocumentFactory for ScriptedFactory {
    fn create(&mut self, path: &str) -> Box<dyn Document> {
        self.created += 1;
        Box::new(ScriptedDoc::new(path))
    }
}
