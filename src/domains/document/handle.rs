//! The shared document handle.
//!
//! One document instance exists per server. Tool calls may arrive
//! concurrently over the transport, so the model sits behind a single mutex;
//! every mutation or read runs inside one critical section. `replace`
//! discards the previous in-memory state wholesale (create/open semantics).

use std::sync::{Mutex, MutexGuard};

use super::model::DocumentModel;

/// Process-wide owner of the mutable document.
#[derive(Debug, Default)]
pub struct DocumentHandle {
    inner: Mutex<DocumentModel>,
}

impl DocumentHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current document, discarding prior state.
    pub fn replace(&self, model: DocumentModel) {
        *self.lock() = model;
    }

    /// Run `f` against the document inside the mutex.
    pub fn with<R>(&self, f: impl FnOnce(&mut DocumentModel) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, DocumentModel> {
        // A panicked tool call must not wedge the whole server.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::document::model::ParagraphSpec;

    #[test]
    fn test_replace_discards_previous_state() {
        let handle = DocumentHandle::new();
        handle.with(|m| m.add_paragraph(ParagraphSpec::text("old")));
        assert_eq!(handle.with(|m| m.paragraph_count()), 1);

        handle.replace(DocumentModel::new());
        assert_eq!(handle.with(|m| m.paragraph_count()), 0);
    }

    #[test]
    fn test_with_returns_closure_result() {
        let handle = DocumentHandle::new();
        let id = handle.with(|m| m.add_heading("Title", 0));
        assert_eq!(id, "p0");
    }
}
