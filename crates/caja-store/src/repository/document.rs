//! # Document Repository
//!
//! Sales document history against the `documentos` key, newest first.

use tracing::debug;

use caja_core::SalesDocument;

use crate::error::StoreResult;
use crate::keys;
use crate::store::Store;

/// Repository for sales document history.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    store: Store,
}

impl DocumentRepository {
    pub(crate) fn new(store: Store) -> Self {
        DocumentRepository { store }
    }

    /// Returns the document history, newest first.
    ///
    /// An absent key is an empty history, not an error.
    pub fn list(&self) -> StoreResult<Vec<SalesDocument>> {
        self.store.with_prefs(|prefs| {
            Ok(prefs
                .get::<Vec<SalesDocument>>(keys::DOCUMENTS)?
                .unwrap_or_default())
        })
    }

    /// Prepends a document to the history.
    ///
    /// Documents are only ever added at the front, so the stored order is
    /// newest first and listing needs no sort.
    pub fn add(&self, document: SalesDocument) -> StoreResult<()> {
        debug!(id = %document.id, doc_type = %document.doc_type, "Recording sales document");
        self.store.with_prefs_mut(|prefs| {
            let mut history = prefs
                .get::<Vec<SalesDocument>>(keys::DOCUMENTS)?
                .unwrap_or_default();
            history.insert(0, document);
            prefs.put(keys::DOCUMENTS, &history)
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
