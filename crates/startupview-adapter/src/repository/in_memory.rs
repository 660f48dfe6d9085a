//! In-Memory Document Store
//!
//! Documents kept per collection in insertion order. Backs fixture files
//! and tests; failures can be injected per collection or per document.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};

use startupview_domain::{Collection, Document, DocumentStore, EqualityFilter, StoreError};
use tracing::debug;

#[derive(Debug, Default)]
struct Inner {
    collections: HashMap<Collection, Vec<Document>>,
    failing_collections: HashSet<Collection>,
    failing_documents: HashSet<(Collection, String)>,
}

impl Inner {
    fn put(&mut self, collection: Collection, document: Document) {
        let documents = self.collections.entry(collection).or_default();
        match documents.iter_mut().find(|d| d.id() == document.id()) {
            Some(existing) => *existing = document,
            None => documents.push(document),
        }
    }
}

/// In-memory Document Store
///
/// Thread-safe implementation using RwLock. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document, replacing one with the same id in place
    pub fn insert(&self, collection: Collection, document: Document) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Other {
            message: "Failed to acquire write lock".to_string(),
        })?;
        inner.put(collection, document);
        Ok(())
    }

    /// Builder: insert a document
    ///
    /// Seeding recovers a poisoned lock; the maps hold no partial state.
    pub fn with_document(self, collection: Collection, document: Document) -> Self {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .put(collection, document);
        self
    }

    /// Make every read in `collection` fail until [`heal`](Self::heal)
    pub fn fail_collection(&self, collection: Collection) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Other {
            message: "Failed to acquire write lock".to_string(),
        })?;
        inner.failing_collections.insert(collection);
        Ok(())
    }

    /// Make reads of one document fail until [`heal`](Self::heal)
    pub fn fail_document(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Other {
            message: "Failed to acquire write lock".to_string(),
        })?;
        inner.failing_documents.insert((collection, id.to_string()));
        Ok(())
    }

    /// Clear all injected failures
    pub fn heal(&self) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Other {
            message: "Failed to acquire write lock".to_string(),
        })?;
        inner.failing_collections.clear();
        inner.failing_documents.clear();
        Ok(())
    }

    /// Number of documents in a collection
    pub fn count(&self, collection: Collection) -> Result<usize, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Other {
            message: "Failed to acquire read lock".to_string(),
        })?;
        Ok(inner.collections.get(&collection).map_or(0, Vec::len))
    }

    fn injected(inner: &Inner, collection: Collection, id: Option<&str>) -> Result<(), StoreError> {
        let document_fails = id.is_some_and(|id| {
            inner
                .failing_documents
                .contains(&(collection, id.to_string()))
        });
        if document_fails || inner.failing_collections.contains(&collection) {
            return Err(StoreError::Unavailable {
                message: format!("injected failure reading {}", collection),
            });
        }
        Ok(())
    }
}

impl DocumentStore for InMemoryDocumentStore {
    async fn get_document(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Other {
            message: "Failed to acquire read lock".to_string(),
        })?;
        Self::injected(&inner, collection, Some(id))?;

        debug!(%collection, id, "in-memory get");
        Ok(inner
            .collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|d| d.id() == id))
            .cloned())
    }

    async fn list_documents(
        &self,
        collection: Collection,
        filter: Option<&EqualityFilter>,
    ) -> Result<Vec<Document>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Other {
            message: "Failed to acquire read lock".to_string(),
        })?;
        Self::injected(&inner, collection, None)?;

        debug!(%collection, filter = filter.map(EqualityFilter::field), "in-memory list");
        Ok(inner
            .collections
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| filter.map_or(true, |f| f.matches(d)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
