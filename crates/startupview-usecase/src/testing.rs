//! Scripted store for use case tests

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use startupview_domain::{Collection, Document, DocumentStore, EqualityFilter, StoreError};

/// In-test store: documents per collection in insertion order, plus
/// scripted failures and a log of the list calls it served.
#[derive(Default)]
pub struct ScriptedStore {
    documents: HashMap<Collection, Vec<Document>>,
    failing_documents: HashSet<(Collection, String)>,
    failing_collections: HashSet<Collection>,
    list_calls: Mutex<Vec<(Collection, Option<EqualityFilter>)>>,
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, collection: Collection, document: Document) -> Self {
        self.documents.entry(collection).or_default().push(document);
        self
    }

    /// Every read of this document fails
    pub fn failing_document(mut self, collection: Collection, id: &str) -> Self {
        self.failing_documents.insert((collection, id.to_string()));
        self
    }

    /// Every read in this collection fails
    pub fn failing_collection(mut self, collection: Collection) -> Self {
        self.failing_collections.insert(collection);
        self
    }

    pub fn list_calls(&self) -> Vec<(Collection, Option<EqualityFilter>)> {
        self.list_calls.lock().unwrap().clone()
    }

    fn check(&self, collection: Collection, id: Option<&str>) -> Result<(), StoreError> {
        let failing_doc = id
            .map(|id| self.failing_documents.contains(&(collection, id.to_string())))
            .unwrap_or(false);
        if failing_doc || self.failing_collections.contains(&collection) {
            return Err(StoreError::Unavailable {
                message: format!("scripted failure in {}", collection),
            });
        }
        Ok(())
    }
}

impl DocumentStore for ScriptedStore {
    async fn get_document(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        self.check(collection, Some(id))?;
        Ok(self
            .documents
            .get(&collection)
            .and_then(|docs| docs.iter().find(|d| d.id() == id))
            .cloned())
    }

    async fn list_documents(
        &self,
        collection: Collection,
        filter: Option<&EqualityFilter>,
    ) -> Result<Vec<Document>, StoreError> {
        self.list_calls
            .lock()
            .unwrap()
            .push((collection, filter.cloned()));
        self.check(collection, None)?;
        Ok(self
            .documents
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
