//! Configured Store - The store chosen at startup
//!
//! The use cases are generic over one `DocumentStore`; this enum lets the
//! binary pick the backend from configuration without boxing futures.

use startupview_domain::{Collection, Document, DocumentStore, EqualityFilter, StoreError};

use super::firestore::FirestoreStore;
use super::in_memory::InMemoryDocumentStore;

#[derive(Debug, Clone)]
pub enum ConfiguredStore {
    InMemory(InMemoryDocumentStore),
    Firestore(FirestoreStore),
}

impl ConfiguredStore {
    /// Backend name, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ConfiguredStore::InMemory(_) => "in-memory",
            ConfiguredStore::Firestore(_) => "firestore",
        }
    }
}

impl From<InMemoryDocumentStore> for ConfiguredStore {
    fn from(store: InMemoryDocumentStore) -> Self {
        ConfiguredStore::InMemory(store)
    }
}

impl From<FirestoreStore> for ConfiguredStore {
    fn from(store: FirestoreStore) -> Self {
        ConfiguredStore::Firestore(store)
    }
}

impl DocumentStore for ConfiguredStore {
    async fn get_document(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        match self {
            ConfiguredStore::InMemory(store) => store.get_document(collection, id).await,
            ConfiguredStore::Firestore(store) => store.get_document(collection, id).await,
        }
    }

    async fn list_documents(
        &self,
        collection: Collection,
        filter: Option<&EqualityFilter>,
    ) -> Result<Vec<Document>, StoreError> {
        match self {
            ConfiguredStore::InMemory(store) => store.list_documents(collection, filter).await,
            ConfiguredStore::Firestore(store) => store.list_documents(collection, filter).await,
        }
    }
}
