//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! The domain says which reads it needs from the document store,
//! not how they are performed.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait DocumentStore   │  InMemoryDocumentStore
//!   fn get_document()   │  FirestoreStore
//!   fn list_documents() │  ConfiguredStore
//! ```

pub mod document_store;
