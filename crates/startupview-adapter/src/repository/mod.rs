//! Document Store Adapters - Implementations of the `DocumentStore` port

pub mod configured;
pub mod firestore;
pub mod fixture;
pub mod in_memory;

pub use configured::ConfiguredStore;
pub use firestore::{FirestoreConfig, FirestoreStore};
pub use fixture::{load_fixture, parse_fixture, FixtureFormat};
pub use in_memory::InMemoryDocumentStore;
