//! # StartupView Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `repository/` - `DocumentStore` implementations (in-memory, fixture
//!   files, Cloud Firestore REST)
//! - `controller/` - Inbound adapters (HTTP)

pub mod controller;
pub mod error;
pub mod repository;

pub use error::AdapterError;
