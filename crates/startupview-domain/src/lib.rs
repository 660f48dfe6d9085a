//! # StartupView Domain Layer
//!
//! The vocabulary of the startup directory, with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/      - Entities, ids and the raw Document           ││
//! │  │  repository/ - DocumentStore port (not implementations)     ││
//! │  │  service/    - Entity mappers, industry filter              ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Whether documents come from Firestore, a fixture file or a test double,
//! nothing in this crate changes.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    document::{Document, FieldValue},
    industry::{Industry, IndustryId},
    investor::{Investor, InvestorId, StartupRef},
    startup::{InvestorRef, Startup, StartupId},
};

pub use repository::document_store::{Collection, DocumentStore, EqualityFilter, StoreError};

pub use service::industry_filter::IndustryFilter;
pub use service::mapper::{map_industry, map_investor, map_startup};
