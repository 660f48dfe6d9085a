//! # StartupView Use Case Layer
//!
//! Application-specific read flows over the document store port:
//!
//! - [`Directory`] - startup listing, investor detail with logo enrichment,
//!   and the plain list/detail reads
//! - [`AppError`] - the error taxonomy views classify into user messages
//! - [`ViewState`] / [`StartupListingView`] - what a view shows, and the
//!   listing that re-fetches when the industry filter changes

pub mod directory;
pub mod error;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use directory::Directory;
pub use error::AppError;
pub use view::{RetryTarget, StartupListingView, ViewState};

pub use startupview_domain;
