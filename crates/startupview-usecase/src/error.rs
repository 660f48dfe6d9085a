//! Error taxonomy of the directory use cases

use startupview_domain::StoreError;
use thiserror::Error;

/// Shown when the store could not be read
pub const STORE_ERROR_MESSAGE: &str =
    "An error occurred while accessing the database. Please try again later.";

/// Shown for anything unclassified
pub const UNKNOWN_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The requested entity does not exist
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// The store failed to answer
    #[error("Database error: {message}")]
    Store { message: String },

    #[error("{message}")]
    Unknown { message: String },
}

impl AppError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound {
            resource: resource.into(),
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::Store { .. } => "DATABASE_ERROR",
            AppError::Unknown { .. } => "UNKNOWN_ERROR",
        }
    }

    /// HTTP-style status of the failure
    pub fn status(&self) -> u16 {
        match self {
            AppError::NotFound { .. } => 404,
            AppError::Store { .. } | AppError::Unknown { .. } => 500,
        }
    }

    /// One of the three fixed user-facing messages
    ///
    /// Store and unknown failures never leak their details to the user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound { .. } => self.to_string(),
            AppError::Store { .. } => STORE_ERROR_MESSAGE.to_string(),
            AppError::Unknown { .. } => UNKNOWN_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Other { message } => AppError::Unknown { message },
            other => AppError::Store {
                message: other.to_string(),
            },
        }
    }
}
