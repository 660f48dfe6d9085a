//! Adapter errors
//!
//! Converted into the domain's `StoreError` at the port boundary.

use startupview_domain::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid store URL: {0}")]
    InvalidUrl(String),

    #[error("Unexpected document format: {0}")]
    Decode(String),

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<AdapterError> for StoreError {
    fn from(err: AdapterError) -> Self {
        match err {
            AdapterError::Http(e) if e.is_decode() => StoreError::Malformed {
                message: e.to_string(),
            },
            AdapterError::Http(e) => StoreError::Unavailable {
                message: e.to_string(),
            },
            AdapterError::Status { status, body } => StoreError::Rejected {
                status,
                message: body,
            },
            AdapterError::Decode(message) => StoreError::Malformed { message },
            AdapterError::Json(e) => StoreError::Malformed {
                message: e.to_string(),
            },
            other => StoreError::Other {
                message: other.to_string(),
            },
        }
    }
}
