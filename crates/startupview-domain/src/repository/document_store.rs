//! Document Store - Abstract read access to the managed document database
//!
//! Only one-shot reads exist: fetch one document by id, or list a
//! collection with an optional equality filter.

use core::future::Future;

use crate::model::document::{Document, FieldValue};

/// Collections the directory reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Startups,
    Investors,
    Industries,
}

impl Collection {
    /// Collection name in the store
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Startups => "startups",
            Collection::Investors => "investors",
            Collection::Industries => "industry",
        }
    }

    pub fn all() -> [Collection; 3] {
        [Collection::Startups, Collection::Investors, Collection::Industries]
    }

    /// Resolve a store collection name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.as_str() == name)
    }
}

impl core::fmt::Display for Collection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `field == value`, evaluated by the store
#[derive(Debug, Clone, PartialEq)]
pub struct EqualityFilter {
    field: String,
    value: FieldValue,
}

impl EqualityFilter {
    pub fn new(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Whether a document satisfies the filter. Missing fields never match.
    pub fn matches(&self, document: &Document) -> bool {
        document.get(&self.field) == Some(&self.value)
    }
}

/// Errors that can occur while reading from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached
    Unavailable { message: String },
    /// The store answered with an error status
    Rejected { status: u16, message: String },
    /// The store answered with something that is not a document
    Malformed { message: String },
    /// Anything else
    Other { message: String },
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StoreError::Unavailable { message } => {
                write!(f, "Document store unavailable: {}", message)
            }
            StoreError::Rejected { status, message } => {
                write!(f, "Document store rejected request ({}): {}", status, message)
            }
            StoreError::Malformed { message } => {
                write!(f, "Malformed document: {}", message)
            }
            StoreError::Other { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for StoreError {}

/// Document Store Trait
///
/// This is a PORT in hexagonal architecture. Adapters provide the
/// implementations; the use cases only ever see this trait.
pub trait DocumentStore {
    /// Fetch one document, `Ok(None)` when it does not exist
    fn get_document(
        &self,
        collection: Collection,
        id: &str,
    ) -> impl Future<Output = Result<Option<Document>, StoreError>> + Send;

    /// List a collection, optionally restricted to documents matching `filter`
    ///
    /// Order is whatever the store returns.
    fn list_documents(
        &self,
        collection: Collection,
        filter: Option<&EqualityFilter>,
    ) -> impl Future<Output = Result<Vec<Document>, StoreError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_names() {
        assert_eq!(Collection::Startups.as_str(), "startups");
        assert_eq!(Collection::Industries.to_string(), "industry");
        assert_eq!(Collection::from_name("investors"), Some(Collection::Investors));
        assert_eq!(Collection::from_name("industries"), None);
    }

    #[test]
    fn test_equality_filter() {
        let filter = EqualityFilter::new("startup_industry_id", "ind-42");

        let matching = Document::new("s1").with_field("startup_industry_id", "ind-42");
        let other = Document::new("s2").with_field("startup_industry_id", "ind-7");
        let untagged = Document::new("s3");

        assert!(filter.matches(&matching));
        assert!(!filter.matches(&other));
        assert!(!filter.matches(&untagged));
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::Rejected {
            status: 403,
            message: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("403"));
    }
}
