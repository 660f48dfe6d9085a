//! Domain Models - The vocabulary of the directory
//!
//! Entities are read-only: they are built from store documents and never
//! written back.

/// Declares a string-backed entity identifier.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }
    };
}

// Declared after the macro so the entity modules can expand it.
pub mod document;
pub mod fields;
pub mod industry;
pub mod investor;
pub mod startup;

/// Placeholder shown instead of a missing logo: the first character of the
/// name, or `?` when there is no name.
pub(crate) fn initial_of(name: &str) -> char {
    name.chars().next().unwrap_or('?')
}
