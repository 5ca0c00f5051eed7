//!
//! docmodel: identity and addressing for records in a hierarchical document store.
//!
//! ## Core Concepts
//!
//! * **Segments (`model::Segments`)**: The ordered, immutable sequence of string segments shared by every path type.
//! * **Field paths (`model::FieldPath`)**: Address a (possibly nested) property inside a record, written as a
//!   dot-delimited string where backticks quote a segment and backslashes escape a single character.
//! * **Document keys (`model::DocumentKey`)**: Address a record inside a tree of collections. A key always has an
//!   even number of segments, alternating collection and document ids.
//!
//! All of these are plain values: immutable once built, cheap to clone, and safe to share across threads.

pub mod constants;
pub mod model;

/// Re-export the path types for easier access.
pub use model::{DocumentKey, FieldPath, Segments};

/// Result type used throughout the docmodel library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the docmodel library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured path and key errors from the model module
    #[error(transparent)]
    Model(model::ModelError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Model(_) => "model",
        }
    }

    /// Check if this error is validation-related.
    ///
    /// Every error currently produced by the library rejects malformed caller input.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Model(model_err) => {
                model_err.is_invalid_path() || model_err.is_invalid_document_key()
            }
        }
    }

    /// Check if this error was raised while parsing a field or slash path.
    pub fn is_invalid_path(&self) -> bool {
        match self {
            Error::Model(model_err) => model_err.is_invalid_path(),
        }
    }

    /// Check if this error rejected an odd-length document key.
    pub fn is_invalid_document_key(&self) -> bool {
        match self {
            Error::Model(model_err) => model_err.is_invalid_document_key(),
        }
    }
}
