//! Error types for path and key construction.
//!
//! Both variants describe malformed caller input. They are returned at the
//! point of detection and no partially built value ever escapes.

use thiserror::Error;

/// Structured error types for the model module.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A textual path could not be split into segments
    #[error("Invalid path ({path}): {reason}")]
    InvalidPath { path: String, reason: String },

    /// A document key was built from a path with an odd number of segments
    #[error("Invalid document key path: {path}")]
    InvalidDocumentKey { path: String },
}

impl ModelError {
    /// Check if this error came from path parsing
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, ModelError::InvalidPath { .. })
    }

    /// Check if this error came from document key validation
    pub fn is_invalid_document_key(&self) -> bool {
        matches!(self, ModelError::InvalidDocumentKey { .. })
    }

    /// Get the offending path text
    pub fn path(&self) -> &str {
        match self {
            ModelError::InvalidPath { path, .. } | ModelError::InvalidDocumentKey { path } => path,
        }
    }

    /// Get the reason if this is a parse error
    pub fn reason(&self) -> Option<&str> {
        match self {
            ModelError::InvalidPath { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

// Conversion from ModelError to the main Error type
impl From<ModelError> for crate::Error {
    fn from(err: ModelError) -> Self {
        crate::Error::Model(err)
    }
}
