//! Path and key value types.
//!
//! # Core Types
//!
//! - [`Segments`] - The shared, immutable segment sequence behind every path
//! - [`FieldPath`] - A dot-delimited address of a field inside a document
//! - [`DocumentKey`] - An even-length slash-delimited address of a document
//! - [`ModelError`] - Errors raised while parsing or validating either path type

pub mod document_key;
pub mod errors;
pub mod field_path;
pub mod segments;

pub use document_key::DocumentKey;
pub use errors::ModelError;
pub use field_path::FieldPath;
pub use segments::Segments;
