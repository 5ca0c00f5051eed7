//! Constants used throughout the docmodel library.
//!
//! This module provides central definitions for reserved field names and the
//! separators of the two path grammars.

/// Reserved field name that refers to the document's own key.
pub const KEY_FIELD_NAME: &str = "__name__";

/// Separator between segments of a field path.
pub const FIELD_SEPARATOR: char = '.';

/// Separator between segments of a document key path.
pub const KEY_SEPARATOR: char = '/';

/// Quote character that makes `.` literal inside a field path segment.
pub const QUOTE: char = '`';

/// Escape character that makes the following character literal.
pub const ESCAPE: char = '\\';
