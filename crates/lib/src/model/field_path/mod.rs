//! Field paths address a (possibly nested) field inside a document.
//!
//! A [`FieldPath`] is a thin wrapper over [`Segments`]. It can be parsed from
//! the dotted textual grammar in [`parser`], or built from segments the caller
//! already split, in which case no escape interpretation happens.
//!
//! # Usage
//!
//! ```rust
//! use docmodel::FieldPath;
//!
//! let path = FieldPath::parse("user.`first name`")?;
//! assert_eq!(path.len(), 2);
//! assert_eq!(path.canonical_string(), "user.`first name`");
//!
//! let same = FieldPath::from_segments(["user", "first name"]);
//! assert_eq!(path, same);
//! # Ok::<(), docmodel::model::ModelError>(())
//! ```

pub mod parser;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::constants::KEY_FIELD_NAME;

use super::{ModelError, Segments};

/// A path to a field inside a document.
///
/// Equality, ordering and hashing are those of the underlying [`Segments`].
/// Serialized as the list of unescaped segments, so every value round-trips,
/// including the empty path.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FieldPath {
    segments: Segments,
}

impl FieldPath {
    /// Parses a dotted field path such as ``a.`b.c`.d``.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidPath`] for empty segments, an unterminated
    /// backtick, or a trailing backslash.
    pub fn parse(path: &str) -> Result<Self, ModelError> {
        parser::parse(path).map(|segments| Self { segments })
    }

    /// Wraps segments the caller already split. No escaping is interpreted.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: Segments::from_segments(segments),
        }
    }

    /// The path with no segments, referring to the whole document.
    ///
    /// [`FieldPath::parse`] never produces this value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The single-segment path that refers to the document's own key.
    pub fn key_field_path() -> Self {
        Self::from_segments([KEY_FIELD_NAME])
    }

    /// Returns `true` if this is exactly [`FieldPath::key_field_path`].
    pub fn is_key_field_path(&self) -> bool {
        self.segments.len() == 1 && self.segments.first_segment() == Some(KEY_FIELD_NAME)
    }

    /// Renders the path in the textual grammar, quoting only where needed.
    pub fn canonical_string(&self) -> String {
        parser::render(&self.segments)
    }

    /// Returns the underlying segments.
    pub fn segments(&self) -> &Segments {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn first_segment(&self) -> Option<&str> {
        self.segments.first_segment()
    }

    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last_segment()
    }

    /// Returns a new path pointing at the child field `segment`.
    pub fn append(&self, segment: impl Into<String>) -> Self {
        Self {
            segments: self.segments.append(segment),
        }
    }

    /// Returns the parent field path. The empty path stays empty.
    pub fn pop_last(&self) -> Self {
        Self {
            segments: self.segments.pop_last(),
        }
    }

    /// Returns `true` if `other` is this field or one nested below it.
    pub fn is_prefix_of(&self, other: &FieldPath) -> bool {
        self.segments.is_prefix_of(&other.segments)
    }
}

impl From<Segments> for FieldPath {
    fn from(segments: Segments) -> Self {
        Self { segments }
    }
}

impl AsRef<Segments> for FieldPath {
    fn as_ref(&self) -> &Segments {
        &self.segments
    }
}

impl FromStr for FieldPath {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for FieldPath {
    type Error = ModelError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_string())
    }
}
