//! Document keys locate a document inside a tree of collections.
//!
//! A key path alternates collection ids and document ids, so a valid key
//! always has an even number of segments: `rooms/eros` names the document
//! `eros` in the collection `rooms`, and `rooms/eros/messages` (odd) names a
//! collection, not a document.

use std::{fmt, sync::OnceLock};

use serde::{Deserialize, Serialize};

use super::{ModelError, Segments};

/// The location of a document.
///
/// Equality, ordering and hashing are those of the underlying [`Segments`],
/// so a key sorts directly before the keys of documents nested below it.
///
/// # Examples
///
/// ```rust
/// # use docmodel::DocumentKey;
/// let key = DocumentKey::from_path_string("rooms/eros")?;
/// assert_eq!(key.document_id(), Some("eros"));
///
/// assert!(DocumentKey::from_path_string("rooms").is_err());
/// # Ok::<(), docmodel::model::ModelError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentKey {
    path: Segments,
}

static EMPTY: OnceLock<DocumentKey> = OnceLock::new();

impl DocumentKey {
    /// Wraps an already built path after checking it has even length.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidDocumentKey`] for an odd-length path.
    pub fn new(path: Segments) -> Result<Self, ModelError> {
        if !Self::is_document_key(&path) {
            let rendered = path.canonical_slash_string();
            tracing::debug!(
                path = %rendered,
                segments = path.len(),
                "Rejected odd-length document key"
            );
            return Err(ModelError::InvalidDocumentKey { path: rendered });
        }
        Ok(Self { path })
    }

    /// Parses a slash-delimited key such as `rooms/eros/messages/1`.
    ///
    /// Slash paths have no quoting or escaping.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidPath`] if the text contains `//`, and
    /// [`ModelError::InvalidDocumentKey`] if the segment count is odd.
    pub fn from_path_string(path: &str) -> Result<Self, ModelError> {
        Self::new(Segments::from_slash_string(path)?)
    }

    /// Builds a key from literal segments.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidDocumentKey`] if the segment count is odd.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Segments::from_segments(segments))
    }

    /// The shared key with no segments.
    ///
    /// It is created on first use and never changes. Any other zero-segment
    /// key compares equal to it.
    pub fn empty() -> &'static DocumentKey {
        EMPTY.get_or_init(|| DocumentKey {
            path: Segments::new(),
        })
    }

    /// Returns `true` if `path` could name a document, i.e. has even length.
    pub fn is_document_key(path: &Segments) -> bool {
        path.len() % 2 == 0
    }

    /// Returns the key's path.
    pub fn path(&self) -> &Segments {
        &self.path
    }

    /// The collection containing this document. Empty for the empty key.
    pub fn collection_path(&self) -> Segments {
        self.path.pop_last()
    }

    /// The id of the document within its collection.
    pub fn document_id(&self) -> Option<&str> {
        self.path.last_segment()
    }

    /// Returns `true` if the document lives directly in a collection named
    /// `collection_id`.
    pub fn has_collection_id(&self, collection_id: &str) -> bool {
        self.path.len() >= 2 && self.path.get(self.path.len() - 2) == Some(collection_id)
    }

    /// Returns `true` if this is a zero-segment key.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

impl Default for DocumentKey {
    fn default() -> Self {
        Self::empty().clone()
    }
}

impl TryFrom<Segments> for DocumentKey {
    type Error = ModelError;

    fn try_from(path: Segments) -> Result<Self, Self::Error> {
        Self::new(path)
    }
}

impl AsRef<Segments> for DocumentKey {
    fn as_ref(&self) -> &Segments {
        &self.path
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.canonical_slash_string())
    }
}

impl Serialize for DocumentKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.path.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DocumentKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let path = Segments::deserialize(deserializer)?;
        DocumentKey::new(path).map_err(serde::de::Error::custom)
    }
}
