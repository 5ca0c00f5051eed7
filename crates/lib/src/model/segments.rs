//! The ordered segment sequence shared by field paths and document keys.
//!
//! [`Segments`] stores its strings behind an `Arc<[String]>`, so clones are
//! cheap and never alias mutable state. Every operation that "changes" a path
//! returns a new value.
//!
//! Ordering is segment-by-segment and then by length, the same way slices and
//! tuples compare. A proper prefix therefore always sorts before the longer
//! path. Comparing joined text does not give the same order: `a.b` sorts
//! before `a/c` as a string, but `["a", "c"]` sorts before `["a.b"]`.

use std::{fmt, ops::Index, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::constants::KEY_SEPARATOR;

use super::ModelError;

/// An immutable, ordered sequence of path segments.
///
/// # Examples
///
/// ```rust
/// # use docmodel::Segments;
/// let path = Segments::from_segments(["rooms", "eros"]);
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.first_segment(), Some("rooms"));
///
/// let child = path.append("messages");
/// assert!(path.is_prefix_of(&child));
/// assert!(path < child);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segments {
    inner: Arc<[String]>,
}

impl Segments {
    /// Creates a path with no segments.
    pub fn new() -> Self {
        Self {
            inner: Arc::from(Vec::<String>::new()),
        }
    }

    /// Creates a path from already split segments, taken verbatim.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a slash-delimited path such as `rooms/eros/messages`.
    ///
    /// Empty segments are skipped, so leading and trailing slashes are
    /// tolerated.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidPath`] if the text contains `//`.
    pub fn from_slash_string(path: &str) -> Result<Self, ModelError> {
        let parts: Vec<&str> = path.split(KEY_SEPARATOR).collect();
        let interior = parts.get(1..parts.len().saturating_sub(1)).unwrap_or_default();
        if interior.iter().any(|segment| segment.is_empty()) {
            tracing::debug!(path, "Rejected slash path with empty segment");
            return Err(ModelError::InvalidPath {
                path: path.to_string(),
                reason: format!("paths must not contain {KEY_SEPARATOR}{KEY_SEPARATOR}"),
            });
        }

        Ok(Self::from_segments(
            parts.into_iter().filter(|segment| !segment.is_empty()),
        ))
    }

    /// Joins the segments with `/`, without any escaping.
    pub fn canonical_slash_string(&self) -> String {
        self.inner.join(KEY_SEPARATOR.to_string().as_str())
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no segments.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over the segments as string slices.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.inner.iter().map(String::as_str)
    }

    /// Returns the segment at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.inner.get(index).map(String::as_str)
    }

    /// Returns the segments as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.inner
    }

    pub fn first_segment(&self) -> Option<&str> {
        self.inner.first().map(String::as_str)
    }

    pub fn last_segment(&self) -> Option<&str> {
        self.inner.last().map(String::as_str)
    }

    /// Returns a new path with `segment` added to the end.
    pub fn append(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.inner.to_vec();
        segments.push(segment.into());
        Self {
            inner: segments.into(),
        }
    }

    /// Returns a new path with every segment of `other` added to the end.
    pub fn append_path(&self, other: &Segments) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        Self {
            inner: self.inner.iter().chain(other.inner.iter()).cloned().collect(),
        }
    }

    /// Returns a new path without the first `count` segments.
    ///
    /// Removing more segments than the path has yields an empty path.
    pub fn pop_first(&self, count: usize) -> Self {
        Self {
            inner: self.inner.iter().skip(count).cloned().collect(),
        }
    }

    /// Returns a new path without the last segment. An empty path stays empty.
    pub fn pop_last(&self) -> Self {
        let keep = self.len().saturating_sub(1);
        Self {
            inner: self.inner[..keep].into(),
        }
    }

    /// Returns `true` if every segment of `self` starts `other`.
    ///
    /// A path is a prefix of itself, and the empty path is a prefix of
    /// everything.
    pub fn is_prefix_of(&self, other: &Segments) -> bool {
        other.inner.starts_with(&self.inner)
    }

    /// Returns `true` if `other` is exactly one segment longer than `self`
    /// and `self` is its prefix.
    pub fn is_immediate_parent_of(&self, other: &Segments) -> bool {
        self.len() + 1 == other.len() && self.is_prefix_of(other)
    }
}

impl Default for Segments {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Segments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}

impl Index<usize> for Segments {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl<'a> IntoIterator for &'a Segments {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner
            .iter()
            .map(String::as_str as fn(&'a String) -> &'a str)
    }
}

impl From<Vec<String>> for Segments {
    fn from(segments: Vec<String>) -> Self {
        Self {
            inner: segments.into(),
        }
    }
}

impl From<&[&str]> for Segments {
    fn from(segments: &[&str]) -> Self {
        Self::from_segments(segments.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Segments {
    fn from(segments: [&str; N]) -> Self {
        Self::from_segments(segments)
    }
}

impl PartialEq<[&str]> for Segments {
    fn eq(&self, other: &[&str]) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == *b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Segments {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == other.as_slice()
    }
}

impl PartialEq<Vec<&str>> for Segments {
    fn eq(&self, other: &Vec<&str>) -> bool {
        self == other.as_slice()
    }
}

// Serialized as the plain segment list; no separator or escaping is involved
impl Serialize for Segments {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.inner.iter())
    }
}

impl<'de> Deserialize<'de> for Segments {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<String>::deserialize(deserializer).map(Segments::from)
    }
}
