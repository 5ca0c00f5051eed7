//! Textual grammar for field paths.
//!
//! A field path is a `.`-separated list of segments. A backtick starts and
//! ends a quoted region in which `.` is literal, and a backslash makes the
//! next character literal wherever it appears. Quotes and escapes are
//! consumed and never show up in the parsed segments.
//!
//! ```text
//! a.b            -> ["a", "b"]
//! `a.b`.c        -> ["a.b", "c"]
//! a\.b           -> ["a.b"]
//! `x\`y`         -> ["x`y"]
//! ```
//!
//! [`render`] is the inverse: it escapes and quotes only the segments that
//! need it, so `parse(render(s)) == s` for every non-empty list of non-empty
//! segments. An empty segment renders as ``` `` ```, which [`parse`] rejects.

use crate::constants::{ESCAPE, FIELD_SEPARATOR, QUOTE};
use crate::model::{ModelError, Segments};

/// Whether the scanner is inside a backtick-quoted region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quoting {
    Normal,
    InQuotes,
}

impl Quoting {
    fn toggled(self) -> Self {
        match self {
            Quoting::Normal => Quoting::InQuotes,
            Quoting::InQuotes => Quoting::Normal,
        }
    }
}

/// What a single input character does to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Append(char),
    CloseSegment,
    ToggleQuotes,
    Escape,
    Stop,
}

/// The full transition table.
///
/// NUL ends the scan even directly after a backslash, which leaves the escape
/// pending and makes the path invalid.
fn step(quoting: Quoting, escape_pending: bool, c: char) -> Step {
    match (quoting, escape_pending, c) {
        (_, _, '\0') => Step::Stop,
        (_, true, c) => Step::Append(c),
        (Quoting::Normal, false, FIELD_SEPARATOR) => Step::CloseSegment,
        (Quoting::InQuotes, false, FIELD_SEPARATOR) => Step::Append(c),
        (_, false, QUOTE) => Step::ToggleQuotes,
        (_, false, ESCAPE) => Step::Escape,
        (_, false, c) => Step::Append(c),
    }
}

struct Scanner<'a> {
    input: &'a str,
    quoting: Quoting,
    escape_pending: bool,
    segment: String,
    segments: Vec<String>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            quoting: Quoting::Normal,
            escape_pending: false,
            segment: String::with_capacity(input.len()),
            segments: Vec::new(),
        }
    }

    fn invalid(&self, reason: impl Into<String>) -> ModelError {
        let reason = reason.into();
        tracing::debug!(path = self.input, %reason, "Rejected field path");
        ModelError::InvalidPath {
            path: self.input.to_string(),
            reason,
        }
    }

    fn close_segment(&mut self) -> Result<(), ModelError> {
        if self.segment.is_empty() {
            return Err(self.invalid(
                "paths must not be empty, begin with '.', end with '.', or contain '..'",
            ));
        }
        self.segments.push(std::mem::take(&mut self.segment));
        Ok(())
    }

    fn run(mut self) -> Result<Vec<String>, ModelError> {
        let input = self.input;
        for c in input.chars() {
            match step(self.quoting, self.escape_pending, c) {
                Step::Append(c) => {
                    self.escape_pending = false;
                    self.segment.push(c);
                }
                Step::CloseSegment => self.close_segment()?,
                Step::ToggleQuotes => self.quoting = self.quoting.toggled(),
                Step::Escape => self.escape_pending = true,
                Step::Stop => break,
            }
        }
        self.close_segment()?;

        if self.quoting == Quoting::InQuotes {
            return Err(self.invalid(format!("unterminated {QUOTE}")));
        }
        if self.escape_pending {
            return Err(self.invalid("trailing escape characters are not allowed"));
        }
        Ok(self.segments)
    }
}

/// Splits a textual field path into its unescaped segments.
///
/// Input ends at the first NUL character; anything after it is ignored.
///
/// # Errors
/// Returns [`ModelError::InvalidPath`] if any segment is empty, a backtick is
/// left open, or the input ends with an unconsumed backslash.
///
/// # Examples
///
/// ```rust
/// # use docmodel::model::field_path::parser::parse;
/// let segments = parse("`a.b`.c")?;
/// assert_eq!(segments, ["a.b", "c"]);
///
/// assert!(parse("a..b").is_err());
/// # Ok::<(), docmodel::model::ModelError>(())
/// ```
pub fn parse(path: &str) -> Result<Segments, ModelError> {
    let segments = Scanner::new(path).run()?;
    tracing::trace!(path, segments = segments.len(), "Parsed field path");
    Ok(Segments::from(segments))
}

/// Renders segments back into the textual grammar accepted by [`parse`].
///
/// Backslashes and backticks are escaped first; the escaped text is then
/// wrapped in backticks unless it is a bare identifier.
///
/// # Examples
///
/// ```rust
/// # use docmodel::Segments;
/// # use docmodel::model::field_path::parser::render;
/// let segments = Segments::from_segments(["user", "first name", "a`b"]);
/// assert_eq!(render(&segments), r"user.`first name`.`a\`b`");
/// ```
pub fn render(segments: &Segments) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(FIELD_SEPARATOR);
        }
        out.push_str(&escape_segment(segment));
    }
    out
}

/// Escapes a single segment and quotes it if required.
pub fn escape_segment(segment: &str) -> String {
    let mut escaped = String::with_capacity(segment.len() + 2);
    for c in segment.chars() {
        if c == ESCAPE || c == QUOTE {
            escaped.push(ESCAPE);
        }
        escaped.push(c);
    }

    if is_bare_identifier(&escaped) {
        escaped
    } else {
        format!("{QUOTE}{escaped}{QUOTE}")
    }
}

/// True if `segment` can appear in a field path without quoting.
///
/// Only ASCII letters, digits and `_` qualify, and the first character must
/// not be a digit. Non-ASCII letters always force quoting.
pub fn is_bare_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}
