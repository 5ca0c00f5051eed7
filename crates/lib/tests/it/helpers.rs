//! Helper functions shared by the integration tests.

use docmodel::{DocumentKey, FieldPath, Segments};

// ===== CONSTRUCTION HELPERS =====

/// Build a field path from literal segments
pub fn field(segments: &[&str]) -> FieldPath {
    FieldPath::from_segments(segments.iter().copied())
}

/// Build a document key from literal segments, panicking on odd length
pub fn key(segments: &[&str]) -> DocumentKey {
    DocumentKey::from_segments(segments.iter().copied())
        .unwrap_or_else(|e| panic!("expected a valid key for {segments:?}: {e}"))
}

/// Build a segment sequence of the given length
pub fn segments_of_len(len: usize) -> Segments {
    Segments::from_segments((0..len).map(|i| format!("seg{i}")))
}

// ===== ASSERTION HELPERS =====

/// Assert that `input` parses into exactly `expected`
pub fn assert_parses_to(input: &str, expected: &[&str]) {
    match FieldPath::parse(input) {
        Ok(path) => assert_eq!(
            path.segments(),
            &Segments::from(expected),
            "unexpected segments for {input:?}"
        ),
        Err(e) => panic!("expected {input:?} to parse, got {e}"),
    }
}

/// Assert that `input` is rejected as an invalid field path
pub fn assert_invalid_path(input: &str) {
    match FieldPath::parse(input) {
        Ok(path) => panic!("expected {input:?} to be rejected, got {path:?}"),
        Err(e) => {
            assert!(e.is_invalid_path(), "wrong error kind for {input:?}: {e}");
            assert_eq!(e.path(), input);
        }
    }
}

/// Assert that rendering `path` and parsing it again gives `path` back
pub fn assert_round_trips(path: &FieldPath) {
    let rendered = path.canonical_string();
    let reparsed = FieldPath::parse(&rendered)
        .unwrap_or_else(|e| panic!("rendered form {rendered:?} did not parse: {e}"));
    assert_eq!(&reparsed, path, "round trip through {rendered:?}");
}
