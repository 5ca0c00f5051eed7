//! Tests for the crate-level error type.

use docmodel::{DocumentKey, Error, FieldPath};

fn parse_field(input: &str) -> docmodel::Result<FieldPath> {
    Ok(FieldPath::parse(input)?)
}

fn parse_key(input: &str) -> docmodel::Result<DocumentKey> {
    Ok(DocumentKey::from_path_string(input)?)
}

#[test]
fn test_invalid_path_converts() {
    let err = parse_field("a..b").unwrap_err();
    assert_eq!(err.module(), "model");
    assert!(err.is_invalid_path());
    assert!(!err.is_invalid_document_key());
    assert!(err.is_validation_error());
}

#[test]
fn test_invalid_document_key_converts() {
    let err = parse_key("rooms").unwrap_err();
    assert!(err.is_invalid_document_key());
    assert!(err.is_validation_error());
    assert!(matches!(err, Error::Model(_)));
    assert_eq!(err.to_string(), "Invalid document key path: rooms");
}

#[test]
fn test_valid_input_passes_through() -> docmodel::Result<()> {
    let path = parse_field("a.b")?;
    let key = parse_key("rooms/eros")?;
    assert_eq!(path.len(), 2);
    assert_eq!(key.path().len(), 2);
    Ok(())
}
