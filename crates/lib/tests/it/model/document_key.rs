//! Tests for document key construction and validation.

use docmodel::{DocumentKey, Segments};

use crate::helpers::*;

#[test]
fn test_valid_key_lengths() {
    for len in [0, 2, 4, 6] {
        assert!(DocumentKey::is_document_key(&segments_of_len(len)));
        assert!(DocumentKey::new(segments_of_len(len)).is_ok());
    }
    for len in [1, 3, 5] {
        assert!(!DocumentKey::is_document_key(&segments_of_len(len)));
        let err = DocumentKey::new(segments_of_len(len)).unwrap_err();
        assert!(err.is_invalid_document_key());
    }
}

#[test]
fn test_from_path_string_odd_length_fails() {
    for input in ["rooms", "rooms/eros/messages", "/a/b/c/"] {
        let err = DocumentKey::from_path_string(input).unwrap_err();
        assert!(err.is_invalid_document_key(), "{input}: {err}");
    }
}

#[test]
fn test_from_path_string_matches_from_segments() {
    assert_eq!(
        DocumentKey::from_path_string("rooms/eros/messages/1").unwrap(),
        key(&["rooms", "eros", "messages", "1"])
    );
    assert_eq!(
        DocumentKey::from_path_string("/rooms/eros/").unwrap(),
        key(&["rooms", "eros"])
    );
}

#[test]
fn test_empty_key() {
    let empty = DocumentKey::empty();
    assert_eq!(empty.path().len(), 0);
    assert_eq!(*empty, key(&[]));
    assert_eq!(*empty, DocumentKey::new(Segments::new()).unwrap());
    assert_eq!(empty.to_string(), "");
}

#[test]
fn test_empty_key_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| DocumentKey::empty() as *const DocumentKey as usize))
        .collect();
    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_key_path_is_read_only_view() {
    let k = key(&["rooms", "eros"]);
    let child = k.path().append("messages");
    assert_eq!(k.path().len(), 2);
    assert_eq!(child.len(), 3);
    assert!(!DocumentKey::is_document_key(&child));
}
