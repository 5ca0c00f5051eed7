//! Tests for parsing field paths from their textual form.

use docmodel::{FieldPath, constants::KEY_FIELD_NAME};

use crate::helpers::*;

#[test]
fn test_unquoted_paths_split_on_dots() {
    for input in ["a", "a.b", "foo.bar.baz", "x1._y.z_2", "a-b.c d.ü"] {
        let expected: Vec<&str> = input.split('.').collect();
        assert_parses_to(input, &expected);
    }
}

#[test]
fn test_empty_segments_are_rejected() {
    for input in ["", ".", "a..b", ".a", "a.", "a.b.", "..a"] {
        assert_invalid_path(input);
    }
}

#[test]
fn test_backticks_quote_dots() {
    assert_parses_to("`a.b`", &["a.b"]);
    assert_parses_to("x.`a.b`.y", &["x", "a.b", "y"]);
    assert_parses_to("`a.b``.c`", &["a.b.c"]);
    assert_parses_to("`.`", &["."]);
}

#[test]
fn test_backslash_escapes_next_character() {
    assert_parses_to(r"a\.b", &["a.b"]);
    assert_parses_to(r"a\`b.c", &["a`b", "c"]);
    assert_parses_to(r"\\", &[r"\"]);
    assert_parses_to(r"`a\`b`.c", &["a`b", "c"]);
    assert_parses_to(r"`\\`", &[r"\"]);
}

#[test]
fn test_unterminated_quote_is_rejected() {
    assert_invalid_path("`abc");
    assert_invalid_path("a.`b");
    assert_invalid_path(r"`a\`");
}

#[test]
fn test_trailing_escape_is_rejected() {
    assert_invalid_path(r"abc\");
    assert_invalid_path(r"a.b\");
    assert_invalid_path(r"`a`\");
}

#[test]
fn test_nul_truncates_input() {
    assert_parses_to("a.b\0garbage", &["a", "b"]);
    assert_parses_to("a\0.`", &["a"]);
    // Whatever follows the NUL cannot rescue an empty segment.
    assert_invalid_path("a.\0b");
}

#[test]
fn test_error_message_names_the_path() {
    let err = FieldPath::parse("a..b").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("a..b"), "{message}");
}

#[test]
fn test_key_field_path_sentinel() {
    let key_path = FieldPath::key_field_path();
    assert!(key_path.is_key_field_path());
    assert_eq!(key_path.segments().first_segment(), Some(KEY_FIELD_NAME));

    assert!(FieldPath::parse(KEY_FIELD_NAME).unwrap().is_key_field_path());
    assert!(FieldPath::parse("`__name__`").unwrap().is_key_field_path());
    assert!(!field(&["__name__", "__name__"]).is_key_field_path());
    assert!(!field(&["name"]).is_key_field_path());
}
