use yam_lite::{decode_file, decode_str, Parser, Value};
use yam_lite_common::{ErrorType, Marker, YamlError};
use yam_lite_test_bench::assert_err_kind;

#[test]
fn error_wrong_sibling() {
    assert_err_kind(
        "a: 1\n- 2\n",
        &ErrorType::UnexpectedSibling {
            expected: "mapping key",
            found: "sequence entry",
        },
    );
    assert_err_kind(
        "- 1\nb: 2\n",
        &ErrorType::UnexpectedSibling {
            expected: "sequence entry",
            found: "mapping key",
        },
    );
}

#[test]
fn error_deeper_sibling() {
    let err = decode_str("- a: 1\n    b: 2\n").unwrap_err();
    assert_eq!(
        err.kind(),
        Some(&ErrorType::InvalidIndent {
            expected: 2,
            found: 4
        })
    );
    assert!(err.to_string().starts_with("invalid sequence"));
}

#[test]
fn error_undefined_anchor_position() {
    let err = decode_str("b: *x\n").unwrap_err();
    assert_eq!(err.mark(), Some(Marker::new(3, 0, 3)));
    assert_eq!(err.to_string(), "undefined anchor `x` at line 1 column 4");
}

#[test]
fn error_quoted_strings() {
    assert_err_kind("a: \"open\n", &ErrorType::UnterminatedString);
    assert_err_kind("a: \"bad \\q\"\n", &ErrorType::InvalidEscapeCharacter('q'));
    assert_err_kind("a: \"\\u12\"\n", &ErrorType::InvalidUnicodeEscape);
    assert_err_kind("a: \"\\ud800 lone\"\n", &ErrorType::InvalidUnicodeEscape);
}

#[test]
fn error_invalid_utf8() {
    let err = Parser::from(&b"a: \xff\n"[..]).parse().unwrap_err();
    assert!(matches!(err, YamlError::NonDecodable(Some(_))));
}

#[test]
fn error_missing_file() {
    let err = decode_file("this/file/does/not/exist.yaml").unwrap_err();
    match err {
        YamlError::Io(msg) => assert!(msg.starts_with("cannot open file")),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn decode_file_reads_config() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/benches/config.yaml");
    let doc = decode_file(path).unwrap();
    let service = &doc["service"];
    assert_eq!(service["name"], Value::from("inventory"));
    assert_eq!(service["replicas"], Value::Integer(16));
    assert_eq!(service["endpoints"][1]["path"], Value::from("/items/{id}"));
    assert_eq!(service["overrides"]["eu"], service["defaults"]);
    assert_eq!(doc, decode_str(include_str!("../benches/config.yaml")).unwrap());
}

#[test]
fn error_nul_byte() {
    let err = decode_str("a: 1\n\0\nb: 2\n").unwrap_err();
    assert_eq!(err.kind(), Some(&ErrorType::NulByte));
    assert_eq!(err.mark(), Some(Marker::new(5, 1, 0)));
    assert_err_kind("- [1, \0]\n", &ErrorType::NulByte);
    assert_err_kind("a: &x\0 1\n", &ErrorType::NulByte);
}

#[test]
fn error_text_after_quoted_scalar() {
    assert_err_kind(
        "\"a\"#x\n",
        &ErrorType::UnexpectedSymbol {
            expected: '\n',
            found: '#',
        },
    );
    assert_eq!(decode_str("\"a\" # note\n").unwrap(), Value::from("a"));
}
