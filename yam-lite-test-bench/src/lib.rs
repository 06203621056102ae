pub mod consts;

use std::fmt::Write;

use yam_lite::decode_str;
use yam_lite_common::{ErrorType, Value};

///
/// Assert that for a given input, the loaded tree dumps to the expected
/// event string. An expected string ending in `ERR` means loading must fail.
///
/// # Panics
///
///    Function panics if the dump of the loaded value differs from `events`.
pub fn assert_eq_value(input: &str, events: &str) {
    let mut line = String::new();
    match decode_str(input) {
        Ok(value) => write_str_from_value(&mut line, &value),
        Err(_) => line.push_str("\nERR"),
    }
    assert_eq!(line, events, "Error in case: {input}");
}

///
/// Assert that loading fails with the given error kind.
///
/// # Panics
///
///    Function panics if loading succeeds or fails with a different kind.
pub fn assert_err_kind(input: &str, kind: &ErrorType) {
    match decode_str(input) {
        Ok(value) => panic!("expected {kind:?}, loaded {value:?} from {input:?}"),
        Err(err) => assert_eq!(err.kind(), Some(kind), "Error in case: {input}"),
    }
}

/// Writes one event per line: `+MAP`/`-MAP`, `+SEQ`/`-SEQ` around
/// collections, `=KIND payload` for scalars. Mapping entries are the key
/// events followed by the value events.
pub fn write_str_from_value(line: &mut String, value: &Value) {
    let _ = match value {
        Value::Null => write!(line, "\n=NULL"),
        Value::Bool(v) => write!(line, "\n=BOOL {v}"),
        Value::Integer(v) => write!(line, "\n=INT {v}"),
        Value::FloatingPoint(v) => write!(line, "\n=FLT {v:?}"),
        Value::String(v) => write!(line, "\n=STR :{}", escape_text(v)),
        Value::Sequence(seq) => {
            line.push_str("\n+SEQ");
            for item in seq {
                write_str_from_value(line, item);
            }
            write!(line, "\n-SEQ")
        }
        Value::Mapping(map) => {
            line.push_str("\n+MAP");
            for (key, value) in map {
                write_str_from_value(line, key);
                write_str_from_value(line, value);
            }
            write!(line, "\n-MAP")
        }
    };
}

/// Inverse of [`unescape_text`] for the characters an event line cannot hold.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for chr in text.chars() {
        match chr {
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            '\x08' => output.push_str("\\b"),
            '\\' => output.push_str("\\\\"),
            _ => output.push(chr),
        }
    }
    output
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum EscapeState {
    Default,
    Slash,
}

#[must_use]
pub fn unescape_text(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut state = EscapeState::Default;
    for chr in text.chars() {
        match (chr, state) {
            ('\\', EscapeState::Default) => state = EscapeState::Slash,
            (escaped, EscapeState::Slash) => {
                state = EscapeState::Default;
                output.push(match escaped {
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    'b' => '\x08',
                    other => other,
                });
            }
            (_, EscapeState::Default) => output.push(chr),
        }
    }
    output
}
