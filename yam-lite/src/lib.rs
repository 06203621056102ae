#![no_std]
extern crate alloc;
extern crate core;
#[cfg(feature = "std")]
extern crate std;
extern crate yam_lite_common;

pub use anchor::AnchorTable;
pub use emitter::{emit, EmitResult, YamlEmitter};
pub use item::{Item, ItemKind, SENTINEL_INDENT};
pub use parser::Parser;
pub use reader::{Reader, StrReader};
pub use scanner::{ScannedScalar, Scanner};
pub use yam_lite_common::{ErrorType, Mapping, Marker, Sequence, Value, YamlError, YamlResult};

pub mod anchor;
pub mod coerce;
mod emitter;
mod flow;
pub mod item;
pub mod parser;
pub mod reader;
pub mod scanner;

/// Parses a whole stream held in memory.
///
/// ```
/// use yam_lite::{decode_str, Value};
///
/// let doc = decode_str("a: 1\nb: [x, y]\n").unwrap();
/// assert_eq!(doc["a"], Value::Integer(1));
/// assert_eq!(doc["b"][1], Value::from("y"));
/// ```
pub fn decode_str(text: &str) -> YamlResult<Value> {
    Parser::from(text).parse()
}

/// Reads and parses a file.
///
/// Unreadable paths fail with [`YamlError::Io`], invalid UTF-8 with
/// [`YamlError::NonDecodable`].
#[cfg(feature = "std")]
pub fn decode_file<P: AsRef<std::path::Path>>(path: P) -> YamlResult<Value> {
    use alloc::format;

    let path = path.as_ref();
    log::debug!("loading {}", path.display());
    let bytes = std::fs::read(path)
        .map_err(|err| YamlError::Io(format!("cannot open file {}: {err}", path.display())))?;
    let text = core::str::from_utf8(&bytes)?;
    decode_str(text)
}
