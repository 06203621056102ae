extern crate core;

pub mod error;
pub mod value;

pub use error::{ErrorType, Marker, YamlError, YamlResult};
pub use value::{Mapping, Sequence, Value};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ScalarType {
    /// Unquoted string type like:
    /// ```yaml
    ///   multiline
    ///   string
    /// ```
    Plain,
    /// Folded string type like:
    /// ```yaml
    ///   >
    ///     folded
    ///     string
    /// ```
    Folded,
    /// Literal string type like:
    /// ```yaml
    ///   |
    ///     literal
    ///     string
    /// ```
    Literal,
    /// Double quoted string with JSON escapes, e.g.:
    /// ```yaml
    /// "This is a quoted string
    ///    with \"double quoted\" string within."
    /// ```
    DoubleQuote,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ChompIndicator {
    /// `-` final line break and any trailing empty lines are excluded from the scalar’s content
    Strip,
    /// `+` or nothing, every line break up to the next token is kept
    Keep,
}
