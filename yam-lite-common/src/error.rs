use std::fmt::{Display, Formatter};
use std::str::Utf8Error;

/// A specialized `Result` type where the error is hard-wired to [`YamlError`].
pub type YamlResult<T> = Result<T, YamlError>;

#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub struct Marker {
    /// index in bytes of the input string.
    pub pos: usize,
    /// Column of mark. Zero indexed, counted in bytes.
    pub col: u32,
    /// Line of mark. Zero indexed.
    pub line: u32,
}

impl Marker {
    #[must_use]
    pub fn new(pos: usize, line: u32, col: u32) -> Self {
        Marker { pos, col, line }
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} column {}", self.line + 1, self.col + 1)
    }
}

/// Grammar errors. Every one of them aborts the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    /// Sibling item sits deeper than the collection it continues.
    InvalidIndent { expected: i64, found: i64 },
    /// Sibling item at the collection's indent has the wrong kind,
    /// e.g. a `- entry` where a `key:` was expected.
    UnexpectedSibling {
        expected: &'static str,
        found: &'static str,
    },
    UndefinedAnchor(String),
    UnexpectedSymbol { expected: char, found: char },
    UnexpectedEndOfStream,
    UnterminatedString,
    InvalidEscapeCharacter(char),
    InvalidUnicodeEscape,
    MissingFlowClosingBracket(char),
    /// A `\0` byte before the end of the input.
    NulByte,
    /// Collections nested deeper than the parser follows.
    RecursionLimitExceeded,
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorType::InvalidIndent { expected, found } => write!(
                f,
                "invalid sequence: expected indent of at most {expected}, found {found}"
            ),
            ErrorType::UnexpectedSibling { expected, found } => {
                write!(f, "invalid sequence: expected {expected}, found {found}")
            }
            ErrorType::UndefinedAnchor(name) => write!(f, "undefined anchor `{name}`"),
            ErrorType::UnexpectedSymbol { expected, found } => {
                write!(f, "expected {expected:?}, found {found:?}")
            }
            ErrorType::UnexpectedEndOfStream => write!(f, "unexpected end of stream"),
            ErrorType::UnterminatedString => write!(f, "unterminated quoted string"),
            ErrorType::InvalidEscapeCharacter(chr) => write!(f, "invalid escape `\\{chr}`"),
            ErrorType::InvalidUnicodeEscape => write!(f, "invalid unicode escape"),
            ErrorType::MissingFlowClosingBracket(chr) => write!(f, "missing closing `{chr}`"),
            ErrorType::NulByte => write!(f, "unexpected NUL byte"),
            ErrorType::RecursionLimitExceeded => write!(f, "recursion limit exceeded"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum YamlError {
    /// The source could not be read.
    Io(String),
    /// Input decoding error, contains the UTF-8 decoding error if one is known.
    NonDecodable(Option<Utf8Error>),
    ParseErr {
        mark: Marker,
        kind: ErrorType,
    },
}

impl YamlError {
    #[must_use]
    pub fn new_parse(mark: Marker, kind: ErrorType) -> Self {
        YamlError::ParseErr { mark, kind }
    }

    /// Grammar error kind, `None` for I/O and decoding failures.
    #[must_use]
    pub fn kind(&self) -> Option<&ErrorType> {
        match self {
            YamlError::ParseErr { kind, .. } => Some(kind),
            _ => None,
        }
    }

    #[must_use]
    pub fn mark(&self) -> Option<Marker> {
        match self {
            YamlError::ParseErr { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

impl Display for YamlError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YamlError::Io(info) => write!(f, "{info}"),
            YamlError::NonDecodable(Some(err)) => write!(f, "invalid UTF-8: {err}"),
            YamlError::NonDecodable(None) => write!(f, "invalid UTF-8"),
            YamlError::ParseErr { mark, kind } => write!(f, "{kind} at {mark}"),
        }
    }
}

impl std::error::Error for YamlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            YamlError::NonDecodable(Some(err)) => Some(err),
            _ => None,
        }
    }
}

impl From<Utf8Error> for YamlError {
    /// Creates a new `Error::NonDecodable` from the given error
    #[inline]
    fn from(error: Utf8Error) -> YamlError {
        YamlError::NonDecodable(Some(error))
    }
}
