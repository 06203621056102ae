pub(crate) mod char_utils;
mod str_reader;

use alloc::vec::Vec;

pub use str_reader::StrReader;
use yam_lite_common::{ErrorType, Marker, YamlError, YamlResult};

use self::char_utils::is_white_tab_or_break;

///
/// Byte cursor the parser pulls its input from.
///
/// Every peek returns `b'\0'` once the input is exhausted, so callers can
/// treat end of stream as one more boundary character.
///
/// # Required methods
/// - `peek_byte_at(n)`: byte `n` positions ahead without consuming it.
/// - `prev_byte()`: last consumed byte, `b'\0'` at the start of input.
/// - `next_byte()`: consume one byte, updating line and column.
/// - `putback(chr)`: undo the last `next_byte()` of a byte that is not a line break.
/// - `skip_to_eol()`: consume everything up to, not including, the next `\n`.
/// - `take_until(a, b, out)`: move bytes into `out` up to the first `a` or `b`.
///
/// # Provided methods
/// - `peek_significant()`: skip whitespace, line breaks and comments, then peek. A `#`
///   glued to the previous character is returned as is.
/// - `consume(expected)`: consume the next significant byte or fail.
pub trait Reader {
    fn eof(&self) -> bool;

    /// Column of the next byte, zero indexed, counted in bytes.
    fn col(&self) -> u32;

    /// Line of the next byte, zero indexed.
    fn line(&self) -> u32;

    fn offset(&self) -> usize;

    #[must_use]
    fn peek_byte_at(&self, offset: usize) -> u8;

    #[must_use]
    fn prev_byte(&self) -> u8;

    fn next_byte(&mut self) -> u8;

    fn putback(&mut self, chr: u8);

    fn skip_to_eol(&mut self);

    /// Appends bytes to `out` until `a`, `b` or end of stream and returns the
    /// byte that stopped it (left unconsumed), `b'\0'` at end of stream.
    fn take_until(&mut self, a: u8, b: u8, out: &mut Vec<u8>) -> u8;

    #[must_use]
    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn peek_byte(&self) -> u8 {
        self.peek_byte_at(0)
    }

    #[must_use]
    fn mark(&self) -> Marker {
        Marker::new(self.offset(), self.line(), self.col())
    }

    /// `#` at the start of input or after whitespace opens a comment.
    #[must_use]
    fn is_comment_start(&self) -> bool {
        self.peek_byte() == b'#' && (self.offset() == 0 || is_white_tab_or_break(self.prev_byte()))
    }

    fn peek_significant(&mut self) -> u8 {
        loop {
            match self.peek_byte() {
                chr if is_white_tab_or_break(chr) => {
                    self.next_byte();
                }
                b'#' if self.is_comment_start() => self.skip_to_eol(),
                chr => return chr,
            }
        }
    }

    fn consume(&mut self, expected: u8) -> YamlResult<()> {
        let found = self.peek_significant();
        if found == expected {
            self.next_byte();
            return Ok(());
        }
        let kind = if found == b'\0' && self.eof() {
            ErrorType::UnexpectedEndOfStream
        } else if found == b'\0' {
            ErrorType::NulByte
        } else {
            ErrorType::UnexpectedSymbol {
                expected: char::from(expected),
                found: char::from(found),
            }
        };
        Err(YamlError::new_parse(self.mark(), kind))
    }
}
