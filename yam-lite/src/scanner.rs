use alloc::string::String;
use alloc::vec::Vec;

use yam_lite_common::{ChompIndicator, ErrorType, ScalarType, Value, YamlError, YamlResult};

use crate::coerce::coerce;
use crate::reader::char_utils::{is_blank, is_blank_or_breakz, is_break, is_white_tab_or_break};
use crate::reader::Reader;

/// Deepest nesting of flow collections, and separately of block values,
/// the parser follows before failing with
/// [`ErrorType::RecursionLimitExceeded`].
pub const MAX_DEPTH: usize = 256;

/// Characters that end a plain scalar inside one flow collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Frame {
    stop: u8,
    comma: u8,
    colon: u8,
}

impl Frame {
    const BLOCK: Frame = Frame {
        stop: b'\0',
        comma: b'\0',
        colon: b'\0',
    };

    pub(crate) fn flow(stop: u8) -> Frame {
        Frame {
            stop,
            comma: b',',
            colon: b':',
        }
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn contains(self, chr: u8) -> bool {
        chr != b'\0' && (chr == self.stop || chr == self.comma || chr == self.colon)
    }
}

/// One scanned scalar token.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedScalar {
    pub value: Value,
    /// Plain text that ended in `:` followed by a blank or a boundary.
    pub is_key: bool,
    pub style: ScalarType,
}

/// Turns the character stream into scalars, flow values and items.
///
/// The scanner owns the reader and the stack of flow delimiter frames. Item
/// classification lives in `item.rs`, flow collections and quoted strings in
/// `flow.rs`.
pub struct Scanner<R> {
    pub(crate) reader: R,
    frames: Vec<Frame>,
}

impl<R: Reader> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Scanner {
            reader,
            frames: Vec::new(),
        }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    #[must_use]
    pub fn flow_depth(&self) -> usize {
        self.frames.len()
    }

    pub(crate) fn push_frame(&mut self, frame: Frame) -> YamlResult<()> {
        if self.frames.len() >= MAX_DEPTH {
            return Err(YamlError::new_parse(
                self.reader.mark(),
                ErrorType::RecursionLimitExceeded,
            ));
        }
        self.frames.push(frame);
        Ok(())
    }

    pub(crate) fn pop_frame(&mut self) {
        self.frames.pop();
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn frame(&self) -> Frame {
        self.frames.last().copied().unwrap_or(Frame::BLOCK)
    }

    /// `\0` only ends the input at the real end of the stream.
    pub(crate) fn reject_nul(&self, chr: u8) -> YamlResult<()> {
        if chr == b'\0' && !self.reader.eof() {
            return Err(YamlError::new_parse(self.reader.mark(), ErrorType::NulByte));
        }
        Ok(())
    }

    /// Line break, end of stream, an active flow delimiter, or, in plain
    /// text, the start of a comment.
    pub(crate) fn end_of_token(&self, chr: u8, plain: bool) -> bool {
        chr == b'\0'
            || is_break(chr)
            || self.frame().contains(chr)
            || (plain && chr == b'#' && self.reader.is_comment_start())
    }

    /// Scans one plain, quoted, literal (`|`) or folded (`>`) scalar.
    ///
    /// The column of the first significant character becomes the
    /// indentation floor: continuation lines are consumed while they start
    /// at or after it. Plain text is coerced, block text is always a string.
    pub fn scan_scalar(&mut self) -> YamlResult<ScannedScalar> {
        let mut chr = self.reader.peek_significant();

        if chr == b'"' {
            let text = self.scan_quoted()?;
            return Ok(ScannedScalar {
                value: Value::String(text),
                is_key: false,
                style: ScalarType::DoubleQuote,
            });
        }

        let style = match chr {
            b'|' => ScalarType::Literal,
            b'>' => ScalarType::Folded,
            _ => ScalarType::Plain,
        };
        let plain = style == ScalarType::Plain;
        let multi = style == ScalarType::Literal;
        let folded = style == ScalarType::Folded;
        let chomp = if plain {
            ChompIndicator::Keep
        } else {
            self.scan_block_header()
        };

        chr = self.reader.peek_significant();
        let indent = self.reader.col();
        let mut line = self.reader.line();
        let mut result: Vec<u8> = Vec::new();
        let mut was_indented = false;
        let mut is_key = false;

        while self.reader.col() >= indent {
            let start = self.reader.col();
            let deeper = folded && start != indent;
            let add_cr = deeper || multi || was_indented;
            let add_indent = deeper || multi;

            let mut text: Vec<u8> = Vec::new();
            let mut trimmed = 0;
            let mut colon = chr == b':';

            while !self.end_of_token(chr, plain) {
                let byte = self.reader.next_byte();
                text.push(byte);
                if !is_white_tab_or_break(byte) {
                    trimmed = text.len();
                }
                chr = self.reader.peek_byte();

                if plain && colon && (self.end_of_token(chr, plain) || is_blank(chr)) {
                    is_key = true;
                    break;
                }
                colon = chr == b':';
            }
            self.reject_nul(chr)?;

            if !result.is_empty() {
                if add_cr {
                    for _ in line..self.reader.line() {
                        result.push(b'\n');
                    }
                } else {
                    result.push(b' ');
                }
            }

            if add_indent {
                for _ in indent..start {
                    result.push(b' ');
                }
            }

            result.extend_from_slice(&text[..trimmed]);
            line = self.reader.line();

            if is_key {
                return Ok(ScannedScalar {
                    value: Value::String(into_string(result)?),
                    is_key,
                    style,
                });
            }

            chr = self.reader.peek_significant();
            self.reject_nul(chr)?;
            if self.end_of_token(chr, plain) || self.at_document_marker() {
                break;
            }
            was_indented = add_indent;
        }

        if plain {
            return Ok(ScannedScalar {
                value: coerce(into_string(result)?),
                is_key,
                style,
            });
        }

        if chomp == ChompIndicator::Keep {
            for _ in line..self.reader.line() {
                result.push(b'\n');
            }
        }
        Ok(ScannedScalar {
            value: Value::String(into_string(result)?),
            is_key,
            style,
        })
    }

    /// `---` or `...` at the start of a line, followed by a boundary.
    fn at_document_marker(&self) -> bool {
        let chr = self.reader.peek_byte();
        self.reader.col() == 0
            && (chr == b'-' || chr == b'.')
            && self.reader.peek_byte_at(1) == chr
            && self.reader.peek_byte_at(2) == chr
            && is_blank_or_breakz(self.reader.peek_byte_at(3))
    }

    /// Consumes the `|`/`>` indicator and an optional `-`/`+` chomping indicator.
    fn scan_block_header(&mut self) -> ChompIndicator {
        self.reader.next_byte();
        match self.reader.peek_byte() {
            b'-' => {
                self.reader.next_byte();
                ChompIndicator::Strip
            }
            b'+' => {
                self.reader.next_byte();
                ChompIndicator::Keep
            }
            _ => ChompIndicator::Keep,
        }
    }

    /// Reads a run of non-blank characters, used for anchor and alias names.
    pub(crate) fn next_word(&mut self) -> YamlResult<String> {
        let mut word = Vec::new();
        loop {
            let chr = self.reader.peek_byte();
            if chr == b'\0' || is_white_tab_or_break(chr) {
                break;
            }
            word.push(self.reader.next_byte());
        }
        self.reject_nul(self.reader.peek_byte())?;
        into_string(word)
    }
}

pub(crate) fn into_string(bytes: Vec<u8>) -> YamlResult<String> {
    String::from_utf8(bytes).map_err(|err| YamlError::from(err.utf8_error()))
}
