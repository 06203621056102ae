use alloc::string::String;
use core::fmt::{Display, Formatter};

use log::trace;
use yam_lite_common::{ErrorType, Marker, Value, YamlError, YamlResult};

use crate::reader::char_utils::{is_blank, is_blank_or_breakz};
use crate::reader::Reader;
use crate::scanner::Scanner;

/// Indent of structural items, less than any real column.
pub const SENTINEL_INDENT: i64 = -1;

#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    // strings, numbers, booleans, nulls and whole flow collections
    Scalar(Value),
    // `- `
    SequenceEntry,
    // `name:` with the colon stripped
    MappingKey(String),
    // `&name`
    AnchorDef(String),
    // `*name`
    AliasRef(String),
    // `---`
    DocumentStart,
    // `...`
    DocumentEnd,
    EndOfInput,
}

impl ItemKind {
    /// Short name used in error messages.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            ItemKind::Scalar(_) => "scalar",
            ItemKind::SequenceEntry => "sequence entry",
            ItemKind::MappingKey(_) => "mapping key",
            ItemKind::AnchorDef(_) => "anchor",
            ItemKind::AliasRef(_) => "alias",
            ItemKind::DocumentStart => "document start",
            ItemKind::DocumentEnd => "document end",
            ItemKind::EndOfInput => "end of input",
        }
    }

    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ItemKind::DocumentStart | ItemKind::DocumentEnd | ItemKind::EndOfInput
        )
    }
}

/// One classified lookahead token.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub kind: ItemKind,
    /// Column of the first character, [`SENTINEL_INDENT`] for structural items.
    pub indent: i64,
    pub mark: Marker,
}

impl Item {
    fn new(kind: ItemKind, mark: Marker) -> Item {
        let indent = if kind.is_structural() {
            SENTINEL_INDENT
        } else {
            i64::from(mark.col)
        };
        Item { kind, indent, mark }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            ItemKind::Scalar(val) => write!(f, "SCAL {val:?}")?,
            ItemKind::MappingKey(name) => write!(f, "KEY {name}")?,
            ItemKind::AnchorDef(name) => write!(f, "ANCHOR &{name}")?,
            ItemKind::AliasRef(name) => write!(f, "ALIAS *{name}")?,
            kind => write!(f, "{}", kind.describe())?,
        }
        write!(f, " @{}", self.indent)
    }
}

impl<R: Reader> Scanner<R> {
    /// Classifies the next item from its leading significant character.
    pub fn fetch_item(&mut self) -> YamlResult<Item> {
        let chr = self.reader.peek_significant();
        self.reject_nul(chr)?;
        let mark = self.reader.mark();
        let kind = match chr {
            b'\0' => ItemKind::EndOfInput,
            b'{' | b'[' => ItemKind::Scalar(self.scan_flow()?),
            b'"' => self.fetch_quoted()?,
            b'-' => match self.count_marker(b'-') {
                1 => ItemKind::SequenceEntry,
                3 => ItemKind::DocumentStart,
                count => {
                    self.unread(b'-', count);
                    self.fetch_plain()?
                }
            },
            b'.' => match self.count_marker(b'.') {
                3 => ItemKind::DocumentEnd,
                count => {
                    self.unread(b'.', count);
                    self.fetch_plain()?
                }
            },
            b'&' => {
                self.reader.next_byte();
                ItemKind::AnchorDef(self.next_word()?)
            }
            b'*' => {
                self.reader.next_byte();
                ItemKind::AliasRef(self.next_word()?)
            }
            _ => self.fetch_plain()?,
        };
        let item = Item::new(kind, mark);
        trace!("item {item} at {mark}");
        Ok(item)
    }

    /// Consumes a run of `chr`. The run only counts when a blank, a line
    /// break or the end of stream follows it, otherwise it is put back and
    /// zero is returned.
    fn count_marker(&mut self, chr: u8) -> usize {
        let mut count = 0;
        while self.reader.peek_byte() == chr {
            self.reader.next_byte();
            count += 1;
        }
        if is_blank_or_breakz(self.reader.peek_byte()) {
            count
        } else {
            self.unread(chr, count);
            0
        }
    }

    fn unread(&mut self, chr: u8, count: usize) {
        for _ in 0..count {
            self.reader.putback(chr);
        }
    }

    /// A quoted scalar is a key when `:` follows it, otherwise only a
    /// comment may share the rest of its line.
    fn fetch_quoted(&mut self) -> YamlResult<ItemKind> {
        let text = self.scan_quoted()?;
        while is_blank(self.reader.peek_byte()) {
            self.reader.next_byte();
        }
        let chr = self.reader.peek_byte();
        if chr == b':' && is_blank_or_breakz(self.reader.peek_byte_at(1)) {
            self.reader.next_byte();
            return Ok(ItemKind::MappingKey(text));
        }
        if !is_blank_or_breakz(chr) && !self.reader.is_comment_start() {
            return Err(YamlError::new_parse(
                self.reader.mark(),
                ErrorType::UnexpectedSymbol {
                    expected: '\n',
                    found: char::from(chr),
                },
            ));
        }
        Ok(ItemKind::Scalar(Value::String(text)))
    }

    fn fetch_plain(&mut self) -> YamlResult<ItemKind> {
        let scalar = self.scan_scalar()?;
        match scalar.value {
            Value::String(mut text) if scalar.is_key && text.ends_with(':') => {
                text.pop();
                Ok(ItemKind::MappingKey(text))
            }
            value => Ok(ItemKind::Scalar(value)),
        }
    }
}
