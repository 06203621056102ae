use alloc::rc::Rc;
use alloc::vec::Vec;

use log::debug;
use yam_lite_common::{ErrorType, Mapping, Value, YamlError, YamlResult};

use crate::anchor::AnchorTable;
use crate::item::{Item, ItemKind};
use crate::reader::{Reader, StrReader};
use crate::scanner::{Scanner, MAX_DEPTH};

/// Indentation driven recursive parser.
///
/// Pulls one [`Item`] at a time from the scanner through a single slot
/// lookahead and builds the value tree by comparing item indents. Items are
/// shared through `Rc`, so the key a mapping loop is working on stays alive
/// after the lookahead slot moves past it.
pub struct Parser<R> {
    scanner: Scanner<R>,
    pending: Option<Rc<Item>>,
    last: Option<Rc<Item>>,
    anchors: AnchorTable,
    depth: usize,
}

impl<'a> From<&'a str> for Parser<StrReader<'a>> {
    fn from(value: &'a str) -> Self {
        Parser::new(StrReader::from(value))
    }
}

impl<'a> From<&'a [u8]> for Parser<StrReader<'a>> {
    fn from(value: &'a [u8]) -> Self {
        Parser::new(StrReader::from(value))
    }
}

impl<R: Reader> Parser<R> {
    pub fn new(reader: R) -> Self {
        Parser {
            scanner: Scanner::new(reader),
            pending: None,
            last: None,
            anchors: AnchorTable::new(),
            depth: 0,
        }
    }

    /// Returns the next item without consuming it.
    pub fn peek_item(&mut self) -> YamlResult<Rc<Item>> {
        if let Some(item) = &self.pending {
            return Ok(Rc::clone(item));
        }
        let item = Rc::new(self.scanner.fetch_item()?);
        self.pending = Some(Rc::clone(&item));
        Ok(item)
    }

    pub fn next_item(&mut self) -> YamlResult<Rc<Item>> {
        let item = match self.pending.take() {
            Some(item) => item,
            None => Rc::new(self.scanner.fetch_item()?),
        };
        self.last = Some(Rc::clone(&item));
        Ok(item)
    }

    /// The item most recently returned by [`Parser::next_item`].
    #[must_use]
    pub fn last_item(&self) -> Option<&Item> {
        self.last.as_deref()
    }

    #[must_use]
    pub fn anchors(&self) -> &AnchorTable {
        &self.anchors
    }

    /// Parses the whole stream. One document is returned as is, several
    /// are collected into a sequence.
    pub fn parse(&mut self) -> YamlResult<Value> {
        if self.peek_item()?.kind == ItemKind::DocumentStart {
            self.next_item()?;
        }
        self.parse_documents()
    }

    pub fn parse_value(&mut self) -> YamlResult<Value> {
        let item = self.next_item()?;
        if self.depth >= MAX_DEPTH {
            return Err(YamlError::new_parse(
                item.mark,
                ErrorType::RecursionLimitExceeded,
            ));
        }
        self.depth += 1;
        let value = self.resolve(&item);
        self.depth -= 1;
        value
    }

    fn resolve(&mut self, item: &Rc<Item>) -> YamlResult<Value> {
        match &item.kind {
            ItemKind::Scalar(value) => Ok(value.clone()),
            ItemKind::SequenceEntry => self.resolve_sequence(item),
            ItemKind::MappingKey(_) => self.resolve_mapping(Rc::clone(item)),
            ItemKind::AnchorDef(name) => {
                let value = self.parse_value()?;
                self.anchors.define(name.clone(), value.clone());
                Ok(value)
            }
            ItemKind::AliasRef(name) => self.anchors.resolve(name, item.mark),
            ItemKind::DocumentStart => self.parse_documents(),
            ItemKind::DocumentEnd | ItemKind::EndOfInput => Ok(Value::Null),
        }
    }

    fn parse_documents(&mut self) -> YamlResult<Value> {
        let mut docs = Vec::new();
        loop {
            let doc = if self.peek_item()?.kind.is_structural() {
                Value::Null
            } else {
                self.parse_value()?
            };
            docs.push(doc);

            loop {
                match self.peek_item()?.kind {
                    ItemKind::EndOfInput => {
                        debug!("parsed {} document(s)", docs.len());
                        return Ok(if docs.len() == 1 {
                            docs.pop().unwrap_or_default()
                        } else {
                            Value::Sequence(docs)
                        });
                    }
                    ItemKind::DocumentEnd => {
                        self.next_item()?;
                    }
                    ItemKind::DocumentStart => {
                        self.next_item()?;
                        break;
                    }
                    _ => break,
                }
            }
        }
    }

    fn resolve_sequence(&mut self, entry: &Item) -> YamlResult<Value> {
        let indent = entry.indent;
        let mut seq = Vec::new();
        loop {
            let next = self.peek_item()?;
            if next.indent == indent {
                seq.push(Value::Null);
                self.expect_entry()?;
                continue;
            }
            if next.indent < indent {
                seq.push(Value::Null);
                break;
            }

            seq.push(self.parse_value()?);

            let peek = self.peek_item()?;
            match peek.indent.cmp(&indent) {
                core::cmp::Ordering::Less => break,
                core::cmp::Ordering::Equal => self.expect_entry()?,
                core::cmp::Ordering::Greater => return Err(invalid_indent(indent, &peek)),
            }
        }
        Ok(Value::Sequence(seq))
    }

    fn resolve_mapping(&mut self, first: Rc<Item>) -> YamlResult<Value> {
        let indent = first.indent;
        let mut key = first;
        let mut map = Mapping::new();
        loop {
            let name = key_name(&key);
            let next = self.peek_item()?;
            if next.indent == indent {
                map.insert(name, Value::Null);
                key = self.expect_key()?;
                continue;
            }
            if next.indent < indent {
                map.insert(name, Value::Null);
                break;
            }

            let value = self.parse_value()?;
            map.insert(name, value);

            let peek = self.peek_item()?;
            match peek.indent.cmp(&indent) {
                core::cmp::Ordering::Less => break,
                core::cmp::Ordering::Equal => key = self.expect_key()?,
                core::cmp::Ordering::Greater => return Err(invalid_indent(indent, &peek)),
            }
        }
        Ok(Value::Mapping(map))
    }

    fn expect_entry(&mut self) -> YamlResult<()> {
        let item = self.next_item()?;
        if matches!(item.kind, ItemKind::SequenceEntry) {
            return Ok(());
        }
        Err(unexpected_sibling("sequence entry", &item))
    }

    fn expect_key(&mut self) -> YamlResult<Rc<Item>> {
        let item = self.next_item()?;
        if matches!(item.kind, ItemKind::MappingKey(_)) {
            return Ok(item);
        }
        Err(unexpected_sibling("mapping key", &item))
    }
}

fn key_name(key: &Item) -> Value {
    match &key.kind {
        ItemKind::MappingKey(name) => Value::String(name.clone()),
        _ => Value::Null,
    }
}

fn invalid_indent(expected: i64, found: &Item) -> YamlError {
    YamlError::new_parse(
        found.mark,
        ErrorType::InvalidIndent {
            expected,
            found: found.indent,
        },
    )
}

fn unexpected_sibling(expected: &'static str, found: &Item) -> YamlError {
    YamlError::new_parse(
        found.mark,
        ErrorType::UnexpectedSibling {
            expected,
            found: found.kind.describe(),
        },
    )
}
