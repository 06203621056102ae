use alloc::string::String;
use alloc::vec::Vec;

use yam_lite_common::{ErrorType, Mapping, Value, YamlError, YamlResult};

use crate::reader::char_utils::as_hex;
use crate::reader::Reader;
use crate::scanner::{into_string, Frame, Scanner};

impl<R: Reader> Scanner<R> {
    /// Parses one inline value: `{...}`, `[...]`, `"..."` or plain text
    /// bounded by the innermost flow frame.
    pub fn scan_flow(&mut self) -> YamlResult<Value> {
        let chr = self.reader.peek_significant();
        self.reject_nul(chr)?;
        match chr {
            b'{' => self.with_frame(b'}', Self::scan_flow_mapping),
            b'[' => self.with_frame(b']', Self::scan_flow_sequence),
            b'"' => Ok(Value::String(self.scan_quoted()?)),
            b'\0' => Err(YamlError::new_parse(
                self.reader.mark(),
                ErrorType::UnexpectedEndOfStream,
            )),
            _ => Ok(self.scan_scalar()?.value),
        }
    }

    fn with_frame(
        &mut self,
        stop: u8,
        scan: fn(&mut Self) -> YamlResult<Value>,
    ) -> YamlResult<Value> {
        self.push_frame(Frame::flow(stop))?;
        let value = scan(self);
        self.pop_frame();
        value
    }

    fn scan_flow_sequence(&mut self) -> YamlResult<Value> {
        self.reader.consume(b'[')?;
        let mut seq = Vec::new();
        loop {
            if self.flow_closed(b']')? {
                return Ok(Value::Sequence(seq));
            }
            seq.push(self.scan_flow()?);
            self.flow_separator(b']')?;
        }
    }

    fn scan_flow_mapping(&mut self) -> YamlResult<Value> {
        self.reader.consume(b'{')?;
        let mut map = Mapping::new();
        loop {
            if self.flow_closed(b'}')? {
                return Ok(Value::Mapping(map));
            }
            let key = self.scan_flow()?;
            let value = if self.reader.peek_significant() == b':' {
                self.reader.next_byte();
                match self.reader.peek_significant() {
                    b',' | b'}' => Value::Null,
                    _ => self.scan_flow()?,
                }
            } else {
                Value::Null
            };
            map.insert(key, value);
            self.flow_separator(b'}')?;
        }
    }

    /// Consumes `ket` if it is next, fails at end of stream.
    fn flow_closed(&mut self, ket: u8) -> YamlResult<bool> {
        let chr = self.reader.peek_significant();
        self.reject_nul(chr)?;
        match chr {
            b'\0' => Err(YamlError::new_parse(
                self.reader.mark(),
                ErrorType::MissingFlowClosingBracket(char::from(ket)),
            )),
            chr if chr == ket => {
                self.reader.next_byte();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// After an entry: a `,` is consumed, `ket` is left for [`Self::flow_closed`].
    fn flow_separator(&mut self, ket: u8) -> YamlResult<()> {
        let chr = self.reader.peek_significant();
        self.reject_nul(chr)?;
        match chr {
            b',' => {
                self.reader.next_byte();
                Ok(())
            }
            chr if chr == ket => Ok(()),
            b'\0' => Err(YamlError::new_parse(
                self.reader.mark(),
                ErrorType::MissingFlowClosingBracket(char::from(ket)),
            )),
            found => Err(YamlError::new_parse(
                self.reader.mark(),
                ErrorType::UnexpectedSymbol {
                    expected: char::from(ket),
                    found: char::from(found),
                },
            )),
        }
    }

    /// Reads a double quoted string with JSON escapes. Raw line breaks are
    /// kept as they are.
    pub fn scan_quoted(&mut self) -> YamlResult<String> {
        let start = self.reader.mark();
        self.reader.consume(b'"')?;
        let mut out = Vec::new();
        loop {
            match self.reader.take_until(b'"', b'\\', &mut out) {
                b'"' => {
                    self.reader.next_byte();
                    break;
                }
                b'\\' => {
                    self.reader.next_byte();
                    self.scan_escape(&mut out)?;
                }
                _ => {
                    return Err(YamlError::new_parse(start, ErrorType::UnterminatedString));
                }
            }
        }
        into_string(out)
    }

    fn scan_escape(&mut self, out: &mut Vec<u8>) -> YamlResult<()> {
        let mark = self.reader.mark();
        let escaped = match self.reader.next_byte() {
            b'"' => b'"',
            b'\\' => b'\\',
            b'/' => b'/',
            b'b' => b'\x08',
            b'f' => b'\x0c',
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'u' => {
                let chr = self.scan_unicode_escape()?;
                let mut buf = [0u8; 4];
                out.extend_from_slice(chr.encode_utf8(&mut buf).as_bytes());
                return Ok(());
            }
            b'\0' => return Err(YamlError::new_parse(mark, ErrorType::UnterminatedString)),
            other => {
                return Err(YamlError::new_parse(
                    mark,
                    ErrorType::InvalidEscapeCharacter(char::from(other)),
                ))
            }
        };
        out.push(escaped);
        Ok(())
    }

    /// `\uXXXX` after the `\u`, combining a `\ud83d\ude00` style surrogate pair.
    fn scan_unicode_escape(&mut self) -> YamlResult<char> {
        let mark = self.reader.mark();
        let high = self.scan_hex4()?;
        let code = if (0xD800..0xDC00).contains(&high) {
            if self.reader.peek_byte() != b'\\' || self.reader.peek_byte_at(1) != b'u' {
                return Err(YamlError::new_parse(mark, ErrorType::InvalidUnicodeEscape));
            }
            self.reader.next_byte();
            self.reader.next_byte();
            let low = self.scan_hex4()?;
            if !(0xDC00..0xE000).contains(&low) {
                return Err(YamlError::new_parse(mark, ErrorType::InvalidUnicodeEscape));
            }
            0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
        } else {
            high
        };
        char::from_u32(code)
            .ok_or_else(|| YamlError::new_parse(mark, ErrorType::InvalidUnicodeEscape))
    }

    fn scan_hex4(&mut self) -> YamlResult<u32> {
        let mark = self.reader.mark();
        let mut code = 0;
        for _ in 0..4 {
            let digit = as_hex(self.reader.next_byte())
                .ok_or_else(|| YamlError::new_parse(mark, ErrorType::InvalidUnicodeEscape))?;
            code = code * 16 + digit;
        }
        Ok(code)
    }
}
