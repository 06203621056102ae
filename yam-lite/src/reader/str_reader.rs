use alloc::vec::Vec;

use memchr::{memchr, memchr2, memchr_iter, memrchr};

use super::Reader;

pub struct StrReader<'a> {
    pub slice: &'a [u8],
    pub(crate) pos: usize,
    pub(crate) col: u32,
    pub(crate) line: u32,
}

impl<'a> From<&'a str> for StrReader<'a> {
    fn from(value: &'a str) -> Self {
        Self::from(value.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for StrReader<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self {
            slice: value,
            pos: 0,
            col: 0,
            line: 0,
        }
    }
}

impl<'a> StrReader<'a> {
    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn rest(&self) -> &'a [u8] {
        self.slice.get(self.pos..).unwrap_or_default()
    }

    /// Advances over `amount` bytes known to contain no line break.
    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn skip_inline(&mut self, amount: usize) {
        self.pos += amount;
        self.col = self
            .col
            .saturating_add(u32::try_from(amount).unwrap_or(u32::MAX));
    }

    /// Advances over `amount` bytes that may contain line breaks.
    fn skip_multiline(&mut self, amount: usize) {
        let slice = self.slice;
        let span = &slice[self.pos..self.pos + amount];
        match memrchr(b'\n', span) {
            Some(last_nl) => {
                let lines = memchr_iter(b'\n', span).count();
                self.line = self
                    .line
                    .saturating_add(u32::try_from(lines).unwrap_or(u32::MAX));
                self.pos += last_nl + 1;
                self.col = 0;
                self.skip_inline(amount - last_nl - 1);
            }
            None => self.skip_inline(amount),
        }
    }
}

impl Reader for StrReader<'_> {
    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn eof(&self) -> bool {
        self.pos >= self.slice.len()
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn col(&self) -> u32 {
        self.col
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn line(&self) -> u32 {
        self.line
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn offset(&self) -> usize {
        self.pos
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn peek_byte_at(&self, offset: usize) -> u8 {
        self.slice.get(self.pos + offset).copied().unwrap_or(b'\0')
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn prev_byte(&self) -> u8 {
        match self.pos {
            0 => b'\0',
            pos => self.slice.get(pos - 1).copied().unwrap_or(b'\0'),
        }
    }

    fn next_byte(&mut self) -> u8 {
        let Some(&chr) = self.slice.get(self.pos) else {
            return b'\0';
        };
        self.pos += 1;
        if chr == b'\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        chr
    }

    fn putback(&mut self, chr: u8) {
        debug_assert!(chr != b'\n', "line breaks are never put back");
        debug_assert_eq!(self.prev_byte(), chr);
        if self.pos > 0 {
            self.pos -= 1;
            self.col = self.col.saturating_sub(1);
        }
    }

    fn skip_to_eol(&mut self) {
        let amount = memchr(b'\n', self.rest()).unwrap_or(self.rest().len());
        self.skip_inline(amount);
    }

    fn take_until(&mut self, a: u8, b: u8, out: &mut Vec<u8>) -> u8 {
        let rest = self.rest();
        match memchr2(a, b, rest) {
            Some(amount) => {
                let found = rest[amount];
                out.extend_from_slice(&rest[..amount]);
                self.skip_multiline(amount);
                found
            }
            None => {
                let amount = rest.len();
                out.extend_from_slice(rest);
                self.skip_multiline(amount);
                b'\0'
            }
        }
    }
}

#[cfg(test)]
mod test {
    use alloc::vec::Vec;

    use super::StrReader;
    use crate::reader::Reader;

    #[test]
    fn tracks_lines_and_columns() {
        let mut reader = StrReader::from("ab\n c");
        assert_eq!(reader.next_byte(), b'a');
        assert_eq!(reader.next_byte(), b'b');
        assert_eq!((reader.line(), reader.col()), (0, 2));
        assert_eq!(reader.next_byte(), b'\n');
        assert_eq!((reader.line(), reader.col()), (1, 0));
        assert_eq!(reader.peek_significant(), b'c');
        assert_eq!((reader.line(), reader.col()), (1, 1));
        reader.next_byte();
        assert_eq!(reader.next_byte(), b'\0');
        assert!(reader.eof());
    }

    #[test]
    fn putback_restores_column() {
        let mut reader = StrReader::from("--x");
        reader.next_byte();
        reader.next_byte();
        reader.putback(b'-');
        reader.putback(b'-');
        assert_eq!(reader.col(), 0);
        assert_eq!(reader.peek_byte(), b'-');
    }

    #[test]
    fn significant_peek_skips_comments() {
        let mut reader = StrReader::from("  # note\n\n   value");
        assert_eq!(reader.peek_significant(), b'v');
        assert_eq!((reader.line(), reader.col()), (2, 3));
    }

    #[test]
    fn comment_needs_leading_blank() {
        let mut reader = StrReader::from("a#b #c");
        reader.next_byte();
        assert!(!reader.is_comment_start());
        reader.next_byte();
        reader.next_byte();
        reader.next_byte();
        assert!(reader.is_comment_start());

        let mut reader = StrReader::from(",#x # c");
        reader.next_byte();
        assert_eq!(reader.peek_significant(), b'#');
        assert_eq!(reader.col(), 1);
    }

    #[test]
    fn take_until_counts_lines() {
        let mut reader = StrReader::from("one\ntwo\\\"rest");
        let mut out = Vec::new();
        assert_eq!(reader.take_until(b'"', b'\\', &mut out), b'\\');
        assert_eq!(out, b"one\ntwo");
        assert_eq!((reader.line(), reader.col()), (1, 3));
    }

    #[test]
    fn consume_reports_mismatch() {
        let mut reader = StrReader::from("  x");
        assert!(reader.consume(b'y').is_err());
        assert!(reader.consume(b'x').is_ok());
        assert!(reader.consume(b'x').is_err());
    }
}
