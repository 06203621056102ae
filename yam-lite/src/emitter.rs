use alloc::string::{String, ToString};
use core::fmt;

use yam_lite_common::{Mapping, Value};

use crate::coerce::coerce;

/// Writes a [`Value`] tree back out as block text the loader can read.
#[allow(clippy::module_name_repetitions)]
pub struct YamlEmitter<'a> {
    writer: &'a mut dyn fmt::Write,
    best_indent: usize,
    level: isize,
    multiline_strings: bool,
}

/// A convenience alias for emitter functions that may fail without returning a value.
pub type EmitResult = Result<(), fmt::Error>;

/// Emits `value` as one `---` document followed by a newline.
///
/// # Errors
/// Only fails when formatting itself fails.
pub fn emit(value: &Value) -> Result<String, fmt::Error> {
    let mut out = String::new();
    YamlEmitter::new(&mut out).dump(value)?;
    out.push('\n');
    Ok(out)
}

// JSON style escapes, all of which the quoted string reader understands
fn escape_str(wr: &mut dyn fmt::Write, v: &str) -> EmitResult {
    wr.write_str("\"")?;

    let bytes = v.as_bytes();
    let mut start = 0;

    while start < bytes.len() {
        let Some(i) = bytes[start..]
            .iter()
            .position(|&b| matches!(b, b'"' | b'\\' | b'\x00'..=b'\x1f' | b'\x7f'))
        else {
            wr.write_str(&v[start..])?;
            break;
        };

        let i = start + i;

        if start < i {
            wr.write_str(&v[start..i])?;
        }

        match bytes[i] {
            b'"' => wr.write_str("\\\"")?,
            b'\\' => wr.write_str("\\\\")?,
            b'\x08' => wr.write_str("\\b")?,
            b'\t' => wr.write_str("\\t")?,
            b'\n' => wr.write_str("\\n")?,
            b'\x0c' => wr.write_str("\\f")?,
            b'\r' => wr.write_str("\\r")?,
            other => write!(wr, "\\u{other:04x}")?,
        }
        start = i + 1;
    }

    wr.write_str("\"")?;
    Ok(())
}

impl<'a> YamlEmitter<'a> {
    /// Create a new emitter serializing into `writer`.
    pub fn new(writer: &'a mut dyn fmt::Write) -> Self {
        YamlEmitter {
            writer,
            best_indent: 2,
            level: -1,
            multiline_strings: false,
        }
    }

    /// Emit strings with line breaks as `|` literal blocks where they read
    /// back unchanged.
    pub fn multiline_strings(&mut self, multiline_strings: bool) {
        self.multiline_strings = multiline_strings;
    }

    #[must_use]
    pub fn is_multiline_strings(&self) -> bool {
        self.multiline_strings
    }

    /// Dump one document to the writer.
    /// # Errors
    /// Returns `fmt::Error` when the writer fails.
    pub fn dump(&mut self, doc: &Value) -> EmitResult {
        writeln!(self.writer, "---")?;
        self.level = -1;
        self.emit_node(doc)
    }

    fn write_indent(&mut self) -> EmitResult {
        let width = usize::try_from(self.level).unwrap_or(0) * self.best_indent;
        write!(self.writer, "{:width$}", "")
    }

    fn emit_node(&mut self, node: &Value) -> EmitResult {
        match node {
            Value::Sequence(v) => self.emit_sequence(v),
            Value::Mapping(h) => self.emit_mapping(h),
            Value::String(v) => {
                if self.should_emit_string_as_block(v) {
                    self.emit_literal_block(v)
                } else {
                    self.emit_str(v)
                }
            }
            Value::Bool(v) => self.writer.write_str(if *v { "true" } else { "false" }),
            Value::Integer(v) => write!(self.writer, "{v}"),
            Value::FloatingPoint(v) => emit_float(self.writer, *v),
            Value::Null => self.writer.write_str("null"),
        }
    }

    fn emit_str(&mut self, v: &str) -> EmitResult {
        if need_quotes(v) {
            escape_str(self.writer, v)
        } else {
            self.writer.write_str(v)
        }
    }

    fn emit_literal_block(&mut self, v: &str) -> EmitResult {
        if v.ends_with('\n') {
            self.writer.write_str("|")?;
        } else {
            self.writer.write_str("|-")?;
        }

        self.level += 1;
        // lines() will omit the last line if it is empty.
        for line in v.lines() {
            writeln!(self.writer)?;
            if !line.is_empty() {
                self.write_indent()?;
                self.writer.write_str(line)?;
            }
        }
        self.level -= 1;
        Ok(())
    }

    fn emit_sequence(&mut self, v: &[Value]) -> EmitResult {
        if v.is_empty() {
            write!(self.writer, "[]")?;
        } else {
            self.level += 1;
            for (cnt, x) in v.iter().enumerate() {
                if cnt > 0 {
                    writeln!(self.writer)?;
                    self.write_indent()?;
                }
                write!(self.writer, "-")?;
                self.emit_val(true, x)?;
            }
            self.level -= 1;
        }
        Ok(())
    }

    fn emit_mapping(&mut self, h: &Mapping) -> EmitResult {
        if h.is_empty() {
            self.writer.write_str("{}")?;
        } else {
            self.level += 1;
            for (cnt, (key, value)) in h.iter().enumerate() {
                if cnt > 0 {
                    writeln!(self.writer)?;
                    self.write_indent()?;
                }
                self.emit_key(key)?;
                write!(self.writer, ":")?;
                self.emit_val(false, value)?;
            }
            self.level -= 1;
        }
        Ok(())
    }

    /// Keys are written on one line: scalars as usual, collections in
    /// `[a, b]`/`{k: v}` flow form.
    fn emit_key(&mut self, key: &Value) -> EmitResult {
        match key {
            Value::Sequence(v) => {
                self.writer.write_str("[")?;
                for (cnt, x) in v.iter().enumerate() {
                    if cnt > 0 {
                        self.writer.write_str(", ")?;
                    }
                    self.emit_key(x)?;
                }
                self.writer.write_str("]")
            }
            Value::Mapping(h) => {
                self.writer.write_str("{")?;
                for (cnt, (k, v)) in h.iter().enumerate() {
                    if cnt > 0 {
                        self.writer.write_str(", ")?;
                    }
                    self.emit_key(k)?;
                    self.writer.write_str(": ")?;
                    self.emit_key(v)?;
                }
                self.writer.write_str("}")
            }
            Value::String(v) => self.emit_str(v),
            scalar => self.emit_node(scalar),
        }
    }

    /// Writes the value after a `-` or a `key:`. Collections under a `-`
    /// start on the same line (`- key: value`), non-empty collections under
    /// a key start on the next line, one level deeper.
    fn emit_val(&mut self, after_dash: bool, val: &Value) -> EmitResult {
        if !after_dash && val.is_non_empty_collection() {
            writeln!(self.writer)?;
            self.level += 1;
            self.write_indent()?;
            self.level -= 1;
        } else {
            self.writer.write_str(" ")?;
        }
        self.emit_node(val)
    }

    #[must_use]
    fn should_emit_string_as_block(&self, s: &str) -> bool {
        self.multiline_strings && s.contains('\n') && is_valid_literal_block_scalar(s)
    }
}

/// Floats always carry a `.` so they read back as floats, non finite ones
/// are written the usual YAML way.
fn emit_float(wr: &mut dyn fmt::Write, v: f64) -> EmitResult {
    if v.is_nan() {
        return wr.write_str(".nan");
    }
    if v.is_infinite() {
        return wr.write_str(if v > 0.0 { ".inf" } else { "-.inf" });
    }
    let text = v.to_string();
    if text.contains('.') {
        wr.write_str(&text)
    } else {
        write!(wr, "{text}.0")
    }
}

/// A literal block reads back unchanged when every line keeps its own
/// leading and trailing characters and at most one line break ends it.
fn is_valid_literal_block_scalar(s: &str) -> bool {
    if s.starts_with('\n') || s.ends_with("\n\n") {
        return false;
    }
    s.lines().all(|line| {
        let bytes = line.as_bytes();
        !matches!(bytes.first(), Some(b' ' | b'\t' | b'#'))
            && !matches!(bytes.last(), Some(b' ' | b'\t'))
            && !bytes
                .iter()
                .any(|&b| matches!(b, b'\x00'..=b'\x08' | b'\x0b'..=b'\x1f' | b'\x7f'))
    })
}

/// Check if the string requires quoting.
///
/// Text the loader would read as anything other than this same string
/// needs quotes: numbers, `true`/`false`/`null`, markers at the start
/// (`-`, `.`, `&`, `*`, `|`, `>`, ...), flow and comment characters
/// anywhere, leading or trailing blanks, control characters, and the
/// empty string.
fn need_quotes(string: &str) -> bool {
    fn need_quotes_spaces(string: &str) -> bool {
        string.starts_with([' ', '\t']) || string.ends_with([' ', '\t'])
    }

    string.is_empty()
        || need_quotes_spaces(string)
        || string.starts_with(|character: char| {
            matches!(
                character,
                '&' | '*' | '?' | '|' | '-' | '<' | '>' | '=' | '!' | '%' | '@' | '.'
            )
        })
        || string.contains(|character: char| {
            matches!(character, ':'
            | '{'
            | '}'
            | '['
            | ']'
            | ','
            | '#'
            | '`'
            | '\"'
            | '\''
            | '\\'
            | '\0'..='\x1f'
            | '\x7f')
        })
        || !matches!(coerce(string.to_string()), Value::String(_))
}

#[cfg(test)]
mod test {
    use alloc::string::String;
    use alloc::vec;

    use yam_lite_common::{Mapping, Value};

    use super::{emit, need_quotes, YamlEmitter};

    #[test]
    fn scalars() {
        assert_eq!(emit(&Value::Null), Ok(String::from("---\nnull\n")));
        assert_eq!(emit(&Value::Integer(-3)), Ok(String::from("---\n-3\n")));
        assert_eq!(
            emit(&Value::FloatingPoint(150.0)),
            Ok(String::from("---\n150.0\n"))
        );
        assert_eq!(
            emit(&Value::FloatingPoint(0.25)),
            Ok(String::from("---\n0.25\n"))
        );
        assert_eq!(
            emit(&Value::FloatingPoint(f64::NEG_INFINITY)),
            Ok(String::from("---\n-.inf\n"))
        );
    }

    #[test]
    fn quoting() {
        assert!(need_quotes(""));
        assert!(need_quotes("010"));
        assert!(need_quotes("true"));
        assert!(need_quotes("null"));
        assert!(need_quotes("a: b"));
        assert!(need_quotes("- x"));
        assert!(need_quotes("..."));
        assert!(need_quotes(" pad"));
        assert!(!need_quotes("True"));
        assert!(!need_quotes("plain words"));
        assert!(!need_quotes("1e5"));
        assert_eq!(
            emit(&Value::from("tab\there")),
            Ok(String::from("---\n\"tab\\there\"\n"))
        );
        assert_eq!(
            emit(&Value::from("\u{1}")),
            Ok(String::from("---\n\"\\u0001\"\n"))
        );
    }

    #[test]
    fn block_layout() {
        let mut inner = Mapping::new();
        inner.insert(Value::from("x"), Value::Integer(1));
        inner.insert(Value::from("y"), Value::Sequence(vec![]));
        let mut map = Mapping::new();
        map.insert(
            Value::from("a"),
            Value::Sequence(vec![Value::Mapping(inner), Value::from("s")]),
        );
        map.insert(Value::from("b"), Value::Mapping(Mapping::new()));
        assert_eq!(
            emit(&Value::Mapping(map)),
            Ok(String::from(
                "---\na:\n  - x: 1\n    y: []\n  - s\nb: {}\n"
            ))
        );
    }

    #[test]
    fn literal_blocks() {
        let mut map = Mapping::new();
        map.insert(Value::from("s"), Value::from("one\n\ntwo\n"));
        map.insert(Value::from("t"), Value::from("no end\nbreak"));
        map.insert(Value::from("u"), Value::from(" lead\nx"));

        let mut out = String::new();
        let mut emitter = YamlEmitter::new(&mut out);
        emitter.multiline_strings(true);
        assert!(emitter.is_multiline_strings());
        emitter.dump(&Value::Mapping(map)).expect("emit");
        assert_eq!(
            out,
            "---\ns: |\n  one\n\n  two\nt: |-\n  no end\n  break\nu: \" lead\\nx\""
        );
    }
}
