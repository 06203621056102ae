#[inline]
#[must_use]
pub(crate) fn is_blank(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

#[inline]
#[must_use]
pub(crate) fn is_break(c: u8) -> bool {
    c == b'\r' || c == b'\n'
}

#[inline]
#[must_use]
pub(crate) fn is_white_tab_or_break(c: u8) -> bool {
    is_blank(c) || is_break(c)
}

/// Blank, line break or the `\0` end of stream marker.
#[inline]
#[must_use]
pub(crate) fn is_blank_or_breakz(c: u8) -> bool {
    c == b'\0' || is_blank(c) || is_break(c)
}

#[inline]
#[must_use]
pub(crate) fn as_hex(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some(u32::from(c - b'0')),
        b'a'..=b'f' => Some(u32::from(c - b'a') + 10),
        b'A'..=b'F' => Some(u32::from(c - b'A') + 10),
        _ => None,
    }
}
