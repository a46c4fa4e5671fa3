//! The quote marker that keeps encoding injective.
//!
//! A raw name can already contain characters that look like encoder output,
//! such as a FULLWIDTH SOLIDUS. Those are written with [`QUOTE`] in front so
//! that decoding leaves them alone. Bytes that are not valid UTF-8 are written
//! as the quote marker followed by two uppercase hex digits.

use crate::utf8::push_char;

/// SINGLE HIGH-REVERSED-9 QUOTATION MARK
pub const QUOTE: char = '‛';

/// [`QUOTE`] as UTF-8.
pub const QUOTE_UTF8: &[u8] = "‛".as_bytes();

/// Appends `c` with the quote marker in front of it.
pub fn push_quoted(out: &mut Vec<u8>, c: char) {
    push_char(out, QUOTE);
    push_char(out, c);
}

/// Appends the `‛XX` escape for a byte that is not valid UTF-8.
pub fn push_escaped_byte(out: &mut Vec<u8>, byte: u8) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    push_char(out, QUOTE);
    out.push(HEX[usize::from(byte >> 4)]);
    out.push(HEX[usize::from(byte & 0x0F)]);
}

/// Parses the two hex digits of a `‛XX` escape at the front of `bytes`.
pub fn parse_escaped_byte(bytes: &[u8]) -> Option<u8> {
    match bytes {
        [high, low, ..] => Some((hex_value(*high)? << 4) | hex_value(*low)?),
        _ => None,
    }
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Counts the quote markers at the very end of `bytes`.
pub fn trailing_quotes(bytes: &[u8]) -> usize {
    let mut rest = bytes;
    let mut count = 0;
    while let Some(stripped) = rest.strip_suffix(QUOTE_UTF8) {
        rest = stripped;
        count += 1;
    }
    count
}

/// Decoder state between two runes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteState {
    /// The next rune is decoded normally.
    #[default]
    Normal,
    /// A quote marker was just read; the next rune is copied literally, or
    /// starts a `‛XX` byte escape.
    Quoted,
}

impl QuoteState {
    /// Consumes the state for one rune, returning whether that rune is quoted.
    pub fn take(&mut self) -> bool {
        std::mem::take(self) == QuoteState::Quoted
    }
}
