//! Rune-at-a-time UTF-8 decoding over raw byte names.
//!
//! Names handed to the codec are arbitrary bytes. Malformed sequences are
//! reported one byte at a time so that each bad byte can be escaped or copied
//! on its own.

use std::str;

/// One decoding step over a byte name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rune {
    /// A well-formed code point and the number of bytes it occupies.
    Char(char, usize),
    /// A byte that does not start a well-formed code point.
    Invalid(u8),
}

impl Rune {
    /// Number of input bytes this step covers.
    pub fn width(self) -> usize {
        match self {
            Rune::Char(_, width) => width,
            Rune::Invalid(_) => 1,
        }
    }

    pub fn as_char(self) -> Option<char> {
        match self {
            Rune::Char(c, _) => Some(c),
            Rune::Invalid(_) => None,
        }
    }
}

/// Decodes the rune at the front of `bytes`, or `None` if `bytes` is empty.
pub fn next_rune(bytes: &[u8]) -> Option<Rune> {
    let &lead = bytes.first()?;

    let width = match lead {
        0x00..=0x7F => return Some(Rune::Char(lead as char, 1)),
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return Some(Rune::Invalid(lead)),
    };

    // from_utf8 rejects overlong forms and surrogates for us.
    let rune = bytes
        .get(..width)
        .and_then(|seq| str::from_utf8(seq).ok())
        .and_then(|seq| seq.chars().next())
        .map(|c| Rune::Char(c, width))
        .unwrap_or(Rune::Invalid(lead));

    Some(rune)
}

/// Decodes the rune at the back of `bytes`, or `None` if `bytes` is empty.
///
/// A trailing byte that cannot be part of a well-formed sequence ending at the
/// end of `bytes` is reported on its own, as [`Rune::Invalid`].
pub fn last_rune(bytes: &[u8]) -> Option<Rune> {
    let &last = bytes.last()?;
    let end = bytes.len();
    let limit = end.saturating_sub(4);

    let mut start = end - 1;
    while start > limit && is_continuation(bytes[start]) {
        start -= 1;
    }

    match next_rune(&bytes[start..]) {
        Some(rune @ Rune::Char(_, width)) if start + width == end => Some(rune),
        _ => Some(Rune::Invalid(last)),
    }
}

/// Iterates over the runes of `bytes` together with their byte offsets.
pub fn runes(bytes: &[u8]) -> Runes<'_> {
    Runes { bytes, offset: 0 }
}

pub struct Runes<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl Iterator for Runes<'_> {
    type Item = (usize, Rune);

    fn next(&mut self) -> Option<Self::Item> {
        let rune = next_rune(&self.bytes[self.offset..])?;
        let offset = self.offset;
        self.offset += rune.width();
        Some((offset, rune))
    }
}

fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Appends the UTF-8 encoding of `c` to `out`.
pub fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
