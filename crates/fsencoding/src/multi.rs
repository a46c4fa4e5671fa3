//! The configurable encoder.

use std::borrow::Cow;

use crate::{
    quote::{
        parse_escaped_byte, push_escaped_byte, push_quoted, trailing_quotes, QuoteState, QUOTE,
        QUOTE_UTF8,
    },
    rules::{active_boundary_rules, active_rules, Edge, NUL},
    utf8::{last_rune, next_rune, push_char, runes, Rune},
    EncodeFlags, Encoder,
};

/// An [`Encoder`] that handles every character class enabled in its
/// [`EncodeFlags`].
///
/// ```
/// use fsencoding::{EncodeFlags, Encoder, MultiEncoder};
///
/// let encoder = MultiEncoder::new(EncodeFlags::SLASH);
/// assert_eq!(encoder.encode_str("a/b"), "a／b");
/// assert_eq!(encoder.encode_str("a／b"), "a‛／b");
/// assert_eq!(encoder.decode("a‛／b".as_bytes()), "a／b".as_bytes());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MultiEncoder(EncodeFlags);

impl MultiEncoder {
    /// The encoder for the Standard encoding.
    pub const STANDARD: MultiEncoder = MultiEncoder(EncodeFlags::STANDARD);

    pub const fn new(flags: EncodeFlags) -> Self {
        MultiEncoder(flags)
    }

    pub fn flags(self) -> EncodeFlags {
        self.0
    }
}

impl From<EncodeFlags> for MultiEncoder {
    fn from(flags: EncodeFlags) -> Self {
        MultiEncoder(flags)
    }
}

/// What a boundary rule leaves in place of the first or last rune.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edit {
    quoted: bool,
    c: char,
}

impl Edit {
    fn plain(c: char) -> Self {
        Edit { quoted: false, c }
    }

    fn quoted(c: char) -> Self {
        Edit { quoted: true, c }
    }

    fn len(self) -> usize {
        let quote_len = if self.quoted { QUOTE_UTF8.len() } else { 0 };
        quote_len + self.c.len_utf8()
    }

    fn push(self, out: &mut Vec<u8>) {
        if self.quoted {
            push_quoted(out, self.c);
        } else {
            push_char(out, self.c);
        }
    }
}

/// Applies a boundary rule to the rune `c`, returning what replaces it.
fn encode_boundary(flags: EncodeFlags, edge: Edge, c: char) -> Option<Edit> {
    active_boundary_rules(flags, edge).find_map(|rule| {
        if let Some(symbol) = rule.substitution.substitute(c) {
            Some(Edit::plain(symbol))
        } else if rule.substitution.is_replacement(c) {
            Some(Edit::quoted(c))
        } else {
            None
        }
    })
}

fn encode_leading(flags: EncodeFlags, middle: &mut &[u8]) -> Option<Edit> {
    let rune = next_rune(middle)?;
    let edit = encode_boundary(flags, Edge::Leading, rune.as_char()?)?;
    *middle = &middle[rune.width()..];
    Some(edit)
}

fn encode_trailing(flags: EncodeFlags, middle: &mut &[u8]) -> Option<Edit> {
    let rune = last_rune(middle)?;
    let edit = encode_boundary(flags, Edge::Trailing, rune.as_char()?)?;
    *middle = &middle[..middle.len() - rune.width()];
    Some(edit)
}

fn needs_encoding(flags: EncodeFlags, rune: Rune) -> bool {
    let c = match rune {
        Rune::Char(c, _) => c,
        Rune::Invalid(_) => return true,
    };

    NUL.substitute(c).is_some()
        || NUL.is_replacement(c)
        || c == QUOTE
        || active_rules(flags).any(|rule| {
            rule.substitution.substitute(c).is_some() || rule.substitution.is_replacement(c)
        })
}

fn encode_char(flags: EncodeFlags, c: char, out: &mut Vec<u8>) {
    if let Some(symbol) = NUL.substitute(c) {
        push_char(out, symbol);
        return;
    }
    if NUL.is_replacement(c) || c == QUOTE {
        push_quoted(out, c);
        return;
    }

    for rule in active_rules(flags) {
        if let Some(symbol) = rule.substitution.substitute(c) {
            push_char(out, symbol);
            return;
        }
        if rule.substitution.is_replacement(c) {
            push_quoted(out, c);
            return;
        }
    }

    push_char(out, c);
}

fn decode_leading(flags: EncodeFlags, middle: &mut &[u8]) -> Option<Edit> {
    let first = next_rune(middle)?;
    let c = first.as_char()?;

    if let Some(raw) =
        active_boundary_rules(flags, Edge::Leading).find_map(|rule| rule.substitution.restore(c))
    {
        *middle = &middle[first.width()..];
        return Some(Edit::plain(raw));
    }

    if c != QUOTE {
        return None;
    }

    let second = next_rune(&middle[first.width()..])?;
    let literal = second.as_char()?;
    if active_boundary_rules(flags, Edge::Leading)
        .any(|rule| rule.substitution.is_replacement(literal))
    {
        *middle = &middle[first.width() + second.width()..];
        return Some(Edit::plain(literal));
    }

    None
}

fn decode_trailing(flags: EncodeFlags, middle: &mut &[u8]) -> Option<Edit> {
    let last = last_rune(middle)?;
    let c = last.as_char()?;
    let raw =
        active_boundary_rules(flags, Edge::Trailing).find_map(|rule| rule.substitution.restore(c))?;

    let rest = &middle[..middle.len() - last.width()];

    // Literal quote markers are doubled, so an odd run means the last one
    // quotes the substitute.
    if trailing_quotes(rest) % 2 == 1 {
        *middle = &rest[..rest.len() - QUOTE_UTF8.len()];
        Some(Edit::plain(c))
    } else {
        *middle = rest;
        Some(Edit::plain(raw))
    }
}

/// Maps a substitute back to its raw character under `flags`.
fn restore_char(flags: EncodeFlags, c: char) -> Option<char> {
    NUL.restore(c)
        .or_else(|| active_rules(flags).find_map(|rule| rule.substitution.restore(c)))
}

fn needs_decoding(flags: EncodeFlags, rune: Rune) -> bool {
    match rune {
        Rune::Char(c, _) => c == QUOTE || restore_char(flags, c).is_some(),
        Rune::Invalid(_) => false,
    }
}

impl Encoder for MultiEncoder {
    fn encode<'a>(&self, name: &'a [u8]) -> Cow<'a, [u8]> {
        let flags = self.0;

        let mut middle = name;
        let prefix = encode_leading(flags, &mut middle);
        let suffix = encode_trailing(flags, &mut middle);

        let start = if prefix.is_none() && suffix.is_none() {
            match runes(middle).find(|&(_, rune)| needs_encoding(flags, rune)) {
                Some((offset, _)) => offset,
                None => return Cow::Borrowed(name),
            }
        } else {
            0
        };

        let mut out = Vec::with_capacity(
            name.len() + prefix.map_or(0, Edit::len) + suffix.map_or(0, Edit::len),
        );

        if let Some(prefix) = prefix {
            prefix.push(&mut out);
        }
        out.extend_from_slice(&middle[..start]);

        for (_, rune) in runes(&middle[start..]) {
            match rune {
                Rune::Char(c, _) => encode_char(flags, c, &mut out),
                Rune::Invalid(byte) if flags.contains(EncodeFlags::INVALID_UTF8) => {
                    push_escaped_byte(&mut out, byte)
                }
                Rune::Invalid(byte) => out.push(byte),
            }
        }

        if let Some(suffix) = suffix {
            suffix.push(&mut out);
        }

        Cow::Owned(out)
    }

    fn decode<'a>(&self, name: &'a [u8]) -> Cow<'a, [u8]> {
        let flags = self.0;

        let mut middle = name;
        let prefix = decode_leading(flags, &mut middle);
        let suffix = decode_trailing(flags, &mut middle);

        let start = if prefix.is_none() && suffix.is_none() {
            match runes(middle).find(|&(_, rune)| needs_decoding(flags, rune)) {
                Some((offset, _)) => offset,
                None => return Cow::Borrowed(name),
            }
        } else {
            0
        };

        let mut out = Vec::with_capacity(name.len());

        if let Some(prefix) = prefix {
            prefix.push(&mut out);
        }
        out.extend_from_slice(&middle[..start]);

        let rest = &middle[start..];
        let mut offset = 0;
        let mut state = QuoteState::Normal;

        while let Some(rune) = next_rune(&rest[offset..]) {
            let at = offset;
            offset += rune.width();
            let quoted = state.take();

            let c = match rune {
                Rune::Char(c, _) => c,
                Rune::Invalid(byte) => {
                    if quoted {
                        push_char(&mut out, QUOTE);
                    }
                    out.push(byte);
                    continue;
                }
            };

            if c == QUOTE {
                if quoted {
                    push_char(&mut out, QUOTE);
                } else {
                    state = QuoteState::Quoted;
                }
                continue;
            }

            if let Some(raw) = restore_char(flags, c) {
                push_char(&mut out, if quoted { c } else { raw });
                continue;
            }

            if quoted {
                if flags.contains(EncodeFlags::INVALID_UTF8) {
                    if let Some(byte) = parse_escaped_byte(&rest[at..]) {
                        out.push(byte);
                        // Skip the second hex digit.
                        offset = at + 2;
                        continue;
                    }
                }
                push_char(&mut out, QUOTE);
            }

            push_char(&mut out, c);
        }

        // A quote marker at the very end has nothing to quote; keep it.
        if state == QuoteState::Quoted {
            push_char(&mut out, QUOTE);
        }

        if let Some(suffix) = suffix {
            suffix.push(&mut out);
        }

        Cow::Owned(out)
    }

    fn is_standard(&self) -> bool {
        self.0 == EncodeFlags::STANDARD
    }
}
