/*!
Reversible file name encoding for storage backends with restricted character
sets.

Characters that a backend cannot store (control bytes, `/`, `\`, the Windows
reserved set, leading or trailing spaces and periods, invalid UTF-8) are
replaced with visually similar characters, mostly their FULLWIDTH variants or
glyphs from the Control Pictures block. Characters in the input that already
look like replacements are quoted with `‛`, so every encoding can be undone
exactly.

## Encoders
* [`MultiEncoder`], configured with a set of [`EncodeFlags`]
* [`STANDARD`], the encoding names are exchanged in between backends
* [`Identity`], which leaves names alone

Names are byte strings, since a name may contain bytes that are not valid
UTF-8. Every operation returns a [`Cow`] that borrows the input when nothing
had to change.
*/

mod bridge;
mod flags;
mod identity;
mod multi;
mod quote;
mod rules;
mod utf8;

use std::borrow::Cow;

pub use bridge::{from_standard_name, from_standard_path, to_standard_name, to_standard_path};
pub use flags::{EncodeFlags, ParseFlagsError};
pub use identity::{identity, Identity};
pub use multi::MultiEncoder;
pub use quote::QUOTE;

/// The Standard encoding: NUL, `/`, control bytes and DEL are replaced.
///
/// List of replaced characters:
/// - NUL (0x00) becomes `␀` (SYMBOL FOR NULL)
/// - `/` becomes `／` (FULLWIDTH SOLIDUS)
/// - 0x01-0x1F become `␁`-`␟`
/// - DEL (0x7F) becomes `␡` (SYMBOL FOR DELETE)
pub const STANDARD: MultiEncoder = MultiEncoder::STANDARD;

/// Transforms names to and from their encoded form.
///
/// `decode(encode(name))` returns `name` for every byte string. The
/// `*_standard_*` methods convert between this encoding and [`STANDARD`]; they
/// expect their input to be valid output of the respective encoder.
pub trait Encoder {
    /// Substitutes any reserved characters and patterns in a raw name.
    fn encode<'a>(&self, name: &'a [u8]) -> Cow<'a, [u8]>;

    /// Undoes the substitutions made by [`encode`](Encoder::encode).
    fn decode<'a>(&self, name: &'a [u8]) -> Cow<'a, [u8]>;

    /// Whether this encoder is the Standard encoding, in which case the bridge
    /// operations return their input as is.
    fn is_standard(&self) -> bool {
        false
    }

    /// Converts a `/` separated path in Standard encoding to this encoding.
    fn from_standard_path<'a>(&self, path: &'a [u8]) -> Cow<'a, [u8]> {
        from_standard_path(self, path)
    }

    /// Converts a name in Standard encoding to this encoding.
    fn from_standard_name<'a>(&self, name: &'a [u8]) -> Cow<'a, [u8]> {
        from_standard_name(self, name)
    }

    /// Converts a `/` separated path in this encoding to Standard encoding.
    fn to_standard_path<'a>(&self, path: &'a [u8]) -> Cow<'a, [u8]> {
        to_standard_path(self, path)
    }

    /// Converts a name in this encoding to Standard encoding.
    fn to_standard_name<'a>(&self, name: &'a [u8]) -> Cow<'a, [u8]> {
        to_standard_name(self, name)
    }

    /// Encodes a name that is known to be UTF-8.
    ///
    /// Only invalid UTF-8 is ever escaped as raw bytes, so the result is
    /// always UTF-8 as well.
    fn encode_str<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match self.encode(name.as_bytes()) {
            Cow::Borrowed(encoded) => String::from_utf8_lossy(encoded),
            Cow::Owned(encoded) => Cow::Owned(String::from_utf8_lossy(&encoded).into_owned()),
        }
    }

    /// Decodes a name for display, replacing bytes that are not UTF-8 with
    /// U+FFFD. Use [`decode`](Encoder::decode) for anything that has to
    /// round trip.
    fn decode_lossy<'a>(&self, name: &'a [u8]) -> Cow<'a, str> {
        match self.decode(name) {
            Cow::Borrowed(decoded) => String::from_utf8_lossy(decoded),
            Cow::Owned(decoded) => Cow::Owned(String::from_utf8_lossy(&decoded).into_owned()),
        }
    }
}
