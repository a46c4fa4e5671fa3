use std::borrow::Cow;

use crate::Encoder;

/// An [`Encoder`] that returns every name unchanged.
///
/// Its bridge operations still go through [`STANDARD`](crate::STANDARD), so
/// converting a Standard encoded name to identity strips the Standard
/// substitutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Identity;

/// Returns an [`Encoder`] that always returns its input.
pub fn identity() -> Identity {
    Identity
}

impl Encoder for Identity {
    fn encode<'a>(&self, name: &'a [u8]) -> Cow<'a, [u8]> {
        Cow::Borrowed(name)
    }

    fn decode<'a>(&self, name: &'a [u8]) -> Cow<'a, [u8]> {
        Cow::Borrowed(name)
    }
}
