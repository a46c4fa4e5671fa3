//! Conversions between an arbitrary encoding and the Standard one.
//!
//! Names move between encodings by decoding on one side and encoding on the
//! other, with [`STANDARD`] as the common intermediate form.

use std::borrow::Cow;

use crate::{Encoder, STANDARD};

/// Converts a name in Standard encoding to the encoding of `encoder`.
pub fn from_standard_name<'a, E>(encoder: &E, name: &'a [u8]) -> Cow<'a, [u8]>
where
    E: Encoder + ?Sized,
{
    if encoder.is_standard() {
        return Cow::Borrowed(name);
    }

    match STANDARD.decode(name) {
        Cow::Borrowed(raw) => encoder.encode(raw),
        Cow::Owned(raw) => Cow::Owned(encoder.encode(&raw).into_owned()),
    }
}

/// Converts a name in the encoding of `encoder` to Standard encoding.
pub fn to_standard_name<'a, E>(encoder: &E, name: &'a [u8]) -> Cow<'a, [u8]>
where
    E: Encoder + ?Sized,
{
    if encoder.is_standard() {
        return Cow::Borrowed(name);
    }

    match encoder.decode(name) {
        Cow::Borrowed(raw) => STANDARD.encode(raw),
        Cow::Owned(raw) => Cow::Owned(STANDARD.encode(&raw).into_owned()),
    }
}

/// Converts a `/` separated path in Standard encoding to the encoding of
/// `encoder`, one component at a time.
pub fn from_standard_path<'a, E>(encoder: &E, path: &'a [u8]) -> Cow<'a, [u8]>
where
    E: Encoder + ?Sized,
{
    if encoder.is_standard() {
        return Cow::Borrowed(path);
    }

    convert_components(path, |name| from_standard_name(encoder, name))
}

/// Converts a `/` separated path in the encoding of `encoder` to Standard
/// encoding, one component at a time.
pub fn to_standard_path<'a, E>(encoder: &E, path: &'a [u8]) -> Cow<'a, [u8]>
where
    E: Encoder + ?Sized,
{
    if encoder.is_standard() {
        return Cow::Borrowed(path);
    }

    convert_components(path, |name| to_standard_name(encoder, name))
}

fn convert_components<'a, F>(path: &'a [u8], convert: F) -> Cow<'a, [u8]>
where
    F: Fn(&'a [u8]) -> Cow<'a, [u8]>,
{
    let mut changed = false;
    let components: Vec<Cow<'a, [u8]>> = path
        .split(|&byte| byte == b'/')
        .map(|component| {
            let converted = convert(component);
            changed |= converted.as_ref() != component;
            converted
        })
        .collect();

    if !changed {
        return Cow::Borrowed(path);
    }

    let converted = components.join(&b'/');
    log::trace!(
        "Converted path {:?} to {:?}",
        String::from_utf8_lossy(path),
        String::from_utf8_lossy(&converted)
    );

    Cow::Owned(converted)
}
