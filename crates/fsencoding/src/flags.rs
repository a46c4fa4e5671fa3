//! The set of character classes an encoder handles, and its textual form.

use std::{fmt, str::FromStr};

use bitflags::bitflags;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

bitflags! {
    /// Character classes that a [`MultiEncoder`](crate::MultiEncoder) rewrites.
    ///
    /// NUL is always encoded and has no flag of its own. Flags compose with
    /// `|`; the empty set only handles NUL, the quote marker and `␀`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
    pub struct EncodeFlags: u32 {
        /// `/`
        const SLASH = 1 << 1;
        /// `:?"*<>|`
        const WIN = 1 << 2;
        /// `\`
        const BACK_SLASH = 1 << 3;
        /// `#%`
        const HASH_PERCENT = 1 << 4;
        /// DEL (0x7F)
        const DEL = 1 << 5;
        /// Control bytes 0x01-0x1F
        const CTL = 1 << 6;
        /// Leading space
        const LEFT_SPACE = 1 << 7;
        /// Leading `~`
        const LEFT_TILDE = 1 << 8;
        /// Trailing space
        const RIGHT_SPACE = 1 << 9;
        /// Trailing `.`
        const RIGHT_PERIOD = 1 << 10;
        /// Bytes that are not part of valid UTF-8
        const INVALID_UTF8 = 1 << 11;

        /// The flags of the Standard encoding.
        const STANDARD = Self::SLASH.bits() | Self::CTL.bits() | Self::DEL.bits();
    }
}

/// Names of the individual flags in their canonical order.
const FLAG_NAMES: &[(&str, EncodeFlags)] = &[
    ("Slash", EncodeFlags::SLASH),
    ("Win", EncodeFlags::WIN),
    ("BackSlash", EncodeFlags::BACK_SLASH),
    ("HashPercent", EncodeFlags::HASH_PERCENT),
    ("Del", EncodeFlags::DEL),
    ("Ctl", EncodeFlags::CTL),
    ("LeftSpace", EncodeFlags::LEFT_SPACE),
    ("LeftTilde", EncodeFlags::LEFT_TILDE),
    ("RightSpace", EncodeFlags::RIGHT_SPACE),
    ("RightPeriod", EncodeFlags::RIGHT_PERIOD),
    ("InvalidUtf8", EncodeFlags::INVALID_UTF8),
];

const NONE_NAME: &str = "None";
const STANDARD_NAME: &str = "Standard";

#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "Invalid encoding '{attempted}'. Valid values are: None, Standard, Slash, Win, BackSlash, \
     HashPercent, Del, Ctl, LeftSpace, LeftTilde, RightSpace, RightPeriod, InvalidUtf8"
)]
pub struct ParseFlagsError {
    attempted: String,
}

impl ParseFlagsError {
    /// The name that could not be parsed.
    pub fn attempted(&self) -> &str {
        &self.attempted
    }
}

fn flag_for_name(name: &str) -> Option<EncodeFlags> {
    if name.eq_ignore_ascii_case(NONE_NAME) {
        return Some(EncodeFlags::empty());
    }
    if name.eq_ignore_ascii_case(STANDARD_NAME) {
        return Some(EncodeFlags::STANDARD);
    }

    FLAG_NAMES
        .iter()
        .find(|(flag_name, _)| flag_name.eq_ignore_ascii_case(name))
        .map(|&(_, flag)| flag)
}

impl FromStr for EncodeFlags {
    type Err = ParseFlagsError;

    /// Parses a comma separated list of flag names, e.g. `Slash,Win,Ctl`.
    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let mut flags = EncodeFlags::empty();

        for name in source.split(',').map(str::trim) {
            match flag_for_name(name) {
                Some(flag) => flags |= flag,
                None => {
                    return Err(ParseFlagsError {
                        attempted: name.to_owned(),
                    })
                }
            }
        }

        Ok(flags)
    }
}

impl fmt::Display for EncodeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = FLAG_NAMES
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name);

        match names.next() {
            None => f.write_str(NONE_NAME),
            Some(first) => {
                f.write_str(first)?;
                for name in names {
                    write!(f, ",{name}")?;
                }
                Ok(())
            }
        }
    }
}

impl Serialize for EncodeFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EncodeFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        source.parse().map_err(de::Error::custom)
    }
}
