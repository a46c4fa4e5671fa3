//! Substitution rules for each character class.
//!
//! Every class maps a fixed set of raw characters to visually similar
//! replacements, mostly their FULLWIDTH variants or a glyph from the Control
//! Pictures block. The tables here are pure data; the engine in
//! [`multi`](crate::multi) decides where they apply.

use crate::EncodeFlags;

/// Adding this to a printable ASCII character gives its FULLWIDTH variant.
pub const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// SYMBOL FOR NULL, the first glyph of the control picture block.
pub const SYMBOL_OFFSET: char = '␀';

/// SYMBOL FOR SPACE
pub const SYMBOL_SPACE: char = '␠';

/// SYMBOL FOR DELETE
pub const SYMBOL_DELETE: char = '␡';

/// How a class turns a raw character into its replacement.
#[derive(Debug, Clone, Copy)]
pub enum Substitution {
    /// Shift these printable ASCII characters into the FULLWIDTH block.
    Fullwidth(&'static [char]),
    /// Map the byte range `first..=last` onto the control picture glyphs.
    ControlPicture { first: u8, last: u8 },
    /// Replace one character with one dedicated symbol.
    Symbol { raw: char, symbol: char },
}

impl Substitution {
    /// Returns the replacement for `c` if this substitution rewrites it.
    pub fn substitute(self, c: char) -> Option<char> {
        match self {
            Substitution::Fullwidth(set) => set.contains(&c).then(|| shift(c, FULLWIDTH_OFFSET)),
            Substitution::ControlPicture { first, last } => {
                let code = u32::from(c);
                (u32::from(first)..=u32::from(last))
                    .contains(&code)
                    .then(|| shift(c, u32::from(SYMBOL_OFFSET)))
            }
            Substitution::Symbol { raw, symbol } => (c == raw).then_some(symbol),
        }
    }

    /// Returns the raw character if `c` is one of this substitution's
    /// replacements.
    pub fn restore(self, c: char) -> Option<char> {
        match self {
            Substitution::Fullwidth(set) => u32::from(c)
                .checked_sub(FULLWIDTH_OFFSET)
                .and_then(char::from_u32)
                .filter(|raw| set.contains(raw)),
            Substitution::ControlPicture { first, last } => u32::from(c)
                .checked_sub(u32::from(SYMBOL_OFFSET))
                .filter(|code| (u32::from(first)..=u32::from(last)).contains(code))
                .and_then(char::from_u32),
            Substitution::Symbol { raw, symbol } => (c == symbol).then_some(raw),
        }
    }

    /// Returns whether `c` is one of this substitution's replacements, and so
    /// must be quoted when it shows up in a raw name.
    pub fn is_replacement(self, c: char) -> bool {
        self.restore(c).is_some()
    }
}

fn shift(c: char, offset: u32) -> char {
    // All tables map into assigned, non-surrogate code points.
    char::from_u32(u32::from(c) + offset).unwrap_or(c)
}

/// A class that applies anywhere in a name.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub flag: EncodeFlags,
    pub substitution: Substitution,
}

/// Rules checked for every character, in order.
pub const RULES: &[Rule] = &[
    Rule {
        flag: EncodeFlags::WIN,
        substitution: Substitution::Fullwidth(&['*', '<', '>', '?', ':', '|', '"']),
    },
    Rule {
        flag: EncodeFlags::SLASH,
        substitution: Substitution::Fullwidth(&['/']),
    },
    Rule {
        flag: EncodeFlags::BACK_SLASH,
        substitution: Substitution::Fullwidth(&['\\']),
    },
    Rule {
        flag: EncodeFlags::HASH_PERCENT,
        substitution: Substitution::Fullwidth(&['#', '%']),
    },
    Rule {
        flag: EncodeFlags::DEL,
        substitution: Substitution::Symbol {
            raw: '\x7F',
            symbol: SYMBOL_DELETE,
        },
    },
    Rule {
        flag: EncodeFlags::CTL,
        substitution: Substitution::ControlPicture {
            first: 0x01,
            last: 0x1F,
        },
    },
];

/// NUL is always encoded, whatever the flags.
pub const NUL: Substitution = Substitution::ControlPicture {
    first: 0x00,
    last: 0x00,
};

/// Which end of a name a boundary rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Leading,
    Trailing,
}

/// A class that only applies to the first or last character of a name.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryRule {
    pub flag: EncodeFlags,
    pub edge: Edge,
    pub substitution: Substitution,
}

/// Boundary rules in priority order. At most one leading and one trailing
/// rule applies to a name.
pub const BOUNDARY_RULES: &[BoundaryRule] = &[
    BoundaryRule {
        flag: EncodeFlags::LEFT_SPACE,
        edge: Edge::Leading,
        substitution: Substitution::Symbol {
            raw: ' ',
            symbol: SYMBOL_SPACE,
        },
    },
    BoundaryRule {
        flag: EncodeFlags::LEFT_TILDE,
        edge: Edge::Leading,
        substitution: Substitution::Fullwidth(&['~']),
    },
    BoundaryRule {
        flag: EncodeFlags::RIGHT_SPACE,
        edge: Edge::Trailing,
        substitution: Substitution::Symbol {
            raw: ' ',
            symbol: SYMBOL_SPACE,
        },
    },
    BoundaryRule {
        flag: EncodeFlags::RIGHT_PERIOD,
        edge: Edge::Trailing,
        substitution: Substitution::Fullwidth(&['.']),
    },
];

/// The general rules enabled by `flags`.
pub fn active_rules(flags: EncodeFlags) -> impl Iterator<Item = &'static Rule> {
    RULES.iter().filter(move |rule| flags.contains(rule.flag))
}

/// The boundary rules enabled by `flags` for one end of a name.
pub fn active_boundary_rules(
    flags: EncodeFlags,
    edge: Edge,
) -> impl Iterator<Item = &'static BoundaryRule> {
    BOUNDARY_RULES
        .iter()
        .filter(move |rule| rule.edge == edge && flags.contains(rule.flag))
}
