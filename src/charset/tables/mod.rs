//! Built-in code table data.
//!
//! Each [`StaticCharset`] lists the characters of one graphic set as
//! `(code, unicode, combining)` rows. Codes are stored the way the Library of
//! Congress tables store them: sets normally designated into G0 use
//! `0x21..=0x7E`, sets normally designated into G1 use `0xA1..=0xFE`, and
//! multi-byte sets pack three bytes into the low 24 bits.

mod iso5426;
mod iso6937;
mod marc8;

use super::registers::CharsetId;

/// A compiled-in character set.
#[derive(Debug)]
pub struct StaticCharset {
    /// Set identifier.
    pub id: CharsetId,
    /// Byte ranges that map to the identical code point (ASCII-compatible parts).
    pub identity: &'static [(u8, u8)],
    /// Explicit `(code, unicode, combining)` rows.
    pub entries: &'static [(u32, char, bool)],
}

impl StaticCharset {
    /// Iterate over every row, identity ranges first.
    pub fn rows(&self) -> impl Iterator<Item = (u32, char, bool)> + '_ {
        self.identity
            .iter()
            .flat_map(|&(lo, hi)| (lo..=hi).map(|b| (u32::from(b), char::from(b), false)))
            .chain(self.entries.iter().copied())
    }
}

/// Sets of the MARC-8 family.
pub static MARC8: &[&StaticCharset] = &[
    &marc8::BASIC_LATIN,
    &marc8::ANSEL,
    &marc8::BASIC_GREEK,
    &marc8::BASIC_CYRILLIC,
    &marc8::EXTENDED_CYRILLIC,
    &marc8::BASIC_HEBREW,
    &marc8::BASIC_ARABIC,
    &marc8::EXTENDED_ARABIC,
    &marc8::SUBSCRIPT,
    &marc8::SUPERSCRIPT,
    &marc8::GREEK_SYMBOLS,
    &marc8::EACC,
];

/// Sets of the ISO 5426 family.
pub static ISO_5426: &[&StaticCharset] = &[&marc8::BASIC_LATIN, &iso5426::ISO_5426];

/// Sets of the ISO 6937 family.
pub static ISO_6937: &[&StaticCharset] = &[&marc8::BASIC_LATIN, &iso6937::ISO_6937];

/// Sets reachable from UNIMARC designation codes.
pub static UNIMARC: &[&StaticCharset] = &[
    &marc8::BASIC_LATIN,
    &iso5426::ISO_5426,
    &marc8::EXTENDED_CYRILLIC,
    &marc8::BASIC_CYRILLIC,
    &marc8::BASIC_GREEK,
    &marc8::BASIC_HEBREW,
];
