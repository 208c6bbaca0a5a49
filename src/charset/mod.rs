//! Legacy character set conversion.
//!
//! Converts between Unicode and the ISO 2022 based encodings found in MARC
//! records: MARC-8 (ANSEL plus the alternate script sets), ISO 5426, ISO 6937
//! and the four-register UNIMARC model.
//!
//! # Examples
//!
//! ```
//! use marc_charconv::charset::{CharsetFamily, LegacyDecoder, LegacyEncoder};
//!
//! let mut encoder = LegacyEncoder::new(CharsetFamily::Marc8);
//! let bytes = encoder.encode("Ætna A\u{0300}");
//! assert_eq!(bytes, b"\xA5tna \xE1A");
//!
//! let decoder = LegacyDecoder::new(CharsetFamily::Marc8).with_compose(true);
//! assert_eq!(decoder.decode(&bytes), "Ætna \u{00C0}");
//! ```

pub mod code_table;
pub mod decoder;
pub mod encoder;
pub mod ncr;
pub mod registers;
pub mod reverse_table;
pub mod tables;

pub use code_table::{CodeTable, Lookup, TableEntry};
pub use decoder::{DecoderOptions, LegacyDecoder};
pub use encoder::{EncoderOptions, LegacyEncoder};
pub use ncr::NcrFormat;
pub use registers::{CharsetId, Register, RegisterModel, Registers, Side, Slot};
pub use reverse_table::{CharEntries, LookupCache, ReverseCodeTable, ReverseLookup, StaticReverseTable};

use crate::error::Result;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tables::StaticCharset;

lazy_static! {
    static ref MARC8_TABLE: Arc<CodeTable> = Arc::new(CodeTable::from_static(tables::MARC8));
    static ref ISO_5426_TABLE: Arc<CodeTable> = Arc::new(CodeTable::from_static(tables::ISO_5426));
    static ref ISO_6937_TABLE: Arc<CodeTable> = Arc::new(CodeTable::from_static(tables::ISO_6937));
    static ref UNIMARC_TABLE: Arc<CodeTable> = Arc::new(CodeTable::from_static(tables::UNIMARC));
    static ref MARC8_REVERSE: Arc<ReverseCodeTable> = Arc::new(ReverseCodeTable::new(&MARC8_TABLE));
    static ref ISO_5426_REVERSE: Arc<ReverseCodeTable> =
        Arc::new(ReverseCodeTable::new(&ISO_5426_TABLE));
    static ref ISO_6937_REVERSE: Arc<ReverseCodeTable> =
        Arc::new(ReverseCodeTable::new(&ISO_6937_TABLE));
    static ref UNIMARC_REVERSE: Arc<ReverseCodeTable> =
        Arc::new(ReverseCodeTable::new(&UNIMARC_TABLE));
}

const MARC8_PRIORITY: &[CharsetId] = &[
    CharsetId::BASIC_LATIN,
    CharsetId::ANSEL,
    CharsetId::BASIC_GREEK,
    CharsetId::BASIC_CYRILLIC,
    CharsetId::EXTENDED_CYRILLIC,
    CharsetId::BASIC_HEBREW,
    CharsetId::BASIC_ARABIC,
    CharsetId::EXTENDED_ARABIC,
    CharsetId::EACC,
    CharsetId::SUBSCRIPT,
    CharsetId::SUPERSCRIPT,
    CharsetId::GREEK_SYMBOLS,
];

// There is no `S` (NCR) entry at the end: characters no set encodes fall
// through to the numeric character reference path in the encoder.
const UNIMARC_PRIORITY: &[CharsetId] = &[
    CharsetId::BASIC_LATIN,
    CharsetId::ISO_5426,
    CharsetId::BASIC_CYRILLIC,
    CharsetId::EXTENDED_CYRILLIC,
    CharsetId::BASIC_GREEK,
    CharsetId::BASIC_HEBREW,
];

/// A family of legacy encodings sharing one table and register model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharsetFamily {
    /// MARC-8: ASCII in G0, ANSEL in G1, alternate scripts by escape.
    Marc8,
    /// ISO 5426 extended Latin.
    Iso5426,
    /// ISO 6937.
    Iso6937,
    /// UNIMARC: G0..G3 with locking shifts.
    Unimarc,
}

impl CharsetFamily {
    /// Registers in effect at the start of every conversion.
    #[must_use]
    pub fn default_registers(self) -> Registers {
        let g1 = match self {
            CharsetFamily::Marc8 => CharsetId::ANSEL,
            CharsetFamily::Iso5426 | CharsetFamily::Unimarc => CharsetId::ISO_5426,
            CharsetFamily::Iso6937 => CharsetId::ISO_6937,
        };
        Registers::new(CharsetId::BASIC_LATIN, g1)
    }

    /// How the family uses G0..G3.
    #[must_use]
    pub fn register_model(self) -> RegisterModel {
        match self {
            CharsetFamily::Unimarc => RegisterModel::FourRegister,
            _ => RegisterModel::TwoRegister,
        }
    }

    /// Order in which sets are preferred when a character has several encodings.
    #[must_use]
    pub fn priority(self) -> &'static [CharsetId] {
        match self {
            CharsetFamily::Marc8 => MARC8_PRIORITY,
            CharsetFamily::Iso5426 => &[CharsetId::BASIC_LATIN, CharsetId::ISO_5426],
            CharsetFamily::Iso6937 => &[CharsetId::BASIC_LATIN, CharsetId::ISO_6937],
            CharsetFamily::Unimarc => UNIMARC_PRIORITY,
        }
    }

    /// Compiled-in character sets of the family.
    #[must_use]
    pub fn static_sets(self) -> &'static [&'static StaticCharset] {
        match self {
            CharsetFamily::Marc8 => tables::MARC8,
            CharsetFamily::Iso5426 => tables::ISO_5426,
            CharsetFamily::Iso6937 => tables::ISO_6937,
            CharsetFamily::Unimarc => tables::UNIMARC,
        }
    }

    /// The shared built-in forward table.
    #[must_use]
    pub fn table(self) -> Arc<CodeTable> {
        match self {
            CharsetFamily::Marc8 => Arc::clone(&*MARC8_TABLE),
            CharsetFamily::Iso5426 => Arc::clone(&*ISO_5426_TABLE),
            CharsetFamily::Iso6937 => Arc::clone(&*ISO_6937_TABLE),
            CharsetFamily::Unimarc => Arc::clone(&*UNIMARC_TABLE),
        }
    }

    /// The built-in reverse table of the requested kind.
    #[must_use]
    pub fn reverse_table(self, kind: ReverseTableKind) -> Arc<dyn ReverseLookup> {
        match kind {
            ReverseTableKind::Static => Arc::new(StaticReverseTable::new(self.static_sets())),
            ReverseTableKind::Hashed => match self {
                CharsetFamily::Marc8 => Arc::clone(&*MARC8_REVERSE) as Arc<dyn ReverseLookup>,
                CharsetFamily::Iso5426 => Arc::clone(&*ISO_5426_REVERSE) as Arc<dyn ReverseLookup>,
                CharsetFamily::Iso6937 => Arc::clone(&*ISO_6937_REVERSE) as Arc<dyn ReverseLookup>,
                CharsetFamily::Unimarc => Arc::clone(&*UNIMARC_REVERSE) as Arc<dyn ReverseLookup>,
            },
        }
    }
}

/// Which [`ReverseLookup`] implementation an encoder uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReverseTableKind {
    /// Hash index built from the forward table.
    #[default]
    Hashed,
    /// Scan of the compiled-in table data.
    Static,
}

/// Build UNIMARC registers from the four two-character set codes.
///
/// A blank G0 code falls back to ISO 646 and a blank G1 code to ISO 5426;
/// blank G2/G3 codes leave those registers absent.
///
/// # Errors
///
/// Returns `MarcError::CodeTable` if any code names no known set.
///
/// ```
/// use marc_charconv::charset::{unimarc_registers, CharsetId, Register};
///
/// let regs = unimarc_registers(["01", "03", "05", "  "]).unwrap();
/// assert_eq!(regs.get(Register::G2).map(|s| s.id), Some(CharsetId::BASIC_GREEK));
/// assert_eq!(regs.get(Register::G3), None);
/// ```
pub fn unimarc_registers(codes: [&str; 4]) -> Result<Registers> {
    let [g0, g1, g2, g3] = codes;
    let g0 = CharsetId::from_unimarc_code(g0)?.unwrap_or(CharsetId::BASIC_LATIN);
    let g1 = CharsetId::from_unimarc_code(g1)?.unwrap_or(CharsetId::ISO_5426);
    Ok(Registers::new(g0, g1)
        .with(Register::G2, CharsetId::from_unimarc_code(g2)?)
        .with(Register::G3, CharsetId::from_unimarc_code(g3)?))
}
