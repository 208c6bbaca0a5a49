//! Record-level character encoding.
//!
//! Position 9 of the leader says how a record's data elements are encoded:
//! a space means MARC-8 and `a` means UCS/Unicode (UTF-8). This module maps
//! that flag to a [`MarcEncoding`] and converts single data elements with the
//! engine in [`crate::charset`].

use crate::charset::{CharsetFamily, LegacyDecoder, LegacyEncoder};
use crate::error::{MarcError, Result};
use lazy_static::lazy_static;

lazy_static! {
    static ref MARC8_DECODER: LegacyDecoder = LegacyDecoder::new(CharsetFamily::Marc8)
        .with_compose(true)
        .with_convert_unicode_sequences(true);
}

/// Character encoding of a record's data elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarcEncoding {
    /// MARC-8: ASCII and ANSEL with ISO 2022 escapes to other scripts.
    Marc8,
    /// UCS/Unicode, serialized as UTF-8.
    Utf8,
}

impl MarcEncoding {
    /// Encoding named by leader position 9.
    ///
    /// # Errors
    ///
    /// Returns `MarcError::EncodingError` for anything other than `' '` or `'a'`.
    pub fn from_leader_char(c: char) -> Result<Self> {
        match c {
            ' ' => Ok(MarcEncoding::Marc8),
            'a' => Ok(MarcEncoding::Utf8),
            _ => Err(MarcError::EncodingError(format!(
                "Unknown character coding scheme: {c:?}"
            ))),
        }
    }

    /// Leader position 9 value for this encoding.
    #[must_use]
    pub fn as_leader_char(&self) -> char {
        match self {
            MarcEncoding::Marc8 => ' ',
            MarcEncoding::Utf8 => 'a',
        }
    }
}

/// Decode one data element.
///
/// MARC-8 input is composed to NFC and embedded `<U+XXXX>` references are
/// expanded. Use a [`LegacyDecoder`] directly for other settings.
///
/// # Errors
///
/// Returns `MarcError::EncodingError` if UTF-8 input is not valid UTF-8.
/// MARC-8 decoding never fails.
pub fn decode_bytes(bytes: &[u8], encoding: MarcEncoding) -> Result<String> {
    match encoding {
        MarcEncoding::Utf8 => String::from_utf8(bytes.to_vec())
            .map_err(|e| MarcError::EncodingError(format!("Invalid UTF-8: {e}"))),
        MarcEncoding::Marc8 => Ok(MARC8_DECODER.decode(bytes)),
    }
}

/// Encode one data element.
///
/// # Errors
///
/// Currently infallible; characters MARC-8 cannot represent are written as
/// `<U+XXXX>` references.
pub fn encode_string(s: &str, encoding: MarcEncoding) -> Result<Vec<u8>> {
    match encoding {
        MarcEncoding::Utf8 => Ok(s.as_bytes().to_vec()),
        MarcEncoding::Marc8 => Ok(LegacyEncoder::new(CharsetFamily::Marc8).encode(s)),
    }
}
