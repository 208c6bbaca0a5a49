//! The 24-byte record leader.
//!
//! # Structure
//!
//! - Positions 0-4: Record length (5 digits)
//! - Positions 5-8: Status, type, bibliographic level, control type
//! - Position 9: Character coding (space = MARC-8, a = UCS/Unicode)
//! - Position 10: Indicator count
//! - Position 11: Subfield code count
//! - Positions 12-16: Base address of data (5 digits)
//! - Positions 17-19: Encoding level, cataloging form, multipart level
//! - Positions 20-23: Entry map (usually "4500")
//!
//! Only the lengths and the character coding matter to this crate; the other
//! positions are carried through unchanged.

use crate::encoding::MarcEncoding;
use crate::error::{MarcError, Result};
use serde::{Deserialize, Serialize};

/// Length of the leader in bytes.
pub const LEADER_LEN: usize = 24;

/// Record leader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    /// Record length - positions 0-4
    pub record_length: u32,
    /// Record status - position 5
    pub record_status: char,
    /// Type of record - position 6
    pub record_type: char,
    /// Bibliographic level - position 7
    pub bibliographic_level: char,
    /// Type of control record - position 8
    pub control_record_type: char,
    /// Character coding scheme - position 9
    pub character_coding: char,
    /// Indicator count - position 10
    pub indicator_count: u8,
    /// Subfield code count - position 11
    pub subfield_code_count: u8,
    /// Base address of data - positions 12-16
    pub data_base_address: u32,
    /// Encoding level - position 17
    pub encoding_level: char,
    /// Descriptive cataloging form - position 18
    pub cataloging_form: char,
    /// Multipart resource record level - position 19
    pub multipart_level: char,
    /// Entry map - positions 20-23
    pub entry_map: String,
}

impl Default for Leader {
    /// A new MARC-8 language-material monograph; lengths are filled in on write.
    fn default() -> Self {
        Leader {
            record_length: 0,
            record_status: 'n',
            record_type: 'a',
            bibliographic_level: 'm',
            control_record_type: ' ',
            character_coding: ' ',
            indicator_count: 2,
            subfield_code_count: 2,
            data_base_address: 0,
            encoding_level: ' ',
            cataloging_form: ' ',
            multipart_level: ' ',
            entry_map: "4500".to_string(),
        }
    }
}

impl Leader {
    /// Parse the first 24 bytes of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns `MarcError::InvalidLeader` if fewer than 24 bytes are given or
    /// a numeric position holds something other than digits.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < LEADER_LEN {
            return Err(MarcError::InvalidLeader(format!(
                "Leader must be at least {LEADER_LEN} bytes, got {}",
                bytes.len()
            )));
        }

        Ok(Leader {
            record_length: parse_number(&bytes[0..5])?,
            record_status: char::from(bytes[5]),
            record_type: char::from(bytes[6]),
            bibliographic_level: char::from(bytes[7]),
            control_record_type: char::from(bytes[8]),
            character_coding: char::from(bytes[9]),
            indicator_count: parse_count(bytes[10], "indicator count")?,
            subfield_code_count: parse_count(bytes[11], "subfield code count")?,
            data_base_address: parse_number(&bytes[12..17])?,
            encoding_level: char::from(bytes[17]),
            cataloging_form: char::from(bytes[18]),
            multipart_level: char::from(bytes[19]),
            entry_map: String::from_utf8_lossy(&bytes[20..24]).into_owned(),
        })
    }

    /// Check the lengths before they are used to slice a record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is shorter than its own leader or the data
    /// starts before the directory ends.
    pub fn validate_for_reading(&self) -> Result<()> {
        if (self.record_length as usize) < LEADER_LEN {
            return Err(MarcError::InvalidLeader(format!(
                "Record length must be at least {LEADER_LEN}, got {}",
                self.record_length
            )));
        }
        if (self.data_base_address as usize) < LEADER_LEN {
            return Err(MarcError::InvalidLeader(format!(
                "Base address of data must be at least {LEADER_LEN}, got {}",
                self.data_base_address
            )));
        }
        if self.data_base_address > self.record_length {
            return Err(MarcError::InvalidLeader(format!(
                "Base address {} lies beyond record length {}",
                self.data_base_address, self.record_length
            )));
        }
        Ok(())
    }

    /// Encoding named by position 9.
    ///
    /// # Errors
    ///
    /// Returns `MarcError::EncodingError` for an unknown coding scheme.
    pub fn encoding(&self) -> Result<MarcEncoding> {
        MarcEncoding::from_leader_char(self.character_coding)
    }

    /// Set position 9.
    pub fn set_encoding(&mut self, encoding: MarcEncoding) {
        self.character_coding = encoding.as_leader_char();
    }

    /// Serialize to 24 bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if a length does not fit in five digits, a count is not
    /// a single digit, or the entry map is not four bytes.
    pub fn as_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(LEADER_LEN);
        bytes.extend_from_slice(&format_number(self.record_length, "Record length")?);
        for c in [
            self.record_status,
            self.record_type,
            self.bibliographic_level,
            self.control_record_type,
            self.character_coding,
        ] {
            bytes.push(leader_byte(c)?);
        }
        for count in [self.indicator_count, self.subfield_code_count] {
            if count > 9 {
                return Err(MarcError::InvalidLeader(format!(
                    "Count must be a single digit, got {count}"
                )));
            }
            bytes.push(b'0' + count);
        }
        bytes.extend_from_slice(&format_number(self.data_base_address, "Base address")?);
        for c in [self.encoding_level, self.cataloging_form, self.multipart_level] {
            bytes.push(leader_byte(c)?);
        }

        if self.entry_map.len() != 4 {
            return Err(MarcError::InvalidLeader(format!(
                "Entry map must be 4 bytes, got {}",
                self.entry_map.len()
            )));
        }
        bytes.extend_from_slice(self.entry_map.as_bytes());
        Ok(bytes)
    }
}

fn parse_number(bytes: &[u8]) -> Result<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        if b.is_ascii_digit() {
            Ok(acc * 10 + u32::from(b - b'0'))
        } else {
            Err(MarcError::InvalidLeader(format!(
                "Invalid numeric field: '{}'",
                String::from_utf8_lossy(bytes)
            )))
        }
    })
}

fn parse_count(byte: u8, what: &str) -> Result<u8> {
    if byte.is_ascii_digit() {
        Ok(byte - b'0')
    } else {
        Err(MarcError::InvalidLeader(format!(
            "Invalid {what}: {:?}",
            char::from(byte)
        )))
    }
}

fn format_number(value: u32, what: &str) -> Result<[u8; 5]> {
    if value > 99_999 {
        return Err(MarcError::InvalidLeader(format!(
            "{what} {value} does not fit in 5 digits"
        )));
    }
    let mut out = [b'0'; 5];
    let mut rest = value;
    for slot in out.iter_mut().rev() {
        // value <= 99_999, so every digit fits
        *slot = b'0' + (rest % 10) as u8;
        rest /= 10;
    }
    Ok(out)
}

fn leader_byte(c: char) -> Result<u8> {
    u8::try_from(c)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| MarcError::InvalidLeader(format!("Leader value must be ASCII, got {c:?}")))
}
