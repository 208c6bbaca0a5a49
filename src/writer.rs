//! Writing ISO 2709 records.
//!
//! [`MarcWriter`] converts every data element from Unicode (through its
//! [`LegacyEncoder`] when leader position 9 says MARC-8, as UTF-8 otherwise),
//! rebuilds the directory and fixes up the record length and base address in
//! the leader.
//!
//! # Examples
//!
//! ```
//! use marc_charconv::{Field, Leader, MarcWriter, Record};
//!
//! let mut record = Record::new(Leader::default());
//! let mut field = Field::new("245".to_string(), '1', '0');
//! field.add_subfield_str('a', "Ætna");
//! record.add_field(field);
//!
//! let mut buffer = Vec::new();
//! let mut writer = MarcWriter::new(&mut buffer);
//! writer.write_record(&record)?;
//! writer.finish()?;
//!
//! assert!(buffer.windows(4).any(|w| w == b"\xA5tna"));
//! # Ok::<(), marc_charconv::MarcError>(())
//! ```

use crate::charset::{CharsetFamily, LegacyEncoder};
use crate::encoding::MarcEncoding;
use crate::error::{MarcError, Result};
use crate::leader::LEADER_LEN;
use crate::record::Record;
use log::trace;
use std::io::Write;

const FIELD_TERMINATOR: u8 = 0x1E;
const SUBFIELD_DELIMITER: u8 = 0x1F;
const RECORD_TERMINATOR: u8 = 0x1D;

/// Largest field length a 4-digit directory entry can hold.
const MAX_FIELD_LEN: usize = 9_999;
/// Largest offset a 5-digit directory entry can hold.
const MAX_OFFSET: usize = 99_999;

/// Writer for ISO 2709 records.
#[derive(Debug)]
pub struct MarcWriter<W: Write> {
    writer: W,
    encoder: LegacyEncoder,
    records_written: usize,
    finished: bool,
}

impl<W: Write> MarcWriter<W> {
    /// Writer with the default MARC-8 encoder.
    pub fn new(writer: W) -> Self {
        MarcWriter {
            writer,
            encoder: LegacyEncoder::new(CharsetFamily::Marc8),
            records_written: 0,
            finished: false,
        }
    }

    /// Encoder used for records whose leader says MARC-8.
    #[must_use]
    pub fn with_encoder(mut self, encoder: LegacyEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    /// The MARC-8 encoder, including the sets it has opened so far.
    #[must_use]
    pub fn encoder(&self) -> &LegacyEncoder {
        &self.encoder
    }

    /// Serialize one record.
    ///
    /// The record is assembled in memory and written with a single call, so a
    /// rejected record leaves nothing behind in the output.
    ///
    /// # Errors
    ///
    /// Returns `MarcError::InvalidField` if a tag is not three ASCII bytes, an
    /// indicator or subfield code is not ASCII, or a value contains a record,
    /// field or subfield delimiter. Returns `MarcError::InvalidRecord` if the
    /// record does not fit the directory's fixed-width numbers, and
    /// `MarcError::EncodingError` for an unknown leader coding scheme.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        if self.finished {
            return Err(MarcError::InvalidRecord(
                "Cannot write to a finished writer".to_string(),
            ));
        }
        let encoding = record.encoding()?;

        let mut directory = Vec::new();
        let mut data = Vec::new();

        for (tag, value) in &record.control_fields {
            let start = data.len();
            data.extend_from_slice(&self.encode_value(value, encoding, tag)?);
            data.push(FIELD_TERMINATOR);
            push_entry(&mut directory, tag, start, data.len() - start)?;
        }

        for field in record.fields() {
            let tag = &field.tag;
            let start = data.len();
            data.push(ascii_byte(field.indicator1, tag, "indicator")?);
            data.push(ascii_byte(field.indicator2, tag, "indicator")?);
            for subfield in &field.subfields {
                let code = ascii_byte(subfield.code, tag, "subfield code")?;
                if is_delimiter(char::from(code)) {
                    return Err(MarcError::InvalidField(format!(
                        "Tag {tag}: delimiter used as subfield code"
                    )));
                }
                data.push(SUBFIELD_DELIMITER);
                data.push(code);
                data.extend_from_slice(&self.encode_value(&subfield.value, encoding, tag)?);
            }
            data.push(FIELD_TERMINATOR);
            push_entry(&mut directory, tag, start, data.len() - start)?;
        }
        directory.push(FIELD_TERMINATOR);

        let base_address = LEADER_LEN + directory.len();
        let record_length = base_address + data.len() + 1;
        let mut leader = record.leader.clone();
        leader.record_length = u32::try_from(record_length)
            .map_err(|_| MarcError::InvalidRecord("Record too long".to_string()))?;
        leader.data_base_address = u32::try_from(base_address)
            .map_err(|_| MarcError::InvalidRecord("Directory too long".to_string()))?;

        let mut out = leader.as_bytes()?;
        out.reserve(record_length - LEADER_LEN);
        out.extend_from_slice(&directory);
        out.extend_from_slice(&data);
        out.push(RECORD_TERMINATOR);
        self.writer.write_all(&out)?;

        trace!(
            "Wrote record {} ({encoding:?}, {record_length} bytes)",
            self.records_written
        );
        self.records_written += 1;
        Ok(())
    }

    /// Flush and refuse further records.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing the underlying writer fails.
    pub fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        self.finished = true;
        Ok(())
    }

    /// Number of records written so far.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    fn encode_value(&mut self, value: &str, encoding: MarcEncoding, tag: &str) -> Result<Vec<u8>> {
        if value.contains(is_delimiter) {
            return Err(MarcError::InvalidField(format!(
                "Tag {tag}: value contains a record, field or subfield delimiter"
            )));
        }
        Ok(match encoding {
            MarcEncoding::Marc8 => self.encoder.encode(value),
            MarcEncoding::Utf8 => value.as_bytes().to_vec(),
        })
    }
}

fn is_delimiter(c: char) -> bool {
    matches!(c, '\u{1D}'..='\u{1F}')
}

fn ascii_byte(c: char, tag: &str, what: &str) -> Result<u8> {
    u8::try_from(c)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| MarcError::InvalidField(format!("Tag {tag}: {what} {c:?} is not ASCII")))
}

fn push_entry(directory: &mut Vec<u8>, tag: &str, start: usize, length: usize) -> Result<()> {
    if tag.len() != 3 || !tag.is_ascii() {
        return Err(MarcError::InvalidField(format!(
            "Tag {tag:?} must be three ASCII characters"
        )));
    }
    if length > MAX_FIELD_LEN {
        return Err(MarcError::InvalidRecord(format!(
            "Field {tag} is {length} bytes, more than {MAX_FIELD_LEN}"
        )));
    }
    if start > MAX_OFFSET {
        return Err(MarcError::InvalidRecord(format!(
            "Field {tag} starts at {start}, beyond {MAX_OFFSET}"
        )));
    }
    directory.extend_from_slice(tag.as_bytes());
    directory.extend_from_slice(format!("{length:04}{start:05}").as_bytes());
    Ok(())
}
