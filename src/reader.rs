//! Reading ISO 2709 records.
//!
//! [`MarcReader`] splits each record into leader, directory and fields, then
//! converts every data element to Unicode: through its [`LegacyDecoder`] when
//! leader position 9 says MARC-8, as UTF-8 otherwise.
//!
//! # Examples
//!
//! ```no_run
//! use marc_charconv::MarcReader;
//! use std::fs::File;
//!
//! let file = File::open("records.mrc")?;
//! let mut reader = MarcReader::new(file);
//!
//! while let Some(record) = reader.read_record()? {
//!     if let Some(title) = record.get_field("245").and_then(|f| f.get_subfield('a')) {
//!         println!("{title}");
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::charset::{CharsetFamily, LegacyDecoder};
use crate::encoding::MarcEncoding;
use crate::error::{MarcError, Result};
use crate::leader::{Leader, LEADER_LEN};
use crate::record::{is_control_tag, Field, Record};
use crate::recovery::{RecoveryContext, RecoveryMode};
use log::trace;
use std::io::Read;

const FIELD_TERMINATOR: u8 = 0x1E;
const SUBFIELD_DELIMITER: u8 = 0x1F;
const DIRECTORY_ENTRY_LEN: usize = 12;

/// Reader for ISO 2709 records.
#[derive(Debug)]
pub struct MarcReader<R: Read> {
    reader: R,
    recovery_mode: RecoveryMode,
    decoder: LegacyDecoder,
    records_read: usize,
    recoveries: Vec<String>,
}

impl<R: Read> MarcReader<R> {
    /// Reader with the MARC-8 decoder (NFC output, `<U+XXXX>` expansion) and
    /// strict recovery.
    pub fn new(reader: R) -> Self {
        MarcReader {
            reader,
            recovery_mode: RecoveryMode::Strict,
            decoder: LegacyDecoder::new(CharsetFamily::Marc8)
                .with_compose(true)
                .with_convert_unicode_sequences(true),
            records_read: 0,
            recoveries: Vec::new(),
        }
    }

    /// Decoder used for records whose leader says MARC-8.
    ///
    /// ```
    /// use marc_charconv::charset::{CharsetFamily, LegacyDecoder};
    /// use marc_charconv::MarcReader;
    /// use std::io::Cursor;
    ///
    /// let reader = MarcReader::new(Cursor::new(Vec::new()))
    ///     .with_decoder(LegacyDecoder::new(CharsetFamily::Marc8));
    /// ```
    #[must_use]
    pub fn with_decoder(mut self, decoder: LegacyDecoder) -> Self {
        self.decoder = decoder;
        self
    }

    /// How malformed records are handled.
    #[must_use]
    pub fn with_recovery_mode(mut self, mode: RecoveryMode) -> Self {
        self.recovery_mode = mode;
        self
    }

    /// Number of records returned so far.
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Problems skipped in the most recent record (lenient mode only).
    #[must_use]
    pub fn recoveries(&self) -> &[String] {
        &self.recoveries
    }

    /// Read the next record, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the leader is invalid or an I/O error occurs. In
    /// strict mode any malformed directory entry, field, truncated body or
    /// invalid UTF-8 value is an error too.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        let mut leader_bytes = [0u8; LEADER_LEN];
        match self.reader.read_exact(&mut leader_bytes) {
            Ok(()) => {},
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(MarcError::IoError(e)),
        }

        let leader = Leader::from_bytes(&leader_bytes)?;
        leader.validate_for_reading()?;

        let body_len = leader.record_length as usize - LEADER_LEN;
        let mut body = Vec::with_capacity(body_len);
        self.reader
            .by_ref()
            .take(body_len as u64)
            .read_to_end(&mut body)?;

        let mut ctx = RecoveryContext::new(self.recovery_mode);
        if body.len() < body_len {
            ctx.recover(
                MarcError::TruncatedRecord(format!(
                    "expected {body_len} bytes after the leader, got {}",
                    body.len()
                )),
                "Record body",
            )?;
        }

        let encoding = match leader.encoding() {
            Ok(encoding) => encoding,
            Err(e) => {
                ctx.recover(e, "Leader position 9")?;
                MarcEncoding::Utf8
            },
        };

        let split = (leader.data_base_address as usize - LEADER_LEN).min(body.len());
        let (directory, data) = body.split_at(split);
        let mut record = Record::new(leader);

        for chunk in directory.chunks(DIRECTORY_ENTRY_LEN) {
            if chunk[0] == FIELD_TERMINATOR {
                break;
            }
            if chunk.len() < DIRECTORY_ENTRY_LEN {
                ctx.recover(
                    MarcError::InvalidRecord("Incomplete directory entry".to_string()),
                    "Directory",
                )?;
                break;
            }

            let tag = String::from_utf8_lossy(&chunk[0..3]).into_owned();
            let (length, start) = match (parse_digits(&chunk[3..7]), parse_digits(&chunk[7..12])) {
                (Ok(length), Ok(start)) => (length, start),
                (Err(e), _) | (_, Err(e)) => {
                    ctx.recover(e, &format!("Directory entry {tag}"))?;
                    continue;
                },
            };

            let end = start + length;
            if end > data.len() {
                ctx.recover(
                    MarcError::InvalidRecord(format!("Field {tag} exceeds data area")),
                    &format!("Tag {tag}"),
                )?;
            }
            let Some(mut field_bytes) = data.get(start..end.min(data.len())) else {
                continue;
            };
            if let Some((&FIELD_TERMINATOR, rest)) = field_bytes.split_last() {
                field_bytes = rest;
            }

            if is_control_tag(&tag) {
                let value = self.decode_value(field_bytes, encoding, &mut ctx)?;
                record.add_control_field(tag, value);
            } else {
                match self.parse_data_field(field_bytes, &tag, encoding, &mut ctx) {
                    Ok(field) => record.add_field(field),
                    Err(e) => ctx.recover(e, &format!("Tag {tag}"))?,
                }
            }
        }

        trace!(
            "Read record {} ({encoding:?}, {} fields)",
            self.records_read,
            record.fields().count()
        );
        self.records_read += 1;
        self.recoveries = ctx.into_messages();
        Ok(Some(record))
    }

    fn decode_value(
        &self,
        bytes: &[u8],
        encoding: MarcEncoding,
        ctx: &mut RecoveryContext,
    ) -> Result<String> {
        match encoding {
            MarcEncoding::Marc8 => Ok(self.decoder.decode(bytes)),
            MarcEncoding::Utf8 => match std::str::from_utf8(bytes) {
                Ok(s) => Ok(s.to_string()),
                Err(e) => {
                    ctx.recover(
                        MarcError::EncodingError(format!("Invalid UTF-8: {e}")),
                        "Data element",
                    )?;
                    Ok(String::from_utf8_lossy(bytes).into_owned())
                },
            },
        }
    }

    fn parse_data_field(
        &self,
        bytes: &[u8],
        tag: &str,
        encoding: MarcEncoding,
        ctx: &mut RecoveryContext,
    ) -> Result<Field> {
        let [indicator1, indicator2, rest @ ..] = bytes else {
            return Err(MarcError::InvalidField(
                "Data field too short (needs indicators)".to_string(),
            ));
        };

        let mut field = Field::new(tag.to_string(), char::from(*indicator1), char::from(*indicator2));
        let mut parts = rest.split(|&b| b == SUBFIELD_DELIMITER);
        if parts.next().is_some_and(|lead| !lead.is_empty()) {
            return Err(MarcError::InvalidField(
                "Expected subfield delimiter".to_string(),
            ));
        }

        for part in parts {
            let Some((&code, value)) = part.split_first() else {
                ctx.recover(
                    MarcError::InvalidField("Subfield delimiter without a code".to_string()),
                    &format!("Tag {tag}"),
                )?;
                continue;
            };
            let value = self.decode_value(value, encoding, ctx)?;
            field.add_subfield(char::from(code), value);
        }

        Ok(field)
    }
}

impl<R: Read> Iterator for MarcReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}

/// Parse a fixed-width ASCII number from a directory entry.
fn parse_digits(bytes: &[u8]) -> Result<usize> {
    bytes.iter().try_fold(0usize, |acc, &b| {
        if b.is_ascii_digit() {
            Ok(acc * 10 + usize::from(b - b'0'))
        } else {
            Err(MarcError::InvalidRecord(format!(
                "Invalid numeric field: '{}'",
                String::from_utf8_lossy(bytes)
            )))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const RECORD_TERMINATOR: u8 = 0x1D;

    /// Assemble a record from raw (already encoded) fields.
    fn build(coding: u8, fields: &[(&str, Vec<u8>)]) -> Vec<u8> {
        let mut directory = Vec::new();
        let mut data = Vec::new();
        for (tag, body) in fields {
            let mut body = body.clone();
            body.push(FIELD_TERMINATOR);
            directory.extend_from_slice(tag.as_bytes());
            directory.extend_from_slice(format!("{:04}{:05}", body.len(), data.len()).as_bytes());
            data.extend_from_slice(&body);
        }
        directory.push(FIELD_TERMINATOR);
        let base = LEADER_LEN + directory.len();
        let length = base + data.len() + 1;

        let mut bytes = format!("{length:05}nam ").into_bytes();
        bytes.push(coding);
        bytes.extend_from_slice(format!("22{base:05} a 4500").as_bytes());
        bytes.extend_from_slice(&directory);
        bytes.extend_from_slice(&data);
        bytes.push(RECORD_TERMINATOR);
        bytes
    }

    fn data_field(ind: &[u8; 2], subfields: &[(u8, &[u8])]) -> Vec<u8> {
        let mut out = ind.to_vec();
        for (code, value) in subfields {
            out.push(SUBFIELD_DELIMITER);
            out.push(*code);
            out.extend_from_slice(value);
        }
        out
    }

    #[test]
    fn test_read_utf8_record() {
        let bytes = build(
            b'a',
            &[
                ("001", b"12345".to_vec()),
                ("245", data_field(b"10", &[(b'a', "Dvořák".as_bytes())])),
            ],
        );
        let mut reader = MarcReader::new(Cursor::new(bytes));
        let record = reader.read_record().unwrap().unwrap();

        assert_eq!(record.leader.character_coding, 'a');
        assert_eq!(record.get_control_field("001"), Some("12345"));
        let field = record.get_field("245").unwrap();
        assert_eq!(field.indicator1, '1');
        assert_eq!(field.indicator2, '0');
        assert_eq!(field.get_subfield('a'), Some("Dvořák"));
        assert!(reader.read_record().unwrap().is_none());
        assert_eq!(reader.records_read(), 1);
    }

    #[test]
    fn test_read_marc8_record_decodes_values() {
        let bytes = build(
            b' ',
            &[(
                "245",
                data_field(b"10", &[(b'a', b"Dvo\xE9r\xE2ak"), (b'b', b"\x1B(Sabd\x1B(B")]),
            )],
        );
        let record = MarcReader::new(Cursor::new(bytes))
            .read_record()
            .unwrap()
            .unwrap();
        let field = record.get_field("245").unwrap();
        assert_eq!(field.get_subfield('a'), Some("Dvořák"));
        assert_eq!(field.get_subfield('b'), Some("\u{03B1}\u{03B2}\u{03B3}"));
    }

    #[test]
    fn test_custom_decoder_is_used() {
        let bytes = build(b' ', &[("500", data_field(b"  ", &[(b'a', b"\xE2e")]))]);
        let record = MarcReader::new(Cursor::new(bytes))
            .with_decoder(LegacyDecoder::new(CharsetFamily::Marc8))
            .read_record()
            .unwrap()
            .unwrap();
        // no composition
        assert_eq!(
            record.get_field("500").unwrap().get_subfield('a'),
            Some("e\u{0301}")
        );
    }

    #[test]
    fn test_iterator() {
        let mut bytes = Vec::new();
        for _ in 0..3 {
            bytes.extend(build(b'a', &[("245", data_field(b"00", &[(b'a', b"Title")]))]));
        }
        let reader = MarcReader::new(Cursor::new(bytes));
        let records: Vec<_> = reader.collect::<Result<_>>().unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_truncated_record_strict_and_lenient() {
        let mut bytes = build(
            b'a',
            &[
                ("001", b"12345".to_vec()),
                ("245", data_field(b"10", &[(b'a', b"A long title")])),
            ],
        );
        bytes.truncate(bytes.len() - 8);

        let err = MarcReader::new(Cursor::new(bytes.clone()))
            .read_record()
            .unwrap_err();
        assert!(matches!(err, MarcError::TruncatedRecord(_)));

        let mut reader =
            MarcReader::new(Cursor::new(bytes)).with_recovery_mode(RecoveryMode::Lenient);
        let record = reader.read_record().unwrap().unwrap();
        assert_eq!(record.get_control_field("001"), Some("12345"));
        assert!(!reader.recoveries().is_empty());
    }

    #[test]
    fn test_invalid_utf8_strict_and_lenient() {
        let bytes = build(b'a', &[("500", data_field(b"  ", &[(b'a', b"bad \xFF")]))]);

        let err = MarcReader::new(Cursor::new(bytes.clone()))
            .read_record()
            .unwrap_err();
        assert!(matches!(err, MarcError::EncodingError(_)));

        let record = MarcReader::new(Cursor::new(bytes))
            .with_recovery_mode(RecoveryMode::Lenient)
            .read_record()
            .unwrap()
            .unwrap();
        assert_eq!(
            record.get_field("500").unwrap().get_subfield('a'),
            Some("bad \u{FFFD}")
        );
    }

    #[test]
    fn test_missing_subfield_delimiter() {
        let bytes = build(b'a', &[("245", b"10no delimiter".to_vec())]);
        let err = MarcReader::new(Cursor::new(bytes.clone()))
            .read_record()
            .unwrap_err();
        assert!(matches!(err, MarcError::InvalidField(_)));

        let mut reader =
            MarcReader::new(Cursor::new(bytes)).with_recovery_mode(RecoveryMode::Lenient);
        let record = reader.read_record().unwrap().unwrap();
        assert!(record.get_field("245").is_none());
        assert_eq!(reader.recoveries().len(), 1);
    }

    #[test]
    fn test_unknown_coding_scheme() {
        let bytes = build(b'z', &[("500", data_field(b"  ", &[(b'a', b"text")]))]);
        let err = MarcReader::new(Cursor::new(bytes.clone()))
            .read_record()
            .unwrap_err();
        assert!(matches!(err, MarcError::EncodingError(_)));

        let record = MarcReader::new(Cursor::new(bytes))
            .with_recovery_mode(RecoveryMode::Lenient)
            .read_record()
            .unwrap()
            .unwrap();
        assert_eq!(record.get_field("500").unwrap().get_subfield('a'), Some("text"));
    }

    #[test]
    fn test_eof_returns_none() {
        let mut reader = MarcReader::new(Cursor::new(Vec::new()));
        assert!(reader.read_record().unwrap().is_none());
    }

    #[test]
    fn test_malformed_leader_lengths() {
        let mut reader = MarcReader::new(Cursor::new(b"00010nam a2200025 i 4500".to_vec()));
        let err = reader.read_record().unwrap_err().to_string();
        assert!(err.contains("Record length must be at least 24"), "got: {err}");
    }
}
