//! Common test helpers shared across the integration tests.

#![allow(dead_code)]

use marc_charconv::{Field, Leader, MarcEncoding, MarcReader, MarcWriter, Record};
use std::io::Cursor;

/// A small custom code table: one CJK set and a replacement Greek set.
pub const CUSTOM_TABLE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<codeTables>
  <codeTable name="East Asian subset" number="1">
    <characterSet ISOcode="31">
      <code><marc>213021</marc><ucs>4E00</ucs><name>ONE</name></code>
      <code><marc>214F5C</marc><ucs>91D1</ucs><name>GOLD</name></code>
      <code><marc>212320</marc><ucs>3000</ucs><name>IDEOGRAPHIC SPACE</name></code>
    </characterSet>
  </codeTable>
  <codeTable name="Greek subset" number="2">
    <characterSet ISOcode="53">
      <code><marc>61</marc><ucs>03B1</ucs></code>
      <code><marc>62</marc><ucs>03B2</ucs></code>
      <code><marc>22</marc><ucs>0301</ucs><isCombining>true</isCombining></code>
    </characterSet>
  </codeTable>
</codeTables>"#;

/// Leader for a record in the given encoding.
pub fn leader(encoding: MarcEncoding) -> Leader {
    let mut leader = Leader::default();
    leader.set_encoding(encoding);
    leader
}

/// A bibliographic record carrying a mix of scripts.
pub fn multilingual_record(encoding: MarcEncoding) -> Record {
    Record::builder(leader(encoding))
        .control_field_str("001", "ocm00012345")
        .control_field_str("008", "850101s1985    xx a          000 0 eng d")
        .field(
            Field::builder("100".to_string(), '1', ' ')
                .subfield_str('a', "Dvořák, Antonín,")
                .subfield_str('d', "1841-1904.")
                .build(),
        )
        .field(
            Field::builder("245".to_string(), '1', '0')
                .subfield_str('a', "Œuvres complètes /")
                .subfield_str('c', "Ætna Press.")
                .build(),
        )
        .field(
            Field::builder("246".to_string(), '3', '1')
                .subfield_str('a', "Η καλή ζωή")
                .build(),
        )
        .field(
            Field::builder("880".to_string(), '1', '0')
                .subfield_str('6', "245-01")
                .subfield_str('a', "Собрание сочинений")
                .build(),
        )
        .field(
            Field::builder("500".to_string(), ' ', ' ')
                .subfield_str('a', "Formula H₂O, x², gold 龍.")
                .build(),
        )
        .build()
}

/// Serialize records with a default writer.
pub fn write_records(records: &[Record]) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut writer = MarcWriter::new(&mut buffer);
    for record in records {
        writer.write_record(record).expect("record should serialize");
    }
    writer.finish().expect("flush");
    buffer
}

/// Parse every record with a default reader.
pub fn read_records(bytes: &[u8]) -> Vec<Record> {
    MarcReader::new(Cursor::new(bytes.to_vec()))
        .collect::<Result<_, _>>()
        .expect("records should parse")
}

/// Subfield values of a record, in order, for comparisons that ignore lengths.
pub fn values(record: &Record) -> Vec<String> {
    record.values().map(str::to_string).collect()
}
