#![allow(missing_docs)]
//! Benchmarks for character set conversion and the record codec.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use marc_charconv::charset::{CharsetFamily, LegacyDecoder, LegacyEncoder, ReverseTableKind};
use marc_charconv::{Field, Leader, MarcReader, MarcWriter, Record};
use std::io::Cursor;

const LATIN: &str = "Dvořák, Antonín, 1841-1904. Œuvres complètes / Ætna Press, São Paulo.";
const MIXED: &str = "Собрание сочинений / Η καλή ζωή / H₂O, x² / 金 / שלום";

fn sample_record() -> Record {
    Record::builder(Leader::default())
        .control_field_str("001", "ocm00012345")
        .field(
            Field::builder("100".to_string(), '1', ' ')
                .subfield_str('a', "Dvořák, Antonín,")
                .build(),
        )
        .field(
            Field::builder("245".to_string(), '1', '0')
                .subfield_str('a', LATIN)
                .subfield_str('b', MIXED)
                .build(),
        )
        .build()
}

/// Encoded bytes of `count` copies of the sample record.
fn record_stream(count: usize) -> Vec<u8> {
    let record = sample_record();
    let mut buffer = Vec::new();
    let mut writer = MarcWriter::new(&mut buffer);
    for _ in 0..count {
        writer.write_record(&record).expect("sample record serializes");
    }
    buffer
}

/// Benchmark encoding Latin text with ANSEL diacritics.
fn benchmark_encode_latin(c: &mut Criterion) {
    let mut encoder = LegacyEncoder::new(CharsetFamily::Marc8);
    c.bench_function("encode_marc8_latin", |b| {
        b.iter(|| encoder.encode(black_box(LATIN)));
    });
}

/// Benchmark encoding text that switches sets several times.
fn benchmark_encode_mixed(c: &mut Criterion) {
    for (name, kind) in [
        ("encode_marc8_mixed_hashed", ReverseTableKind::Hashed),
        ("encode_marc8_mixed_static", ReverseTableKind::Static),
    ] {
        let mut encoder = LegacyEncoder::with_kind(CharsetFamily::Marc8, kind);
        c.bench_function(name, |b| {
            b.iter(|| encoder.encode(black_box(MIXED)));
        });
    }
}

/// Benchmark decoding with and without NFC composition.
fn benchmark_decode(c: &mut Criterion) {
    let bytes = LegacyEncoder::new(CharsetFamily::Marc8).encode(&format!("{LATIN} {MIXED}"));
    let plain = LegacyDecoder::new(CharsetFamily::Marc8);
    let composed = LegacyDecoder::new(CharsetFamily::Marc8)
        .with_compose(true)
        .with_convert_unicode_sequences(true);

    c.bench_function("decode_marc8", |b| {
        b.iter(|| plain.decode(black_box(&bytes)));
    });
    c.bench_function("decode_marc8_nfc", |b| {
        b.iter(|| composed.decode(black_box(&bytes)));
    });
}

/// Benchmark reading 1,000 MARC-8 records.
fn benchmark_read_1k(c: &mut Criterion) {
    let stream = black_box(record_stream(1_000));
    c.bench_function("read_1k_marc8_records", |b| {
        b.iter(|| {
            let mut reader = MarcReader::new(Cursor::new(stream.as_slice()));
            let mut count = 0;
            while let Ok(Some(_record)) = reader.read_record() {
                count += 1;
            }
            count
        });
    });
}

/// Benchmark writing 1,000 MARC-8 records.
fn benchmark_write_1k(c: &mut Criterion) {
    let record = sample_record();
    c.bench_function("write_1k_marc8_records", |b| {
        b.iter(|| {
            let mut buffer = Vec::new();
            let mut writer = MarcWriter::new(&mut buffer);
            for _ in 0..1_000 {
                writer.write_record(black_box(&record)).expect("write");
            }
            buffer.len()
        });
    });
}

criterion_group!(
    benches,
    benchmark_encode_latin,
    benchmark_encode_mixed,
    benchmark_decode,
    benchmark_read_1k,
    benchmark_write_1k,
);
criterion_main!(benches);
