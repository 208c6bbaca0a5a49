//! End-to-end conversion behaviour of the MARC-8 family.

use marc_charconv::charset::{
    CharsetFamily, CharsetId, LegacyDecoder, LegacyEncoder, NcrFormat, ReverseTableKind,
};

fn decoder() -> LegacyDecoder {
    LegacyDecoder::new(CharsetFamily::Marc8)
}

fn encoder() -> LegacyEncoder {
    LegacyEncoder::new(CharsetFamily::Marc8)
}

fn escape_count(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b == 0x1B).count()
}

#[test]
fn test_ansel_ligatures_and_decomposed_grave() {
    let bytes = encoder().encode("\u{00C6}\u{0152}A\u{0300}");
    assert_eq!(bytes, b"\xA5\xA6\xE1A");
}

#[test]
fn test_ascii_round_trips_through_every_family() {
    let text = "The quick brown fox (1999) -- 100% [sic]!";
    for family in [
        CharsetFamily::Marc8,
        CharsetFamily::Iso5426,
        CharsetFamily::Iso6937,
        CharsetFamily::Unimarc,
    ] {
        let bytes = LegacyEncoder::new(family).encode(text);
        assert_eq!(bytes, text.as_bytes(), "{family:?}");
        assert_eq!(LegacyDecoder::new(family).decode(&bytes), text, "{family:?}");
    }
}

#[test]
fn test_unicode_sequence_toggle() {
    let input = b"gold <U+91D1> and &#x91D1;";
    assert_eq!(
        decoder().with_convert_unicode_sequences(true).decode(input),
        "gold \u{91D1} and \u{91D1}"
    );
    assert_eq!(
        decoder().decode(input),
        "gold <U+91D1> and &#x91D1;"
    );
}

#[test]
fn test_cjk_run_then_ascii() {
    let decoded = decoder().decode(b"\x1B$1\x21\x23\x20\x21\x23\x28\x1B(Bok");
    assert_eq!(decoded, "\u{3000}\u{FF08}ok");
}

#[test]
fn test_greek_in_g1_then_ascii() {
    // Greek read through GR, ASCII before and after
    let decoded = decoder().decode(b"a \x1B)S\xE1\xE2\xE4\x1B(B b");
    assert_eq!(decoded, "a \u{03B1}\u{03B2}\u{03B3} b");
}

#[test]
fn test_combining_marks_reorder_both_ways() {
    let decoded = decoder().decode(b"\xE2e");
    assert_eq!(decoded, "e\u{0301}");
    assert_eq!(encoder().encode(&decoded), b"\xE2e");
}

#[test]
fn test_run_in_active_set_needs_no_escapes() {
    let bytes = encoder().encode("\u{03B1}\u{03B2}\u{03B3}\u{03B4}\u{03B5}");
    // one designation in, one back to ASCII at the end
    assert_eq!(escape_count(&bytes), 2);
    assert_eq!(&bytes[3..8], b"abdef");

    let bytes = encoder().encode("Sobranie \u{0436}\u{0436}\u{0436} sochinenii");
    assert_eq!(escape_count(&bytes), 2);
}

#[test]
fn test_unmapped_byte_passes_through_and_back() {
    // 0xAF has no ANSEL assignment
    let decoded = decoder().decode(b"a\xAFb");
    assert_eq!(decoded, "a\u{00AF}b");
    let bytes = encoder().with_decompose(false).encode(&decoded);
    assert_eq!(bytes, b"a\xAFb");

    // ANSEL leaves 0xC9 and 0xD1 unassigned, so their characters stay whole
    let decoded = decoder().decode(b"Caf\xC9 \xD1u\xE2e");
    assert_eq!(decoded, "Caf\u{00C9} \u{00D1}ue\u{0301}");
    assert_eq!(encoder().encode(&decoded), b"Caf\xC9 \xD1u\xE2e");
}

#[test]
fn test_cjk_ideographs_and_extended_arabic() {
    let decoded = decoder().decode(b"\x1B$1\x21\x30\x21\x21\x4F\x5C\x1B(B");
    assert_eq!(decoded, "\u{4E00}\u{91D1}");
    assert_eq!(
        encoder().encode(&decoded),
        b"\x1B$1\x21\x30\x21\x21\x4F\x5C\x1B(B"
    );

    // Persian peh and gaf read through G1
    let text = "\u{067E}\u{06AF} ok";
    let bytes = encoder().encode(text);
    assert_eq!(bytes, b"\x1B)4\xA9\xDB ok\x1B)E");
    assert_eq!(decoder().decode(&bytes), text);
}

#[test]
fn test_unrepresentable_characters_survive_as_references() {
    for format in [NcrFormat::UnicodeSequence, NcrFormat::Xml] {
        let text = "Tokyo \u{6771}\u{4EAC} \u{1F600}";
        let bytes = encoder().with_ncr_format(format).encode(text);
        assert!(bytes.is_ascii(), "{format:?}");
        let decoded = decoder().with_convert_unicode_sequences(true).decode(&bytes);
        assert_eq!(decoded, text, "{format:?}");
    }
}

#[test]
fn test_scripts_mixed_in_one_element() {
    let text = "Dvořák: \u{0416}\u{0438}\u{0437}\u{043D}\u{044C} / \u{05E9}\u{05DC}\u{05D5}\u{05DD} / \u{03B2}\u{03AF}\u{03BF}\u{03C2}";
    let bytes = encoder().encode(text);
    let decoded = decoder().with_compose(true).decode(&bytes);
    assert_eq!(decoded, text);
}

#[test]
fn test_elements_decode_independently() {
    let mut encoder = encoder();
    let first = encoder.encode("\u{03B1}");
    let second = encoder.encode("a");
    // state is restored at the end of every element
    assert_eq!(second, b"a");
    assert_eq!(decoder().decode(&first), "\u{03B1}");
    assert_eq!(encoder.charsets_used(), [CharsetId::BASIC_GREEK]);
}

#[test]
fn test_static_and_hashed_reverse_tables_agree() {
    let text = "Ætna, Dvořák, \u{0416}, \u{05D0}, \u{0627}, H\u{2082}O, \u{3000}, \u{91D1}";
    let hashed = LegacyEncoder::with_kind(CharsetFamily::Marc8, ReverseTableKind::Hashed).encode(text);
    let scanned = LegacyEncoder::with_kind(CharsetFamily::Marc8, ReverseTableKind::Static).encode(text);
    assert_eq!(hashed, scanned);
}

#[test]
fn test_double_width_diacritics() {
    // ligature over "ts", decomposed as U+0361 between the letters
    let bytes = encoder().encode("t\u{0361}s");
    assert_eq!(bytes, b"\xEBt\xECs");
    let decoded = decoder().decode(&bytes);
    assert_eq!(decoded, "t\u{FE20}s\u{FE21}");
}

#[test]
fn test_truncated_and_unknown_escapes_do_not_panic() {
    assert_eq!(decoder().decode(b"abc\x1B"), "abc");
    assert_eq!(decoder().decode(b"abc\x1B("), "abc");
    // a set the table lacks reads every byte as itself
    assert_eq!(decoder().decode(b"a\x1B(\x7Eb"), "ab");
    assert_eq!(decoder().decode(b"\x1B)Z\xE1a"), "\u{00E1}a");
}

#[test]
fn test_nfd_encoding_splits_everything() {
    // U+01A0 has its own ANSEL code; encode_nfd splits it anyway
    assert_eq!(encoder().encode("\u{01A0}"), b"\xAC");
    assert_eq!(encoder().encode_nfd("\u{01A0}"), b"O<U+031B>");
}
