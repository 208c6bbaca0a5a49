//! Property-based checks of the converters.

use marc_charconv::charset::{CharsetFamily, LegacyDecoder, LegacyEncoder, ReverseTableKind};
use proptest::prelude::*;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const FAMILIES: [CharsetFamily; 4] = [
    CharsetFamily::Marc8,
    CharsetFamily::Iso5426,
    CharsetFamily::Iso6937,
    CharsetFamily::Unimarc,
];

/// Characters MARC-8 represents directly, already in NFC.
fn marc8_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        'a', 'Z', '0', ' ', '.', '-', '(', ')', '\u{00C6}', '\u{00E6}', '\u{0152}', '\u{00D8}',
        '\u{0141}', '\u{0142}', '\u{00E9}', '\u{00E8}', '\u{00FC}', '\u{00F1}', '\u{0159}',
        '\u{00E1}', '\u{0107}', '\u{03B1}', '\u{03B2}', '\u{03B3}', '\u{03A9}', '\u{0436}',
        '\u{0416}', '\u{0439}', '\u{0491}', '\u{05D0}', '\u{05E9}', '\u{0627}', '\u{2082}',
        '\u{00B2}', '\u{3000}',
    ])
}

/// ANSEL spacing characters.
const ANSEL_SPACING: &[u8] = &[
    0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9, 0xAA, 0xAB, 0xAC, 0xAD, 0xAE, 0xB0,
    0xB1, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8, 0xB9, 0xBA, 0xBC, 0xBD, 0xC0, 0xC1, 0xC2,
    0xC3, 0xC4, 0xC5, 0xC6, 0xC7, 0xC8,
];

/// ANSEL combining marks, double-width halves excluded.
const ANSEL_MARKS: &[u8] = &[
    0xE0, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xED, 0xEE, 0xEF, 0xF0,
    0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7, 0xF8, 0xF9, 0xFE,
];

/// High bytes ANSEL leaves unmapped whose Latin-1 character no MARC-8 set encodes.
const UNMAPPED: &[u8] = &[
    0xA0, 0xAF, 0xBE, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4,
    0xD5, 0xD6, 0xD7, 0xD9, 0xDA, 0xDB, 0xDC, 0xDD, 0xFC, 0xFD, 0xFF,
];

/// One MARC-8 unit: an ASCII byte, an ANSEL spacing character, a mark with
/// its base letter, or an unmapped byte.
fn marc8_unit() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        (0x20u8..=0x7E).prop_map(|b| vec![b]),
        prop::sample::select(ANSEL_SPACING).prop_map(|b| vec![b]),
        (prop::sample::select(ANSEL_MARKS), b'a'..=b'z').prop_map(|(mark, base)| vec![mark, base]),
        prop::sample::select(UNMAPPED).prop_map(|b| vec![b]),
    ]
}

/// Text the round trip is expected to preserve up to normalization.
fn printable_text() -> impl Strategy<Value = String> {
    "\\PC{0,24}".prop_filter("no leading mark, no references, no double-width halves", |s| {
        let leading_mark = s.nfd().next().is_some_and(is_combining_mark);
        !leading_mark
            && !s.contains(|c| {
                matches!(c, '<' | '&' | '\u{0360}' | '\u{0361}' | '\u{FE20}'..='\u{FE23}')
            })
    })
}

proptest! {
    #[test]
    fn prop_decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        for family in FAMILIES {
            let _ = LegacyDecoder::new(family)
                .with_compose(true)
                .with_convert_unicode_sequences(true)
                .decode(&bytes);
        }
    }

    #[test]
    fn prop_ascii_is_unchanged(text in "[ -~]{0,64}") {
        for family in FAMILIES {
            let bytes = LegacyEncoder::new(family).encode(&text);
            prop_assert_eq!(&bytes, text.as_bytes());
            prop_assert_eq!(LegacyDecoder::new(family).decode(&bytes), text.clone());
        }
    }

    #[test]
    fn prop_marc8_round_trip(chars in prop::collection::vec(marc8_char(), 0..40)) {
        let text: String = chars.into_iter().collect();
        let bytes = LegacyEncoder::new(CharsetFamily::Marc8).encode(&text);
        let decoded = LegacyDecoder::new(CharsetFamily::Marc8).with_compose(true).decode(&bytes);
        prop_assert_eq!(decoded, text);
    }

    #[test]
    fn prop_marc8_bytes_round_trip(units in prop::collection::vec(marc8_unit(), 0..32)) {
        let bytes = units.concat();
        let text = LegacyDecoder::new(CharsetFamily::Marc8).decode(&bytes);
        prop_assert_eq!(LegacyEncoder::new(CharsetFamily::Marc8).encode(&text), bytes);
    }

    #[test]
    fn prop_any_text_survives_with_references(text in printable_text()) {
        let bytes = LegacyEncoder::new(CharsetFamily::Marc8).encode(&text);
        let decoded = LegacyDecoder::new(CharsetFamily::Marc8)
            .with_compose(true)
            .with_convert_unicode_sequences(true)
            .decode(&bytes);
        prop_assert_eq!(decoded, text.nfc().collect::<String>());
    }

    #[test]
    fn prop_reverse_table_kinds_agree(chars in prop::collection::vec(marc8_char(), 0..40)) {
        let text: String = chars.into_iter().collect();
        let hashed = LegacyEncoder::with_kind(CharsetFamily::Marc8, ReverseTableKind::Hashed).encode(&text);
        let scanned = LegacyEncoder::with_kind(CharsetFamily::Marc8, ReverseTableKind::Static).encode(&text);
        prop_assert_eq!(hashed, scanned);
    }
}
