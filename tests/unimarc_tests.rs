//! UNIMARC register configuration and the ISO 5426 / ISO 6937 families.

use marc_charconv::charset::{
    unimarc_registers, CharsetFamily, CharsetId, LegacyDecoder, LegacyEncoder, Register, Slot,
};
use marc_charconv::MarcError;

fn round_trip(family: CharsetFamily, text: &str) -> String {
    let bytes = LegacyEncoder::new(family).encode(text);
    LegacyDecoder::new(family).with_compose(true).decode(&bytes)
}

#[test]
fn test_registers_from_set_codes() {
    let regs = unimarc_registers(["01", "03", "05", "02"]).unwrap();
    assert_eq!(regs.get(Register::G0), Some(Slot::single(CharsetId::BASIC_LATIN)));
    assert_eq!(regs.get(Register::G1), Some(Slot::single(CharsetId::ISO_5426)));
    assert_eq!(regs.get(Register::G2), Some(Slot::single(CharsetId::BASIC_GREEK)));
    assert_eq!(regs.get(Register::G3), Some(Slot::single(CharsetId::BASIC_CYRILLIC)));
}

#[test]
fn test_alternate_iso_5426_code() {
    let a = unimarc_registers(["01", "03", "  ", "  "]).unwrap();
    let b = unimarc_registers(["01", "11", "  ", "  "]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_unknown_set_code_is_a_configuration_error() {
    let err = unimarc_registers(["01", "03", "99", "  "]).unwrap_err();
    assert!(matches!(err, MarcError::CodeTable(_)));
    assert!(err.to_string().contains("99"), "got: {err}");
}

#[test]
fn test_greek_round_trip_with_designated_g2() {
    let regs = unimarc_registers(["01", "03", "05", "  "]).unwrap();
    let mut encoder = LegacyEncoder::new(CharsetFamily::Unimarc).with_defaults(regs);
    let decoder = LegacyDecoder::new(CharsetFamily::Unimarc).with_defaults(regs);

    let text = "Odyssey \u{039F}\u{0394}\u{03A5}\u{03A3}\u{03A3}\u{0395}\u{0399}\u{0391} end";
    let bytes = encoder.encode(text);
    // G2 is already designated, only shifts are needed
    assert!(!bytes.windows(2).any(|w| w == b"\x1B*"));
    assert_eq!(decoder.decode(&bytes), text);
}

#[test]
fn test_designations_appear_when_registers_are_empty() {
    let text = "\u{0416}\u{0443}\u{0440}\u{043D}\u{0430}\u{043B} \u{0391}";
    let bytes = LegacyEncoder::new(CharsetFamily::Unimarc).encode(text);
    assert!(bytes.windows(3).any(|w| w == b"\x1B*N" || w == b"\x1B+N"));
    assert_eq!(round_trip(CharsetFamily::Unimarc, text), text);
}

#[test]
fn test_accented_latin_in_extended_families() {
    let text = "Caf\u{00E9} \u{00FC}ber na\u{00EF}ve \u{00C5}ngstr\u{00F6}m";
    for family in [CharsetFamily::Iso5426, CharsetFamily::Iso6937, CharsetFamily::Unimarc] {
        assert_eq!(round_trip(family, text), text, "{family:?}");
    }
}

#[test]
fn test_iso_5426_marks_precede_base() {
    let bytes = LegacyEncoder::new(CharsetFamily::Iso5426).encode("\u{00E9}");
    assert_eq!(bytes.len(), 2);
    assert_eq!(bytes[1], b'e');
    assert!(bytes[0] >= 0xC0);
}

#[test]
fn test_shift_bytes_ignored_outside_unimarc() {
    let decoder = LegacyDecoder::new(CharsetFamily::Iso5426);
    assert_eq!(decoder.decode(b"a\x0Eb\x0Fc"), "a\u{000E}b\u{000F}c");
}

#[test]
fn test_characters_outside_every_set_become_references() {
    let mut encoder = LegacyEncoder::new(CharsetFamily::Unimarc);
    let bytes = encoder.encode("a\u{0391}\u{4E00}");
    assert!(bytes.ends_with(b"<U+4E00>"), "{bytes:02X?}");
    let decoded = LegacyDecoder::new(CharsetFamily::Unimarc)
        .with_convert_unicode_sequences(true)
        .decode(&bytes);
    assert_eq!(decoded, "a\u{0391}\u{4E00}");
}
