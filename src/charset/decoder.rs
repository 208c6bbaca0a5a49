//! Legacy bytes to Unicode.
//!
//! [`LegacyDecoder`] runs the ISO 2022 register state machine over one data
//! element at a time. Register state starts from the decoder's defaults on
//! every call, so each element is interpreted independently.

use super::code_table::{CodeTable, TableEntry};
use super::ncr::{compose, expand_ncrs};
use super::registers::{
    parse_escape, Control, Escape, Register, RegisterModel, Registers, Side, ESC, SI, SO,
};
use super::CharsetFamily;
use crate::error::Result;
use log::{trace, warn};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::path::Path;
use std::sync::Arc;

/// Post-processing applied to decoded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderOptions {
    /// Apply canonical composition (NFC) to the result.
    pub compose: bool,
    /// Replace `<U+XXXX>` and `&#xXXXX;` with the characters they name.
    pub convert_unicode_sequences: bool,
}

impl DecoderOptions {
    /// Set NFC composition.
    #[must_use]
    pub fn with_compose(mut self, compose: bool) -> Self {
        self.compose = compose;
        self
    }

    /// Set numeric character reference expansion.
    #[must_use]
    pub fn with_convert_unicode_sequences(mut self, convert: bool) -> Self {
        self.convert_unicode_sequences = convert;
        self
    }
}

/// Converts legacy-encoded bytes to Unicode.
#[derive(Debug, Clone)]
pub struct LegacyDecoder {
    family: CharsetFamily,
    table: Arc<CodeTable>,
    model: RegisterModel,
    defaults: Registers,
    options: DecoderOptions,
}

impl LegacyDecoder {
    /// Decoder over the family's built-in table and default registers.
    #[must_use]
    pub fn new(family: CharsetFamily) -> Self {
        Self::with_table(family, family.table())
    }

    /// Decoder over a caller-supplied table.
    #[must_use]
    pub fn with_table(family: CharsetFamily, table: Arc<CodeTable>) -> Self {
        LegacyDecoder {
            family,
            table,
            model: family.register_model(),
            defaults: family.default_registers(),
            options: DecoderOptions::default(),
        }
    }

    /// Decoder whose built-in sets are overridden by a `codetables.xml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid table.
    pub fn from_path<P: AsRef<Path>>(family: CharsetFamily, path: P) -> Result<Self> {
        let custom = CodeTable::from_path(path)?;
        let table = CodeTable::clone(&family.table()).merged(custom);
        Ok(Self::with_table(family, Arc::new(table)))
    }

    /// Replace the registers each conversion starts from.
    #[must_use]
    pub fn with_defaults(mut self, defaults: Registers) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replace all options.
    #[must_use]
    pub fn with_options(mut self, options: DecoderOptions) -> Self {
        self.options = options;
        self
    }

    /// Set NFC composition of the output.
    #[must_use]
    pub fn with_compose(mut self, compose: bool) -> Self {
        self.options.compose = compose;
        self
    }

    /// Set expansion of `<U+XXXX>` / `&#xXXXX;` in the output.
    #[must_use]
    pub fn with_convert_unicode_sequences(mut self, convert: bool) -> Self {
        self.options.convert_unicode_sequences = convert;
        self
    }

    /// The family this decoder was built for.
    #[must_use]
    pub fn family(&self) -> CharsetFamily {
        self.family
    }

    /// Registers each conversion starts from.
    #[must_use]
    pub fn defaults(&self) -> Registers {
        self.defaults
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> DecoderOptions {
        self.options
    }

    /// The forward table in use.
    #[must_use]
    pub fn table(&self) -> &Arc<CodeTable> {
        &self.table
    }

    /// Decode one data element.
    ///
    /// Never fails: unmapped bytes come through as the character with the same
    /// value, unknown escapes are skipped, and a truncated escape ends the
    /// input. A set missing from the table can still be designated; every
    /// byte read through it is unmapped.
    #[must_use]
    pub fn decode(&self, bytes: &[u8]) -> String {
        let mut state = self.defaults;
        let mut out = String::with_capacity(bytes.len());
        let mut pending: SmallVec<[char; 4]> = SmallVec::new();
        let mut i = 0;

        while i < bytes.len() {
            let byte = bytes[i];

            if byte == ESC {
                match parse_escape(bytes, i) {
                    Escape::Complete {
                        control: Some(control),
                        len,
                    } => {
                        if let Control::Designate { slot, .. } = control {
                            if !self.table.contains_set(slot.id) {
                                warn!(
                                    "Designation of unknown set {} at offset {i}, its bytes pass through",
                                    slot.id
                                );
                            }
                        }
                        if state.apply(control, self.model) {
                            trace!("Escape at offset {i}: {control:?}");
                        } else {
                            trace!("Ignoring {control:?} at offset {i} under {:?}", self.model);
                        }
                        i += len;
                    },
                    Escape::Complete { control: None, len } => {
                        warn!(
                            "Skipping unrecognised escape sequence {:02X?} at offset {i}",
                            &bytes[i..i + len]
                        );
                        i += len;
                    },
                    Escape::Truncated => {
                        warn!("Truncated escape sequence at offset {i}");
                        break;
                    },
                }
                continue;
            }

            if self.model == RegisterModel::FourRegister && (byte == SI || byte == SO) {
                let register = if byte == SI {
                    Register::G0
                } else {
                    Register::G1
                };
                state.invoke(register, Side::Left);
                i += 1;
                continue;
            }

            // space and controls carry any marks queued before them
            if byte <= b' ' || byte == 0x7F {
                out.push(char::from(byte));
                out.extend(pending.drain(..));
                i += 1;
                continue;
            }

            let Some(slot) = state.active_for(byte) else {
                out.push(char::from(byte));
                out.extend(pending.drain(..));
                i += 1;
                continue;
            };

            let width = if slot.multibyte { 3 } else { 1 };
            let end = bytes.len().min(i + width);
            if let Some(offset) = bytes[i..end].iter().position(|&b| b == ESC) {
                trace!("Escape inside multi-byte group at offset {i}, passing through");
                out.extend(bytes[i..i + offset].iter().map(|&b| char::from(b)));
                out.extend(pending.drain(..));
                i += offset;
                continue;
            }
            let Some(group) = bytes.get(i..i + width) else {
                trace!("Short multi-byte group at offset {i}, passing through");
                out.extend(bytes[i..].iter().map(|&b| char::from(b)));
                break;
            };
            let code = group
                .iter()
                .fold(0u32, |acc, &b| (acc << 8) | u32::from(b));

            match self.table.entry(code, slot.id) {
                Some(TableEntry {
                    unicode: Some(ch),
                    combining: true,
                }) => pending.push(ch),
                Some(TableEntry {
                    unicode: Some(ch),
                    combining: false,
                }) => {
                    out.push(ch);
                    out.extend(pending.drain(..));
                },
                Some(TableEntry { unicode: None, .. }) => {
                    trace!("Dropping unmappable code 0x{code:X} in {}", slot.id);
                },
                None => {
                    trace!("Unmapped code 0x{code:X} in {}, passing through", slot.id);
                    out.extend(group.iter().map(|&b| char::from(b)));
                    out.extend(pending.drain(..));
                },
            }
            i += width;
        }

        // marks with no following base
        out.extend(pending);

        if self.options.convert_unicode_sequences {
            out = expand_ncrs(&out).into_owned();
        }
        if self.options.compose {
            out = compose(&out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{unimarc_registers, CharsetId, Slot};

    fn marc8() -> LegacyDecoder {
        LegacyDecoder::new(CharsetFamily::Marc8)
    }

    #[test]
    fn test_ascii() {
        assert_eq!(marc8().decode(b"Hello, World"), "Hello, World");
    }

    #[test]
    fn test_ansel_g1() {
        assert_eq!(marc8().decode(b"\xA5\xA6"), "ÆŒ");
    }

    #[test]
    fn test_combining_reorder() {
        assert_eq!(marc8().decode(b"\xE1A"), "A\u{0300}");
        assert_eq!(marc8().decode(b"\xE1\xE2A"), "A\u{0300}\u{0301}");
        assert_eq!(
            marc8().with_compose(true).decode(b"caf\xE2e"),
            "caf\u{00E9}"
        );
    }

    #[test]
    fn test_trailing_marks_are_kept() {
        assert_eq!(marc8().decode(b"a\xE1"), "a\u{0300}");
    }

    #[test]
    fn test_unmapped_byte_passes_through() {
        assert_eq!(marc8().decode(b"a\xAFb"), "a\u{00AF}b");
    }

    #[test]
    fn test_greek_g1_region() {
        let bytes = b"abc \x1B)S\xC1\xE1\x1B(B def";
        assert_eq!(marc8().decode(bytes), "abc \u{0391}\u{03B1} def");
    }

    #[test]
    fn test_greek_g0_region() {
        let bytes = b"x\x1B(Sabd\x1B(By";
        assert_eq!(marc8().decode(bytes), "x\u{03B1}\u{03B2}\u{03B3}y");
    }

    #[test]
    fn test_eacc_region() {
        let bytes = b"\x1B$1\x21\x23\x28\x1B(BA";
        assert_eq!(marc8().decode(bytes), "\u{FF08}A");
    }

    #[test]
    fn test_space_in_multibyte_mode() {
        let bytes = b"\x1B$1\x21\x23\x20 \x21\x23\x28";
        assert_eq!(marc8().decode(bytes), "\u{3000} \u{FF08}");
    }

    #[test]
    fn test_short_multibyte_group() {
        assert_eq!(marc8().decode(b"\x1B$1\x21\x23"), "!#");
    }

    #[test]
    fn test_unknown_escape_skipped() {
        assert_eq!(marc8().decode(b"a\x1BZb"), "ab");
    }

    #[test]
    fn test_designation_of_unknown_set_passes_bytes_through() {
        // ISO 5426 tables carry no Greek set
        let decoder = LegacyDecoder::new(CharsetFamily::Iso5426);
        assert_eq!(decoder.decode(b"\x1B(Sab"), "ab");
        assert_eq!(marc8().decode(b"\x1B(~a\x1B(Sa"), "a\u{03B1}");
        // ANSEL no longer reads 0xA1 once G1 holds an unknown set
        assert_eq!(marc8().decode(b"\x1B)Z\xA1\xA2\x1B)E\xA1"), "\u{00A1}\u{00A2}\u{0141}");
    }

    #[test]
    fn test_extended_arabic_g1_region() {
        let bytes = b"\x1B)4\xA9\xDB\x1B)E\xA1";
        assert_eq!(marc8().decode(bytes), "\u{067E}\u{06AF}\u{0141}");
    }

    #[test]
    fn test_eacc_ideographs_and_kana() {
        let bytes = b"\x1B$1\x21\x30\x21\x21\x4F\x5C\x69\x24\x2B\x1B(B";
        assert_eq!(marc8().decode(bytes), "\u{4E00}\u{91D1}\u{304B}");
    }

    #[test]
    fn test_escape_inside_multibyte_group() {
        assert_eq!(marc8().decode(b"\x1B$1\x21\x1B(Babc"), "!abc");
        assert_eq!(
            marc8().decode(b"\x1B$1\x21\x30\x1B(B\x1B$1\x21\x30\x21\x1B(Bz"),
            "!0\u{4E00}z"
        );
    }

    #[test]
    fn test_truncated_escape_stops() {
        assert_eq!(marc8().decode(b"Text\x1B("), "Text");
        assert_eq!(marc8().decode(b"Text\x1B"), "Text");
    }

    #[test]
    fn test_technique_one_escapes() {
        assert_eq!(marc8().decode(b"H\x1Bb2\x1BsO"), "H\u{2082}O");
        assert_eq!(marc8().decode(b"x\x1Bp2"), "x\u{00B2}");
        assert_eq!(marc8().decode(b"\x1Bgabc"), "\u{03B1}\u{03B2}\u{03B3}");
    }

    #[test]
    fn test_two_register_ignores_shifts() {
        // ESC n would invoke G2 under UNIMARC
        assert_eq!(marc8().decode(b"a\x1B*S\x1Bnb"), "ab");
        assert_eq!(marc8().decode(b"a\x0Eb"), "a\u{000E}b");
    }

    #[test]
    fn test_control_bytes_pass_through() {
        assert_eq!(marc8().decode(b"a\nb\x7F"), "a\nb\u{007F}");
        // a mark before a control byte stays on that side of the next base
        assert_eq!(marc8().decode(b"a\xE2\nb"), "a\n\u{0301}b");
    }

    #[test]
    fn test_ncr_expansion_toggle() {
        let bytes = b"gold <U+91D1>";
        assert_eq!(marc8().decode(bytes), "gold <U+91D1>");
        assert_eq!(
            marc8().with_convert_unicode_sequences(true).decode(bytes),
            "gold \u{91D1}"
        );
    }

    #[test]
    fn test_unimarc_locking_shifts() {
        let regs = unimarc_registers(["01", "03", "05", "02"]).unwrap();
        let decoder = LegacyDecoder::new(CharsetFamily::Unimarc).with_defaults(regs);
        // LS2 invokes Greek into GL, SI returns to ASCII
        assert_eq!(decoder.decode(b"a\x1BnAB\x0Fc"), "a\u{0391}\u{0392}c");
        // LS3R puts basic Cyrillic into GR
        assert_eq!(decoder.decode(b"\x1B|\xC1\x1B~\xC1"), "\u{0430}\u{0300}");
    }

    #[test]
    fn test_unimarc_absent_register_passes_through() {
        let decoder = LegacyDecoder::new(CharsetFamily::Unimarc);
        // G2 absent: bytes read through it come out unchanged
        assert_eq!(decoder.decode(b"\x1BnAB"), "AB");
    }

    #[test]
    fn test_state_resets_between_calls() {
        let decoder = marc8();
        assert_eq!(decoder.decode(b"\x1B(Sa"), "\u{03B1}");
        assert_eq!(decoder.decode(b"a"), "a");
    }

    #[test]
    fn test_custom_defaults() {
        let mut regs = CharsetFamily::Marc8.default_registers();
        regs.designate(Register::G0, Slot::single(CharsetId::BASIC_CYRILLIC));
        let decoder = marc8().with_defaults(regs);
        assert_eq!(decoder.decode(b"mIR"), "\u{041C}\u{0438}\u{0440}");
    }
}
