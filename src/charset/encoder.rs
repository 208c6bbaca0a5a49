//! Unicode to legacy bytes.
//!
//! For each character the encoder prefers, in order:
//!
//! 1. a set already invoked into GL or GR (no escape at all),
//! 2. for UNIMARC, a set designated into a register that is not invoked
//!    (a locking shift),
//! 3. a new designation of the best candidate set.
//!
//! Combining marks are moved in front of the base character they follow, and
//! the registers are returned to their defaults at the end of every element.
//! Characters no set can represent become numeric character references.

use super::code_table::{CodeTable, Lookup};
use super::ncr::{decompose, fix_double_width, format_ncr, NcrFormat};
use super::registers::{
    designation_bytes, shift_bytes, CharsetId, Register, RegisterModel, Registers, Side, Slot, SI,
};
use super::reverse_table::{CharEntries, LegacyBytes, LookupCache, ReverseCodeTable, ReverseLookup};
use super::{CharsetFamily, ReverseTableKind};
use crate::error::Result;
use log::trace;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;
use unicode_normalization::char::decompose_canonical;

/// Pre-processing and fallback settings for encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderOptions {
    /// Decompose characters without a direct legacy encoding and split
    /// double-width diacritics into their two halves.
    pub decompose: bool,
    /// Form of numeric character references for unrepresentable characters.
    pub ncr_format: NcrFormat,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        EncoderOptions {
            decompose: true,
            ncr_format: NcrFormat::UnicodeSequence,
        }
    }
}

impl EncoderOptions {
    /// Set decomposition.
    #[must_use]
    pub fn with_decompose(mut self, decompose: bool) -> Self {
        self.decompose = decompose;
        self
    }

    /// Set the numeric character reference form.
    #[must_use]
    pub fn with_ncr_format(mut self, format: NcrFormat) -> Self {
        self.ncr_format = format;
        self
    }
}

/// Where the most recent base character starts in the output.
#[derive(Debug, Clone, Copy)]
struct BaseSite {
    /// Insertion point for the next combining mark.
    insert_at: usize,
    /// Register state at the insertion point.
    state: Registers,
    /// The base was written as a character reference.
    ncr: bool,
}

/// Escapes plus character bytes produced for one character.
#[derive(Debug)]
struct Plan {
    seq: SmallVec<[u8; 8]>,
    /// Length of the character bytes at the end of `seq`.
    body: usize,
    /// Register state after `seq`.
    next: Registers,
}

#[derive(Debug)]
struct Output {
    bytes: Vec<u8>,
    state: Registers,
    base: Option<BaseSite>,
}

/// Converts Unicode text to legacy bytes.
///
/// Encoding takes `&mut self`: the encoder keeps a one-entry lookup cache and
/// remembers which sets it has opened so later elements reuse them.
#[derive(Debug, Clone)]
pub struct LegacyEncoder {
    family: CharsetFamily,
    table: Arc<CodeTable>,
    reverse: Arc<dyn ReverseLookup>,
    model: RegisterModel,
    defaults: Registers,
    options: EncoderOptions,
    cache: LookupCache,
    charsets_used: Vec<CharsetId>,
}

impl LegacyEncoder {
    /// Encoder over the family's built-in tables with a hashed reverse table.
    #[must_use]
    pub fn new(family: CharsetFamily) -> Self {
        Self::with_kind(family, ReverseTableKind::default())
    }

    /// Encoder over the built-in tables using the given reverse table kind.
    #[must_use]
    pub fn with_kind(family: CharsetFamily, kind: ReverseTableKind) -> Self {
        Self::build(family, family.table(), family.reverse_table(kind))
    }

    /// Encoder over a caller-supplied table, indexed with a hashed reverse table.
    #[must_use]
    pub fn with_table(family: CharsetFamily, table: Arc<CodeTable>) -> Self {
        let reverse = Arc::new(ReverseCodeTable::new(&table));
        Self::build(family, table, reverse)
    }

    /// Encoder whose built-in sets are overridden by a `codetables.xml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid table.
    pub fn from_path<P: AsRef<Path>>(family: CharsetFamily, path: P) -> Result<Self> {
        let custom = CodeTable::from_path(path)?;
        let table = CodeTable::clone(&family.table()).merged(custom);
        Ok(Self::with_table(family, Arc::new(table)))
    }

    fn build(family: CharsetFamily, table: Arc<CodeTable>, reverse: Arc<dyn ReverseLookup>) -> Self {
        LegacyEncoder {
            family,
            table,
            reverse,
            model: family.register_model(),
            defaults: family.default_registers(),
            options: EncoderOptions::default(),
            cache: LookupCache::default(),
            charsets_used: Vec::new(),
        }
    }

    /// Replace the registers each conversion starts from and ends in.
    #[must_use]
    pub fn with_defaults(mut self, defaults: Registers) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replace all options.
    #[must_use]
    pub fn with_options(mut self, options: EncoderOptions) -> Self {
        self.options = options;
        self
    }

    /// Set decomposition of characters without a direct encoding.
    #[must_use]
    pub fn with_decompose(mut self, decompose: bool) -> Self {
        self.options.decompose = decompose;
        self
    }

    /// Set the numeric character reference form.
    #[must_use]
    pub fn with_ncr_format(mut self, format: NcrFormat) -> Self {
        self.options.ncr_format = format;
        self
    }

    /// The family this encoder was built for.
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
    pub fn options(&self) -> EncoderOptions {
        self.options
    }

    /// Sets opened by designation so far, in first-use order.
    #[must_use]
    pub fn charsets_used(&self) -> &[CharsetId] {
        &self.charsets_used
    }

    /// Forget the set history and the lookup cache.
    pub fn reset(&mut self) {
        self.charsets_used.clear();
        self.cache.clear();
    }

    /// Encode one data element.
    ///
    /// Never fails: characters without a legacy encoding are written as
    /// numeric character references.
    pub fn encode(&mut self, text: &str) -> Vec<u8> {
        let text: Cow<'_, str> = if self.options.decompose {
            Cow::Owned(fix_double_width(text))
        } else {
            Cow::Borrowed(text)
        };

        let mut out = Output {
            bytes: Vec::with_capacity(text.len()),
            state: self.defaults,
            base: None,
        };

        for ch in text.chars() {
            if self.options.decompose
                && self.lookup(ch).is_none()
                && self.verbatim_byte(ch, &out.state).is_none()
            {
                let mut parts: SmallVec<[char; 4]> = SmallVec::new();
                decompose_canonical(ch, |c| parts.push(c));
                if parts.len() > 1 {
                    for part in parts {
                        self.encode_char(part, &mut out);
                    }
                    continue;
                }
            }
            self.encode_char(ch, &mut out);
        }

        let restore = out.state.transition_to(&self.defaults);
        out.bytes.extend_from_slice(&restore);
        out.bytes
    }

    /// Encode after full canonical decomposition of the input.
    ///
    /// Unlike [`LegacyEncoder::encode`], precomposed characters that do have a
    /// legacy encoding are still split.
    pub fn encode_nfd(&mut self, text: &str) -> Vec<u8> {
        self.encode(&decompose(text))
    }

    fn lookup(&mut self, ch: char) -> Option<CharEntries> {
        self.cache.char_table(self.reverse.as_ref(), ch)
    }

    fn encode_char(&mut self, ch: char, out: &mut Output) {
        if let Ok(byte) = u8::try_from(ch) {
            // space and controls are bases for any marks that follow
            if byte <= b' ' || byte == 0x7F {
                out.base = Some(BaseSite {
                    insert_at: out.bytes.len(),
                    state: out.state,
                    ncr: false,
                });
                out.bytes.push(byte);
                return;
            }
        }

        let entries = self.lookup(ch);
        let combining = self.reverse.is_combining(ch);

        if combining {
            if let Some(site) = out.base {
                match entries {
                    Some(entries) if !site.ncr => self.insert_mark(ch, &entries, site, out),
                    _ => self.push_ncr(ch, out),
                }
                return;
            }
        }

        let site = match entries {
            Some(entries) => {
                let plan = self.plan(ch, &entries, &out.state);
                out.bytes.extend_from_slice(&plan.seq);
                out.state = plan.next;
                BaseSite {
                    insert_at: out.bytes.len() - plan.body,
                    state: plan.next,
                    ncr: false,
                }
            },
            None => {
                let start = out.bytes.len();
                let before = out.state;
                let ncr = self.push_unmappable(ch, out);
                BaseSite {
                    insert_at: start,
                    state: before,
                    ncr,
                }
            },
        };

        out.base = (!combining).then_some(site);
    }

    /// Write a combining mark in front of the current base character.
    fn insert_mark(&mut self, ch: char, entries: &CharEntries, site: BaseSite, out: &mut Output) {
        let Plan { mut seq, next, .. } = self.plan(ch, entries, &site.state);
        seq.extend_from_slice(&next.transition_to(&site.state));
        let at = site.insert_at;
        out.bytes.splice(at..at, seq.iter().copied());
        out.base = Some(BaseSite {
            insert_at: at + seq.len(),
            ..site
        });
    }

    /// Bytes (with any escapes) that encode `ch` starting from `state`.
    fn plan(&mut self, ch: char, entries: &CharEntries, state: &Registers) -> Plan {
        let mut seq = SmallVec::new();
        let mut next = *state;

        for (id, bytes) in entries {
            for side in [Side::Left, Side::Right] {
                let Some(slot) = state.get(state.invoked(side)) else {
                    continue;
                };
                if slot.id != *id || slot.multibyte != (bytes.len() == 3) {
                    continue;
                }
                if let Some(encoded) = self.through(ch, *id, bytes, side) {
                    seq.extend_from_slice(&encoded);
                    return Plan {
                        seq,
                        body: encoded.len(),
                        next,
                    };
                }
            }
        }

        if self.model == RegisterModel::FourRegister {
            for (id, bytes) in entries {
                for register in Register::ALL {
                    let Some(slot) = state.get(register) else {
                        continue;
                    };
                    if slot.id != *id || slot.multibyte != (bytes.len() == 3) {
                        continue;
                    }
                    for side in preferred_sides(bytes) {
                        let Some(shift) = shift_bytes(register, side) else {
                            continue;
                        };
                        if let Some(encoded) = self.through(ch, *id, bytes, side) {
                            trace!("Re-invoking {register:?} into {side:?} for {id}");
                            seq.extend_from_slice(shift);
                            seq.extend_from_slice(&encoded);
                            next.invoke(register, side);
                            return Plan {
                                seq,
                                body: encoded.len(),
                                next,
                            };
                        }
                    }
                }
            }
        }

        let Some((id, bytes)) = self.best_charset(entries) else {
            return Plan { seq, body: 0, next };
        };
        let slot = if bytes.len() == 3 {
            Slot::multi(id)
        } else {
            Slot::single(id)
        };
        let (register, side) = self.target(slot, &bytes);
        trace!("Designating {id} into {register:?} for U+{:04X}", u32::from(ch));

        seq.extend_from_slice(&designation_bytes(register, slot, state.get(register)));
        next.designate(register, slot);
        if next.invoked(side) != register {
            if let Some(shift) = shift_bytes(register, side) {
                seq.extend_from_slice(shift);
                next.invoke(register, side);
            }
        }
        seq.extend(bytes.iter().map(|&b| adjust(b, side)));

        if !self.charsets_used.contains(&id) {
            self.charsets_used.push(id);
        }
        Plan {
            seq,
            body: bytes.len(),
            next,
        }
    }

    /// Bytes of `ch` read through `side`, if they decode back to `ch`.
    fn through(&self, ch: char, id: CharsetId, bytes: &LegacyBytes, side: Side) -> Option<LegacyBytes> {
        let encoded: LegacyBytes = bytes.iter().map(|&b| adjust(b, side)).collect();
        if encoded.len() == 1 && side == Side::Left && !(0x21..=0x7E).contains(&encoded[0]) {
            return None;
        }
        let code = encoded
            .iter()
            .fold(0u32, |acc, &b| (acc << 8) | u32::from(b));
        (self.table.get_char(code, id) == Lookup::Mapped(ch)).then_some(encoded)
    }

    /// Pick among several encodings: sets already opened first (oldest
    /// first), then family priority, then table order.
    fn best_charset(&self, entries: &CharEntries) -> Option<(CharsetId, LegacyBytes)> {
        let priority = self.family.priority();
        entries
            .iter()
            .enumerate()
            .min_by_key(|(index, (id, _))| {
                match self.charsets_used.iter().position(|used| used == id) {
                    Some(pos) => (0, pos, *index),
                    None => (
                        1,
                        priority.iter().position(|p| p == id).unwrap_or(usize::MAX),
                        *index,
                    ),
                }
            })
            .map(|(_, (id, bytes))| (*id, bytes.clone()))
    }

    /// Register and side a newly designated set is read through.
    fn target(&self, slot: Slot, bytes: &LegacyBytes) -> (Register, Side) {
        let high = bytes.first().is_some_and(|&b| b >= 0x80);
        match (self.model, slot.multibyte, high) {
            (_, true, _) | (RegisterModel::TwoRegister, false, false) => (Register::G0, Side::Left),
            (RegisterModel::TwoRegister, false, true) => (Register::G1, Side::Right),
            (RegisterModel::FourRegister, false, false) => (Register::G2, Side::Left),
            (RegisterModel::FourRegister, false, true) => (Register::G3, Side::Right),
        }
    }

    /// Write a character no set maps. Returns whether it became a reference.
    fn push_unmappable(&mut self, ch: char, out: &mut Output) -> bool {
        if let Some(byte) = self.verbatim_byte(ch, &out.state) {
            trace!("Writing unmapped U+{:04X} as a raw byte", u32::from(ch));
            out.bytes.push(byte);
            return false;
        }
        self.push_ncr(ch, out);
        true
    }

    /// The byte `ch` is written as when the decoder would pass it through unchanged in `state`.
    fn verbatim_byte(&self, ch: char, state: &Registers) -> Option<u8> {
        let byte = u8::try_from(ch).ok()?;
        let unmapped = match state.active_for(byte) {
            None => true,
            Some(slot) => !slot.multibyte && self.table.entry(u32::from(byte), slot.id).is_none(),
        };
        unmapped.then_some(byte)
    }

    /// Write `ch` as a numeric character reference through ASCII in GL.
    fn push_ncr(&mut self, ch: char, out: &mut Output) {
        let ascii = Slot::single(CharsetId::BASIC_LATIN);
        let current = out.state.get(Register::G0);
        if current != Some(ascii) {
            out.bytes
                .extend_from_slice(&designation_bytes(Register::G0, ascii, current));
            out.state.designate(Register::G0, ascii);
        }
        if out.state.invoked(Side::Left) != Register::G0 {
            out.bytes.push(SI);
            out.state.invoke(Register::G0, Side::Left);
        }
        trace!("No legacy encoding for U+{:04X}", u32::from(ch));
        out.bytes
            .extend_from_slice(format_ncr(ch, self.options.ncr_format).as_bytes());
    }
}

fn adjust(byte: u8, side: Side) -> u8 {
    match side {
        Side::Left => byte & 0x7F,
        Side::Right => byte | 0x80,
    }
}

fn preferred_sides(bytes: &LegacyBytes) -> [Side; 2] {
    if bytes.first().is_some_and(|&b| b >= 0x80) {
        [Side::Right, Side::Left]
    } else {
        [Side::Left, Side::Right]
    }
}
