//! Graphic character set registers and the ISO 2022 escape grammar.
//!
//! A legacy MARC string is interpreted through up to four graphic set
//! registers (G0..G3). Bytes `0x21..=0x7E` are read through whichever register
//! is invoked into the left half (GL) and bytes `0xA1..=0xFE` through the one
//! invoked into the right half (GR). MARC-8 style families never shift, so GL is
//! always G0 and GR is always G1; the UNIMARC family adds locking shifts.
//!
//! The grammar is expressed as lookup tables ([`INTERMEDIATES`],
//! [`SHORT_ESCAPES`]) so adding an intermediate byte is a one-line change.

use crate::error::{MarcError, Result};
use smallvec::SmallVec;
use std::fmt;

/// Escape (0x1B), the first byte of every escape sequence.
pub const ESC: u8 = 0x1B;
/// Shift In: locking shift 0, invokes G0 into GL (UNIMARC).
pub const SI: u8 = 0x0F;
/// Shift Out: locking shift 1, invokes G1 into GL (UNIMARC).
pub const SO: u8 = 0x0E;
/// Intermediate byte marking a multi-byte designation.
pub const MULTIBYTE: u8 = b'$';

/// Identifier of a graphic character set.
///
/// The value is the ISO 2022 final byte used to designate the set (for
/// example `0x42` for ASCII), which is also how code tables key their entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharsetId(pub u8);

impl CharsetId {
    /// ASCII / ISO 646 IRV (`ESC ( B`).
    pub const BASIC_LATIN: CharsetId = CharsetId(0x42);
    /// ANSEL extended Latin (`ESC ) E`).
    pub const ANSEL: CharsetId = CharsetId(0x45);
    /// East Asian Character Code, multi-byte (`ESC $ 1`).
    pub const EACC: CharsetId = CharsetId(0x31);
    /// MARC-8 basic Hebrew (`ESC ( 2`).
    pub const BASIC_HEBREW: CharsetId = CharsetId(0x32);
    /// MARC-8 basic Arabic (`ESC ( 3`).
    pub const BASIC_ARABIC: CharsetId = CharsetId(0x33);
    /// MARC-8 extended Arabic (`ESC ) 4`).
    pub const EXTENDED_ARABIC: CharsetId = CharsetId(0x34);
    /// Basic Cyrillic, ISO-IR 37 (`ESC ( N`).
    pub const BASIC_CYRILLIC: CharsetId = CharsetId(0x4E);
    /// Extended Cyrillic, ISO 5427 (`ESC ) Q`).
    pub const EXTENDED_CYRILLIC: CharsetId = CharsetId(0x51);
    /// ISO 6937 supplementary set.
    pub const ISO_6937: CharsetId = CharsetId(0x52);
    /// Basic Greek, ISO 5428 (`ESC ( S`).
    pub const BASIC_GREEK: CharsetId = CharsetId(0x53);
    /// ISO 5426 extended Latin.
    pub const ISO_5426: CharsetId = CharsetId(0x58);
    /// MARC-8 subscripts (`ESC b`).
    pub const SUBSCRIPT: CharsetId = CharsetId(0x62);
    /// MARC-8 Greek symbols (`ESC g`).
    pub const GREEK_SYMBOLS: CharsetId = CharsetId(0x67);
    /// MARC-8 superscripts (`ESC p`).
    pub const SUPERSCRIPT: CharsetId = CharsetId(0x70);

    /// Map a two-character UNIMARC character set code to a set identifier.
    ///
    /// A blank code (`"  "`) means the register is unused and yields `None`.
    ///
    /// # Errors
    ///
    /// Returns `MarcError::CodeTable` for codes that name no known set.
    pub fn from_unimarc_code(code: &str) -> Result<Option<CharsetId>> {
        let id = match code {
            "  " | "" => return Ok(None),
            "01" => CharsetId::BASIC_LATIN,
            "02" => CharsetId::BASIC_CYRILLIC,
            "03" | "11" => CharsetId::ISO_5426,
            "04" => CharsetId::EXTENDED_CYRILLIC,
            "05" => CharsetId::BASIC_GREEK,
            "08" => CharsetId::BASIC_HEBREW,
            _ => {
                return Err(MarcError::CodeTable(format!(
                    "Unknown UNIMARC character set code: {code:?}"
                )))
            },
        };
        Ok(Some(id))
    }

    /// Human-readable name of a well-known set.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CharsetId::BASIC_LATIN => "Basic Latin",
            CharsetId::ANSEL => "ANSEL Extended Latin",
            CharsetId::EACC => "EACC",
            CharsetId::BASIC_HEBREW => "Basic Hebrew",
            CharsetId::BASIC_ARABIC => "Basic Arabic",
            CharsetId::EXTENDED_ARABIC => "Extended Arabic",
            CharsetId::BASIC_CYRILLIC => "Basic Cyrillic",
            CharsetId::EXTENDED_CYRILLIC => "Extended Cyrillic",
            CharsetId::ISO_6937 => "ISO 6937",
            CharsetId::BASIC_GREEK => "Basic Greek",
            CharsetId::ISO_5426 => "ISO 5426",
            CharsetId::SUBSCRIPT => "Subscripts",
            CharsetId::GREEK_SYMBOLS => "Greek Symbols",
            CharsetId::SUPERSCRIPT => "Superscripts",
            _ => "Custom",
        }
    }
}

impl fmt::Display for CharsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:02X})", self.name(), self.0)
    }
}

/// One of the four ISO 2022 graphic set registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// G0, normally invoked into GL.
    G0,
    /// G1, normally invoked into GR.
    G1,
    /// G2 (UNIMARC only).
    G2,
    /// G3 (UNIMARC only).
    G3,
}

impl Register {
    /// All registers in index order.
    pub const ALL: [Register; 4] = [Register::G0, Register::G1, Register::G2, Register::G3];

    fn index(self) -> usize {
        match self {
            Register::G0 => 0,
            Register::G1 => 1,
            Register::G2 => 2,
            Register::G3 => 3,
        }
    }
}

/// Which half of the 8-bit code space a register is invoked into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Bytes 0x21..=0x7E.
    Left,
    /// Bytes 0xA1..=0xFE.
    Right,
}

/// The set designated into a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Designated set.
    pub id: CharsetId,
    /// Whether characters of this set are three bytes wide.
    pub multibyte: bool,
}

impl Slot {
    /// A single-byte designation.
    #[must_use]
    pub const fn single(id: CharsetId) -> Self {
        Slot {
            id,
            multibyte: false,
        }
    }

    /// A multi-byte designation.
    #[must_use]
    pub const fn multi(id: CharsetId) -> Self {
        Slot {
            id,
            multibyte: true,
        }
    }
}

/// How a family uses its registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterModel {
    /// G0/G1 only, fixed invocation (MARC-8, ISO 5426, ISO 6937).
    TwoRegister,
    /// G0..G3 with locking shifts (UNIMARC).
    FourRegister,
}

/// A control function recognised in the byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Designate a set into a register.
    Designate {
        /// Target register.
        register: Register,
        /// Set being designated.
        slot: Slot,
    },
    /// Invoke a register into one half of the code space.
    LockingShift {
        /// Register being invoked.
        register: Register,
        /// Half it is invoked into.
        side: Side,
    },
}

/// Intermediate bytes of designation escapes and the register each selects.
pub const INTERMEDIATES: &[(u8, Register)] = &[
    (b'(', Register::G0),
    (b',', Register::G0),
    (b')', Register::G1),
    (b'-', Register::G1),
    (b'*', Register::G2),
    (b'.', Register::G2),
    (b'+', Register::G3),
    (b'/', Register::G3),
];

/// Two-byte escapes (`ESC x`) that carry no intermediate byte.
pub const SHORT_ESCAPES: &[(u8, Control)] = &[
    (b'g', designate_g0(CharsetId::GREEK_SYMBOLS)),
    (b'b', designate_g0(CharsetId::SUBSCRIPT)),
    (b'p', designate_g0(CharsetId::SUPERSCRIPT)),
    (b's', designate_g0(CharsetId::BASIC_LATIN)),
    (b'n', shift(Register::G2, Side::Left)),
    (b'o', shift(Register::G3, Side::Left)),
    (b'~', shift(Register::G1, Side::Right)),
    (b'}', shift(Register::G2, Side::Right)),
    (b'|', shift(Register::G3, Side::Right)),
];

const fn designate_g0(id: CharsetId) -> Control {
    Control::Designate {
        register: Register::G0,
        slot: Slot::single(id),
    }
}

const fn shift(register: Register, side: Side) -> Control {
    Control::LockingShift { register, side }
}

fn intermediate_register(byte: u8) -> Option<Register> {
    INTERMEDIATES
        .iter()
        .find(|(b, _)| *b == byte)
        .map(|(_, register)| *register)
}

/// Outcome of reading an escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// A complete sequence of `len` bytes; `None` when it was not recognised.
    Complete {
        /// Recognised control, if any.
        control: Option<Control>,
        /// Bytes consumed, including the ESC.
        len: usize,
    },
    /// The input ended inside the sequence.
    Truncated,
}

/// Parse the escape sequence starting at `bytes[pos]` (which must be ESC).
#[must_use]
pub fn parse_escape(bytes: &[u8], pos: usize) -> Escape {
    let Some(&first) = bytes.get(pos + 1) else {
        return Escape::Truncated;
    };

    if first == MULTIBYTE {
        let Some(&second) = bytes.get(pos + 2) else {
            return Escape::Truncated;
        };
        return match intermediate_register(second) {
            Some(register) => match bytes.get(pos + 3) {
                Some(&final_byte) => Escape::Complete {
                    control: Some(Control::Designate {
                        register,
                        slot: Slot::multi(CharsetId(final_byte)),
                    }),
                    len: 4,
                },
                None => Escape::Truncated,
            },
            // ESC $ F designates G0
            None => Escape::Complete {
                control: Some(Control::Designate {
                    register: Register::G0,
                    slot: Slot::multi(CharsetId(second)),
                }),
                len: 3,
            },
        };
    }

    if let Some(register) = intermediate_register(first) {
        return match bytes.get(pos + 2) {
            Some(&final_byte) => Escape::Complete {
                control: Some(Control::Designate {
                    register,
                    slot: Slot::single(CharsetId(final_byte)),
                }),
                len: 3,
            },
            None => Escape::Truncated,
        };
    }

    let control = SHORT_ESCAPES
        .iter()
        .find(|(b, _)| *b == first)
        .map(|(_, control)| *control);
    Escape::Complete { control, len: 2 }
}

/// Bytes of a designation escape, preferring the two-byte MARC-8 forms.
///
/// `current` is what the register holds now; returning G0 from one of the
/// `ESC g`/`ESC b`/`ESC p` sets to ASCII uses `ESC s`.
#[must_use]
pub fn designation_bytes(register: Register, slot: Slot, current: Option<Slot>) -> SmallVec<[u8; 4]> {
    let mut out = SmallVec::new();
    out.push(ESC);

    if register == Register::G0 && !slot.multibyte {
        let shortcut = match slot.id {
            CharsetId::GREEK_SYMBOLS => Some(b'g'),
            CharsetId::SUBSCRIPT => Some(b'b'),
            CharsetId::SUPERSCRIPT => Some(b'p'),
            CharsetId::BASIC_LATIN
                if current.is_some_and(|c| {
                    matches!(
                        c.id,
                        CharsetId::GREEK_SYMBOLS | CharsetId::SUBSCRIPT | CharsetId::SUPERSCRIPT
                    )
                }) =>
            {
                Some(b's')
            },
            _ => None,
        };
        if let Some(byte) = shortcut {
            out.push(byte);
            return out;
        }
    }

    if slot.multibyte {
        out.push(MULTIBYTE);
        if register != Register::G0 {
            out.push(primary_intermediate(register));
        }
    } else {
        out.push(primary_intermediate(register));
    }
    out.push(slot.id.0);
    out
}

fn primary_intermediate(register: Register) -> u8 {
    match register {
        Register::G0 => b'(',
        Register::G1 => b')',
        Register::G2 => b'*',
        Register::G3 => b'+',
    }
}

/// Bytes of the locking shift that invokes `register` into `side`.
///
/// G0 cannot be invoked into GR; `None` is returned for that combination.
#[must_use]
pub fn shift_bytes(register: Register, side: Side) -> Option<&'static [u8]> {
    match (register, side) {
        (Register::G0, Side::Left) => Some(&[SI]),
        (Register::G1, Side::Left) => Some(&[SO]),
        (Register::G2, Side::Left) => Some(&[ESC, b'n']),
        (Register::G3, Side::Left) => Some(&[ESC, b'o']),
        (Register::G1, Side::Right) => Some(&[ESC, b'~']),
        (Register::G2, Side::Right) => Some(&[ESC, b'}']),
        (Register::G3, Side::Right) => Some(&[ESC, b'|']),
        (Register::G0, Side::Right) => None,
    }
}

/// Register state of one conversion: designations plus GL/GR invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    slots: [Option<Slot>; 4],
    left: Register,
    right: Register,
}

impl Registers {
    /// Two single-byte designations in G0 and G1, G2/G3 absent.
    #[must_use]
    pub fn new(g0: CharsetId, g1: CharsetId) -> Self {
        Registers {
            slots: [Some(Slot::single(g0)), Some(Slot::single(g1)), None, None],
            left: Register::G0,
            right: Register::G1,
        }
    }

    /// Set or clear the designation of `register`.
    #[must_use]
    pub fn with(mut self, register: Register, id: Option<CharsetId>) -> Self {
        self.slots[register.index()] = id.map(Slot::single);
        self
    }

    /// The slot designated into `register`, if any.
    #[must_use]
    pub fn get(&self, register: Register) -> Option<Slot> {
        self.slots[register.index()]
    }

    /// Register invoked into `side`.
    #[must_use]
    pub fn invoked(&self, side: Side) -> Register {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// The slot a data byte is read through.
    #[must_use]
    pub fn active_for(&self, byte: u8) -> Option<Slot> {
        if byte < 0x80 {
            self.get(self.left)
        } else {
            self.get(self.right)
        }
    }

    /// Designate `slot` into `register`.
    pub fn designate(&mut self, register: Register, slot: Slot) {
        self.slots[register.index()] = Some(slot);
    }

    /// Invoke `register` into `side`. G0 into GR is ignored.
    pub fn invoke(&mut self, register: Register, side: Side) {
        match side {
            Side::Left => self.left = register,
            Side::Right if register != Register::G0 => self.right = register,
            Side::Right => {},
        }
    }

    /// Escape and shift bytes that turn this state into `target`.
    ///
    /// Registers that `target` leaves absent are not touched.
    #[must_use]
    pub fn transition_to(&self, target: &Registers) -> SmallVec<[u8; 8]> {
        let mut seq = SmallVec::new();
        for register in Register::ALL {
            let current = self.get(register);
            if let Some(slot) = target.get(register) {
                if current != Some(slot) {
                    seq.extend_from_slice(&designation_bytes(register, slot, current));
                }
            }
        }
        for side in [Side::Left, Side::Right] {
            let wanted = target.invoked(side);
            if self.invoked(side) != wanted {
                if let Some(shift) = shift_bytes(wanted, side) {
                    seq.extend_from_slice(shift);
                }
            }
        }
        seq
    }

    /// Apply a control under `model`, returning whether the state changed.
    ///
    /// The two-register model ignores G2/G3 designations and all shifts.
    pub fn apply(&mut self, control: Control, model: RegisterModel) -> bool {
        match (control, model) {
            (
                Control::Designate {
                    register: Register::G2 | Register::G3,
                    ..
                }
                | Control::LockingShift { .. },
                RegisterModel::TwoRegister,
            ) => false,
            (Control::Designate { register, slot }, _) => {
                self.designate(register, slot);
                true
            },
            (Control::LockingShift { register, side }, RegisterModel::FourRegister) => {
                self.invoke(register, side);
                true
            },
        }
    }
}
