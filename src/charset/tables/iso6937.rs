//! ISO 6937 supplementary set (right half). Combining marks occupy 0xC1..=0xCF.

use super::StaticCharset;
use crate::charset::registers::CharsetId;

pub static ISO_6937: StaticCharset = StaticCharset {
    id: CharsetId::ISO_6937,
    identity: &[],
    entries: &[
        (0xA0, '\u{00A0}', false),
        (0xA1, '\u{00A1}', false),
        (0xA2, '\u{00A2}', false),
        (0xA3, '\u{00A3}', false),
        (0xA4, '\u{0024}', false),
        (0xA5, '\u{00A5}', false),
        (0xA6, '\u{0023}', false),
        (0xA7, '\u{00A7}', false),
        (0xA8, '\u{00A4}', false),
        (0xA9, '\u{2018}', false),
        (0xAA, '\u{201C}', false),
        (0xAB, '\u{00AB}', false),
        (0xAC, '\u{2190}', false),
        (0xAD, '\u{2191}', false),
        (0xAE, '\u{2192}', false),
        (0xAF, '\u{2193}', false),
        (0xB0, '\u{00B0}', false),
        (0xB1, '\u{00B1}', false),
        (0xB2, '\u{00B2}', false),
        (0xB3, '\u{00B3}', false),
        (0xB4, '\u{00D7}', false),
        (0xB5, '\u{00B5}', false),
        (0xB6, '\u{00B6}', false),
        (0xB7, '\u{00B7}', false),
        (0xB8, '\u{00F7}', false),
        (0xB9, '\u{2019}', false),
        (0xBA, '\u{201D}', false),
        (0xBB, '\u{00BB}', false),
        (0xBC, '\u{00BC}', false),
        (0xBD, '\u{00BD}', false),
        (0xBE, '\u{00BE}', false),
        (0xBF, '\u{00BF}', false),
        (0xC1, '\u{0300}', true),
        (0xC2, '\u{0301}', true),
        (0xC3, '\u{0302}', true),
        (0xC4, '\u{0303}', true),
        (0xC5, '\u{0304}', true),
        (0xC6, '\u{0306}', true),
        (0xC7, '\u{0307}', true),
        (0xC8, '\u{0308}', true),
        (0xCA, '\u{030A}', true),
        (0xCB, '\u{0327}', true),
        (0xCD, '\u{030B}', true),
        (0xCE, '\u{0328}', true),
        (0xCF, '\u{030C}', true),
        (0xD0, '\u{2015}', false),
        (0xD1, '\u{00B9}', false),
        (0xD2, '\u{00AE}', false),
        (0xD3, '\u{00A9}', false),
        (0xD4, '\u{2122}', false),
        (0xD5, '\u{266A}', false),
        (0xD6, '\u{00AC}', false),
        (0xD7, '\u{00A6}', false),
        (0xDC, '\u{215B}', false),
        (0xDD, '\u{215C}', false),
        (0xDE, '\u{215D}', false),
        (0xDF, '\u{215E}', false),
        (0xE0, '\u{2126}', false),
        (0xE1, '\u{00C6}', false),
        (0xE2, '\u{0110}', false),
        (0xE3, '\u{00AA}', false),
        (0xE4, '\u{0126}', false),
        (0xE6, '\u{0132}', false),
        (0xE7, '\u{013F}', false),
        (0xE8, '\u{0141}', false),
        (0xE9, '\u{00D8}', false),
        (0xEA, '\u{0152}', false),
        (0xEB, '\u{00BA}', false),
        (0xEC, '\u{00DE}', false),
        (0xED, '\u{0166}', false),
        (0xEE, '\u{014A}', false),
        (0xEF, '\u{0149}', false),
        (0xF0, '\u{0138}', false),
        (0xF1, '\u{00E6}', false),
        (0xF2, '\u{0111}', false),
        (0xF3, '\u{00F0}', false),
        (0xF4, '\u{0127}', false),
        (0xF5, '\u{0131}', false),
        (0xF6, '\u{0133}', false),
        (0xF7, '\u{0140}', false),
        (0xF8, '\u{0142}', false),
        (0xF9, '\u{00F8}', false),
        (0xFA, '\u{0153}', false),
        (0xFB, '\u{00DF}', false),
        (0xFC, '\u{00FE}', false),
        (0xFD, '\u{0167}', false),
        (0xFE, '\u{014B}', false),
        (0xFF, '\u{00AD}', false),
    ],
};
