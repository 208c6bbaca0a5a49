//! ISO 5426 extended Latin (right half). Combining marks occupy 0xC0..=0xDF.

use super::StaticCharset;
use crate::charset::registers::CharsetId;

pub static ISO_5426: StaticCharset = StaticCharset {
    id: CharsetId::ISO_5426,
    identity: &[],
    entries: &[
        (0xA1, '\u{00A1}', false),
        (0xA2, '\u{201E}', false),
        (0xA3, '\u{00A3}', false),
        (0xA4, '\u{0024}', false),
        (0xA5, '\u{00A5}', false),
        (0xA6, '\u{2020}', false),
        (0xA7, '\u{00A7}', false),
        (0xA8, '\u{2032}', false),
        (0xA9, '\u{2018}', false),
        (0xAA, '\u{201C}', false),
        (0xAB, '\u{00AB}', false),
        (0xAC, '\u{266D}', false),
        (0xAD, '\u{00A9}', false),
        (0xAE, '\u{2117}', false),
        (0xAF, '\u{00AE}', false),
        (0xB0, '\u{02BB}', false),
        (0xB1, '\u{02BC}', false),
        (0xB2, '\u{201A}', false),
        (0xB6, '\u{2021}', false),
        (0xB7, '\u{00B7}', false),
        (0xB8, '\u{2033}', false),
        (0xB9, '\u{2019}', false),
        (0xBA, '\u{201D}', false),
        (0xBB, '\u{00BB}', false),
        (0xBC, '\u{266F}', false),
        (0xBD, '\u{02B9}', false),
        (0xBE, '\u{02BA}', false),
        (0xBF, '\u{00BF}', false),
        (0xC0, '\u{0309}', true),
        (0xC1, '\u{0300}', true),
        (0xC2, '\u{0301}', true),
        (0xC3, '\u{0302}', true),
        (0xC4, '\u{0303}', true),
        (0xC5, '\u{0304}', true),
        (0xC6, '\u{0306}', true),
        (0xC7, '\u{0307}', true),
        (0xC8, '\u{0308}', true), // umlaut
        (0xC9, '\u{0308}', true), // trema
        (0xCA, '\u{030A}', true),
        (0xCB, '\u{0315}', true),
        (0xCC, '\u{0312}', true),
        (0xCD, '\u{030B}', true),
        (0xCE, '\u{031B}', true),
        (0xCF, '\u{030C}', true),
        (0xD0, '\u{0327}', true),
        (0xD1, '\u{031C}', true),
        (0xD2, '\u{0326}', true),
        (0xD3, '\u{0328}', true),
        (0xD4, '\u{0325}', true),
        (0xD5, '\u{032E}', true),
        (0xD6, '\u{0323}', true),
        (0xD7, '\u{0324}', true),
        (0xD8, '\u{0332}', true),
        (0xD9, '\u{0333}', true),
        (0xDA, '\u{0329}', true),
        (0xDB, '\u{032D}', true),
        (0xE1, '\u{00C6}', false),
        (0xE2, '\u{0110}', false),
        (0xE6, '\u{0132}', false),
        (0xE8, '\u{0141}', false),
        (0xE9, '\u{00D8}', false),
        (0xEA, '\u{0152}', false),
        (0xEC, '\u{00DE}', false),
        (0xF1, '\u{00E6}', false),
        (0xF2, '\u{0111}', false),
        (0xF3, '\u{00F0}', false),
        (0xF5, '\u{0131}', false),
        (0xF6, '\u{0133}', false),
        (0xF8, '\u{0142}', false),
        (0xF9, '\u{00F8}', false),
        (0xFA, '\u{0153}', false),
        (0xFB, '\u{00DF}', false),
        (0xFC, '\u{00FE}', false),
    ],
};
