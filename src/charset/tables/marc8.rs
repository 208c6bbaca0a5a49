//! MARC-8 graphic sets.
//!
//! Extended Arabic and the full EACC repertoire are not compiled in; load the
//! Library of Congress `codetables.xml` through
//! [`CodeTable::from_path`](crate::charset::CodeTable::from_path) when they are needed.

use super::StaticCharset;
use crate::charset::registers::CharsetId;

pub static BASIC_LATIN: StaticCharset = StaticCharset {
    id: CharsetId::BASIC_LATIN,
    identity: &[(0x20, 0x7E)],
    entries: &[],
};

/// ANSEL extended Latin, normally designated into G1.
pub static ANSEL: StaticCharset = StaticCharset {
    id: CharsetId::ANSEL,
    identity: &[],
    entries: &[
        (0x88, '\u{0098}', false), // non-sort begin
        (0x89, '\u{009C}', false), // non-sort end
        (0x8D, '\u{200D}', false),
        (0x8E, '\u{200C}', false),
        (0xA1, '\u{0141}', false),
        (0xA2, '\u{00D8}', false),
        (0xA3, '\u{0110}', false),
        (0xA4, '\u{00DE}', false),
        (0xA5, '\u{00C6}', false),
        (0xA6, '\u{0152}', false),
        (0xA7, '\u{02B9}', false),
        (0xA8, '\u{00B7}', false),
        (0xA9, '\u{266D}', false),
        (0xAA, '\u{00AE}', false),
        (0xAB, '\u{00B1}', false),
        (0xAC, '\u{01A0}', false),
        (0xAD, '\u{01AF}', false),
        (0xAE, '\u{02BC}', false),
        (0xB0, '\u{02BB}', false),
        (0xB1, '\u{0142}', false),
        (0xB2, '\u{00F8}', false),
        (0xB3, '\u{0111}', false),
        (0xB4, '\u{00FE}', false),
        (0xB5, '\u{00E6}', false),
        (0xB6, '\u{0153}', false),
        (0xB7, '\u{02BA}', false),
        (0xB8, '\u{0131}', false),
        (0xB9, '\u{00A3}', false),
        (0xBA, '\u{00F0}', false),
        (0xBC, '\u{01A1}', false),
        (0xBD, '\u{01B0}', false),
        (0xC0, '\u{00B0}', false),
        (0xC1, '\u{2113}', false),
        (0xC2, '\u{2117}', false),
        (0xC3, '\u{00A9}', false),
        (0xC4, '\u{266F}', false),
        (0xC5, '\u{00BF}', false),
        (0xC6, '\u{00A1}', false),
        (0xC7, '\u{00DF}', false),
        (0xC8, '\u{20AC}', false),
        (0xE0, '\u{0309}', true),
        (0xE1, '\u{0300}', true),
        (0xE2, '\u{0301}', true),
        (0xE3, '\u{0302}', true),
        (0xE4, '\u{0303}', true),
        (0xE5, '\u{0304}', true),
        (0xE6, '\u{0306}', true),
        (0xE7, '\u{0307}', true),
        (0xE8, '\u{0308}', true),
        (0xE9, '\u{030C}', true),
        (0xEA, '\u{030A}', true),
        (0xEB, '\u{FE20}', true), // ligature, left half
        (0xEC, '\u{FE21}', true), // ligature, right half
        (0xED, '\u{0315}', true),
        (0xEE, '\u{030B}', true),
        (0xEF, '\u{0310}', true),
        (0xF0, '\u{0327}', true),
        (0xF1, '\u{0328}', true),
        (0xF2, '\u{0323}', true),
        (0xF3, '\u{0324}', true),
        (0xF4, '\u{0325}', true),
        (0xF5, '\u{0333}', true),
        (0xF6, '\u{0332}', true),
        (0xF7, '\u{0326}', true),
        (0xF8, '\u{031C}', true),
        (0xF9, '\u{032E}', true),
        (0xFA, '\u{FE22}', true), // double tilde, left half
        (0xFB, '\u{FE23}', true), // double tilde, right half
        (0xFE, '\u{0313}', true),
    ],
};

/// Basic Greek (ISO 5428 based), normally designated into G0.
pub static BASIC_GREEK: StaticCharset = StaticCharset {
    id: CharsetId::BASIC_GREEK,
    identity: &[],
    entries: &[
        (0x21, '\u{0300}', true),
        (0x22, '\u{0301}', true),
        (0x23, '\u{0308}', true),
        (0x24, '\u{0342}', true),
        (0x25, '\u{0313}', true),
        (0x26, '\u{0314}', true),
        (0x27, '\u{0345}', true),
        (0x30, '\u{00AB}', false),
        (0x31, '\u{00BB}', false),
        (0x32, '\u{201C}', false),
        (0x33, '\u{201D}', false),
        (0x34, '\u{0374}', false),
        (0x35, '\u{0375}', false),
        (0x3B, '\u{0387}', false),
        (0x3F, '\u{037E}', false),
        (0x41, '\u{0391}', false),
        (0x42, '\u{0392}', false),
        (0x44, '\u{0393}', false),
        (0x45, '\u{0394}', false),
        (0x46, '\u{0395}', false),
        (0x47, '\u{03DA}', false),
        (0x48, '\u{03DC}', false),
        (0x49, '\u{0396}', false),
        (0x4A, '\u{0397}', false),
        (0x4B, '\u{0398}', false),
        (0x4C, '\u{0399}', false),
        (0x4D, '\u{039A}', false),
        (0x4E, '\u{039B}', false),
        (0x4F, '\u{039C}', false),
        (0x50, '\u{039D}', false),
        (0x51, '\u{039E}', false),
        (0x52, '\u{039F}', false),
        (0x53, '\u{03A0}', false),
        (0x54, '\u{03DE}', false),
        (0x55, '\u{03A1}', false),
        (0x56, '\u{03A3}', false),
        (0x58, '\u{03A4}', false),
        (0x59, '\u{03A5}', false),
        (0x5A, '\u{03A6}', false),
        (0x5B, '\u{03A7}', false),
        (0x5C, '\u{03A8}', false),
        (0x5D, '\u{03A9}', false),
        (0x5E, '\u{03E0}', false),
        (0x61, '\u{03B1}', false),
        (0x62, '\u{03B2}', false),
        (0x63, '\u{03D0}', false),
        (0x64, '\u{03B3}', false),
        (0x65, '\u{03B4}', false),
        (0x66, '\u{03B5}', false),
        (0x67, '\u{03DB}', false),
        (0x68, '\u{03DD}', false),
        (0x69, '\u{03B6}', false),
        (0x6A, '\u{03B7}', false),
        (0x6B, '\u{03B8}', false),
        (0x6C, '\u{03B9}', false),
        (0x6D, '\u{03BA}', false),
        (0x6E, '\u{03BB}', false),
        (0x6F, '\u{03BC}', false),
        (0x70, '\u{03BD}', false),
        (0x71, '\u{03BE}', false),
        (0x72, '\u{03BF}', false),
        (0x73, '\u{03C0}', false),
        (0x74, '\u{03DF}', false),
        (0x75, '\u{03C1}', false),
        (0x76, '\u{03C3}', false),
        (0x77, '\u{03C2}', false),
        (0x78, '\u{03C4}', false),
        (0x79, '\u{03C5}', false),
        (0x7A, '\u{03C6}', false),
        (0x7B, '\u{03C7}', false),
        (0x7C, '\u{03C8}', false),
        (0x7D, '\u{03C9}', false),
        (0x7E, '\u{03E1}', false),
    ],
};

/// Basic Cyrillic (ISO-IR 37), normally designated into G0.
pub static BASIC_CYRILLIC: StaticCharset = StaticCharset {
    id: CharsetId::BASIC_CYRILLIC,
    identity: &[(0x21, 0x3F)],
    entries: &[
        (0x40, '\u{044E}', false),
        (0x41, '\u{0430}', false),
        (0x42, '\u{0431}', false),
        (0x43, '\u{0446}', false),
        (0x44, '\u{0434}', false),
        (0x45, '\u{0435}', false),
        (0x46, '\u{0444}', false),
        (0x47, '\u{0433}', false),
        (0x48, '\u{0445}', false),
        (0x49, '\u{0438}', false),
        (0x4A, '\u{0439}', false),
        (0x4B, '\u{043A}', false),
        (0x4C, '\u{043B}', false),
        (0x4D, '\u{043C}', false),
        (0x4E, '\u{043D}', false),
        (0x4F, '\u{043E}', false),
        (0x50, '\u{043F}', false),
        (0x51, '\u{044F}', false),
        (0x52, '\u{0440}', false),
        (0x53, '\u{0441}', false),
        (0x54, '\u{0442}', false),
        (0x55, '\u{0443}', false),
        (0x56, '\u{0436}', false),
        (0x57, '\u{0432}', false),
        (0x58, '\u{044C}', false),
        (0x59, '\u{044B}', false),
        (0x5A, '\u{0437}', false),
        (0x5B, '\u{0448}', false),
        (0x5C, '\u{044D}', false),
        (0x5D, '\u{0449}', false),
        (0x5E, '\u{0447}', false),
        (0x5F, '\u{044A}', false),
        (0x60, '\u{042E}', false),
        (0x61, '\u{0410}', false),
        (0x62, '\u{0411}', false),
        (0x63, '\u{0426}', false),
        (0x64, '\u{0414}', false),
        (0x65, '\u{0415}', false),
        (0x66, '\u{0424}', false),
        (0x67, '\u{0413}', false),
        (0x68, '\u{0425}', false),
        (0x69, '\u{0418}', false),
        (0x6A, '\u{0419}', false),
        (0x6B, '\u{041A}', false),
        (0x6C, '\u{041B}', false),
        (0x6D, '\u{041C}', false),
        (0x6E, '\u{041D}', false),
        (0x6F, '\u{041E}', false),
        (0x70, '\u{041F}', false),
        (0x71, '\u{042F}', false),
        (0x72, '\u{0420}', false),
        (0x73, '\u{0421}', false),
        (0x74, '\u{0422}', false),
        (0x75, '\u{0423}', false),
        (0x76, '\u{0416}', false),
        (0x77, '\u{0412}', false),
        (0x78, '\u{042C}', false),
        (0x79, '\u{042B}', false),
        (0x7A, '\u{0417}', false),
        (0x7B, '\u{0428}', false),
        (0x7C, '\u{042D}', false),
        (0x7D, '\u{0429}', false),
        (0x7E, '\u{0427}', false),
    ],
};

/// Extended Cyrillic (ISO 5427 based), normally designated into G1.
pub static EXTENDED_CYRILLIC: StaticCharset = StaticCharset {
    id: CharsetId::EXTENDED_CYRILLIC,
    identity: &[],
    entries: &[
        (0xC0, '\u{0491}', false),
        (0xC1, '\u{0452}', false),
        (0xC2, '\u{0453}', false),
        (0xC3, '\u{0454}', false),
        (0xC4, '\u{0451}', false),
        (0xC5, '\u{0455}', false),
        (0xC6, '\u{0456}', false),
        (0xC7, '\u{0457}', false),
        (0xC8, '\u{0458}', false),
        (0xC9, '\u{0459}', false),
        (0xCA, '\u{045A}', false),
        (0xCB, '\u{045B}', false),
        (0xCC, '\u{045C}', false),
        (0xCD, '\u{045E}', false),
        (0xCE, '\u{045F}', false),
        (0xD0, '\u{0463}', false),
        (0xD1, '\u{0473}', false),
        (0xD2, '\u{0475}', false),
        (0xD3, '\u{046B}', false),
        (0xE0, '\u{0490}', false),
        (0xE1, '\u{0402}', false),
        (0xE2, '\u{0403}', false),
        (0xE3, '\u{0404}', false),
        (0xE4, '\u{0401}', false),
        (0xE5, '\u{0405}', false),
        (0xE6, '\u{0406}', false),
        (0xE7, '\u{0407}', false),
        (0xE8, '\u{0408}', false),
        (0xE9, '\u{0409}', false),
        (0xEA, '\u{040A}', false),
        (0xEB, '\u{040B}', false),
        (0xEC, '\u{040C}', false),
        (0xED, '\u{040E}', false),
        (0xEE, '\u{040F}', false),
        (0xF0, '\u{0462}', false),
        (0xF1, '\u{0472}', false),
        (0xF2, '\u{0474}', false),
        (0xF3, '\u{046A}', false),
    ],
};

/// Basic Hebrew letters and punctuation, normally designated into G0.
///
/// Vowel points are not compiled in.
pub static BASIC_HEBREW: StaticCharset = StaticCharset {
    id: CharsetId::BASIC_HEBREW,
    identity: &[(0x21, 0x21), (0x23, 0x26), (0x28, 0x2C), (0x2E, 0x3F)],
    entries: &[
        (0x22, '\u{05F4}', false),
        (0x27, '\u{05F3}', false),
        (0x2D, '\u{05BE}', false),
        (0x60, '\u{05D0}', false),
        (0x61, '\u{05D1}', false),
        (0x62, '\u{05D2}', false),
        (0x63, '\u{05D3}', false),
        (0x64, '\u{05D4}', false),
        (0x65, '\u{05D5}', false),
        (0x66, '\u{05D6}', false),
        (0x67, '\u{05D7}', false),
        (0x68, '\u{05D8}', false),
        (0x69, '\u{05D9}', false),
        (0x6A, '\u{05DA}', false),
        (0x6B, '\u{05DB}', false),
        (0x6C, '\u{05DC}', false),
        (0x6D, '\u{05DD}', false),
        (0x6E, '\u{05DE}', false),
        (0x6F, '\u{05DF}', false),
        (0x70, '\u{05E0}', false),
        (0x71, '\u{05E1}', false),
        (0x72, '\u{05E2}', false),
        (0x73, '\u{05E3}', false),
        (0x74, '\u{05E4}', false),
        (0x75, '\u{05E5}', false),
        (0x76, '\u{05E6}', false),
        (0x77, '\u{05E7}', false),
        (0x78, '\u{05E8}', false),
        (0x79, '\u{05E9}', false),
        (0x7A, '\u{05EA}', false),
    ],
};

/// Basic Arabic, laid out like the ISO 8859-6 right half.
pub static BASIC_ARABIC: StaticCharset = StaticCharset {
    id: CharsetId::BASIC_ARABIC,
    identity: &[(0x21, 0x2B), (0x2D, 0x2F), (0x3A, 0x3A), (0x3C, 0x3E)],
    entries: &[
        (0x2C, '\u{060C}', false),
        (0x30, '\u{0660}', false),
        (0x31, '\u{0661}', false),
        (0x32, '\u{0662}', false),
        (0x33, '\u{0663}', false),
        (0x34, '\u{0664}', false),
        (0x35, '\u{0665}', false),
        (0x36, '\u{0666}', false),
        (0x37, '\u{0667}', false),
        (0x38, '\u{0668}', false),
        (0x39, '\u{0669}', false),
        (0x3B, '\u{061B}', false),
        (0x3F, '\u{061F}', false),
        (0x41, '\u{0621}', false),
        (0x42, '\u{0622}', false),
        (0x43, '\u{0623}', false),
        (0x44, '\u{0624}', false),
        (0x45, '\u{0625}', false),
        (0x46, '\u{0626}', false),
        (0x47, '\u{0627}', false),
        (0x48, '\u{0628}', false),
        (0x49, '\u{0629}', false),
        (0x4A, '\u{062A}', false),
        (0x4B, '\u{062B}', false),
        (0x4C, '\u{062C}', false),
        (0x4D, '\u{062D}', false),
        (0x4E, '\u{062E}', false),
        (0x4F, '\u{062F}', false),
        (0x50, '\u{0630}', false),
        (0x51, '\u{0631}', false),
        (0x52, '\u{0632}', false),
        (0x53, '\u{0633}', false),
        (0x54, '\u{0634}', false),
        (0x55, '\u{0635}', false),
        (0x56, '\u{0636}', false),
        (0x57, '\u{0637}', false),
        (0x58, '\u{0638}', false),
        (0x59, '\u{0639}', false),
        (0x5A, '\u{063A}', false),
        (0x60, '\u{0640}', false),
        (0x61, '\u{0641}', false),
        (0x62, '\u{0642}', false),
        (0x63, '\u{0643}', false),
        (0x64, '\u{0644}', false),
        (0x65, '\u{0645}', false),
        (0x66, '\u{0646}', false),
        (0x67, '\u{0647}', false),
        (0x68, '\u{0648}', false),
        (0x69, '\u{0649}', false),
        (0x6A, '\u{064A}', false),
        (0x6B, '\u{064B}', true),
        (0x6C, '\u{064C}', true),
        (0x6D, '\u{064D}', true),
        (0x6E, '\u{064E}', true),
        (0x6F, '\u{064F}', true),
        (0x70, '\u{0650}', true),
        (0x71, '\u{0651}', true),
        (0x72, '\u{0652}', true),
    ],
};

pub static SUBSCRIPT: StaticCharset = StaticCharset {
    id: CharsetId::SUBSCRIPT,
    identity: &[],
    entries: &[
        (0x28, '\u{208D}', false),
        (0x29, '\u{208E}', false),
        (0x2B, '\u{208A}', false),
        (0x2D, '\u{208B}', false),
        (0x30, '\u{2080}', false),
        (0x31, '\u{2081}', false),
        (0x32, '\u{2082}', false),
        (0x33, '\u{2083}', false),
        (0x34, '\u{2084}', false),
        (0x35, '\u{2085}', false),
        (0x36, '\u{2086}', false),
        (0x37, '\u{2087}', false),
        (0x38, '\u{2088}', false),
        (0x39, '\u{2089}', false),
    ],
};

pub static SUPERSCRIPT: StaticCharset = StaticCharset {
    id: CharsetId::SUPERSCRIPT,
    identity: &[],
    entries: &[
        (0x28, '\u{207D}', false),
        (0x29, '\u{207E}', false),
        (0x2B, '\u{207A}', false),
        (0x2D, '\u{207B}', false),
        (0x30, '\u{2070}', false),
        (0x31, '\u{00B9}', false),
        (0x32, '\u{00B2}', false),
        (0x33, '\u{00B3}', false),
        (0x34, '\u{2074}', false),
        (0x35, '\u{2075}', false),
        (0x36, '\u{2076}', false),
        (0x37, '\u{2077}', false),
        (0x38, '\u{2078}', false),
        (0x39, '\u{2079}', false),
    ],
};

pub static GREEK_SYMBOLS: StaticCharset = StaticCharset {
    id: CharsetId::GREEK_SYMBOLS,
    identity: &[],
    entries: &[
        (0x61, '\u{03B1}', false),
        (0x62, '\u{03B2}', false),
        (0x63, '\u{03B3}', false),
    ],
};

/// Extended Arabic: the Persian, Urdu, Sindhi and Pashto letters, designated into G1.
pub static EXTENDED_ARABIC: StaticCharset = StaticCharset {
    id: CharsetId::EXTENDED_ARABIC,
    identity: &[],
    entries: &[
        (0xA1, '\u{06FD}', false),
        (0xA2, '\u{0672}', false),
        (0xA3, '\u{0673}', false),
        (0xA4, '\u{0679}', false),
        (0xA5, '\u{067A}', false),
        (0xA6, '\u{067B}', false),
        (0xA7, '\u{067C}', false),
        (0xA8, '\u{067D}', false),
        (0xA9, '\u{067E}', false),
        (0xAA, '\u{067F}', false),
        (0xAB, '\u{0680}', false),
        (0xAC, '\u{0681}', false),
        (0xAD, '\u{0682}', false),
        (0xAE, '\u{0683}', false),
        (0xAF, '\u{0684}', false),
        (0xB0, '\u{0685}', false),
        (0xB1, '\u{0686}', false),
        (0xB2, '\u{06BF}', false),
        (0xB3, '\u{0687}', false),
        (0xB4, '\u{0688}', false),
        (0xB5, '\u{0689}', false),
        (0xB6, '\u{068A}', false),
        (0xB7, '\u{068B}', false),
        (0xB8, '\u{068C}', false),
        (0xB9, '\u{068D}', false),
        (0xBA, '\u{068E}', false),
        (0xBB, '\u{068F}', false),
        (0xBC, '\u{0690}', false),
        (0xBD, '\u{0691}', false),
        (0xBE, '\u{0692}', false),
        (0xBF, '\u{0693}', false),
        (0xC0, '\u{0694}', false),
        (0xC1, '\u{0695}', false),
        (0xC2, '\u{0696}', false),
        (0xC3, '\u{0697}', false),
        (0xC4, '\u{0698}', false),
        (0xC5, '\u{0699}', false),
        (0xC6, '\u{069A}', false),
        (0xC7, '\u{069B}', false),
        (0xC8, '\u{069C}', false),
        (0xC9, '\u{069D}', false),
        (0xCA, '\u{069E}', false),
        (0xCB, '\u{069F}', false),
        (0xCC, '\u{06A0}', false),
        (0xCD, '\u{06A1}', false),
        (0xCE, '\u{06A2}', false),
        (0xCF, '\u{06A3}', false),
        (0xD0, '\u{06A4}', false),
        (0xD1, '\u{06A5}', false),
        (0xD2, '\u{06A6}', false),
        (0xD3, '\u{06A7}', false),
        (0xD4, '\u{06A8}', false),
        (0xD5, '\u{06A9}', false),
        (0xD6, '\u{06AA}', false),
        (0xD7, '\u{06AB}', false),
        (0xD8, '\u{06AC}', false),
        (0xD9, '\u{06AD}', false),
        (0xDA, '\u{06AE}', false),
        (0xDB, '\u{06AF}', false),
        (0xDC, '\u{06B0}', false),
        (0xDD, '\u{06B1}', false),
        (0xDE, '\u{06B2}', false),
        (0xDF, '\u{06B3}', false),
        (0xE0, '\u{06B4}', false),
        (0xE1, '\u{06B5}', false),
        (0xE2, '\u{06B6}', false),
        (0xE3, '\u{06B7}', false),
        (0xE4, '\u{06B8}', false),
        (0xE5, '\u{06B9}', false),
        (0xE6, '\u{06BA}', false),
        (0xE7, '\u{06BB}', false),
        (0xE8, '\u{06BC}', false),
        (0xE9, '\u{06BD}', false),
        (0xEA, '\u{06BE}', false),
        (0xEB, '\u{06C0}', false),
        (0xEC, '\u{06C4}', false),
        (0xED, '\u{06C5}', false),
        (0xEE, '\u{06C6}', false),
        (0xEF, '\u{06CA}', false),
        (0xF0, '\u{06CB}', false),
        (0xF1, '\u{06CD}', false),
        (0xF2, '\u{06CE}', false),
        (0xF3, '\u{06D0}', false),
        (0xF4, '\u{06D2}', false),
        (0xF5, '\u{06D3}', false),
    ],
};

/// EACC, three bytes per character: CJK punctuation, sample ideographs and the
/// Japanese kana rows (`0x69 0x24` hiragana, `0x69 0x25` katakana).
pub static EACC: StaticCharset = StaticCharset {
    id: CharsetId::EACC,
    identity: &[],
    entries: &[
        (0x21_23_20, '\u{3000}', false),
        (0x21_23_28, '\u{FF08}', false),
        (0x21_30_21, '\u{4E00}', false),
        (0x21_4F_5C, '\u{91D1}', false),
        (0x69_24_21, '\u{3041}', false),
        (0x69_24_22, '\u{3042}', false),
        (0x69_24_23, '\u{3043}', false),
        (0x69_24_24, '\u{3044}', false),
        (0x69_24_25, '\u{3045}', false),
        (0x69_24_26, '\u{3046}', false),
        (0x69_24_27, '\u{3047}', false),
        (0x69_24_28, '\u{3048}', false),
        (0x69_24_29, '\u{3049}', false),
        (0x69_24_2A, '\u{304A}', false),
        (0x69_24_2B, '\u{304B}', false),
        (0x69_24_2C, '\u{304C}', false),
        (0x69_24_2D, '\u{304D}', false),
        (0x69_24_2E, '\u{304E}', false),
        (0x69_24_2F, '\u{304F}', false),
        (0x69_24_30, '\u{3050}', false),
        (0x69_24_31, '\u{3051}', false),
        (0x69_24_32, '\u{3052}', false),
        (0x69_24_33, '\u{3053}', false),
        (0x69_24_34, '\u{3054}', false),
        (0x69_24_35, '\u{3055}', false),
        (0x69_24_36, '\u{3056}', false),
        (0x69_24_37, '\u{3057}', false),
        (0x69_24_38, '\u{3058}', false),
        (0x69_24_39, '\u{3059}', false),
        (0x69_24_3A, '\u{305A}', false),
        (0x69_24_3B, '\u{305B}', false),
        (0x69_24_3C, '\u{305C}', false),
        (0x69_24_3D, '\u{305D}', false),
        (0x69_24_3E, '\u{305E}', false),
        (0x69_24_3F, '\u{305F}', false),
        (0x69_24_40, '\u{3060}', false),
        (0x69_24_41, '\u{3061}', false),
        (0x69_24_42, '\u{3062}', false),
        (0x69_24_43, '\u{3063}', false),
        (0x69_24_44, '\u{3064}', false),
        (0x69_24_45, '\u{3065}', false),
        (0x69_24_46, '\u{3066}', false),
        (0x69_24_47, '\u{3067}', false),
        (0x69_24_48, '\u{3068}', false),
        (0x69_24_49, '\u{3069}', false),
        (0x69_24_4A, '\u{306A}', false),
        (0x69_24_4B, '\u{306B}', false),
        (0x69_24_4C, '\u{306C}', false),
        (0x69_24_4D, '\u{306D}', false),
        (0x69_24_4E, '\u{306E}', false),
        (0x69_24_4F, '\u{306F}', false),
        (0x69_24_50, '\u{3070}', false),
        (0x69_24_51, '\u{3071}', false),
        (0x69_24_52, '\u{3072}', false),
        (0x69_24_53, '\u{3073}', false),
        (0x69_24_54, '\u{3074}', false),
        (0x69_24_55, '\u{3075}', false),
        (0x69_24_56, '\u{3076}', false),
        (0x69_24_57, '\u{3077}', false),
        (0x69_24_58, '\u{3078}', false),
        (0x69_24_59, '\u{3079}', false),
        (0x69_24_5A, '\u{307A}', false),
        (0x69_24_5B, '\u{307B}', false),
        (0x69_24_5C, '\u{307C}', false),
        (0x69_24_5D, '\u{307D}', false),
        (0x69_24_5E, '\u{307E}', false),
        (0x69_24_5F, '\u{307F}', false),
        (0x69_24_60, '\u{3080}', false),
        (0x69_24_61, '\u{3081}', false),
        (0x69_24_62, '\u{3082}', false),
        (0x69_24_63, '\u{3083}', false),
        (0x69_24_64, '\u{3084}', false),
        (0x69_24_65, '\u{3085}', false),
        (0x69_24_66, '\u{3086}', false),
        (0x69_24_67, '\u{3087}', false),
        (0x69_24_68, '\u{3088}', false),
        (0x69_24_69, '\u{3089}', false),
        (0x69_24_6A, '\u{308A}', false),
        (0x69_24_6B, '\u{308B}', false),
        (0x69_24_6C, '\u{308C}', false),
        (0x69_24_6D, '\u{308D}', false),
        (0x69_24_6E, '\u{308E}', false),
        (0x69_24_6F, '\u{308F}', false),
        (0x69_24_70, '\u{3090}', false),
        (0x69_24_71, '\u{3091}', false),
        (0x69_24_72, '\u{3092}', false),
        (0x69_24_73, '\u{3093}', false),
        (0x69_25_21, '\u{30A1}', false),
        (0x69_25_22, '\u{30A2}', false),
        (0x69_25_23, '\u{30A3}', false),
        (0x69_25_24, '\u{30A4}', false),
        (0x69_25_25, '\u{30A5}', false),
        (0x69_25_26, '\u{30A6}', false),
        (0x69_25_27, '\u{30A7}', false),
        (0x69_25_28, '\u{30A8}', false),
        (0x69_25_29, '\u{30A9}', false),
        (0x69_25_2A, '\u{30AA}', false),
        (0x69_25_2B, '\u{30AB}', false),
        (0x69_25_2C, '\u{30AC}', false),
        (0x69_25_2D, '\u{30AD}', false),
        (0x69_25_2E, '\u{30AE}', false),
        (0x69_25_2F, '\u{30AF}', false),
        (0x69_25_30, '\u{30B0}', false),
        (0x69_25_31, '\u{30B1}', false),
        (0x69_25_32, '\u{30B2}', false),
        (0x69_25_33, '\u{30B3}', false),
        (0x69_25_34, '\u{30B4}', false),
        (0x69_25_35, '\u{30B5}', false),
        (0x69_25_36, '\u{30B6}', false),
        (0x69_25_37, '\u{30B7}', false),
        (0x69_25_38, '\u{30B8}', false),
        (0x69_25_39, '\u{30B9}', false),
        (0x69_25_3A, '\u{30BA}', false),
        (0x69_25_3B, '\u{30BB}', false),
        (0x69_25_3C, '\u{30BC}', false),
        (0x69_25_3D, '\u{30BD}', false),
        (0x69_25_3E, '\u{30BE}', false),
        (0x69_25_3F, '\u{30BF}', false),
        (0x69_25_40, '\u{30C0}', false),
        (0x69_25_41, '\u{30C1}', false),
        (0x69_25_42, '\u{30C2}', false),
        (0x69_25_43, '\u{30C3}', false),
        (0x69_25_44, '\u{30C4}', false),
        (0x69_25_45, '\u{30C5}', false),
        (0x69_25_46, '\u{30C6}', false),
        (0x69_25_47, '\u{30C7}', false),
        (0x69_25_48, '\u{30C8}', false),
        (0x69_25_49, '\u{30C9}', false),
        (0x69_25_4A, '\u{30CA}', false),
        (0x69_25_4B, '\u{30CB}', false),
        (0x69_25_4C, '\u{30CC}', false),
        (0x69_25_4D, '\u{30CD}', false),
        (0x69_25_4E, '\u{30CE}', false),
        (0x69_25_4F, '\u{30CF}', false),
        (0x69_25_50, '\u{30D0}', false),
        (0x69_25_51, '\u{30D1}', false),
        (0x69_25_52, '\u{30D2}', false),
        (0x69_25_53, '\u{30D3}', false),
        (0x69_25_54, '\u{30D4}', false),
        (0x69_25_55, '\u{30D5}', false),
        (0x69_25_56, '\u{30D6}', false),
        (0x69_25_57, '\u{30D7}', false),
        (0x69_25_58, '\u{30D8}', false),
        (0x69_25_59, '\u{30D9}', false),
        (0x69_25_5A, '\u{30DA}', false),
        (0x69_25_5B, '\u{30DB}', false),
        (0x69_25_5C, '\u{30DC}', false),
        (0x69_25_5D, '\u{30DD}', false),
        (0x69_25_5E, '\u{30DE}', false),
        (0x69_25_5F, '\u{30DF}', false),
        (0x69_25_60, '\u{30E0}', false),
        (0x69_25_61, '\u{30E1}', false),
        (0x69_25_62, '\u{30E2}', false),
        (0x69_25_63, '\u{30E3}', false),
        (0x69_25_64, '\u{30E4}', false),
        (0x69_25_65, '\u{30E5}', false),
        (0x69_25_66, '\u{30E6}', false),
        (0x69_25_67, '\u{30E7}', false),
        (0x69_25_68, '\u{30E8}', false),
        (0x69_25_69, '\u{30E9}', false),
        (0x69_25_6A, '\u{30EA}', false),
        (0x69_25_6B, '\u{30EB}', false),
        (0x69_25_6C, '\u{30EC}', false),
        (0x69_25_6D, '\u{30ED}', false),
        (0x69_25_6E, '\u{30EE}', false),
        (0x69_25_6F, '\u{30EF}', false),
        (0x69_25_70, '\u{30F0}', false),
        (0x69_25_71, '\u{30F1}', false),
        (0x69_25_72, '\u{30F2}', false),
        (0x69_25_73, '\u{30F3}', false),
        (0x69_25_74, '\u{30F4}', false),
        (0x69_25_75, '\u{30F5}', false),
        (0x69_25_76, '\u{30F6}', false),
    ],
};
