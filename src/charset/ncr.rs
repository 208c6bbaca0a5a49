//! Numeric character references and Unicode normalization glue.
//!
//! Characters that no legacy set can represent are written as `<U+XXXX>` or
//! `&#xXXXX;` so a later decode can restore them exactly.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

/// Textual form used for characters without a legacy encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NcrFormat {
    /// `<U+XXXX>`
    #[default]
    UnicodeSequence,
    /// `&#xXXXX;`
    Xml,
}

lazy_static! {
    static ref NCR_PATTERN: Regex =
        Regex::new(r"<U\+([0-9A-Fa-f]{4,6})>|&#x([0-9A-Fa-f]{4,6});").expect("valid NCR regex");
}

const LIGATURE_LEFT: char = '\u{FE20}';
const LIGATURE_RIGHT: char = '\u{FE21}';
const DOUBLE_TILDE_LEFT: char = '\u{FE22}';
const DOUBLE_TILDE_RIGHT: char = '\u{FE23}';
const DOUBLE_INVERTED_BREVE: char = '\u{0361}';
const DOUBLE_TILDE: char = '\u{0360}';

/// Format `ch` as a numeric character reference (at least four uppercase hex digits).
#[must_use]
pub fn format_ncr(ch: char, format: NcrFormat) -> String {
    match format {
        NcrFormat::UnicodeSequence => format!("<U+{:04X}>", u32::from(ch)),
        NcrFormat::Xml => format!("&#x{:04X};", u32::from(ch)),
    }
}

/// Replace every `<U+XXXX>` and `&#xXXXX;` with the character it names.
///
/// References that do not name a Unicode scalar value (surrogates, values
/// above U+10FFFF) are left as text.
#[must_use]
pub fn expand_ncrs(s: &str) -> Cow<'_, str> {
    if !s.contains("<U+") && !s.contains("&#x") {
        return Cow::Borrowed(s);
    }
    NCR_PATTERN.replace_all(s, |caps: &Captures<'_>| {
        let hex = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .map_or_else(|| caps[0].to_string(), String::from)
    })
}

/// Canonical composition (NFC).
#[must_use]
pub fn compose(s: &str) -> String {
    s.nfc().collect()
}

/// Canonical decomposition (NFD).
#[must_use]
pub fn decompose(s: &str) -> String {
    s.nfd().collect()
}

/// Split the double-width diacritics U+0361 and U+0360 into the legacy
/// left-half/right-half pair around the following base character.
///
/// `a\u{0361}b` becomes `a\u{FE20}b\u{FE21}`. A right half already present
/// immediately after that base is a leftover of an earlier conversion and is
/// dropped.
#[must_use]
pub fn fix_double_width(s: &str) -> String {
    if !s.contains(|c: char| c == DOUBLE_INVERTED_BREVE || c == DOUBLE_TILDE) {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len() + 4);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        let (left, right) = match c {
            DOUBLE_INVERTED_BREVE => (LIGATURE_LEFT, LIGATURE_RIGHT),
            DOUBLE_TILDE => (DOUBLE_TILDE_LEFT, DOUBLE_TILDE_RIGHT),
            _ => {
                out.push(c);
                continue;
            },
        };
        out.push(left);
        if let Some(base) = chars.next() {
            out.push(base);
            out.push(right);
            if chars.peek() == Some(&right) {
                chars.next();
            }
        }
    }
    out
}
