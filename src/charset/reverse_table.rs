//! Reverse code tables: Unicode -> candidate legacy encodings.
//!
//! Two interchangeable implementations sit behind [`ReverseLookup`]:
//! [`ReverseCodeTable`] indexes any [`CodeTable`] (including custom XML
//! tables) in hash maps, while [`StaticReverseTable`] scans the compiled-in
//! table data directly and needs no build step.

use super::code_table::CodeTable;
use super::registers::CharsetId;
use super::tables::StaticCharset;
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Legacy bytes of one character in one set (1 byte, or 3 for multi-byte sets).
pub type LegacyBytes = SmallVec<[u8; 3]>;

/// Every legacy encoding of a character, in table order, at most one per set.
pub type CharEntries = SmallVec<[(CharsetId, LegacyBytes); 2]>;

/// Reverse lookup contract shared by both table implementations.
pub trait ReverseLookup: fmt::Debug + Send + Sync {
    /// Whether `ch` is a combining mark in any set.
    fn is_combining(&self, ch: char) -> bool;

    /// Legacy encodings of `ch`, or `None` when no set contains it.
    fn char_table(&self, ch: char) -> Option<CharEntries>;
}

fn code_bytes(code: u32) -> LegacyBytes {
    let [_, b0, b1, b2] = code.to_be_bytes();
    if code > 0xFF {
        SmallVec::from_slice(&[b0, b1, b2])
    } else {
        SmallVec::from_slice(&[b2])
    }
}

fn push_entry(entries: &mut CharEntries, id: CharsetId, code: u32) {
    // first code wins when a set maps two codes to one character
    if !entries.iter().any(|(existing, _)| *existing == id) {
        entries.push((id, code_bytes(code)));
    }
}

/// Hash-indexed reverse table built from a [`CodeTable`].
#[derive(Debug, Clone, Default)]
pub struct ReverseCodeTable {
    chars: HashMap<char, CharEntries>,
    combining: HashSet<char>,
}

impl ReverseCodeTable {
    /// Index every mapped code of `table`.
    #[must_use]
    pub fn new(table: &CodeTable) -> Self {
        let mut reverse = ReverseCodeTable::default();
        for id in table.charsets() {
            for (code, entry) in table.entries(id) {
                let Some(ch) = entry.unicode else {
                    continue;
                };
                push_entry(reverse.chars.entry(ch).or_default(), id, code);
                if entry.combining {
                    reverse.combining.insert(ch);
                }
            }
        }
        reverse
    }

    /// Number of distinct characters indexed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl ReverseLookup for ReverseCodeTable {
    fn is_combining(&self, ch: char) -> bool {
        self.combining.contains(&ch)
    }

    fn char_table(&self, ch: char) -> Option<CharEntries> {
        self.chars.get(&ch).cloned()
    }
}

/// Reverse table over compiled-in data, answered by scanning the rows.
#[derive(Debug, Clone, Copy)]
pub struct StaticReverseTable {
    sets: &'static [&'static StaticCharset],
}

impl StaticReverseTable {
    /// Reverse lookups over `sets`.
    #[must_use]
    pub const fn new(sets: &'static [&'static StaticCharset]) -> Self {
        StaticReverseTable { sets }
    }
}

impl ReverseLookup for StaticReverseTable {
    fn is_combining(&self, ch: char) -> bool {
        self.sets
            .iter()
            .flat_map(|set| set.entries.iter())
            .any(|&(_, c, combining)| combining && c == ch)
    }

    fn char_table(&self, ch: char) -> Option<CharEntries> {
        let mut entries = CharEntries::new();
        for set in self.sets {
            if let Some((code, _, _)) = set.rows().find(|&(_, c, _)| c == ch) {
                push_entry(&mut entries, set.id, code);
            }
        }
        (!entries.is_empty()).then_some(entries)
    }
}

/// Single-slot memo of the last reverse lookup.
///
/// Runs of the same character (typically ASCII spaces and letters) hit the
/// slot instead of the table. Each encoder owns its own cache.
#[derive(Debug, Default, Clone)]
pub struct LookupCache {
    last: Option<(char, Option<CharEntries>)>,
}

impl LookupCache {
    /// Look `ch` up through the cache.
    pub fn char_table(&mut self, table: &dyn ReverseLookup, ch: char) -> Option<CharEntries> {
        match &self.last {
            Some((cached, entries)) if *cached == ch => entries.clone(),
            _ => {
                let entries = table.char_table(ch);
                self.last = Some((ch, entries.clone()));
                entries
            },
        }
    }

    /// Forget the cached lookup.
    pub fn clear(&mut self) {
        self.last = None;
    }
}
