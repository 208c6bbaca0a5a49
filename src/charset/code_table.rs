//! Forward code tables: `(character set, legacy code) -> Unicode`.
//!
//! A [`CodeTable`] holds every character set of one family. Tables are
//! immutable once built and are shared between converters through `Arc`.
//!
//! Besides the compiled-in data, tables can be loaded from the Library of
//! Congress `codetables.xml` layout:
//!
//! ```xml
//! <codeTables>
//!   <codeTable name="Basic Greek">
//!     <characterSet ISOcode="53">
//!       <code>
//!         <marc>41</marc>
//!         <ucs>0391</ucs>
//!         <isCombining>false</isCombining>
//!       </code>
//!     </characterSet>
//!   </codeTable>
//! </codeTables>
//! ```

use super::registers::CharsetId;
use super::tables::StaticCharset;
use crate::error::{MarcError, Result};
use indexmap::IndexMap;
use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Result of a forward lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The code maps to this character.
    Mapped(char),
    /// The table lists the code but gives it no Unicode equivalent.
    Unmappable,
    /// The code is not in the set.
    Unmapped,
}

/// One row of a character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    /// Unicode equivalent, `None` for explicitly unmappable codes.
    pub unicode: Option<char>,
    /// Whether the code is a combining mark (written before its base).
    pub combining: bool,
}

/// Immutable forward table for a family of character sets.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    sets: IndexMap<CharsetId, IndexMap<u32, TableEntry>>,
}

impl CodeTable {
    /// Build a table from compiled-in character sets.
    #[must_use]
    pub fn from_static(sets: &[&StaticCharset]) -> Self {
        let mut table = CodeTable::default();
        for set in sets {
            let rows = table.sets.entry(set.id).or_default();
            for (code, ch, combining) in set.rows() {
                rows.insert(
                    code,
                    TableEntry {
                        unicode: Some(ch),
                        combining,
                    },
                );
            }
        }
        debug!(
            "Built code table with {} character sets ({} codes)",
            table.sets.len(),
            table.len()
        );
        table
    }

    /// Load a table from `codetables.xml` content.
    ///
    /// # Errors
    ///
    /// Returns `MarcError::CodeTable` if the XML is malformed, a hex value does
    /// not parse, or no character set is defined.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let table = XmlTableParser::default().parse(Reader::from_reader(reader))?;
        debug!(
            "Loaded code table with {} character sets ({} codes)",
            table.sets.len(),
            table.len()
        );
        Ok(table)
    }

    /// Load a table from an XML string.
    ///
    /// # Errors
    ///
    /// See [`CodeTable::from_reader`].
    pub fn from_xml_str(xml: &str) -> Result<Self> {
        Self::from_reader(xml.as_bytes())
    }

    /// Load a table from an XML file on disk.
    ///
    /// # Errors
    ///
    /// Returns `MarcError::IoError` if the file cannot be opened, otherwise see
    /// [`CodeTable::from_reader`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading code table from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Add the sets of `other`, replacing sets with the same identifier.
    #[must_use]
    pub fn merged(mut self, other: CodeTable) -> Self {
        for (id, rows) in other.sets {
            self.sets.insert(id, rows);
        }
        self
    }

    /// Total number of codes across all sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.values().map(IndexMap::len).sum()
    }

    /// Whether the table has no codes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `set` is defined in this table.
    #[must_use]
    pub fn contains_set(&self, set: CharsetId) -> bool {
        self.sets.contains_key(&set)
    }

    /// Identifiers of all sets, in table order.
    pub fn charsets(&self) -> impl Iterator<Item = CharsetId> + '_ {
        self.sets.keys().copied()
    }

    /// Rows of `set` in table order.
    pub fn entries(&self, set: CharsetId) -> impl Iterator<Item = (u32, TableEntry)> + '_ {
        self.sets
            .get(&set)
            .into_iter()
            .flat_map(|rows| rows.iter().map(|(code, entry)| (*code, *entry)))
    }

    /// Exact lookup without any fallback.
    #[must_use]
    pub fn exact(&self, code: u32, set: CharsetId) -> Option<TableEntry> {
        self.sets.get(&set)?.get(&code).copied()
    }

    /// Look up `code`, retrying with the high bit toggled when it is missing.
    ///
    /// Single-byte codes are retried as `code ^ 0x80`; three-byte codes read
    /// through GR are retried with every high bit cleared.
    #[must_use]
    pub fn entry(&self, code: u32, set: CharsetId) -> Option<TableEntry> {
        let rows = self.sets.get(&set)?;
        if let Some(entry) = rows.get(&code) {
            return Some(*entry);
        }
        let alternate = if code <= 0xFF {
            code ^ 0x80
        } else {
            code & 0x7F_7F7F
        };
        if alternate == code {
            return None;
        }
        rows.get(&alternate).copied()
    }

    /// Forward lookup of `code` in `set`.
    #[must_use]
    pub fn get_char(&self, code: u32, set: CharsetId) -> Lookup {
        match self.entry(code, set) {
            Some(TableEntry {
                unicode: Some(ch), ..
            }) => Lookup::Mapped(ch),
            Some(TableEntry { unicode: None, .. }) => Lookup::Unmappable,
            None => Lookup::Unmapped,
        }
    }

    /// Whether `code` is a combining mark in `set`.
    #[must_use]
    pub fn is_combining(&self, code: u32, set: CharsetId) -> bool {
        self.entry(code, set).is_some_and(|e| e.combining)
    }
}

fn table_error(msg: impl Into<String>) -> MarcError {
    MarcError::CodeTable(msg.into())
}

fn parse_hex(text: &str, what: &str) -> Result<u32> {
    u32::from_str_radix(text.trim(), 16)
        .map_err(|e| table_error(format!("Invalid {what} value {text:?}: {e}")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Child {
    Marc,
    Ucs,
    Alt,
    IsCombining,
}

/// Fields of one `<code>` element collected while parsing.
#[derive(Debug, Default)]
struct PendingCode {
    marc: Option<String>,
    ucs: Option<String>,
    alt: Option<String>,
    combining: bool,
}

#[derive(Debug, Default)]
struct XmlTableParser {
    table: CodeTable,
    set: Option<CharsetId>,
    code: Option<PendingCode>,
    child: Option<Child>,
}

impl XmlTableParser {
    fn parse<R: BufRead>(mut self, mut reader: Reader<R>) -> Result<CodeTable> {
        reader.trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => self.start(&e)?,
                Ok(Event::Empty(e)) => {
                    // <ucs/> and friends carry no text
                    self.start(&e)?;
                    self.end(e.name().as_ref())?;
                },
                Ok(Event::Text(t)) => {
                    let text = t
                        .unescape()
                        .map_err(|e| table_error(format!("Bad XML text: {e}")))?;
                    self.text(&text);
                },
                Ok(Event::End(e)) => self.end(e.name().as_ref())?,
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(table_error(format!(
                        "XML error at position {}: {e}",
                        reader.buffer_position()
                    )))
                },
                _ => {},
            }
            buf.clear();
        }

        if self.table.sets.is_empty() {
            return Err(table_error("No character sets defined"));
        }
        Ok(self.table)
    }

    fn start(&mut self, e: &BytesStart<'_>) -> Result<()> {
        match e.name().as_ref() {
            b"characterSet" => {
                let mut iso_code = None;
                for attr in e.attributes() {
                    let attr = attr.map_err(|e| table_error(format!("Bad XML attribute: {e}")))?;
                    if attr.key.as_ref() == b"ISOcode" {
                        let value = attr
                            .unescape_value()
                            .map_err(|e| table_error(format!("Bad ISOcode value: {e}")))?;
                        iso_code = Some(parse_hex(&value, "ISOcode")?);
                    }
                }
                let code = iso_code.ok_or_else(|| table_error("characterSet without ISOcode"))?;
                let id = u8::try_from(code)
                    .map(CharsetId)
                    .map_err(|_| table_error(format!("ISOcode 0x{code:X} out of range")))?;
                self.table.sets.entry(id).or_default();
                self.set = Some(id);
            },
            b"code" => self.code = Some(PendingCode::default()),
            b"marc" => self.child = Some(Child::Marc),
            b"ucs" => self.child = Some(Child::Ucs),
            b"alt" => self.child = Some(Child::Alt),
            b"isCombining" => self.child = Some(Child::IsCombining),
            _ => {},
        }
        Ok(())
    }

    fn text(&mut self, text: &str) {
        let (Some(code), Some(child)) = (self.code.as_mut(), self.child) else {
            return;
        };
        match child {
            Child::Marc => code.marc = Some(text.to_string()),
            Child::Ucs => code.ucs = Some(text.to_string()),
            Child::Alt => code.alt = Some(text.to_string()),
            Child::IsCombining => code.combining = text.trim() == "true",
        }
    }

    fn end(&mut self, name: &[u8]) -> Result<()> {
        match name {
            b"marc" | b"ucs" | b"alt" | b"isCombining" => self.child = None,
            b"code" => {
                if let Some(pending) = self.code.take() {
                    self.finish_code(pending)?;
                }
            },
            b"characterSet" => self.set = None,
            _ => {},
        }
        Ok(())
    }

    fn finish_code(&mut self, pending: PendingCode) -> Result<()> {
        let set = self
            .set
            .ok_or_else(|| table_error("code element outside characterSet"))?;
        let marc = pending
            .marc
            .ok_or_else(|| table_error(format!("code without marc value in set {set}")))?;
        let code = parse_hex(&marc, "marc")?;

        let ucs = pending
            .ucs
            .filter(|s| !s.trim().is_empty())
            .or_else(|| pending.alt.filter(|s| !s.trim().is_empty()));
        let unicode = match ucs {
            Some(hex) => {
                let value = parse_hex(&hex, "ucs")?;
                Some(
                    char::from_u32(value)
                        .ok_or_else(|| table_error(format!("ucs 0x{value:X} is not a scalar value")))?,
                )
            },
            None => None,
        };

        if let Some(rows) = self.table.sets.get_mut(&set) {
            rows.insert(
                code,
                TableEntry {
                    unicode,
                    combining: pending.combining,
                },
            );
        }
        Ok(())
    }
}
