//! Record container.
//!
//! - [`Record`]: leader, control fields and data fields
//! - [`Field`]: a data field (010+) with indicators and subfields
//! - [`Subfield`]: one coded data element
//!
//! Values are always held as Unicode text; conversion to and from the legacy
//! encodings happens in [`crate::reader`] and [`crate::writer`].
//!
//! # Examples
//!
//! ```
//! use marc_charconv::{Field, Leader, Record};
//!
//! let record = Record::builder(Leader::default())
//!     .control_field_str("001", "ocm01234567")
//!     .field(
//!         Field::builder("245".to_string(), '1', '0')
//!             .subfield_str('a', "Dvořák :")
//!             .subfield_str('b', "a life")
//!             .build(),
//!     )
//!     .build();
//!
//! assert_eq!(record.get_control_field("001"), Some("ocm01234567"));
//! assert_eq!(record.get_field("245").and_then(|f| f.get_subfield('b')), Some("a life"));
//! ```

use crate::encoding::MarcEncoding;
use crate::error::Result;
use crate::leader::Leader;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Whether `tag` names a control field (001-009).
#[must_use]
pub fn is_control_tag(tag: &str) -> bool {
    tag.len() == 3 && tag.starts_with("00") && tag.bytes().all(|b| b.is_ascii_digit())
}

/// A record: leader plus fields in insertion order, grouped by tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record leader
    pub leader: Leader,
    /// Control fields (001-009), tag to value
    pub control_fields: IndexMap<String, String>,
    /// Data fields, tag to occurrences
    pub fields: IndexMap<String, Vec<Field>>,
}

/// A data field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Three-character tag
    pub tag: String,
    /// First indicator
    pub indicator1: char,
    /// Second indicator
    pub indicator2: char,
    /// Subfields in order
    pub subfields: SmallVec<[Subfield; 4]>,
}

/// A subfield.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subfield {
    /// Subfield code
    pub code: char,
    /// Unicode value
    pub value: String,
}

impl Record {
    /// Empty record with the given leader.
    #[must_use]
    pub fn new(leader: Leader) -> Self {
        Record {
            leader,
            control_fields: IndexMap::new(),
            fields: IndexMap::new(),
        }
    }

    /// Builder for fluently constructing a record.
    #[must_use]
    pub fn builder(leader: Leader) -> RecordBuilder {
        RecordBuilder {
            record: Record::new(leader),
        }
    }

    /// Encoding named by the leader.
    ///
    /// # Errors
    ///
    /// Returns `MarcError::EncodingError` if leader position 9 is unknown.
    pub fn encoding(&self) -> Result<MarcEncoding> {
        self.leader.encoding()
    }

    /// Add or replace a control field.
    pub fn add_control_field(&mut self, tag: String, value: String) {
        self.control_fields.insert(tag, value);
    }

    /// Add or replace a control field from string slices.
    pub fn add_control_field_str(&mut self, tag: &str, value: &str) {
        self.add_control_field(tag.to_string(), value.to_string());
    }

    /// Value of a control field.
    #[must_use]
    pub fn get_control_field(&self, tag: &str) -> Option<&str> {
        self.control_fields.get(tag).map(String::as_str)
    }

    /// Append a data field.
    pub fn add_field(&mut self, field: Field) {
        self.fields.entry(field.tag.clone()).or_default().push(field);
    }

    /// All occurrences of a tag.
    #[must_use]
    pub fn get_fields(&self, tag: &str) -> Option<&[Field]> {
        self.fields.get(tag).map(Vec::as_slice)
    }

    /// First occurrence of a tag.
    #[must_use]
    pub fn get_field(&self, tag: &str) -> Option<&Field> {
        self.fields.get(tag).and_then(|v| v.first())
    }

    /// All data fields, grouped by tag in first-seen order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values().flatten()
    }

    /// Mutable access to all data fields.
    pub fn fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.fields.values_mut().flatten()
    }

    /// Control fields as `(tag, value)` pairs.
    pub fn control_fields_iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.control_fields
            .iter()
            .map(|(tag, value)| (tag.as_str(), value.as_str()))
    }

    /// Every value in the record: control field values, then subfield values.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.control_fields
            .values()
            .map(String::as_str)
            .chain(self.fields().flat_map(|f| f.subfields.iter().map(|sf| sf.value.as_str())))
    }
}

/// Fluent [`Record`] construction.
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Add a control field.
    #[must_use]
    pub fn control_field(mut self, tag: String, value: String) -> Self {
        self.record.add_control_field(tag, value);
        self
    }

    /// Add a control field from string slices.
    #[must_use]
    pub fn control_field_str(mut self, tag: &str, value: &str) -> Self {
        self.record.add_control_field_str(tag, value);
        self
    }

    /// Add a data field.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.record.add_field(field);
        self
    }

    /// Finish.
    #[must_use]
    pub fn build(self) -> Record {
        self.record
    }
}

impl Field {
    /// Data field without subfields.
    #[must_use]
    pub fn new(tag: String, indicator1: char, indicator2: char) -> Self {
        Field {
            tag,
            indicator1,
            indicator2,
            subfields: SmallVec::new(),
        }
    }

    /// Builder for fluently constructing a field.
    #[must_use]
    pub fn builder(tag: String, indicator1: char, indicator2: char) -> FieldBuilder {
        FieldBuilder {
            field: Field::new(tag, indicator1, indicator2),
        }
    }

    /// Append a subfield.
    pub fn add_subfield(&mut self, code: char, value: String) {
        self.subfields.push(Subfield { code, value });
    }

    /// Append a subfield from a string slice.
    pub fn add_subfield_str(&mut self, code: char, value: &str) {
        self.add_subfield(code, value.to_string());
    }

    /// First value for a code.
    #[must_use]
    pub fn get_subfield(&self, code: char) -> Option<&str> {
        self.subfields_by_code(code).next()
    }

    /// All values for a code.
    pub fn subfields_by_code(&self, code: char) -> impl Iterator<Item = &str> {
        self.subfields
            .iter()
            .filter(move |sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }

    /// Subfield values joined with single spaces.
    #[must_use]
    pub fn value(&self) -> String {
        self.subfields
            .iter()
            .map(|sf| sf.value.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Fluent [`Field`] construction.
#[derive(Debug)]
pub struct FieldBuilder {
    field: Field,
}

impl FieldBuilder {
    /// Add a subfield.
    #[must_use]
    pub fn subfield(mut self, code: char, value: String) -> Self {
        self.field.add_subfield(code, value);
        self
    }

    /// Add a subfield from a string slice.
    #[must_use]
    pub fn subfield_str(mut self, code: char, value: &str) -> Self {
        self.field.add_subfield_str(code, value);
        self
    }

    /// Finish.
    #[must_use]
    pub fn build(self) -> Field {
        self.field
    }
}
