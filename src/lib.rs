#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! ## Modules
//!
//! - [`charset`]: Conversion engine: registers, code tables, decoder, encoder
//! - [`encoding`]: Leader position 9 and single-element conversion
//! - [`record`]: Record structures (`Record`, `Field`, `Subfield`)
//! - [`reader`]: Reading ISO 2709 records with per-element decoding
//! - [`writer`]: Writing ISO 2709 records with per-element encoding
//! - [`leader`]: The 24-byte record leader
//! - [`recovery`]: Strict and lenient handling of malformed records
//! - [`error`]: Error types and result type

pub mod charset;
pub mod encoding;
pub mod error;
pub mod leader;
pub mod reader;
pub mod record;
pub mod recovery;
pub mod writer;

pub use charset::{
    CharsetFamily, CharsetId, CodeTable, DecoderOptions, EncoderOptions, LegacyDecoder,
    LegacyEncoder, NcrFormat, ReverseTableKind,
};
pub use encoding::{decode_bytes, encode_string, MarcEncoding};
pub use error::{MarcError, Result};
pub use leader::Leader;
pub use reader::MarcReader;
pub use record::{Field, FieldBuilder, Record, RecordBuilder, Subfield};
pub use recovery::{RecoveryContext, RecoveryMode};
pub use writer::MarcWriter;
