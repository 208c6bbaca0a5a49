//! Error types for MARC record and character-set operations.
//!
//! This module provides the [`MarcError`] type for all library operations
//! and the [`Result`] convenience type.
//!
//! Character conversion itself never fails on bad data: unmapped bytes pass
//! through and unrepresentable characters become numeric character references.
//! Errors are reserved for structural problems (record layout, delimiters inside
//! data) and for code-table configuration problems detected at construction.

use thiserror::Error;

/// Error type for all library operations.
#[derive(Error, Debug)]
pub enum MarcError {
    /// Error indicating an invalid or malformed MARC record.
    #[error("Invalid MARC record: {0}")]
    InvalidRecord(String),

    /// Error indicating an invalid leader (24-byte header).
    #[error("Invalid leader: {0}")]
    InvalidLeader(String),

    /// Error indicating an invalid field structure.
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// Error related to character encoding selection or UTF-8 data.
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// A code table could not be loaded or a register configuration is invalid.
    #[error("Code table error: {0}")]
    CodeTable(String),

    /// Error indicating a truncated or incomplete record.
    #[error("Truncated record: {0}")]
    TruncatedRecord(String),

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`MarcError`].
pub type Result<T> = std::result::Result<T, MarcError>;
