//! Error types for ELF64 navigation.
//!
//! This module provides structured error types using thiserror so callers
//! can match on the exact failure instead of parsing message strings.

use thiserror::Error;

/// Main error type for elfview operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A requested byte range falls outside the underlying view
    #[error("range {offset:#x}+{size:#x} is outside a view of {len} bytes")]
    OutOfRange { offset: u64, size: u64, len: u64 },

    /// Record data does not match the schema's total width
    #[error("schema describes {expected} bytes but record data is {actual} bytes")]
    SchemaMismatch { expected: usize, actual: usize },

    /// Two fields in one schema share a name
    #[error("duplicate field name: {0}")]
    DuplicateField(&'static str),

    /// A field name not present in the schema was requested
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A field was read through an accessor of the wrong kind
    #[error("field {name} does not hold {requested}")]
    FieldKindMismatch {
        name: String,
        requested: &'static str,
    },

    /// The file does not start with the ELF magic bytes
    #[error("invalid magic bytes: {found:02x?}")]
    InvalidMagic { found: [u8; 4] },

    /// The file is not a 64-bit ELF object
    #[error("unsupported word size class: {found}")]
    UnsupportedWordSize { found: i64 },

    /// The file is not little-endian
    #[error("unsupported data encoding: {found}")]
    UnsupportedEndianness { found: i64 },

    /// The identification version is not the expected current version
    #[error("unsupported identification version: {found}")]
    UnsupportedVersion { found: i64 },

    /// A header table index is at or past the table's entry count
    #[error("index {index} is out of range for a table of {count} entries")]
    IndexOutOfRange { index: usize, count: usize },

    /// No section with the requested name exists
    #[error("no section named {0:?}")]
    SectionNotFound(String),

    /// String table bytes are not valid UTF-8
    #[error("string table entry at offset {offset:#x} is not valid UTF-8")]
    InvalidEncoding { offset: u64 },

    /// File exceeds the configured mapping size limit
    #[error("file size {found} exceeds limit {limit}")]
    FileTooLarge { limit: u64, found: u64 },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for elfview operations
pub type Result<T> = std::result::Result<T, Error>;
