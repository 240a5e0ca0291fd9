//! Field layouts for the fixed-size ELF64 structures.
//!
//! Layouts are declared as ordered field lists and turned into
//! [`Schema`]s on demand. The file header layout is composed from the
//! identification layout plus the header-specific tail, mirroring how
//! the format itself nests the identification block inside the header.

use crate::error::Result;
use crate::record::FieldKind::{Bytes, Int};
use crate::record::IntWidth::{W1, W2, W4, W8};
use crate::record::{concat_fields, FieldKind, Schema};

/// The 16-byte identification block.
const IDENTIFICATION_FIELDS: [(&str, FieldKind); 7] = [
    ("magic", Bytes(4)),
    ("elf_class", Int(W1)),
    ("data_encoding", Int(W1)),
    ("ident_version", Int(W1)),
    ("os_abi", Int(W1)),
    ("os_abi_version", Int(W1)),
    ("padding", Bytes(7)),
];

/// File header fields following the identification block.
const FILE_HEADER_TAIL: [(&str, FieldKind); 13] = [
    ("object_type", Int(W2)),
    ("architecture", Int(W2)),
    ("object_version", Int(W4)),
    ("entry_address", Int(W8)),
    ("program_header_offset", Int(W8)),
    ("section_header_offset", Int(W8)),
    ("flags", Bytes(4)),
    ("elf_header_size", Int(W2)),
    ("program_header_size", Int(W2)),
    ("program_header_count", Int(W2)),
    ("section_header_size", Int(W2)),
    ("section_header_count", Int(W2)),
    ("section_header_index", Int(W2)),
];

/// One program header table entry, 56 bytes.
const PROGRAM_HEADER_FIELDS: [(&str, FieldKind); 8] = [
    ("segment_type", Int(W4)),
    ("flags", Int(W4)),
    ("file_offset", Int(W8)),
    ("virtual_address", Int(W8)),
    ("physical_address", Int(W8)),
    ("size_in_file", Int(W8)),
    ("size_in_memory", Int(W8)),
    ("alignment", Int(W8)),
];

/// One section header table entry, 64 bytes.
const SECTION_HEADER_FIELDS: [(&str, FieldKind); 10] = [
    ("name_offset", Int(W4)),
    ("section_type", Int(W4)),
    ("flags", Int(W8)),
    ("virtual_address", Int(W8)),
    ("file_offset", Int(W8)),
    ("size", Int(W8)),
    ("link", Int(W4)),
    ("info", Int(W4)),
    ("alignment", Int(W8)),
    ("entry_size", Int(W8)),
];

/// Schema for the identification block.
pub fn identification_schema() -> Result<Schema> {
    Schema::new(&IDENTIFICATION_FIELDS)
}

/// Schema for the full file header, identification fields included.
pub fn file_header_schema() -> Result<Schema> {
    Schema::new(&concat_fields(&IDENTIFICATION_FIELDS, &FILE_HEADER_TAIL))
}

/// Schema for one program header table entry.
pub fn program_header_schema() -> Result<Schema> {
    Schema::new(&PROGRAM_HEADER_FIELDS)
}

/// Schema for one section header table entry.
pub fn section_header_schema() -> Result<Schema> {
    Schema::new(&SECTION_HEADER_FIELDS)
}
