//! Decoding of ELF64 headers from raw bytes into typed structures.
//!
//! Every function here is a pure read: it slices the bytes it needs,
//! binds them to the matching schema, and copies field values out into
//! an owned struct. Nothing is cached and the input is never modified.

use crate::elf::schema;
use crate::elf::types::{FileHeader, Identification, ProgramHeader, SectionHeader};
use crate::error::{Error, Result};
use crate::record::Record;
use crate::view::ByteView;

/// Decode the identification block at the start of `data`.
///
/// This only decodes; use [`Identification::validate`] to check the
/// result describes a supported object.
pub fn parse_identification(data: ByteView<'_>) -> Result<Identification> {
    let schema = schema::identification_schema()?;
    let head = data.slice(0, schema.total_width())?;
    let record = Record::new(head, &schema)?;
    read_identification(&record)
}

/// Decode the full file header at the start of `data`.
pub fn parse_file_header(data: ByteView<'_>) -> Result<FileHeader> {
    let schema = schema::file_header_schema()?;
    let head = data.slice(0, schema.total_width())?;
    let record = Record::new(head, &schema)?;
    Ok(FileHeader {
        identification: read_identification(&record)?,
        object_type: record.int("object_type")?,
        architecture: record.int("architecture")?,
        object_version: record.int("object_version")?,
        entry_address: record.int("entry_address")?,
        program_header_offset: record.int("program_header_offset")?,
        section_header_offset: record.int("section_header_offset")?,
        flags: fixed_bytes(record.bytes("flags")?)?,
        elf_header_size: record.int("elf_header_size")?,
        program_header_size: record.int("program_header_size")?,
        program_header_count: record.int("program_header_count")?,
        section_header_size: record.int("section_header_size")?,
        section_header_count: record.int("section_header_count")?,
        section_header_index: record.int("section_header_index")?,
    })
}

/// Decode one program header table entry at `offset`.
///
/// `entry_size` comes from the file header; an entry size that differs
/// from the 56-byte layout fails with [`Error::SchemaMismatch`].
pub fn parse_program_header(
    data: ByteView<'_>,
    offset: usize,
    entry_size: usize,
) -> Result<ProgramHeader> {
    let schema = schema::program_header_schema()?;
    let entry = data.slice(offset, entry_size)?;
    let record = Record::new(entry, &schema)?;
    Ok(ProgramHeader {
        segment_type: record.int("segment_type")?,
        flags: record.int("flags")?,
        file_offset: record.int("file_offset")?,
        virtual_address: record.int("virtual_address")?,
        physical_address: record.int("physical_address")?,
        size_in_file: record.int("size_in_file")?,
        size_in_memory: record.int("size_in_memory")?,
        alignment: record.int("alignment")?,
    })
}

/// Decode one section header table entry at `offset`.
///
/// `entry_size` comes from the file header; an entry size that differs
/// from the 64-byte layout fails with [`Error::SchemaMismatch`].
pub fn parse_section_header(
    data: ByteView<'_>,
    offset: usize,
    entry_size: usize,
) -> Result<SectionHeader> {
    let schema = schema::section_header_schema()?;
    let entry = data.slice(offset, entry_size)?;
    let record = Record::new(entry, &schema)?;
    Ok(SectionHeader {
        name_offset: record.int("name_offset")?,
        section_type: record.int("section_type")?,
        flags: record.int("flags")?,
        virtual_address: record.int("virtual_address")?,
        file_offset: record.int("file_offset")?,
        size: record.int("size")?,
        link: record.int("link")?,
        info: record.int("info")?,
        alignment: record.int("alignment")?,
        entry_size: record.int("entry_size")?,
    })
}

fn read_identification(record: &Record<'_, '_>) -> Result<Identification> {
    Ok(Identification {
        magic: fixed_bytes(record.bytes("magic")?)?,
        elf_class: record.int("elf_class")?,
        data_encoding: record.int("data_encoding")?,
        ident_version: record.int("ident_version")?,
        os_abi: record.int("os_abi")?,
        os_abi_version: record.int("os_abi_version")?,
    })
}

fn fixed_bytes<const N: usize>(view: ByteView<'_>) -> Result<[u8; N]> {
    view.as_bytes()
        .try_into()
        .map_err(|_| Error::SchemaMismatch {
            expected: N,
            actual: view.len(),
        })
}
