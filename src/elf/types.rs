//! Decoded ELF64 header structures and identification constants.

use crate::error::{Error, Result};
use crate::view::ByteView;

/// The four magic bytes every ELF object starts with.
pub const ELF_MAGIC: &[u8; 4] = b"\x7fELF";

/// Identification class byte for 64-bit objects.
pub const CLASS_ELF64: i64 = 2;

/// Identification encoding byte for little-endian objects.
pub const DATA_LITTLE_ENDIAN: i64 = 1;

/// The current identification version.
pub const IDENT_VERSION: i64 = 1;

/// The 16-byte identification block at the start of every ELF file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identification {
    /// Magic bytes, `7f 45 4c 46` in a well-formed object.
    pub magic: [u8; 4],
    /// Word size class: 1 for 32-bit, 2 for 64-bit.
    pub elf_class: i64,
    /// Data encoding: 1 for little-endian, 2 for big-endian.
    pub data_encoding: i64,
    /// Identification format version.
    pub ident_version: i64,
    /// Target OS/ABI identifier.
    pub os_abi: i64,
    /// ABI version for the target in `os_abi`.
    pub os_abi_version: i64,
}

impl Identification {
    /// Check that this identification describes a file the rest of the
    /// crate can navigate: ELF magic, 64-bit, little-endian, current
    /// identification version.
    ///
    /// Checks run in that order and stop at the first failure, so a file
    /// with several problems always reports the earliest one.
    pub fn validate(&self) -> Result<()> {
        if &self.magic != ELF_MAGIC {
            return Err(Error::InvalidMagic { found: self.magic });
        }
        if self.elf_class != CLASS_ELF64 {
            return Err(Error::UnsupportedWordSize {
                found: self.elf_class,
            });
        }
        if self.data_encoding != DATA_LITTLE_ENDIAN {
            return Err(Error::UnsupportedEndianness {
                found: self.data_encoding,
            });
        }
        if self.ident_version != IDENT_VERSION {
            return Err(Error::UnsupportedVersion {
                found: self.ident_version,
            });
        }
        Ok(())
    }
}

/// The 64-byte ELF64 file header.
///
/// Integer fields keep the signed values the record decoder produces; the
/// navigation layer converts them to offsets and counts at the point of
/// use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// The leading identification block.
    pub identification: Identification,
    /// Object file type (relocatable, executable, shared, core).
    pub object_type: i64,
    /// Target machine architecture.
    pub architecture: i64,
    /// Object file format version.
    pub object_version: i64,
    /// Virtual address execution starts at, zero when not executable.
    pub entry_address: i64,
    /// File offset of the program header table, zero when absent.
    pub program_header_offset: i64,
    /// File offset of the section header table, zero when absent.
    pub section_header_offset: i64,
    /// Processor-specific flag bytes, uninterpreted.
    pub flags: [u8; 4],
    /// Size of this header in bytes.
    pub elf_header_size: i64,
    /// Size of one program header table entry.
    pub program_header_size: i64,
    /// Number of program header table entries.
    pub program_header_count: i64,
    /// Size of one section header table entry.
    pub section_header_size: i64,
    /// Number of section header table entries.
    pub section_header_count: i64,
    /// Section header table index of the section name string table.
    pub section_header_index: i64,
}

/// One entry of the program header table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramHeader {
    pub segment_type: i64,
    pub flags: i64,
    /// File offset of the segment's content.
    pub file_offset: i64,
    pub virtual_address: i64,
    pub physical_address: i64,
    /// Bytes the segment occupies in the file.
    pub size_in_file: i64,
    /// Bytes the segment occupies in memory, at least `size_in_file`.
    pub size_in_memory: i64,
    pub alignment: i64,
}

/// One entry of the section header table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader {
    /// Offset of the section's name in the section name string table.
    pub name_offset: i64,
    pub section_type: i64,
    pub flags: i64,
    pub virtual_address: i64,
    /// File offset of the section's content.
    pub file_offset: i64,
    /// Size of the section's content in bytes.
    pub size: i64,
    pub link: i64,
    pub info: i64,
    pub alignment: i64,
    /// Size of one entry for sections holding fixed-size records.
    pub entry_size: i64,
}

/// A program header paired with a view of the segment bytes it covers.
#[derive(Debug, Clone, Copy)]
pub struct Program<'a> {
    pub header: ProgramHeader,
    pub data: ByteView<'a>,
}

/// A section header paired with its resolved name and content bytes.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    pub header: SectionHeader,
    pub name: &'a str,
    pub data: ByteView<'a>,
}
