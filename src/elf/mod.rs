//! Read-only navigation of ELF64 objects.
//!
//! [`Elf64File`] wraps a byte view of a complete object file and resolves
//! headers, segments, sections and names on every call, straight from the
//! underlying bytes. No derived state is cached between calls, so results
//! always reflect the bytes as they are now, and a handle is nothing more
//! than the view it was built from.

pub mod headers;
pub mod schema;
pub mod types;

pub use types::{
    FileHeader, Identification, Program, ProgramHeader, Section, SectionHeader, CLASS_ELF64,
    DATA_LITTLE_ENDIAN, ELF_MAGIC, IDENT_VERSION,
};

use crate::error::{Error, Result};
use crate::strtab::StringTable;
use crate::view::ByteView;

/// A read-only ELF64 object backed by borrowed bytes.
///
/// Construction never touches the bytes; every accessor decodes what it
/// needs on demand and reports malformed structures at the point they
/// are encountered.
#[derive(Debug, Clone, Copy)]
pub struct Elf64File<'a> {
    data: ByteView<'a>,
}

/// One header table's placement, lifted out of a decoded file header.
struct Table {
    offset: usize,
    entry_size: usize,
    count: usize,
}

impl Table {
    fn programs(header: &FileHeader) -> Self {
        Self {
            offset: header.program_header_offset as usize,
            entry_size: header.program_header_size as usize,
            count: header.program_header_count as usize,
        }
    }

    fn sections(header: &FileHeader) -> Self {
        Self {
            offset: header.section_header_offset as usize,
            entry_size: header.section_header_size as usize,
            count: header.section_header_count as usize,
        }
    }

    fn entry_offset(&self, index: usize) -> Result<usize> {
        if index >= self.count {
            return Err(Error::IndexOutOfRange {
                index,
                count: self.count,
            });
        }
        // Saturate instead of wrapping; an absurd offset fails the
        // subsequent slice with the real view length in the error.
        Ok(self
            .offset
            .saturating_add(index.saturating_mul(self.entry_size)))
    }
}

impl<'a> Elf64File<'a> {
    /// Wrap a view of a complete object file.
    pub fn new(data: ByteView<'a>) -> Self {
        Self { data }
    }

    /// The underlying file bytes.
    pub fn data(&self) -> ByteView<'a> {
        self.data
    }

    /// Decode and validate the identification block.
    ///
    /// Succeeds only for little-endian ELF64 objects with the current
    /// identification version.
    pub fn identification(&self) -> Result<Identification> {
        let identification = headers::parse_identification(self.data)?;
        identification.validate()?;
        Ok(identification)
    }

    /// Decode the file header.
    ///
    /// The identification block is validated first, so this fails on
    /// anything [`Elf64File::identification`] would reject.
    pub fn header(&self) -> Result<FileHeader> {
        self.identification()?;
        headers::parse_file_header(self.data)
    }

    /// Decode the program header at `index`.
    pub fn program_header(&self, index: usize) -> Result<ProgramHeader> {
        let header = self.header()?;
        self.program_header_at(&header, index)
    }

    /// Decode the section header at `index`.
    pub fn section_header(&self, index: usize) -> Result<SectionHeader> {
        let header = self.header()?;
        self.section_header_at(&header, index)
    }

    /// Decode the program header at `index` together with a view of the
    /// segment bytes it covers in the file.
    pub fn program(&self, index: usize) -> Result<Program<'a>> {
        let header = self.header()?;
        let program_header = self.program_header_at(&header, index)?;
        let data = self.data.slice(
            program_header.file_offset as usize,
            program_header.size_in_file as usize,
        )?;
        Ok(Program {
            header: program_header,
            data,
        })
    }

    /// The section name string table the file header points at.
    pub fn string_table(&self) -> Result<StringTable<'a>> {
        let header = self.header()?;
        self.string_table_for(&header)
    }

    /// Resolve the section at `index`: header, name and content.
    pub fn section_by_index(&self, index: usize) -> Result<Section<'a>> {
        let header = self.header()?;
        let section_header = self.section_header_at(&header, index)?;
        let strings = self.string_table_for(&header)?;
        self.section_from(section_header, strings)
    }

    /// Resolve the first section named `name`.
    ///
    /// Sections are scanned in table order; a file with duplicate names
    /// yields the lowest-index match. Fails with
    /// [`Error::SectionNotFound`] when no section has that name.
    pub fn section_by_name(&self, name: &str) -> Result<Section<'a>> {
        let header = self.header()?;
        let strings = self.string_table_for(&header)?;
        let count = Table::sections(&header).count;
        for index in 0..count {
            let section_header = self.section_header_at(&header, index)?;
            if strings.get(section_header.name_offset as usize)? == name {
                return self.section_from(section_header, strings);
            }
        }
        Err(Error::SectionNotFound(name.to_string()))
    }

    /// Iterate over all program headers with their segment bytes.
    pub fn programs(&self) -> Result<ProgramIter<'a>> {
        let header = self.header()?;
        Ok(ProgramIter {
            file: *self,
            index: 0,
            count: Table::programs(&header).count,
        })
    }

    /// Iterate over all sections in table order.
    pub fn sections(&self) -> Result<SectionIter<'a>> {
        let header = self.header()?;
        Ok(SectionIter {
            file: *self,
            index: 0,
            count: Table::sections(&header).count,
        })
    }

    fn program_header_at(&self, header: &FileHeader, index: usize) -> Result<ProgramHeader> {
        let table = Table::programs(header);
        let offset = table.entry_offset(index)?;
        headers::parse_program_header(self.data, offset, table.entry_size)
    }

    fn section_header_at(&self, header: &FileHeader, index: usize) -> Result<SectionHeader> {
        let table = Table::sections(header);
        let offset = table.entry_offset(index)?;
        headers::parse_section_header(self.data, offset, table.entry_size)
    }

    fn string_table_for(&self, header: &FileHeader) -> Result<StringTable<'a>> {
        let strtab = self.section_header_at(header, header.section_header_index as usize)?;
        let content = self
            .data
            .slice(strtab.file_offset as usize, strtab.size as usize)?;
        Ok(StringTable::new(content))
    }

    fn section_from(
        &self,
        header: SectionHeader,
        strings: StringTable<'a>,
    ) -> Result<Section<'a>> {
        let name = strings.get(header.name_offset as usize)?;
        let data = self
            .data
            .slice(header.file_offset as usize, header.size as usize)?;
        Ok(Section { header, name, data })
    }
}

/// Iterator over program headers, yielding [`Program`]s.
///
/// Stops after the first error; a malformed entry count would otherwise
/// repeat the same failure for every remaining index.
#[derive(Debug, Clone)]
pub struct ProgramIter<'a> {
    file: Elf64File<'a>,
    index: usize,
    count: usize,
}

impl<'a> Iterator for ProgramIter<'a> {
    type Item = Result<Program<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        let item = self.file.program(self.index);
        self.index += 1;
        if item.is_err() {
            self.index = self.count;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.count - self.index))
    }
}

/// Iterator over sections, yielding fully resolved [`Section`]s.
///
/// Stops after the first error, like [`ProgramIter`].
#[derive(Debug, Clone)]
pub struct SectionIter<'a> {
    file: Elf64File<'a>,
    index: usize,
    count: usize,
}

impl<'a> Iterator for SectionIter<'a> {
    type Item = Result<Section<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        let item = self.file.section_by_index(self.index);
        self.index += 1;
        if item.is_err() {
            self.index = self.count;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.count - self.index))
    }
}
