//! Zero-copy navigation of 64-bit little-endian ELF objects.
//!
//! elfview memory-maps an object file and resolves its headers, segments,
//! sections and names directly from the mapped bytes. Nothing is copied
//! and nothing is cached: every accessor decodes on demand, and all views
//! and names borrow from the mapping.
//!
//! ```no_run
//! use elfview::{Elf64File, MappedFile};
//!
//! # fn main() -> elfview::Result<()> {
//! let mapped = MappedFile::open("/bin/ls")?;
//! let file = Elf64File::new(mapped.view());
//!
//! let ident = file.identification()?;
//! println!("OS/ABI {}", ident.os_abi);
//!
//! let text = file.section_by_name(".text")?;
//! println!(".text holds {} bytes", text.data.len());
//! # Ok(())
//! # }
//! ```

pub mod elf;
pub mod error;
pub mod io;
pub mod record;
pub mod strtab;
pub mod view;

pub use elf::{
    Elf64File, FileHeader, Identification, Program, ProgramHeader, Section, SectionHeader,
};
pub use error::{Error, Result};
pub use io::{IOLimits, MappedFile};
pub use record::{FieldKind, FieldValue, IntWidth, Record, Schema};
pub use strtab::StringTable;
pub use view::ByteView;
