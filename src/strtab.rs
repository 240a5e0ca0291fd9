//! NUL-terminated string tables.
//!
//! ELF string tables are a bag of NUL-terminated strings addressed by byte
//! offset. Offsets may point at the middle of a stored string, so lookups
//! scan forward from the given offset to the next NUL rather than indexing
//! a list of entries.

use crate::error::{Error, Result};
use crate::view::ByteView;

/// A read-only view of a string table's bytes.
#[derive(Debug, Clone, Copy)]
pub struct StringTable<'a> {
    view: ByteView<'a>,
}

impl<'a> StringTable<'a> {
    /// Wrap a view of string table content.
    pub fn new(view: ByteView<'a>) -> Self {
        Self { view }
    }

    /// Size of the table in bytes.
    pub fn len(&self) -> usize {
        self.view.len()
    }

    /// True when the table holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Resolve the string starting at `offset`.
    ///
    /// The string runs to the next NUL byte; a string with no terminator
    /// is truncated at the end of the table. The returned slice borrows
    /// the table's storage and never includes the terminator.
    pub fn get(&self, offset: usize) -> Result<&'a str> {
        let len = self.view.len();
        if offset >= len {
            return Err(Error::OutOfRange {
                offset: offset as u64,
                size: 1,
                len: len as u64,
            });
        }
        let end = self.view.find(0, offset, len).unwrap_or(len);
        std::str::from_utf8(&self.view.as_bytes()[offset..end]).map_err(|_| {
            Error::InvalidEncoding {
                offset: offset as u64,
            }
        })
    }
}
