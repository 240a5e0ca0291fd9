//! Bounds-checked byte windows over borrowed data.
//!
//! A [`ByteView`] is a cheap, copyable handle on a byte slice. It never owns
//! or copies the underlying data; sub-views borrow from the same backing
//! storage, so a view taken from a mapped file stays valid exactly as long
//! as the mapping does.

use crate::error::{Error, Result};

/// A read-only window over a borrowed byte slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteView<'a> {
    data: &'a [u8],
}

impl<'a> ByteView<'a> {
    /// Create a view covering the whole of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Number of bytes in the view.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the view covers zero bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Read the single byte at `index`.
    pub fn byte(&self, index: usize) -> Result<u8> {
        self.data.get(index).copied().ok_or(Error::OutOfRange {
            offset: index as u64,
            size: 1,
            len: self.data.len() as u64,
        })
    }

    /// Take a sub-view of `size` bytes starting at `offset`.
    ///
    /// The range must lie entirely inside this view; the returned view
    /// borrows the same backing bytes.
    pub fn slice(&self, offset: usize, size: usize) -> Result<ByteView<'a>> {
        let out_of_range = || Error::OutOfRange {
            offset: offset as u64,
            size: size as u64,
            len: self.data.len() as u64,
        };
        let end = offset.checked_add(size).ok_or_else(out_of_range)?;
        let data = self.data.get(offset..end).ok_or_else(out_of_range)?;
        Ok(ByteView { data })
    }

    /// Find the first occurrence of `needle` in `[begin, end)`.
    ///
    /// `end` is clamped to the view length. Returns the absolute index
    /// within this view, or `None` when the byte does not occur or the
    /// range is empty.
    pub fn find(&self, needle: u8, begin: usize, end: usize) -> Option<usize> {
        if begin >= self.data.len() {
            return None;
        }
        let end = end.min(self.data.len());
        if begin >= end {
            return None;
        }
        memchr::memchr(needle, &self.data[begin..end]).map(|pos| begin + pos)
    }
}
