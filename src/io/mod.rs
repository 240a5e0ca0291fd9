//! Memory-mapped file access.
//!
//! This module provides [`MappedFile`], which opens a file read-only,
//! memory-maps it, and hands out [`ByteView`]s borrowing the map. Views
//! stay valid exactly as long as the `MappedFile` lives, and nothing is
//! ever copied out of the map. A size limit guards against mapping
//! arbitrarily large files.

use crate::error::{Error, Result};
use crate::view::ByteView;
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Defines the resource limits for opening files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IOLimits {
    /// The absolute maximum file size that can be mapped.
    pub max_file_size: u64,
}

impl Default for IOLimits {
    fn default() -> Self {
        Self {
            max_file_size: 100 * 1024 * 1024, // 100MB
        }
    }
}

/// A read-only memory-mapped file.
pub struct MappedFile {
    path: PathBuf,
    // None when the file size is zero; memmap cannot map empty files.
    mmap: Option<Mmap>,
    file_size: u64,
}

impl MappedFile {
    /// Opens and maps `path` with the default limits.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_limits(path, IOLimits::default())
    }

    /// Opens a file, memory-maps it, and wraps it in a `MappedFile`.
    ///
    /// This function will fail if the file size exceeds
    /// `limits.max_file_size`.
    pub fn open_with_limits<P: AsRef<Path>>(path: P, limits: IOLimits) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let metadata = file.metadata()?;
        let file_size = metadata.len();

        debug!(
            path = %path.display(),
            size = file_size,
            limits.max_file_size = limits.max_file_size,
            "Opening file for mapping"
        );

        if file_size > limits.max_file_size {
            warn!(
                path = %path.display(),
                size = file_size,
                limit = limits.max_file_size,
                "File is too large"
            );
            return Err(Error::FileTooLarge {
                limit: limits.max_file_size,
                found: file_size,
            });
        }

        // For zero-length files, do not attempt to mmap (unsupported); keep None.
        // For non-empty files, map read-only.
        let mmap = if file_size == 0 {
            None
        } else {
            // Safety: The file is backed by a real file on disk and we only request a read-only map.
            Some(unsafe { Mmap::map(&file)? })
        };

        Ok(Self {
            path: path.to_path_buf(),
            mmap,
            file_size,
        })
    }

    /// Returns the path this file was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the total size of the underlying file in bytes.
    pub fn size(&self) -> u64 {
        self.file_size
    }

    /// Returns a view over the whole mapped file.
    ///
    /// The view borrows the map and cannot outlive this `MappedFile`.
    pub fn view(&self) -> ByteView<'_> {
        match &self.mmap {
            Some(map) => ByteView::new(&map[..]),
            None => ByteView::new(&[]),
        }
    }
}
