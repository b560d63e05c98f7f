//! Index (list of staged paths)
//!
//! The index records every path passed to `add`, in the order it was added.
//! It is append-only: paths are never removed or deduplicated, so a file added
//! twice appears twice. Both `commit` and `checkout` use the current index as
//! the selection of files to copy.
//!
//! ## File Format
//!
//! `.ugit/index` holds one relative path per line, each terminated by `\n`.
//! Paths are stored as their raw OS bytes, so names that are not valid UTF-8
//! survive unchanged. A path containing `\n` cannot be stored; `add` rejects
//! it before anything is staged.

use crate::errors::{IoContext, Result};
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

const ENTRY_TERMINATOR: u8 = b'\n';

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.ugit/index`)
    path: Box<Path>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty index file
    pub fn create(&self) -> Result<()> {
        std::fs::write(self.path(), b"")
            .io_context(|| format!("failed to create index file {:?}", self.path()))
    }

    /// Read every listed path, oldest first
    ///
    /// # Locking
    ///
    /// Holds a shared lock on the index file while reading.
    pub fn entries(&self) -> Result<Vec<PathBuf>> {
        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path())
            .io_context(|| format!("failed to open index file {:?}", self.path()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)
            .io_context(|| format!("failed to lock index file {:?}", self.path()))?;

        let mut content = Vec::new();
        lock.deref_mut()
            .read_to_end(&mut content)
            .io_context(|| format!("failed to read index file {:?}", self.path()))?;

        Ok(content
            .split(|byte| *byte == ENTRY_TERMINATOR)
            .filter(|line| !line.is_empty())
            .map(decode_entry)
            .collect())
    }

    /// Append one path; duplicates are kept
    ///
    /// # Locking
    ///
    /// Holds an exclusive lock on the index file while appending.
    pub fn append(&self, entry: &Path) -> Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .append(true)
            .open(self.path())
            .io_context(|| format!("failed to open index file {:?}", self.path()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)
            .io_context(|| format!("failed to lock index file {:?}", self.path()))?;

        let mut line = entry.as_os_str().as_encoded_bytes().to_vec();
        line.push(ENTRY_TERMINATOR);

        lock.deref_mut()
            .write_all(&line)
            .io_context(|| format!("failed to append to index file {:?}", self.path()))
    }
}

/// Whether `path` fits on a single index line
pub fn is_recordable(path: &Path) -> bool {
    !path
        .as_os_str()
        .as_encoded_bytes()
        .contains(&ENTRY_TERMINATOR)
}

#[cfg(unix)]
fn decode_entry(bytes: &[u8]) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;

    PathBuf::from(std::ffi::OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn decode_entry(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}
