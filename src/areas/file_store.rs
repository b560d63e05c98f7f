//! File store primitives
//!
//! The handful of file system operations every area is built from: an
//! existence check, a whole-file copy, directory creation and small text file
//! reads and writes. Each maps the underlying `std::io::Error` into a
//! `UgitError` naming the path involved.

use crate::errors::{IoContext, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Permission bits of the `.ugit` marker directory
pub const MARKER_DIR_MODE: u32 = 0o700;

pub fn file_exists(path: &Path) -> bool {
    std::fs::metadata(path).is_ok()
}

/// Create a single directory; parents must already exist
pub fn create_directory(path: &Path) -> std::io::Result<()> {
    let mut builder = std::fs::DirBuilder::new();

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(MARKER_DIR_MODE);
    }

    builder.create(path)
}

/// Copy the full contents of `src` over `dest`, truncating `dest` if present
///
/// No intermediate directories are created for `dest`.
pub fn copy_file(src: &Path, dest: &Path) -> Result<u64> {
    std::fs::copy(src, dest)
        .io_context(|| format!("failed to copy {:?} to {:?}", src, dest))
}

pub fn read_text_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).io_context(|| format!("failed to read {:?}", path))
}

pub fn write_text_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).io_context(|| format!("failed to write {:?}", path))
}

/// Append to an existing file; a missing file is an error
pub fn append_text_file(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .io_context(|| format!("failed to open {:?} for append", path))?;

    file.write_all(content.as_bytes())
        .io_context(|| format!("failed to append to {:?}", path))
}
