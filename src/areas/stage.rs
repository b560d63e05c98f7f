//! Staging area
//!
//! `.ugit/stage` mirrors the working directory paths passed to `add`, holding
//! a verbatim copy of each file as it was at `add` time. Adding a path again
//! overwrites its staged copy; nothing is ever removed.

use crate::areas::file_store;
use crate::errors::{IoContext, Result, UgitError};
use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, new)]
pub struct Stage {
    /// Path to the staging root (`.ugit/stage`)
    path: Box<Path>,
}

impl Stage {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn create(&self) -> Result<()> {
        file_store::create_directory(self.path())
            .io_context(|| format!("failed to create staging area {:?}", self.path()))
    }

    pub fn entry_path(&self, relative: &Path) -> PathBuf {
        self.path.join(relative)
    }

    pub fn contains(&self, relative: &Path) -> bool {
        self.entry_path(relative).is_file()
    }

    /// Copy a working file into the staging area under `relative`
    ///
    /// The staging root is the only directory that is guaranteed to exist, so
    /// a nested `relative` path fails unless its parent was created by hand.
    pub fn store(&self, source: &Path, relative: &Path) -> Result<u64> {
        file_store::copy_file(source, &self.entry_path(relative))
    }

    /// Read the staged bytes of `relative`
    pub fn read(&self, relative: &Path) -> Result<Vec<u8>> {
        if !self.contains(relative) {
            return Err(UgitError::StagedFileMissing(relative.to_path_buf()));
        }

        let staged_path = self.entry_path(relative);
        std::fs::read(&staged_path).io_context(|| format!("failed to read {:?}", staged_path))
    }
}
