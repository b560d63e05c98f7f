use crate::areas::file_store;
use crate::errors::Result;
use std::path::{Path, PathBuf};

/// Working directory the repository tracks
///
/// Paths handed to the workspace are relative to its root.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_path(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }

    pub fn file_exists(&self, file_path: &Path) -> bool {
        file_store::file_exists(&self.file_path(file_path))
    }

    /// Overwrite `file_path` with the bytes of `source`
    ///
    /// No backup is taken and no conflict is detected.
    pub fn restore_file(&self, source: &Path, file_path: &Path) -> Result<u64> {
        file_store::copy_file(source, &self.file_path(file_path))
    }
}
