use crate::areas::index::is_recordable;
use crate::areas::repository::Repository;
use crate::errors::{Result, UgitError};
use std::path::{Component, Path};
use tracing::{debug, warn};

impl Repository {
    /// Stage one file
    ///
    /// Copies the file into the staging area, then appends its path to the
    /// index. The two writes are independent: if the index append fails the
    /// staged copy stays behind untracked.
    pub async fn add(&self, path: &Path) -> Result<()> {
        self.ensure_initialized()?;

        if path
            .components()
            .any(|c| matches!(c, Component::RootDir | Component::Prefix(_) | Component::ParentDir))
        {
            return Err(UgitError::PathOutsideWorkspace(path.to_path_buf()));
        }
        if !is_recordable(path) {
            return Err(UgitError::UnrecordablePath(path.to_path_buf()));
        }

        let index = self.index();
        let index = index.lock().await;

        if !self.workspace().file_exists(path) {
            return Err(UgitError::SourceMissing(path.to_path_buf()));
        }

        let bytes = self
            .stage()
            .store(&self.workspace().file_path(path), path)?;
        debug!(?path, bytes, "copied file into staging area");

        if let Err(e) = index.append(path) {
            warn!(?path, "staged copy written but index append failed");
            return Err(e);
        }

        self.write_output(format_args!(
            "Added '{}' to the staging area",
            path.display()
        ))
    }
}
