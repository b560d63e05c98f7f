//! Commit store
//!
//! `.ugit/commits` holds one directory per commit, named by its identifier.
//! A commit directory receives a copy of every staged file the index listed
//! when the commit was made and is never modified afterwards.
//!
//! ## Layout
//!
//! ```text
//! .ugit/commits/
//!     1672574400/
//!         foo.txt
//!     1672574460/
//!         foo.txt
//!         bar.txt
//! ```

use crate::areas::file_store;
use crate::areas::stage::Stage;
use crate::artifacts::commit::commit_id::CommitId;
use crate::errors::{IoContext, Result, UgitError};
use derive_new::new;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, new)]
pub struct CommitStore {
    /// Path to the commit store root (`.ugit/commits`)
    path: Box<Path>,
}

impl CommitStore {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn create(&self) -> Result<()> {
        file_store::create_directory(self.path())
            .io_context(|| format!("failed to create commit store {:?}", self.path()))
    }

    pub fn snapshot_path(&self, id: &CommitId) -> PathBuf {
        self.path.join(id.to_path())
    }

    /// True when a snapshot directory exists for `id`
    pub fn contains(&self, id: &CommitId) -> bool {
        id.is_well_formed() && self.snapshot_path(id).is_dir()
    }

    /// Create the snapshot directory for a fresh id
    ///
    /// An existing directory is never reused: it means another commit was
    /// issued with the same id, and the new commit fails with `IdCollision`.
    pub fn create_snapshot(&self, id: &CommitId) -> Result<PathBuf> {
        let snapshot_path = self.snapshot_path(id);

        match file_store::create_directory(&snapshot_path) {
            Ok(()) => Ok(snapshot_path),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(UgitError::IdCollision(id.clone()))
            }
            Err(e) => Err(UgitError::io(
                format!("failed to create commit directory {:?}", snapshot_path),
                e,
            )),
        }
    }

    /// Copy the staged copy of `relative` into the snapshot of `id`
    pub fn capture(&self, id: &CommitId, stage: &Stage, relative: &Path) -> Result<()> {
        if !stage.contains(relative) {
            return Err(UgitError::StagedFileMissing(relative.to_path_buf()));
        }

        let target = self.snapshot_path(id).join(relative);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .io_context(|| format!("failed to create directory {:?}", parent))?;
        }

        file_store::copy_file(&stage.entry_path(relative), &target)?;
        Ok(())
    }

    /// Location of `relative` inside the snapshot of `id`, if it was captured
    pub fn snapshot_file(&self, id: &CommitId, relative: &Path) -> Option<PathBuf> {
        let file_path = self.snapshot_path(id).join(relative);
        file_path.is_file().then_some(file_path)
    }
}
