use crate::areas::repository::Repository;
use crate::artifacts::commit::commit_id::CommitId;
use crate::errors::{Result, UgitError};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

impl Repository {
    /// Restore the files of a past commit into the working directory
    ///
    /// The selection is the *current* index, not the one the commit was made
    /// from. Every listed path is copied from the commit's snapshot over the
    /// working file. A path the commit never captured aborts the checkout with
    /// `SnapshotFileMissing`; files restored before it stay restored. HEAD,
    /// the index and the staging area are left as they are.
    ///
    /// After restoring, the commit's message is looked up in the history log.
    /// A log that cannot be read fails the checkout even though the files are
    /// already in place.
    ///
    /// Returns the number of distinct paths restored.
    pub async fn checkout(&self, target: &str) -> Result<usize> {
        self.ensure_initialized()?;

        let commit_id = CommitId::from(target);
        if !self.commit_store().contains(&commit_id) {
            return Err(UgitError::CommitNotFound(commit_id));
        }

        let index = self.index();
        let index = index.lock().await;
        let paths = index.entries()?;

        for (restored, path) in paths.iter().enumerate() {
            let Some(source) = self.commit_store().snapshot_file(&commit_id, path) else {
                warn!(commit = %commit_id, restored, ?path, "checkout aborted, partial restore left in place");
                return Err(UgitError::SnapshotFileMissing {
                    commit: commit_id,
                    path: path.clone(),
                });
            };

            if let Err(e) = self.workspace().restore_file(&source, path) {
                warn!(commit = %commit_id, restored, ?path, "checkout aborted, partial restore left in place");
                return Err(e);
            }
            debug!(commit = %commit_id, ?path, "restored file");
        }

        let restored = paths.iter().collect::<BTreeSet<_>>().len();
        info!(commit = %commit_id, restored, "checked out commit");

        self.write_output(format_args!(
            "Restored {} file(s) from commit {}",
            restored, commit_id
        ))?;

        if let Some(entry) = self.history().find(&commit_id)? {
            self.write_output(format_args!("    {}", entry.short_message()))?;
        }

        Ok(restored)
    }
}
