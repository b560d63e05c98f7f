use crate::areas::repository::Repository;
use crate::artifacts::commit::commit_id::CommitId;
use crate::artifacts::commit::id_generator::IdSeed;
use crate::artifacts::log::log_entry::LogEntry;
use crate::errors::Result;
use tracing::{debug, info, warn};

impl Repository {
    /// Snapshot every indexed file into a new commit
    ///
    /// A message containing a line of exactly 40 dashes is rejected with
    /// `InvalidMessage` before anything is written.
    ///
    /// Steps, in order: generate an id, create its commit directory, copy each
    /// indexed path from the staging area, append the ledger entry, replace
    /// HEAD. An existing directory for the id aborts with `IdCollision`. A
    /// missing staged copy aborts with `StagedFileMissing` and leaves the
    /// partially filled directory on disk; neither the ledger nor HEAD
    /// mention it.
    pub async fn commit(&self, message: &str) -> Result<CommitId> {
        self.ensure_initialized()?;
        LogEntry::check_message(message)?;

        let index = self.index();
        let index = index.lock().await;

        let timestamp = self.clock().now();
        let paths = index.entries()?;
        let commit_id = self.id_generator().generate(&IdSeed {
            timestamp,
            paths: &paths,
            stage: self.stage(),
        })?;

        let snapshot_path = self.commit_store().create_snapshot(&commit_id)?;

        for (captured, path) in paths.iter().enumerate() {
            if let Err(e) = self.commit_store().capture(&commit_id, self.stage(), path) {
                warn!(
                    commit = %commit_id,
                    captured,
                    ?snapshot_path,
                    "commit aborted, partial snapshot left on disk"
                );
                return Err(e);
            }
            debug!(commit = %commit_id, ?path, "captured staged file");
        }

        let entry = LogEntry::new(commit_id.clone(), timestamp, message);
        self.history().append(&entry)?;
        self.refs().update_head(&commit_id)?;

        info!(commit = %commit_id, files = paths.len(), "created commit");
        self.write_output(format_args!("[{}] {}", commit_id, entry.short_message()))?;

        Ok(commit_id)
    }
}
