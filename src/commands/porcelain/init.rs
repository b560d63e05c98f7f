use crate::areas::file_store;
use crate::areas::repository::Repository;
use crate::errors::{Result, UgitError};
use std::io::ErrorKind;
use tracing::info;

impl Repository {
    /// Create `.ugit` with an empty stage, commit store, index and ledger
    ///
    /// Fails without touching anything if `.ugit` already exists. A later
    /// step failing leaves the earlier directories and files in place.
    pub async fn init(&self) -> Result<()> {
        file_store::create_directory(self.ugit_path()).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => UgitError::AlreadyInitialized(self.ugit_path().into()),
            _ => UgitError::io(
                format!("failed to create {:?}", self.ugit_path()),
                e,
            ),
        })?;

        self.stage().create()?;
        self.refs().init_head()?;
        self.commit_store().create()?;
        self.history().create()?;

        let index = self.index();
        let index = index.lock().await;
        index.create()?;

        info!(path = ?self.path(), "initialized repository");
        self.write_output(format_args!(
            "Initialized empty ugit repository in {}",
            self.path().display()
        ))
    }
}
