//! Error types for ugit operations
//!
//! Every failure the snapshot engine can report falls into one of four groups:
//!
//! - Precondition errors: the repository, a source file, a staged copy or a
//!   commit the operation depends on is missing, or an argument cannot be
//!   recorded faithfully
//! - I/O failures: the underlying file system refused a read, write, copy or
//!   directory creation
//! - Identifier collisions: a commit directory already exists for a fresh id
//! - Configuration errors: an environment override could not be parsed
//!
//! Usage errors (missing command, missing argument) never reach the engine;
//! clap reports them at the command boundary.

use crate::artifacts::commit::commit_id::CommitId;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, UgitError>;

/// Exit status reported for engine failures (`-1` as a process status)
pub const ENGINE_FAILURE_EXIT_CODE: u8 = 255;

#[derive(Debug, Error)]
pub enum UgitError {
    /// The `.ugit` marker directory is missing
    #[error("not a ugit repository (missing {0:?}); run `ugit init` first")]
    NotInitialized(PathBuf),

    /// `init` found an existing marker directory
    #[error("repository already exists at {0:?}")]
    AlreadyInitialized(PathBuf),

    /// `add` was given a path that does not exist in the working directory
    #[error("file '{}' does not exist", .0.display())]
    SourceMissing(PathBuf),

    /// `add` was given an absolute path or one that climbs out of the workspace
    #[error("path '{}' is outside the working directory", .0.display())]
    PathOutsideWorkspace(PathBuf),

    /// `add` was given a path the line-based index cannot hold
    #[error("path {0:?} contains a line break and cannot be recorded in the index")]
    UnrecordablePath(PathBuf),

    /// `commit` was given a message containing a ledger separator line
    #[error("commit message cannot contain a line of 40 dashes")]
    InvalidMessage,

    /// The index lists a path whose staged copy is gone
    #[error("staged copy of '{}' is missing from the staging area", .0.display())]
    StagedFileMissing(PathBuf),

    /// `checkout` was given an id with no commit directory
    #[error("commit {0} not found")]
    CommitNotFound(CommitId),

    /// The index lists a path the target commit never captured
    #[error("commit {commit} has no snapshot of '{}'", .path.display())]
    SnapshotFileMissing { commit: CommitId, path: PathBuf },

    /// A commit directory already exists for the generated id
    #[error("commit {0} already exists; another commit was issued with the same identifier")]
    IdCollision(CommitId),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl UgitError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        UgitError::Io {
            context: context.into(),
            source,
        }
    }

    pub fn exit_code(&self) -> u8 {
        ENGINE_FAILURE_EXIT_CODE
    }
}

/// Attach a human readable context to an `std::io::Result`
pub trait IoContext<T> {
    fn io_context<F, S>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn io_context<F, S>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| UgitError::io(context(), source))
    }
}
