//! HEAD pointer
//!
//! `.ugit/HEAD` holds a single value: the initial branch label (`master`)
//! until the first commit, then the id of the most recent commit. Every
//! successful commit replaces the whole file. No other operation reads it;
//! `checkout` takes its target explicitly and leaves HEAD untouched.

use crate::artifacts::commit::commit_id::CommitId;
use crate::errors::{IoContext, Result};
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;

/// Branch label written by `init`
pub const DEFAULT_BRANCH: &str = "master";

/// Value of HEAD as read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    /// No commit yet; HEAD names the initial branch
    Branch(String),
    Commit(CommitId),
}

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the HEAD file (`.ugit/HEAD`)
    head_path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> &Path {
        &self.head_path
    }

    /// Write the initial branch label
    pub fn init_head(&self) -> Result<()> {
        self.write_head(DEFAULT_BRANCH)
    }

    /// Point HEAD at a new commit
    pub fn update_head(&self, id: &CommitId) -> Result<()> {
        self.write_head(id.as_ref())
    }

    pub fn read_head(&self) -> Result<Head> {
        let content = std::fs::read_to_string(self.head_path())
            .io_context(|| format!("failed to read HEAD at {:?}", self.head_path()))?;
        let content = content.trim();

        if content == DEFAULT_BRANCH {
            Ok(Head::Branch(content.to_string()))
        } else {
            Ok(Head::Commit(CommitId::new(content)))
        }
    }

    /// Replace the content of HEAD under an exclusive lock
    fn write_head(&self, raw: &str) -> Result<()> {
        let mut head_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.head_path())
            .io_context(|| format!("failed to open HEAD at {:?}", self.head_path()))?;
        let mut lock = file_guard::lock(&mut head_file, Lock::Exclusive, 0, 1)
            .io_context(|| format!("failed to lock HEAD at {:?}", self.head_path()))?;

        lock.deref_mut()
            .write_all(raw.as_bytes())
            .io_context(|| format!("failed to write HEAD at {:?}", self.head_path()))
    }
}
