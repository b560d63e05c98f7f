//! History log
//!
//! `.ugit/log` is an append-only ledger with one block per commit, in commit
//! order. See `artifacts::log::log_entry` for the block format.

use crate::areas::file_store;
use crate::artifacts::commit::commit_id::CommitId;
use crate::artifacts::log::log_entry::LogEntry;
use crate::errors::Result;
use derive_new::new;
use std::path::Path;

#[derive(Debug, Clone, new)]
pub struct History {
    /// Path to the ledger file (`.ugit/log`)
    path: Box<Path>,
}

impl History {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn create(&self) -> Result<()> {
        file_store::write_text_file(self.path(), "")
    }

    pub fn append(&self, entry: &LogEntry) -> Result<()> {
        file_store::append_text_file(self.path(), &entry.render())
    }

    /// Ledger contents exactly as stored
    pub fn read_raw(&self) -> Result<String> {
        file_store::read_text_file(self.path())
    }

    pub fn entries(&self) -> Result<Vec<LogEntry>> {
        Ok(LogEntry::parse_all(&self.read_raw()?))
    }

    /// Latest entry recorded for `id`
    pub fn find(&self, id: &CommitId) -> Result<Option<LogEntry>> {
        Ok(self.entries()?.into_iter().rev().find(|entry| entry.id() == id))
    }
}
