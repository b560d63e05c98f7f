//! History log entry
//!
//! ## Format
//!
//! Each commit appends one block to `.ugit/log`:
//! ```text
//! Commit: <id>
//! Fecha: <ctime string>
//! Mensaje: <message>
//! ----------------------------------------
//! ```
//!
//! Blocks are never rewritten; the file is read back in stored order.
//! Messages are stored verbatim, so a message may not contain a separator
//! line of its own.

use crate::artifacts::commit::commit_id::CommitId;
use crate::errors::{Result, UgitError};
use chrono::{DateTime, FixedOffset};
use regex::Regex;
use std::sync::LazyLock;

pub const ENTRY_SEPARATOR: &str = "----------------------------------------";

/// `ctime(3)` layout, e.g. `Sun Jan  1 12:00:00 2023`
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

static ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^Commit: ([^\n]*)\nFecha: ([^\n]*)\nMensaje: (.*?)\n-{40}$")
        .expect("log entry pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    id: CommitId,
    date: String,
    message: String,
}

impl LogEntry {
    pub fn new(id: CommitId, timestamp: DateTime<FixedOffset>, message: &str) -> Self {
        LogEntry {
            id,
            date: timestamp.format(CTIME_FORMAT).to_string(),
            message: message.to_string(),
        }
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    /// Render the ledger block, separator line included
    pub fn render(&self) -> String {
        format!(
            "Commit: {}\nFecha: {}\nMensaje: {}\n{}\n",
            self.id, self.date, self.message, ENTRY_SEPARATOR
        )
    }

    /// Reject messages that would end their block early in the ledger
    pub fn check_message(message: &str) -> Result<()> {
        if message.split('\n').any(|line| line == ENTRY_SEPARATOR) {
            return Err(UgitError::InvalidMessage);
        }
        Ok(())
    }

    /// Parse every complete block of a ledger, oldest first
    ///
    /// A trailing block without its separator (a torn append) is skipped.
    pub fn parse_all(ledger: &str) -> Vec<LogEntry> {
        ENTRY_REGEX
            .captures_iter(ledger)
            .map(|caps| LogEntry {
                id: CommitId::new(&caps[1]),
                date: caps[2].to_string(),
                message: caps[3].to_string(),
            })
            .collect()
    }
}
