//! Commit identifier
//!
//! An identifier names a directory under `.ugit/commits`. The default scheme
//! renders the epoch second of the commit as a decimal string
//! (e.g. `1700000000`); the content scheme produces a 40 character SHA-1 hex
//! digest. Both are plain ASCII alphanumerics, which is what makes an
//! identifier safe to join onto the commit store path.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    pub fn new(id: impl Into<String>) -> Self {
        CommitId(id.into())
    }

    /// True when the identifier can only name a direct child of the commit store
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty() && self.0.chars().all(|c| c.is_ascii_alphanumeric())
    }

    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CommitId {
    fn from(id: &str) -> Self {
        CommitId::new(id.trim())
    }
}
