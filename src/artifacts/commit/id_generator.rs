//! Commit identifier strategies
//!
//! ## Schemes
//!
//! - `timestamp` (default): the epoch second of the commit. Two commits issued
//!   within the same second get the same id and the second one fails when its
//!   directory already exists.
//! - `content`: SHA-1 over every index path and its staged bytes, in index
//!   order. Committing an unchanged stage reproduces an existing id and fails
//!   the same way, which turns the collision into deduplication. These ids are
//!   not ordered by time.

use crate::areas::stage::Stage;
use crate::artifacts::commit::commit_id::CommitId;
use crate::errors::{Result, UgitError};
use chrono::{DateTime, FixedOffset};
use sha1::{Digest, Sha1};
use std::path::PathBuf;
use std::str::FromStr;

/// Inputs available to a generator when a commit starts
pub struct IdSeed<'a> {
    pub timestamp: DateTime<FixedOffset>,
    pub paths: &'a [PathBuf],
    pub stage: &'a Stage,
}

pub trait IdentifierGenerator {
    fn generate(&self, seed: &IdSeed) -> Result<CommitId>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIdGenerator;

impl IdentifierGenerator for TimestampIdGenerator {
    fn generate(&self, seed: &IdSeed) -> Result<CommitId> {
        Ok(CommitId::new(seed.timestamp.timestamp().to_string()))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ContentHashIdGenerator;

impl IdentifierGenerator for ContentHashIdGenerator {
    fn generate(&self, seed: &IdSeed) -> Result<CommitId> {
        let mut hasher = Sha1::new();

        for path in seed.paths {
            let data = seed.stage.read(path)?;

            hasher.update(path.as_os_str().as_encoded_bytes());
            hasher.update([0u8]);
            hasher.update((data.len() as u64).to_be_bytes());
            hasher.update(&data);
        }

        Ok(CommitId::new(format!("{:x}", hasher.finalize())))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum IdScheme {
    #[default]
    Timestamp,
    Content,
}

impl IdScheme {
    pub fn generator(&self) -> Box<dyn IdentifierGenerator> {
        match self {
            IdScheme::Timestamp => Box::new(TimestampIdGenerator),
            IdScheme::Content => Box::new(ContentHashIdGenerator),
        }
    }
}

impl FromStr for IdScheme {
    type Err = UgitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "timestamp" => Ok(IdScheme::Timestamp),
            "content" => Ok(IdScheme::Content),
            other => Err(UgitError::InvalidConfig(format!(
                "unknown id scheme '{}', expected 'timestamp' or 'content'",
                other
            ))),
        }
    }
}
