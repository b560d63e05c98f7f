//! Repository configuration
//!
//! Read from the environment at the command boundary:
//!
//! - `UGIT_ID_SCHEME`: `timestamp` (default) or `content`
//! - `UGIT_COMMITTER_DATE`: pins the commit clock, RFC 2822 or
//!   `%Y-%m-%d %H:%M:%S %z`
//! - `NO_PAGER`: any value disables the pager for `log`
//!
//! `UGIT_LOG` (the tracing filter) is read by the binary directly.

use crate::artifacts::commit::clock::{Clock, FixedClock, SystemClock};
use crate::artifacts::commit::id_generator::{IdScheme, IdentifierGenerator};
use crate::errors::{Result, UgitError};

pub const ID_SCHEME_VAR: &str = "UGIT_ID_SCHEME";
pub const COMMITTER_DATE_VAR: &str = "UGIT_COMMITTER_DATE";
pub const NO_PAGER_VAR: &str = "NO_PAGER";

#[derive(Debug, Clone, Copy)]
pub struct RepositoryConfig {
    pub id_scheme: IdScheme,
    pub committer_date: Option<FixedClock>,
    pub use_pager: bool,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            id_scheme: IdScheme::Timestamp,
            committer_date: None,
            use_pager: true,
        }
    }
}

impl RepositoryConfig {
    pub fn load_from_env() -> Result<Self> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn load_from<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let id_scheme = match lookup(ID_SCHEME_VAR) {
            Some(value) => value.parse()?,
            None => IdScheme::default(),
        };

        let committer_date = match lookup(COMMITTER_DATE_VAR) {
            Some(value) => Some(FixedClock::parse(&value).ok_or_else(|| {
                UgitError::InvalidConfig(format!(
                    "{} '{}' is neither RFC 2822 nor '%Y-%m-%d %H:%M:%S %z'",
                    COMMITTER_DATE_VAR, value
                ))
            })?),
            None => None,
        };

        Ok(RepositoryConfig {
            id_scheme,
            committer_date,
            use_pager: lookup(NO_PAGER_VAR).is_none(),
        })
    }

    pub fn id_generator(&self) -> Box<dyn IdentifierGenerator> {
        self.id_scheme.generator()
    }

    pub fn clock(&self) -> Box<dyn Clock> {
        match self.committer_date {
            Some(clock) => Box::new(clock),
            None => Box::new(SystemClock),
        }
    }
}
