//! Time source for commits
//!
//! A single reading of the clock feeds both the timestamp identifier and the
//! `Fecha:` line of the history log, so the two always agree.

use chrono::{DateTime, FixedOffset};

pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the local timezone
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        chrono::Local::now().fixed_offset()
    }
}

/// Clock pinned to one instant
///
/// Used when `UGIT_COMMITTER_DATE` is set, and by tests that need two commits
/// to land in the same second.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        FixedClock { instant }
    }

    /// Parse the formats accepted for `UGIT_COMMITTER_DATE`
    ///
    /// Either RFC 2822 or `%Y-%m-%d %H:%M:%S %z`.
    pub fn parse(date_str: &str) -> Option<Self> {
        chrono::DateTime::parse_from_rfc2822(date_str)
            .or_else(|_| chrono::DateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S %z"))
            .ok()
            .map(FixedClock::new)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}
