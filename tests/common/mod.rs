#![allow(dead_code)]


/// Date every commit uses unless a test pins another one
pub const DEFAULT_COMMITTER_DATE: &str = "2023-01-01 12:00:00 +0000";

/// `DEFAULT_COMMITTER_DATE` as the id the timestamp scheme derives from it
pub const DEFAULT_COMMIT_ID: &str = "1672574400";
