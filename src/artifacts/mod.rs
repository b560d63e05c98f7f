//! Value types shared by the repository areas and commands
//!
//! - `commit`: commit identifiers, id generation strategies and clocks
//! - `core`: configuration and output plumbing
//! - `log`: history log entries

pub mod commit;
pub mod core;
pub mod log;
